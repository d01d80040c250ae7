//! Framebooth composites photo-booth captures with reusable border templates.
//!
//! A [`Template`] is authored once at a fixed design resolution (400x360 for a
//! single photo, 250x700 for a four-photo strip) and applied to output canvases
//! whose size depends on the captured photos.
//!
//! # Pipeline overview
//!
//! 1. **Validate**: photo count and dimensions against the [`LayoutType`]
//! 2. **Prepare**: decode embedded image payloads up front ([`PreparedTemplateAssets`])
//! 3. **Compile**: `Template + photos -> CompositePlan` with geometry already in output pixels
//! 4. **Render**: `CompositePlan -> FrameRGBA` on the CPU backend
//! 5. **Encode** (optional): [`FrameRGBA::encode_png`]
//!
//! Image elements whose payload cannot be decoded are skipped; a template
//! authored for another layout is ignored. Neither is an error.
//!
//! The [`EditorSession`] covers interactive authoring: placing stars and
//! images, hit-testing, dragging, and saving to a [`TemplateLibrary`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod compile;
mod editor;
mod foundation;
mod layout;
mod pipeline;
mod render;
mod shapes;
mod template;

/// Rectangle and affine helpers shared by the editor and the compositor.
pub mod transform;

pub use assets::decode::{MAX_RASTER_SIDE, decode_image, decode_payload, parse_svg};
pub use assets::photo::Photo;
pub use assets::store::PreparedTemplateAssets;
pub use assets::{PreparedImage, PreparedPayload, PreparedSvg};
pub use compile::frame::{
    FRAME_PADDING_PX, FrameGeometry, FramePadding, MAX_CANVAS_SIDE, STRIP_DOWNSCALE,
    frame_geometry,
};
pub use compile::plan::{
    CompositePlan, DrawOp, PLACEHOLDER_COLOR, PhotoPlacement, compile_composite, compile_preview,
};
pub use editor::scatter::{SCATTER_COUNT, SCATTER_PALETTE};
pub use editor::session::{DEFAULT_TEMPLATE_NAME, EditorSession, PointerEvent, PointerPhase};
pub use editor::{BACKGROUND_PRESETS, MAX_ELEMENT_SIZE, MIN_ELEMENT_SIZE, STAR_POINT_PRESETS};
pub use foundation::core::{Affine, BezPath, Canvas, Point, Rect, Rgba8, Size, Vec2};
pub use foundation::error::{FrameboothError, FrameboothResult};
pub use layout::config::{LayoutConfig, LayoutType, layout_for};
pub use pipeline::settings::{
    CompositeSettings, ENV_DEFAULT_BACKGROUND, ENV_PHOTO_FILTER, PhotoFilter,
};
pub use pipeline::{Compositor, compose, render_preview};
pub use render::{BackendKind, FrameRGBA, RenderBackend, RenderInputs, create_backend};
pub use shapes::star::{MIN_STAR_POINTS, STAR_INNER_RATIO, star_path, star_vertices};
pub use template::dsl::TemplateBuilder;
pub use template::model::{DEFAULT_STAR_COLOR, DEFAULT_STAR_POINTS, Element, ElementKind, Template};
pub use template::payload::EmbeddedImage;
pub use template::store::{TemplateLibrary, parse_active_template};
