use std::sync::Arc;

use crate::{
    assets::{PreparedImage, photo::Photo, store::PreparedTemplateAssets},
    compile::{
        frame::frame_geometry,
        plan::{compile_composite, compile_preview},
    },
    foundation::error::{FrameboothError, FrameboothResult},
    foundation::math::premultiply_rgba8_in_place,
    layout::config::LayoutType,
    render::{BackendKind, FrameRGBA, RenderBackend, RenderInputs, create_backend},
    template::model::Template,
};

pub(crate) mod settings;

use settings::CompositeSettings;

/// Composites captured photos with an optional border template.
///
/// Each call allocates its own output frame; nothing is shared between calls
/// apart from the settings.
pub struct Compositor {
    settings: CompositeSettings,
    backend: Box<dyn RenderBackend>,
}

impl std::fmt::Debug for Compositor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Compositor")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl Default for Compositor {
    fn default() -> Self {
        Self::new(CompositeSettings::default())
    }
}

impl Compositor {
    /// Compositor on the CPU backend.
    pub fn new(settings: CompositeSettings) -> Self {
        Self::with_backend(settings, create_backend(BackendKind::Cpu))
    }

    /// Compositor on a caller-supplied backend.
    pub fn with_backend(settings: CompositeSettings, backend: Box<dyn RenderBackend>) -> Self {
        Self { settings, backend }
    }

    /// Active settings.
    pub fn settings(&self) -> &CompositeSettings {
        &self.settings
    }

    /// Composite `photos` for `layout`, decoding the template's payloads first.
    ///
    /// `photos` must hold exactly [`LayoutType::photo_count`] entries. A template
    /// authored for another layout is ignored.
    pub fn compose(
        &mut self,
        layout: LayoutType,
        photos: &[Photo],
        template: Option<&Template>,
    ) -> FrameboothResult<FrameRGBA> {
        let assets = match template {
            Some(t) if t.layout_type == layout => PreparedTemplateAssets::prepare(t),
            _ => PreparedTemplateAssets::default(),
        };
        self.compose_prepared(layout, photos, template, &assets)
    }

    /// Like [`Self::compose`] with payloads already decoded, so one template
    /// can be reused across many captures.
    #[tracing::instrument(
        skip(self, photos, template, assets),
        fields(photos = photos.len(), template = template.map(|t| t.id.as_str()))
    )]
    pub fn compose_prepared(
        &mut self,
        layout: LayoutType,
        photos: &[Photo],
        template: Option<&Template>,
        assets: &PreparedTemplateAssets,
    ) -> FrameboothResult<FrameRGBA> {
        let expected = layout.photo_count();
        if photos.len() != expected {
            return Err(FrameboothError::validation(format!(
                "{layout} layout needs {expected} photo(s), got {}",
                photos.len()
            )));
        }
        let first = &photos[0];
        let frame = frame_geometry(layout, first.width(), first.height())?;

        let prepared = photos
            .iter()
            .map(|p| self.prepare_photo(p, frame.photo_px))
            .collect::<Vec<_>>();

        let plan = compile_composite(
            layout,
            &frame,
            template,
            assets,
            self.settings.default_background,
        )?;
        if !plan.skipped.is_empty() {
            tracing::warn!(skipped = ?plan.skipped, "image elements omitted from composite");
        }

        self.backend.render_plan(
            &plan,
            RenderInputs {
                photos: &prepared,
                assets,
            },
        )
    }

    /// Render the editor preview of `template` at design resolution.
    #[tracing::instrument(skip(self, template), fields(template = %template.id))]
    pub fn render_preview(&mut self, template: &Template) -> FrameboothResult<FrameRGBA> {
        let assets = PreparedTemplateAssets::prepare(template);
        let plan = compile_preview(template, &assets)?;
        self.backend.render_plan(
            &plan,
            RenderInputs {
                photos: &[],
                assets: &assets,
            },
        )
    }

    fn prepare_photo(&self, photo: &Photo, (w, h): (u32, u32)) -> PreparedImage {
        let src = photo.as_image();
        let mut rgba = if src.dimensions() == (w, h) {
            src.as_raw().clone()
        } else {
            image::imageops::resize(src, w, h, self.settings.photo_filter.to_image_filter())
                .into_raw()
        };
        premultiply_rgba8_in_place(&mut rgba);
        PreparedImage {
            width: w,
            height: h,
            rgba8_premul: Arc::new(rgba),
        }
    }
}

/// One-shot composite with default settings on the CPU backend.
pub fn compose(
    layout: LayoutType,
    photos: &[Photo],
    template: Option<&Template>,
) -> FrameboothResult<FrameRGBA> {
    Compositor::default().compose(layout, photos, template)
}

/// One-shot editor preview with default settings.
pub fn render_preview(template: &Template) -> FrameboothResult<FrameRGBA> {
    Compositor::default().render_preview(template)
}

#[cfg(test)]
#[path = "../tests/unit/pipeline/compositor.rs"]
mod tests;
