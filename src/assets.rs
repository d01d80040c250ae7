use std::sync::Arc;

pub(crate) mod decode;
pub(crate) mod photo;
pub(crate) mod store;
pub(crate) mod svg_raster;

/// Decoded raster image ready for rendering.
#[derive(Clone, Debug)]
pub struct PreparedImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Premultiplied RGBA8, row-major, tightly packed.
    pub rgba8_premul: Arc<Vec<u8>>,
}

/// Parsed SVG document, rasterized at draw size by the renderer.
#[derive(Clone, Debug)]
pub struct PreparedSvg {
    /// Parsed `usvg` tree.
    pub tree: Arc<usvg::Tree>,
}

/// Decoded payload of an image element.
#[derive(Clone, Debug)]
pub enum PreparedPayload {
    /// Raster formats handled by `image`.
    Raster(PreparedImage),
    /// Vector payload.
    Svg(PreparedSvg),
}
