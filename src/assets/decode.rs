use std::sync::Arc;

use anyhow::Context;

use crate::{
    assets::{PreparedImage, PreparedPayload, PreparedSvg},
    foundation::error::{FrameboothError, FrameboothResult},
    foundation::math::premultiply_rgba8_in_place,
    template::payload::EmbeddedImage,
};

/// Largest raster side the renderer can sample from.
pub const MAX_RASTER_SIDE: u32 = u16::MAX as u32;

/// Decode encoded image bytes and convert to premultiplied RGBA8.
///
/// Rasters with a side longer than [`MAX_RASTER_SIDE`] are rejected as
/// [`FrameboothError::Decode`].
pub fn decode_image(bytes: &[u8]) -> FrameboothResult<PreparedImage> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    let (width, height) = (dyn_img.width(), dyn_img.height());
    if width > MAX_RASTER_SIDE || height > MAX_RASTER_SIDE {
        return Err(FrameboothError::decode(format!(
            "image {width}x{height} exceeds {MAX_RASTER_SIDE}px per side"
        )));
    }
    let rgba = dyn_img.to_rgba8();

    let mut rgba8_premul = rgba.into_raw();
    premultiply_rgba8_in_place(&mut rgba8_premul);

    Ok(PreparedImage {
        width,
        height,
        rgba8_premul: Arc::new(rgba8_premul),
    })
}

/// Parse SVG bytes into a prepared `usvg` tree.
pub fn parse_svg(bytes: &[u8]) -> FrameboothResult<PreparedSvg> {
    let opts = usvg::Options::default();
    let tree = usvg::Tree::from_data(bytes, &opts).context("parse svg tree")?;
    Ok(PreparedSvg {
        tree: Arc::new(tree),
    })
}

/// Decode an embedded element payload, dispatching on its declared MIME type.
///
/// Every failure is reported as [`FrameboothError::Decode`].
pub fn decode_payload(src: &EmbeddedImage) -> FrameboothResult<PreparedPayload> {
    let decoded = src.decode_bytes().and_then(|bytes| {
        if src.is_svg() {
            parse_svg(&bytes).map(PreparedPayload::Svg)
        } else {
            decode_image(&bytes).map(PreparedPayload::Raster)
        }
    });
    decoded.map_err(|err| match err {
        FrameboothError::Decode(_) => err,
        other => FrameboothError::decode(format!("{other:#}")),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
