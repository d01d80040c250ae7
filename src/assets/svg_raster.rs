use crate::foundation::error::{FrameboothError, FrameboothResult};

// Guard against pathological allocations from tiny elements on huge canvases.
const MAX_DIM: u32 = 16_384;

/// Pixel size at which to rasterize an SVG drawn into a `width_px x height_px` box.
pub fn svg_raster_size(width_px: f64, height_px: f64) -> FrameboothResult<(u32, u32)> {
    fn to_px(v: f64) -> FrameboothResult<u32> {
        if !v.is_finite() || v <= 0.0 {
            return Err(FrameboothError::render("svg target has invalid width/height"));
        }
        Ok((v.ceil() as u32).max(1))
    }

    let w = to_px(width_px)?;
    let h = to_px(height_px)?;
    if w > MAX_DIM || h > MAX_DIM {
        return Err(FrameboothError::render(format!(
            "svg raster size too large: {w}x{h} (max {MAX_DIM}x{MAX_DIM})"
        )));
    }
    Ok((w, h))
}

/// Rasterize `tree` stretched to exactly `width x height` pixels.
pub fn rasterize_svg_to_premul_rgba8(
    tree: &usvg::Tree,
    width: u32,
    height: u32,
) -> FrameboothResult<Vec<u8>> {
    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| FrameboothError::render("failed to allocate svg pixmap"))?;

    let sx = (width as f32) / tree.size().width();
    let sy = (height as f32) / tree.size().height();
    let xform = resvg::tiny_skia::Transform::from_scale(sx, sy);

    resvg::render(tree, xform, &mut pixmap.as_mut());
    Ok(pixmap.data().to_vec())
}

#[cfg(test)]
#[path = "../../tests/unit/assets/svg_raster.rs"]
mod tests;
