//! Rectangle helpers. Hit-testing is axis-aligned and ignores rotation.

use crate::foundation::core::{Point, Rect, Vec2};

/// Inclusive point-in-rectangle test (edges count as inside).
pub fn contains_inclusive(rect: Rect, p: Point) -> bool {
    p.x >= rect.x0 && p.x <= rect.x1 && p.y >= rect.y0 && p.y <= rect.y1
}

/// Scale position and size independently per axis (design → output mapping).
pub fn scale_rect(rect: Rect, scale: Vec2) -> Rect {
    Rect::new(
        rect.x0 * scale.x,
        rect.y0 * scale.y,
        rect.x1 * scale.x,
        rect.y1 * scale.y,
    )
}

/// Aspect-locked resize that keeps the top-left corner fixed.
pub fn scale_size_uniform(rect: Rect, factor: f64) -> Rect {
    Rect::from_origin_size(rect.origin(), rect.size() * factor)
}

#[cfg(test)]
#[path = "../../tests/unit/transform/rect.rs"]
mod tests;
