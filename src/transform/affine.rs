//! Affine transform helpers.
//!
//! Element geometry is authored in design coordinates around the element's own
//! bounding-box center. Rendering composes, right to left:
//! `T(scaled center) * R(rotation) * S(scale)`, so rotation always pivots on the
//! element center and never on the canvas origin.

use crate::foundation::core::{Affine, Rect, Vec2};

/// Rotation in radians from degrees (unrestricted range).
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg.to_radians()
}

/// Rotate about `rect`'s center by `rotation_deg`.
pub fn rotate_about_center(rect: Rect, rotation_deg: f64) -> Affine {
    Affine::rotate_about(deg_to_rad(rotation_deg), rect.center())
}

/// Map a design-space element into output space.
///
/// The returned affine takes points in the element's local frame (origin at the
/// unscaled bounding-box center, design units) to output pixels: it scales by
/// `scale`, rotates by `rotation_deg`, then translates to the scaled center.
pub fn element_to_output(design: Rect, rotation_deg: f64, scale: Vec2) -> Affine {
    let center = design.center();
    let scaled_center = Vec2::new(center.x * scale.x, center.y * scale.y);
    Affine::translate(scaled_center)
        * Affine::rotate(deg_to_rad(rotation_deg))
        * Affine::scale_non_uniform(scale.x, scale.y)
}

/// Local-frame rectangle for an element of the given design size.
pub fn local_bounds(design: Rect) -> Rect {
    let half = Vec2::new(design.width() / 2.0, design.height() / 2.0);
    Rect::new(-half.x, -half.y, half.x, half.y)
}

#[cfg(test)]
#[path = "../../tests/unit/transform/affine.rs"]
mod tests;
