use std::f64::consts::PI;

use crate::foundation::core::{BezPath, Point};
use crate::foundation::error::{FrameboothError, FrameboothResult};

/// Ratio between the inner and outer star radius.
pub const STAR_INNER_RATIO: f64 = 0.5;

/// Minimum number of outer tips for a star.
pub const MIN_STAR_POINTS: u32 = 3;

/// Vertices of an `points`-tipped star centered on `center`.
///
/// Returns `2 * points` vertices alternating between the outer radius (even
/// indices) and `radius / 2` (odd indices). Vertex 0 points straight up and the
/// sequence proceeds clockwise (y grows downward) in steps of `PI / points`.
pub fn star_vertices(center: Point, radius: f64, points: u32) -> FrameboothResult<Vec<Point>> {
    if points < MIN_STAR_POINTS {
        return Err(FrameboothError::validation(format!(
            "star needs at least {MIN_STAR_POINTS} points, got {points}"
        )));
    }
    if !radius.is_finite() || radius < 0.0 {
        return Err(FrameboothError::validation(
            "star radius must be finite and >= 0",
        ));
    }

    let n = f64::from(points);
    let count = points as usize * 2;
    let mut out = Vec::with_capacity(count);
    for i in 0..count {
        let r = if i % 2 == 0 {
            radius
        } else {
            radius * STAR_INNER_RATIO
        };
        let angle = (i as f64) * PI / n - PI / 2.0;
        out.push(Point::new(
            center.x + r * angle.cos(),
            center.y + r * angle.sin(),
        ));
    }
    Ok(out)
}

/// Closed fill path for a star; see [`star_vertices`].
pub fn star_path(center: Point, radius: f64, points: u32) -> FrameboothResult<BezPath> {
    let verts = star_vertices(center, radius, points)?;
    let mut path = BezPath::new();
    for (i, p) in verts.into_iter().enumerate() {
        if i == 0 {
            path.move_to(p);
        } else {
            path.line_to(p);
        }
    }
    path.close_path();
    Ok(path)
}

#[cfg(test)]
#[path = "../../tests/unit/shapes/star.rs"]
mod tests;
