//! Pixel geometry of the polaroid frame placed around captured photos.
//!
//! These constants are absolute output pixels. They are separate
//! from the design-unit padding of [`crate::layout_for`]; templates are mapped
//! onto the resulting canvas by per-axis ratio, not by matching paddings.

use crate::{
    foundation::core::{Canvas, Rect},
    foundation::error::{FrameboothError, FrameboothResult},
    layout::config::LayoutType,
};

/// Fixed pixel padding of the output frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FramePadding {
    /// Above the first photo.
    pub top: u32,
    /// Left and right of the photos.
    pub side: u32,
    /// Caption strip under the last photo.
    pub bottom: u32,
    /// Between stacked strip photos.
    pub photo_gap: u32,
}

/// Polaroid padding applied to every composite, regardless of template.
pub const FRAME_PADDING_PX: FramePadding = FramePadding {
    top: 40,
    side: 40,
    bottom: 120,
    photo_gap: 15,
};

/// Per-axis downscale applied to each photo of a four-photo strip.
pub const STRIP_DOWNSCALE: f64 = 2.5;

/// Output canvas and photo slots for one composite.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameGeometry {
    /// Output canvas size.
    pub canvas: Canvas,
    /// Photo destination rectangles, in capture order.
    pub slots: Vec<Rect>,
    /// Pixel size each photo is resampled to before drawing.
    pub photo_px: (u32, u32),
}

/// Largest output canvas side the renderer accepts.
pub const MAX_CANVAS_SIDE: u32 = u16::MAX as u32;

/// Compute the frame for `layout` given the first photo's native size.
///
/// Fails with [`FrameboothError::Validation`] for empty photos and for frames
/// whose canvas would exceed [`MAX_CANVAS_SIDE`] on either axis.
pub fn frame_geometry(layout: LayoutType, photo_w: u32, photo_h: u32) -> FrameboothResult<FrameGeometry> {
    if photo_w == 0 || photo_h == 0 {
        return Err(FrameboothError::validation(format!(
            "photo dimensions must be > 0, got {photo_w}x{photo_h}"
        )));
    }

    if photo_w > MAX_CANVAS_SIDE || photo_h > MAX_CANVAS_SIDE {
        return Err(FrameboothError::validation(format!(
            "photo {photo_w}x{photo_h} exceeds {MAX_CANVAS_SIDE}px per side"
        )));
    }

    let p = FRAME_PADDING_PX;
    let (top, side, bottom, gap) = (
        f64::from(p.top),
        f64::from(p.side),
        f64::from(p.bottom),
        f64::from(p.photo_gap),
    );

    match layout {
        LayoutType::Single => {
            let canvas = Canvas {
                width: photo_w + 2 * p.side,
                height: photo_h + p.top + p.bottom,
            };
            let slot = Rect::from_origin_size(
                (side, top),
                (f64::from(photo_w), f64::from(photo_h)),
            );
            check_canvas(canvas)?;
            Ok(FrameGeometry {
                canvas,
                slots: vec![slot],
                photo_px: (photo_w, photo_h),
            })
        }
        LayoutType::Strip4 => {
            let pw = f64::from(photo_w) / STRIP_DOWNSCALE;
            let ph = f64::from(photo_h) / STRIP_DOWNSCALE;
            // Fractional canvas sizes truncate, like assigning them to a raster surface.
            let canvas = Canvas {
                width: (pw + 2.0 * side).floor() as u32,
                height: (4.0 * ph + 3.0 * gap + top + bottom).floor() as u32,
            };
            let slots = (0..4)
                .map(|i| Rect::from_origin_size((side, top + f64::from(i) * (ph + gap)), (pw, ph)))
                .collect();
            check_canvas(canvas)?;
            let photo_px = ((pw.round() as u32).max(1), (ph.round() as u32).max(1));
            Ok(FrameGeometry {
                canvas,
                slots,
                photo_px,
            })
        }
    }
}

fn check_canvas(canvas: Canvas) -> FrameboothResult<()> {
    if canvas.width > MAX_CANVAS_SIDE || canvas.height > MAX_CANVAS_SIDE {
        return Err(FrameboothError::validation(format!(
            "canvas {}x{} exceeds {MAX_CANVAS_SIDE}px per side",
            canvas.width, canvas.height
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/compile/frame.rs"]
mod tests;
