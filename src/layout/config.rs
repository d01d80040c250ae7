use crate::foundation::core::{Rect, Size};

/// Photo layout of a template: one photo, or a vertical strip of four.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum LayoutType {
    /// One photo slot.
    #[default]
    #[serde(rename = "1", alias = "single")]
    Single,
    /// Four photo slots stacked vertically.
    #[serde(rename = "4", alias = "strip4")]
    Strip4,
}

impl LayoutType {
    /// Number of photos this layout consumes.
    pub fn photo_count(self) -> usize {
        match self {
            Self::Single => 1,
            Self::Strip4 => 4,
        }
    }

    /// Design-time canvas size in design units.
    pub fn design_size(self) -> Size {
        match self {
            Self::Single => Size::new(400.0, 360.0),
            Self::Strip4 => Size::new(250.0, 700.0),
        }
    }
}

impl std::fmt::Display for LayoutType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Single => f.write_str("single"),
            Self::Strip4 => f.write_str("strip4"),
        }
    }
}

/// Design-unit canvas geometry for a layout.
///
/// These values describe the editor's authoring canvas. They are independent of
/// the pixel padding the compositor applies around captured photos.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutConfig {
    /// Layout this configuration was derived from.
    pub layout: LayoutType,
    /// Design canvas width.
    pub canvas_width: f64,
    /// Design canvas height.
    pub canvas_height: f64,
    /// Space above the first photo slot.
    pub top_padding: f64,
    /// Space left and right of the photo slots.
    pub side_padding: f64,
    /// Caption strip below the photos.
    pub bottom_padding: f64,
    /// Gap between stacked slots (zero for single).
    pub photo_padding: f64,
    /// Reserved photo slot rectangles, top to bottom.
    pub photo_areas: Vec<Rect>,
}

impl LayoutConfig {
    /// Design canvas size.
    pub fn canvas_size(&self) -> Size {
        Size::new(self.canvas_width, self.canvas_height)
    }

    /// Full design canvas rectangle.
    pub fn canvas_rect(&self) -> Rect {
        Rect::from_origin_size((0.0, 0.0), self.canvas_size())
    }
}

/// Derive the design-unit canvas and slot geometry for `layout`.
pub fn layout_for(layout: LayoutType) -> LayoutConfig {
    const TOP: f64 = 40.0;
    const SIDE: f64 = 40.0;
    const BOTTOM: f64 = 120.0;

    let size = layout.design_size();
    match layout {
        LayoutType::Single => LayoutConfig {
            layout,
            canvas_width: size.width,
            canvas_height: size.height,
            top_padding: TOP,
            side_padding: SIDE,
            bottom_padding: BOTTOM,
            photo_padding: 0.0,
            photo_areas: vec![Rect::from_origin_size((SIDE, TOP), (320.0, 200.0))],
        },
        LayoutType::Strip4 => {
            const PHOTO_W: f64 = 170.0;
            const PHOTO_H: f64 = 115.0;
            const GAP: f64 = 15.0;
            let photo_areas = (0..4)
                .map(|i| {
                    let y = TOP + f64::from(i) * (PHOTO_H + GAP);
                    Rect::from_origin_size((SIDE, y), (PHOTO_W, PHOTO_H))
                })
                .collect();
            LayoutConfig {
                layout,
                canvas_width: size.width,
                canvas_height: size.height,
                top_padding: TOP,
                side_padding: SIDE,
                bottom_padding: BOTTOM,
                photo_padding: GAP,
                photo_areas,
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/config.rs"]
mod tests;
