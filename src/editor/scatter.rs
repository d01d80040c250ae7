use crate::{
    foundation::core::{Rect, Rgba8},
    foundation::math::Rng64,
    layout::config::LayoutConfig,
    template::model::Element,
};

/// Stars added per scatter.
pub const SCATTER_COUNT: usize = 8;

/// Colors scattered stars are drawn from.
pub const SCATTER_PALETTE: [Rgba8; 6] = [
    Rgba8::rgb(0xFF, 0xD7, 0x00),
    Rgba8::rgb(0xFF, 0xA5, 0x00),
    Rgba8::rgb(0xFF, 0x6B, 0x6B),
    Rgba8::rgb(0x4E, 0xCD, 0xC4),
    Rgba8::rgb(0x45, 0xB7, 0xD1),
    Rgba8::rgb(0x96, 0xCE, 0xB4),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Zone {
    Top,
    Bottom,
    Left,
    Right,
}

/// Generate [`SCATTER_COUNT`] small stars in the border around the photo areas.
///
/// Each star picks one of four zones (above, below, left of, or right of the
/// photos), a center inside it, a size in `[15, 40)`, any rotation, opacity in
/// `[0.6, 1)`, and 4 or 5 tips. `next_id` names each star.
pub fn scatter_stars(
    cfg: &LayoutConfig,
    rng: &mut Rng64,
    mut next_id: impl FnMut(usize) -> String,
) -> Vec<Element> {
    let photo_top = cfg.photo_areas.first().map_or(cfg.top_padding, |r| r.y0);
    let photo_bottom = cfg
        .photo_areas
        .last()
        .map_or(cfg.canvas_height - cfg.bottom_padding, |r| r.y1);
    let w = cfg.canvas_width;

    (0..SCATTER_COUNT)
        .map(|i| {
            let zone = [Zone::Top, Zone::Bottom, Zone::Left, Zone::Right][rng.index(4)];
            let (cx, cy) = match zone {
                Zone::Top => (
                    rng.range(20.0, w - 20.0),
                    rng.range(5.0, cfg.top_padding - 15.0),
                ),
                Zone::Bottom => (
                    rng.range(20.0, w - 20.0),
                    photo_bottom + rng.range(10.0, cfg.bottom_padding - 30.0),
                ),
                Zone::Left => (
                    rng.range(5.0, cfg.side_padding - 15.0),
                    photo_top + rng.range(0.0, photo_bottom - photo_top - 30.0),
                ),
                Zone::Right => (
                    w - cfg.side_padding + rng.range(5.0, cfg.side_padding - 15.0),
                    photo_top + rng.range(0.0, photo_bottom - photo_top - 30.0),
                ),
            };

            let size = rng.range(15.0, 40.0);
            let rotation = rng.range(0.0, 360.0);
            let opacity = rng.range(0.6, 1.0);
            let color = SCATTER_PALETTE[rng.index(SCATTER_PALETTE.len())];
            let points = if rng.next_f64_01() > 0.5 { 5 } else { 4 };

            let bounds = Rect::from_origin_size((cx - size / 2.0, cy - size / 2.0), (size, size));
            Element::star(next_id(i), bounds, color, points)
                .with_rotation(rotation)
                .with_opacity(opacity)
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/editor/scatter.rs"]
mod tests;
