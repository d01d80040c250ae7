use super::*;

#[test]
fn single_layout_geometry() {
    let c = layout_for(LayoutType::Single);
    assert_eq!((c.canvas_width, c.canvas_height), (400.0, 360.0));
    assert_eq!(
        (c.top_padding, c.side_padding, c.bottom_padding),
        (40.0, 40.0, 120.0)
    );
    assert_eq!(c.photo_areas, vec![Rect::new(40.0, 40.0, 360.0, 240.0)]);
}

#[test]
fn strip_layout_stacks_four_equal_slots() {
    let c = layout_for(LayoutType::Strip4);
    assert_eq!((c.canvas_width, c.canvas_height), (250.0, 700.0));
    assert_eq!(c.photo_areas.len(), 4);
    for (i, a) in c.photo_areas.iter().enumerate() {
        assert_eq!(a.x0, 40.0);
        assert_eq!(a.width(), 170.0);
        assert_eq!(a.height(), 115.0);
        assert_eq!(a.y0, 40.0 + i as f64 * 130.0);
    }
}

#[test]
fn layout_canvas_matches_design_size_constant() {
    for layout in [LayoutType::Single, LayoutType::Strip4] {
        assert_eq!(layout_for(layout).canvas_size(), layout.design_size());
    }
}

#[test]
fn layout_type_serde_uses_legacy_codes_and_accepts_names() {
    assert_eq!(serde_json::to_string(&LayoutType::Single).unwrap(), "\"1\"");
    assert_eq!(serde_json::to_string(&LayoutType::Strip4).unwrap(), "\"4\"");
    let s: LayoutType = serde_json::from_str("\"strip4\"").unwrap();
    assert_eq!(s, LayoutType::Strip4);
}
