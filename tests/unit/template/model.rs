use super::*;

fn sample() -> Template {
    Template {
        id: "template-1".to_string(),
        name: "Gold stars".to_string(),
        background_color: Rgba8::rgb(0xFF, 0xB6, 0xC1),
        layout_type: LayoutType::Single,
        elements: vec![
            Element::star(
                "star-1",
                Rect::from_origin_size((180.0, 280.0), (50.0, 50.0)),
                DEFAULT_STAR_COLOR,
                5,
            )
            .with_opacity(0.9)
            .with_rotation(-7.123456789012345),
            Element::image(
                "img-1",
                Rect::from_origin_size((0.1, 0.2), (60.0, 60.0)),
                EmbeddedImage::from_bytes("image/png", &[1, 2, 3]),
            ),
        ],
        created_at: 1_700_000_000_123,
    }
}

#[test]
fn json_round_trip_is_lossless() {
    let t = sample();
    let s = t.to_json().unwrap();
    let back = Template::from_json(&s).unwrap();
    assert_eq!(back, t);
    assert_eq!(
        back.elements[0].rotation.to_bits(),
        t.elements[0].rotation.to_bits()
    );
}

#[test]
fn wire_format_uses_legacy_field_names() {
    let v: serde_json::Value = serde_json::from_str(&sample().to_json().unwrap()).unwrap();
    assert_eq!(v["backgroundColor"], "#ffb6c1");
    assert_eq!(v["layoutType"], "1");
    assert_eq!(v["createdAt"], 1_700_000_000_123u64);
    assert_eq!(v["elements"][0]["type"], "star");
    assert_eq!(v["elements"][0]["points"], 5);
    assert_eq!(v["elements"][1]["type"], "image");
    assert!(v["elements"][1]["src"].as_str().unwrap().starts_with("data:"));
}

#[test]
fn parses_records_with_missing_optional_fields() {
    let s = r##"{
        "id": "t", "name": "n", "backgroundColor": "#FFFFFF",
        "elements": [{"id": "s", "type": "star", "x": 1, "y": 2, "width": 3, "height": 3,
                      "rotation": 0, "opacity": 1}]
    }"##;
    let t = Template::from_json(s).unwrap();
    assert_eq!(t.layout_type, LayoutType::Single);
    assert_eq!(
        t.elements[0].kind(),
        &ElementKind::Star {
            color: DEFAULT_STAR_COLOR,
            points: DEFAULT_STAR_POINTS
        }
    );
}

#[test]
fn validation_rejects_bad_geometry() {
    let mut t = sample();
    t.elements[0].width = 0.0;
    assert!(t.validate().is_err());

    let mut t = sample();
    t.elements[0].opacity = 1.5;
    assert!(t.validate().is_err());

    let mut t = sample();
    t.elements[1].x = f64::INFINITY;
    assert!(t.validate().is_err());
}

#[test]
fn validation_rejects_duplicate_ids_and_small_stars() {
    let mut t = sample();
    t.elements[1].id = "star-1".to_string();
    assert!(t.validate().is_err());

    let t = Template {
        elements: vec![Element::star(
            "s",
            Rect::from_origin_size((0.0, 0.0), (10.0, 10.0)),
            Rgba8::BLACK,
            2,
        )],
        ..sample()
    };
    assert!(t.validate().is_err());
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = Template::from_json("{\"id\": 3}").unwrap_err();
    assert!(matches!(err, FrameboothError::Serde(_)));
}

#[test]
fn star_color_changes_only_for_stars() {
    let mut t = sample();
    assert!(t.elements[0].set_star_color(Rgba8::BLACK));
    assert!(!t.elements[1].set_star_color(Rgba8::BLACK));
    assert!(!t.elements[1].is_star());
}
