use super::*;

#[test]
fn single_frame_adds_polaroid_padding() {
    let g = frame_geometry(LayoutType::Single, 800, 600).unwrap();
    assert_eq!(
        g.canvas,
        Canvas {
            width: 880,
            height: 760
        }
    );
    assert_eq!(g.slots, vec![Rect::new(40.0, 40.0, 840.0, 640.0)]);
    assert_eq!(g.photo_px, (800, 600));
}

#[test]
fn strip_frame_downscales_and_stacks() {
    let g = frame_geometry(LayoutType::Strip4, 640, 480).unwrap();
    assert_eq!(
        g.canvas,
        Canvas {
            width: 336,
            height: 973
        }
    );
    assert_eq!(g.photo_px, (256, 192));
    assert_eq!(g.slots.len(), 4);
    for (i, s) in g.slots.iter().enumerate() {
        assert_eq!(s.x0, 40.0);
        assert_eq!(s.y0, 40.0 + i as f64 * (192.0 + 15.0));
        assert_eq!((s.width(), s.height()), (256.0, 192.0));
    }
}

#[test]
fn strip_frame_truncates_fractional_canvas() {
    let g = frame_geometry(LayoutType::Strip4, 1001, 701).unwrap();
    // 1001 / 2.5 = 400.4, 701 / 2.5 = 280.4
    assert_eq!(g.canvas.width, 480);
    assert_eq!(g.canvas.height, (4.0f64 * 280.4 + 45.0 + 160.0).floor() as u32);
    assert_eq!(g.photo_px, (400, 280));
}

#[test]
fn zero_sized_photos_are_rejected() {
    assert!(frame_geometry(LayoutType::Single, 0, 10).is_err());
    assert!(frame_geometry(LayoutType::Strip4, 10, 0).is_err());
}

#[test]
fn canvas_beyond_renderer_limit_is_a_validation_error() {
    // 65500 + 2 * 40 overflows the canvas side limit.
    assert!(matches!(
        frame_geometry(LayoutType::Single, 65_500, 10),
        Err(FrameboothError::Validation(_))
    ));
    assert!(matches!(
        frame_geometry(LayoutType::Single, 10, 70_000),
        Err(FrameboothError::Validation(_))
    ));
    // 4 * (41000 / 2.5) = 65600 before padding.
    assert!(matches!(
        frame_geometry(LayoutType::Strip4, 100, 41_000),
        Err(FrameboothError::Validation(_))
    ));
    let g = frame_geometry(LayoutType::Single, MAX_CANVAS_SIDE - 80, 10).unwrap();
    assert_eq!(g.canvas.width, MAX_CANVAS_SIDE);
}
