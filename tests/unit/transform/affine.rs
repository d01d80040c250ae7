use super::*;
use crate::foundation::core::Point;

fn close(a: Point, b: Point) -> bool {
    (a - b).hypot() < 1e-9
}

#[test]
fn rotation_pivots_on_element_center() {
    let r = Rect::new(10.0, 10.0, 30.0, 30.0);
    let a = rotate_about_center(r, 90.0);
    assert!(close(a * r.center(), r.center()));
    assert!(close(a * Point::new(30.0, 20.0), Point::new(20.0, 30.0)));
}

#[test]
fn element_to_output_without_rotation_maps_local_bounds_to_scaled_rect() {
    let design = Rect::from_origin_size((180.0, 280.0), (50.0, 50.0));
    let scale = Vec2::new(2.2, 760.0 / 360.0);
    let a = element_to_output(design, 0.0, scale);
    let out = a.transform_rect_bbox(local_bounds(design));
    assert!((out.x0 - 396.0).abs() < 1e-9);
    assert!((out.y0 - 280.0 * 760.0 / 360.0).abs() < 1e-9);
    assert!((out.width() - 110.0).abs() < 1e-9);
    assert!((out.height() - 50.0 * 760.0 / 360.0).abs() < 1e-9);
}

#[test]
fn element_to_output_keeps_center_fixed_under_rotation() {
    let design = Rect::from_origin_size((0.0, 0.0), (40.0, 20.0));
    let a = element_to_output(design, 33.0, Vec2::new(2.0, 2.0));
    assert!(close(a * Point::ORIGIN, Point::new(40.0, 20.0)));
}

#[test]
fn local_bounds_is_centered() {
    let b = local_bounds(Rect::from_origin_size((5.0, 7.0), (10.0, 4.0)));
    assert_eq!(b, Rect::new(-5.0, -2.0, 5.0, 2.0));
}
