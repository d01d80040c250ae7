use super::*;

#[test]
fn contains_includes_edges() {
    let r = Rect::new(0.0, 0.0, 10.0, 10.0);
    assert!(contains_inclusive(r, Point::new(0.0, 0.0)));
    assert!(contains_inclusive(r, Point::new(10.0, 10.0)));
    assert!(contains_inclusive(r, Point::new(5.0, 5.0)));
    assert!(!contains_inclusive(r, Point::new(10.01, 5.0)));
    assert!(!contains_inclusive(r, Point::new(5.0, -0.01)));
}

#[test]
fn scale_rect_doubles_every_field() {
    let r = Rect::from_origin_size((3.0, 4.0), (5.0, 6.0));
    let s = scale_rect(r, Vec2::new(2.0, 2.0));
    assert_eq!(s, Rect::from_origin_size((6.0, 8.0), (10.0, 12.0)));
}

#[test]
fn uniform_resize_keeps_origin_and_aspect() {
    let r = Rect::from_origin_size((3.0, 4.0), (50.0, 25.0));
    let s = scale_size_uniform(r, 1.5);
    assert_eq!(s.origin(), r.origin());
    assert_eq!(s.width(), 75.0);
    assert_eq!(s.height(), 37.5);
}
