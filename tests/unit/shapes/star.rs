use super::*;

const EPS: f64 = 1e-9;

fn segments_cross(a: Point, b: Point, c: Point, d: Point) -> bool {
    fn orient(p: Point, q: Point, r: Point) -> f64 {
        (q.x - p.x) * (r.y - p.y) - (q.y - p.y) * (r.x - p.x)
    }
    let o1 = orient(a, b, c);
    let o2 = orient(a, b, d);
    let o3 = orient(c, d, a);
    let o4 = orient(c, d, b);
    o1 * o2 < -EPS && o3 * o4 < -EPS
}

#[test]
fn vertex_count_and_radii_alternate() {
    let center = Point::new(12.0, -3.0);
    for n in [3u32, 4, 5, 6, 8] {
        for radius in [1.0, 25.0, 137.5] {
            let v = star_vertices(center, radius, n).unwrap();
            assert_eq!(v.len(), 2 * n as usize);
            for (i, p) in v.iter().enumerate() {
                let d = (*p - center).hypot();
                let want = if i % 2 == 0 { radius } else { radius / 2.0 };
                assert!((d - want).abs() < EPS * radius.max(1.0), "n={n} i={i}");
            }
        }
    }
}

#[test]
fn first_vertex_points_up_and_second_is_clockwise() {
    let v = star_vertices(Point::ORIGIN, 10.0, 5).unwrap();
    assert!((v[0].x).abs() < EPS);
    assert!((v[0].y + 10.0).abs() < EPS);
    // Clockwise on a y-down canvas: the next vertex lies to the right.
    assert!(v[1].x > 0.0);
}

#[test]
fn polygon_is_simple_for_supported_point_counts() {
    for n in [3u32, 4, 5, 6, 8] {
        let v = star_vertices(Point::new(50.0, 50.0), 40.0, n).unwrap();
        let m = v.len();
        for i in 0..m {
            for j in (i + 1)..m {
                // Adjacent edges share a vertex; skip them.
                if j == i + 1 || (i == 0 && j == m - 1) {
                    continue;
                }
                let (a, b) = (v[i], v[(i + 1) % m]);
                let (c, d) = (v[j], v[(j + 1) % m]);
                assert!(!segments_cross(a, b, c, d), "n={n} edges {i},{j} cross");
            }
        }
    }
}

#[test]
fn generator_is_deterministic() {
    let a = star_vertices(Point::new(1.5, 2.5), 9.0, 6).unwrap();
    let b = star_vertices(Point::new(1.5, 2.5), 9.0, 6).unwrap();
    assert_eq!(a, b);
}

#[test]
fn rejects_too_few_points_and_bad_radius() {
    assert!(star_vertices(Point::ORIGIN, 10.0, 2).is_err());
    assert!(star_vertices(Point::ORIGIN, f64::NAN, 5).is_err());
}

#[test]
fn path_is_closed() {
    let path = star_path(Point::ORIGIN, 10.0, 4).unwrap();
    let els = path.elements();
    assert_eq!(els.len(), 2 * 4 + 1);
    assert!(matches!(els.last(), Some(kurbo::PathEl::ClosePath)));
}
