use super::*;
use approx::assert_relative_eq;

fn unit_triangle() -> Triangle {
    Triangle::new(Vec3::ZERO, Vec3::X, Vec3::Y)
}

#[test]
fn test_triangle_area_and_plane() {
    let tri = unit_triangle();
    assert_relative_eq!(tri.area(), 0.5);
    let plane = tri.plane().unwrap();
    assert!(plane.normal.abs_diff_eq(Vec3::Z, 1e-12));
}

#[test]
fn test_triangle_barycentric() {
    let tri = unit_triangle();
    let (u, v, w) = tri.barycentric(Vec3::new(0.25, 0.25, 3.0)).unwrap();
    assert_relative_eq!(u, 0.5, epsilon = 1e-12);
    assert_relative_eq!(v, 0.25, epsilon = 1e-12);
    assert_relative_eq!(w, 0.25, epsilon = 1e-12);
}

#[test]
fn test_triangle_closest_point_regions() {
    let tri = unit_triangle();
    // Face interior
    assert!(tri
        .closest_point(Vec3::new(0.2, 0.2, 5.0))
        .abs_diff_eq(Vec3::new(0.2, 0.2, 0.0), 1e-12));
    // Vertex region
    assert!(tri.closest_point(Vec3::new(-1.0, -1.0, 0.0)).abs_diff_eq(Vec3::ZERO, 1e-12));
    // Hypotenuse edge region
    assert!(tri
        .closest_point(Vec3::new(1.0, 1.0, 0.0))
        .abs_diff_eq(Vec3::new(0.5, 0.5, 0.0), 1e-12));
}

#[test]
fn test_triangle_intersect_segment() {
    let tri = unit_triangle();
    let hit = LineSegment::new(Vec3::new(0.2, 0.2, -1.0), Vec3::new(0.2, 0.2, 1.0));
    let t = tri.intersect_segment(&hit, 1e-9).unwrap();
    assert_relative_eq!(t, 0.5, epsilon = 1e-12);

    let miss = LineSegment::new(Vec3::new(2.0, 2.0, -1.0), Vec3::new(2.0, 2.0, 1.0));
    assert!(tri.intersect_segment(&miss, 1e-9).is_none());

    let short = LineSegment::new(Vec3::new(0.2, 0.2, 1.0), Vec3::new(0.2, 0.2, 2.0));
    assert!(tri.intersect_segment(&short, 1e-9).is_none());
}
