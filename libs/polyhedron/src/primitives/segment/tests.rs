use super::*;
use approx::assert_relative_eq;

#[test]
fn test_segment_closest_point_clamps() {
    let seg = LineSegment::new(Vec3::ZERO, Vec3::new(2.0, 0.0, 0.0));

    let (p, t) = seg.closest_point(Vec3::new(1.0, 3.0, 0.0));
    assert!(p.abs_diff_eq(Vec3::new(1.0, 0.0, 0.0), 1e-12));
    assert_relative_eq!(t, 0.5);

    let (p, t) = seg.closest_point(Vec3::new(-5.0, 1.0, 0.0));
    assert!(p.abs_diff_eq(Vec3::ZERO, 1e-12));
    assert_relative_eq!(t, 0.0);
}

#[test]
fn test_segment_closest_points_crossing() {
    let a = LineSegment::new(Vec3::new(-1.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0));
    let b = LineSegment::new(Vec3::new(0.0, -1.0, 1.0), Vec3::new(0.0, 1.0, 1.0));
    let (p, q) = a.closest_points(&b);
    assert!(p.abs_diff_eq(Vec3::ZERO, 1e-12));
    assert!(q.abs_diff_eq(Vec3::Z, 1e-12));
    assert_relative_eq!(a.distance_to_segment(&b), 1.0);
}

#[test]
fn test_segment_closest_points_parallel() {
    let a = LineSegment::new(Vec3::ZERO, Vec3::X);
    let b = LineSegment::new(Vec3::new(0.0, 2.0, 0.0), Vec3::new(1.0, 2.0, 0.0));
    assert_relative_eq!(a.distance_to_segment(&b), 2.0, epsilon = 1e-12);
}

#[test]
fn test_segment_closest_points_endpoint_region() {
    let a = LineSegment::new(Vec3::ZERO, Vec3::X);
    let b = LineSegment::new(Vec3::new(3.0, -1.0, 0.0), Vec3::new(3.0, 1.0, 0.0));
    let (p, q) = a.closest_points(&b);
    assert!(p.abs_diff_eq(Vec3::X, 1e-12));
    assert!(q.abs_diff_eq(Vec3::new(3.0, 0.0, 0.0), 1e-12));
}

#[test]
fn test_degenerate_segment() {
    let seg = LineSegment::new(Vec3::ONE, Vec3::ONE);
    assert_relative_eq!(seg.distance(Vec3::new(1.0, 1.0, 3.0)), 2.0);
}

#[test]
fn test_line_and_ray_closest_point() {
    let line = Line::new(Vec3::ZERO, Vec3::X * 5.0);
    assert!(line
        .closest_point(Vec3::new(-4.0, 1.0, 0.0))
        .abs_diff_eq(Vec3::new(-4.0, 0.0, 0.0), 1e-12));

    let ray = Ray::new(Vec3::ZERO, Vec3::X);
    assert!(ray
        .closest_point(Vec3::new(-4.0, 1.0, 0.0))
        .abs_diff_eq(Vec3::ZERO, 1e-12));
}
