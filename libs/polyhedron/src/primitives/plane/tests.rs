use super::*;
use approx::assert_relative_eq;
use config::constants::EPSILON;

#[test]
fn test_plane_from_points() {
    let a = Vec3::new(0.0, 0.0, 0.0);
    let b = Vec3::new(1.0, 0.0, 0.0);
    let c = Vec3::new(0.0, 1.0, 0.0);

    let plane = Plane::from_points(a, b, c).unwrap();

    // Normal should point in +Z direction
    assert!(plane.normal.abs_diff_eq(Vec3::Z, EPSILON));
    assert_relative_eq!(plane.offset, 0.0);
}

#[test]
fn test_plane_from_collinear_points_is_none() {
    let plane = Plane::from_points(Vec3::ZERO, Vec3::X, Vec3::X * 2.0);
    assert!(plane.is_none());
}

#[test]
fn test_plane_classify_point() {
    let plane = Plane::new(Vec3::Z, 0.0);

    assert_eq!(plane.classify_point(Vec3::Z, 1e-6), Classification::Front);
    assert_eq!(plane.classify_point(-Vec3::Z, 1e-6), Classification::Back);
    assert_eq!(
        plane.classify_point(Vec3::new(1.0, 1.0, 0.0), 1e-6),
        Classification::Coplanar
    );
}

#[test]
fn test_plane_offset_convention() {
    // x >= -1 expressed as -x - 1 <= 0
    let plane = Plane::new(Vec3::NEG_X, -1.0);
    assert!(plane.is_inside(Vec3::new(-1.0, 5.0, 5.0)));
    assert!(plane.is_inside(Vec3::ZERO));
    assert!(!plane.is_inside(Vec3::new(-1.5, 0.0, 0.0)));
    assert_relative_eq!(plane.signed_distance(Vec3::new(-3.0, 0.0, 0.0)), 2.0);
}

#[test]
fn test_plane_flip() {
    let plane = Plane::new(Vec3::Z, 5.0);
    let flipped = plane.flip();

    assert!(flipped.normal.abs_diff_eq(Vec3::NEG_Z, EPSILON));
    assert_relative_eq!(flipped.offset, -5.0);
}

#[test]
fn test_plane_project_and_point_on_plane() {
    let plane = Plane::from_point_normal(Vec3::new(0.0, 3.0, 0.0), Vec3::Y * 4.0).unwrap();
    assert!(plane.point_on_plane().abs_diff_eq(Vec3::new(0.0, 3.0, 0.0), 1e-12));
    let p = plane.project(Vec3::new(1.0, 10.0, 2.0));
    assert!(p.abs_diff_eq(Vec3::new(1.0, 3.0, 2.0), 1e-12));
}

#[test]
fn test_plane_intersect_line() {
    let plane = Plane::new(Vec3::Z, -2.0);
    let t = plane.intersect_line(Vec3::ZERO, Vec3::Z).unwrap();
    assert_relative_eq!(t, 2.0);
    assert!(plane.intersect_line(Vec3::ZERO, Vec3::X).is_none());
}
