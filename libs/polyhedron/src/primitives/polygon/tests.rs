use super::*;
use approx::assert_relative_eq;

fn unit_square() -> Polygon {
    Polygon::new(vec![
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(1.0, 1.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
    ])
}

// =============================================================================
// BASICS
// =============================================================================

#[test]
fn test_polygon_area_and_normal() {
    let square = unit_square();
    assert_relative_eq!(square.area(), 1.0, epsilon = 1e-12);
    assert!(square.normal().unwrap().abs_diff_eq(Vec3::Z, 1e-12));
    assert!(square.flip().normal().unwrap().abs_diff_eq(-Vec3::Z, 1e-12));
}

#[test]
fn test_polygon_plane_passes_through_vertices() {
    let square = unit_square();
    let plane = square.plane().unwrap();
    for v in square.vertices() {
        assert!(plane.distance(*v) < 1e-12);
    }
}

#[test]
fn test_polygon_triangulate_fan() {
    let tris = unit_square().triangulate();
    assert_eq!(tris.len(), 2);
    let total: f64 = tris.iter().map(|t| t.area()).sum();
    assert_relative_eq!(total, 1.0, epsilon = 1e-12);
}

#[test]
fn test_polygon_remove_duplicates_wraps() {
    let mut poly = Polygon::new(vec![
        Vec3::ZERO,
        Vec3::X,
        Vec3::X + Vec3::splat(1e-9),
        Vec3::Y,
        Vec3::splat(1e-10),
    ]);
    poly.remove_duplicates(1e-6);
    assert_eq!(poly.len(), 3);
}

// =============================================================================
// CLIPPING
// =============================================================================

#[test]
fn test_polygon_clip_back_halves_square() {
    // Keep x <= 0.5
    let clipped = unit_square().clip_back(&Plane::new(Vec3::X, -0.5), 1e-9);
    assert_eq!(clipped.len(), 4);
    assert_relative_eq!(clipped.area(), 0.5, epsilon = 1e-12);
    assert!(clipped.vertices().iter().all(|v| v.x <= 0.5 + 1e-12));
}

#[test]
fn test_polygon_clip_back_all_front_is_empty() {
    let clipped = unit_square().clip_back(&Plane::new(Vec3::X, 2.0), 1e-9);
    assert!(clipped.is_empty());
}

#[test]
fn test_polygon_clip_back_all_back_is_unchanged() {
    let square = unit_square();
    let clipped = square.clip_back(&Plane::new(Vec3::X, -5.0), 1e-9);
    assert_eq!(clipped, square);
}

// =============================================================================
// QUERIES
// =============================================================================

#[test]
fn test_polygon_contains_point() {
    let square = unit_square();
    assert!(square.contains_point(Vec3::new(0.5, 0.5, 0.0), 1e-9));
    assert!(square.contains_point(Vec3::new(1.0, 0.5, 0.0), 1e-9));
    assert!(!square.contains_point(Vec3::new(1.5, 0.5, 0.0), 1e-9));
    assert!(!square.contains_point(Vec3::new(0.5, 0.5, 0.1), 1e-9));
}

#[test]
fn test_polygon_closest_point() {
    let square = unit_square();
    assert!(square
        .closest_point(Vec3::new(0.25, 0.75, 3.0))
        .abs_diff_eq(Vec3::new(0.25, 0.75, 0.0), 1e-12));
    assert!(square
        .closest_point(Vec3::new(2.0, 2.0, 0.0))
        .abs_diff_eq(Vec3::new(1.0, 1.0, 0.0), 1e-12));
    assert_relative_eq!(square.distance(Vec3::new(0.5, -1.0, 0.0)), 1.0, epsilon = 1e-12);
}

#[test]
fn test_polygon_closest_point_to_segment() {
    let square = unit_square();
    let piercing = LineSegment::new(Vec3::new(0.5, 0.5, -1.0), Vec3::new(0.5, 0.5, 1.0));
    let (a, b) = square.closest_point_to_segment(&piercing);
    assert!(a.abs_diff_eq(b, 1e-12));

    let above = LineSegment::new(Vec3::new(-1.0, 0.5, 2.0), Vec3::new(2.0, 0.5, 2.0));
    let (a, b) = square.closest_point_to_segment(&above);
    assert_relative_eq!((a - b).length(), 2.0, epsilon = 1e-12);
}

#[test]
fn test_polygon_intersects_segment() {
    let square = unit_square();
    let piercing = LineSegment::new(Vec3::new(0.5, 0.5, -1.0), Vec3::new(0.5, 0.5, 1.0));
    assert!(square.intersects_segment(&piercing, 1e-9));

    let outside = LineSegment::new(Vec3::new(3.0, 0.5, -1.0), Vec3::new(3.0, 0.5, 1.0));
    assert!(!square.intersects_segment(&outside, 1e-9));

    let coplanar = LineSegment::new(Vec3::new(-1.0, 0.5, 0.0), Vec3::new(2.0, 0.5, 0.0));
    assert!(square.intersects_segment(&coplanar, 1e-9));
}

#[test]
fn test_polygon_crossing_parameter_is_strict() {
    let square = unit_square();
    let piercing = LineSegment::new(Vec3::new(0.5, 0.5, -1.0), Vec3::new(0.5, 0.5, 1.0));
    assert_relative_eq!(square.crossing_parameter(&piercing, 1e-9).unwrap(), 0.5);

    let touching = LineSegment::new(Vec3::new(0.5, 0.5, 0.0), Vec3::new(0.5, 0.5, 1.0));
    assert!(square.crossing_parameter(&touching, 1e-9).is_none());
}
