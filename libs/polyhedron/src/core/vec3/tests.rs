//! Tests for the vector helpers.

use super::*;
use approx::assert_relative_eq;

#[test]
fn test_basis_is_orthonormal_and_right_handed() {
    for n in [
        Vec3::X,
        Vec3::NEG_Y,
        Vec3::Z,
        Vec3::new(1.0, 2.0, -3.0).normalize(),
    ] {
        let (u, v) = orthonormal_basis(n);
        assert_relative_eq!(u.length(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(v.length(), 1.0, epsilon = 1e-12);
        assert!(u.dot(n).abs() < 1e-12);
        assert!(v.dot(n).abs() < 1e-12);
        assert!(approx_eq(u.cross(v), n, 1e-12));
    }
}

#[test]
fn test_newell_normal_of_ccw_square() {
    let square = [
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(2.0, 0.0, 0.0),
        Vec3::new(2.0, 2.0, 0.0),
        Vec3::new(0.0, 2.0, 0.0),
    ];
    let n = newell_normal(&square);
    // Twice the area along +Z
    assert!(approx_eq(n, Vec3::new(0.0, 0.0, 8.0), 1e-12));
}

#[test]
fn test_newell_normal_degenerate() {
    assert_eq!(newell_normal(&[Vec3::ZERO, Vec3::X]), Vec3::ZERO);
}
