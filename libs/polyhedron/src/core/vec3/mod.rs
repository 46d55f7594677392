//! Thin wrapper around `glam::DVec3` shared across kernel modules.
//!
//! The helper functions keep vector predicates readable while avoiding
//! direct dependencies on `glam` from higher layers.

pub use glam::DVec3 as Vec3;

/// Returns true if every component of `a` and `b` differs by at most `tolerance`.
///
/// # Examples
/// ```
/// use polyhedron_kernel::{core::vec3::approx_eq, Vec3};
/// assert!(approx_eq(Vec3::X, Vec3::new(1.0 + 1e-9, 0.0, 0.0), 1e-6));
/// ```
#[inline]
pub fn approx_eq(a: Vec3, b: Vec3, tolerance: f64) -> bool {
    a.abs_diff_eq(b, tolerance)
}

/// Builds a right-handed orthonormal pair `(u, v)` with `u × v == normal`.
///
/// `normal` must be unit length.
///
/// # Examples
/// ```
/// use polyhedron_kernel::{core::vec3::orthonormal_basis, Vec3};
/// let (u, v) = orthonormal_basis(Vec3::Z);
/// assert!((u.cross(v) - Vec3::Z).length() < 1e-12);
/// ```
pub fn orthonormal_basis(normal: Vec3) -> (Vec3, Vec3) {
    let u = normal.any_orthonormal_vector();
    let v = normal.cross(u);
    (u, v)
}

/// Normal of a polygon loop by Newell's method, scaled by twice its area.
///
/// Robust for non-convex and slightly non-planar loops. Returns zero for
/// fewer than three points.
pub fn newell_normal(points: &[Vec3]) -> Vec3 {
    let n = points.len();
    if n < 3 {
        return Vec3::ZERO;
    }
    let mut normal = Vec3::ZERO;
    for i in 0..n {
        let cur = points[i];
        let next = points[(i + 1) % n];
        normal.x += (cur.y - next.y) * (cur.z + next.z);
        normal.y += (cur.z - next.z) * (cur.x + next.x);
        normal.z += (cur.x - next.x) * (cur.y + next.y);
    }
    normal
}

#[cfg(test)]
mod tests;
