//! # Plane
//!
//! Oriented plane with point classification. The normal points out of the
//! half-space the plane bounds: a point is inside when its signed distance
//! is non-positive.

use config::constants::{approx_zero, DISTANCE_TOLERANCE};
use serde::{Deserialize, Serialize};

use crate::core::vec3::{orthonormal_basis, Vec3};

// =============================================================================
// CLASSIFICATION
// =============================================================================

/// Classification of a point relative to a plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Point is in front of plane (positive side, outside the half-space).
    Front,
    /// Point is behind plane (negative side, inside the half-space).
    Back,
    /// Point is on the plane.
    Coplanar,
}

// =============================================================================
// PLANE
// =============================================================================

/// A plane `normal·p + offset = 0` with a unit normal.
///
/// # Example
///
/// ```rust
/// use polyhedron_kernel::{Plane, Vec3};
///
/// // x <= 1
/// let plane = Plane::new(Vec3::X, -1.0);
/// assert!(plane.is_inside(Vec3::ZERO));
/// assert!(!plane.is_inside(Vec3::new(2.0, 0.0, 0.0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Plane {
    /// Outward unit normal.
    pub normal: Vec3,
    /// Signed offset: `signed_distance(p) = normal·p + offset`.
    pub offset: f64,
}

impl Plane {
    /// Create plane from a unit normal and offset.
    pub fn new(normal: Vec3, offset: f64) -> Self {
        Self { normal, offset }
    }

    /// Create plane through `point` facing `normal`.
    ///
    /// The normal is normalized; returns `None` for a zero normal.
    pub fn from_point_normal(point: Vec3, normal: Vec3) -> Option<Self> {
        let normal = normal.try_normalize()?;
        Some(Self {
            normal,
            offset: -normal.dot(point),
        })
    }

    /// Create plane from three points.
    ///
    /// Points in counter-clockwise order when viewed from the front give a
    /// normal pointing towards the viewer. Returns `None` for collinear input.
    pub fn from_points(a: Vec3, b: Vec3, c: Vec3) -> Option<Self> {
        let normal = (b - a).cross(c - a);
        if approx_zero(normal.length()) {
            return None;
        }
        Self::from_point_normal(a, normal)
    }

    /// Signed distance from point to plane.
    ///
    /// Positive = front (outside), negative = back (inside), zero = on plane.
    #[inline]
    pub fn signed_distance(&self, point: Vec3) -> f64 {
        self.normal.dot(point) + self.offset
    }

    /// Absolute distance from point to plane.
    #[inline]
    pub fn distance(&self, point: Vec3) -> f64 {
        self.signed_distance(point).abs()
    }

    /// Returns true if `point` lies in the closed negative half-space.
    #[inline]
    pub fn is_inside(&self, point: Vec3) -> bool {
        self.is_inside_with(point, DISTANCE_TOLERANCE)
    }

    /// Half-space test with an explicit tolerance.
    #[inline]
    pub fn is_inside_with(&self, point: Vec3, tolerance: f64) -> bool {
        self.signed_distance(point) <= tolerance
    }

    /// Classify a point relative to this plane.
    pub fn classify_point(&self, point: Vec3, tolerance: f64) -> Classification {
        let dist = self.signed_distance(point);
        if dist > tolerance {
            Classification::Front
        } else if dist < -tolerance {
            Classification::Back
        } else {
            Classification::Coplanar
        }
    }

    /// Flip the plane (reverse normal), swapping inside and outside.
    pub fn flip(&self) -> Plane {
        Plane {
            normal: -self.normal,
            offset: -self.offset,
        }
    }

    /// The point of the plane closest to the origin.
    pub fn point_on_plane(&self) -> Vec3 {
        self.normal * -self.offset
    }

    /// Orthogonal projection of `point` onto the plane.
    pub fn project(&self, point: Vec3) -> Vec3 {
        point - self.normal * self.signed_distance(point)
    }

    /// Right-handed in-plane basis `(u, v)` with `u × v == normal`.
    pub fn basis(&self) -> (Vec3, Vec3) {
        orthonormal_basis(self.normal)
    }

    /// Parameter `t` where the line `pos + t·dir` crosses the plane.
    ///
    /// Returns `None` when the line is parallel to the plane.
    pub fn intersect_line(&self, pos: Vec3, dir: Vec3) -> Option<f64> {
        let denom = self.normal.dot(dir);
        if approx_zero(denom) {
            return None;
        }
        Some(-self.signed_distance(pos) / denom)
    }

    /// Returns true if both planes describe the same oriented plane.
    pub fn approx_eq(&self, other: &Plane, tolerance: f64) -> bool {
        self.normal.abs_diff_eq(other.normal, tolerance)
            && (self.offset - other.offset).abs() <= tolerance
    }
}

#[cfg(test)]
mod tests;
