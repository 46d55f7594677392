//! # Axis-Aligned Bounding Box
//!
//! Box with faces parallel to the coordinate planes. Corners are numbered by
//! bits: `x` is bit 2, `y` is bit 1, `z` is bit 0, a set bit selecting the
//! maximum along that axis.

use config::constants::DISTANCE_TOLERANCE;
use serde::{Deserialize, Serialize};

use super::plane::Plane;
use super::sphere::Sphere;
use crate::core::vec3::Vec3;
use crate::polyhedron::Polyhedron;

/// Face loops of a box over its bit-numbered corners, counter-clockwise seen
/// from outside, ordered `-X, +X, -Y, +Y, -Z, +Z`.
pub(crate) const BOX_FACES: [[usize; 4]; 6] = [
    [0, 1, 3, 2],
    [4, 6, 7, 5],
    [0, 4, 5, 1],
    [2, 3, 7, 6],
    [0, 2, 6, 4],
    [1, 5, 7, 3],
];

/// Build the closed polyhedron of a box from its eight bit-numbered corners.
pub(crate) fn box_polyhedron(corners: [Vec3; 8]) -> Polyhedron {
    let faces = BOX_FACES.iter().map(|f| f.to_vec()).collect();
    Polyhedron::from_trusted(corners.to_vec(), faces)
}

// =============================================================================
// AABB
// =============================================================================

/// Axis-aligned bounding box.
///
/// # Example
///
/// ```rust
/// use polyhedron_kernel::{Aabb, Vec3};
///
/// let aabb = Aabb::new(Vec3::ZERO, Vec3::new(2.0, 1.0, 1.0));
/// assert_eq!(aabb.volume(), 2.0);
/// assert!(aabb.contains_point(Vec3::new(1.0, 0.5, 0.5)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Minimum corner.
    pub min: Vec3,
    /// Maximum corner.
    pub max: Vec3,
}

impl Aabb {
    /// Create box from two opposite corners in any order.
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Smallest box enclosing `points`, `None` if empty.
    pub fn from_points(points: &[Vec3]) -> Option<Self> {
        let first = *points.first()?;
        let (min, max) = points
            .iter()
            .fold((first, first), |(lo, hi), p| (lo.min(*p), hi.max(*p)));
        Some(Self { min, max })
    }

    /// Center point.
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Full edge lengths.
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Half edge lengths.
    pub fn half_extents(&self) -> Vec3 {
        self.size() * 0.5
    }

    /// Enclosed volume.
    pub fn volume(&self) -> f64 {
        let s = self.size();
        s.x * s.y * s.z
    }

    /// Total surface area.
    pub fn surface_area(&self) -> f64 {
        let s = self.size();
        2.0 * (s.x * s.y + s.y * s.z + s.z * s.x)
    }

    /// Corner `index` in `0..8`; bit 2 selects max x, bit 1 max y, bit 0 max z.
    pub fn corner(&self, index: usize) -> Vec3 {
        Vec3::new(
            if index & 4 != 0 { self.max.x } else { self.min.x },
            if index & 2 != 0 { self.max.y } else { self.min.y },
            if index & 1 != 0 { self.max.z } else { self.min.z },
        )
    }

    /// All eight corners in bit order.
    pub fn corners(&self) -> [Vec3; 8] {
        std::array::from_fn(|i| self.corner(i))
    }

    /// Bounding planes ordered `-X, +X, -Y, +Y, -Z, +Z`, normals outward.
    pub fn planes(&self) -> [Plane; 6] {
        [
            Plane::new(Vec3::NEG_X, self.min.x),
            Plane::new(Vec3::X, -self.max.x),
            Plane::new(Vec3::NEG_Y, self.min.y),
            Plane::new(Vec3::Y, -self.max.y),
            Plane::new(Vec3::NEG_Z, self.min.z),
            Plane::new(Vec3::Z, -self.max.z),
        ]
    }

    /// Returns true if `point` is inside or within tolerance of the box.
    pub fn contains_point(&self, point: Vec3) -> bool {
        let tol = Vec3::splat(DISTANCE_TOLERANCE);
        point.cmpge(self.min - tol).all() && point.cmple(self.max + tol).all()
    }

    /// Returns true if `other` lies entirely inside this box.
    pub fn contains_aabb(&self, other: &Aabb) -> bool {
        self.contains_point(other.min) && self.contains_point(other.max)
    }

    /// Closest point of the box to `point`.
    pub fn closest_point(&self, point: Vec3) -> Vec3 {
        point.clamp(self.min, self.max)
    }

    /// Distance from `point` to the box, zero inside.
    pub fn distance(&self, point: Vec3) -> f64 {
        (self.closest_point(point) - point).length()
    }

    /// Returns true if both boxes overlap (touching counts).
    pub fn intersects_aabb(&self, other: &Aabb) -> bool {
        let tol = Vec3::splat(DISTANCE_TOLERANCE);
        self.min.cmple(other.max + tol).all() && other.min.cmple(self.max + tol).all()
    }

    /// Returns true if the sphere touches the box.
    pub fn intersects_sphere(&self, sphere: &Sphere) -> bool {
        self.distance(sphere.center) <= sphere.radius + DISTANCE_TOLERANCE
    }

    /// Closed six-face polyhedron of this box.
    pub fn to_polyhedron(&self) -> Polyhedron {
        box_polyhedron(self.corners())
    }
}
