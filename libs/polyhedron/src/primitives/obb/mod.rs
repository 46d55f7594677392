//! # Oriented Bounding Box
//!
//! Box with an arbitrary orthonormal frame. Corner numbering and face order
//! match [`super::aabb::Aabb`] with the local axes in place of `X, Y, Z`.

use config::constants::DISTANCE_TOLERANCE;
use serde::{Deserialize, Serialize};

use super::aabb::{box_polyhedron, Aabb};
use super::plane::Plane;
use crate::core::vec3::Vec3;
use crate::polyhedron::Polyhedron;

/// Oriented bounding box: `center`, three orthonormal `axes` and the
/// `half_extents` along each.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obb {
    /// Box center.
    pub center: Vec3,
    /// Orthonormal right-handed frame.
    pub axes: [Vec3; 3],
    /// Half edge lengths along `axes`.
    pub half_extents: Vec3,
}

impl Obb {
    /// Create box from center, frame and half extents.
    ///
    /// Axes are normalized. A left-handed frame is made right-handed by
    /// negating the third axis, which leaves the box itself unchanged.
    pub fn new(center: Vec3, axes: [Vec3; 3], half_extents: Vec3) -> Self {
        let mut axes = axes.map(|a| a.normalize_or_zero());
        if axes[0].cross(axes[1]).dot(axes[2]) < 0.0 {
            axes[2] = -axes[2];
        }
        Self {
            center,
            axes,
            half_extents: half_extents.abs(),
        }
    }

    /// Box rotated by the right-handed frame from `rotation` applied to the
    /// world axes.
    pub fn from_rotation(center: Vec3, rotation: glam::DQuat, half_extents: Vec3) -> Self {
        Self::new(
            center,
            [rotation * Vec3::X, rotation * Vec3::Y, rotation * Vec3::Z],
            half_extents,
        )
    }

    /// The same box as an axis-aligned one.
    pub fn from_aabb(aabb: &Aabb) -> Self {
        Self {
            center: aabb.center(),
            axes: [Vec3::X, Vec3::Y, Vec3::Z],
            half_extents: aabb.half_extents(),
        }
    }

    fn half_extent(&self, axis: usize) -> f64 {
        self.half_extents[axis]
    }

    /// Corner `index` in `0..8`; bit 2 selects `+axes[0]`, bit 1 `+axes[1]`,
    /// bit 0 `+axes[2]`.
    pub fn corner(&self, index: usize) -> Vec3 {
        let sign = |bit: usize| if index & bit != 0 { 1.0 } else { -1.0 };
        self.center
            + self.axes[0] * (sign(4) * self.half_extents.x)
            + self.axes[1] * (sign(2) * self.half_extents.y)
            + self.axes[2] * (sign(1) * self.half_extents.z)
    }

    /// All eight corners in bit order.
    pub fn corners(&self) -> [Vec3; 8] {
        std::array::from_fn(|i| self.corner(i))
    }

    /// Bounding planes ordered `-a0, +a0, -a1, +a1, -a2, +a2`, normals outward.
    pub fn planes(&self) -> [Plane; 6] {
        std::array::from_fn(|i| {
            let axis = self.axes[i / 2];
            let c = axis.dot(self.center);
            let h = self.half_extent(i / 2);
            if i % 2 == 0 {
                Plane::new(-axis, c - h)
            } else {
                Plane::new(axis, -(c + h))
            }
        })
    }

    /// Enclosed volume.
    pub fn volume(&self) -> f64 {
        8.0 * self.half_extents.x * self.half_extents.y * self.half_extents.z
    }

    /// Coordinates of `point` in the box frame, relative to the center.
    pub fn to_local(&self, point: Vec3) -> Vec3 {
        let d = point - self.center;
        Vec3::new(d.dot(self.axes[0]), d.dot(self.axes[1]), d.dot(self.axes[2]))
    }

    /// World position of box-frame coordinates.
    pub fn to_world(&self, local: Vec3) -> Vec3 {
        self.center + self.axes[0] * local.x + self.axes[1] * local.y + self.axes[2] * local.z
    }

    /// Returns true if `point` is inside or on the box.
    pub fn contains_point(&self, point: Vec3) -> bool {
        let local = self.to_local(point).abs();
        local
            .cmple(self.half_extents + Vec3::splat(DISTANCE_TOLERANCE))
            .all()
    }

    /// Closest point of the box to `point`.
    pub fn closest_point(&self, point: Vec3) -> Vec3 {
        let local = self
            .to_local(point)
            .clamp(-self.half_extents, self.half_extents);
        self.to_world(local)
    }

    /// Distance from `point` to the box, zero inside.
    pub fn distance(&self, point: Vec3) -> f64 {
        (self.closest_point(point) - point).length()
    }

    /// Smallest axis-aligned box enclosing this one.
    pub fn enclosing_aabb(&self) -> Aabb {
        let extent = self.axes[0].abs() * self.half_extents.x
            + self.axes[1].abs() * self.half_extents.y
            + self.axes[2].abs() * self.half_extents.z;
        Aabb {
            min: self.center - extent,
            max: self.center + extent,
        }
    }

    /// Closed six-face polyhedron of this box.
    pub fn to_polyhedron(&self) -> Polyhedron {
        box_polyhedron(self.corners())
    }
}
