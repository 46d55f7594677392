//! # Plane-Bounded Volume
//!
//! A convex region stored as the intersection of half-spaces. Each plane
//! keeps the points on its back side; the region is their conjunction.
//!
//! ## Capacity
//!
//! A volume is created with a fixed plane capacity. [`PbVolume::push`]
//! fails once it is reached, and [`PbVolume::set_intersection`] of volumes
//! with capacities `N1` and `N2` has capacity `N1 + N2`.
//!
//! ## Example
//!
//! ```rust
//! use polyhedron_kernel::{PbVolume, Plane, Vec3};
//!
//! let mut slab = PbVolume::with_capacity(2);
//! slab.push(Plane::new(Vec3::Z, -1.0)).unwrap(); // z <= 1
//! slab.push(Plane::new(Vec3::NEG_Z, -1.0)).unwrap(); // z >= -1
//! assert!(slab.contains(Vec3::new(100.0, -5.0, 0.5)));
//! assert!(slab.push(Plane::new(Vec3::X, 0.0)).is_err());
//! ```

mod adapters;
mod materialize;
mod weld;

pub use adapters::ToPbVolume;

use config::constants::DISTANCE_TOLERANCE;
use serde::{Deserialize, Serialize};

use crate::config::KernelConfig;
use crate::core::vec3::Vec3;
use crate::error::{GeometryError, GeometryResult};
use crate::polyhedron::Polyhedron;
use crate::primitives::{Aabb, Obb, Plane, Sphere};

// =============================================================================
// CULL RESULT
// =============================================================================

/// Placement of a bounded shape relative to a volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CullResult {
    /// Entirely in front of at least one plane.
    Outside,
    /// Entirely behind every plane.
    Inside,
    /// Neither; the shape may still miss the region near its corners.
    Intersecting,
}

// =============================================================================
// PB VOLUME
// =============================================================================

/// Ordered list of bounding planes with a fixed capacity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PbVolumeParts", into = "PbVolumeParts")]
pub struct PbVolume {
    planes: Vec<Plane>,
    capacity: usize,
}

#[derive(Serialize, Deserialize)]
struct PbVolumeParts {
    planes: Vec<Plane>,
    capacity: usize,
}

impl TryFrom<PbVolumeParts> for PbVolume {
    type Error = GeometryError;

    fn try_from(parts: PbVolumeParts) -> GeometryResult<Self> {
        if parts.planes.len() > parts.capacity {
            return Err(GeometryError::CapacityExceeded {
                capacity: parts.capacity,
            });
        }
        Ok(Self {
            planes: parts.planes,
            capacity: parts.capacity,
        })
    }
}

impl From<PbVolume> for PbVolumeParts {
    fn from(volume: PbVolume) -> Self {
        Self {
            planes: volume.planes,
            capacity: volume.capacity,
        }
    }
}

impl PbVolume {
    /// Creates an empty volume (all of space) holding up to `capacity` planes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            planes: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Creates a full volume from `planes`; capacity equals their count.
    pub fn from_planes(planes: Vec<Plane>) -> Self {
        let capacity = planes.len();
        Self { planes, capacity }
    }

    /// Appends a bounding plane.
    ///
    /// # Errors
    ///
    /// [`GeometryError::CapacityExceeded`] when the volume is full.
    pub fn push(&mut self, plane: Plane) -> GeometryResult<()> {
        if self.planes.len() >= self.capacity {
            return Err(GeometryError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        self.planes.push(plane);
        Ok(())
    }

    /// Bounding planes in insertion order.
    #[inline]
    pub fn planes(&self) -> &[Plane] {
        &self.planes
    }

    /// Number of planes held.
    #[inline]
    pub fn len(&self) -> usize {
        self.planes.len()
    }

    /// Maximum number of planes.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns true if no plane has been added.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.planes.is_empty()
    }

    /// Returns true if `point` is behind every plane.
    pub fn contains(&self, point: Vec3) -> bool {
        self.contains_with(point, DISTANCE_TOLERANCE)
    }

    /// Containment with an explicit tolerance.
    pub fn contains_with(&self, point: Vec3, tolerance: f64) -> bool {
        self.planes.iter().all(|p| p.is_inside_with(point, tolerance))
    }

    /// Region inside both volumes: the planes of `self` followed by those
    /// of `other`, without deduplication.
    pub fn set_intersection(&self, other: &PbVolume) -> PbVolume {
        let mut planes = Vec::with_capacity(self.capacity + other.capacity);
        planes.extend_from_slice(&self.planes);
        planes.extend_from_slice(&other.planes);
        PbVolume {
            planes,
            capacity: self.capacity + other.capacity,
        }
    }

    /// Explicit boundary mesh of the region with default tolerances.
    pub fn to_polyhedron(&self) -> Polyhedron {
        self.to_polyhedron_with(&KernelConfig::default())
    }

    /// Explicit boundary mesh of the region.
    ///
    /// One face per contributing plane, in plane order. An empty region
    /// yields the null polyhedron and an unbounded one an open mesh.
    pub fn to_polyhedron_with(&self, config: &KernelConfig) -> Polyhedron {
        materialize::materialize(&self.planes, config)
    }

    // =========================================================================
    // CULLING
    // =========================================================================

    /// Conservative placement of an axis-aligned box.
    pub fn classify_aabb(&self, aabb: &Aabb) -> CullResult {
        let center = aabb.center();
        let h = aabb.half_extents();
        self.classify_by_radius(center, |n| n.abs().dot(h))
    }

    /// Conservative placement of an oriented box.
    pub fn classify_obb(&self, obb: &Obb) -> CullResult {
        self.classify_by_radius(obb.center, |n| {
            obb.axes
                .iter()
                .zip(obb.half_extents.to_array())
                .map(|(axis, h)| n.dot(*axis).abs() * h)
                .sum::<f64>()
        })
    }

    /// Conservative placement of a sphere.
    pub fn classify_sphere(&self, sphere: &Sphere) -> CullResult {
        self.classify_by_radius(sphere.center, |_| sphere.radius)
    }

    /// Classify a shape given its center and its extent along a plane normal.
    fn classify_by_radius(&self, center: Vec3, radius: impl Fn(Vec3) -> f64) -> CullResult {
        let mut intersecting = false;
        for plane in &self.planes {
            let d = plane.signed_distance(center);
            let r = radius(plane.normal);
            if d - r > DISTANCE_TOLERANCE {
                return CullResult::Outside;
            }
            if d + r > DISTANCE_TOLERANCE {
                intersecting = true;
            }
        }
        if intersecting {
            CullResult::Intersecting
        } else {
            CullResult::Inside
        }
    }
}
