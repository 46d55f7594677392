//! Conversions from shapes to plane-bounded volumes.

use super::PbVolume;
use crate::polyhedron::Polyhedron;
use crate::primitives::{Aabb, Obb};

/// Shapes that can describe themselves as an intersection of half-spaces.
pub trait ToPbVolume {
    /// The bounding planes of the shape, outward normals.
    fn to_pb_volume(&self) -> PbVolume;
}

impl ToPbVolume for Aabb {
    /// Six planes ordered `-X, +X, -Y, +Y, -Z, +Z`.
    fn to_pb_volume(&self) -> PbVolume {
        PbVolume::from_planes(self.planes().to_vec())
    }
}

impl ToPbVolume for Obb {
    /// Six planes ordered `-a0, +a0, -a1, +a1, -a2, +a2`.
    fn to_pb_volume(&self) -> PbVolume {
        PbVolume::from_planes(self.planes().to_vec())
    }
}

impl ToPbVolume for Polyhedron {
    /// One plane per non-degenerate face. Only describes the solid when it
    /// is convex.
    fn to_pb_volume(&self) -> PbVolume {
        PbVolume::from_planes(self.face_planes())
    }
}
