//! Metric queries: area, volume, centroid and support points.

use super::Polyhedron;
use crate::core::vec3::{newell_normal, Vec3};
use crate::primitives::Aabb;

impl Polyhedron {
    /// Sum of face polygon areas.
    pub fn surface_area(&self) -> f64 {
        self.faces
            .iter()
            .map(|f| 0.5 * newell_normal(&self.face_points(f)).length())
            .sum()
    }

    /// Signed enclosed volume.
    ///
    /// Sums the tetrahedra spanned by the first vertex and each fan triangle,
    /// so it is positive for outward-wound closed meshes and meaningless
    /// otherwise.
    pub fn volume(&self) -> f64 {
        let Some(&anchor) = self.vertices.first() else {
            return 0.0;
        };
        self.triangulate()
            .iter()
            .map(|&[a, b, c]| {
                let v0 = self.vertices[a] - anchor;
                let v1 = self.vertices[b] - anchor;
                let v2 = self.vertices[c] - anchor;
                v0.dot(v1.cross(v2))
            })
            .sum::<f64>()
            / 6.0
    }

    /// Unweighted mean of all vertices, zero for an empty polyhedron.
    pub fn centroid(&self) -> Vec3 {
        if self.vertices.is_empty() {
            return Vec3::ZERO;
        }
        self.vertices.iter().copied().sum::<Vec3>() / self.vertices.len() as f64
    }

    /// Index of the vertex furthest along `direction`.
    ///
    /// Ties resolve to the lowest index; `None` without vertices.
    pub fn extreme_vertex(&self, direction: Vec3) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (i, v) in self.vertices.iter().enumerate() {
            let d = v.dot(direction);
            if best.map_or(true, |(_, b)| d > b) {
                best = Some((i, d));
            }
        }
        best.map(|(i, _)| i)
    }

    /// Smallest axis-aligned box enclosing all vertices.
    ///
    /// A degenerate box at the origin for an empty polyhedron.
    pub fn minimal_enclosing_aabb(&self) -> Aabb {
        Aabb::from_points(&self.vertices).unwrap_or(Aabb {
            min: Vec3::ZERO,
            max: Vec3::ZERO,
        })
    }
}
