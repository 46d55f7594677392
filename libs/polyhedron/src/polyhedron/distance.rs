//! Closest-point and distance queries.

use config::constants::DISTANCE_TOLERANCE;

use super::Polyhedron;
use crate::core::vec3::Vec3;
use crate::primitives::LineSegment;

impl Polyhedron {
    /// Closest point of the solid to `point`: the point itself when it is
    /// contained, otherwise the nearest point over all faces.
    ///
    /// Returns `point` for a polyhedron without faces.
    pub fn closest_point(&self, point: Vec3) -> Vec3 {
        if self.faces.is_empty() || self.contains(point) {
            return point;
        }
        self.closest_surface_point(point, 0..self.faces.len())
    }

    /// Closest point for a convex polyhedron.
    ///
    /// Only faces whose plane has `point` in front are candidates.
    pub fn closest_point_convex(&self, point: Vec3) -> Vec3 {
        let outside: Vec<usize> = (0..self.faces.len())
            .filter(|&i| {
                self.face_plane(i)
                    .is_some_and(|p| !p.is_inside_with(point, DISTANCE_TOLERANCE))
            })
            .collect();
        if outside.is_empty() {
            return point;
        }
        self.closest_surface_point(point, outside)
    }

    fn closest_surface_point(&self, point: Vec3, faces: impl IntoIterator<Item = usize>) -> Vec3 {
        faces
            .into_iter()
            .map(|i| self.face_polygon(i).closest_point(point))
            .min_by(|a, b| {
                (*a - point)
                    .length_squared()
                    .total_cmp(&(*b - point).length_squared())
            })
            .unwrap_or(point)
    }

    /// Distance from `point` to the solid, zero inside.
    pub fn distance(&self, point: Vec3) -> f64 {
        (self.closest_point(point) - point).length()
    }

    /// Closest pair `(on_polyhedron, on_segment)`.
    ///
    /// When the segment touches the solid both points coincide at a shared
    /// point.
    pub fn closest_point_to_segment(&self, segment: &LineSegment) -> (Vec3, Vec3) {
        if self.contains(segment.a) {
            return (segment.a, segment.a);
        }
        if self.contains(segment.b) {
            return (segment.b, segment.b);
        }
        (0..self.faces.len())
            .map(|i| self.face_polygon(i).closest_point_to_segment(segment))
            .min_by(|(a0, a1), (b0, b1)| {
                (*a0 - *a1)
                    .length_squared()
                    .total_cmp(&(*b0 - *b1).length_squared())
            })
            .unwrap_or((segment.a, segment.a))
    }
}
