//! Point and shape containment.
//!
//! General queries work on any closed mesh; the `*_convex` variants assume a
//! convex polyhedron and only test face planes.

use std::f64::consts::PI;

use config::constants::DISTANCE_TOLERANCE;

use super::Polyhedron;
use crate::core::vec3::Vec3;
use crate::primitives::{Aabb, LineSegment, Obb, Polygon, Triangle};

impl Polyhedron {
    // =========================================================================
    // POINTS
    // =========================================================================

    /// Returns true if `point` is inside or on the boundary.
    pub fn contains(&self, point: Vec3) -> bool {
        self.contains_with(point, DISTANCE_TOLERANCE)
    }

    /// Point containment with an explicit boundary tolerance.
    pub fn contains_with(&self, point: Vec3, tolerance: f64) -> bool {
        if self.faces.is_empty() {
            return false;
        }
        if (0..self.faces.len()).any(|i| self.face_polygon(i).contains_point(point, tolerance)) {
            return true;
        }
        self.winding_number(point) > 0.5
    }

    /// Generalized winding number of the surface around `point`.
    ///
    /// Sum of the signed solid angles of the fan triangles over `4π`; about
    /// one inside a closed outward-wound mesh and zero outside.
    pub fn winding_number(&self, point: Vec3) -> f64 {
        let total: f64 = self
            .triangulate()
            .iter()
            .map(|&[i, j, k]| {
                solid_angle(
                    self.vertices[i] - point,
                    self.vertices[j] - point,
                    self.vertices[k] - point,
                )
            })
            .sum();
        total / (4.0 * PI)
    }

    /// Half-space containment for a convex polyhedron.
    pub fn contains_convex(&self, point: Vec3) -> bool {
        self.contains_convex_with(point, DISTANCE_TOLERANCE)
    }

    /// Convex containment with an explicit tolerance.
    pub fn contains_convex_with(&self, point: Vec3, tolerance: f64) -> bool {
        !self.faces.is_empty()
            && (0..self.faces.len()).all(|i| {
                self.face_plane(i)
                    .map_or(true, |plane| plane.is_inside_with(point, tolerance))
            })
    }

    // =========================================================================
    // SHAPES
    // =========================================================================

    /// Returns true if the whole segment lies inside.
    pub fn contains_segment(&self, segment: &LineSegment) -> bool {
        self.contains(segment.a)
            && self.contains(segment.b)
            && !self.surface_crossed_by(segment, DISTANCE_TOLERANCE)
    }

    /// Returns true if the whole triangle lies inside.
    pub fn contains_triangle(&self, triangle: &Triangle) -> bool {
        self.contains_polygon(&Polygon::new(triangle.vertices().to_vec()))
    }

    /// Returns true if the whole planar polygon lies inside.
    pub fn contains_polygon(&self, polygon: &Polygon) -> bool {
        if polygon.is_empty() {
            return false;
        }
        let tol = DISTANCE_TOLERANCE;
        polygon.vertices().iter().all(|&v| self.contains(v))
            && polygon
                .edges()
                .iter()
                .all(|e| !self.surface_crossed_by(e, tol))
            && self
                .edges()
                .iter()
                .all(|e| polygon.crossing_parameter(e, tol).is_none())
    }

    /// Returns true if the box lies inside.
    pub fn contains_aabb(&self, aabb: &Aabb) -> bool {
        self.contains_polyhedron(&aabb.to_polyhedron())
    }

    /// Returns true if the oriented box lies inside.
    pub fn contains_obb(&self, obb: &Obb) -> bool {
        self.contains_polyhedron(&obb.to_polyhedron())
    }

    /// Returns true if `other` lies inside: all its vertices are contained
    /// and neither surface crosses the other.
    pub fn contains_polyhedron(&self, other: &Polyhedron) -> bool {
        if other.vertices.is_empty() {
            return false;
        }
        let tol = DISTANCE_TOLERANCE;
        other.vertices.iter().all(|&v| self.contains(v))
            && other.edges().iter().all(|e| !self.surface_crossed_by(e, tol))
            && self.edges().iter().all(|e| !other.surface_crossed_by(e, tol))
    }

    /// Convex containment of both segment endpoints.
    pub fn contains_convex_segment(&self, segment: &LineSegment) -> bool {
        self.contains_convex(segment.a) && self.contains_convex(segment.b)
    }

    /// Convex containment of all three corners.
    pub fn contains_convex_triangle(&self, triangle: &Triangle) -> bool {
        triangle.vertices().iter().all(|&v| self.contains_convex(v))
    }

    /// Returns true if `segment` passes strictly through the interior of a face.
    pub(crate) fn surface_crossed_by(&self, segment: &LineSegment, tolerance: f64) -> bool {
        (0..self.faces.len()).any(|i| {
            self.face_polygon(i)
                .crossing_parameter(segment, tolerance)
                .is_some()
        })
    }
}

/// Signed solid angle of triangle `(a, b, c)` seen from the origin.
///
/// Van Oosterom and Strackee, 1983.
fn solid_angle(a: Vec3, b: Vec3, c: Vec3) -> f64 {
    let (la, lb, lc) = (a.length(), b.length(), c.length());
    let numerator = a.dot(b.cross(c));
    let denominator = la * lb * lc + a.dot(b) * lc + a.dot(c) * lb + b.dot(c) * la;
    2.0 * numerator.atan2(denominator)
}
