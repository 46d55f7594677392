//! Intersection predicates.
//!
//! Touching counts as intersecting; all tests share [`DISTANCE_TOLERANCE`].

use config::constants::{approx_zero, DISTANCE_TOLERANCE, EPSILON};

use super::Polyhedron;
use crate::core::vec3::Vec3;
use crate::primitives::{Aabb, Line, LineSegment, Obb, Plane, Polygon, Ray, Sphere, Triangle};

impl Polyhedron {
    // =========================================================================
    // LINEAR PRIMITIVES
    // =========================================================================

    /// Returns true if the segment touches the solid.
    pub fn intersects_segment(&self, segment: &LineSegment) -> bool {
        self.contains(segment.a)
            || self.contains(segment.b)
            || (0..self.faces.len()).any(|i| {
                self.face_polygon(i)
                    .intersects_segment(segment, DISTANCE_TOLERANCE)
            })
    }

    /// Returns true if the infinite line touches the solid.
    pub fn intersects_line(&self, line: &Line) -> bool {
        self.hits_face_along(line.pos, line.dir, f64::NEG_INFINITY)
    }

    /// Returns true if the ray touches the solid.
    pub fn intersects_ray(&self, ray: &Ray) -> bool {
        self.contains(ray.pos) || self.hits_face_along(ray.pos, ray.dir, 0.0)
    }

    /// Returns true if `pos + t·dir` meets a face for some `t >= t_min`.
    fn hits_face_along(&self, pos: Vec3, dir: Vec3, t_min: f64) -> bool {
        (0..self.faces.len()).any(|i| {
            let polygon = self.face_polygon(i);
            let Some(plane) = polygon.plane() else {
                return false;
            };
            match plane.intersect_line(pos, dir) {
                Some(t) => {
                    t >= t_min - DISTANCE_TOLERANCE
                        && polygon.contains_point(pos + dir * t.max(t_min), DISTANCE_TOLERANCE)
                }
                // Parallel: only a line lying in the face plane can touch it.
                None => {
                    plane.distance(pos) <= DISTANCE_TOLERANCE
                        && Self::span_over(&polygon, pos, dir, t_min)
                            .is_some_and(|span| polygon.intersects_segment(&span, DISTANCE_TOLERANCE))
                }
            }
        })
    }

    /// Part of `pos + t·dir`, `t >= t_min`, covering the projection of `polygon`.
    fn span_over(polygon: &Polygon, pos: Vec3, dir: Vec3, t_min: f64) -> Option<LineSegment> {
        let len_sq = dir.length_squared();
        if len_sq < EPSILON * EPSILON {
            return None;
        }
        let (lo, hi) = polygon
            .vertices()
            .iter()
            .map(|&v| (v - pos).dot(dir) / len_sq)
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), t| {
                (lo.min(t), hi.max(t))
            });
        let lo = lo.max(t_min);
        if lo > hi {
            return None;
        }
        Some(LineSegment::new(pos + dir * lo, pos + dir * hi))
    }

    /// Segment test for a convex polyhedron by clipping against face planes.
    pub fn intersects_convex_segment(&self, segment: &LineSegment) -> bool {
        self.clip_parametric(segment.a, segment.dir(), 0.0, 1.0)
    }

    /// Line test for a convex polyhedron by clipping against face planes.
    pub fn intersects_convex_line(&self, line: &Line) -> bool {
        self.clip_parametric(line.pos, line.dir, f64::NEG_INFINITY, f64::INFINITY)
    }

    /// Ray test for a convex polyhedron by clipping against face planes.
    pub fn intersects_convex_ray(&self, ray: &Ray) -> bool {
        self.clip_parametric(ray.pos, ray.dir, 0.0, f64::INFINITY)
    }

    /// Cyrus–Beck: shrink `[t_min, t_max]` by every face half-space.
    fn clip_parametric(&self, pos: Vec3, dir: Vec3, mut t_min: f64, mut t_max: f64) -> bool {
        if self.faces.is_empty() {
            return false;
        }
        for plane in self.face_planes() {
            let denom = plane.normal.dot(dir);
            let dist = plane.signed_distance(pos) - DISTANCE_TOLERANCE;
            if approx_zero(denom) {
                if dist > 0.0 {
                    return false;
                }
                continue;
            }
            let t = -dist / denom;
            if denom < 0.0 {
                t_min = t_min.max(t);
            } else {
                t_max = t_max.min(t);
            }
            if t_min > t_max {
                return false;
            }
        }
        true
    }

    /// Returns true if vertices lie on both sides of `plane` or touch it.
    pub fn intersects_plane(&self, plane: &Plane) -> bool {
        if self.vertices.is_empty() {
            return false;
        }
        let (lo, hi) = self
            .vertices
            .iter()
            .map(|&v| plane.signed_distance(v))
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), d| {
                (lo.min(d), hi.max(d))
            });
        lo <= DISTANCE_TOLERANCE && hi >= -DISTANCE_TOLERANCE
    }

    // =========================================================================
    // SOLIDS AND SURFACES
    // =========================================================================

    /// Returns true if the two solids touch.
    ///
    /// Convex pairs use the separating-axis test; otherwise vertex
    /// containment and edge-face crossings are checked both ways.
    pub fn intersects_polyhedron(&self, other: &Polyhedron) -> bool {
        if self.faces.is_empty() || other.faces.is_empty() {
            return false;
        }
        if self.is_convex() && other.is_convex() {
            return self.sat_intersects(other);
        }
        other.vertices.iter().any(|&v| self.contains(v))
            || self.vertices.iter().any(|&v| other.contains(v))
            || other.edges().iter().any(|e| self.edge_touches_faces(e))
            || self.edges().iter().any(|e| other.edge_touches_faces(e))
    }

    fn edge_touches_faces(&self, edge: &LineSegment) -> bool {
        (0..self.faces.len()).any(|i| {
            self.face_polygon(i)
                .intersects_segment(edge, DISTANCE_TOLERANCE)
        })
    }

    fn sat_intersects(&self, other: &Polyhedron) -> bool {
        let mut axes: Vec<Vec3> = self
            .face_planes()
            .into_iter()
            .chain(other.face_planes())
            .map(|p| p.normal)
            .collect();
        let own_edges = self.edges();
        let other_edges = other.edges();
        for a in &own_edges {
            for b in &other_edges {
                if let Some(axis) = a.dir().cross(b.dir()).try_normalize() {
                    axes.push(axis);
                }
            }
        }
        axes.iter().all(|&axis| {
            let (a_lo, a_hi) = self.project_onto(axis);
            let (b_lo, b_hi) = other.project_onto(axis);
            a_hi >= b_lo - DISTANCE_TOLERANCE && b_hi >= a_lo - DISTANCE_TOLERANCE
        })
    }

    /// Interval `[min, max]` of the vertices projected on `axis`.
    fn project_onto(&self, axis: Vec3) -> (f64, f64) {
        let support = |dir: Vec3| {
            self.extreme_vertex(dir)
                .map_or(0.0, |i| self.vertices[i].dot(axis))
        };
        (support(-axis), support(axis))
    }

    /// Returns true if the box touches the solid.
    pub fn intersects_aabb(&self, aabb: &Aabb) -> bool {
        self.intersects_polyhedron(&aabb.to_polyhedron())
    }

    /// Returns true if the oriented box touches the solid.
    pub fn intersects_obb(&self, obb: &Obb) -> bool {
        self.intersects_polyhedron(&obb.to_polyhedron())
    }

    /// Returns true if the triangle touches the solid.
    pub fn intersects_triangle(&self, triangle: &Triangle) -> bool {
        self.intersects_polygon(&Polygon::new(triangle.vertices().to_vec()))
    }

    /// Returns true if the planar polygon touches the solid.
    pub fn intersects_polygon(&self, polygon: &Polygon) -> bool {
        if self.faces.is_empty() || polygon.is_empty() {
            return false;
        }
        polygon.vertices().iter().any(|&v| self.contains(v))
            || polygon.edges().iter().any(|e| self.edge_touches_faces(e))
            || self
                .edges()
                .iter()
                .any(|e| polygon.intersects_segment(e, DISTANCE_TOLERANCE))
    }

    /// Returns true if the sphere touches the solid.
    pub fn intersects_sphere(&self, sphere: &Sphere) -> bool {
        !self.faces.is_empty() && self.distance(sphere.center) <= sphere.radius + DISTANCE_TOLERANCE
    }
}
