//! # Polygon
//!
//! Planar polygon loop in 3D with half-space clipping, containment and
//! distance queries. Face loops of a polyhedron are viewed through this type.

use config::constants::approx_equal;
use serde::{Deserialize, Serialize};

use super::plane::{Classification, Plane};
use super::segment::LineSegment;
use super::triangle::Triangle;
use crate::core::vec3::{newell_normal, Vec3};

// =============================================================================
// POLYGON
// =============================================================================

/// A planar polygon with vertices in counter-clockwise order seen from the
/// side its normal points to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    vertices: Vec<Vec3>,
}

impl Polygon {
    /// Create polygon from its vertex loop.
    pub fn new(vertices: Vec<Vec3>) -> Self {
        Self { vertices }
    }

    /// Vertex loop.
    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns true if the polygon has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Unit normal by Newell's method, `None` for a degenerate loop.
    pub fn normal(&self) -> Option<Vec3> {
        newell_normal(&self.vertices).try_normalize()
    }

    /// Supporting plane through the loop's average point.
    pub fn plane(&self) -> Option<Plane> {
        let normal = self.normal()?;
        let n = self.vertices.len() as f64;
        let center = self.vertices.iter().copied().sum::<Vec3>() / n;
        Some(Plane::new(normal, -normal.dot(center)))
    }

    /// Polygon area.
    pub fn area(&self) -> f64 {
        0.5 * newell_normal(&self.vertices).length()
    }

    /// Boundary edges in loop order, closing edge last.
    pub fn edges(&self) -> Vec<LineSegment> {
        let n = self.vertices.len();
        (0..n)
            .map(|i| LineSegment::new(self.vertices[i], self.vertices[(i + 1) % n]))
            .collect()
    }

    /// Fan triangulation from the first vertex.
    pub fn triangulate(&self) -> Vec<Triangle> {
        if self.vertices.len() < 3 {
            return Vec::new();
        }
        let v0 = self.vertices[0];
        self.vertices
            .windows(2)
            .skip(1)
            .map(|w| Triangle::new(v0, w[0], w[1]))
            .collect()
    }

    /// Reverse the winding.
    pub fn flip(&self) -> Polygon {
        let mut vertices = self.vertices.clone();
        vertices.reverse();
        Polygon { vertices }
    }

    // =========================================================================
    // CLIPPING
    // =========================================================================

    /// Keep the part of the polygon on the back (inside) of `plane`.
    ///
    /// One Sutherland–Hodgman step: vertices not in front are kept and an
    /// intersection point is inserted wherever an edge crosses from front to
    /// back or back to front.
    pub fn clip_back(&self, plane: &Plane, tolerance: f64) -> Polygon {
        let n = self.vertices.len();
        let mut out = Vec::with_capacity(n + 1);

        for i in 0..n {
            let vi = self.vertices[i];
            let vj = self.vertices[(i + 1) % n];
            let ti = plane.classify_point(vi, tolerance);
            let tj = plane.classify_point(vj, tolerance);

            if ti != Classification::Front {
                out.push(vi);
            }

            if (ti == Classification::Front && tj == Classification::Back)
                || (ti == Classification::Back && tj == Classification::Front)
            {
                let di = plane.signed_distance(vi);
                let dj = plane.signed_distance(vj);
                let t = di / (di - dj);
                out.push(vi.lerp(vj, t));
            }
        }

        Polygon { vertices: out }
    }

    /// Drop consecutive vertices closer than `tolerance`, wrap-around included.
    pub fn remove_duplicates(&mut self, tolerance: f64) {
        self.vertices
            .dedup_by(|next, prev| (*next - *prev).length() <= tolerance);
        while self.vertices.len() > 1 {
            let first = self.vertices[0];
            let last = self.vertices[self.vertices.len() - 1];
            if (first - last).length() <= tolerance {
                self.vertices.pop();
            } else {
                break;
            }
        }
    }

    // =========================================================================
    // QUERIES
    // =========================================================================

    /// Returns true if `point` lies on the polygon (boundary included).
    pub fn contains_point(&self, point: Vec3, tolerance: f64) -> bool {
        let Some(plane) = self.plane() else {
            return self.edges().iter().any(|e| e.distance(point) <= tolerance);
        };
        if plane.distance(point) > tolerance {
            return false;
        }
        self.contains_projected(&plane, point)
            || self.edges().iter().any(|e| e.distance(point) <= tolerance)
    }

    /// Even-odd test of `point` projected into the polygon's plane.
    fn contains_projected(&self, plane: &Plane, point: Vec3) -> bool {
        let (u, v) = plane.basis();
        let to_2d = |p: Vec3| (p.dot(u), p.dot(v));
        let (px, py) = to_2d(point);

        let n = self.vertices.len();
        if n < 3 {
            return false;
        }
        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let (xi, yi) = to_2d(self.vertices[i]);
            let (xj, yj) = to_2d(self.vertices[j]);
            if (yi > py) != (yj > py) {
                let x_cross = xi + (py - yi) * (xj - xi) / (yj - yi);
                if px < x_cross {
                    inside = !inside;
                }
            }
            j = i;
        }
        inside
    }

    /// Closest point on the polygon to `point`.
    pub fn closest_point(&self, point: Vec3) -> Vec3 {
        if let Some(plane) = self.plane() {
            let projected = plane.project(point);
            if self.contains_projected(&plane, projected) {
                return projected;
            }
        }
        self.closest_boundary_point(point)
    }

    fn closest_boundary_point(&self, point: Vec3) -> Vec3 {
        self.edges()
            .iter()
            .map(|e| e.closest_point(point).0)
            .min_by(|a, b| {
                (*a - point)
                    .length_squared()
                    .total_cmp(&(*b - point).length_squared())
            })
            .unwrap_or_else(|| self.vertices.first().copied().unwrap_or(point))
    }

    /// Distance from `point` to the polygon.
    pub fn distance(&self, point: Vec3) -> f64 {
        (self.closest_point(point) - point).length()
    }

    /// Closest points `(on_polygon, on_segment)` between polygon and segment.
    pub fn closest_point_to_segment(&self, segment: &LineSegment) -> (Vec3, Vec3) {
        if let Some(plane) = self.plane() {
            if let Some(t) = plane.intersect_line(segment.a, segment.dir()) {
                if (0.0..=1.0).contains(&t) {
                    let hit = segment.point_at(t);
                    if self.contains_projected(&plane, hit) {
                        return (hit, hit);
                    }
                }
            }
        }

        let mut best = (self.closest_point(segment.a), segment.a);
        let mut best_d = (best.0 - best.1).length_squared();
        let mut consider = |on_poly: Vec3, on_seg: Vec3| {
            let d = (on_poly - on_seg).length_squared();
            if d < best_d {
                best_d = d;
                best = (on_poly, on_seg);
            }
        };

        consider(self.closest_point(segment.b), segment.b);
        for edge in self.edges() {
            let (on_edge, on_seg) = edge.closest_points(segment);
            consider(on_edge, on_seg);
        }
        best
    }

    /// Returns true if `segment` touches the polygon.
    pub fn intersects_segment(&self, segment: &LineSegment, tolerance: f64) -> bool {
        let Some(plane) = self.plane() else {
            return false;
        };
        let da = plane.signed_distance(segment.a);
        let db = plane.signed_distance(segment.b);

        if da.abs() <= tolerance && db.abs() <= tolerance {
            // Coplanar: overlap with the interior or any boundary edge.
            return self.contains_point(segment.a, tolerance)
                || self.contains_point(segment.b, tolerance)
                || self
                    .edges()
                    .iter()
                    .any(|e| e.distance_to_segment(segment) <= tolerance);
        }
        if (da > tolerance && db > tolerance) || (da < -tolerance && db < -tolerance) {
            return false;
        }
        let t = if approx_equal(da, db) { 0.0 } else { da / (da - db) };
        self.contains_point(segment.point_at(t.clamp(0.0, 1.0)), tolerance)
    }

    /// Parameter where `segment` strictly crosses the polygon's interior.
    ///
    /// Endpoints within `tolerance` of the plane do not count as a crossing.
    pub fn crossing_parameter(&self, segment: &LineSegment, tolerance: f64) -> Option<f64> {
        let plane = self.plane()?;
        let da = plane.signed_distance(segment.a);
        let db = plane.signed_distance(segment.b);
        let strict = (da > tolerance && db < -tolerance) || (da < -tolerance && db > tolerance);
        if !strict {
            return None;
        }
        let t = da / (da - db);
        let hit = segment.point_at(t);
        let on_boundary = self.edges().iter().any(|e| e.distance(hit) <= tolerance);
        if !on_boundary && self.contains_projected(&plane, hit) {
            Some(t)
        } else {
            None
        }
    }
}

impl From<Vec<Vec3>> for Polygon {
    fn from(vertices: Vec<Vec3>) -> Self {
        Self::new(vertices)
    }
}

#[cfg(test)]
mod tests;
