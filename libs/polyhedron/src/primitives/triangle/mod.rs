//! # Triangle
//!
//! Triangle with barycentric queries, closest point and segment crossing.

use config::constants::EPSILON;
use serde::{Deserialize, Serialize};

use super::plane::Plane;
use super::segment::LineSegment;
use crate::core::vec3::Vec3;

/// A triangle with corners `a`, `b`, `c` (counter-clockwise seen from the front).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    /// First corner.
    pub a: Vec3,
    /// Second corner.
    pub b: Vec3,
    /// Third corner.
    pub c: Vec3,
}

impl Triangle {
    /// Create triangle from its corners.
    pub fn new(a: Vec3, b: Vec3, c: Vec3) -> Self {
        Self { a, b, c }
    }

    /// Corners as an array.
    pub fn vertices(&self) -> [Vec3; 3] {
        [self.a, self.b, self.c]
    }

    /// The three edges `ab`, `bc`, `ca`.
    pub fn edges(&self) -> [LineSegment; 3] {
        [
            LineSegment::new(self.a, self.b),
            LineSegment::new(self.b, self.c),
            LineSegment::new(self.c, self.a),
        ]
    }

    /// Unnormalized normal `(b - a) × (c - a)`.
    pub fn unnormalized_normal(&self) -> Vec3 {
        (self.b - self.a).cross(self.c - self.a)
    }

    /// Triangle area.
    pub fn area(&self) -> f64 {
        0.5 * self.unnormalized_normal().length()
    }

    /// Supporting plane, `None` for a degenerate triangle.
    pub fn plane(&self) -> Option<Plane> {
        Plane::from_points(self.a, self.b, self.c)
    }

    /// Barycentric coordinates `(u, v, w)` of `point` projected onto the
    /// triangle's plane, so that `point ≈ u·a + v·b + w·c`.
    pub fn barycentric(&self, point: Vec3) -> Option<(f64, f64, f64)> {
        let v0 = self.b - self.a;
        let v1 = self.c - self.a;
        let v2 = point - self.a;
        let d00 = v0.dot(v0);
        let d01 = v0.dot(v1);
        let d11 = v1.dot(v1);
        let d20 = v2.dot(v0);
        let d21 = v2.dot(v1);
        let denom = d00 * d11 - d01 * d01;
        if denom.abs() < EPSILON * EPSILON {
            return None;
        }
        let v = (d11 * d20 - d01 * d21) / denom;
        let w = (d00 * d21 - d01 * d20) / denom;
        Some((1.0 - v - w, v, w))
    }

    /// Returns true if `point` lies on the triangle within `tolerance`.
    pub fn contains_point(&self, point: Vec3, tolerance: f64) -> bool {
        (self.closest_point(point) - point).length() <= tolerance
    }

    /// Closest point on the triangle to `point`.
    ///
    /// Voronoi-region walk from Ericson, *Real-Time Collision Detection*, §5.1.5.
    pub fn closest_point(&self, p: Vec3) -> Vec3 {
        let (a, b, c) = (self.a, self.b, self.c);
        let ab = b - a;
        let ac = c - a;
        let ap = p - a;
        let d1 = ab.dot(ap);
        let d2 = ac.dot(ap);
        if d1 <= 0.0 && d2 <= 0.0 {
            return a;
        }

        let bp = p - b;
        let d3 = ab.dot(bp);
        let d4 = ac.dot(bp);
        if d3 >= 0.0 && d4 <= d3 {
            return b;
        }

        let vc = d1 * d4 - d3 * d2;
        if vc <= 0.0 && d1 >= 0.0 && d3 <= 0.0 {
            let v = d1 / (d1 - d3);
            return a + ab * v;
        }

        let cp = p - c;
        let d5 = ab.dot(cp);
        let d6 = ac.dot(cp);
        if d6 >= 0.0 && d5 <= d6 {
            return c;
        }

        let vb = d5 * d2 - d1 * d6;
        if vb <= 0.0 && d2 >= 0.0 && d6 <= 0.0 {
            let w = d2 / (d2 - d6);
            return a + ac * w;
        }

        let va = d3 * d6 - d5 * d4;
        if va <= 0.0 && (d4 - d3) >= 0.0 && (d5 - d6) >= 0.0 {
            let w = (d4 - d3) / ((d4 - d3) + (d5 - d6));
            return b + (c - b) * w;
        }

        let denom = va + vb + vc;
        if denom.abs() < EPSILON * EPSILON {
            // Degenerate triangle: fall back to the closest edge.
            return self
                .edges()
                .iter()
                .map(|e| e.closest_point(p).0)
                .min_by(|x, y| (*x - p).length_squared().total_cmp(&(*y - p).length_squared()))
                .unwrap_or(a);
        }
        let v = vb / denom;
        let w = vc / denom;
        a + ab * v + ac * w
    }

    /// Parameter of the point where `segment` passes through the triangle.
    ///
    /// Returns `None` if the segment misses the triangle or runs parallel to
    /// its plane.
    pub fn intersect_segment(&self, segment: &LineSegment, tolerance: f64) -> Option<f64> {
        let plane = self.plane()?;
        let t = plane.intersect_line(segment.a, segment.dir())?;
        let len = segment.length().max(EPSILON);
        let slack = tolerance / len;
        if t < -slack || t > 1.0 + slack {
            return None;
        }
        let hit = segment.point_at(t.clamp(0.0, 1.0));
        if self.contains_point(hit, tolerance) {
            Some(t.clamp(0.0, 1.0))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests;
