//! # Linear Primitives
//!
//! Line segments, infinite lines and rays, with the closest-point helpers
//! the polyhedron queries consume.

use config::constants::EPSILON;
use serde::{Deserialize, Serialize};

use crate::core::vec3::Vec3;

// =============================================================================
// LINE SEGMENT
// =============================================================================

/// A finite segment from `a` to `b`, parameterized as `a + t·(b - a)`, `t ∈ [0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    /// Start point.
    pub a: Vec3,
    /// End point.
    pub b: Vec3,
}

impl LineSegment {
    /// Create segment from its endpoints.
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self { a, b }
    }

    /// Unnormalized direction `b - a`.
    #[inline]
    pub fn dir(&self) -> Vec3 {
        self.b - self.a
    }

    /// Segment length.
    pub fn length(&self) -> f64 {
        self.dir().length()
    }

    /// Point at parameter `t`.
    #[inline]
    pub fn point_at(&self, t: f64) -> Vec3 {
        self.a.lerp(self.b, t)
    }

    /// Closest point on the segment to `point`, with its parameter.
    pub fn closest_point(&self, point: Vec3) -> (Vec3, f64) {
        let d = self.dir();
        let len_sq = d.length_squared();
        if len_sq < EPSILON * EPSILON {
            return (self.a, 0.0);
        }
        let t = ((point - self.a).dot(d) / len_sq).clamp(0.0, 1.0);
        (self.point_at(t), t)
    }

    /// Distance from `point` to the segment.
    pub fn distance(&self, point: Vec3) -> f64 {
        (self.closest_point(point).0 - point).length()
    }

    /// Closest pair between two segments: `(on_self, on_other)`.
    ///
    /// Follows Ericson, *Real-Time Collision Detection*, §5.1.9.
    pub fn closest_points(&self, other: &LineSegment) -> (Vec3, Vec3) {
        let d1 = self.dir();
        let d2 = other.dir();
        let r = self.a - other.a;
        let a = d1.length_squared();
        let e = d2.length_squared();
        let f = d2.dot(r);

        let eps = EPSILON * EPSILON;
        if a <= eps && e <= eps {
            return (self.a, other.a);
        }

        let (s, t) = if a <= eps {
            (0.0, (f / e).clamp(0.0, 1.0))
        } else {
            let c = d1.dot(r);
            if e <= eps {
                ((-c / a).clamp(0.0, 1.0), 0.0)
            } else {
                let b = d1.dot(d2);
                let denom = a * e - b * b;
                let mut s = if denom.abs() > eps {
                    ((b * f - c * e) / denom).clamp(0.0, 1.0)
                } else {
                    0.0
                };
                let mut t = (b * s + f) / e;
                if t < 0.0 {
                    t = 0.0;
                    s = (-c / a).clamp(0.0, 1.0);
                } else if t > 1.0 {
                    t = 1.0;
                    s = ((b - c) / a).clamp(0.0, 1.0);
                }
                (s, t)
            }
        };

        (self.point_at(s), other.point_at(t))
    }

    /// Distance between two segments.
    pub fn distance_to_segment(&self, other: &LineSegment) -> f64 {
        let (p, q) = self.closest_points(other);
        (p - q).length()
    }

    /// Same segment traversed from `b` to `a`.
    pub fn reversed(&self) -> LineSegment {
        LineSegment::new(self.b, self.a)
    }
}

// =============================================================================
// LINE
// =============================================================================

/// An infinite line `pos + t·dir`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line {
    /// A point on the line.
    pub pos: Vec3,
    /// Unit direction.
    pub dir: Vec3,
}

impl Line {
    /// Create line through `pos`; `dir` is normalized.
    pub fn new(pos: Vec3, dir: Vec3) -> Self {
        Self {
            pos,
            dir: dir.normalize_or_zero(),
        }
    }

    /// Point at parameter `t`.
    #[inline]
    pub fn point_at(&self, t: f64) -> Vec3 {
        self.pos + self.dir * t
    }

    /// Closest point on the line to `point`.
    pub fn closest_point(&self, point: Vec3) -> Vec3 {
        self.point_at((point - self.pos).dot(self.dir))
    }
}

// =============================================================================
// RAY
// =============================================================================

/// A half-line `pos + t·dir`, `t >= 0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ray {
    /// Ray origin.
    pub pos: Vec3,
    /// Unit direction.
    pub dir: Vec3,
}

impl Ray {
    /// Create ray from `pos`; `dir` is normalized.
    pub fn new(pos: Vec3, dir: Vec3) -> Self {
        Self {
            pos,
            dir: dir.normalize_or_zero(),
        }
    }

    /// Point at parameter `t`.
    #[inline]
    pub fn point_at(&self, t: f64) -> Vec3 {
        self.pos + self.dir * t
    }

    /// Closest point on the ray to `point`.
    pub fn closest_point(&self, point: Vec3) -> Vec3 {
        self.point_at((point - self.pos).dot(self.dir).max(0.0))
    }
}

#[cfg(test)]
mod tests;
