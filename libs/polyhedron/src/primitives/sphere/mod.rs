//! # Sphere

use config::constants::DISTANCE_TOLERANCE;
use serde::{Deserialize, Serialize};

use crate::core::vec3::Vec3;

/// Solid ball of `radius` around `center`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sphere {
    /// Center point.
    pub center: Vec3,
    /// Radius, never negative.
    pub radius: f64,
}

impl Sphere {
    /// Create sphere; a negative radius is taken by magnitude.
    pub fn new(center: Vec3, radius: f64) -> Self {
        Self {
            center,
            radius: radius.abs(),
        }
    }

    /// Returns true if `point` is inside or within tolerance of the sphere.
    pub fn contains_point(&self, point: Vec3) -> bool {
        point.distance(self.center) <= self.radius + DISTANCE_TOLERANCE
    }

    /// Closest point of the solid ball to `point`.
    pub fn closest_point(&self, point: Vec3) -> Vec3 {
        let d = point - self.center;
        let len = d.length();
        if len <= self.radius {
            point
        } else {
            self.center + d * (self.radius / len)
        }
    }

    /// Distance from `point` to the ball, zero inside.
    pub fn distance(&self, point: Vec3) -> f64 {
        (point.distance(self.center) - self.radius).max(0.0)
    }

    /// Returns true if both spheres overlap.
    pub fn intersects_sphere(&self, other: &Sphere) -> bool {
        self.center.distance(other.center) <= self.radius + other.radius + DISTANCE_TOLERANCE
    }
}
