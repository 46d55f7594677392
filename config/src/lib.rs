//! # Config Crate
//!
//! Centralized configuration constants for the polyhedron kernel.
//! All tolerances and tunable parameters are defined here to ensure
//! consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DISTANCE_TOLERANCE, EPSILON};
//!
//! // Use EPSILON for algebraic degeneracy checks
//! let value: f64 = 1e-11;
//! assert!(value.abs() < EPSILON);
//!
//! // Use DISTANCE_TOLERANCE for half-space sidedness
//! let signed_distance = -0.25;
//! assert!(signed_distance <= DISTANCE_TOLERANCE);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **No Dependencies**: Pure configuration values
//! - **Tunable**: [`constants::GlobalConfig`] lets callers override defaults

pub mod constants;

#[cfg(test)]
mod tests;
