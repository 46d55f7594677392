//! # Configuration Constants
//!
//! Centralized tolerances for the polyhedron kernel. Every sidedness test,
//! vertex weld and degenerate-area check reads its threshold from here so
//! that no literal epsilon is scattered through the geometry code.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Materialization**: Seed polygon size and welding distance
//! - **Runtime snapshot**: [`GlobalConfig`] for tests that tune tolerances

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for algebraic degeneracy checks.
///
/// Used where a quantity is compared against exact zero: normal lengths,
/// denominators of plane/line intersections, parallel-direction tests.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// let denom: f64 = 1e-12;
/// assert!(denom.abs() < EPSILON);
/// ```
pub const EPSILON: f64 = 1e-9;

/// Distance tolerance for sidedness and containment tests.
///
/// A point whose signed distance to a plane is at most this value is on the
/// inside (negative) half-space. Shared by every containment and
/// intersection query so that shapes touching along a boundary agree.
///
/// # Example
///
/// ```rust
/// use config::constants::DISTANCE_TOLERANCE;
///
/// let signed_distance = 5e-7;
/// assert!(signed_distance <= DISTANCE_TOLERANCE);
/// ```
pub const DISTANCE_TOLERANCE: f64 = 1e-6;

/// Epsilon for vertex welding during materialization.
///
/// Two computed corner points closer than this are merged into a single
/// shared vertex so adjacent faces reference the same index.
///
/// # Example
///
/// ```rust
/// use config::constants::VERTEX_WELD_EPSILON;
///
/// fn should_weld(a: [f64; 3], b: [f64; 3]) -> bool {
///     let dx = a[0] - b[0];
///     let dy = a[1] - b[1];
///     let dz = a[2] - b[2];
///     (dx * dx + dy * dy + dz * dz).sqrt() < VERTEX_WELD_EPSILON
/// }
///
/// assert!(should_weld([1.0, 0.0, 0.0], [1.0 + 1e-9, 0.0, 0.0]));
/// ```
pub const VERTEX_WELD_EPSILON: f64 = 1e-6;

/// Polygons whose area falls below this value are treated as degenerate.
pub const AREA_EPSILON: f64 = 1e-12;

// =============================================================================
// MATERIALIZATION CONSTANTS
// =============================================================================

/// Half-extent of the square that seeds each face before clipping.
///
/// Regions extending further than this from the plane's closest point to
/// the origin are truncated by the seed square, which is how unbounded
/// regions end up as open (non-closed) meshes.
///
/// # Example
///
/// ```rust
/// use config::constants::SEED_POLYGON_EXTENT;
///
/// assert!(SEED_POLYGON_EXTENT >= 1e3);
/// ```
pub const SEED_POLYGON_EXTENT: f64 = 1e6;

// =============================================================================
// HELPERS
// =============================================================================

/// Checks if two f64 values are approximately equal within [`EPSILON`].
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-11));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Checks if a f64 value is approximately zero within [`EPSILON`].
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-11));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}

// =============================================================================
// GLOBAL CONFIG
// =============================================================================

/// Immutable snapshot of the tolerances used by the geometry kernel.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let config = GlobalConfig::default();
/// assert!(config.tolerance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalConfig {
    /// Distance tolerance for sidedness and containment.
    pub tolerance: f64,
    /// Distance under which materialized vertices are welded.
    pub weld_tolerance: f64,
    /// Half-extent of the seed square used during materialization.
    pub seed_extent: f64,
}

impl GlobalConfig {
    /// Builds a configuration, rejecting non-positive or non-finite values.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(1.0e-5, 1.0e-5, 1.0e4).expect("valid config");
    /// assert_eq!(cfg.seed_extent, 1.0e4);
    /// ```
    pub fn new(tolerance: f64, weld_tolerance: f64, seed_extent: f64) -> Result<Self, ConfigError> {
        if !(tolerance > 0.0 && tolerance.is_finite()) {
            return Err(ConfigError::InvalidTolerance(tolerance));
        }
        if !(weld_tolerance > 0.0 && weld_tolerance.is_finite()) {
            return Err(ConfigError::InvalidWeldTolerance(weld_tolerance));
        }
        if !(seed_extent > weld_tolerance && seed_extent.is_finite()) {
            return Err(ConfigError::InvalidSeedExtent(seed_extent));
        }
        Ok(Self {
            tolerance,
            weld_tolerance,
            seed_extent,
        })
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            tolerance: DISTANCE_TOLERANCE,
            weld_tolerance: VERTEX_WELD_EPSILON,
            seed_extent: SEED_POLYGON_EXTENT,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when the distance tolerance is zero, negative or not finite.
    InvalidTolerance(f64),
    /// Raised when the weld tolerance is zero, negative or not finite.
    InvalidWeldTolerance(f64),
    /// Raised when the seed extent does not exceed the weld tolerance.
    InvalidSeedExtent(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance(value) => {
                write!(f, "tolerance must be positive: {value}")
            }
            ConfigError::InvalidWeldTolerance(value) => {
                write!(f, "weld_tolerance must be positive: {value}")
            }
            ConfigError::InvalidSeedExtent(value) => {
                write!(f, "seed_extent must exceed the weld tolerance: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests;
