//! Kernel-level configuration helpers building on the shared `config` crate.
//!
//! Tolerance-sensitive queries have a `*_with` variant that accepts a
//! [`KernelConfig`] (or a bare tolerance), so tests can tune thresholds per
//! scenario without touching the constants.

use ::config::constants::{
    ConfigError, GlobalConfig, DISTANCE_TOLERANCE, SEED_POLYGON_EXTENT, VERTEX_WELD_EPSILON,
};

use crate::error::GeometryError;

/// Geometry kernel configuration wrapper.
///
/// # Examples
/// ```
/// use polyhedron_kernel::KernelConfig;
/// let cfg = KernelConfig::default();
/// assert!(cfg.tolerance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KernelConfig {
    /// Distance tolerance for sidedness and containment.
    pub tolerance: f64,
    /// Distance under which materialized vertices are welded.
    pub weld_tolerance: f64,
    /// Half-extent of the seed square used during materialization.
    pub seed_extent: f64,
}

impl KernelConfig {
    /// Creates a new configuration from explicit values.
    ///
    /// # Examples
    /// ```
    /// use polyhedron_kernel::KernelConfig;
    /// let cfg = KernelConfig::new(1.0e-5, 1.0e-5, 1.0e4).unwrap();
    /// assert_eq!(cfg.seed_extent, 1.0e4);
    /// ```
    pub fn new(
        tolerance: f64,
        weld_tolerance: f64,
        seed_extent: f64,
    ) -> Result<Self, KernelConfigError> {
        GlobalConfig::new(tolerance, weld_tolerance, seed_extent)
            .map(Self::from)
            .map_err(KernelConfigError)
    }

    /// Returns a copy with a different distance tolerance.
    pub fn with_tolerance(self, tolerance: f64) -> Result<Self, KernelConfigError> {
        Self::new(tolerance, self.weld_tolerance, self.seed_extent)
    }
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            tolerance: DISTANCE_TOLERANCE,
            weld_tolerance: VERTEX_WELD_EPSILON,
            seed_extent: SEED_POLYGON_EXTENT,
        }
    }
}

impl From<GlobalConfig> for KernelConfig {
    fn from(cfg: GlobalConfig) -> Self {
        Self {
            tolerance: cfg.tolerance,
            weld_tolerance: cfg.weld_tolerance,
            seed_extent: cfg.seed_extent,
        }
    }
}

/// Error wrapper for invalid kernel configuration.
#[derive(Debug, PartialEq)]
pub struct KernelConfigError(ConfigError);

impl std::fmt::Display for KernelConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for KernelConfigError {}

impl From<KernelConfigError> for GeometryError {
    fn from(err: KernelConfigError) -> Self {
        GeometryError::InvalidConfig(err.to_string())
    }
}

#[cfg(test)]
mod tests;
