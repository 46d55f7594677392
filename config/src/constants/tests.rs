//! Tests for the centralized configuration constants.

use super::*;

/// Ensures default constants are sane and positive.
#[test]
fn default_constants_are_valid() {
    let cfg = GlobalConfig::default();
    assert!(cfg.tolerance > 0.0);
    assert!(cfg.weld_tolerance > 0.0);
    assert!(cfg.seed_extent > cfg.weld_tolerance);
}

/// Validates the builder rejects invalid values.
#[test]
fn new_validates_inputs() {
    assert_eq!(
        GlobalConfig::new(0.0, 1e-6, 1e6).unwrap_err(),
        ConfigError::InvalidTolerance(0.0)
    );
    assert_eq!(
        GlobalConfig::new(1e-6, -1.0, 1e6).unwrap_err(),
        ConfigError::InvalidWeldTolerance(-1.0)
    );
    assert_eq!(
        GlobalConfig::new(1e-6, 1e-3, 1e-4).unwrap_err(),
        ConfigError::InvalidSeedExtent(1e-4)
    );
}

#[test]
fn new_rejects_nan() {
    assert!(GlobalConfig::new(f64::NAN, 1e-6, 1e6).is_err());
    assert!(GlobalConfig::new(1e-6, 1e-6, f64::INFINITY).is_err());
}

#[test]
fn error_display_mentions_field() {
    let err = ConfigError::InvalidSeedExtent(0.5);
    assert!(err.to_string().contains("seed_extent"));
}
