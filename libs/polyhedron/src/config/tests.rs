//! Tests covering kernel configuration behavior.

use super::*;

#[test]
fn default_matches_constants() {
    let cfg = KernelConfig::default();
    assert_eq!(cfg.tolerance, DISTANCE_TOLERANCE);
    assert_eq!(cfg.weld_tolerance, VERTEX_WELD_EPSILON);
    assert_eq!(cfg.seed_extent, SEED_POLYGON_EXTENT);
}

#[test]
fn builder_validates_input() {
    let err = KernelConfig::new(0.0, 1e-6, 1e6).unwrap_err();
    assert_eq!(err, KernelConfigError(ConfigError::InvalidTolerance(0.0)));
}

#[test]
fn with_tolerance_keeps_other_fields() {
    let cfg = KernelConfig::default().with_tolerance(1e-3).unwrap();
    assert_eq!(cfg.tolerance, 1e-3);
    assert_eq!(cfg.weld_tolerance, VERTEX_WELD_EPSILON);
}

#[test]
fn config_error_converts_to_geometry_error() {
    let err: GeometryError = KernelConfig::new(1e-6, 0.0, 1e6).unwrap_err().into();
    assert!(matches!(err, GeometryError::InvalidConfig(msg) if msg.contains("weld_tolerance")));
}
