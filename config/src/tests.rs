//! # Tests for Config Constants
//!
//! Unit tests verifying the relationships between tolerance constants
//! and the helper functions.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_epsilon_is_positive() {
    assert!(EPSILON > 0.0, "EPSILON must be positive");
}

#[test]
fn test_distance_tolerance_larger_than_epsilon() {
    assert!(
        DISTANCE_TOLERANCE >= EPSILON,
        "DISTANCE_TOLERANCE should be >= EPSILON"
    );
}

#[test]
fn test_weld_epsilon_larger_than_epsilon() {
    assert!(
        VERTEX_WELD_EPSILON >= EPSILON,
        "VERTEX_WELD_EPSILON should be >= EPSILON"
    );
}

#[test]
fn test_area_epsilon_is_tiny() {
    assert!(AREA_EPSILON > 0.0);
    assert!(AREA_EPSILON < VERTEX_WELD_EPSILON);
}

// =============================================================================
// MATERIALIZATION TESTS
// =============================================================================

#[test]
fn test_seed_extent_dwarfs_weld_distance() {
    // The seed square must be far larger than anything welded together,
    // otherwise its corners would collapse.
    assert!(SEED_POLYGON_EXTENT > 1e6 * VERTEX_WELD_EPSILON);
}

// =============================================================================
// HELPER TESTS
// =============================================================================

#[test]
fn test_approx_equal() {
    assert!(approx_equal(2.0, 2.0 + 1e-12));
    assert!(!approx_equal(2.0, 2.001));
}

#[test]
fn test_approx_zero() {
    assert!(approx_zero(-1e-12));
    assert!(!approx_zero(1e-3));
}
