//! # Error Types
//!
//! Error types for kernel construction. Queries never fail: "not contained"
//! or "does not intersect" are ordinary boolean results, and degenerate
//! regions materialize into inspectable degenerate meshes.
//!
//! ## Error Policy
//!
//! - Malformed input (bad face indices, capacity overflow) is rejected
//!   where it enters the data model
//! - Once a [`crate::Polyhedron`] exists its indices are known to be valid

use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors raised when building kernel values.
///
/// ## Example
///
/// ```rust
/// use polyhedron_kernel::{GeometryError, Polyhedron, Vec3};
///
/// let mut poly = Polyhedron::new();
/// poly.add_vertex(Vec3::ZERO);
/// match poly.add_face(vec![0, 1, 2]) {
///     Err(GeometryError::IndexOutOfBounds { index, .. }) => assert_eq!(index, 1),
///     other => panic!("unexpected: {other:?}"),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// A face references a vertex that does not exist.
    #[error("Face {face} references vertex {index}, but only {vertex_count} vertices exist")]
    IndexOutOfBounds {
        /// Position of the offending face.
        face: usize,
        /// The out-of-range vertex index.
        index: usize,
        /// Number of vertices in the polyhedron.
        vertex_count: usize,
    },

    /// A face loop has fewer than three corners.
    #[error("Face {face} has {len} vertices, at least 3 are required")]
    DegenerateFace {
        /// Position of the offending face.
        face: usize,
        /// Number of indices in the loop.
        len: usize,
    },

    /// A plane was pushed into a full plane-bounded volume.
    #[error("Plane-bounded volume is full (capacity {capacity})")]
    CapacityExceeded {
        /// Fixed capacity of the volume.
        capacity: usize,
    },

    /// Tolerance configuration was rejected.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for kernel construction.
pub type GeometryResult<T> = Result<T, GeometryError>;

// =============================================================================
// TESTS
// =============================================================================
