//! # Polyhedron Kernel
//!
//! Computational geometry for convex and general polyhedral solids.
//!
//! ## Architecture
//!
//! ```text
//! shape adapters (Aabb, Obb, convex Polyhedron)
//!       ↓ ToPbVolume
//! PbVolume (ordered half-space list) ──set_intersection──▶ PbVolume
//!       ↓ to_polyhedron (clip + weld)
//! Polyhedron (vertex array + index face loops)
//!       ↓
//! validity / metric / containment / distance / intersection queries
//! ```
//!
//! ## Conventions
//!
//! - A plane stores a unit `normal` and an `offset`; a point is inside its
//!   half-space when `normal·p + offset <= tolerance`.
//! - Face loops wind counter-clockwise seen from outside the solid.
//! - Degenerate input never errors at query time: an empty or unbounded
//!   volume materializes into a null or open polyhedron, which callers detect
//!   with [`Polyhedron::is_closed`] and [`Polyhedron::num_vertices`].
//!
//! ## Usage
//!
//! ```rust
//! use polyhedron_kernel::{Aabb, PbVolume, Plane, ToPbVolume, Vec3};
//!
//! let cube = Aabb::new(Vec3::splat(-1.0), Vec3::splat(1.0)).to_pb_volume();
//! let mut half = PbVolume::with_capacity(1);
//! half.push(Plane::new(Vec3::X, 0.0)).unwrap();
//!
//! let solid = cube.set_intersection(&half).to_polyhedron();
//! assert!(solid.is_closed());
//! assert!((solid.volume() - 4.0).abs() < 1e-6);
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod pb_volume;
pub mod polyhedron;
pub mod primitives;

pub use crate::config::KernelConfig;
pub use crate::core::vec3::Vec3;
pub use crate::error::{GeometryError, GeometryResult};
pub use crate::pb_volume::{CullResult, PbVolume, ToPbVolume};
pub use crate::polyhedron::{Face, Polyhedron};
pub use crate::primitives::{
    Aabb, Classification, Line, LineSegment, Obb, Plane, Polygon, Ray, Sphere, Triangle,
};
