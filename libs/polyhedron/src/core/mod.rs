//! Core data structures and types for the polyhedron kernel.
//!
//! Includes the vector alias (`Vec3`) and small vector helpers shared by the
//! primitives, the polyhedron queries and materialization.

pub mod vec3;
