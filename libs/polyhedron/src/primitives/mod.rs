//! # Primitives
//!
//! Value types the kernel builds on and tests against.
//!
//! ## Submodules
//!
//! - [`plane`]: Oriented plane and point classification
//! - [`segment`]: Line, ray and line segment
//! - [`triangle`]: Triangle with barycentric queries
//! - [`polygon`]: Planar polygon loop, clipping and containment
//! - [`aabb`]: Axis-aligned box
//! - [`obb`]: Oriented box
//! - [`sphere`]: Solid ball

pub mod aabb;
pub mod obb;
pub mod plane;
pub mod polygon;
pub mod segment;
pub mod sphere;
pub mod triangle;

pub use aabb::Aabb;
pub use obb::Obb;
pub use plane::{Classification, Plane};
pub use polygon::Polygon;
pub use segment::{Line, LineSegment, Ray};
pub use sphere::Sphere;
pub use triangle::Triangle;
