//! # Polyhedron
//!
//! Indexed polygon mesh: a vertex array plus face loops of indices into it.
//! Faces wind counter-clockwise seen from outside the solid.
//!
//! ## Submodules
//!
//! - `topology`: edges, closedness, Euler check, set equality
//! - `metrics`: area, volume, centroid, extreme vertex, bounds
//! - `containment`: point and shape containment
//! - `distance`: closest points
//! - `intersection`: intersection predicates

mod containment;
mod distance;
mod intersection;
mod metrics;
mod topology;

use serde::{Deserialize, Serialize};

use crate::core::vec3::{newell_normal, Vec3};
use crate::error::{GeometryError, GeometryResult};
use crate::primitives::{Plane, Polygon};

// =============================================================================
// FACE
// =============================================================================

/// A closed loop of vertex indices.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Face {
    /// Vertex indices, counter-clockwise seen from outside.
    pub indices: Vec<usize>,
}

impl Face {
    /// Create face from its index loop.
    pub fn new(indices: Vec<usize>) -> Self {
        Self { indices }
    }

    /// Number of corners.
    #[inline]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns true if the loop is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Directed edges `(from, to)` of the loop, closing edge last.
    pub fn directed_edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n = self.indices.len();
        (0..n).map(move |i| (self.indices[i], self.indices[(i + 1) % n]))
    }
}

// =============================================================================
// POLYHEDRON
// =============================================================================

/// A polyhedral solid as an indexed face set.
///
/// Fields are private so that every face index is known to be in range.
///
/// # Example
///
/// ```rust
/// use polyhedron_kernel::{Polyhedron, Vec3};
///
/// let tetra = Polyhedron::from_parts(
///     vec![Vec3::ZERO, Vec3::X, Vec3::Y, Vec3::Z],
///     vec![vec![0, 2, 1], vec![0, 1, 3], vec![0, 3, 2], vec![1, 2, 3]],
/// )
/// .unwrap();
/// assert!(tetra.is_closed());
/// assert!((tetra.volume() - 1.0 / 6.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PolyhedronParts", into = "PolyhedronParts")]
pub struct Polyhedron {
    vertices: Vec<Vec3>,
    faces: Vec<Face>,
}

/// Serialized form; deserialization revalidates face indices.
#[derive(Serialize, Deserialize)]
struct PolyhedronParts {
    vertices: Vec<Vec3>,
    faces: Vec<Vec<usize>>,
}

impl TryFrom<PolyhedronParts> for Polyhedron {
    type Error = GeometryError;

    fn try_from(parts: PolyhedronParts) -> GeometryResult<Self> {
        Polyhedron::from_parts(parts.vertices, parts.faces)
    }
}

impl From<Polyhedron> for PolyhedronParts {
    fn from(poly: Polyhedron) -> Self {
        Self {
            vertices: poly.vertices,
            faces: poly.faces.into_iter().map(|f| f.indices).collect(),
        }
    }
}

impl Polyhedron {
    /// Creates the null polyhedron: no vertices, no faces.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a polyhedron from vertices and face index loops.
    ///
    /// # Errors
    ///
    /// [`GeometryError::DegenerateFace`] for a loop with fewer than three
    /// indices, [`GeometryError::IndexOutOfBounds`] for an index past the
    /// vertex array.
    pub fn from_parts(vertices: Vec<Vec3>, faces: Vec<Vec<usize>>) -> GeometryResult<Self> {
        let mut poly = Self {
            vertices,
            faces: Vec::with_capacity(faces.len()),
        };
        for indices in faces {
            poly.add_face(indices)?;
        }
        Ok(poly)
    }

    /// Builds a polyhedron from loops already known to be valid.
    pub(crate) fn from_trusted(vertices: Vec<Vec3>, faces: Vec<Vec<usize>>) -> Self {
        debug_assert!(faces
            .iter()
            .all(|f| f.len() >= 3 && f.iter().all(|&i| i < vertices.len())));
        Self {
            vertices,
            faces: faces.into_iter().map(Face::new).collect(),
        }
    }

    /// Appends a vertex and returns its index.
    pub fn add_vertex(&mut self, position: Vec3) -> usize {
        self.vertices.push(position);
        self.vertices.len() - 1
    }

    /// Appends a face loop and returns its index.
    ///
    /// # Errors
    ///
    /// Same as [`Polyhedron::from_parts`].
    pub fn add_face(&mut self, indices: Vec<usize>) -> GeometryResult<usize> {
        let face = self.faces.len();
        if indices.len() < 3 {
            return Err(GeometryError::DegenerateFace {
                face,
                len: indices.len(),
            });
        }
        if let Some(&index) = indices.iter().find(|&&i| i >= self.vertices.len()) {
            return Err(GeometryError::IndexOutOfBounds {
                face,
                index,
                vertex_count: self.vertices.len(),
            });
        }
        self.faces.push(Face::new(indices));
        Ok(face)
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    /// Returns true for the polyhedron with no vertices and no faces.
    #[inline]
    pub fn is_null(&self) -> bool {
        self.vertices.is_empty() && self.faces.is_empty()
    }

    /// Number of vertices.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Number of faces.
    #[inline]
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    /// Vertex positions.
    #[inline]
    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    /// Face loops.
    #[inline]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Vertex at `index`. Panics when out of range.
    #[inline]
    pub fn vertex(&self, index: usize) -> Vec3 {
        self.vertices[index]
    }

    /// Face at `index`. Panics when out of range.
    #[inline]
    pub fn face(&self, index: usize) -> &Face {
        &self.faces[index]
    }

    /// Corner positions of face `index` in loop order.
    pub fn face_polygon(&self, index: usize) -> Polygon {
        Polygon::new(self.face_points(&self.faces[index]))
    }

    /// Outward plane of face `index` by Newell's method.
    ///
    /// `None` when the face has zero area.
    pub fn face_plane(&self, index: usize) -> Option<Plane> {
        let points = self.face_points(&self.faces[index]);
        let normal = newell_normal(&points).try_normalize()?;
        let center = points.iter().copied().sum::<Vec3>() / points.len() as f64;
        Some(Plane::new(normal, -normal.dot(center)))
    }

    /// Outward planes of all non-degenerate faces, in face order.
    pub fn face_planes(&self) -> Vec<Plane> {
        (0..self.faces.len())
            .filter_map(|i| self.face_plane(i))
            .collect()
    }

    /// All face polygons in face order.
    pub fn face_polygons(&self) -> Vec<Polygon> {
        (0..self.faces.len()).map(|i| self.face_polygon(i)).collect()
    }

    fn face_points(&self, face: &Face) -> Vec<Vec3> {
        face.indices.iter().map(|&i| self.vertices[i]).collect()
    }

    /// Fan triangulation of every face as vertex index triples.
    pub fn triangulate(&self) -> Vec<[usize; 3]> {
        self.faces
            .iter()
            .flat_map(|face| {
                let idx = &face.indices;
                (1..idx.len().saturating_sub(1)).map(move |k| [idx[0], idx[k], idx[k + 1]])
            })
            .collect()
    }
}
