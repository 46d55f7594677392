//! Edge topology and structural predicates.

use std::collections::{BTreeSet, HashMap};

use config::constants::DISTANCE_TOLERANCE;

use super::Polyhedron;
use crate::primitives::LineSegment;

impl Polyhedron {
    /// Unique undirected edges as sorted `(min, max)` index pairs.
    pub fn edge_indices(&self) -> Vec<(usize, usize)> {
        let edges: BTreeSet<(usize, usize)> = self
            .faces
            .iter()
            .flat_map(|f| f.directed_edges())
            .filter(|(a, b)| a != b)
            .map(|(a, b)| (a.min(b), a.max(b)))
            .collect();
        edges.into_iter().collect()
    }

    /// Number of unique undirected edges.
    pub fn num_edges(&self) -> usize {
        self.edge_indices().len()
    }

    /// Unique edges as segments, in [`Polyhedron::edge_indices`] order.
    pub fn edges(&self) -> Vec<LineSegment> {
        self.edge_indices()
            .into_iter()
            .map(|(a, b)| LineSegment::new(self.vertices[a], self.vertices[b]))
            .collect()
    }

    /// Edge `index` in [`Polyhedron::edge_indices`] order, `None` past the end.
    pub fn edge(&self, index: usize) -> Option<LineSegment> {
        self.edge_indices()
            .get(index)
            .map(|&(a, b)| LineSegment::new(self.vertices[a], self.vertices[b]))
    }

    /// Returns true if every directed edge appears exactly once and is
    /// matched by exactly one reversed edge.
    ///
    /// This is a quick watertightness check, not a full manifold test.
    pub fn is_closed(&self) -> bool {
        if self.faces.is_empty() {
            return false;
        }
        let mut count: HashMap<(usize, usize), usize> = HashMap::new();
        for edge in self.faces.iter().flat_map(|f| f.directed_edges()) {
            *count.entry(edge).or_insert(0) += 1;
        }
        count
            .iter()
            .all(|(&(a, b), &n)| n == 1 && count.get(&(b, a)) == Some(&1))
    }

    /// Returns true if no vertex lies in front of any face plane.
    pub fn is_convex(&self) -> bool {
        self.is_convex_with(DISTANCE_TOLERANCE)
    }

    /// Convexity test with an explicit tolerance.
    pub fn is_convex_with(&self, tolerance: f64) -> bool {
        (0..self.faces.len()).all(|i| match self.face_plane(i) {
            Some(plane) => self
                .vertices
                .iter()
                .all(|&v| plane.signed_distance(v) <= tolerance),
            None => true,
        })
    }

    /// Returns true if `V - E + F == 2`.
    pub fn euler_formula_holds(&self) -> bool {
        let v = self.vertices.len() as i64;
        let e = self.num_edges() as i64;
        let f = self.faces.len() as i64;
        v - e + f == 2
    }

    /// Returns true if both describe the same solid up to vertex order, face
    /// order and the starting corner of each face loop.
    pub fn set_equals(&self, other: &Polyhedron, tolerance: f64) -> bool {
        if self.vertices.len() != other.vertices.len() || self.faces.len() != other.faces.len() {
            return false;
        }

        // Vertex bijection self -> other.
        let mut mapping = Vec::with_capacity(self.vertices.len());
        let mut taken = vec![false; other.vertices.len()];
        for v in &self.vertices {
            let found = other
                .vertices
                .iter()
                .enumerate()
                .position(|(j, w)| !taken[j] && (*v - *w).length() <= tolerance);
            match found {
                Some(j) => {
                    taken[j] = true;
                    mapping.push(j);
                }
                None => return false,
            }
        }

        let mut used = vec![false; other.faces.len()];
        for face in &self.faces {
            let mapped: Vec<usize> = face.indices.iter().map(|&i| mapping[i]).collect();
            let matched = other.faces.iter().enumerate().position(|(j, f)| {
                !used[j] && is_rotation(&mapped, &f.indices)
            });
            match matched {
                Some(j) => used[j] = true,
                None => return false,
            }
        }
        true
    }
}

/// Returns true if `b` is a cyclic rotation of `a`.
fn is_rotation(a: &[usize], b: &[usize]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    if a.is_empty() {
        return true;
    }
    b.iter()
        .enumerate()
        .filter(|&(_, &x)| x == a[0])
        .any(|(start, _)| (0..a.len()).all(|k| a[k] == b[(start + k) % b.len()]))
}
