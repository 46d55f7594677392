//! # Vertex Welder
//!
//! Spatial hash that merges points closer than a tolerance into one shared
//! index, so faces clipped independently end up referencing the same
//! vertices along their common edges.

use std::collections::HashMap;

use crate::core::vec3::Vec3;

/// Cell size as a multiple of the weld tolerance.
const CELL_SIZE_FACTOR: f64 = 2.0;

/// Grid cell coordinate. `i64` because seed polygons reach far from the
/// origin relative to the tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct CellCoord {
    x: i64,
    y: i64,
    z: i64,
}

impl CellCoord {
    fn from_position(pos: Vec3, cell_size: f64) -> Self {
        Self {
            x: (pos.x / cell_size).floor() as i64,
            y: (pos.y / cell_size).floor() as i64,
            z: (pos.z / cell_size).floor() as i64,
        }
    }

    fn neighbors(self) -> impl Iterator<Item = CellCoord> {
        (-1..=1).flat_map(move |dx| {
            (-1..=1).flat_map(move |dy| {
                (-1..=1).map(move |dz| CellCoord {
                    x: self.x + dx,
                    y: self.y + dy,
                    z: self.z + dz,
                })
            })
        })
    }
}

/// Insertion-ordered vertex pool with tolerance-based deduplication.
#[derive(Debug)]
pub(crate) struct VertexWelder {
    vertices: Vec<Vec3>,
    grid: HashMap<CellCoord, Vec<usize>>,
    cell_size: f64,
    tolerance: f64,
}

impl VertexWelder {
    pub(crate) fn new(tolerance: f64) -> Self {
        Self {
            vertices: Vec::new(),
            grid: HashMap::new(),
            cell_size: tolerance * CELL_SIZE_FACTOR,
            tolerance,
        }
    }

    /// Index of an existing vertex within tolerance of `point`, or of
    /// `point` newly appended.
    pub(crate) fn insert(&mut self, point: Vec3) -> usize {
        let cell = CellCoord::from_position(point, self.cell_size);
        let existing = cell
            .neighbors()
            .filter_map(|c| self.grid.get(&c))
            .flatten()
            .copied()
            .filter(|&i| (self.vertices[i] - point).length() <= self.tolerance)
            .min();
        if let Some(index) = existing {
            return index;
        }

        let index = self.vertices.len();
        self.vertices.push(point);
        self.grid.entry(cell).or_default().push(index);
        index
    }

    pub(crate) fn into_vertices(self) -> Vec<Vec3> {
        self.vertices
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weld_merges_close_points() {
        let mut welder = VertexWelder::new(1e-6);
        let a = welder.insert(Vec3::new(1.0, 2.0, 3.0));
        let b = welder.insert(Vec3::new(1.0 + 5e-7, 2.0, 3.0));
        let c = welder.insert(Vec3::new(1.0 + 5e-6, 2.0, 3.0));
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(welder.into_vertices().len(), 2);
    }

    #[test]
    fn test_weld_across_cell_boundary() {
        let mut welder = VertexWelder::new(1e-6);
        // Straddle the cell boundary at x = 0.
        let a = welder.insert(Vec3::new(-1e-7, 0.0, 0.0));
        let b = welder.insert(Vec3::new(1e-7, 0.0, 0.0));
        assert_eq!(a, b);
    }

    #[test]
    fn test_weld_keeps_insertion_order() {
        let mut welder = VertexWelder::new(1e-6);
        assert_eq!(welder.insert(Vec3::X), 0);
        assert_eq!(welder.insert(Vec3::Y), 1);
        assert_eq!(welder.insert(Vec3::X), 0);
        assert_eq!(welder.into_vertices(), vec![Vec3::X, Vec3::Y]);
    }
}
