//! # Materialization
//!
//! Converts an ordered plane list into an explicit polyhedron.
//!
//! ## Algorithm
//!
//! 1. Skip planes with a zero normal or coincident with an earlier plane
//! 2. Seed a large square in each remaining plane, centered on the
//!    projection of one reference point near the region
//! 3. Clip it against every other plane, keeping the back side
//! 4. Drop polygons left with fewer than three corners or no area
//! 5. Weld corners into a shared vertex array, in plane order

use config::constants::{approx_zero, AREA_EPSILON, EPSILON};
use glam::DMat3;
use log::{debug, trace};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::weld::VertexWelder;
use crate::config::KernelConfig;
use crate::core::vec3::Vec3;
use crate::polyhedron::Polyhedron;
use crate::primitives::{Plane, Polygon};

pub(crate) fn materialize(planes: &[Plane], config: &KernelConfig) -> Polyhedron {
    let active = active_planes(planes, config.tolerance);
    let reference = reference_point(planes, &active);
    trace!("seed squares centered near {reference}");

    #[cfg(feature = "parallel")]
    let polygons: Vec<Option<Polygon>> = active
        .par_iter()
        .map(|&i| face_polygon(planes, &active, i, reference, config))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let polygons: Vec<Option<Polygon>> = active
        .iter()
        .map(|&i| face_polygon(planes, &active, i, reference, config))
        .collect();

    weld_faces(planes.len(), polygons, &active, config)
}

/// Share the corners of the clipped polygons, in plane order.
fn weld_faces(
    plane_count: usize,
    polygons: Vec<Option<Polygon>>,
    active: &[usize],
    config: &KernelConfig,
) -> Polyhedron {
    let mut welder = VertexWelder::new(config.weld_tolerance);
    let mut faces = Vec::with_capacity(polygons.len());
    for (polygon, &index) in polygons.into_iter().zip(active) {
        let Some(polygon) = polygon else {
            continue;
        };
        let mut indices: Vec<usize> = polygon
            .vertices()
            .iter()
            .map(|&v| welder.insert(v))
            .collect();
        indices.dedup();
        while indices.len() > 1 && indices.first() == indices.last() {
            indices.pop();
        }
        if indices.len() < 3 {
            debug!("plane {index} collapsed to {} vertices after welding", indices.len());
            continue;
        }
        faces.push(indices);
    }

    let vertices = welder.into_vertices();
    debug!(
        "materialized {} planes into {} vertices and {} faces",
        plane_count,
        vertices.len(),
        faces.len()
    );
    if faces.is_empty() {
        return Polyhedron::new();
    }
    Polyhedron::from_trusted(vertices, faces)
}

/// Indices of planes that take part in clipping.
fn active_planes(planes: &[Plane], tolerance: f64) -> Vec<usize> {
    let mut active: Vec<usize> = Vec::with_capacity(planes.len());
    for (i, plane) in planes.iter().enumerate() {
        if approx_zero(plane.normal.length()) {
            debug!("plane {i} has a zero normal, skipped");
            continue;
        }
        if let Some(&j) = active
            .iter()
            .find(|&&j| planes[j].approx_eq(plane, tolerance))
        {
            debug!("plane {i} coincides with plane {j}, skipped");
            continue;
        }
        active.push(i);
    }
    active
}

/// Least-squares point of the active planes, minimizing the summed squared
/// distances to them.
///
/// For a bounded region this lands inside or next to it, wherever the region
/// sits. Directions no plane constrains are pulled towards the origin by the
/// `EPSILON` ridge term, which also keeps the system invertible.
fn reference_point(planes: &[Plane], active: &[usize]) -> Vec3 {
    let mut normal_matrix = DMat3::from_diagonal(Vec3::splat(EPSILON));
    let mut rhs = Vec3::ZERO;
    for &i in active {
        let len = planes[i].normal.length();
        let n = planes[i].normal / len;
        normal_matrix = normal_matrix + DMat3::from_cols(n * n.x, n * n.y, n * n.z);
        rhs -= n * (planes[i].offset / len);
    }
    normal_matrix.inverse() * rhs
}

/// The part of plane `index` inside every other active plane.
fn face_polygon(
    planes: &[Plane],
    active: &[usize],
    index: usize,
    reference: Vec3,
    config: &KernelConfig,
) -> Option<Polygon> {
    let plane = &planes[index];
    let mut polygon = seed_polygon(plane, reference, config.seed_extent);

    for &other in active.iter().filter(|&&j| j != index) {
        polygon = polygon.clip_back(&planes[other], config.tolerance);
        if polygon.len() < 3 {
            break;
        }
    }
    polygon.remove_duplicates(config.weld_tolerance);
    trace!("plane {index} clipped to {} vertices", polygon.len());

    if polygon.len() < 3 || polygon.area() < AREA_EPSILON {
        debug!("plane {index} does not bound the region, no face");
        return None;
    }
    Some(polygon)
}

/// Square of half-size `extent` in `plane`, counter-clockwise seen from the
/// front, centered on the projection of `reference`.
fn seed_polygon(plane: &Plane, reference: Vec3, extent: f64) -> Polygon {
    let normal = plane.normal.normalize();
    let plane = Plane::new(normal, plane.offset / plane.normal.length());
    let center = plane.project(reference);
    let (u, v) = plane.basis();
    Polygon::new(vec![
        center + (-u - v) * extent,
        center + (u - v) * extent,
        center + (u + v) * extent,
        center + (-u + v) * extent,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_seed_polygon_winds_with_normal() {
        let plane = Plane::new(Vec3::new(0.0, 0.6, 0.8), -2.0);
        let reference = Vec3::new(3.0, -1.0, 4.0);
        let seed = seed_polygon(&plane, reference, 10.0);
        assert!(seed.normal().unwrap().abs_diff_eq(plane.normal, 1e-12));
        for v in seed.vertices() {
            assert!(plane.distance(*v) < 1e-9);
        }
        assert_relative_eq!(seed.area(), 400.0, epsilon = 1e-9);

        let center = seed.vertices().iter().copied().sum::<Vec3>() / 4.0;
        assert!(center.abs_diff_eq(plane.project(reference), 1e-9));
    }

    #[test]
    fn test_reference_point_is_box_center() {
        let c = Vec3::new(2.0e6, -3.0, 5.0e5);
        let planes = [
            Plane::new(Vec3::NEG_X, c.x - 1.0),
            Plane::new(Vec3::X, -(c.x + 1.0)),
            Plane::new(Vec3::NEG_Y, c.y - 2.0),
            Plane::new(Vec3::Y, -(c.y + 2.0)),
            Plane::new(Vec3::NEG_Z, c.z - 1.0),
            Plane::new(Vec3::Z, -(c.z + 1.0)),
        ];
        let reference = reference_point(&planes, &[0, 1, 2, 3, 4, 5]);
        assert!(reference.abs_diff_eq(c, 1e-2));
    }

    #[test]
    fn test_reference_point_of_single_plane_is_its_foot() {
        let plane = Plane::new(Vec3::new(0.0, 0.0, 2.0), -6.0);
        let reference = reference_point(&[plane], &[0]);
        assert!(reference.abs_diff_eq(Vec3::new(0.0, 0.0, 3.0), 1e-6));
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_materialization_matches_sequential() {
        use crate::pb_volume::ToPbVolume;
        use crate::primitives::Obb;
        use glam::DQuat;
        use rand::rngs::StdRng;
        use rand::{Rng, SeedableRng};

        let mut rng = StdRng::seed_from_u64(0xc1a5);
        let cfg = KernelConfig::default();
        let random_obb = |rng: &mut StdRng| {
            let axis = Vec3::new(
                rng.random_range(-1.0..1.0),
                rng.random_range(-1.0..1.0),
                rng.random_range(0.1..1.0),
            )
            .normalize();
            let rotation = DQuat::from_axis_angle(axis, rng.random_range(0.1..3.0));
            let center = Vec3::new(
                rng.random_range(-1.0..1.0),
                rng.random_range(-1.0..1.0),
                rng.random_range(-1.0..1.0),
            );
            Obb::from_rotation(center, rotation, Vec3::splat(rng.random_range(0.5..2.0)))
        };

        for _ in 0..10 {
            let a = random_obb(&mut rng).to_pb_volume();
            let b = random_obb(&mut rng).to_pb_volume();
            let volume = a.set_intersection(&b);
            let planes = volume.planes();

            let active = active_planes(planes, cfg.tolerance);
            let reference = reference_point(planes, &active);
            let polygons = active
                .iter()
                .map(|&i| face_polygon(planes, &active, i, reference, &cfg))
                .collect();
            let sequential = weld_faces(planes.len(), polygons, &active, &cfg);

            let parallel = materialize(planes, &cfg);
            assert!(parallel.set_equals(&sequential, 1e-9));
        }
    }

    #[test]
    fn test_active_planes_skips_duplicates_and_zero_normals() {
        let planes = [
            Plane::new(Vec3::X, -1.0),
            Plane::new(Vec3::ZERO, 0.0),
            Plane::new(Vec3::X, -1.0 + 1e-9),
            Plane::new(Vec3::NEG_X, -1.0),
        ];
        assert_eq!(active_planes(&planes, 1e-6), vec![0, 3]);
    }

    #[test]
    fn test_face_polygon_missing_when_plane_is_redundant() {
        // x <= 5 is implied by x <= 1.
        let planes = [Plane::new(Vec3::X, -1.0), Plane::new(Vec3::X, -5.0)];
        let cfg = KernelConfig::default();
        assert!(face_polygon(&planes, &[0, 1], 1, Vec3::ZERO, &cfg).is_none());
        assert!(face_polygon(&planes, &[0, 1], 0, Vec3::ZERO, &cfg).is_some());
    }
}
