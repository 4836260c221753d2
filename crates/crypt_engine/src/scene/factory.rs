//! Procedural primitives
//!
//! Both builders return an object with a single default-material mesh at the
//! origin, unit scale and identity rotation.

use crate::foundation::math::Vec3;
use crate::render::{Mesh, Vertex};
use crate::scene::Object;

// (normal, u, v) per face with u x v = normal, so corners listed
// (-u,-v), (+u,-v), (+u,+v), (-u,+v) wind counter-clockwise from outside.
const BOX_FACES: [([f32; 3], [f32; 3], [f32; 3]); 6] = [
    ([1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]),
    ([-1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]),
    ([0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, -1.0]),
    ([0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
    ([0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
    ([0.0, 0.0, -1.0], [-1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
];

const QUAD_CORNERS: [(f32, f32); 4] = [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)];

/// Box of `width x height x depth` centered on the origin
pub fn create_box(width: f32, height: f32, depth: f32) -> Object {
    let half = Vec3::new(width, height, depth) * 0.5;
    let mut vertices = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);

    for (normal, u, v) in BOX_FACES {
        let (n, u_axis, v_axis) = (Vec3::from(normal), Vec3::from(u), Vec3::from(v));
        let base = u32::try_from(vertices.len()).unwrap_or(u32::MAX);

        for (su, sv) in QUAD_CORNERS {
            let p = (n + u_axis * su + v_axis * sv).component_mul(&half);
            let uv = [(su + 1.0) * 0.5, (sv + 1.0) * 0.5];
            vertices.push(Vertex::new([p.x, p.y, p.z], normal, uv));
        }
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    Object::create(Vec3::zeros(), 1.0, vec![Mesh::new(vertices, indices)], false, None)
}

/// Horizontal plane spanning `[0, width] x [0, depth]` on XZ, facing +Y
pub fn create_plane(width: f32, depth: f32) -> Object {
    let up = [0.0, 1.0, 0.0];
    let vertices = vec![
        Vertex::new([0.0, 0.0, 0.0], up, [0.0, 0.0]),
        Vertex::new([width, 0.0, 0.0], up, [1.0, 0.0]),
        Vertex::new([width, 0.0, depth], up, [1.0, 1.0]),
        Vertex::new([0.0, 0.0, depth], up, [0.0, 1.0]),
    ];
    let indices = vec![0, 3, 2, 0, 2, 1];

    Object::create(Vec3::zeros(), 1.0, vec![Mesh::new(vertices, indices)], false, None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn face_normal(mesh: &Mesh, tri: usize) -> Vec3 {
        let p = |i: usize| Vec3::from(mesh.vertices[mesh.indices[tri * 3 + i] as usize].position);
        (p(1) - p(0)).cross(&(p(2) - p(0))).normalize()
    }

    #[test]
    fn test_box_is_centered_with_requested_size() {
        let cube = create_box(4.0, 2.0, 6.0);
        let bounds = cube.geometry_bounds();
        assert_relative_eq!(bounds.min, Vec3::new(-2.0, -1.0, -3.0));
        assert_relative_eq!(bounds.max, Vec3::new(2.0, 1.0, 3.0));
        assert_relative_eq!(cube.get_center(), Vec3::zeros());

        let mesh = &cube.meshes()[0];
        assert_eq!(mesh.vertices.len(), 24);
        assert_eq!(mesh.triangle_count(), 12);
    }

    #[test]
    fn test_box_winding_matches_normals() {
        let cube = create_box(4.0, 4.0, 4.0);
        let mesh = &cube.meshes()[0];
        for tri in 0..mesh.triangle_count() {
            let stored = Vec3::from(mesh.vertices[mesh.indices[tri * 3] as usize].normal);
            assert_relative_eq!(face_normal(mesh, tri), stored, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_plane_faces_up_from_origin_corner() {
        let plane = create_plane(1000.0, 1000.0);
        let mesh = &plane.meshes()[0];
        assert_relative_eq!(face_normal(mesh, 0), Vec3::new(0.0, 1.0, 0.0), epsilon = 1e-5);
        assert_relative_eq!(face_normal(mesh, 1), Vec3::new(0.0, 1.0, 0.0), epsilon = 1e-5);
        assert_relative_eq!(plane.get_center(), Vec3::new(500.0, 0.0, 500.0));
    }
}
