//! Mesh representation for 3D models
//!
//! A mesh is one sub-part of an object: vertex data, triangle indices and the
//! material used to shade it. Meshes are pure data; uploading them is up to
//! the renderer behind [`crate::render::ObjectRenderer`].

use crate::foundation::math::Vec3;
use crate::physics::Aabb;
use crate::render::Material;

/// Vertex data structure with position, normal, texture coordinates and tangent
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vertex {
    /// Position in 3D space
    pub position: [f32; 3],

    /// Normal vector
    pub normal: [f32; 3],

    /// Texture coordinates
    pub tex_coord: [f32; 2],

    /// Tangent vector for normal mapping
    pub tangent: [f32; 3],
}

impl Vertex {
    /// Create a vertex with a zero tangent
    pub const fn new(position: [f32; 3], normal: [f32; 3], tex_coord: [f32; 2]) -> Self {
        Self {
            position,
            normal,
            tex_coord,
            tangent: [0.0, 0.0, 0.0],
        }
    }

    /// Position as a vector
    pub fn position_vec(&self) -> Vec3 {
        Vec3::from(self.position)
    }
}

/// Triangle mesh sub-part with its own material
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Mesh {
    /// Vertex data
    pub vertices: Vec<Vertex>,

    /// Triangle list indices into `vertices`
    pub indices: Vec<u32>,

    /// Material used to shade this sub-part
    pub material: Material,
}

impl Mesh {
    /// Create a new mesh with the default material
    pub fn new(vertices: Vec<Vertex>, indices: Vec<u32>) -> Self {
        Self {
            vertices,
            indices,
            material: Material::default(),
        }
    }

    /// Replace the material
    #[must_use]
    pub fn with_material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    /// Number of complete triangles
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Local-space bounds of all vertices
    pub fn bounds(&self) -> Aabb {
        Aabb::from_points(self.vertices.iter().map(Vertex::position_vec))
    }

    /// Derive per-vertex tangents from texture coordinates
    ///
    /// Tangents are accumulated per triangle, then orthogonalized against the
    /// vertex normal. Vertices whose UVs are degenerate get an arbitrary
    /// tangent perpendicular to the normal.
    pub fn compute_tangents(&mut self) {
        let mut accum = vec![Vec3::zeros(); self.vertices.len()];

        for tri in self.indices.chunks_exact(3) {
            let [i0, i1, i2] = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
            let (Some(v0), Some(v1), Some(v2)) = (self.vertices.get(i0), self.vertices.get(i1), self.vertices.get(i2))
            else {
                log::warn!("Skipping triangle with out-of-range index in tangent pass");
                continue;
            };

            let e1 = Vec3::from(v1.position) - Vec3::from(v0.position);
            let e2 = Vec3::from(v2.position) - Vec3::from(v0.position);
            let du1 = v1.tex_coord[0] - v0.tex_coord[0];
            let dv1 = v1.tex_coord[1] - v0.tex_coord[1];
            let du2 = v2.tex_coord[0] - v0.tex_coord[0];
            let dv2 = v2.tex_coord[1] - v0.tex_coord[1];

            let det = du1 * dv2 - du2 * dv1;
            if det.abs() < f32::EPSILON {
                continue;
            }
            let tangent = (e1 * dv2 - e2 * dv1) / det;

            for i in [i0, i1, i2] {
                accum[i] += tangent;
            }
        }

        for (vertex, tangent) in self.vertices.iter_mut().zip(accum) {
            let normal = Vec3::from(vertex.normal);
            let ortho = tangent - normal * normal.dot(&tangent);
            let t = ortho.try_normalize(f32::EPSILON).unwrap_or_else(|| any_perpendicular(&normal));
            vertex.tangent = [t.x, t.y, t.z];
        }
    }
}

fn any_perpendicular(normal: &Vec3) -> Vec3 {
    let axis = if normal.x.abs() < 0.9 { Vec3::x() } else { Vec3::y() };
    normal.cross(&axis).try_normalize(f32::EPSILON).unwrap_or_else(Vec3::x)
}
