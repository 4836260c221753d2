//! Rendering data and the renderer seam
//!
//! Meshes, materials, lights and the per-frame render list. Drawing itself
//! happens behind [`ObjectRenderer`].

pub mod backend;
pub mod lighting;
pub mod material;
pub mod mesh;
pub mod render_list;

pub use backend::{NullRenderer, ObjectRenderer, ObjectResourceHandle, RenderError};
pub use lighting::{Light, LightType};
pub use material::Material;
pub use mesh::{Mesh, Vertex};
pub use render_list::RenderList;
