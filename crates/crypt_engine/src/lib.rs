//! # Crypt Engine
//!
//! Scene object model and render-list plumbing for a small real-time 3D
//! engine.
//!
//! ## Features
//!
//! - **Objects**: transform, meshes, physics bounds, audio and animation in one entity
//! - **Assets**: OBJ/MTL models with optional skeleton and animation files
//! - **Seams**: renderer, audio backend and importer are traits, with null
//!   implementations for headless use
//! - **Configuration**: TOML or RON files through [`config::Config`]
//!
//! ## Quick Start
//!
//! ```rust
//! use crypt_engine::prelude::*;
//!
//! let mut store = ObjectStore::with_key();
//! let mut renderer = NullRenderer::new();
//!
//! let mut cube = factory::create_box(4.0, 4.0, 4.0);
//! cube.position.y = 2.0;
//! renderer.init_object(&mut cube).unwrap();
//! let id = store.insert(cube);
//!
//! let mut list = RenderList::new();
//! list.push(id);
//! assert_eq!(list.resolve(&store).count(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod animation;
pub mod assets;
pub mod audio;
pub mod config;
pub mod foundation;
pub mod physics;
pub mod render;
pub mod scene;

/// Commonly used types
pub mod prelude {
    pub use crate::animation::{Animation, Skeleton};
    pub use crate::assets::{AssetError, FileImporter, Importer};
    pub use crate::audio::{AudioBackend, AudioError, AudioSource, NullAudioBackend};
    pub use crate::config::{Config, ConfigError};
    pub use crate::foundation::math::{Mat4, Quat, Vec3};
    pub use crate::physics::Aabb;
    pub use crate::render::{
        Light, LightType, Material, Mesh, NullRenderer, ObjectRenderer, RenderError, RenderList, Vertex,
    };
    pub use crate::scene::{factory, Object, ObjectId, ObjectStore};
}
