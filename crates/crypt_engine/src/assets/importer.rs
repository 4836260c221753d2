//! Directory-based model importer
//!
//! A model called `name` lives in `<root>/<name>/`:
//!
//! - `<name>.obj` (required) with its `mtllib`
//! - `<name>.skl` (optional) skeleton
//! - `<name>.anm` (optional) animation clip, registered under `name`

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::animation::Skeleton;
use crate::assets::{skeleton_loader, AssetError, Importer, MtlParser, ObjLoader};
use crate::foundation::math::Vec3;
use crate::render::{Material, Mesh};
use crate::scene::Object;

/// Loads models from an asset directory
///
/// Skeletons are cached per model so every object loaded from the same rig
/// shares one [`Skeleton`].
#[derive(Debug)]
pub struct FileImporter {
    root: PathBuf,
    skeletons: HashMap<String, Arc<Skeleton>>,
}

impl FileImporter {
    /// Create an importer rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            skeletons: HashMap::new(),
        }
    }

    /// Asset root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn skeleton_for(&mut self, name: &str, dir: &Path) -> Result<Option<Arc<Skeleton>>, AssetError> {
        if let Some(skeleton) = self.skeletons.get(name) {
            return Ok(Some(Arc::clone(skeleton)));
        }

        let path = dir.join(format!("{name}.skl"));
        if !path.exists() {
            return Ok(None);
        }

        let skeleton = Arc::new(skeleton_loader::parse_skeleton(&std::fs::read_to_string(&path)?)?);
        log::debug!("Loaded skeleton {} ({} joints)", path.display(), skeleton.joint_count());
        self.skeletons.insert(name.to_string(), Arc::clone(&skeleton));
        Ok(Some(skeleton))
    }
}

impl Importer for FileImporter {
    fn load(&mut self, name: &str) -> Result<Object, AssetError> {
        let dir = self.root.join(name);
        let obj_path = dir.join(format!("{name}.obj"));
        if !obj_path.exists() {
            return Err(AssetError::NotFound(obj_path.display().to_string()));
        }

        let model = ObjLoader::parse(&std::fs::read_to_string(&obj_path)?)?;

        let materials = match &model.material_library {
            Some(library) => {
                let mtl_path = dir.join(library);
                if !mtl_path.exists() {
                    return Err(AssetError::NotFound(mtl_path.display().to_string()));
                }
                MtlParser::parse(&std::fs::read_to_string(&mtl_path)?)?
            }
            None => HashMap::new(),
        };

        let meshes: Vec<Mesh> = model
            .groups
            .into_iter()
            .map(|group| {
                let material = match group.material_name.as_deref() {
                    Some(mat_name) => materials.get(mat_name).map_or_else(
                        || {
                            log::warn!("{name}: material '{mat_name}' not in library, using defaults");
                            Material::new(mat_name)
                        },
                        |data| resolve_textures(data.to_material(), &dir),
                    ),
                    None => Material::default(),
                };
                group.mesh.with_material(material)
            })
            .collect();

        let skeleton = self.skeleton_for(name, &dir)?;
        let mut object = Object::create(Vec3::zeros(), 1.0, meshes, true, skeleton);

        let anm_path = dir.join(format!("{name}.anm"));
        if anm_path.exists() {
            let clip = skeleton_loader::parse_animation(name, &std::fs::read_to_string(&anm_path)?)?;
            object.add_animation(Arc::new(clip));
        }

        log::info!("Loaded model '{}' ({} meshes)", name, object.mesh_count());
        Ok(object)
    }
}

fn resolve_textures(mut material: Material, dir: &Path) -> Material {
    for slot in [
        &mut material.texture_path,
        &mut material.normal_map_path,
        &mut material.specular_map_path,
    ] {
        if let Some(path) = slot.as_mut() {
            *path = dir.join(&*path).to_string_lossy().into_owned();
        }
    }
    material
}
