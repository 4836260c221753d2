//! Material system for rendering
//!
//! Materials are plain descriptors: texture paths plus a few shading scalars.
//! Loading the textures and interpreting the values is the renderer's job.

use serde::{Deserialize, Serialize};

use crate::foundation::math::Vec3;

/// Surface description attached to every mesh sub-part
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Material {
    /// Material name, used for lookups and debugging
    pub name: String,

    /// Albedo texture path
    pub texture_path: Option<String>,

    /// Normal map path
    pub normal_map_path: Option<String>,

    /// Specular (roughness) map path
    pub specular_map_path: Option<String>,

    /// Base color (RGB)
    pub diffuse: Vec3,

    /// Specular contribution (0.0 = matte)
    pub specular: f32,

    /// Environment reflectivity (0.0 = none)
    pub reflectivity: f32,

    /// Self-illumination color (RGB)
    pub emission: Vec3,

    /// Opacity (0.0 = transparent, 1.0 = opaque)
    pub alpha: f32,

    /// Texture tiling factor across the surface
    ///
    /// Handed to the renderer untouched: large values on huge planes, 1 on
    /// block-sized geometry.
    pub texture_subdivision: u32,
}

impl Material {
    /// Create a new material with default properties
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            texture_path: None,
            normal_map_path: None,
            specular_map_path: None,
            diffuse: Vec3::new(1.0, 1.0, 1.0),
            specular: 0.5,
            reflectivity: 0.0,
            emission: Vec3::zeros(),
            alpha: 1.0,
            texture_subdivision: 1,
        }
    }

    /// Set the albedo texture
    #[must_use]
    pub fn with_texture(mut self, path: impl Into<String>) -> Self {
        self.texture_path = Some(path.into());
        self
    }

    /// Set the normal map
    #[must_use]
    pub fn with_normal_map(mut self, path: impl Into<String>) -> Self {
        self.normal_map_path = Some(path.into());
        self
    }

    /// Set the specular map
    #[must_use]
    pub fn with_specular_map(mut self, path: impl Into<String>) -> Self {
        self.specular_map_path = Some(path.into());
        self
    }

    /// Set the base color
    #[must_use]
    pub fn with_diffuse(mut self, r: f32, g: f32, b: f32) -> Self {
        self.diffuse = Vec3::new(r.clamp(0.0, 1.0), g.clamp(0.0, 1.0), b.clamp(0.0, 1.0));
        self
    }

    /// Set the specular factor
    #[must_use]
    pub fn with_specular(mut self, specular: f32) -> Self {
        self.specular = specular.max(0.0);
        self
    }

    /// Set the reflectivity
    #[must_use]
    pub fn with_reflectivity(mut self, reflectivity: f32) -> Self {
        self.reflectivity = reflectivity.clamp(0.0, 1.0);
        self
    }

    /// Set the self-illumination color
    #[must_use]
    pub fn with_emission(mut self, r: f32, g: f32, b: f32) -> Self {
        self.emission = Vec3::new(r.max(0.0), g.max(0.0), b.max(0.0));
        self
    }

    /// Set the opacity
    #[must_use]
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha.clamp(0.0, 1.0);
        self
    }

    /// True when the surface emits light of its own
    pub fn is_emissive(&self) -> bool {
        self.emission.iter().any(|&c| c > 0.0)
    }

    /// Set the texture tiling factor (at least 1)
    #[must_use]
    pub fn with_texture_subdivision(mut self, subdivision: u32) -> Self {
        self.texture_subdivision = subdivision.max(1);
        self
    }

    /// True when any texture slot is filled
    pub fn is_textured(&self) -> bool {
        self.texture_path.is_some() || self.normal_map_path.is_some() || self.specular_map_path.is_some()
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::new("default")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let mat = Material::default();
        assert_eq!(mat.name, "default");
        assert_eq!(mat.texture_subdivision, 1);
        assert_eq!(mat.alpha, 1.0);
        assert!(!mat.is_textured());
        assert!(!mat.is_emissive());
    }

    #[test]
    fn test_builder_clamps() {
        let mat = Material::new("floor")
            .with_texture("floor.png")
            .with_reflectivity(3.0)
            .with_texture_subdivision(0);

        assert!(mat.is_textured());
        assert_eq!(mat.reflectivity, 1.0);
        assert_eq!(mat.texture_subdivision, 1);
    }
}
