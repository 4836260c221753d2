//! MTL (Material Template Library) file parser
//!
//! Parses Wavefront .mtl files into structured data for material creation.
//! Texture paths are kept as written; the importer resolves them.

use std::collections::HashMap;

use crate::assets::AssetError;
use crate::foundation::math::Vec3;
use crate::render::Material;

/// Parsed MTL material data (Wavefront Phong model)
#[derive(Debug, Clone, PartialEq)]
pub struct MtlData {
    /// Material name
    pub name: String,
    /// Diffuse color (Kd)
    pub diffuse: Vec3,
    /// Specular color (Ks)
    pub specular: Vec3,
    /// Emission color (Ke)
    pub emission: Vec3,
    /// Dissolve/opacity (d) - 0.0 = transparent, 1.0 = opaque
    pub dissolve: f32,
    /// Diffuse texture map (map_Kd)
    pub diffuse_map: Option<String>,
    /// Specular texture map (map_Ks)
    pub specular_map: Option<String>,
    /// Normal map (map_Bump, bump or map_Kn)
    pub normal_map: Option<String>,
}

impl Default for MtlData {
    fn default() -> Self {
        Self {
            name: String::new(),
            diffuse: Vec3::new(0.8, 0.8, 0.8),
            specular: Vec3::new(0.5, 0.5, 0.5),
            emission: Vec3::zeros(),
            dissolve: 1.0,
            diffuse_map: None,
            specular_map: None,
            normal_map: None,
        }
    }
}

impl MtlData {
    /// Convert to an engine material
    ///
    /// The specular factor is the mean of the Ks channels.
    pub fn to_material(&self) -> Material {
        let mut material = Material::new(self.name.clone())
            .with_diffuse(self.diffuse.x, self.diffuse.y, self.diffuse.z)
            .with_specular(self.specular.mean())
            .with_emission(self.emission.x, self.emission.y, self.emission.z)
            .with_alpha(self.dissolve);
        material.texture_path = self.diffuse_map.clone();
        material.normal_map_path = self.normal_map.clone();
        material.specular_map_path = self.specular_map.clone();
        material
    }
}

/// MTL file parser
pub struct MtlParser;

impl MtlParser {
    /// Parse MTL file contents into a map of material name -> `MtlData`
    pub fn parse(contents: &str) -> Result<HashMap<String, MtlData>, AssetError> {
        let mut materials = HashMap::new();
        let mut current: Option<MtlData> = None;

        for (line_num, line) in contents.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let mut tokens = line.split_whitespace();
            let Some(command) = tokens.next() else {
                continue;
            };

            if command == "newmtl" {
                if let Some(mat) = current.take() {
                    materials.insert(mat.name.clone(), mat);
                }
                let name = tokens
                    .next()
                    .ok_or_else(|| invalid(line_num, "newmtl missing material name"))?
                    .to_string();
                current = Some(MtlData { name, ..Default::default() });
                continue;
            }

            // Statements before the first newmtl have nothing to apply to
            let Some(mat) = current.as_mut() else {
                continue;
            };

            match command {
                "Kd" => mat.diffuse = Self::parse_vec3(&mut tokens, line_num, command)?,
                "Ks" => mat.specular = Self::parse_vec3(&mut tokens, line_num, command)?,
                "Ke" => mat.emission = Self::parse_vec3(&mut tokens, line_num, command)?,
                "d" => mat.dissolve = Self::parse_f32(&mut tokens, line_num, command)?,
                "Tr" => mat.dissolve = 1.0 - Self::parse_f32(&mut tokens, line_num, command)?,
                "map_Kd" => mat.diffuse_map = Some(Self::parse_texture_path(&mut tokens, line_num, command)?),
                "map_Ks" => mat.specular_map = Some(Self::parse_texture_path(&mut tokens, line_num, command)?),
                "map_Bump" | "bump" | "map_Kn" => {
                    mat.normal_map = Some(Self::parse_texture_path(&mut tokens, line_num, command)?);
                }
                _ => {}
            }
        }

        if let Some(mat) = current {
            materials.insert(mat.name.clone(), mat);
        }

        Ok(materials)
    }

    fn parse_vec3<'a, I>(tokens: &mut I, line_num: usize, command: &str) -> Result<Vec3, AssetError>
    where
        I: Iterator<Item = &'a str>,
    {
        let r = Self::parse_f32(tokens, line_num, command)?;
        let g = Self::parse_f32(tokens, line_num, command)?;
        let b = Self::parse_f32(tokens, line_num, command)?;
        Ok(Vec3::new(r, g, b))
    }

    fn parse_f32<'a, I>(tokens: &mut I, line_num: usize, command: &str) -> Result<f32, AssetError>
    where
        I: Iterator<Item = &'a str>,
    {
        let token = tokens
            .next()
            .ok_or_else(|| invalid(line_num, &format!("{command} missing value")))?;
        token
            .parse::<f32>()
            .map_err(|_| invalid(line_num, &format!("{command} invalid float value '{token}'")))
    }

    /// Texture paths may contain spaces: take the rest of the line
    fn parse_texture_path<'a, I>(tokens: &mut I, line_num: usize, command: &str) -> Result<String, AssetError>
    where
        I: Iterator<Item = &'a str>,
    {
        let path: Vec<&str> = tokens.collect();
        if path.is_empty() {
            return Err(invalid(line_num, &format!("{command} missing texture path")));
        }
        Ok(path.join(" "))
    }
}

fn invalid(line_num: usize, message: &str) -> AssetError {
    AssetError::InvalidData(format!("mtl line {}: {message}", line_num + 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_material() {
        let mtl_content = r"
# Simple material
newmtl TestMaterial
Kd 0.8 0.2 0.2
Ks 0.5 0.5 0.5
Ns 250.0
d 1.0
illum 2
";

        let materials = MtlParser::parse(mtl_content).unwrap();
        assert_eq!(materials.len(), 1);

        let mat = &materials["TestMaterial"];
        assert_eq!(mat.diffuse, Vec3::new(0.8, 0.2, 0.2));
        assert_eq!(mat.dissolve, 1.0);
    }

    #[test]
    fn test_parse_textures_and_convert() {
        let mtl_content = r"
newmtl portal-mat
map_Kd textures/portal albedo.png
map_Kn textures/portal_normal.png
map_Ks textures/portal_rough.png
Ks 0.2 0.4 0.6
";

        let materials = MtlParser::parse(mtl_content).unwrap();
        let material = materials["portal-mat"].to_material();

        assert_eq!(material.name, "portal-mat");
        assert_eq!(material.texture_path.as_deref(), Some("textures/portal albedo.png"));
        assert_eq!(material.normal_map_path.as_deref(), Some("textures/portal_normal.png"));
        assert_eq!(material.specular_map_path.as_deref(), Some("textures/portal_rough.png"));
        assert!((material.specular - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_parse_transparency() {
        let materials = MtlParser::parse("newmtl Glass\nTr 0.3\n").unwrap();
        assert!((materials["Glass"].dissolve - 0.7).abs() < 0.001);
        assert!((materials["Glass"].to_material().alpha - 0.7).abs() < 0.001);
    }

    #[test]
    fn test_emission_carries_into_material() {
        let materials = MtlParser::parse("newmtl glow\nKe 0.0 0.2 1.0\nd 0.5\n").unwrap();
        let material = materials["glow"].to_material();

        assert!(material.is_emissive());
        assert_eq!(material.emission, Vec3::new(0.0, 0.2, 1.0));
        assert_eq!(material.alpha, 0.5);
    }

    #[test]
    fn test_bad_value_reports_line() {
        let err = MtlParser::parse("newmtl A\nKd 1.0 oops 0.0\n").unwrap_err();
        assert!(err.to_string().contains("line 2"), "{err}");
    }
}
