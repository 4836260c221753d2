//! Default dungeon materials

use crypt_engine::render::Material;

const STONE_ALBEDO: &str = "assets/textures/stone/Stone_Wall_013_Albedo.jpg";
const STONE_NORMAL: &str = "assets/textures/stone/Stone_Wall_013_Normal.jpg";
const STONE_ROUGHNESS: &str = "assets/textures/stone/Stone_Wall_013_Roughness.jpg";

const FLOOR_COLOR: &str = "assets/textures/floor/PavingStones037_1K_Color.png";
const FLOOR_NORMAL: &str = "assets/textures/floor/PavingStones037_1K_Normal.png";
const FLOOR_ROUGHNESS: &str = "assets/textures/floor/PavingStones037_1K_Roughness.png";

/// Tiling for the large ground and roof planes
pub const PLANE_TEXTURE_SUBDIVISION: u32 = 300;

/// Wall blocks: one stone tile per block face
pub fn stone() -> Material {
    Material::new("mat_stone")
        .with_texture(STONE_ALBEDO)
        .with_normal_map(STONE_NORMAL)
        .with_specular_map(STONE_ROUGHNESS)
        .with_texture_subdivision(1)
}

/// Ground plane
pub fn floor() -> Material {
    Material::new("floor_mat")
        .with_texture(FLOOR_COLOR)
        .with_normal_map(FLOOR_NORMAL)
        .with_specular_map(FLOOR_ROUGHNESS)
        .with_specular(0.0)
        .with_reflectivity(0.0)
        .with_texture_subdivision(PLANE_TEXTURE_SUBDIVISION)
}

/// Roof plane, stone textures tiled like the floor
pub fn roof() -> Material {
    Material::new("roof_mat")
        .with_texture(STONE_ALBEDO)
        .with_normal_map(STONE_NORMAL)
        .with_specular_map(STONE_ROUGHNESS)
        .with_specular(0.0)
        .with_reflectivity(0.0)
        .with_texture_subdivision(PLANE_TEXTURE_SUBDIVISION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_planes_tile_and_blocks_do_not() {
        assert_eq!(stone().texture_subdivision, 1);
        assert_eq!(floor().texture_subdivision, 300);
        assert_eq!(roof().texture_subdivision, 300);
    }

    #[test]
    fn test_planes_have_no_specular() {
        for material in [floor(), roof()] {
            assert_eq!(material.specular, 0.0);
            assert_eq!(material.reflectivity, 0.0);
        }
        assert_eq!(roof().texture_path, stone().texture_path);
    }
}
