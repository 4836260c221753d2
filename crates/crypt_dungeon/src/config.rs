//! Dungeon configuration
//!
//! Loaded from TOML or RON; every field has a default so partial files work.

use crypt_engine::config::{Config, Deserialize, Serialize};
use crypt_engine::render::Material;

use crate::materials;

/// Top-level dungeon configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DungeonConfig {
    /// Default log filter, overridden by `RUST_LOG`
    pub log_level: String,

    /// Fixed seed for reproducible levels; entropy when absent
    pub seed: Option<u64>,

    /// Asset locations
    pub assets: AssetConfig,

    /// Materials applied to generated geometry
    pub materials: MaterialConfig,
}

impl Default for DungeonConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            seed: None,
            assets: AssetConfig::default(),
            materials: MaterialConfig::default(),
        }
    }
}

impl Config for DungeonConfig {}

/// Asset locations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    /// Directory holding one sub-directory per model
    pub root: String,

    /// Model used for portal markers
    pub portal_model: String,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            root: "assets/models".to_string(),
            portal_model: "portal".to_string(),
        }
    }
}

/// Materials for wall blocks, ground and roof
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterialConfig {
    /// Wall blocks
    pub stone: Material,
    /// Ground plane
    pub floor: Material,
    /// Roof plane
    pub roof: Material,
}

impl Default for MaterialConfig {
    fn default() -> Self {
        Self {
            stone: materials::stone(),
            floor: materials::floor(),
            roof: materials::roof(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toml_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dungeon.toml");

        let mut config = DungeonConfig::default();
        config.seed = Some(1234);
        config.assets.portal_model = "gate".to_string();
        config.materials.floor.texture_subdivision = 64;

        config.save_to_file(&path).unwrap();
        assert_eq!(DungeonConfig::load_from_file(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_ron_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dungeon.ron");
        std::fs::write(&path, "(seed: Some(9), log_level: \"debug\")").unwrap();

        let config = DungeonConfig::load_from_file(&path).unwrap();
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.assets, AssetConfig::default());
        assert_eq!(config.materials.stone, materials::stone());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = DungeonConfig::load_or_default(dir.path().join("none.toml")).unwrap();
        assert_eq!(config, DungeonConfig::default());
    }
}
