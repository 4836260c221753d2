//! Dungeon errors

use crypt_engine::assets::AssetError;
use crypt_engine::config::ConfigError;
use crypt_engine::render::RenderError;

/// Errors raised while generating or composing a dungeon
#[derive(thiserror::Error, Debug)]
pub enum DungeonError {
    /// A model could not be loaded
    #[error("Asset error: {0}")]
    Asset(#[from] AssetError),

    /// The renderer refused an object
    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    /// Configuration could not be read
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Composition requested before `generate`
    #[error("Dungeon has not been generated")]
    NotGenerated,

    /// Room index past the generated rooms
    #[error("Room {index} out of range ({count} generated)")]
    RoomOutOfRange {
        /// Requested room
        index: usize,
        /// Rooms available
        count: usize,
    },
}
