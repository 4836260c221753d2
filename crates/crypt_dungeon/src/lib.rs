//! # Crypt Dungeon
//!
//! Procedural dungeon levels built from [`crypt_engine`] objects: a room of
//! pooled wall blocks under a roof, on a tiled floor, with two glowing
//! portals.
//!
//! ```rust
//! use crypt_dungeon::{Dungeon, DungeonConfig, NUM_PORTALS};
//! use crypt_engine::prelude::*;
//!
//! struct Crates;
//!
//! impl Importer for Crates {
//!     fn load(&mut self, _name: &str) -> Result<Object, AssetError> {
//!         Ok(factory::create_box(100.0, 100.0, 100.0))
//!     }
//! }
//!
//! let mut renderer = NullRenderer::new();
//! let mut audio = NullAudioBackend::new();
//! let mut dungeon = Dungeon::new(DungeonConfig::default());
//! dungeon.generate(&mut Crates, &mut renderer, &mut audio).unwrap();
//!
//! let mut list = RenderList::new();
//! let mut lights = [Light::default(); NUM_PORTALS];
//! dungeon.render(&mut list, &mut lights).unwrap();
//! assert!(list.len() > 2);
//!
//! dungeon.teardown(&mut renderer, &mut audio);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod dungeon;
pub mod error;
pub mod materials;
pub mod random;
pub mod room;
pub mod walls;

#[cfg(test)]
mod tests;

pub use config::{AssetConfig, DungeonConfig, MaterialConfig};
pub use dungeon::{Dungeon, FLOOR_SIZE, GROUND_OFFSET};
pub use error::DungeonError;
pub use random::{DungeonRng, RandomRange};
pub use room::{
    portal_light, portal_world_position, roll_portal_cell, roll_room_size, Portal, Room, DUNGEON_BLOCK_SIZE,
    MAX_ROOMS, MAX_ROOM_SIZE, MIN_ROOM_SIZE, NUM_PORTALS,
};
pub use walls::{wall_block_position, WallLayout, WallSide, WALL_POOL_CAPACITY};
