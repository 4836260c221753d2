//! Rooms and portals
//!
//! Sizes are in blocks; portal positions and lights are in world units.

use crypt_engine::foundation::math::Vec3;
use crypt_engine::render::Light;
use crypt_engine::scene::ObjectId;

use crate::random::RandomRange;

/// Edge length of one wall block, in world units
pub const DUNGEON_BLOCK_SIZE: f32 = 4.0;

/// Number of room slots; only the first is generated and rendered for now
pub const MAX_ROOMS: usize = 1;

/// Smallest room side, in blocks
pub const MIN_ROOM_SIZE: u32 = 8;

/// Largest room side, in blocks
pub const MAX_ROOM_SIZE: u32 = 16;

/// Portals per room
pub const NUM_PORTALS: usize = 2;

/// Height of a portal light above the floor
pub const PORTAL_LIGHT_HEIGHT: f32 = 1.0;

/// Uniform scale applied to portal marker models
pub const PORTAL_MARKER_SCALE: f32 = 0.02;

/// Marker height in the model's own (unscaled) units
///
/// Positions are applied after scaling, so the world height of a marker is
/// `PORTAL_MARKER_HEIGHT * PORTAL_MARKER_SCALE`.
pub const PORTAL_MARKER_HEIGHT: f32 = 72.0;

/// Closest a portal may sit to a room edge, in blocks
const PORTAL_MARGIN: u32 = 2;

/// Point light and marker pair placed inside a room
#[derive(Debug, Clone)]
pub struct Portal {
    /// Block cell `(x, y)` the portal was rolled into
    pub cell: (u32, u32),
    /// World x of the cell center
    pub x: f32,
    /// World z of the cell center (the room's second axis)
    pub y: f32,
    /// Light emitted by the portal
    pub light: Light,
    /// Marker object in the dungeon's object store
    pub marker: ObjectId,
}

/// Rectangular room with a fixed number of portals
#[derive(Debug, Clone)]
pub struct Room {
    width: u32,
    height: u32,
    portals: Vec<Portal>,
}

impl Room {
    /// # Panics
    ///
    /// Panics when a side lies outside `[MIN_ROOM_SIZE, MAX_ROOM_SIZE]` or
    /// when `portals` does not hold exactly [`NUM_PORTALS`] entries.
    pub fn new(width: u32, height: u32, portals: Vec<Portal>) -> Self {
        assert!(
            (MIN_ROOM_SIZE..=MAX_ROOM_SIZE).contains(&width) && (MIN_ROOM_SIZE..=MAX_ROOM_SIZE).contains(&height),
            "room size {width}x{height} outside [{MIN_ROOM_SIZE}, {MAX_ROOM_SIZE}]"
        );
        assert_eq!(portals.len(), NUM_PORTALS, "room needs exactly {NUM_PORTALS} portals");
        Self { width, height, portals }
    }

    /// Width in blocks (x axis)
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in blocks (z axis)
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Portals of this room
    pub fn portals(&self) -> &[Portal] {
        &self.portals
    }
}

/// Roll independent width and height in `[MIN_ROOM_SIZE, MAX_ROOM_SIZE]`
pub fn roll_room_size(rng: &mut dyn RandomRange) -> (u32, u32) {
    let width = roll(rng, MIN_ROOM_SIZE, MAX_ROOM_SIZE);
    let height = roll(rng, MIN_ROOM_SIZE, MAX_ROOM_SIZE);
    (width, height)
}

/// Roll a portal cell in `[2, width - 2] x [2, height - 2]`
pub fn roll_portal_cell(rng: &mut dyn RandomRange, width: u32, height: u32) -> (u32, u32) {
    let x = roll(rng, PORTAL_MARGIN, width.saturating_sub(PORTAL_MARGIN));
    let y = roll(rng, PORTAL_MARGIN, height.saturating_sub(PORTAL_MARGIN));
    (x, y)
}

/// World position of a cell's center
pub fn portal_world_position(cell: (u32, u32)) -> (f32, f32) {
    let half = DUNGEON_BLOCK_SIZE / 2.0;
    (
        cell.0 as f32 * DUNGEON_BLOCK_SIZE + half,
        cell.1 as f32 * DUNGEON_BLOCK_SIZE + half,
    )
}

/// Blue point light hovering over a portal at `(x, y)`
pub fn portal_light(x: f32, y: f32) -> Light {
    Light::point(
        Vec3::new(x, PORTAL_LIGHT_HEIGHT, y),
        Vec3::new(0.0, 0.0, 1.0),
        0.5,
        1.0,
        0.09,
        0.032,
    )
}

fn roll(rng: &mut dyn RandomRange, min: u32, max: u32) -> u32 {
    let lo = i32::try_from(min).unwrap_or(i32::MAX);
    let hi = i32::try_from(max).unwrap_or(i32::MAX);
    u32::try_from(rng.range(lo, hi)).unwrap_or(min)
}
