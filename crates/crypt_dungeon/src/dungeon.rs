//! Procedural dungeon
//!
//! [`Dungeon`] owns every object of a generated level in one
//! [`ObjectStore`]: the wall block template and its pool of instances, the
//! ground and roof planes, and one marker per portal. Generation runs once per
//! level; [`Dungeon::render`] runs every frame, repositions the pooled wall
//! blocks around the current room and fills a caller-owned render list and
//! light array.

use crypt_engine::assets::Importer;
use crypt_engine::audio::AudioBackend;
use crypt_engine::foundation::math::utils::axis_angle_degrees;
use crypt_engine::foundation::math::{Quat, Vec3};
use crypt_engine::render::{Light, Material, ObjectRenderer, RenderError, RenderList};
use crypt_engine::scene::{factory, Object, ObjectId, ObjectStore};
use log::{debug, error, info};

use crate::config::DungeonConfig;
use crate::error::DungeonError;
use crate::random::{DungeonRng, RandomRange};
use crate::room::{
    portal_light, portal_world_position, roll_portal_cell, roll_room_size, Portal, Room, DUNGEON_BLOCK_SIZE,
    MAX_ROOMS, NUM_PORTALS, PORTAL_MARKER_HEIGHT, PORTAL_MARKER_SCALE,
};
use crate::walls::{WallLayout, WALL_POOL_CAPACITY};

/// Side of the square ground and roof planes
pub const FLOOR_SIZE: f32 = 1000.0;

/// Ground sits just under y = 0 so it never z-fights with block bases
pub const GROUND_OFFSET: f32 = -0.001;

/// Objects of one generated level
#[derive(Debug, Default)]
struct Level {
    block: Option<ObjectId>,
    wall_pool: Vec<ObjectId>,
    ground: Option<ObjectId>,
    roof: Option<ObjectId>,
    markers: Vec<ObjectId>,
    rooms: Vec<Room>,
}

/// Procedural dungeon context
pub struct Dungeon {
    config: DungeonConfig,
    rng: Box<dyn RandomRange>,
    objects: ObjectStore,
    level: Option<Level>,
}

impl Dungeon {
    /// Create an empty dungeon seeded from `config.seed`
    pub fn new(config: DungeonConfig) -> Self {
        let rng = DungeonRng::new(config.seed);
        Self::with_rng(config, rng)
    }

    /// Create an empty dungeon drawing from `rng`
    pub fn with_rng(config: DungeonConfig, rng: impl RandomRange + 'static) -> Self {
        Self {
            config,
            rng: Box::new(rng),
            objects: ObjectStore::with_key(),
            level: None,
        }
    }

    /// Configuration in use
    pub const fn config(&self) -> &DungeonConfig {
        &self.config
    }

    /// Build a new level, discarding the previous one
    ///
    /// On failure everything created so far is released again and the
    /// dungeon is left empty.
    pub fn generate(
        &mut self,
        importer: &mut dyn Importer,
        renderer: &mut dyn ObjectRenderer,
        audio: &mut dyn AudioBackend,
    ) -> Result<(), DungeonError> {
        self.teardown(renderer, audio);

        let mut level = Level::default();
        if let Err(err) = self.build_level(&mut level, importer, renderer) {
            error!("Dungeon generation failed: {err}");
            self.release_level(level, renderer, audio);
            return Err(err);
        }

        info!(
            "Dungeon generated: {} room(s), {} objects",
            level.rooms.len(),
            self.objects.len()
        );
        self.level = Some(level);
        Ok(())
    }

    fn build_level(
        &mut self,
        level: &mut Level,
        importer: &mut dyn Importer,
        renderer: &mut dyn ObjectRenderer,
    ) -> Result<(), DungeonError> {
        // wall block template and its pool
        let mut block = factory::create_box(DUNGEON_BLOCK_SIZE, DUNGEON_BLOCK_SIZE, DUNGEON_BLOCK_SIZE);
        block.receive_shadows = true;
        for mesh in block.meshes_mut() {
            mesh.material = self.config.materials.stone.clone();
        }
        block.position.y = DUNGEON_BLOCK_SIZE / 2.0;

        let block_id = self.objects.insert(block);
        level.block = Some(block_id);
        init_stored(&mut self.objects, block_id, renderer)?;

        if let Some(template) = self.objects.get(block_id).map(Object::instance) {
            level.wall_pool.reserve_exact(WALL_POOL_CAPACITY);
            for _ in 0..WALL_POOL_CAPACITY {
                level.wall_pool.push(self.objects.insert(template.instance()));
            }
        }

        // rooms
        for index in 0..MAX_ROOMS {
            let (width, height) = roll_room_size(self.rng.as_mut());
            let mut portals = Vec::with_capacity(NUM_PORTALS);
            for _ in 0..NUM_PORTALS {
                portals.push(self.generate_portal(level, importer, renderer, width, height)?);
            }
            debug!(
                "Room {index}: {width}x{height} blocks, portals at {:?}",
                portals.iter().map(|p| p.cell).collect::<Vec<_>>()
            );
            level.rooms.push(Room::new(width, height, portals));
        }

        // ground and roof
        let ground = build_plane(&self.config.materials.floor, GROUND_OFFSET);
        let ground_id = self.objects.insert(ground);
        level.ground = Some(ground_id);
        init_stored(&mut self.objects, ground_id, renderer)?;

        let mut roof = build_plane(&self.config.materials.roof, DUNGEON_BLOCK_SIZE);
        roof.rotation = axis_angle_degrees(Vec3::x(), 180.0);
        let roof_id = self.objects.insert(roof);
        level.roof = Some(roof_id);
        init_stored(&mut self.objects, roof_id, renderer)?;

        Ok(())
    }

    fn generate_portal(
        &mut self,
        level: &mut Level,
        importer: &mut dyn Importer,
        renderer: &mut dyn ObjectRenderer,
        width: u32,
        height: u32,
    ) -> Result<Portal, DungeonError> {
        let cell = roll_portal_cell(self.rng.as_mut(), width, height);
        let (x, y) = portal_world_position(cell);

        let mut marker = importer.load(&self.config.assets.portal_model)?;
        marker.rotation = Quat::identity();
        marker.scale = PORTAL_MARKER_SCALE;
        marker.set_center();
        marker.receive_shadows = true;
        // model units to world units
        marker.position = Vec3::new(x, PORTAL_MARKER_HEIGHT * PORTAL_MARKER_SCALE, y);

        let yaw = self.rng.range(0, 359);
        marker.rotation = axis_angle_degrees(Vec3::y(), yaw as f32);

        let marker_id = self.objects.insert(marker);
        level.markers.push(marker_id);
        init_stored(&mut self.objects, marker_id, renderer)?;

        Ok(Portal {
            cell,
            x,
            y,
            light: portal_light(x, y),
            marker: marker_id,
        })
    }

    /// Compose the first room into `render_list` and `lights`
    pub fn render(
        &mut self,
        render_list: &mut RenderList,
        lights: &mut [Light; NUM_PORTALS],
    ) -> Result<(), DungeonError> {
        self.render_room(0, render_list, lights)
    }

    /// Compose room `index`
    ///
    /// Appends ground, roof, every perimeter block (repositioned in place)
    /// and every portal marker, and overwrites `lights` with the portal
    /// lights. Room and portal data are only read.
    pub fn render_room(
        &mut self,
        index: usize,
        render_list: &mut RenderList,
        lights: &mut [Light; NUM_PORTALS],
    ) -> Result<(), DungeonError> {
        let level = self.level.as_ref().ok_or(DungeonError::NotGenerated)?;
        let room = level.rooms.get(index).ok_or(DungeonError::RoomOutOfRange {
            index,
            count: level.rooms.len(),
        })?;

        render_list.extend(level.ground.into_iter().chain(level.roof));

        let layout = WallLayout::new(room.width(), room.height());
        assert!(
            layout.len() <= level.wall_pool.len(),
            "wall pool overrun: {} blocks needed, {} pooled",
            layout.len(),
            level.wall_pool.len()
        );
        for (&id, (x, z)) in level.wall_pool.iter().zip(layout) {
            if let Some(block) = self.objects.get_mut(id) {
                block.position.x = x;
                block.position.z = z;
            }
            render_list.push(id);
        }

        for (slot, portal) in lights.iter_mut().zip(room.portals()) {
            *slot = portal.light;
            render_list.push(portal.marker);
        }

        Ok(())
    }

    /// Release every object of the current level
    ///
    /// Pool instances share the template's render resources, so only the
    /// template is handed back to the renderer for them.
    pub fn teardown(&mut self, renderer: &mut dyn ObjectRenderer, audio: &mut dyn AudioBackend) {
        if let Some(level) = self.level.take() {
            self.release_level(level, renderer, audio);
            info!("Dungeon torn down");
        }
    }

    fn release_level(&mut self, level: Level, renderer: &mut dyn ObjectRenderer, audio: &mut dyn AudioBackend) {
        for id in level.wall_pool {
            if let Some(mut block) = self.objects.remove(id) {
                block.set_render_handle(None);
                block.free(audio);
            }
        }

        let owned = level
            .block
            .into_iter()
            .chain(level.ground)
            .chain(level.roof)
            .chain(level.markers);
        for id in owned {
            if let Some(mut object) = self.objects.remove(id) {
                renderer.free_object(&mut object);
                object.free(audio);
            }
        }
    }

    /// True once a level has been generated and not torn down
    pub const fn is_generated(&self) -> bool {
        self.level.is_some()
    }

    /// All objects of the current level
    pub const fn objects(&self) -> &ObjectStore {
        &self.objects
    }

    /// Object behind `id`
    pub fn object(&self, id: ObjectId) -> Option<&Object> {
        self.objects.get(id)
    }

    /// Generated rooms
    pub fn rooms(&self) -> &[Room] {
        self.level.as_ref().map_or(&[][..], |level| level.rooms.as_slice())
    }

    /// Room `index`, if generated
    pub fn room(&self, index: usize) -> Option<&Room> {
        self.rooms().get(index)
    }

    /// Pooled wall blocks
    pub fn wall_pool(&self) -> &[ObjectId] {
        self.level.as_ref().map_or(&[][..], |level| level.wall_pool.as_slice())
    }

    /// Ground plane
    pub fn ground(&self) -> Option<ObjectId> {
        self.level.as_ref().and_then(|level| level.ground)
    }

    /// Roof plane
    pub fn roof(&self) -> Option<ObjectId> {
        self.level.as_ref().and_then(|level| level.roof)
    }

    /// Wall block template the pool was instanced from
    pub fn block_template(&self) -> Option<ObjectId> {
        self.level.as_ref().and_then(|level| level.block)
    }
}

impl std::fmt::Debug for Dungeon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dungeon")
            .field("config", &self.config)
            .field("objects", &self.objects.len())
            .field("level", &self.level)
            .finish_non_exhaustive()
    }
}

fn init_stored(objects: &mut ObjectStore, id: ObjectId, renderer: &mut dyn ObjectRenderer) -> Result<(), RenderError> {
    objects.get_mut(id).map_or(Ok(()), |object| renderer.init_object(object))
}

fn build_plane(material: &Material, height: f32) -> Object {
    let mut plane = factory::create_plane(FLOOR_SIZE, FLOOR_SIZE);
    plane.position.y = height;
    for mesh in plane.meshes_mut() {
        mesh.material = material.clone();
    }
    plane.receive_shadows = true;
    plane.set_center();
    plane.compute_tangents();
    plane
}
