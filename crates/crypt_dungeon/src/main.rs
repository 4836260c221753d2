//! Headless dungeon demo
//!
//! Generates a level from the configured assets, composes a few frames into
//! a reused render list and tears everything down again.
//!
//! Usage: `crypt_dungeon [config.toml|config.ron]`

use crypt_dungeon::{Dungeon, DungeonConfig, NUM_PORTALS, WALL_POOL_CAPACITY};
use crypt_engine::assets::FileImporter;
use crypt_engine::audio::NullAudioBackend;
use crypt_engine::config::Config;
use crypt_engine::foundation::logging;
use crypt_engine::render::{Light, NullRenderer, RenderList};
use log::{debug, info};

const DEFAULT_CONFIG: &str = "crypt_dungeon.toml";
const DEMO_FRAMES: usize = 3;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_CONFIG.to_string());
    let config = DungeonConfig::load_or_default(&config_path)?;
    logging::init(&config.log_level);
    info!("Using config {config_path}");

    let mut importer = FileImporter::new(&config.assets.root);
    let mut renderer = NullRenderer::new();
    let mut audio = NullAudioBackend::new();

    let mut dungeon = Dungeon::new(config);
    dungeon.generate(&mut importer, &mut renderer, &mut audio)?;

    if let Some(room) = dungeon.room(0) {
        info!("Room 0 is {}x{} blocks", room.width(), room.height());
        for portal in room.portals() {
            info!("Portal at ({:.1}, {:.1})", portal.x, portal.y);
        }
    }

    // ground + roof + full wall pool + markers
    let mut render_list = RenderList::with_capacity(2 + WALL_POOL_CAPACITY + NUM_PORTALS);
    let mut lights = [Light::default(); NUM_PORTALS];

    for frame in 0..DEMO_FRAMES {
        render_list.clear();
        dungeon.render(&mut render_list, &mut lights)?;
        debug!("Frame {frame}: {} objects, {} lights", render_list.len(), lights.len());
    }
    info!(
        "Composed {DEMO_FRAMES} frames of {} objects ({} renderer objects live)",
        render_list.len(),
        renderer.live()
    );

    dungeon.teardown(&mut renderer, &mut audio);
    info!("Renderer objects live after teardown: {}", renderer.live());
    Ok(())
}
