//! Test doubles for the dungeon's collaborators

use std::collections::VecDeque;

use crypt_engine::assets::{AssetError, Importer};
use crypt_engine::audio::{AudioBackend, AudioError, AudioSource};
use crypt_engine::scene::{factory, Object};

use crate::random::RandomRange;

/// Replays fixed values and checks each against the requested range
pub struct ScriptedRng {
    values: VecDeque<i32>,
}

impl ScriptedRng {
    pub fn new(values: &[i32]) -> Self {
        Self {
            values: values.iter().copied().collect(),
        }
    }
}

impl RandomRange for ScriptedRng {
    fn range(&mut self, min: i32, max: i32) -> i32 {
        let value = self.values.pop_front().unwrap_or(min);
        assert!((min..=max).contains(&value), "scripted {value} outside [{min}, {max}]");
        value
    }
}

/// Hands out a 100-unit cube for every model name
#[derive(Default)]
pub struct CubeImporter {
    pub loads: usize,
}

impl Importer for CubeImporter {
    fn load(&mut self, _name: &str) -> Result<Object, AssetError> {
        self.loads += 1;
        Ok(factory::create_box(100.0, 100.0, 100.0))
    }
}

/// Succeeds `remaining` times, then reports the model as missing
pub struct FlakyImporter {
    pub remaining: usize,
}

impl Importer for FlakyImporter {
    fn load(&mut self, name: &str) -> Result<Object, AssetError> {
        if self.remaining == 0 {
            return Err(AssetError::NotFound(name.to_string()));
        }
        self.remaining -= 1;
        Ok(factory::create_box(100.0, 100.0, 100.0))
    }
}

/// Returns markers that already own an audio source
#[derive(Default)]
pub struct HummingImporter {
    next_source: u64,
}

impl Importer for HummingImporter {
    fn load(&mut self, _name: &str) -> Result<Object, AssetError> {
        self.next_source += 1;
        let mut marker = factory::create_box(100.0, 100.0, 100.0);
        marker.attach_audio_source(AudioSource::from_raw(self.next_source));
        Ok(marker)
    }
}

/// Records released sources
#[derive(Default)]
pub struct RecordingAudio {
    pub released: Vec<u64>,
}

impl AudioBackend for RecordingAudio {
    fn create_source(&mut self) -> Result<AudioSource, AudioError> {
        Err(AudioError::NotInitialized)
    }

    fn release_source(&mut self, source: AudioSource) {
        self.released.push(source.raw());
    }
}
