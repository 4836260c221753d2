//! Audio seam
//!
//! Objects may own one backend audio source. The engine core only creates and
//! releases sources; playback lives behind [`AudioBackend`].

/// Opaque handle to a backend audio source
///
/// Deliberately not `Clone`: exactly one object owns a given source.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct AudioSource(u64);

impl AudioSource {
    /// Wrap a backend-assigned id
    pub const fn from_raw(id: u64) -> Self {
        Self(id)
    }

    /// Backend-assigned id
    pub const fn raw(&self) -> u64 {
        self.0
    }
}

/// Audio errors
#[derive(thiserror::Error, Debug)]
pub enum AudioError {
    /// Backend refused to create a source
    #[error("Source creation failed: {0}")]
    SourceCreation(String),

    /// Backend not available
    #[error("Audio backend not initialized")]
    NotInitialized,
}

/// Audio backend trait for platform abstraction
///
/// Single-threaded, like the rest of the engine core.
pub trait AudioBackend {
    /// Allocate a new source
    fn create_source(&mut self) -> Result<AudioSource, AudioError>;

    /// Release a source previously returned by `create_source`
    fn release_source(&mut self, source: AudioSource);
}

/// Backend that hands out ids and plays nothing
#[derive(Debug, Default)]
pub struct NullAudioBackend {
    next_id: u64,
    live: usize,
}

impl NullAudioBackend {
    /// Create a new null backend
    pub fn new() -> Self {
        Self::default()
    }

    /// Sources created and not yet released
    pub const fn live_sources(&self) -> usize {
        self.live
    }
}

impl AudioBackend for NullAudioBackend {
    fn create_source(&mut self) -> Result<AudioSource, AudioError> {
        self.next_id += 1;
        self.live += 1;
        Ok(AudioSource(self.next_id))
    }

    fn release_source(&mut self, source: AudioSource) {
        self.live = self.live.saturating_sub(1);
        log::debug!("NullAudioBackend: released source {}", source.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sources_are_tracked() {
        let mut backend = NullAudioBackend::new();
        let a = backend.create_source().unwrap();
        let b = backend.create_source().unwrap();
        assert_ne!(a, b);
        assert_eq!(backend.live_sources(), 2);

        backend.release_source(a);
        backend.release_source(b);
        assert_eq!(backend.live_sources(), 0);
    }
}
