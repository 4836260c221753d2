//! Renderer seam
//!
//! The engine core never talks to a graphics API. Objects that will be drawn
//! are handed to an [`ObjectRenderer`] once before their first frame and once
//! after their last; everything in between is the backend's business.

use std::collections::HashSet;

use crate::scene::Object;

/// Handle to per-object GPU resources (buffers, descriptor sets, ...)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectResourceHandle(pub u64);

/// Rendering errors
#[derive(thiserror::Error, Debug)]
pub enum RenderError {
    /// Backend could not allocate resources for an object
    #[error("Resource creation failed: {0}")]
    ResourceCreation(String),

    /// Object has nothing to upload
    #[error("Object has no meshes")]
    EmptyObject,

    /// Backend error
    #[error("Backend error: {0}")]
    BackendError(String),
}

/// Backend hooks for object resources
pub trait ObjectRenderer {
    /// Upload the object's meshes and attach a resource handle to it
    fn init_object(&mut self, object: &mut Object) -> Result<(), RenderError>;

    /// Release the object's resources and clear its handle
    fn free_object(&mut self, object: &mut Object);
}

/// Renderer that allocates nothing, for headless runs and tests
#[derive(Debug, Default)]
pub struct NullRenderer {
    next_handle: u64,
    initialized: usize,
    freed: usize,
    live: HashSet<ObjectResourceHandle>,
}

impl NullRenderer {
    /// Create a new null renderer
    pub fn new() -> Self {
        Self::default()
    }

    /// Objects initialized so far
    pub const fn initialized(&self) -> usize {
        self.initialized
    }

    /// Handles freed so far, each counted once
    pub const fn freed(&self) -> usize {
        self.freed
    }

    /// Handles initialized and not yet freed
    pub fn live(&self) -> usize {
        self.live.len()
    }
}

impl ObjectRenderer for NullRenderer {
    fn init_object(&mut self, object: &mut Object) -> Result<(), RenderError> {
        if object.mesh_count() == 0 {
            return Err(RenderError::EmptyObject);
        }

        self.next_handle += 1;
        self.initialized += 1;
        let handle = ObjectResourceHandle(self.next_handle);
        self.live.insert(handle);
        object.set_render_handle(Some(handle));
        log::debug!("NullRenderer: init object -> handle {}", self.next_handle);
        Ok(())
    }

    fn free_object(&mut self, object: &mut Object) {
        let Some(handle) = object.set_render_handle(None) else {
            return;
        };
        if self.live.remove(&handle) {
            self.freed += 1;
            log::debug!("NullRenderer: free handle {}", handle.0);
        } else {
            log::warn!("NullRenderer: handle {} already freed", handle.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::factory;

    #[test]
    fn test_empty_object_is_rejected() {
        let mut renderer = NullRenderer::new();
        let mut empty = Object::create(crate::foundation::math::Vec3::zeros(), 1.0, Vec::new(), false, None);
        assert!(matches!(renderer.init_object(&mut empty), Err(RenderError::EmptyObject)));
        assert_eq!(renderer.live(), 0);
    }

    #[test]
    fn test_shared_handle_is_freed_once() {
        let mut renderer = NullRenderer::new();
        let mut template = factory::create_box(1.0, 1.0, 1.0);
        renderer.init_object(&mut template).unwrap();

        let mut copy = template.instance();
        assert_eq!(copy.render_handle(), template.render_handle());

        renderer.free_object(&mut copy);
        renderer.free_object(&mut template);

        assert_eq!(renderer.initialized(), 1);
        assert_eq!(renderer.freed(), 1);
        assert_eq!(renderer.live(), 0);
        assert!(template.render_handle().is_none());
    }
}
