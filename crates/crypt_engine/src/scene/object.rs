//! Object: the engine's unit of world presence
//!
//! One object bundles a transform, mesh sub-parts, shading hints, a physics
//! bounding box, an optional audio source and an optional skeleton with its
//! animation clips.
//!
//! # Transform
//!
//! The model matrix is always composed as
//!
//! ```text
//! M = T(position) * R(rotation) * S(scale) * T(-center)
//! ```
//!
//! so `center` is the pivot in mesh-local space that ends up at `position`.
//!
//! # Sharing
//!
//! Meshes live behind an `Arc` and are shared by every [`Object::instance`]
//! of an object. Editing them through [`Object::meshes_mut`] detaches the
//! editing object first. Skeletons are shared the same way and are never
//! released by an object. Audio sources are owned by exactly one object.

use std::sync::Arc;

use crate::animation::{Animation, Skeleton};
use crate::audio::{AudioBackend, AudioSource};
use crate::foundation::math::{Mat4, Quat, Vec3};
use crate::physics::Aabb;
use crate::render::{Mesh, ObjectResourceHandle};

/// Maximum number of animation clips per object
pub const OBJECT_MAX_ANIMS: usize = 16;

/// World entity: transform, geometry, bounds, audio and animation
#[derive(Debug)]
pub struct Object {
    /// World position of the pivot
    pub position: Vec3,
    /// Pivot in mesh-local space
    pub center: Vec3,
    /// Uniform scale
    pub scale: f32,
    /// Rotation about the pivot
    pub rotation: Quat,

    /// Color tint applied by the shader
    pub color_mask: Vec3,
    /// Whether the object glows
    pub glowing: bool,
    /// Glow color, used when `glowing` is set
    pub glow_color: Vec3,
    /// Whether shadows are cast onto this object
    pub receive_shadows: bool,

    /// Physics bounds in object-local space
    pub bounds: Aabb,

    meshes: Arc<Vec<Mesh>>,
    audio_source: Option<AudioSource>,
    skeleton: Option<Arc<Skeleton>>,
    animations: Vec<Arc<Animation>>,
    current_animation: Option<usize>,
    render_handle: Option<ObjectResourceHandle>,
}

impl Object {
    /// Create an object that takes ownership of `meshes`
    ///
    /// With `compute_center` the pivot is the midpoint of the mesh bounds;
    /// otherwise it stays at the origin until the caller sets it.
    pub fn create(
        position: Vec3,
        scale: f32,
        meshes: Vec<Mesh>,
        compute_center: bool,
        skeleton: Option<Arc<Skeleton>>,
    ) -> Self {
        let mut object = Self {
            position,
            center: Vec3::zeros(),
            scale,
            rotation: Quat::identity(),
            color_mask: Vec3::new(1.0, 1.0, 1.0),
            glowing: false,
            glow_color: Vec3::zeros(),
            receive_shadows: false,
            bounds: Aabb::default(),
            meshes: Arc::new(meshes),
            audio_source: None,
            skeleton,
            animations: Vec::new(),
            current_animation: None,
            render_handle: None,
        };

        let geometry = object.geometry_bounds();
        if !geometry.is_empty() {
            object.bounds = geometry;
        }
        if compute_center {
            object.set_center();
        }
        object
    }

    /// Copy for pooling: shares meshes, skeleton, clips and render resources
    ///
    /// The copy owns its own transform and never inherits the audio source.
    #[must_use]
    pub fn instance(&self) -> Self {
        Self {
            position: self.position,
            center: self.center,
            scale: self.scale,
            rotation: self.rotation,
            color_mask: self.color_mask,
            glowing: self.glowing,
            glow_color: self.glow_color,
            receive_shadows: self.receive_shadows,
            bounds: self.bounds,
            meshes: Arc::clone(&self.meshes),
            audio_source: None,
            skeleton: self.skeleton.clone(),
            animations: self.animations.clone(),
            current_animation: self.current_animation,
            render_handle: self.render_handle,
        }
    }

    // --- geometry ---

    /// Mesh sub-parts
    pub fn meshes(&self) -> &[Mesh] {
        &self.meshes
    }

    /// Mutable mesh sub-parts, detached from any instance sharing them
    ///
    /// Call [`Object::set_center`] afterwards if the pivot should follow.
    pub fn meshes_mut(&mut self) -> &mut Vec<Mesh> {
        Arc::make_mut(&mut self.meshes)
    }

    /// Number of mesh sub-parts
    pub fn mesh_count(&self) -> usize {
        self.meshes.len()
    }

    /// True when both objects draw the same mesh data
    pub fn shares_meshes_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.meshes, &other.meshes)
    }

    /// Union of the local bounds of every mesh
    pub fn geometry_bounds(&self) -> Aabb {
        self.meshes
            .iter()
            .map(Mesh::bounds)
            .fold(Aabb::empty(), |acc, b| if b.is_empty() { acc } else { acc.union(&b) })
    }

    /// Compute tangents on every mesh
    pub fn compute_tangents(&mut self) {
        for mesh in self.meshes_mut() {
            mesh.compute_tangents();
        }
    }

    // --- transform ---

    /// Model matrix: `T(position) * R(rotation) * S(scale) * T(-center)`
    pub fn get_transform(&self) -> Mat4 {
        Mat4::new_translation(&self.position)
            * self.rotation.to_homogeneous()
            * Mat4::new_scaling(self.scale)
            * Mat4::new_translation(&-self.center)
    }

    /// Inverse of [`Object::get_transform`]
    ///
    /// Undefined for a zero scale.
    pub fn get_inverse_transform(&self) -> Mat4 {
        Mat4::new_translation(&self.center)
            * Mat4::new_scaling(1.0 / self.scale)
            * self.rotation.inverse().to_homogeneous()
            * Mat4::new_translation(&-self.position)
    }

    /// Pivot derived from the current geometry: the midpoint of its bounds
    ///
    /// Objects without vertices report the origin.
    pub fn get_center(&self) -> Vec3 {
        let bounds = self.geometry_bounds();
        if bounds.is_empty() {
            Vec3::zeros()
        } else {
            bounds.center()
        }
    }

    /// Store [`Object::get_center`] as the pivot
    pub fn set_center(&mut self) {
        self.center = self.get_center();
    }

    /// Move a world-space point into this object's mesh-local space
    pub fn vec3_to_object_space(&self, v: &mut Vec3) {
        let local = self.rotation.inverse_transform_vector(&(*v - self.position));
        *v = local / self.scale + self.center;
    }

    /// Re-express a world-space box in this object's mesh-local space
    pub fn aabb_to_object_space(&self, aabb: Aabb) -> Aabb {
        aabb.transform(&self.get_inverse_transform())
    }

    /// Physics bounds in world space
    pub fn world_bounds(&self) -> Aabb {
        self.bounds.transform(&self.get_transform())
    }

    // --- animation ---

    /// Register a clip and return its slot
    ///
    /// # Panics
    ///
    /// Panics when the object already holds [`OBJECT_MAX_ANIMS`] clips.
    pub fn add_animation(&mut self, clip: Arc<Animation>) -> usize {
        assert!(
            self.animations.len() < OBJECT_MAX_ANIMS,
            "animation capacity exceeded: object already holds {OBJECT_MAX_ANIMS} clips"
        );
        self.animations.push(clip);
        self.animations.len() - 1
    }

    /// Number of registered clips
    pub fn animation_count(&self) -> usize {
        self.animations.len()
    }

    /// Registered clips
    pub fn animations(&self) -> &[Arc<Animation>] {
        &self.animations
    }

    /// Make the clip called `name` current; false if no such clip
    pub fn play_animation(&mut self, name: &str) -> bool {
        match self.animations.iter().position(|clip| clip.name == name) {
            Some(index) => {
                self.current_animation = Some(index);
                true
            }
            None => false,
        }
    }

    /// Clear the current clip
    pub fn stop_animation(&mut self) {
        self.current_animation = None;
    }

    /// Currently playing clip, if any
    pub fn current_animation(&self) -> Option<&Animation> {
        self.current_animation.and_then(|i| self.animations.get(i)).map(|clip| &**clip)
    }

    /// Shared skeleton, if any
    pub fn skeleton(&self) -> Option<&Arc<Skeleton>> {
        self.skeleton.as_ref()
    }

    // --- audio ---

    /// Take ownership of an audio source, returning the previous one
    pub fn attach_audio_source(&mut self, source: AudioSource) -> Option<AudioSource> {
        self.audio_source.replace(source)
    }

    /// Owned audio source, if any
    pub fn audio_source(&self) -> Option<&AudioSource> {
        self.audio_source.as_ref()
    }

    // --- renderer ---

    /// Backend resource handle, set by the renderer
    pub const fn render_handle(&self) -> Option<ObjectResourceHandle> {
        self.render_handle
    }

    /// Replace the backend resource handle, returning the previous one
    pub fn set_render_handle(&mut self, handle: Option<ObjectResourceHandle>) -> Option<ObjectResourceHandle> {
        std::mem::replace(&mut self.render_handle, handle)
    }

    /// Release the owned audio source and drop the meshes
    ///
    /// The skeleton is shared and left alone.
    pub fn free(mut self, audio: &mut dyn AudioBackend) {
        if let Some(source) = self.audio_source.take() {
            audio.release_source(source);
        }
    }
}

impl Drop for Object {
    fn drop(&mut self) {
        if let Some(source) = &self.audio_source {
            log::warn!("Object dropped while owning audio source {}; use Object::free", source.raw());
        }
    }
}
