//! Scene objects
//!
//! [`Object`] is the unit of world presence. Objects that are shared between
//! systems live in an [`ObjectStore`] and are referred to by [`ObjectId`].

pub mod factory;
pub mod object;

pub use object::{Object, OBJECT_MAX_ANIMS};

use crate::foundation::collections::{new_key_type, HandleMap};

new_key_type! {
    /// Stable handle to an object in an [`ObjectStore`]
    pub struct ObjectId;
}

/// Handle-indexed storage for objects
pub type ObjectStore = HandleMap<ObjectId, Object>;
