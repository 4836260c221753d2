//! Asset loading
//!
//! Text formats for models ([`obj_loader`], [`mtl_parser`]) and rigs
//! ([`skeleton_loader`]), and the [`Importer`] seam that turns a model name
//! into a freshly owned [`Object`].

pub mod importer;
pub mod mtl_parser;
pub mod obj_loader;
pub mod skeleton_loader;

pub use importer::FileImporter;
pub use mtl_parser::{MtlData, MtlParser};
pub use obj_loader::{ObjGroup, ObjLoader, ObjModel};

use thiserror::Error;

use crate::scene::Object;

/// Loads named models into objects
pub trait Importer {
    /// Load the model called `name`; the caller owns the result
    fn load(&mut self, name: &str) -> Result<Object, AssetError>;
}

/// Asset loading errors
#[derive(Error, Debug)]
pub enum AssetError {
    /// Asset not found
    #[error("Asset not found: {0}")]
    NotFound(String),

    /// Invalid asset data
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// IO error during asset loading
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
