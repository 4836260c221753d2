//! Physics module
//!
//! Only static bounds live here; there is no simulation.

pub mod aabb;

pub use aabb::Aabb;
