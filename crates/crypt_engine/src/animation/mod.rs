//! Skeletal animation data

pub mod clip;
pub mod skeleton;

pub use clip::{Animation, JointPose, Keyframe};
pub use skeleton::{Joint, Skeleton, VertexWeight};
