//! Animation clip data
//!
//! Keyframes store absolute joint transforms. Sampling and blending are left
//! to the animation player.

use crate::foundation::math::Mat4;

/// Transform of one joint at one keyframe
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JointPose {
    /// Joint index
    pub joint: usize,
    /// Joint transform at this keyframe
    pub transform: Mat4,
}

/// Poses at one point in time
#[derive(Debug, Clone, PartialEq)]
pub struct Keyframe {
    /// Time in seconds from the start of the clip
    pub time: f32,
    /// Joint poses
    pub poses: Vec<JointPose>,
}

/// Named animation clip
#[derive(Debug, Clone, PartialEq)]
pub struct Animation {
    /// Clip name
    pub name: String,
    /// Keyframes in ascending time order
    pub keyframes: Vec<Keyframe>,
}

impl Animation {
    /// Create an empty clip
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            keyframes: Vec::new(),
        }
    }

    /// Time of the last keyframe
    pub fn duration(&self) -> f32 {
        self.keyframes.last().map_or(0.0, |frame| frame.time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_duration_is_last_keyframe_time() {
        let mut clip = Animation::new("walk");
        assert_relative_eq!(clip.duration(), 0.0);

        for time in [0.0, 0.5, 1.25] {
            clip.keyframes.push(Keyframe { time, poses: Vec::new() });
        }
        assert_relative_eq!(clip.duration(), 1.25);
    }
}
