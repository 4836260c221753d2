//! Lighting system

use serde::{Deserialize, Serialize};

use crate::foundation::math::Vec3;

/// Light types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LightType {
    /// Directional light (like sunlight)
    Directional,
    /// Point light (like a lightbulb)
    #[default]
    Point,
    /// Spot light (like a flashlight)
    Spot,
}

/// Light source with classic constant/linear/quadratic attenuation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Light {
    /// Light type
    pub light_type: LightType,
    /// Light position (for point/spot lights)
    pub position: Vec3,
    /// Light color
    pub color: Vec3,
    /// Ambient contribution
    pub ambient: f32,
    /// Constant attenuation term
    pub constant: f32,
    /// Linear attenuation term
    pub linear: f32,
    /// Quadratic attenuation term
    pub quadratic: f32,
}

impl Light {
    /// Create a point light
    pub const fn point(position: Vec3, color: Vec3, ambient: f32, constant: f32, linear: f32, quadratic: f32) -> Self {
        Self {
            light_type: LightType::Point,
            position,
            color,
            ambient,
            constant,
            linear,
            quadratic,
        }
    }

    /// Attenuation factor at `distance` from the light
    pub fn attenuation(&self, distance: f32) -> f32 {
        let denom = self.constant + self.linear * distance + self.quadratic * distance * distance;
        if denom <= f32::EPSILON {
            1.0
        } else {
            1.0 / denom
        }
    }
}

impl Default for Light {
    fn default() -> Self {
        Self::point(Vec3::zeros(), Vec3::new(1.0, 1.0, 1.0), 0.0, 1.0, 0.0, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_attenuation_falls_off() {
        let light = Light::point(Vec3::zeros(), Vec3::new(0.0, 0.0, 1.0), 0.5, 1.0, 0.09, 0.032);
        assert_relative_eq!(light.attenuation(0.0), 1.0);
        assert!(light.attenuation(10.0) < light.attenuation(1.0));
    }

    #[test]
    fn test_default_is_unattenuated_white_point() {
        let light = Light::default();
        assert_eq!(light.light_type, LightType::Point);
        assert_relative_eq!(light.attenuation(5.0), 1.0);
    }
}
