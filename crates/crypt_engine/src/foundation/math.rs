//! Math utilities and types
//!
//! Thin aliases over nalgebra so the rest of the engine speaks one vocabulary.

pub use nalgebra::{Matrix4, UnitQuaternion, Vector3};

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// 3D point type
pub type Point3 = nalgebra::Point3<f32>;

/// Quaternion type for rotations
pub type Quat = UnitQuaternion<f32>;

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// Degrees to radians conversion factor
    pub const DEG_TO_RAD: f32 = PI / 180.0;

    /// Radians to degrees conversion factor
    pub const RAD_TO_DEG: f32 = 180.0 / PI;
}

/// Math utility functions
pub mod utils {
    use super::{constants, Quat, Vec3};

    /// Convert degrees to radians
    pub fn deg_to_rad(degrees: f32) -> f32 {
        degrees * constants::DEG_TO_RAD
    }

    /// Convert radians to degrees
    pub fn rad_to_deg(radians: f32) -> f32 {
        radians * constants::RAD_TO_DEG
    }

    /// Rotation of `degrees` around an arbitrary (not necessarily normalized) axis.
    ///
    /// A zero axis yields the identity rotation.
    pub fn axis_angle_degrees(axis: Vec3, degrees: f32) -> Quat {
        nalgebra::Unit::try_new(axis, f32::EPSILON)
            .map_or_else(Quat::identity, |axis| Quat::from_axis_angle(&axis, deg_to_rad(degrees)))
    }
}

#[cfg(test)]
mod tests {
    use super::utils::{axis_angle_degrees, deg_to_rad, rad_to_deg};
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_degree_conversion_round_trip() {
        assert_relative_eq!(rad_to_deg(deg_to_rad(137.0)), 137.0, epsilon = 1e-4);
        assert_relative_eq!(deg_to_rad(180.0), constants::PI, epsilon = 1e-6);
    }

    #[test]
    fn test_axis_angle_half_turn_about_x_flips_up() {
        let q = axis_angle_degrees(Vec3::new(1.0, 0.0, 0.0), 180.0);
        let up = q * Vec3::new(0.0, 1.0, 0.0);
        assert_relative_eq!(up, Vec3::new(0.0, -1.0, 0.0), epsilon = 1e-5);
    }

    #[test]
    fn test_zero_axis_is_identity() {
        let q = axis_angle_degrees(Vec3::zeros(), 90.0);
        assert_relative_eq!(q, Quat::identity(), epsilon = 1e-6);
    }
}
