//! Math utilities and types
//!
//! Provides the vector and rotation types shapes are built from, plus the
//! single tolerance used for approximate shape equality.

use approx::AbsDiffEq;

pub use nalgebra::{Quaternion, Unit, Vector2, Vector3};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// Quaternion type for rotations
pub type Quat = Unit<Quaternion<f32>>;

/// Tolerance for approximate float equality (machine epsilon of `f32`).
///
/// Only equality operators use it. Hit tests compare exactly.
pub const EPSILON: f32 = f32::EPSILON;

/// Absolute-difference float compare against [`EPSILON`]
pub fn nearly_equal(a: f32, b: f32) -> bool {
    a.abs_diff_eq(&b, EPSILON)
}

/// Absolute-difference compare of every component against [`EPSILON`]
pub fn nearly_equal_vec2(a: &Vec2, b: &Vec2) -> bool {
    a.abs_diff_eq(b, EPSILON)
}

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// Pi / 2
    pub const HALF_PI: f32 = PI * 0.5;

    /// Pi / 4
    pub const QUARTER_PI: f32 = PI * 0.25;

    /// Degrees to radians conversion factor
    pub const DEG_TO_RAD: f32 = PI / 180.0;
}

/// Math utility functions
pub mod utils {
    use super::{constants, Quat, Vec3};

    /// Convert degrees to radians
    pub fn deg_to_rad(degrees: f32) -> f32 {
        degrees * constants::DEG_TO_RAD
    }

    /// Rotation of `degrees` around the world Y axis
    pub fn yaw(degrees: f32) -> Quat {
        Quat::from_axis_angle(&Vec3::y_axis(), deg_to_rad(degrees))
    }
}
