//! Physics module for collision detection
//!
//! Narrow-phase only: callers decide which pairs to test and what to do with
//! the answer. Response (position clamping, grounded checks) stays with the
//! gameplay layer.

pub mod collision;

pub use collision::{
    calc_intersection_point, Box2D, Circle, Collide, Collider2D, Collider3D, RayIntersectResult,
    Sphere, AABB, OBB,
};
