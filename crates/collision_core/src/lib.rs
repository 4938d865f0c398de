//! # Collision Core
//!
//! Narrow-phase collision predicates for the shapes game entities and level
//! geometry are described with.
//!
//! ## Features
//!
//! - **2D shapes**: [`Box2D`] and [`Circle`] with point, box and circle tests
//! - **3D shapes**: [`AABB`], [`Sphere`] and [`OBB`] (separating axis test)
//! - **Ray casting**: slab-method line vs [`AABB`] with struck-face normal
//! - **Exists flag**: every shape can be switched off without being removed
//!
//! ## Quick Start
//!
//! ```rust
//! use collision_core::prelude::*;
//!
//! let player = Box2D::new(0.0, 0.0, 1.0, 1.0, true);
//! let crate_box = Box2D::new(1.5, 0.0, 1.0, 1.0, true);
//! assert!(player.is_hit_box(&crate_box, false));
//!
//! let floor = AABB::new(0.0, 0.0, 0.0, 1.0, 1.0, 1.0, true);
//! let hit = calc_intersection_point(
//!     Vec3::new(-5.0, 0.0, 0.0),
//!     Vec3::new(5.0, 0.0, 0.0),
//!     &floor,
//! );
//! assert!(hit.is_intersect);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod foundation;
pub mod physics;

pub use physics::collision::{
    calc_intersection_point, Box2D, Circle, Collide, Collider2D, Collider3D, RayIntersectResult,
    Sphere, AABB, OBB,
};

/// Common imports for crate users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError},
        foundation::math::{nearly_equal, Quat, Vec2, Vec3, EPSILON},
        physics::collision::{
            calc_intersection_point, Box2D, Circle, Collide, Collider2D, Collider3D,
            RayIntersectResult, Sphere, AABB, OBB,
        },
    };
}
