//! Collision detection between shape value types
//!
//! Every shape is a frame-local snapshot the caller rebuilds from live entity
//! state, then hands to a predicate. Predicates never mutate or retain their
//! arguments.
//!
//! # Module Organization
//!
//! - [`planar`] - 2D shapes ([`Box2D`], [`Circle`]) and their tests
//! - [`volumes`] - axis-aligned 3D shapes ([`AABB`], [`Sphere`])
//! - [`oriented`] - oriented boxes ([`OBB`]) and the separating axis test
//! - [`ray`] - slab-method line vs [`AABB`]
//! - [`shape`] - [`Collide`] trait and the [`Collider2D`]/[`Collider3D`] unions
//!
//! # Exists flag
//!
//! Each shape carries `exists`. Every predicate takes `ignore_exist_flag`;
//! when it is `false` and either participant does not exist, the predicate
//! returns `false` before touching any coordinates.
//!
//! # Boundaries
//!
//! Box tests are inclusive (`<=`), round-shape tests are exclusive (`<`),
//! except [`OBB::is_hit_sphere`] which accepts touching (`<=`).

pub mod oriented;
pub mod planar;
pub mod ray;
pub mod shape;
pub mod volumes;

#[cfg(test)]
mod tests;

pub use oriented::OBB;
pub use planar::{Box2D, Circle};
pub use ray::{calc_intersection_point, RayIntersectResult};
pub use shape::{Collide, Collider2D, Collider3D};
pub use volumes::{Sphere, AABB};

/// `true` when the exists gate lets a pair through to the geometric test
#[inline]
pub(crate) const fn both_exist(a: bool, b: bool, ignore_exist_flag: bool) -> bool {
    ignore_exist_flag || (a && b)
}
