//! Line vs AABB intersection (slab method)
//!
//! The query is the infinite line through `ray_start` and `ray_end`; the
//! parameter `t` is not clamped to the segment. Direction components of zero
//! produce infinite reciprocals, and the resulting IEEE comparisons decide
//! the outcome (NaN never counts as a hit).

use serde::{Deserialize, Serialize};

use super::volumes::AABB;
use crate::foundation::math::Vec3;

/// Result of [`calc_intersection_point`]
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RayIntersectResult {
    /// Whether the line crosses the box
    pub is_intersect: bool,
    /// Entry point in world space; zero when there is no hit
    pub intersection: Vec3,
    /// Face normal with a single `±1` component, or zero on a miss or when
    /// the entry point sits on an edge or corner
    pub normal: Vec3,
}

/// Intersects the line through `ray_start` and `ray_end` with `aabb`
///
/// The box's `exists` flag is not consulted.
pub fn calc_intersection_point(ray_start: Vec3, ray_end: Vec3, aabb: &AABB) -> RayIntersectResult {
    let direction = ray_end - ray_start;
    let inv_dir = direction.map(|d| 1.0 / d);

    let box_min = aabb.min();
    let box_max = aabb.max();

    let mut t_min = Vec3::zeros();
    let mut t_max = Vec3::zeros();
    for axis in 0..3 {
        let t0 = (box_min[axis] - ray_start[axis]) * inv_dir[axis];
        let t1 = (box_max[axis] - ray_start[axis]) * inv_dir[axis];
        if t1 < t0 {
            t_min[axis] = t1;
            t_max[axis] = t0;
        } else {
            t_min[axis] = t0;
            t_max[axis] = t1;
        }
    }

    // A NaN candidate never replaces the running value; a NaN in the first
    // slot is carried through.
    let mut greatest_min = t_min[0];
    let mut smallest_max = t_max[0];
    for axis in 1..3 {
        if greatest_min < t_min[axis] {
            greatest_min = t_min[axis];
        }
        if t_max[axis] < smallest_max {
            smallest_max = t_max[axis];
        }
    }

    let is_intersect = (0..3).all(|axis| {
        t_max[axis] >= t_min[axis] && t_max[axis] >= greatest_min && smallest_max >= t_min[axis]
    });

    if !is_intersect {
        return RayIntersectResult::default();
    }

    let intersection = ray_start + direction * greatest_min;
    RayIntersectResult {
        is_intersect,
        intersection,
        normal: face_normal(&(intersection - aabb.pos)),
    }
}

/// `±1` on the axis whose offset strictly dominates both others, else zero
fn face_normal(offset: &Vec3) -> Vec3 {
    let abs = offset.abs();
    let sign = |v: f32| if v < 0.0 { -1.0 } else { 1.0 };

    if abs.x > abs.y && abs.x > abs.z {
        Vec3::new(sign(offset.x), 0.0, 0.0)
    } else if abs.y > abs.x && abs.y > abs.z {
        Vec3::new(0.0, sign(offset.y), 0.0)
    } else if abs.z > abs.x && abs.z > abs.y {
        Vec3::new(0.0, 0.0, sign(offset.z))
    } else {
        log::trace!("ray entry {offset:?} is on an edge or corner, normal left zero");
        Vec3::zeros()
    }
}
