//! Oriented bounding boxes
//!
//! An [`OBB`] is a center, half-extents along its local axes and a unit
//! rotation. The local axes are the rotated world axes: `right` (+X),
//! `up` (+Y) and `front` (+Z).

use serde::{Deserialize, Serialize};

use super::both_exist;
use super::volumes::{Sphere, AABB};
use crate::foundation::math::{Quat, Vec3};

/// Oriented bounding box
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OBB {
    /// Center of the box
    pub pos: Vec3,
    /// Half-extents along the local right, up and front axes
    pub size: Vec3,
    /// Rotation from local to world space
    pub orientation: Quat,
    /// Soft-enable switch; a box that does not exist hits nothing
    pub exists: bool,
}

impl Default for OBB {
    fn default() -> Self {
        Self {
            pos: Vec3::zeros(),
            size: Vec3::zeros(),
            orientation: Quat::identity(),
            exists: true,
        }
    }
}

impl From<AABB> for OBB {
    fn from(aabb: AABB) -> Self {
        Self {
            pos: aabb.pos,
            size: aabb.size,
            orientation: Quat::identity(),
            exists: aabb.exists,
        }
    }
}

impl OBB {
    /// Creates an oriented box
    pub fn new(pos: Vec3, size: Vec3, orientation: Quat, exists: bool) -> Self {
        Self {
            pos,
            size,
            orientation,
            exists,
        }
    }

    /// Overwrites every field from live entity state
    pub fn set(&mut self, pos: Vec3, size: Vec3, orientation: Quat, exists: bool) {
        *self = Self::new(pos, size, orientation, exists);
    }

    /// Copy of this box moved by `offset`
    #[must_use]
    pub fn translated(&self, offset: Vec3) -> Self {
        Self {
            pos: self.pos + offset,
            ..*self
        }
    }

    /// Local +X axis in world space
    pub fn right(&self) -> Vec3 {
        self.orientation * Vec3::x()
    }

    /// Local +Y axis in world space
    pub fn up(&self) -> Vec3 {
        self.orientation * Vec3::y()
    }

    /// Local +Z axis in world space
    pub fn front(&self) -> Vec3 {
        self.orientation * Vec3::z()
    }

    /// Local axes in `size` order: right, up, front
    pub fn axes(&self) -> [Vec3; 3] {
        [self.right(), self.up(), self.front()]
    }

    /// Half-length of this box's shadow on `axis`, scaled by `|axis|`
    fn projected_radius(&self, axis: &Vec3) -> f32 {
        self.axes()
            .iter()
            .zip(self.size.iter())
            .map(|(local, half)| (half * local.dot(axis)).abs())
            .sum()
    }

    /// OBB-OBB overlap using the separating axis theorem
    ///
    /// Tests 15 candidate axes:
    /// - 3 local axes of each box
    /// - 9 cross products of one local axis from each box
    ///
    /// Cross products of (nearly) parallel axes come out (nearly) zero and
    /// never separate anything. Touching boxes count as hitting.
    pub fn is_hit_obb(&self, other: &Self, ignore_exist_flag: bool) -> bool {
        if !both_exist(self.exists, other.exists, ignore_exist_flag) {
            return false;
        }

        let delta = other.pos - self.pos;
        let separates = |axis: &Vec3| {
            delta.dot(axis).abs() > self.projected_radius(axis) + other.projected_radius(axis)
        };

        let axes_l = self.axes();
        let axes_r = other.axes();

        if axes_l.iter().any(separates) || axes_r.iter().any(separates) {
            return false;
        }

        for axis_l in &axes_l {
            for axis_r in &axes_r {
                if separates(&axis_l.cross(axis_r)) {
                    return false;
                }
            }
        }

        // No separating axis found
        true
    }

    /// OBB-sphere overlap, boundary inclusive
    ///
    /// Sums how far the sphere center sticks out past each face slab into a
    /// protrusion vector and compares its length to the radius. Axes with a
    /// zero half-extent are skipped, so a flat box ignores distance along
    /// its flat axis.
    pub fn is_hit_sphere(&self, sphere: &Sphere, ignore_exist_flag: bool) -> bool {
        if !both_exist(self.exists, sphere.exists, ignore_exist_flag) {
            return false;
        }

        let delta = sphere.pos - self.pos;
        let mut protrusion = Vec3::zeros();
        for (axis, &half) in self.axes().iter().zip(self.size.iter()) {
            if half > 0.0 {
                let projection = delta.dot(axis) / half;
                if projection.abs() > 1.0 {
                    protrusion += axis * ((1.0 - projection.abs()) * half);
                }
            }
        }

        protrusion.norm() <= sphere.radius
    }

    /// OBB-AABB overlap; the AABB is treated as an unrotated OBB
    pub fn is_hit_aabb(&self, aabb: &AABB, ignore_exist_flag: bool) -> bool {
        self.is_hit_obb(&Self::from(*aabb), ignore_exist_flag)
    }
}

impl PartialEq for OBB {
    fn eq(&self, other: &Self) -> bool {
        self.pos - other.pos == Vec3::zeros()
            && self.size - other.size == Vec3::zeros()
            && self.orientation == other.orientation
            && self.exists == other.exists
    }
}
