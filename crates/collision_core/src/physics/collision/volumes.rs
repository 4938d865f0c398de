//! Axis-aligned 3D volumes
//!
//! [`AABB`] (center + half-extents) and [`Sphere`]. Equality on these types
//! is exact: two shapes are equal when their component differences are the
//! zero vector.

use serde::{Deserialize, Serialize};

use super::both_exist;
use super::oriented::OBB;
use crate::foundation::math::Vec3;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AABB {
    /// Center of the box
    pub pos: Vec3,
    /// Half-extents along X, Y and Z
    pub size: Vec3,
    /// Soft-enable switch; a box that does not exist hits nothing
    pub exists: bool,
}

impl Default for AABB {
    fn default() -> Self {
        Self {
            pos: Vec3::zeros(),
            size: Vec3::zeros(),
            exists: true,
        }
    }
}

impl AABB {
    /// Creates a box centered at `(x, y, z)` with the given half-extents
    pub fn new(
        x: f32,
        y: f32,
        z: f32,
        half_x: f32,
        half_y: f32,
        half_z: f32,
        exists: bool,
    ) -> Self {
        Self {
            pos: Vec3::new(x, y, z),
            size: Vec3::new(half_x, half_y, half_z),
            exists,
        }
    }

    /// Create an AABB centered at a point with given half-extents
    pub fn from_center_extents(pos: Vec3, size: Vec3) -> Self {
        Self {
            pos,
            size,
            exists: true,
        }
    }

    /// Overwrites every field from live entity state
    pub fn set(
        &mut self,
        x: f32,
        y: f32,
        z: f32,
        half_x: f32,
        half_y: f32,
        half_z: f32,
        exists: bool,
    ) {
        *self = Self::new(x, y, z, half_x, half_y, half_z, exists);
    }

    /// Minimum corner
    pub fn min(&self) -> Vec3 {
        self.pos - self.size
    }

    /// Maximum corner
    pub fn max(&self) -> Vec3 {
        self.pos + self.size
    }

    /// Copy of this box moved by `offset`
    #[must_use]
    pub fn translated(&self, offset: Vec3) -> Self {
        Self {
            pos: self.pos + offset,
            ..*self
        }
    }

    /// Point-in-box test, boundary inclusive
    pub fn is_hit_point(&self, point: &Vec3, ignore_exist_flag: bool) -> bool {
        if !ignore_exist_flag && !self.exists {
            return false;
        }

        let min = self.min();
        let max = self.max();
        for axis in 0..3 {
            let inside = min[axis] <= point[axis] && point[axis] <= max[axis];
            if !inside {
                return false;
            }
        }
        true
    }

    /// Box-box overlap, boundary inclusive
    ///
    /// Grows this box by the other's half-extents and point-tests the other's
    /// center against the result.
    pub fn is_hit_aabb(&self, other: &Self, ignore_exist_flag: bool) -> bool {
        if !both_exist(self.exists, other.exists, ignore_exist_flag) {
            return false;
        }

        let grown = Self {
            size: self.size + other.size,
            ..*self
        };
        grown.is_hit_point(&other.pos, true)
    }

    /// Box-sphere overlap, boundary exclusive
    pub fn is_hit_sphere(&self, sphere: &Sphere, ignore_exist_flag: bool) -> bool {
        if !both_exist(self.exists, sphere.exists, ignore_exist_flag) {
            return false;
        }

        let min = self.min();
        let max = self.max();
        let mut clamp = Vec3::zeros();
        for axis in 0..3 {
            let center = sphere.pos[axis];
            if center < min[axis] {
                clamp[axis] = center - min[axis];
            } else if center > max[axis] {
                clamp[axis] = center - max[axis];
            }
        }

        clamp.norm_squared() < sphere.radius * sphere.radius
    }

    /// Box-OBB overlap through the separating axis test
    pub fn is_hit_obb(&self, obb: &OBB, ignore_exist_flag: bool) -> bool {
        OBB::from(*self).is_hit_obb(obb, ignore_exist_flag)
    }
}

impl PartialEq for AABB {
    fn eq(&self, other: &Self) -> bool {
        self.pos - other.pos == Vec3::zeros()
            && self.size - other.size == Vec3::zeros()
            && self.exists == other.exists
    }
}

/// Sphere
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Sphere {
    /// Center of the sphere
    pub pos: Vec3,
    /// Radius
    pub radius: f32,
    /// Soft-enable switch; a sphere that does not exist hits nothing
    pub exists: bool,
}

impl Default for Sphere {
    fn default() -> Self {
        Self {
            pos: Vec3::zeros(),
            radius: 0.0,
            exists: true,
        }
    }
}

impl Sphere {
    /// Creates a sphere centered at `(x, y, z)`
    pub fn new(x: f32, y: f32, z: f32, radius: f32, exists: bool) -> Self {
        Self {
            pos: Vec3::new(x, y, z),
            radius,
            exists,
        }
    }

    /// Overwrites every field from live entity state
    pub fn set(&mut self, x: f32, y: f32, z: f32, radius: f32, exists: bool) {
        *self = Self::new(x, y, z, radius, exists);
    }

    /// Copy of this sphere moved by `offset`
    #[must_use]
    pub fn translated(&self, offset: Vec3) -> Self {
        Self {
            pos: self.pos + offset,
            ..*self
        }
    }

    /// Point-in-sphere test, boundary exclusive
    pub fn is_hit_point(&self, point: &Vec3, ignore_exist_flag: bool) -> bool {
        if !ignore_exist_flag && !self.exists {
            return false;
        }

        (point - self.pos).norm_squared() < self.radius * self.radius
    }

    /// Sphere-sphere overlap, boundary exclusive
    pub fn is_hit_sphere(&self, other: &Self, ignore_exist_flag: bool) -> bool {
        if !both_exist(self.exists, other.exists, ignore_exist_flag) {
            return false;
        }

        let radius_sum = self.radius + other.radius;
        (other.pos - self.pos).norm_squared() < radius_sum * radius_sum
    }

    /// Sphere-box overlap; same answer as [`AABB::is_hit_sphere`]
    pub fn is_hit_aabb(&self, aabb: &AABB, ignore_exist_flag: bool) -> bool {
        aabb.is_hit_sphere(self, ignore_exist_flag)
    }

    /// Sphere-OBB overlap; same answer as [`OBB::is_hit_sphere`]
    pub fn is_hit_obb(&self, obb: &OBB, ignore_exist_flag: bool) -> bool {
        obb.is_hit_sphere(self, ignore_exist_flag)
    }
}

impl PartialEq for Sphere {
    fn eq(&self, other: &Self) -> bool {
        self.pos - other.pos == Vec3::zeros()
            && self.radius - other.radius == 0.0
            && self.exists == other.exists
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_aabb() -> AABB {
        AABB::new(0.0, 0.0, 0.0, 1.0, 1.0, 1.0, true)
    }

    #[test]
    fn test_aabb_point_inclusive() {
        let aabb = unit_aabb();

        assert!(aabb.is_hit_point(&Vec3::zeros(), false));
        assert!(aabb.is_hit_point(&Vec3::new(1.0, -1.0, 1.0), false));
        assert!(!aabb.is_hit_point(&Vec3::new(0.0, 0.0, 1.01), false));
        assert!(!aabb.is_hit_point(&Vec3::new(-2.0, 0.0, 0.0), false));
    }

    #[test]
    fn test_aabb_point_nan_misses() {
        let aabb = unit_aabb();
        assert!(!aabb.is_hit_point(&Vec3::new(f32::NAN, 0.0, 0.0), false));
        assert!(!aabb.is_hit_point(&Vec3::new(0.0, 0.0, f32::NAN), false));
    }

    #[test]
    fn test_aabb_point_exists() {
        let mut aabb = unit_aabb();
        aabb.exists = false;

        assert!(!aabb.is_hit_point(&Vec3::zeros(), false));
        assert!(aabb.is_hit_point(&Vec3::zeros(), true));
    }

    #[test]
    fn test_aabb_aabb_overlap_and_touch() {
        let a = unit_aabb();

        assert!(a.is_hit_aabb(&AABB::new(1.5, 0.5, 0.0, 1.0, 1.0, 1.0, true), false));
        assert!(a.is_hit_aabb(&AABB::new(2.0, 0.0, 0.0, 1.0, 1.0, 1.0, true), false));
        assert!(!a.is_hit_aabb(&AABB::new(0.0, 2.5, 0.0, 1.0, 1.0, 1.0, true), false));
        assert!(!a.is_hit_aabb(&AABB::new(0.0, 0.0, -3.0, 1.0, 1.0, 1.0, true), false));
    }

    #[test]
    fn test_aabb_aabb_contained() {
        let outer = AABB::new(0.0, 0.0, 0.0, 10.0, 10.0, 10.0, true);
        let inner = AABB::new(3.0, -2.0, 1.0, 0.5, 0.5, 0.5, true);

        assert!(outer.is_hit_aabb(&inner, false));
        assert!(inner.is_hit_aabb(&outer, false));
    }

    #[test]
    fn test_aabb_aabb_exists() {
        let a = unit_aabb();
        let mut b = unit_aabb();
        b.exists = false;

        assert!(!a.is_hit_aabb(&b, false));
        assert!(a.is_hit_aabb(&b, true));
    }

    #[test]
    fn test_sphere_vs_aabb_gap() {
        let sphere = Sphere::new(0.0, 0.0, 0.0, 1.0, true);
        let aabb = AABB::new(2.0, 0.0, 0.0, 0.5, 0.5, 0.5, true);

        assert!(!aabb.is_hit_sphere(&sphere, false));
        assert!(!sphere.is_hit_aabb(&aabb, false));
    }

    #[test]
    fn test_aabb_sphere_face_and_corner() {
        let aabb = unit_aabb();

        assert!(aabb.is_hit_sphere(&Sphere::new(1.5, 0.0, 0.0, 0.6, true), false));
        assert!(!aabb.is_hit_sphere(&Sphere::new(1.5, 0.0, 0.0, 0.5, true), false));
        // Corner (1, 1, 1) is sqrt(3) * 0.5 ~ 0.866 away
        assert!(aabb.is_hit_sphere(&Sphere::new(1.5, 1.5, 1.5, 0.9, true), false));
        assert!(!aabb.is_hit_sphere(&Sphere::new(1.5, 1.5, 1.5, 0.8, true), false));
    }

    #[test]
    fn test_aabb_sphere_center_inside() {
        let aabb = unit_aabb();
        assert!(aabb.is_hit_sphere(&Sphere::new(0.2, -0.3, 0.9, 0.01, true), false));
    }

    #[test]
    fn test_zero_radius_sphere_inside_box_misses() {
        // Clamp length is 0 and the compare is strict
        let aabb = unit_aabb();
        assert!(!aabb.is_hit_sphere(&Sphere::new(0.0, 0.0, 0.0, 0.0, true), false));
    }

    #[test]
    fn test_aabb_sphere_exists() {
        let aabb = unit_aabb();
        let ghost = Sphere::new(0.0, 0.0, 0.0, 1.0, false);

        assert!(!aabb.is_hit_sphere(&ghost, false));
        assert!(!ghost.is_hit_aabb(&aabb, false));
        assert!(aabb.is_hit_sphere(&ghost, true));
    }

    #[test]
    fn test_sphere_point_and_sphere_strict() {
        let sphere = Sphere::new(0.0, 0.0, 0.0, 1.0, true);

        assert!(sphere.is_hit_point(&Vec3::new(0.0, 0.5, 0.5), false));
        assert!(!sphere.is_hit_point(&Vec3::new(0.0, 0.0, 1.0), false));
        assert!(!sphere.is_hit_sphere(&Sphere::new(0.0, 3.0, 0.0, 2.0, true), false));
        assert!(sphere.is_hit_sphere(&Sphere::new(0.0, 2.9, 0.0, 2.0, true), false));
    }

    #[test]
    fn test_set_and_translate() {
        let mut aabb = AABB::default();
        aabb.set(1.0, 2.0, 3.0, 0.5, 0.5, 0.5, true);
        assert_eq!(
            aabb.translated(Vec3::new(-1.0, -2.0, -3.0)),
            AABB::from_center_extents(Vec3::zeros(), Vec3::repeat(0.5))
        );

        let mut sphere = Sphere::default();
        sphere.set(1.0, 1.0, 1.0, 2.0, false);
        assert_eq!(sphere, Sphere::new(1.0, 1.0, 1.0, 2.0, false));
    }

    #[test]
    fn test_equality_is_exact() {
        let a = unit_aabb();
        let nudged = AABB::new(f32::EPSILON, 0.0, 0.0, 1.0, 1.0, 1.0, true);

        assert_eq!(a, unit_aabb());
        assert_ne!(a, nudged);
        assert_ne!(
            Sphere::new(0.0, 0.0, 0.0, 1.0, true),
            Sphere::new(0.0, 0.0, 0.0, 1.0 + f32::EPSILON, true)
        );
    }

    #[test]
    fn test_equality_nan_never_equal() {
        let a = AABB::new(f32::NAN, 0.0, 0.0, 1.0, 1.0, 1.0, true);
        let copy = a;
        assert_ne!(a, copy);
    }

    #[test]
    fn test_negative_half_extents_are_unvalidated() {
        // min > max, so no point lands inside
        let inverted = AABB::new(0.0, 0.0, 0.0, -1.0, -1.0, -1.0, true);
        assert!(!inverted.is_hit_point(&Vec3::zeros(), false));

        // Extents are summed before the point test, so a larger box cancels them
        let shrunk = AABB::new(0.0, 0.0, 0.0, -0.5, -0.5, -0.5, true);
        assert!(unit_aabb().is_hit_aabb(&shrunk, false));
        assert!(shrunk.is_hit_aabb(&unit_aabb(), false));

        // Every axis reads as outside the inverted slab
        let centered = Sphere::new(0.0, 0.0, 0.0, 1.0, true);
        assert!(!inverted.is_hit_sphere(&centered, false));
    }

    #[test]
    fn test_negative_radius_is_unvalidated() {
        // Squared compares treat the radius by magnitude
        let inverted = Sphere::new(1.5, 0.0, 0.0, -1.0, true);
        assert!(unit_aabb().is_hit_sphere(&inverted, false));
        assert!(inverted.is_hit_aabb(&unit_aabb(), false));
        assert!(inverted.is_hit_point(&Vec3::new(1.0, 0.0, 0.0), false));
    }
}
