//! 2D collision shapes and intersection tests
//!
//! [`Box2D`] is an axis-aligned rectangle stored as center + half-extents,
//! [`Circle`] a center + radius. Each test also has an `_offset` form that
//! shifts one or both operands first, so one-off queries ("would I hit the
//! wall if I moved by `v`?") need no translated copy at the call site.

use serde::{Deserialize, Serialize};

use super::both_exist;
use crate::foundation::math::{nearly_equal, nearly_equal_vec2, Vec2};

/// Axis-aligned 2D box
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Box2D {
    /// Center of the box
    pub pos: Vec2,
    /// Half-extents along X and Y
    pub size: Vec2,
    /// Soft-enable switch; a box that does not exist hits nothing
    pub exists: bool,
}

impl Default for Box2D {
    fn default() -> Self {
        Self {
            pos: Vec2::zeros(),
            size: Vec2::zeros(),
            exists: true,
        }
    }
}

impl Box2D {
    /// Creates a box centered at `(x, y)` with the given half-extents
    pub fn new(x: f32, y: f32, half_width: f32, half_height: f32, exists: bool) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(half_width, half_height),
            exists,
        }
    }

    /// Overwrites every field from live entity state
    pub fn set(&mut self, x: f32, y: f32, half_width: f32, half_height: f32, exists: bool) {
        *self = Self::new(x, y, half_width, half_height, exists);
    }

    /// Lower-left corner
    pub fn min(&self) -> Vec2 {
        self.pos - self.size
    }

    /// Upper-right corner
    pub fn max(&self) -> Vec2 {
        self.pos + self.size
    }

    /// Corners in counter-clockwise order starting at [`Self::min`]
    pub fn corners(&self) -> [Vec2; 4] {
        let min = self.min();
        let max = self.max();
        [
            min,
            Vec2::new(max.x, min.y),
            max,
            Vec2::new(min.x, max.y),
        ]
    }

    /// Copy of this box moved by `offset`
    #[must_use]
    pub fn translated(&self, offset: Vec2) -> Self {
        Self {
            pos: self.pos + offset,
            ..*self
        }
    }

    /// Point-in-box test, boundary inclusive
    pub fn is_hit_point(&self, x: f32, y: f32, ignore_exist_flag: bool) -> bool {
        if !ignore_exist_flag && !self.exists {
            return false;
        }

        let min = self.min();
        let max = self.max();
        min.x <= x && x <= max.x && min.y <= y && y <= max.y
    }

    /// [`Self::is_hit_point`] with the box moved by `offset`
    pub fn is_hit_point_offset(
        &self,
        offset: Vec2,
        x: f32,
        y: f32,
        ignore_exist_flag: bool,
    ) -> bool {
        self.translated(offset).is_hit_point(x, y, ignore_exist_flag)
    }

    /// Box-box overlap, boundary inclusive
    pub fn is_hit_box(&self, other: &Self, ignore_exist_flag: bool) -> bool {
        if !both_exist(self.exists, other.exists, ignore_exist_flag) {
            return false;
        }

        let (l_min, l_max) = (self.min(), self.max());
        let (r_min, r_max) = (other.min(), other.max());

        l_min.x <= r_max.x && r_min.x <= l_max.x && l_min.y <= r_max.y && r_min.y <= l_max.y
    }

    /// [`Self::is_hit_box`] with each box moved by its own offset
    pub fn is_hit_box_offset(
        &self,
        offset: Vec2,
        other: &Self,
        other_offset: Vec2,
        ignore_exist_flag: bool,
    ) -> bool {
        self.translated(offset)
            .is_hit_box(&other.translated(other_offset), ignore_exist_flag)
    }

    /// Box-circle overlap
    ///
    /// Hit when the circle center lies in the box grown by the radius along Y,
    /// or grown along X, or when any box corner lies strictly inside the
    /// circle. A circle touching an edge therefore hits while one touching
    /// only a corner does not.
    pub fn is_hit_circle(&self, circle: &Circle, ignore_exist_flag: bool) -> bool {
        if !both_exist(self.exists, circle.exists, ignore_exist_flag) {
            return false;
        }

        let (cx, cy) = (circle.pos.x, circle.pos.y);
        let radius = circle.radius;

        let tall = Self {
            size: Vec2::new(self.size.x, self.size.y + radius),
            ..*self
        };
        if tall.is_hit_point(cx, cy, true) {
            return true;
        }

        let wide = Self {
            size: Vec2::new(self.size.x + radius, self.size.y),
            ..*self
        };
        if wide.is_hit_point(cx, cy, true) {
            return true;
        }

        self.corners()
            .iter()
            .any(|corner| circle.is_hit_point(corner.x, corner.y, true))
    }

    /// [`Self::is_hit_circle`] with the box and circle moved by their offsets
    pub fn is_hit_circle_offset(
        &self,
        offset: Vec2,
        circle: &Circle,
        circle_offset: Vec2,
        ignore_exist_flag: bool,
    ) -> bool {
        self.translated(offset)
            .is_hit_circle(&circle.translated(circle_offset), ignore_exist_flag)
    }
}

impl PartialEq for Box2D {
    fn eq(&self, other: &Self) -> bool {
        nearly_equal_vec2(&self.pos, &other.pos)
            && nearly_equal_vec2(&self.size, &other.size)
            && self.exists == other.exists
    }
}

/// 2D circle
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Circle {
    /// Center of the circle
    pub pos: Vec2,
    /// Radius
    pub radius: f32,
    /// Soft-enable switch; a circle that does not exist hits nothing
    pub exists: bool,
}

impl Default for Circle {
    fn default() -> Self {
        Self {
            pos: Vec2::zeros(),
            radius: 0.0,
            exists: true,
        }
    }
}

impl Circle {
    /// Creates a circle centered at `(x, y)`
    pub fn new(x: f32, y: f32, radius: f32, exists: bool) -> Self {
        Self {
            pos: Vec2::new(x, y),
            radius,
            exists,
        }
    }

    /// Overwrites every field from live entity state
    pub fn set(&mut self, x: f32, y: f32, radius: f32, exists: bool) {
        *self = Self::new(x, y, radius, exists);
    }

    /// Copy of this circle moved by `offset`
    #[must_use]
    pub fn translated(&self, offset: Vec2) -> Self {
        Self {
            pos: self.pos + offset,
            ..*self
        }
    }

    /// Point-in-circle test, boundary exclusive
    pub fn is_hit_point(&self, x: f32, y: f32, ignore_exist_flag: bool) -> bool {
        if !ignore_exist_flag && !self.exists {
            return false;
        }

        let distance_squared = (Vec2::new(x, y) - self.pos).norm_squared();
        distance_squared < self.radius * self.radius
    }

    /// [`Self::is_hit_point`] with the circle moved by `offset`
    pub fn is_hit_point_offset(
        &self,
        offset: Vec2,
        x: f32,
        y: f32,
        ignore_exist_flag: bool,
    ) -> bool {
        self.translated(offset).is_hit_point(x, y, ignore_exist_flag)
    }

    /// Circle-circle overlap, boundary exclusive
    pub fn is_hit_circle(&self, other: &Self, ignore_exist_flag: bool) -> bool {
        if !both_exist(self.exists, other.exists, ignore_exist_flag) {
            return false;
        }

        let distance_squared = (other.pos - self.pos).norm_squared();
        let radius_sum = self.radius + other.radius;
        distance_squared < radius_sum * radius_sum
    }

    /// [`Self::is_hit_circle`] with each circle moved by its own offset
    pub fn is_hit_circle_offset(
        &self,
        offset: Vec2,
        other: &Self,
        other_offset: Vec2,
        ignore_exist_flag: bool,
    ) -> bool {
        self.translated(offset)
            .is_hit_circle(&other.translated(other_offset), ignore_exist_flag)
    }

    /// Circle-box overlap; same answer as [`Box2D::is_hit_circle`]
    pub fn is_hit_box(&self, rect: &Box2D, ignore_exist_flag: bool) -> bool {
        rect.is_hit_circle(self, ignore_exist_flag)
    }

    /// [`Self::is_hit_box`] with the circle and box moved by their offsets
    pub fn is_hit_box_offset(
        &self,
        offset: Vec2,
        rect: &Box2D,
        rect_offset: Vec2,
        ignore_exist_flag: bool,
    ) -> bool {
        rect.is_hit_circle_offset(rect_offset, self, offset, ignore_exist_flag)
    }
}

impl PartialEq for Circle {
    fn eq(&self, other: &Self) -> bool {
        nearly_equal_vec2(&self.pos, &other.pos)
            && nearly_equal(self.radius, other.radius)
            && self.exists == other.exists
    }
}
