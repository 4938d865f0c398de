//! Generic access to the pairwise tests
//!
//! [`Collide`] exposes every supported ordered pair behind one method name so
//! callers and tests can be written once over any pair. [`Collider2D`] and
//! [`Collider3D`] are closed unions for places that store mixed shapes, such
//! as scenario files; their dispatch is a fixed `match` over the pair table.

use serde::{Deserialize, Serialize};

use super::oriented::OBB;
use super::planar::{Box2D, Circle};
use super::volumes::{Sphere, AABB};
use crate::foundation::math::{Vec2, Vec3};

/// Pairwise hit test between `Self` and `Rhs`
pub trait Collide<Rhs: ?Sized = Self> {
    /// Hit test; when `ignore_exist_flag` is false a non-existing operand never hits
    fn is_hit(&self, other: &Rhs, ignore_exist_flag: bool) -> bool;

    /// Hit test honoring both exists flags
    fn intersects(&self, other: &Rhs) -> bool {
        self.is_hit(other, false)
    }
}

macro_rules! impl_collide {
    ($lhs:ty, $rhs:ty, $method:ident) => {
        impl Collide<$rhs> for $lhs {
            #[inline]
            fn is_hit(&self, other: &$rhs, ignore_exist_flag: bool) -> bool {
                self.$method(other, ignore_exist_flag)
            }
        }
    };
}

impl_collide!(Box2D, Box2D, is_hit_box);
impl_collide!(Box2D, Circle, is_hit_circle);
impl_collide!(Circle, Circle, is_hit_circle);
impl_collide!(Circle, Box2D, is_hit_box);

impl_collide!(AABB, AABB, is_hit_aabb);
impl_collide!(AABB, Sphere, is_hit_sphere);
impl_collide!(AABB, OBB, is_hit_obb);
impl_collide!(AABB, Vec3, is_hit_point);
impl_collide!(Sphere, Sphere, is_hit_sphere);
impl_collide!(Sphere, AABB, is_hit_aabb);
impl_collide!(Sphere, OBB, is_hit_obb);
impl_collide!(Sphere, Vec3, is_hit_point);
impl_collide!(OBB, OBB, is_hit_obb);
impl_collide!(OBB, Sphere, is_hit_sphere);
impl_collide!(OBB, AABB, is_hit_aabb);

impl Collide<Vec2> for Box2D {
    fn is_hit(&self, point: &Vec2, ignore_exist_flag: bool) -> bool {
        self.is_hit_point(point.x, point.y, ignore_exist_flag)
    }
}

impl Collide<Vec2> for Circle {
    fn is_hit(&self, point: &Vec2, ignore_exist_flag: bool) -> bool {
        self.is_hit_point(point.x, point.y, ignore_exist_flag)
    }
}

/// Any 2D shape
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Collider2D {
    /// Axis-aligned box
    Box(Box2D),
    /// Circle
    Circle(Circle),
}

impl Collider2D {
    /// Exists flag of the wrapped shape
    pub const fn exists(&self) -> bool {
        match self {
            Self::Box(rect) => rect.exists,
            Self::Circle(circle) => circle.exists,
        }
    }

    /// Center of the wrapped shape
    pub fn center(&self) -> Vec2 {
        match self {
            Self::Box(rect) => rect.pos,
            Self::Circle(circle) => circle.pos,
        }
    }

    /// Copy of the wrapped shape moved by `offset`
    #[must_use]
    pub fn translated(&self, offset: Vec2) -> Self {
        match self {
            Self::Box(rect) => Self::Box(rect.translated(offset)),
            Self::Circle(circle) => Self::Circle(circle.translated(offset)),
        }
    }
}

impl Collide for Collider2D {
    fn is_hit(&self, other: &Self, ignore_exist_flag: bool) -> bool {
        match (self, other) {
            (Self::Box(a), Self::Box(b)) => a.is_hit_box(b, ignore_exist_flag),
            (Self::Box(rect), Self::Circle(circle)) => {
                rect.is_hit_circle(circle, ignore_exist_flag)
            }
            (Self::Circle(circle), Self::Box(rect)) => circle.is_hit_box(rect, ignore_exist_flag),
            (Self::Circle(a), Self::Circle(b)) => a.is_hit_circle(b, ignore_exist_flag),
        }
    }
}

impl From<Box2D> for Collider2D {
    fn from(rect: Box2D) -> Self {
        Self::Box(rect)
    }
}

impl From<Circle> for Collider2D {
    fn from(circle: Circle) -> Self {
        Self::Circle(circle)
    }
}

/// Any 3D shape
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Collider3D {
    /// Axis-aligned box
    Aabb(AABB),
    /// Sphere
    Sphere(Sphere),
    /// Oriented box
    Obb(OBB),
}

impl Collider3D {
    /// Exists flag of the wrapped shape
    pub const fn exists(&self) -> bool {
        match self {
            Self::Aabb(aabb) => aabb.exists,
            Self::Sphere(sphere) => sphere.exists,
            Self::Obb(obb) => obb.exists,
        }
    }

    /// Center of the wrapped shape
    pub fn center(&self) -> Vec3 {
        match self {
            Self::Aabb(aabb) => aabb.pos,
            Self::Sphere(sphere) => sphere.pos,
            Self::Obb(obb) => obb.pos,
        }
    }

    /// Copy of the wrapped shape moved by `offset`
    #[must_use]
    pub fn translated(&self, offset: Vec3) -> Self {
        match self {
            Self::Aabb(aabb) => Self::Aabb(aabb.translated(offset)),
            Self::Sphere(sphere) => Self::Sphere(sphere.translated(offset)),
            Self::Obb(obb) => Self::Obb(obb.translated(offset)),
        }
    }
}

impl Collide for Collider3D {
    fn is_hit(&self, other: &Self, ignore_exist_flag: bool) -> bool {
        match (self, other) {
            (Self::Aabb(a), Self::Aabb(b)) => a.is_hit_aabb(b, ignore_exist_flag),
            (Self::Aabb(aabb), Self::Sphere(sphere)) => {
                aabb.is_hit_sphere(sphere, ignore_exist_flag)
            }
            (Self::Aabb(aabb), Self::Obb(obb)) => aabb.is_hit_obb(obb, ignore_exist_flag),

            (Self::Sphere(a), Self::Sphere(b)) => a.is_hit_sphere(b, ignore_exist_flag),
            (Self::Sphere(sphere), Self::Aabb(aabb)) => sphere.is_hit_aabb(aabb, ignore_exist_flag),
            (Self::Sphere(sphere), Self::Obb(obb)) => sphere.is_hit_obb(obb, ignore_exist_flag),

            (Self::Obb(a), Self::Obb(b)) => a.is_hit_obb(b, ignore_exist_flag),
            (Self::Obb(obb), Self::Sphere(sphere)) => obb.is_hit_sphere(sphere, ignore_exist_flag),
            (Self::Obb(obb), Self::Aabb(aabb)) => obb.is_hit_aabb(aabb, ignore_exist_flag),
        }
    }
}

impl From<AABB> for Collider3D {
    fn from(aabb: AABB) -> Self {
        Self::Aabb(aabb)
    }
}

impl From<Sphere> for Collider3D {
    fn from(sphere: Sphere) -> Self {
        Self::Sphere(sphere)
    }
}

impl From<OBB> for Collider3D {
    fn from(obb: OBB) -> Self {
        Self::Obb(obb)
    }
}
