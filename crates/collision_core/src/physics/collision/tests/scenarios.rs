//! Reference cases callers rely on

use approx::assert_relative_eq;

use crate::foundation::math::utils::yaw;
use crate::foundation::math::{Quat, Vec3};
use crate::physics::collision::{calc_intersection_point, Box2D, Circle, Sphere, AABB, OBB};

#[test]
fn test_overlapping_boxes() {
    let a = Box2D::new(0.0, 0.0, 1.0, 1.0, true);
    let b = Box2D::new(1.5, 0.0, 1.0, 1.0, true);

    assert!(a.is_hit_box(&b, false));
}

#[test]
fn test_point_on_circle_rim_misses() {
    let circle = Circle::new(0.0, 0.0, 1.0, true);

    assert!(!circle.is_hit_point(1.0, 0.0, false));
}

#[test]
fn test_ray_along_x_enters_left_face() {
    let aabb = AABB::new(0.0, 0.0, 0.0, 1.0, 1.0, 1.0, true);
    let hit = calc_intersection_point(Vec3::new(-5.0, 0.0, 0.0), Vec3::new(5.0, 0.0, 0.0), &aabb);

    assert!(hit.is_intersect);
    assert_relative_eq!(hit.intersection, Vec3::new(-1.0, 0.0, 0.0), epsilon = 1e-6);
    assert_relative_eq!(hit.normal, Vec3::new(-1.0, 0.0, 0.0));
}

#[test]
fn test_concentric_obbs_with_yaw() {
    let a = OBB::new(Vec3::zeros(), Vec3::repeat(1.0), Quat::identity(), true);
    let b = OBB::new(Vec3::zeros(), Vec3::repeat(1.0), yaw(45.0), true);

    assert!(a.is_hit_obb(&b, false));
}

#[test]
fn test_sphere_short_of_box() {
    let sphere = Sphere::new(0.0, 0.0, 0.0, 1.0, true);
    let aabb = AABB::new(2.0, 0.0, 0.0, 0.5, 0.5, 0.5, true);

    assert!(!aabb.is_hit_sphere(&sphere, false));
    assert!(!sphere.is_hit_aabb(&aabb, false));
}

#[test]
fn test_grounded_ray_below_player() {
    // Typical movement use: a short ray down from the feet against floor tiles
    let floor = AABB::new(0.0, -2.0, 0.0, 4.0, 2.0, 4.0, true);
    let feet = Vec3::new(1.0, 0.05, -1.5);
    let hit = calc_intersection_point(feet, feet - Vec3::new(0.0, 0.1, 0.0), &floor);

    assert!(hit.is_intersect);
    assert_relative_eq!(hit.intersection.y, 0.0, epsilon = 1e-5);
    assert_relative_eq!(hit.normal, Vec3::new(0.0, 1.0, 0.0));
}
