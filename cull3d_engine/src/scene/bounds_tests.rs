use glam::{Mat4, Quat, Vec3};
use crate::camera::Frustum;
use super::*;

fn assert_vec3_near(actual: Vec3, expected: Vec3) {
    assert!(
        (actual - expected).length() < 1e-4,
        "expected {:?}, got {:?}",
        expected,
        actual
    );
}

// ============================================================================
// AABB construction
// ============================================================================

#[test]
fn test_from_points() {
    let points = [
        Vec3::new(1.0, -2.0, 3.0),
        Vec3::new(-4.0, 5.0, 0.5),
        Vec3::new(0.0, 0.0, -6.0),
    ];
    let aabb = AABB::from_points(&points).unwrap();

    assert_eq!(aabb.min, Vec3::new(-4.0, -2.0, -6.0));
    assert_eq!(aabb.max, Vec3::new(1.0, 5.0, 3.0));
}

#[test]
fn test_from_points_single_and_empty() {
    let single = AABB::from_points(&[Vec3::ONE]).unwrap();
    assert_eq!(single.min, Vec3::ONE);
    assert_eq!(single.max, Vec3::ONE);

    assert!(AABB::from_points(&[]).is_none());
}

#[test]
fn test_center_extents_corners() {
    let aabb = AABB::from_center_half_extents(Vec3::new(1.0, 2.0, 3.0), Vec3::new(0.5, 1.0, 2.0));

    assert_eq!(aabb.center(), Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(aabb.extents(), Vec3::new(0.5, 1.0, 2.0));

    let corners = aabb.corners();
    assert_eq!(corners[0], aabb.min);
    assert_eq!(corners[7], aabb.max);
    for corner in corners {
        assert!(aabb.contains(&AABB::new(corner, corner)));
    }
}

// ============================================================================
// AABB transform
// ============================================================================

#[test]
fn test_transformed_translation_and_scale() {
    let aabb = AABB::new(Vec3::splat(-0.5), Vec3::splat(0.5));
    let matrix = Mat4::from_translation(Vec3::new(10.0, 0.0, -2.0)) * Mat4::from_scale(Vec3::splat(2.0));

    let moved = aabb.transformed(&matrix);
    assert_vec3_near(moved.min, Vec3::new(9.0, -1.0, -3.0));
    assert_vec3_near(moved.max, Vec3::new(11.0, 1.0, -1.0));
}

#[test]
fn test_transformed_matches_corner_transform() {
    let aabb = AABB::new(Vec3::new(-1.0, 0.0, -2.0), Vec3::new(3.0, 1.0, 2.0));
    let matrix = Mat4::from_scale_rotation_translation(
        Vec3::splat(0.025),
        Quat::from_rotation_x((-90.0f32).to_radians()),
        Vec3::new(0.0, 1.0, 0.0),
    );

    // Reference: transform every corner and take min/max
    let corners: Vec<Vec3> = aabb.corners().iter().map(|c| matrix.transform_point3(*c)).collect();
    let expected = AABB::from_points(&corners).unwrap();

    let actual = aabb.transformed(&matrix);
    assert_vec3_near(actual.min, expected.min);
    assert_vec3_near(actual.max, expected.max);
}

// ============================================================================
// AABB predicates
// ============================================================================

#[test]
fn test_contains_and_intersects() {
    let outer = AABB::new(Vec3::splat(-2.0), Vec3::splat(2.0));
    let inner = AABB::new(Vec3::splat(-1.0), Vec3::splat(1.0));
    let touching = AABB::new(Vec3::new(2.0, -1.0, -1.0), Vec3::new(3.0, 1.0, 1.0));
    let apart = AABB::new(Vec3::splat(5.0), Vec3::splat(6.0));

    assert!(outer.contains(&inner));
    assert!(!inner.contains(&outer));
    assert!(outer.intersects(&touching));
    assert!(!outer.intersects(&apart));
}

#[test]
fn test_bounding_sphere_encloses_corners() {
    let aabb = AABB::new(Vec3::new(-1.0, -2.0, -3.0), Vec3::new(1.0, 2.0, 3.0));
    let sphere = aabb.bounding_sphere();

    assert_eq!(sphere.center, Vec3::ZERO);
    for corner in aabb.corners() {
        assert!(corner.distance(sphere.center) <= sphere.radius + 1e-5);
    }
}

// ============================================================================
// Sphere transform
// ============================================================================

#[test]
fn test_sphere_transformed_uses_largest_scale() {
    let sphere = BoundingSphere::new(Vec3::X, 1.0);
    let matrix = Mat4::from_translation(Vec3::new(0.0, 5.0, 0.0)) * Mat4::from_scale(Vec3::new(1.0, 3.0, 2.0));

    let moved = sphere.transformed(&matrix);
    assert_vec3_near(moved.center, Vec3::new(1.0, 5.0, 0.0));
    assert!((moved.radius - 3.0).abs() < 1e-5);
}

// ============================================================================
// BoundingVolume
// ============================================================================

#[test]
fn test_bounding_volume_dispatch() {
    let frustum = Frustum::from_view_projection(&Mat4::IDENTITY);

    let near_sphere = BoundingVolume::Sphere(BoundingSphere::new(Vec3::new(1.5, 0.0, 0.0), 0.6));
    let far_sphere = BoundingVolume::Sphere(BoundingSphere::new(Vec3::new(1.5, 0.0, 0.0), 0.4));
    let straddling_box = BoundingVolume::Aabb(AABB::new(Vec3::new(0.5, 0.0, 0.0), Vec3::new(1.5, 0.5, 0.5)));
    let outside_box = BoundingVolume::Aabb(AABB::new(Vec3::new(1.1, 0.0, 0.0), Vec3::new(1.5, 0.5, 0.5)));

    assert!(near_sphere.is_visible_in(&frustum));
    assert!(!far_sphere.is_visible_in(&frustum));
    assert!(straddling_box.is_visible_in(&frustum));
    assert!(!outside_box.is_visible_in(&frustum));
}
