use glam::{Mat4, Vec3};
use crate::camera::{Camera, CameraConfig, Frustum};
use crate::scene::{AABB, CubeGridConfig, RenderInstance, Scene};
use super::*;

fn default_frustum() -> Frustum {
    let camera = Camera::from_config(&CameraConfig::default());
    let mut frustum = Frustum::default();
    frustum.update(&camera.view_matrix(), &camera.projection_matrix(16.0 / 9.0));
    frustum
}

// ============================================================================
// BruteForceCuller
// ============================================================================

#[test]
fn test_brute_force_returns_all_enabled() {
    let mut scene = Scene::new();
    let keys = scene.populate_cube_grid(&CubeGridConfig::default());
    let far = scene.add_render_instance(RenderInstance::cube(Vec3::new(0.0, 0.0, 9000.0), 1.0));
    scene.render_instance_mut(keys[0]).unwrap().set_visible(false);

    let view = BruteForceCuller::new().cull(&scene, &default_frustum());

    assert_eq!(view.visible_count(), 121);
    assert!(view.visible_instances().contains(&far));
    assert!(!view.visible_instances().contains(&keys[0]));
}

// ============================================================================
// FrustumCuller
// ============================================================================

#[test]
fn test_frustum_culler_rejects_out_of_view() {
    let mut scene = Scene::new();
    let in_view = scene.add_render_instance(RenderInstance::cube(Vec3::ZERO, 1.0));
    let behind = scene.add_render_instance(RenderInstance::cube(Vec3::new(0.0, 0.0, 6000.0), 1.0));
    let aside = scene.add_render_instance(RenderInstance::cube(Vec3::new(10000.0, 0.0, 0.0), 1.0));

    let view = FrustumCuller::new().cull(&scene, &default_frustum());

    assert_eq!(view.visible_instances(), &[in_view]);
    assert!(!view.visible_instances().contains(&behind));
    assert!(!view.visible_instances().contains(&aside));
}

#[test]
fn test_frustum_culler_tests_models_by_aabb() {
    let mut scene = Scene::new();
    let local = AABB::new(Vec3::new(-1.0, 0.0, -1.0), Vec3::new(1.0, 4.0, 1.0));

    let visible = scene.add_render_instance(RenderInstance::model(local, Mat4::IDENTITY, 6));
    let hidden = scene.add_render_instance(RenderInstance::model(
        local,
        Mat4::from_translation(Vec3::new(0.0, -5000.0, 0.0)),
        6,
    ));

    let view = FrustumCuller::new().cull(&scene, &default_frustum());

    assert!(view.visible_instances().contains(&visible));
    assert!(!view.visible_instances().contains(&hidden));
}

#[test]
fn test_frustum_culler_skips_disabled_instances() {
    let mut scene = Scene::new();
    let key = scene.add_render_instance(RenderInstance::cube(Vec3::ZERO, 1.0));
    scene.render_instance_mut(key).unwrap().set_visible(false);

    let view = FrustumCuller::new().cull(&scene, &default_frustum());
    assert_eq!(view.visible_count(), 0);
}

#[test]
fn test_frustum_culler_with_uninitialized_frustum_keeps_everything() {
    let mut scene = Scene::new();
    scene.populate_cube_grid(&CubeGridConfig::default());
    scene.add_render_instance(RenderInstance::cube(Vec3::splat(1e6), 1.0));

    let view = FrustumCuller::new().cull(&scene, &Frustum::default());
    assert_eq!(view.visible_count(), scene.len());
}

#[test]
fn test_frustum_culler_subset_of_brute_force() {
    let mut scene = Scene::new();
    scene.populate_cube_grid(&CubeGridConfig { half_extent: 20, spacing: 3.0, cube_size: 1.0 });

    let mut camera = Camera::from_config(&CameraConfig::default());
    camera.set_orientation(-45.0, -10.0);
    let mut frustum = Frustum::default();
    frustum.update(&camera.view_matrix(), &camera.projection_matrix(2.0));

    let culled = FrustumCuller::new().cull(&scene, &frustum);
    let all = BruteForceCuller::new().cull(&scene, &frustum);

    assert!(culled.visible_count() > 0);
    assert!(culled.visible_count() < all.visible_count());
    for key in culled.visible_instances() {
        assert!(all.visible_instances().contains(key));
    }
}
