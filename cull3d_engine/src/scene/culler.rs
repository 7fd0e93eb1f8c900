/// Camera culling strategies.
///
/// A CameraCuller determines which RenderInstances are visible through a
/// frustum. Instances with FLAG_VISIBLE cleared are never returned.

use crate::camera::{Frustum, RenderView};
use super::scene::Scene;
use super::render_instance::RenderInstanceKey;

/// Strategy for determining visible instances.
///
/// Called once per frame, after `Frustum::update` and before drawing.
/// The returned RenderView is ephemeral and consumed by a Drawer.
///
/// `&mut self` allows stateful implementations (e.g. caching)
/// to maintain state across frames.
pub trait CameraCuller: Send + Sync {
    /// Cull the scene against the frustum and return visible instances.
    fn cull(&mut self, scene: &Scene, frustum: &Frustum) -> RenderView;
}

/// Brute-force culler. Returns every enabled instance (no frustum test).
///
/// Baseline for comparison, or for debugging culling artifacts.
#[derive(Debug, Default)]
pub struct BruteForceCuller;

impl BruteForceCuller {
    pub fn new() -> Self {
        Self
    }
}

impl CameraCuller for BruteForceCuller {
    fn cull(&mut self, scene: &Scene, frustum: &Frustum) -> RenderView {
        let visible: Vec<RenderInstanceKey> = scene.render_instances()
            .filter(|(_, instance)| instance.is_visible())
            .map(|(key, _)| key)
            .collect();
        RenderView::new(*frustum, visible)
    }
}

/// Frustum culler. Tests each instance's world bounds against the frustum.
///
/// The volume tested (sphere or AABB) follows the instance's CullPolicy.
#[derive(Debug, Default)]
pub struct FrustumCuller;

impl FrustumCuller {
    pub fn new() -> Self {
        Self
    }
}

impl CameraCuller for FrustumCuller {
    fn cull(&mut self, scene: &Scene, frustum: &Frustum) -> RenderView {
        let visible: Vec<RenderInstanceKey> = scene.render_instances()
            .filter_map(|(key, instance)| {
                if instance.is_visible() && instance.world_bounds().is_visible_in(frustum) {
                    Some(key)
                } else {
                    None
                }
            })
            .collect();
        RenderView::new(*frustum, visible)
    }
}

#[cfg(test)]
#[path = "culler_tests.rs"]
mod tests;
