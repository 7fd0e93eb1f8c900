/// RenderView: result of frustum culling.
///
/// Created by a `CameraCuller`. Holds the frustum the instances were
/// tested against and the keys that survived.
///
/// Lives for one frame. No Arc, no Mutex.

use crate::scene::RenderInstanceKey;
use super::frustum::Frustum;

/// Result of frustum culling. Lives for one frame.
#[derive(Debug, Clone)]
pub struct RenderView {
    frustum: Frustum,
    visible_instances: Vec<RenderInstanceKey>,
}

impl RenderView {
    /// Create a new RenderView (crate-internal: only cullers create these).
    pub(crate) fn new(frustum: Frustum, visible_instances: Vec<RenderInstanceKey>) -> Self {
        Self {
            frustum,
            visible_instances,
        }
    }

    /// Frustum snapshot at the time of culling.
    pub fn frustum(&self) -> &Frustum {
        &self.frustum
    }

    /// Keys of visible RenderInstances in the Scene.
    pub fn visible_instances(&self) -> &[RenderInstanceKey] {
        &self.visible_instances
    }

    /// Number of visible instances.
    pub fn visible_count(&self) -> usize {
        self.visible_instances.len()
    }
}

#[cfg(test)]
#[path = "render_view_tests.rs"]
mod tests;
