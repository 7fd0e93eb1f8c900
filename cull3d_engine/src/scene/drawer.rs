/// Drawing strategies.
///
/// A Drawer renders visible instances from a RenderView through a
/// RenderBackend. Frame-wide uniforms (view, projection, time) are set by
/// the caller; the drawer only sets per-instance state.

use crate::error::Result;
use crate::renderer::{DrawCall, RenderBackend, UniformValue};
use crate::renderer::shaders::{UNIFORM_COLOR, UNIFORM_GRID_POSITION, UNIFORM_MODEL};
use crate::camera::RenderView;
use super::scene::Scene;

/// Strategy for drawing visible instances.
///
/// Called with the instance program already bound. The Drawer reads from
/// the Scene (immutably) and issues one or more draws per instance.
///
/// `&self` because drawing is stateless; the same Drawer can be
/// reused across multiple scenes and frames.
pub trait Drawer: Send + Sync {
    /// Draw visible instances from the RenderView. Returns the number of draws issued.
    fn draw(&self, scene: &Scene, view: &RenderView, backend: &mut dyn RenderBackend) -> Result<u32>;
}

/// Forward drawer. Draws each instance sequentially (no sorting, no instancing).
#[derive(Debug, Default)]
pub struct ForwardDrawer;

impl ForwardDrawer {
    pub fn new() -> Self {
        Self
    }
}

impl Drawer for ForwardDrawer {
    fn draw(&self, scene: &Scene, view: &RenderView, backend: &mut dyn RenderBackend) -> Result<u32> {
        let mut draw_calls = 0;

        for &key in view.visible_instances() {
            let instance = match scene.render_instance(key) {
                Some(inst) => inst,
                None => continue, // removed between cull and draw
            };

            if instance.vertex_count() == 0 {
                continue;
            }

            backend.set_uniform(UNIFORM_MODEL, UniformValue::Mat4(*instance.world_matrix()))?;
            backend.set_uniform(UNIFORM_GRID_POSITION, UniformValue::Vec2(instance.grid_position()))?;
            backend.set_uniform(UNIFORM_COLOR, UniformValue::Vec3(instance.color()))?;
            backend.draw(&DrawCall::triangles(instance.vertex_count()))?;
            draw_calls += 1;
        }

        Ok(draw_calls)
    }
}

#[cfg(test)]
#[path = "drawer_tests.rs"]
mod tests;
