/// Scene: a collection of RenderInstances for culling and drawing.
///
/// Uses a SlotMap for O(1) insert/remove with stable keys.
/// Instances are stored contiguously for cache-friendly iteration.

use glam::{Vec2, Vec3};
use slotmap::SlotMap;
use super::render_instance::{RenderInstance, RenderInstanceKey};

/// Largest accepted `CubeGridConfig::half_extent` (2001 x 2001 cubes).
pub const MAX_GRID_HALF_EXTENT: i32 = 1000;

/// Layout of the demo cube grid.
#[derive(Debug, Clone, Copy)]
pub struct CubeGridConfig {
    /// Cubes span `-half_extent..=half_extent` on X and Z
    pub half_extent: i32,
    /// Distance between neighbouring cube centers
    pub spacing: f32,
    /// Edge length of each cube
    pub cube_size: f32,
}

impl Default for CubeGridConfig {
    fn default() -> Self {
        Self {
            half_extent: 5,
            spacing: 2.0,
            cube_size: 1.0,
        }
    }
}

impl CubeGridConfig {
    /// `half_extent` clamped to `[-1, MAX_GRID_HALF_EXTENT]`; -1 means no cubes.
    pub fn effective_half_extent(&self) -> i32 {
        self.half_extent.clamp(-1, MAX_GRID_HALF_EXTENT)
    }

    /// Number of cubes the grid produces.
    pub fn cube_count(&self) -> usize {
        let n = self.effective_half_extent();
        if n < 0 {
            return 0;
        }
        let side = (2 * n + 1) as usize;
        side * side
    }
}

/// A renderable scene containing RenderInstances.
///
/// Instances are managed via stable keys (RenderInstanceKey).
/// Keys remain valid even after other instances are removed.
#[derive(Debug, Default)]
pub struct Scene {
    render_instances: SlotMap<RenderInstanceKey, RenderInstance>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            render_instances: SlotMap::with_key(),
        }
    }

    /// Add an instance, returning its key.
    pub fn add_render_instance(&mut self, instance: RenderInstance) -> RenderInstanceKey {
        self.render_instances.insert(instance)
    }

    /// Remove an instance. Returns `false` if the key was stale.
    pub fn remove_render_instance(&mut self, key: RenderInstanceKey) -> bool {
        self.render_instances.remove(key).is_some()
    }

    pub fn render_instance(&self, key: RenderInstanceKey) -> Option<&RenderInstance> {
        self.render_instances.get(key)
    }

    pub fn render_instance_mut(&mut self, key: RenderInstanceKey) -> Option<&mut RenderInstance> {
        self.render_instances.get_mut(key)
    }

    /// Iterate over all render instance keys.
    pub fn render_instance_keys(&self) -> impl Iterator<Item = RenderInstanceKey> + '_ {
        self.render_instances.keys()
    }

    /// Iterate over all (key, instance) pairs.
    pub fn render_instances(&self) -> impl Iterator<Item = (RenderInstanceKey, &RenderInstance)> + '_ {
        self.render_instances.iter()
    }

    pub fn len(&self) -> usize {
        self.render_instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.render_instances.is_empty()
    }

    /// Remove all instances. Outstanding keys become stale.
    pub fn clear(&mut self) {
        self.render_instances.clear();
    }

    /// Lay out a square grid of cubes on the XZ plane.
    ///
    /// Cube (i, j) sits at `(i * spacing, 0, j * spacing)` with grid
    /// position `(i + n, j + n)`, for i, j in `-n..=n`. `n` is capped at
    /// `MAX_GRID_HALF_EXTENT`.
    pub fn populate_cube_grid(&mut self, config: &CubeGridConfig) -> Vec<RenderInstanceKey> {
        let n = config.effective_half_extent();
        let mut keys = Vec::with_capacity(config.cube_count());

        for i in -n..=n {
            for j in -n..=n {
                let position = Vec3::new(i as f32 * config.spacing, 0.0, j as f32 * config.spacing);
                let cube = RenderInstance::cube(position, config.cube_size)
                    .with_grid_position(Vec2::new((i + n) as f32, (j + n) as f32));
                keys.push(self.add_render_instance(cube));
            }
        }

        keys
    }
}

#[cfg(test)]
#[path = "scene_tests.rs"]
mod tests;
