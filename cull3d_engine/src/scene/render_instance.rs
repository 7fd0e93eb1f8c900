/// Render instance types for the scene system.
///
/// A RenderInstance is one drawable entity: its world transform, its
/// local-space bounds, and the bounding-volume policy the culler applies
/// to it.

use glam::{Mat4, Vec2, Vec3};
use slotmap::new_key_type;
use super::bounds::{AABB, BoundingVolume};

// ===== SLOT MAP KEY =====

new_key_type! {
    /// Stable key for a RenderInstance within a Scene.
    ///
    /// Keys remain valid even after other instances are removed.
    /// A key becomes invalid only when its own instance is removed.
    pub struct RenderInstanceKey;
}

// ===== FLAGS =====

/// Render instance flags (bitfield)
pub const FLAG_VISIBLE: u64 = 1 << 0;
// Bits 1-63 reserved

/// Vertex count of the unit cube (12 triangles, non-indexed).
pub const CUBE_VERTEX_COUNT: u32 = 36;

// ===== CULLING POLICY =====

/// Category of scene entity. Decides which bounding volume is tested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// Grid cubes: compact, roughly isotropic
    Cube,
    /// Imported models: elongated, arbitrary proportions
    Model,
}

/// Which bounding volume the culler tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CullPolicy {
    Sphere,
    Aabb,
}

impl CullPolicy {
    /// One policy per entity kind: spheres for cubes, boxes for models.
    pub fn for_kind(kind: EntityKind) -> Self {
        match kind {
            EntityKind::Cube => CullPolicy::Sphere,
            EntityKind::Model => CullPolicy::Aabb,
        }
    }
}

// ===== RENDER INSTANCE =====

/// A drawable entity in a Scene.
#[derive(Debug, Clone)]
pub struct RenderInstance {
    kind: EntityKind,
    world_matrix: Mat4,
    local_bounds: AABB,
    vertex_count: u32,
    color: Vec3,
    grid_position: Vec2,
    flags: u64,
}

impl RenderInstance {
    /// Unit cube scaled by `size` and centered on `position`.
    pub fn cube(position: Vec3, size: f32) -> Self {
        Self {
            kind: EntityKind::Cube,
            world_matrix: Mat4::from_translation(position) * Mat4::from_scale(Vec3::splat(size)),
            local_bounds: AABB::from_center_half_extents(Vec3::ZERO, Vec3::splat(0.5)),
            vertex_count: CUBE_VERTEX_COUNT,
            color: Vec3::ONE,
            grid_position: Vec2::ZERO,
            flags: FLAG_VISIBLE,
        }
    }

    /// Model with precomputed local bounds (e.g. `AABB::from_points` over
    /// its vertices).
    pub fn model(local_bounds: AABB, world_matrix: Mat4, vertex_count: u32) -> Self {
        Self {
            kind: EntityKind::Model,
            world_matrix,
            local_bounds,
            vertex_count,
            color: Vec3::ONE,
            grid_position: Vec2::ZERO,
            flags: FLAG_VISIBLE,
        }
    }

    /// Builder: set the grid position passed to the shader.
    pub fn with_grid_position(mut self, grid_position: Vec2) -> Self {
        self.grid_position = grid_position;
        self
    }

    /// Builder: set the tint color.
    pub fn with_color(mut self, color: Vec3) -> Self {
        self.color = color;
        self
    }

    // ===== ACCESSORS =====

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn cull_policy(&self) -> CullPolicy {
        CullPolicy::for_kind(self.kind)
    }

    pub fn world_matrix(&self) -> &Mat4 {
        &self.world_matrix
    }

    pub fn set_world_matrix(&mut self, matrix: Mat4) {
        self.world_matrix = matrix;
    }

    /// Bounds in local space.
    pub fn bounding_box(&self) -> &AABB {
        &self.local_bounds
    }

    /// World-space volume chosen by `cull_policy()`.
    pub fn world_bounds(&self) -> BoundingVolume {
        match self.cull_policy() {
            CullPolicy::Sphere => BoundingVolume::Sphere(
                self.local_bounds.bounding_sphere().transformed(&self.world_matrix),
            ),
            CullPolicy::Aabb => BoundingVolume::Aabb(
                self.local_bounds.transformed(&self.world_matrix),
            ),
        }
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    pub fn color(&self) -> Vec3 {
        self.color
    }

    pub fn grid_position(&self) -> Vec2 {
        self.grid_position
    }

    pub fn flags(&self) -> u64 {
        self.flags
    }

    pub fn set_flags(&mut self, flags: u64) {
        self.flags = flags;
    }

    /// Toggle FLAG_VISIBLE, preserving other bits.
    pub fn set_visible(&mut self, visible: bool) {
        if visible {
            self.flags |= FLAG_VISIBLE;
        } else {
            self.flags &= !FLAG_VISIBLE;
        }
    }

    pub fn is_visible(&self) -> bool {
        self.flags & FLAG_VISIBLE != 0
    }
}

#[cfg(test)]
#[path = "render_instance_tests.rs"]
mod tests;
