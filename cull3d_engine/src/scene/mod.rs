//! Scene management module
//!
//! Provides bounding volumes, render instances, the scene container, and
//! the per-frame strategies that consume it (culling, drawing).

mod bounds;
mod render_instance;
mod scene;
mod culler;
mod drawer;

pub use bounds::{AABB, BoundingSphere, BoundingVolume};
pub use render_instance::{
    RenderInstance, RenderInstanceKey, EntityKind, CullPolicy,
    FLAG_VISIBLE, CUBE_VERTEX_COUNT,
};
pub use scene::{Scene, CubeGridConfig, MAX_GRID_HALF_EXTENT};
pub use culler::{CameraCuller, BruteForceCuller, FrustumCuller};
pub use drawer::{Drawer, ForwardDrawer};
