/*!
# Cull3D Engine

Camera and view-frustum culling core for a small real-time 3D viewer.

A free-fly `Camera` produces view and projection matrices; a `Frustum`
extracts six normalized clipping planes from their product and answers
visibility queries for points, spheres and axis-aligned boxes. The scene
layer applies those queries per instance so that only visible objects
reach the render backend.

## Architecture

- **Camera**: free-fly camera (yaw/pitch, keyboard, mouse, zoom)
- **Frustum**: plane extraction, corner recovery, containment tests
- **Scene**: render instances with bounding volumes and culling policy
- **CameraCuller / Drawer**: per-frame culling and drawing strategies
- **RenderBackend**: graphics capability supplied by the caller
- **RenderSession**: explicit per-window context driving the frame
*/

// Internal modules
mod error;
mod engine;
pub mod log;
pub mod camera;
pub mod renderer;
pub mod scene;
pub mod session;

// Main cull3d namespace module
pub mod cull3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Engine logging hub
    pub use crate::engine::Engine;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Camera sub-module
    pub mod camera {
        pub use crate::camera::*;
    }

    // Render sub-module
    pub mod render {
        pub use crate::renderer::*;
    }

    // Scene sub-module
    pub mod scene {
        pub use crate::scene::*;
    }

    // Session types
    pub use crate::session::{CullingMode, FrameInput, FrameStats, RenderSession, SessionConfig};
}

// Re-export math library at crate root
pub use glam;
