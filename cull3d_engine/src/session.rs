/// RenderSession: explicit per-window render context.
///
/// Owns one Camera, one Frustum and one Scene, and drives the frame order:
/// input → camera → frustum update → culling → draw. Nothing here is
/// global; a program may run several sessions side by side.

use glam::Vec2;
use crate::camera::{Camera, CameraConfig, CameraMovement, Frustum, MouseTracker};
use crate::error::Result;
use crate::renderer::{ProgramHandle, RenderBackend, UniformValue};
use crate::renderer::shaders::{self, UNIFORM_PROJECTION, UNIFORM_TIME, UNIFORM_VIEW};
use crate::scene::{
    BruteForceCuller, CameraCuller, CubeGridConfig, Drawer, ForwardDrawer, FrustumCuller, Scene,
    MAX_GRID_HALF_EXTENT,
};
use crate::{engine_bail, engine_err, engine_info, engine_trace, engine_warn};

/// Whether the session tests instances against the frustum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CullingMode {
    /// Draw only instances whose bounds intersect the frustum
    #[default]
    Frustum,
    /// Draw every enabled instance
    Disabled,
}

/// Session configuration
#[derive(Debug, Clone, Copy)]
pub struct SessionConfig {
    pub camera: CameraConfig,
    /// Viewport width in pixels
    pub width: u32,
    /// Viewport height in pixels
    pub height: u32,
    /// Cube grid placed in the scene at creation
    pub grid: CubeGridConfig,
    pub culling: CullingMode,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            camera: CameraConfig::default(),
            width: 2560,
            height: 1080,
            grid: CubeGridConfig::default(),
            culling: CullingMode::Frustum,
        }
    }
}

/// Input gathered by the windowing layer for one frame.
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    /// Movement keys held this frame
    pub keys: Vec<CameraMovement>,
    /// Absolute cursor position, if the cursor moved
    pub cursor: Option<Vec2>,
    /// Vertical scroll offset (positive zooms in)
    pub scroll: f32,
    /// Seconds since the previous frame
    pub delta_time: f32,
    /// Seconds since the session started
    pub time: f32,
}

/// Per-frame counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameStats {
    pub total_instances: usize,
    pub visible_instances: usize,
    pub draw_calls: u32,
}

impl FrameStats {
    /// Window title reporting the number of objects drawn.
    pub fn title(&self) -> String {
        format!("Frustum Culling - Object Count: {}", self.draw_calls)
    }
}

fn culler_for(mode: CullingMode) -> Box<dyn CameraCuller> {
    match mode {
        CullingMode::Frustum => Box::new(FrustumCuller::new()),
        CullingMode::Disabled => Box::new(BruteForceCuller::new()),
    }
}

/// Per-window render context.
pub struct RenderSession {
    camera: Camera,
    frustum: Frustum,
    scene: Scene,
    mouse: MouseTracker,
    culling: CullingMode,
    culler: Box<dyn CameraCuller>,
    drawer: Box<dyn Drawer>,
    program: ProgramHandle,
    width: u32,
    height: u32,
    frame_count: u64,
}

impl RenderSession {
    /// Create a session: compiles the cube program and lays out the cube grid.
    pub fn new(config: SessionConfig, backend: &mut dyn RenderBackend) -> Result<Self> {
        if config.width == 0 || config.height == 0 {
            engine_bail!(
                "cull3d::RenderSession",
                InvalidParameter,
                "Viewport must be non-zero, got {}x{}",
                config.width,
                config.height
            );
        }

        if config.grid.half_extent > MAX_GRID_HALF_EXTENT {
            engine_bail!(
                "cull3d::RenderSession",
                InvalidParameter,
                "Cube grid half extent {} exceeds {}",
                config.grid.half_extent,
                MAX_GRID_HALF_EXTENT
            );
        }

        let program = backend.compile_program(&shaders::cube_program()).map_err(|e| {
            engine_err!(
                "cull3d::RenderSession",
                InitializationFailed,
                "Cube program compilation failed: {}",
                e
            )
        })?;

        let mut scene = Scene::new();
        if scene.populate_cube_grid(&config.grid).is_empty() {
            engine_warn!("cull3d::RenderSession", "Cube grid config produced no cubes");
        }

        engine_info!(
            "cull3d::RenderSession",
            "Session created: {}x{}, {} instances, culling {:?}",
            config.width,
            config.height,
            scene.len(),
            config.culling
        );

        Ok(Self {
            camera: Camera::from_config(&config.camera),
            frustum: Frustum::default(),
            scene,
            mouse: MouseTracker::new(),
            culling: config.culling,
            culler: culler_for(config.culling),
            drawer: Box::new(ForwardDrawer::new()),
            program,
            width: config.width,
            height: config.height,
            frame_count: 0,
        })
    }

    /// Run one frame and return its counters.
    pub fn frame(&mut self, input: &FrameInput, backend: &mut dyn RenderBackend) -> Result<FrameStats> {
        // Input → camera
        for &movement in &input.keys {
            self.camera.process_keyboard(movement, input.delta_time);
        }
        if let Some(cursor) = input.cursor {
            let (xoffset, yoffset) = self.mouse.offset(cursor);
            self.camera.process_mouse_movement(xoffset, yoffset, true);
        }
        if input.scroll != 0.0 {
            self.camera.process_mouse_scroll(input.scroll);
        }

        // Camera → frustum → visible set
        let view = self.camera.view_matrix();
        let projection = self.camera.projection_matrix(self.aspect_ratio());
        self.frustum.update(&view, &projection);
        let render_view = self.culler.cull(&self.scene, &self.frustum);

        // Draw
        backend.begin_frame()?;
        backend.bind_program(self.program)?;
        backend.set_uniform(UNIFORM_VIEW, UniformValue::Mat4(view))?;
        backend.set_uniform(UNIFORM_PROJECTION, UniformValue::Mat4(projection))?;
        backend.set_uniform(UNIFORM_TIME, UniformValue::Float(input.time))?;
        let draw_calls = self.drawer.draw(&self.scene, &render_view, backend)?;

        self.frame_count += 1;
        let stats = FrameStats {
            total_instances: self.scene.len(),
            visible_instances: render_view.visible_count(),
            draw_calls,
        };

        engine_trace!(
            "cull3d::RenderSession",
            "Frame {}: {}/{} visible, {} draws",
            self.frame_count,
            stats.visible_instances,
            stats.total_instances,
            stats.draw_calls
        );

        Ok(stats)
    }

    /// Change the viewport size. Zero dimensions are rejected.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        if width == 0 || height == 0 {
            engine_bail!(
                "cull3d::RenderSession",
                InvalidParameter,
                "Cannot resize viewport to {}x{}",
                width,
                height
            );
        }
        self.width = width;
        self.height = height;
        engine_info!("cull3d::RenderSession", "Viewport resized to {}x{}", width, height);
        Ok(())
    }

    pub fn set_culling_mode(&mut self, mode: CullingMode) {
        if mode != self.culling {
            self.culling = mode;
            self.culler = culler_for(mode);
            engine_info!("cull3d::RenderSession", "Culling mode set to {:?}", mode);
        }
    }

    /// Forget the last cursor position (cursor released or re-captured).
    pub fn reset_mouse(&mut self) {
        self.mouse.reset();
    }

    pub fn culling_mode(&self) -> CullingMode {
        self.culling
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    /// Frustum from the most recent frame (accepts everything before the first frame).
    pub fn frustum(&self) -> &Frustum {
        &self.frustum
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    pub fn program(&self) -> ProgramHandle {
        self.program
    }

    pub fn viewport(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
