/// Camera: free-fly camera driven by yaw/pitch.
///
/// Owns the pose (position + Euler angles) and derives the orthonormal
/// basis, view matrix, and projection matrix from it. Mutated in place by
/// keyboard/mouse/scroll handlers, read once per frame by the session.
///
/// Conventions: right-handed, +Y up by default, OpenGL clip depth
/// (z in [-w, w]). Angles are stored in degrees.

use glam::{Mat4, Vec3};
use super::input::CameraMovement;

/// Pitch limit applied when `constrain_pitch` is set (degrees).
pub const PITCH_LIMIT: f32 = 89.0;
/// Narrowest field of view reachable by scrolling (degrees).
pub const MIN_FOV: f32 = 1.0;
/// Widest field of view reachable by scrolling (degrees).
pub const MAX_FOV: f32 = 45.0;
/// Near clip distance.
pub const NEAR_PLANE: f32 = 0.1;
/// Far clip distance.
pub const FAR_PLANE: f32 = 5000.0;

/// Initial camera pose and tuning.
#[derive(Debug, Clone, Copy)]
pub struct CameraConfig {
    /// World-space start position
    pub position: Vec3,
    /// Fixed reference up vector used to derive `right`
    pub world_up: Vec3,
    /// Yaw in degrees (-90 looks down -Z)
    pub yaw: f32,
    /// Pitch in degrees
    pub pitch: f32,
    /// Movement speed in units per second
    pub speed: f32,
    /// Mouse sensitivity (degrees per pixel)
    pub sensitivity: f32,
    /// Vertical field of view in degrees
    pub fov: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 10.0),
            world_up: Vec3::Y,
            yaw: -90.0,
            pitch: 0.0,
            speed: 6.0,
            sensitivity: 0.1,
            fov: 45.0,
        }
    }
}

/// Free-fly camera.
///
/// `front`, `right` and `up` are always recomputed together from yaw and
/// pitch, never individually.
#[derive(Debug, Clone)]
pub struct Camera {
    position: Vec3,
    front: Vec3,
    up: Vec3,
    right: Vec3,
    world_up: Vec3,
    yaw: f32,
    pitch: f32,
    speed: f32,
    sensitivity: f32,
    fov: f32,
}

impl Camera {
    /// Create a camera and derive its basis from `yaw`/`pitch`.
    pub fn new(
        position: Vec3,
        world_up: Vec3,
        yaw: f32,
        pitch: f32,
        speed: f32,
        sensitivity: f32,
        fov: f32,
    ) -> Self {
        let mut camera = Self {
            position,
            front: Vec3::NEG_Z,
            up: world_up,
            right: Vec3::X,
            world_up,
            yaw,
            pitch,
            speed,
            sensitivity,
            fov,
        };
        camera.update_camera_vectors();
        camera
    }

    /// Create a camera from a config.
    pub fn from_config(config: &CameraConfig) -> Self {
        Self::new(
            config.position,
            config.world_up,
            config.yaw,
            config.pitch,
            config.speed,
            config.sensitivity,
            config.fov,
        )
    }

    // ===== MATRICES =====

    /// Look-at view matrix from `position` toward `position + front`.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    /// Perspective projection with vertical FOV `fov`, near 0.1, far 5000.
    ///
    /// `aspect_ratio` must be positive.
    pub fn projection_matrix(&self, aspect_ratio: f32) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov.to_radians(), aspect_ratio, NEAR_PLANE, FAR_PLANE)
    }

    // ===== INPUT HANDLERS =====

    /// Translate along `front`/`right` by `speed * delta_time`.
    pub fn process_keyboard(&mut self, direction: CameraMovement, delta_time: f32) {
        let velocity = self.speed * delta_time;
        match direction {
            CameraMovement::Forward => self.position += self.front * velocity,
            CameraMovement::Backward => self.position -= self.front * velocity,
            CameraMovement::Left => self.position -= self.right * velocity,
            CameraMovement::Right => self.position += self.right * velocity,
        }
    }

    /// Accumulate mouse offsets into yaw/pitch and rebuild the basis.
    pub fn process_mouse_movement(&mut self, xoffset: f32, yoffset: f32, constrain_pitch: bool) {
        self.yaw += xoffset * self.sensitivity;
        self.pitch += yoffset * self.sensitivity;

        if constrain_pitch {
            self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        }

        self.update_camera_vectors();
    }

    /// Zoom: narrow the FOV by `yoffset`, clamped to [1, 45].
    pub fn process_mouse_scroll(&mut self, yoffset: f32) {
        self.fov = (self.fov - yoffset).clamp(MIN_FOV, MAX_FOV);
    }

    // ===== GETTERS =====

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn front(&self) -> Vec3 {
        self.front
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn world_up(&self) -> Vec3 {
        self.world_up
    }

    /// Yaw in degrees.
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Pitch in degrees.
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn sensitivity(&self) -> f32 {
        self.sensitivity
    }

    /// Vertical field of view in degrees.
    pub fn fov(&self) -> f32 {
        self.fov
    }

    // ===== SETTERS =====

    /// Teleport the camera. Orientation is unchanged.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Set yaw/pitch directly (no clamping) and rebuild the basis.
    pub fn set_orientation(&mut self, yaw: f32, pitch: f32) {
        self.yaw = yaw;
        self.pitch = pitch;
        self.update_camera_vectors();
    }

    // front first, then right from front x world_up, then up from right x front.
    // Degenerate when front is parallel to world_up (pitch = +-90).
    fn update_camera_vectors(&mut self) {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        let front = Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        );
        self.front = front.normalize();
        self.right = self.front.cross(self.world_up).normalize();
        self.up = self.right.cross(self.front).normalize();
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
