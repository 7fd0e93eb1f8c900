/// Input translation for the free-fly camera.
///
/// Maps raw key presses to movement directions and absolute cursor
/// positions to the per-event offsets `Camera::process_mouse_movement`
/// expects.

use glam::Vec2;

/// Direction for `Camera::process_keyboard`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CameraMovement {
    Forward,
    Backward,
    Left,
    Right,
}

impl CameraMovement {
    /// WASD mapping. Any other key yields `None` (no movement).
    pub fn from_key(key: char) -> Option<Self> {
        match key.to_ascii_uppercase() {
            'W' => Some(CameraMovement::Forward),
            'S' => Some(CameraMovement::Backward),
            'A' => Some(CameraMovement::Left),
            'D' => Some(CameraMovement::Right),
            _ => None,
        }
    }
}

/// Turns absolute cursor positions into look offsets.
///
/// The first sample only primes the tracker, so the camera does not jump
/// when the cursor is captured. Y is inverted: moving the cursor up the
/// screen yields a positive pitch offset.
#[derive(Debug, Clone, Copy, Default)]
pub struct MouseTracker {
    last: Option<Vec2>,
}

impl MouseTracker {
    pub fn new() -> Self {
        Self { last: None }
    }

    /// Prime with a known position (e.g. the window center).
    pub fn with_position(position: Vec2) -> Self {
        Self { last: Some(position) }
    }

    /// Feed a cursor position, returning `(xoffset, yoffset)`.
    pub fn offset(&mut self, position: Vec2) -> (f32, f32) {
        let last = self.last.replace(position).unwrap_or(position);
        (position.x - last.x, last.y - position.y)
    }

    /// Forget the last position (e.g. after the cursor is released).
    pub fn reset(&mut self) {
        self.last = None;
    }
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod tests;
