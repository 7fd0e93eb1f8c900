//! Renderer module - backend capability interface and a headless backend

mod backend;
mod recording_backend;
pub mod shaders;

pub use backend::{DrawCall, ProgramHandle, RenderBackend, ShaderSource, UniformValue};
pub use recording_backend::{RecordedDraw, RecordingBackend};
