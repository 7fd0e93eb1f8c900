/// RenderBackend: capability interface to the graphics API.
///
/// The engine never talks to a graphics API directly. A backend compiles
/// programs, binds them, accepts named uniforms, and issues draws; the
/// caller supplies the implementation (OpenGL, Vulkan, or a headless
/// recorder).

use glam::{Mat4, Vec2, Vec3};
use crate::error::Result;

/// Opaque handle to a compiled program, issued by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProgramHandle(pub u32);

/// Vertex + fragment source for one program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderSource {
    /// Debug name
    pub name: String,
    pub vertex: String,
    pub fragment: String,
}

impl ShaderSource {
    pub fn new(name: impl Into<String>, vertex: impl Into<String>, fragment: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            vertex: vertex.into(),
            fragment: fragment.into(),
        }
    }
}

/// Value for `RenderBackend::set_uniform`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UniformValue {
    Int(i32),
    Float(f32),
    Vec2(Vec2),
    Vec3(Vec3),
    Mat4(Mat4),
}

/// One non-indexed triangle-list draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawCall {
    pub first_vertex: u32,
    pub vertex_count: u32,
}

impl DrawCall {
    /// Draw `vertex_count` vertices from the start of the bound geometry.
    pub fn triangles(vertex_count: u32) -> Self {
        Self { first_vertex: 0, vertex_count }
    }
}

/// Graphics capability supplied by the caller.
///
/// Uniforms apply to the currently bound program.
pub trait RenderBackend: Send {
    /// Compile and link a program.
    fn compile_program(&mut self, source: &ShaderSource) -> Result<ProgramHandle>;

    /// Make `program` current.
    fn bind_program(&mut self, program: ProgramHandle) -> Result<()>;

    /// Set a uniform on the bound program.
    fn set_uniform(&mut self, name: &str, value: UniformValue) -> Result<()>;

    /// Issue a draw with the bound program.
    fn draw(&mut self, call: &DrawCall) -> Result<()>;

    /// Called once at the start of every frame, before any draw.
    fn begin_frame(&mut self) -> Result<()> {
        Ok(())
    }
}
