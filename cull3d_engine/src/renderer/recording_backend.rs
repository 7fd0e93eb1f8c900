/// RecordingBackend: headless RenderBackend (no GPU required)
///
/// Validates call order like a real driver would (program bound before
/// uniforms/draws, handles issued by this backend) and records every draw
/// with the uniform state it saw. Used by tests and the headless demo.

use rustc_hash::FxHashMap;
use crate::error::Result;
use crate::{engine_bail, engine_debug};
use super::backend::{DrawCall, ProgramHandle, RenderBackend, ShaderSource, UniformValue};

/// A draw as seen by the backend.
#[derive(Debug, Clone)]
pub struct RecordedDraw {
    pub program: ProgramHandle,
    pub call: DrawCall,
    /// Uniform values of the bound program at draw time
    pub uniforms: FxHashMap<String, UniformValue>,
}

/// Headless backend that records calls.
#[derive(Debug, Default)]
pub struct RecordingBackend {
    programs: Vec<ShaderSource>,
    bound: Option<ProgramHandle>,
    /// Per-program uniform state, persists across frames like GL program state
    uniforms: FxHashMap<ProgramHandle, FxHashMap<String, UniformValue>>,
    frame_draws: Vec<RecordedDraw>,
    frame_count: u64,
    total_draws: u64,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Source of a compiled program.
    pub fn program_source(&self, program: ProgramHandle) -> Option<&ShaderSource> {
        self.programs.get(program.0 as usize)
    }

    pub fn program_count(&self) -> usize {
        self.programs.len()
    }

    pub fn bound_program(&self) -> Option<ProgramHandle> {
        self.bound
    }

    /// Current value of a uniform on `program`.
    pub fn uniform(&self, program: ProgramHandle, name: &str) -> Option<UniformValue> {
        self.uniforms.get(&program)?.get(name).copied()
    }

    /// Draws issued since the last `begin_frame`.
    pub fn frame_draws(&self) -> &[RecordedDraw] {
        &self.frame_draws
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Draws issued over the backend's lifetime.
    pub fn total_draws(&self) -> u64 {
        self.total_draws
    }

    fn require_bound(&self) -> Result<ProgramHandle> {
        match self.bound {
            Some(program) => Ok(program),
            None => engine_bail!("cull3d::RecordingBackend", BackendError, "No program bound"),
        }
    }
}

impl RenderBackend for RecordingBackend {
    fn compile_program(&mut self, source: &ShaderSource) -> Result<ProgramHandle> {
        if source.vertex.trim().is_empty() || source.fragment.trim().is_empty() {
            engine_bail!(
                "cull3d::RecordingBackend",
                BackendError,
                "Program '{}' has an empty shader stage",
                source.name
            );
        }

        let handle = ProgramHandle(self.programs.len() as u32);
        self.programs.push(source.clone());
        engine_debug!("cull3d::RecordingBackend", "Compiled program '{}' as {}", source.name, handle.0);
        Ok(handle)
    }

    fn bind_program(&mut self, program: ProgramHandle) -> Result<()> {
        if self.program_source(program).is_none() {
            engine_bail!(
                "cull3d::RecordingBackend",
                InvalidResource,
                "Program {} was not compiled by this backend",
                program.0
            );
        }
        self.bound = Some(program);
        Ok(())
    }

    fn set_uniform(&mut self, name: &str, value: UniformValue) -> Result<()> {
        let program = self.require_bound()?;
        self.uniforms
            .entry(program)
            .or_default()
            .insert(name.to_string(), value);
        Ok(())
    }

    fn draw(&mut self, call: &DrawCall) -> Result<()> {
        let program = self.require_bound()?;
        let uniforms = self.uniforms.get(&program).cloned().unwrap_or_default();
        self.frame_draws.push(RecordedDraw { program, call: *call, uniforms });
        self.total_draws += 1;
        Ok(())
    }

    fn begin_frame(&mut self) -> Result<()> {
        self.frame_draws.clear();
        self.frame_count += 1;
        Ok(())
    }
}

#[cfg(test)]
#[path = "recording_backend_tests.rs"]
mod tests;
