/// Built-in GLSL sources.
///
/// Backends that do not consume GLSL may ignore the text and key off
/// `ShaderSource::name` instead.

use super::backend::ShaderSource;

/// Uniform names shared by the built-in programs and the drawer.
pub const UNIFORM_MODEL: &str = "model";
pub const UNIFORM_VIEW: &str = "view";
pub const UNIFORM_PROJECTION: &str = "projection";
pub const UNIFORM_TIME: &str = "time";
pub const UNIFORM_GRID_POSITION: &str = "grid_position";
pub const UNIFORM_COLOR: &str = "color";

const CUBE_VERTEX: &str = r#"#version 430 core
layout (location = 0) in vec3 a_position;

uniform mat4 model;
uniform mat4 view;
uniform mat4 projection;

out vec3 v_local;

void main() {
    v_local = a_position;
    gl_Position = projection * view * model * vec4(a_position, 1.0);
}
"#;

const CUBE_FRAGMENT: &str = r#"#version 430 core
in vec3 v_local;

uniform float time;
uniform vec2 grid_position;
uniform vec3 color;

out vec4 frag_color;

void main() {
    float wave = 0.5 + 0.5 * sin(time + grid_position.x * 0.6 + grid_position.y * 0.4);
    frag_color = vec4(color * mix(0.4, 1.0, wave) * (0.75 + 0.25 * v_local.y), 1.0);
}
"#;

/// Program used for every grid cube.
pub fn cube_program() -> ShaderSource {
    ShaderSource::new("cube", CUBE_VERTEX, CUBE_FRAGMENT)
}
