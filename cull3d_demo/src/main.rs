//! Headless fly-through of the cube grid.
//!
//! Runs a scripted camera path (walk, look around, zoom) against a
//! recording backend and logs the visible object count per frame, the
//! same number a windowed viewer shows in its title bar.
//!
//! Run with: RUST_LOG=info cargo run -p cull3d_demo

use cull3d_engine::cull3d::{Engine, FrameInput, RenderSession, SessionConfig};
use cull3d_engine::cull3d::camera::CameraMovement;
use cull3d_engine::cull3d::log::{LogEntry, LogSeverity, Logger};
use cull3d_engine::cull3d::render::RecordingBackend;
use cull3d_engine::cull3d::scene::{AABB, RenderInstance};
use glam::{Mat4, Vec2, Vec3};

const FRAME_TIME: f32 = 1.0 / 60.0;

/// Forwards engine log entries to the `log` facade.
struct LogBridge;

impl Logger for LogBridge {
    fn log(&self, entry: &LogEntry) {
        let level = match entry.severity {
            LogSeverity::Trace => log::Level::Trace,
            LogSeverity::Debug => log::Level::Debug,
            LogSeverity::Info => log::Level::Info,
            LogSeverity::Warn => log::Level::Warn,
            LogSeverity::Error => log::Level::Error,
        };
        match (entry.file, entry.line) {
            (Some(file), Some(line)) => {
                log::log!(target: "cull3d", level, "[{}] {} ({}:{})", entry.source, entry.message, file, line)
            }
            _ => log::log!(target: "cull3d", level, "[{}] {}", entry.source, entry.message),
        }
    }
}

/// One scripted phase of the fly-through.
struct Phase {
    name: &'static str,
    frames: u32,
    /// Keys held, as typed (WASD)
    keys: &'static str,
    /// Cursor velocity in pixels per frame
    cursor_step: Vec2,
    /// Scroll per frame
    scroll: f32,
}

const SCRIPT: &[Phase] = &[
    Phase { name: "idle", frames: 30, keys: "", cursor_step: Vec2::ZERO, scroll: 0.0 },
    Phase { name: "walk back", frames: 90, keys: "s", cursor_step: Vec2::ZERO, scroll: 0.0 },
    Phase { name: "strafe left", frames: 60, keys: "a", cursor_step: Vec2::ZERO, scroll: 0.0 },
    Phase { name: "look right", frames: 90, keys: "", cursor_step: Vec2::new(10.0, 0.0), scroll: 0.0 },
    Phase { name: "look down", frames: 30, keys: "", cursor_step: Vec2::new(0.0, 8.0), scroll: 0.0 },
    Phase { name: "zoom in", frames: 60, keys: "", cursor_step: Vec2::ZERO, scroll: 0.5 },
    Phase { name: "walk forward", frames: 120, keys: "w", cursor_step: Vec2::ZERO, scroll: 0.0 },
    Phase { name: "zoom out", frames: 60, keys: "", cursor_step: Vec2::ZERO, scroll: -0.5 },
];

/// Stand-in for a loaded mesh: bounds taken from its vertices, stood upright and scaled down.
fn model_instance() -> Option<RenderInstance> {
    let vertices = [
        Vec3::new(-40.0, -30.0, 0.0),
        Vec3::new(40.0, -30.0, 0.0),
        Vec3::new(0.0, 35.0, 0.0),
        Vec3::new(0.0, 0.0, 160.0),
    ];
    let local = AABB::from_points(&vertices)?;
    let world = Mat4::from_translation(Vec3::new(0.0, 0.0, -20.0))
        * Mat4::from_rotation_x(-std::f32::consts::FRAC_PI_2)
        * Mat4::from_scale(Vec3::splat(0.025));
    Some(RenderInstance::model(local, world, 3 * 4).with_color(Vec3::new(0.8, 0.6, 0.2)))
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    Engine::set_logger(LogBridge);

    let mut backend = RecordingBackend::new();
    let config = SessionConfig::default();
    let mut session = match RenderSession::new(config, &mut backend) {
        Ok(session) => session,
        Err(e) => {
            log::error!("Failed to create session: {}", e);
            std::process::exit(1);
        }
    };

    if let Some(model) = model_instance() {
        session.scene_mut().add_render_instance(model);
    }

    let mut cursor = Vec2::new(config.width as f32 / 2.0, config.height as f32 / 2.0);
    let mut time = 0.0;
    let mut drawn: u64 = 0;
    let mut possible: u64 = 0;

    for phase in SCRIPT {
        let mut last = None;
        for _ in 0..phase.frames {
            cursor += phase.cursor_step;
            time += FRAME_TIME;
            let input = FrameInput {
                keys: phase.keys.chars().filter_map(CameraMovement::from_key).collect(),
                cursor: Some(cursor),
                scroll: phase.scroll,
                delta_time: FRAME_TIME,
                time,
            };

            match session.frame(&input, &mut backend) {
                Ok(stats) => {
                    drawn += stats.draw_calls as u64;
                    possible += stats.total_instances as u64;
                    last = Some(stats);
                }
                Err(e) => {
                    log::error!("Frame failed during '{}': {}", phase.name, e);
                    std::process::exit(1);
                }
            }
        }

        if let Some(stats) = last {
            let camera = session.camera();
            log::info!(
                "{:<12} | {} | pos {:.2?} yaw {:.1} pitch {:.1} fov {:.1}",
                phase.name,
                stats.title(),
                camera.position(),
                camera.yaw(),
                camera.pitch(),
                camera.fov()
            );
        }
    }

    let ratio = if possible > 0 { drawn as f64 / possible as f64 } else { 0.0 };
    log::info!(
        "{} frames, {} draws of {} instances ({:.1}% drawn)",
        session.frame_count(),
        drawn,
        possible,
        ratio * 100.0
    );
}
