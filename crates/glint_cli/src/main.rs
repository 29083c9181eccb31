//! glint command line renderer.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use log::{info, LevelFilter};

use glint_core::{CameraDescription, PrimitiveDescription, SceneDescription, Surface};
use glint_math::Vec3;
use glint_renderer::{render, save, Camera, RenderConfig, RenderMode, Scene};

/// Log levels usable with clap's ValueEnum.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Per-pixel computation selectable from the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    /// Clamped camera ray directions
    Directions,
    /// Flat albedo of the nearest hit
    Albedo,
    /// Phong shading only
    Shading,
    /// Phong shading with hard shadows
    Shadows,
    /// Shadows plus mirror reflection
    Full,
}

impl From<Mode> for RenderMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Directions => RenderMode::Directions,
            Mode::Albedo => RenderMode::Albedo,
            Mode::Shading => RenderMode::Shading,
            Mode::Shadows => RenderMode::Shadows,
            Mode::Full => RenderMode::Full,
        }
    }
}

/// Command line arguments.
#[derive(Parser)]
#[command(name = "glint")]
#[command(about = "A Whitted-style ray tracer")]
struct Args {
    /// Scene file (JSON); renders the built-in demo scene when omitted
    scene: Option<PathBuf>,

    /// Output file path (.ppm for binary P6, .png for PNG)
    #[arg(short, long, default_value = "render.ppm")]
    output: PathBuf,

    /// Image width in pixels
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 600)]
    height: u32,

    /// What to compute per pixel
    #[arg(long, value_enum, default_value = "full")]
    mode: Mode,

    /// Override the scene's mirror bounce budget
    #[arg(long)]
    depth: Option<u32>,

    /// Set the logging level
    #[arg(long, value_enum, default_value = "info")]
    log_level: LogLevel,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::from_default_env()
        .filter_level(args.log_level.into())
        .init();

    let description = match &args.scene {
        Some(path) => SceneDescription::from_path(path)
            .with_context(|| format!("loading scene {}", path.display()))?,
        None => demo_scene(),
    };
    description.validate().context("invalid scene")?;

    let scene = Scene::from_description(&description);
    info!(
        "{} primitives, light at {}",
        scene.primitives().len(),
        scene.light
    );

    let placement = description.camera;
    let mut camera = Camera::new()
        .with_resolution(args.width, args.height)
        .with_position(placement.look_from, placement.look_at, placement.vup)
        .with_fov(placement.fov);
    camera.initialize();

    let config = RenderConfig {
        mode: args.mode.into(),
        max_depth: args.depth.unwrap_or(description.max_depth),
        background: description.background * 255.0,
    };

    let start = Instant::now();
    let image = render(&camera, &scene, &config);
    info!(
        "rendered {}x{} in {:?}",
        image.width,
        image.height,
        start.elapsed()
    );

    save(&image, &args.output).with_context(|| format!("saving {}", args.output.display()))?;
    info!("saved {}", args.output.display());

    Ok(())
}

/// The built-in demo scene: four spheres in a room of six planes, with a
/// mirror sphere and a mirror floor.
fn demo_scene() -> SceneDescription {
    let wall = Surface::new(Vec3::new(0.75, 0.75, 0.75));

    SceneDescription {
        camera: CameraDescription::default(),
        light: Vec3::new(-1.9, 1.9, 0.0),
        background: Vec3::new(0.5, 0.0, 1.0),
        max_depth: 10,
        primitives: vec![
            PrimitiveDescription::Sphere {
                center: Vec3::new(0.0, 0.0, -5.0),
                radius: 0.75,
                surface: Surface::new(Vec3::new(1.0, 0.5, 0.0)).mirror(),
            },
            PrimitiveDescription::Sphere {
                center: Vec3::new(1.0, 0.0, -5.5),
                radius: 0.5,
                surface: Surface::new(Vec3::new(0.0, 1.0, 0.5)),
            },
            PrimitiveDescription::Sphere {
                center: Vec3::new(-1.0, 0.5, -3.0),
                radius: 0.2,
                surface: Surface::new(Vec3::new(0.0, 0.5, 1.0)),
            },
            PrimitiveDescription::Sphere {
                center: Vec3::new(-0.5, -0.5, -2.5),
                radius: 0.2,
                surface: Surface::new(Vec3::new(1.0, 0.5, 0.5)),
            },
            PrimitiveDescription::Plane {
                normal: Vec3::new(0.0, 1.0, 0.0),
                point: Vec3::new(0.0, -1.0, 0.0),
                surface: wall.mirror(),
            },
            PrimitiveDescription::Plane {
                normal: Vec3::new(-1.0, 0.0, 0.0),
                point: Vec3::new(2.0, 0.0, 0.0),
                surface: wall,
            },
            PrimitiveDescription::Plane {
                normal: Vec3::new(0.0, 0.0, 1.0),
                point: Vec3::new(0.0, 0.0, -10.0),
                surface: wall,
            },
            PrimitiveDescription::Plane {
                normal: Vec3::new(1.0, 0.0, 0.0),
                point: Vec3::new(-3.0, 0.0, 0.0),
                surface: wall,
            },
            PrimitiveDescription::Plane {
                normal: Vec3::new(0.0, -1.0, 0.0),
                point: Vec3::new(0.0, 2.5, 0.0),
                surface: wall,
            },
            PrimitiveDescription::Plane {
                normal: Vec3::new(0.0, 0.0, -1.0),
                point: Vec3::new(0.0, 0.0, 2.0),
                surface: wall,
            },
        ],
    }
}
