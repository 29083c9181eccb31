//! Glint Core - scene description layer.
//!
//! This crate provides the renderer-agnostic scene representation:
//!
//! - **Surface attributes**: albedo, mirror flag, ambient factor, specular
//!   exponent
//! - **Primitive descriptions**: spheres and infinite planes
//! - **Scene description**: ordered primitives, one point light, camera
//!   placement, background color, mirror bounce budget
//! - **Scene files**: JSON loading and invariant validation
//!
//! # Example
//!
//! ```ignore
//! use glint_core::SceneDescription;
//!
//! let scene = SceneDescription::from_path("scenes/room.json".as_ref())?;
//! scene.validate()?;
//! println!("{} primitives", scene.primitives.len());
//! ```

pub mod loader;
pub mod scene;
pub mod surface;

// Re-export commonly used types
pub use loader::SceneError;
pub use scene::{CameraDescription, PrimitiveDescription, SceneDescription};
pub use surface::{Surface, DEFAULT_AMBIENT_FACTOR, DEFAULT_SPECULAR_EXPONENT};
