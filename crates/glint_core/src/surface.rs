//! Surface attributes shared by all primitives.

use glint_math::Vec3;
use serde::{Deserialize, Serialize};

/// Default ambient reflection factor.
pub const DEFAULT_AMBIENT_FACTOR: f32 = 0.2;

/// Default Phong specular exponent.
pub const DEFAULT_SPECULAR_EXPONENT: f32 = 50.0;

/// Material attributes of a primitive.
///
/// Scene files may omit everything except `color`; the defaults make a
/// matte surface.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Surface {
    /// Albedo color (RGB, 0-1)
    pub color: Vec3,

    /// Whether the surface is a mirror
    #[serde(default)]
    pub reflective: bool,

    /// Ambient reflection factor (non-negative)
    #[serde(default = "default_ambient_factor")]
    pub ambient_factor: f32,

    /// Phong specular exponent (non-negative)
    #[serde(default = "default_specular_exponent")]
    pub specular_exponent: f32,
}

fn default_ambient_factor() -> f32 {
    DEFAULT_AMBIENT_FACTOR
}

fn default_specular_exponent() -> f32 {
    DEFAULT_SPECULAR_EXPONENT
}

impl Surface {
    /// Create a matte surface with default attributes.
    pub fn new(color: Vec3) -> Self {
        Self {
            color,
            reflective: false,
            ambient_factor: DEFAULT_AMBIENT_FACTOR,
            specular_exponent: DEFAULT_SPECULAR_EXPONENT,
        }
    }

    /// Mark the surface as a mirror.
    pub fn mirror(mut self) -> Self {
        self.reflective = true;
        self
    }
}
