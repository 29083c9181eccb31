//! Scene description types.
//!
//! A scene is an ordered sequence of primitives plus one point light. The
//! order of the primitive sequence is semantically meaningful: it is the
//! tie-break rule and the iteration order for nearest-hit and shadow scans,
//! so descriptions preserve it exactly as written.

use glint_math::Vec3;
use serde::{Deserialize, Serialize};

use crate::loader::SceneError;
use crate::surface::Surface;

/// Camera placement and projection.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraDescription {
    /// Camera position
    pub look_from: Vec3,
    /// Point the camera looks at
    pub look_at: Vec3,
    /// Up direction
    pub vup: Vec3,
    /// Field of view across the image width, in degrees
    pub fov: f32,
}

impl Default for CameraDescription {
    fn default() -> Self {
        Self {
            look_from: Vec3::ZERO,
            look_at: Vec3::new(0.0, 0.0, -1.0),
            vup: Vec3::Y,
            fov: 45.0,
        }
    }
}

/// A primitive as it appears in a scene file.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PrimitiveDescription {
    Sphere {
        center: Vec3,
        /// Radius, must be positive
        radius: f32,
        #[serde(flatten)]
        surface: Surface,
    },
    Plane {
        /// Plane normal, must have nonzero length
        normal: Vec3,
        /// Any point lying on the plane
        point: Vec3,
        #[serde(flatten)]
        surface: Surface,
    },
}

impl PrimitiveDescription {
    /// Get the surface attributes of the primitive.
    pub fn surface(&self) -> &Surface {
        match self {
            PrimitiveDescription::Sphere { surface, .. } => surface,
            PrimitiveDescription::Plane { surface, .. } => surface,
        }
    }
}

/// A complete scene description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneDescription {
    /// Camera placement; defaults to the origin looking down -Z
    #[serde(default)]
    pub camera: CameraDescription,

    /// Point light position
    pub light: Vec3,

    /// Background color (RGB, 0-1)
    #[serde(default = "default_background")]
    pub background: Vec3,

    /// Mirror bounce budget
    #[serde(default = "default_max_depth")]
    pub max_depth: u32,

    /// Ordered primitive sequence
    pub primitives: Vec<PrimitiveDescription>,
}

fn default_background() -> Vec3 {
    Vec3::new(0.5, 0.0, 1.0)
}

fn default_max_depth() -> u32 {
    10
}

impl SceneDescription {
    /// Check the geometric and material invariants the renderer assumes.
    ///
    /// Returns the first violation found, in primitive order.
    pub fn validate(&self) -> Result<(), SceneError> {
        for (index, primitive) in self.primitives.iter().enumerate() {
            match primitive {
                PrimitiveDescription::Sphere { radius, .. } => {
                    if *radius <= 0.0 {
                        return Err(SceneError::InvalidRadius {
                            index,
                            radius: *radius,
                        });
                    }
                }
                PrimitiveDescription::Plane { normal, .. } => {
                    if normal.length_squared() == 0.0 {
                        return Err(SceneError::DegenerateNormal { index });
                    }
                }
            }

            let surface = primitive.surface();
            if surface.ambient_factor < 0.0 {
                return Err(SceneError::NegativeAttribute {
                    index,
                    attribute: "ambient_factor",
                    value: surface.ambient_factor,
                });
            }
            if surface.specular_exponent < 0.0 {
                return Err(SceneError::NegativeAttribute {
                    index,
                    attribute: "specular_exponent",
                    value: surface.specular_exponent,
                });
            }
        }
        Ok(())
    }
}
