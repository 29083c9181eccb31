//! Phong illumination in display space.
//!
//! Shading works on colors scaled to [0, 255]; every result is clamped to
//! that range per channel. The ambient and diffuse coefficients are passed
//! separately from the surface's own albedo so that mirror reflection can
//! substitute the reflected object's shaded appearance without changing
//! the rest of the formula.

use glint_core::Surface;
use glint_math::{Ray, Vec3};

/// Intensity of the single point light.
const LIGHT_INTENSITY: f32 = 1.0;

/// Specular coefficient: a full-intensity white highlight.
const SPECULAR_COEFFICIENT: Vec3 = Vec3::new(255.0, 255.0, 255.0);

/// Reflect `v` about the unit normal `n`.
#[inline]
pub(crate) fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

fn clamp_display(color: Vec3) -> Vec3 {
    color.clamp(Vec3::ZERO, Vec3::splat(255.0))
}

/// Full Phong shading at a surface point.
///
/// `ambient` and `diffuse` are display-space [0, 255] coefficient colors;
/// `ray` supplies the view position (its origin). The result is clamped to
/// [0, 255] per channel.
pub fn shade(
    surface: &Surface,
    point: Vec3,
    normal: Vec3,
    ray: &Ray,
    light: Vec3,
    ambient: Vec3,
    diffuse: Vec3,
) -> Vec3 {
    // Direction to the light
    let l = (light - point).normalize();

    let mut result = surface.ambient_factor * ambient;

    let cos_theta = l.dot(normal).clamp(0.0, 1.0);
    result += LIGHT_INTENSITY * diffuse * cos_theta;

    // Mirror direction of the light about the normal, against the view
    let r = (2.0 * cos_theta * normal - l).normalize();
    let v = (ray.origin - point).normalize();
    let highlight = v.dot(r).clamp(0.0, 1.0);
    result += LIGHT_INTENSITY * SPECULAR_COEFFICIENT * highlight.powf(surface.specular_exponent);

    clamp_display(result)
}

/// Ambient-only shading, used when the point is in shadow.
pub fn shade_ambient(surface: &Surface, ambient: Vec3) -> Vec3 {
    clamp_display(surface.ambient_factor * ambient)
}
