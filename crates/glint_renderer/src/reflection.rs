//! Recursive mirror reflection.

use glint_math::{Ray, Vec3};

use crate::scene::{Scene, REFLECTION_T_MIN};
use crate::shading::{reflect, shade, shade_ambient};

/// Resolve the color seen in the mirror direction from a surface point.
///
/// `current` is the primitive the ray is leaving; it is excluded from the
/// continuation scan. `ray` is the ray that arrived at `point` and supplies
/// the view position for shading the reflected surface.
///
/// Returns `None` when the bounce budget is exhausted or the reflected ray
/// escapes the scene. Callers substitute the returned color for both the
/// ambient and diffuse coefficients of their own shading, falling back to
/// the surface's own albedo on `None`.
pub fn reflected_color(
    scene: &Scene,
    current: usize,
    point: Vec3,
    normal: Vec3,
    ray: &Ray,
    depth: u32,
) -> Option<Vec3> {
    if depth == 0 {
        return None;
    }

    let outgoing = reflect(ray.direction, normal).normalize();
    let (index, hit) =
        scene.nearest_hit(&Ray::new(point, outgoing), Some(current), REFLECTION_T_MIN)?;
    let surface = scene.primitives()[index].surface();

    if surface.reflective {
        let continuation = Ray::new(point, outgoing);
        if let Some(color) =
            reflected_color(scene, index, hit.point, hit.normal, &continuation, depth - 1)
        {
            // The reflected object's shaded appearance becomes the material
            // perceived through this mirror
            return Some(if scene.is_occluded(index, hit.point) {
                shade_ambient(surface, color)
            } else {
                shade(surface, hit.point, hit.normal, ray, scene.light, color, color)
            });
        }
    }

    let albedo = surface.color * 255.0;
    Some(if scene.is_occluded(index, hit.point) {
        shade_ambient(surface, albedo)
    } else {
        shade(
            surface, hit.point, hit.normal, ray, scene.light, albedo, albedo,
        )
    })
}
