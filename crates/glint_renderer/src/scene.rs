//! Scene: an ordered primitive sequence plus one point light, with
//! nearest-hit and occlusion queries.

use glint_core::{PrimitiveDescription, SceneDescription, Surface};
use glint_math::{Ray, Vec3};

use crate::hittable::{Hit, Intersectable};
use crate::plane::Plane;
use crate::sphere::Sphere;

/// Acceptance threshold for reflection continuation rays.
///
/// A reflected ray starts exactly on a surface, so its re-intersection
/// distance can come out as a tiny negative number; anything above this
/// threshold counts as a forward hit.
pub const REFLECTION_T_MIN: f32 = -f32::EPSILON;

/// A ray-intersectable primitive.
#[derive(Debug, Clone, Copy)]
pub enum Primitive {
    Sphere(Sphere),
    Plane(Plane),
}

impl Primitive {
    /// Get the surface attributes of the primitive.
    pub fn surface(&self) -> &Surface {
        match self {
            Primitive::Sphere(sphere) => &sphere.surface,
            Primitive::Plane(plane) => &plane.surface,
        }
    }
}

impl Intersectable for Primitive {
    fn intersect(&self, ray: &Ray) -> Option<Hit> {
        match self {
            Primitive::Sphere(sphere) => sphere.intersect(ray),
            Primitive::Plane(plane) => plane.intersect(ray),
        }
    }
}

/// An immutable scene: primitives in scan order plus the point light.
///
/// Built once before rendering; all queries take `&self` and mutate
/// nothing, so the scene can be shared across render threads freely.
pub struct Scene {
    primitives: Vec<Primitive>,
    /// Point light position
    pub light: Vec3,
}

impl Scene {
    /// Create a scene from primitives in their scan order.
    pub fn new(primitives: Vec<Primitive>, light: Vec3) -> Self {
        Self { primitives, light }
    }

    /// Build the renderable scene from a validated description, preserving
    /// primitive order.
    pub fn from_description(description: &SceneDescription) -> Self {
        let primitives = description
            .primitives
            .iter()
            .map(|primitive| match *primitive {
                PrimitiveDescription::Sphere {
                    center,
                    radius,
                    surface,
                } => Primitive::Sphere(Sphere::new(center, radius, surface)),
                PrimitiveDescription::Plane {
                    normal,
                    point,
                    surface,
                } => Primitive::Plane(Plane::new(normal, point, surface)),
            })
            .collect();

        Self::new(primitives, description.light)
    }

    /// Get the primitives in scan order.
    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    /// Find the closest acceptable intersection along a ray.
    ///
    /// Scans primitives in sequence order, skipping `exclude` (used when a
    /// ray continues from a surface, to avoid immediate self-intersection).
    /// A hit is acceptable when its distance is at least `t_min`: primary
    /// and shadow rays pass `0.0`, reflection continuations pass
    /// [`REFLECTION_T_MIN`]. A later primitive replaces the current best
    /// only on a strictly smaller distance, so the first primitive in
    /// sequence order wins ties.
    pub fn nearest_hit(
        &self,
        ray: &Ray,
        exclude: Option<usize>,
        t_min: f32,
    ) -> Option<(usize, Hit)> {
        let mut nearest: Option<(usize, Hit)> = None;

        for (index, primitive) in self.primitives.iter().enumerate() {
            if exclude == Some(index) {
                continue;
            }
            if let Some(hit) = primitive.intersect(ray) {
                if hit.t < t_min {
                    continue;
                }
                let closer = match nearest {
                    Some((_, best)) => hit.t < best.t,
                    None => true,
                };
                if closer {
                    nearest = Some((index, hit));
                }
            }
        }

        nearest
    }

    /// Report whether another primitive lies between `point` (on primitive
    /// `exclude`) and the light.
    ///
    /// Casts a ray from the light toward the point and scans every other
    /// primitive; any forward hit at or before the point occludes it. The
    /// queried primitive never occludes itself.
    pub fn is_occluded(&self, exclude: usize, point: Vec3) -> bool {
        let dist_to_light = (self.light - point).length();
        let light_to_point = (point - self.light).normalize();
        let shadow_ray = Ray::new(self.light, light_to_point);

        for (index, primitive) in self.primitives.iter().enumerate() {
            if index == exclude {
                continue;
            }
            if let Some(hit) = primitive.intersect(&shadow_ray) {
                if hit.t >= 0.0 && hit.t <= dist_to_light {
                    return true;
                }
            }
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matte_sphere(center: Vec3, radius: f32) -> Primitive {
        Primitive::Sphere(Sphere::new(center, radius, Surface::new(Vec3::ONE)))
    }

    #[test]
    fn test_nearest_hit_picks_closest() {
        let scene = Scene::new(
            vec![
                matte_sphere(Vec3::new(0.0, 0.0, -5.0), 0.5),
                matte_sphere(Vec3::new(0.0, 0.0, -3.0), 0.5),
            ],
            Vec3::new(0.0, 5.0, 0.0),
        );
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        let (index, hit) = scene.nearest_hit(&ray, None, 0.0).unwrap();
        assert_eq!(index, 1);
        assert!((hit.t - 2.5).abs() < 1e-5);
    }

    #[test]
    fn test_nearest_hit_tie_break_prefers_earlier() {
        // Two coincident spheres: the first in sequence order wins
        let scene = Scene::new(
            vec![
                matte_sphere(Vec3::new(0.0, 0.0, -5.0), 0.5),
                matte_sphere(Vec3::new(0.0, 0.0, -5.0), 0.5),
            ],
            Vec3::new(0.0, 5.0, 0.0),
        );
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        let (index, _) = scene.nearest_hit(&ray, None, 0.0).unwrap();
        assert_eq!(index, 0);
    }

    #[test]
    fn test_nearest_hit_skips_negative_distances() {
        // The enclosing sphere reports a negative root; the far sphere is
        // the only acceptable hit
        let scene = Scene::new(
            vec![
                matte_sphere(Vec3::ZERO, 1.0),
                matte_sphere(Vec3::new(0.0, 0.0, -5.0), 0.5),
            ],
            Vec3::new(0.0, 5.0, 0.0),
        );
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        let (index, _) = scene.nearest_hit(&ray, None, 0.0).unwrap();
        assert_eq!(index, 1);

        let alone = Scene::new(vec![matte_sphere(Vec3::ZERO, 1.0)], Vec3::ZERO);
        assert!(alone.nearest_hit(&ray, None, 0.0).is_none());
    }

    #[test]
    fn test_nearest_hit_excludes_primitive() {
        let scene = Scene::new(
            vec![matte_sphere(Vec3::new(0.0, 0.0, -5.0), 0.5)],
            Vec3::new(0.0, 5.0, 0.0),
        );
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        assert!(scene.nearest_hit(&ray, Some(0), 0.0).is_none());
        assert!(scene.nearest_hit(&ray, None, 0.0).is_some());
    }

    #[test]
    fn test_relaxed_threshold_accepts_zero_distance() {
        // Ray starting exactly on the sphere surface re-hits it at t = 0
        let scene = Scene::new(
            vec![matte_sphere(Vec3::new(0.0, 0.0, -5.0), 0.75)],
            Vec3::new(0.0, 5.0, 0.0),
        );
        let ray = Ray::new(Vec3::new(0.0, 0.0, -4.25), Vec3::new(0.0, 0.0, -1.0));

        let (_, hit) = scene.nearest_hit(&ray, None, REFLECTION_T_MIN).unwrap();
        assert!(hit.t.abs() < 1e-6);

        // A genuinely backward hit stays rejected under the relaxed rule
        let inside = Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::new(0.0, 0.0, -1.0));
        assert!(scene.nearest_hit(&inside, None, REFLECTION_T_MIN).is_none());
    }

    #[test]
    fn test_single_primitive_never_self_occludes() {
        // A lone sphere lit from directly above its pole
        let scene = Scene::new(
            vec![matte_sphere(Vec3::ZERO, 1.0)],
            Vec3::new(0.0, 5.0, 0.0),
        );

        assert!(!scene.is_occluded(0, Vec3::new(0.0, 1.0, 0.0)));
    }

    #[test]
    fn test_occluded_by_primitive_between_light_and_point() {
        let scene = Scene::new(
            vec![
                matte_sphere(Vec3::new(0.0, 2.0, 0.0), 0.5),
                Primitive::Plane(Plane::new(
                    Vec3::Y,
                    Vec3::new(0.0, -1.0, 0.0),
                    Surface::new(Vec3::splat(0.75)),
                )),
            ],
            Vec3::new(0.0, 5.0, 0.0),
        );

        // The sphere sits between the light and the shaded floor point
        assert!(scene.is_occluded(1, Vec3::new(0.0, -1.0, 0.0)));
        // A floor point far off to the side is lit
        assert!(!scene.is_occluded(1, Vec3::new(50.0, -1.0, 0.0)));
    }

    #[test]
    fn test_hit_beyond_point_does_not_occlude() {
        // The sphere is past the queried point as seen from the light
        let scene = Scene::new(
            vec![
                matte_sphere(Vec3::new(0.0, -3.0, 0.0), 0.5),
                Primitive::Plane(Plane::new(
                    Vec3::Y,
                    Vec3::new(0.0, -1.0, 0.0),
                    Surface::new(Vec3::splat(0.75)),
                )),
            ],
            Vec3::new(0.0, 5.0, 0.0),
        );

        assert!(!scene.is_occluded(1, Vec3::new(0.0, -1.0, 0.0)));
    }
}
