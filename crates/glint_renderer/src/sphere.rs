//! Sphere primitive.

use glint_core::Surface;
use glint_math::{Ray, Vec3};

use crate::hittable::{Hit, Intersectable};

/// A sphere with material attributes.
#[derive(Debug, Clone, Copy)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
    pub surface: Surface,
}

impl Sphere {
    /// Create a new sphere. The radius must be positive; scene validation
    /// enforces this before a sphere reaches the renderer.
    pub fn new(center: Vec3, radius: f32, surface: Surface) -> Self {
        Self {
            center,
            radius,
            surface,
        }
    }
}

impl Intersectable for Sphere {
    fn intersect(&self, ray: &Ray) -> Option<Hit> {
        let oc = ray.origin - self.center;
        let a = ray.direction.dot(ray.direction);
        let b = 2.0 * oc.dot(ray.direction);
        let c = oc.dot(oc) - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }

        // Only the smaller root is reported, even when it lies behind the
        // ray origin. Selection layers filter on t.
        let t = (-b - discriminant.sqrt()) / (2.0 * a);
        let point = ray.at(t);
        let normal = (point - self.center).normalize();

        Some(Hit { t, point, normal })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_surface() -> Surface {
        Surface::new(Vec3::ONE)
    }

    #[test]
    fn test_sphere_head_on_hit() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -5.0), 0.75, unit_surface());
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        let hit = sphere.intersect(&ray).unwrap();
        assert!((hit.t - 4.25).abs() < 1e-5);
        assert!((hit.point - Vec3::new(0.0, 0.0, -4.25)).length() < 1e-5);
        assert!((hit.normal - Vec3::Z).length() < 1e-5);
    }

    #[test]
    fn test_sphere_miss() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -5.0), 0.75, unit_surface());
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 1.0, 0.0));

        assert!(sphere.intersect(&ray).is_none());
    }

    #[test]
    fn test_sphere_tangent_ray() {
        // Grazing hit: discriminant is exactly zero
        let sphere = Sphere::new(Vec3::new(0.0, 1.0, -5.0), 1.0, unit_surface());
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        let hit = sphere.intersect(&ray).unwrap();
        assert!((hit.t - 5.0).abs() < 1e-4);
        assert!((hit.normal - Vec3::new(0.0, -1.0, 0.0)).length() < 1e-4);
    }

    #[test]
    fn test_sphere_origin_inside_reports_negative_root() {
        // The smaller root is behind the origin; it is still reported and
        // left for the caller to reject.
        let sphere = Sphere::new(Vec3::ZERO, 1.0, unit_surface());
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        let hit = sphere.intersect(&ray).unwrap();
        assert!((hit.t + 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_sphere_unnormalized_direction() {
        // t is reported in units of the direction vector
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -5.0), 0.75, unit_surface());
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -2.0));

        let hit = sphere.intersect(&ray).unwrap();
        assert!((hit.t - 2.125).abs() < 1e-5);
        assert!((hit.point - Vec3::new(0.0, 0.0, -4.25)).length() < 1e-5);
    }
}
