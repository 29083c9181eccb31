//! Infinite plane primitive.

use glint_core::Surface;
use glint_math::{Ray, Vec3};

use crate::hittable::{Hit, Intersectable};

/// An infinite plane with material attributes, defined by a normal and any
/// point lying on the plane.
#[derive(Debug, Clone, Copy)]
pub struct Plane {
    /// Plane normal; expected to be unit length, never flipped toward a ray
    pub normal: Vec3,
    /// A point on the plane
    pub point: Vec3,
    pub surface: Surface,
}

impl Plane {
    /// Create a new plane. The normal must have nonzero length; scene
    /// validation enforces this before a plane reaches the renderer.
    pub fn new(normal: Vec3, point: Vec3, surface: Surface) -> Self {
        Self {
            normal,
            point,
            surface,
        }
    }
}

impl Intersectable for Plane {
    fn intersect(&self, ray: &Ray) -> Option<Hit> {
        let dn = ray.direction.dot(self.normal);
        if dn == 0.0 {
            // Exactly parallel to the plane
            return None;
        }

        let t = (self.point - ray.origin).dot(self.normal) / dn;
        if t < 0.0 {
            // Plane is behind the ray origin
            return None;
        }

        Some(Hit {
            t,
            point: ray.at(t),
            normal: self.normal,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn floor() -> Plane {
        Plane::new(
            Vec3::Y,
            Vec3::new(0.0, -1.0, 0.0),
            Surface::new(Vec3::splat(0.75)),
        )
    }

    #[test]
    fn test_plane_hit_from_above() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, -1.0, 0.0));

        let hit = floor().intersect(&ray).unwrap();
        assert!((hit.t - 1.0).abs() < 1e-6);
        assert!((hit.point - Vec3::new(0.0, -1.0, 0.0)).length() < 1e-6);
        assert_eq!(hit.normal, Vec3::Y);
    }

    #[test]
    fn test_plane_behind_ray_is_rejected() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 1.0, 0.0));
        assert!(floor().intersect(&ray).is_none());
    }

    #[test]
    fn test_plane_parallel_ray_is_rejected() {
        // Parallel rays miss regardless of origin, even one on the plane
        let above = Ray::new(Vec3::ZERO, Vec3::X);
        let on_plane = Ray::new(Vec3::new(0.0, -1.0, 0.0), Vec3::X);

        assert!(floor().intersect(&above).is_none());
        assert!(floor().intersect(&on_plane).is_none());
    }

    #[test]
    fn test_plane_normal_is_not_flipped() {
        // Hitting the back side still reports the stored normal
        let ray = Ray::new(Vec3::new(0.0, -2.0, 0.0), Vec3::new(0.0, 1.0, 0.0));

        let hit = floor().intersect(&ray).unwrap();
        assert!((hit.t - 1.0).abs() < 1e-6);
        assert_eq!(hit.normal, Vec3::Y);
    }
}
