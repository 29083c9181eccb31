//! Intersectable trait and Hit record for ray-primitive intersection.

use glint_math::{Ray, Vec3};

/// Record of a ray-primitive intersection.
#[derive(Debug, Clone, Copy)]
pub struct Hit {
    /// Distance along the ray, in units of the ray direction.
    ///
    /// May be negative: a sphere reports its smaller quadratic root even
    /// when that root lies behind the ray origin. Selection layers filter
    /// on `t` before using the record.
    pub t: f32,
    /// Point of intersection
    pub point: Vec3,
    /// Unit surface normal at the intersection
    pub normal: Vec3,
}

/// Trait for primitives that can be intersected by rays.
pub trait Intersectable {
    /// Intersect a ray with this primitive.
    ///
    /// Returns `None` when no intersection record exists. The point and
    /// normal of a returned `Hit` are only meaningful to callers that
    /// accept its `t`.
    fn intersect(&self, ray: &Ray) -> Option<Hit>;
}
