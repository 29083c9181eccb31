// Re-export glam for convenience
pub use glam::*;

mod ray;
pub use ray::Ray;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_creation() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
    }

    #[test]
    fn test_vec3_dot_and_cross() {
        let x = Vec3::X;
        let y = Vec3::Y;
        assert_eq!(x.dot(y), 0.0);
        assert_eq!(x.cross(y), Vec3::Z);
    }

    #[test]
    fn test_vec3_normalize() {
        let v = Vec3::new(0.0, 3.0, 4.0).normalize();
        assert!((v.length() - 1.0).abs() < 1e-6);
        assert!((v - Vec3::new(0.0, 0.6, 0.8)).length() < 1e-6);
    }
}
