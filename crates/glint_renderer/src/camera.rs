//! Pinhole camera for ray generation.

use glint_math::{Ray, Vec3};

/// Pinhole camera generating one ray per pixel.
#[derive(Clone)]
pub struct Camera {
    // Image settings
    pub image_width: u32,
    pub image_height: u32,

    // Camera positioning
    look_from: Vec3,
    look_at: Vec3,
    vup: Vec3,

    // Field of view across the image width, in degrees
    fov: f32,

    // Cached computed values (set by initialize())
    center: Vec3,
    lower_left: Vec3,
    horizontal: Vec3,
    vertical: Vec3,
    w: Vec3,
}

impl Camera {
    /// Create a new camera with default settings: 800x600, at the origin,
    /// looking down -Z, 45 degree field of view.
    pub fn new() -> Self {
        Self {
            image_width: 800,
            image_height: 600,
            look_from: Vec3::ZERO,
            look_at: Vec3::new(0.0, 0.0, -1.0),
            vup: Vec3::Y,
            fov: 45.0,
            center: Vec3::ZERO,
            lower_left: Vec3::ZERO,
            horizontal: Vec3::ZERO,
            vertical: Vec3::ZERO,
            w: Vec3::Z,
        }
    }

    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.image_width = width;
        self.image_height = height;
        self
    }

    /// Set camera position.
    pub fn with_position(mut self, look_from: Vec3, look_at: Vec3, vup: Vec3) -> Self {
        self.look_from = look_from;
        self.look_at = look_at;
        self.vup = vup;
        self
    }

    /// Set the field of view across the image width, in degrees.
    pub fn with_fov(mut self, degrees: f32) -> Self {
        self.fov = degrees;
        self
    }

    /// Initialize the camera (must be called before generating rays).
    pub fn initialize(&mut self) {
        let focal_length = 1.0;
        let viewport_width = 2.0 * (self.fov.to_radians() / 2.0).tan();
        let viewport_height =
            viewport_width * (self.image_height as f32 / self.image_width as f32);

        // Camera basis vectors
        self.w = (self.look_from - self.look_at).normalize();
        let u = self.vup.cross(self.w).normalize();
        let v = self.w.cross(u);

        self.center = self.look_from;
        self.horizontal = viewport_width * u;
        self.vertical = viewport_height * v;
        self.lower_left =
            self.center - self.horizontal / 2.0 - self.vertical / 2.0 - self.w * focal_length;
    }

    /// Generate the ray through pixel (x, y); row 0 is the top of the
    /// image. The returned direction is normalized.
    pub fn get_ray(&self, x: u32, y: u32) -> Ray {
        let s = x as f32 / (self.image_width - 1) as f32;
        let t = (self.image_height - 1 - y) as f32 / (self.image_height - 1) as f32;

        let direction =
            (self.lower_left + s * self.horizontal + t * self.vertical - self.center).normalize();

        Ray::new(self.center, direction)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}
