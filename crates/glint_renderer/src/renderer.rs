//! Render loop: one primary ray per pixel.

use glint_math::{Ray, Vec3};
use log::debug;
use rayon::prelude::*;

use crate::camera::Camera;
use crate::reflection::reflected_color;
use crate::scene::Scene;
use crate::shading::{shade, shade_ambient};

/// What the render loop computes per pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Visualize the clamped camera ray directions; no scene queries
    Directions,
    /// Flat albedo of the nearest hit
    Albedo,
    /// Phong shading without shadows or reflection
    Shading,
    /// Phong shading with hard shadows
    Shadows,
    /// Shadows plus recursive mirror reflection
    Full,
}

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub mode: RenderMode,
    /// Mirror bounce budget
    pub max_depth: u32,
    /// Background color in display space [0, 255]
    pub background: Vec3,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            mode: RenderMode::Full,
            max_depth: 10,
            background: Vec3::new(0.5, 0.0, 1.0) * 255.0,
        }
    }
}

/// Compute the color seen by a primary ray, in display space [0, 255].
pub fn ray_color(ray: &Ray, scene: &Scene, config: &RenderConfig) -> Vec3 {
    if config.mode == RenderMode::Directions {
        // Negative direction components clamp to black
        return ray.direction.clamp(Vec3::ZERO, Vec3::ONE) * 255.0;
    }

    let (index, hit) = match scene.nearest_hit(ray, None, 0.0) {
        Some(found) => found,
        None => return config.background,
    };
    let surface = scene.primitives()[index].surface();
    let albedo = surface.color * 255.0;

    match config.mode {
        RenderMode::Directions | RenderMode::Albedo => albedo,
        RenderMode::Shading => shade(
            surface, hit.point, hit.normal, ray, scene.light, albedo, albedo,
        ),
        RenderMode::Shadows => {
            if scene.is_occluded(index, hit.point) {
                shade_ambient(surface, albedo)
            } else {
                shade(
                    surface, hit.point, hit.normal, ray, scene.light, albedo, albedo,
                )
            }
        }
        RenderMode::Full => {
            // A mirror's perceived material is whatever its reflection
            // resolves to; without a contribution it falls back to its own
            // albedo
            let material = if surface.reflective {
                reflected_color(scene, index, hit.point, hit.normal, ray, config.max_depth)
                    .unwrap_or(albedo)
            } else {
                albedo
            };

            if scene.is_occluded(index, hit.point) {
                shade_ambient(surface, material)
            } else {
                shade(
                    surface, hit.point, hit.normal, ray, scene.light, material, material,
                )
            }
        }
    }
}

/// Simple image buffer for storing render output.
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    /// Display-space [0, 255] colors, row-major, row 0 at the top
    pub pixels: Vec<Vec3>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Vec3::ZERO; (width * height) as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Vec3 {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Vec3) {
        self.pixels[(y * self.width + x) as usize] = color;
    }

    /// Convert to packed RGB bytes, 3 per pixel, row-major.
    pub fn to_rgb(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgb(*color));
        }
        bytes
    }
}

/// Convert a display-space color to 8-bit RGB (truncating cast).
pub fn color_to_rgb(color: Vec3) -> [u8; 3] {
    let clamped = color.clamp(Vec3::ZERO, Vec3::splat(255.0));
    [clamped.x as u8, clamped.y as u8, clamped.z as u8]
}

/// Render the scene.
///
/// Pixel rows are distributed across threads; the scene is shared
/// read-only, so no synchronization is needed.
pub fn render(camera: &Camera, scene: &Scene, config: &RenderConfig) -> ImageBuffer {
    let width = camera.image_width;
    let height = camera.image_height;
    let mut image = ImageBuffer::new(width, height);

    debug!(
        "rendering {}x{}, {:?}, depth {}",
        width, height, config.mode, config.max_depth
    );

    image
        .pixels
        .par_chunks_mut(width as usize)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, pixel) in row.iter_mut().enumerate() {
                let ray = camera.get_ray(x as u32, y as u32);
                *pixel = ray_color(&ray, scene, config);
            }
        });

    image
}
