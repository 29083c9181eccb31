//! Simple renderer example.
//!
//! Builds a small mirror-room scene in code and saves it to PPM format.

use glint_core::Surface;
use glint_renderer::{
    render, save_ppm, Camera, Plane, Primitive, RenderConfig, Scene, Sphere, Vec3,
};
use std::path::Path;

fn main() {
    println!("glint - mirror room example");
    println!("===========================");

    let world = build_scene();
    println!("Created {} primitives", world.primitives().len());

    let mut camera = Camera::new().with_resolution(800, 600).with_fov(45.0);
    camera.initialize();

    let config = RenderConfig::default();

    println!("Rendering {}x{}...", camera.image_width, camera.image_height);
    let start = std::time::Instant::now();
    let image = render(&camera, &world, &config);
    println!("Rendered in {:?}", start.elapsed());

    let filename = "mirror_room.ppm";
    save_ppm(&image, Path::new(filename)).expect("Failed to save image");
    println!("Saved to {}", filename);
}

fn build_scene() -> Scene {
    let wall = Surface::new(Vec3::new(0.75, 0.75, 0.75));

    let primitives = vec![
        Primitive::Sphere(Sphere::new(
            Vec3::new(0.0, 0.0, -5.0),
            0.75,
            Surface::new(Vec3::new(1.0, 0.5, 0.0)).mirror(),
        )),
        Primitive::Sphere(Sphere::new(
            Vec3::new(1.0, 0.0, -5.5),
            0.5,
            Surface::new(Vec3::new(0.0, 1.0, 0.5)),
        )),
        Primitive::Sphere(Sphere::new(
            Vec3::new(-1.0, 0.5, -3.0),
            0.2,
            Surface::new(Vec3::new(0.0, 0.5, 1.0)),
        )),
        // Mirror floor plus matte walls boxing the scene in
        Primitive::Plane(Plane::new(
            Vec3::Y,
            Vec3::new(0.0, -1.0, 0.0),
            wall.mirror(),
        )),
        Primitive::Plane(Plane::new(
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(0.0, 0.0, -10.0),
            wall,
        )),
    ];

    Scene::new(primitives, Vec3::new(-1.9, 1.9, 0.0))
}
