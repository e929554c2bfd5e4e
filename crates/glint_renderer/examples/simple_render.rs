//! Simple Whitted tracer example.
//!
//! Builds a small scene in code and saves it as PNG.

use glint_core::{SceneDesc, SphereDesc};
use glint_renderer::{render_parallel, save, spheres_from_scene, Camera, Tracer, TracerOptions};

fn main() {
    println!("Glint Whitted Tracer - Simple Example");
    println!("=====================================");

    let scene = build_scene();
    let spheres = spheres_from_scene(&scene);
    println!("Created {} spheres ({} lights)", scene.len(), scene.light_count());

    let camera = Camera::new(400, 300, 40.0);
    let tracer = Tracer::new(&spheres, TracerOptions::default());

    println!("Rendering {}x{}...", camera.image_width, camera.image_height);

    let start = std::time::Instant::now();
    let image = render_parallel(&camera, &tracer);
    println!("Rendered in {:?}", start.elapsed());

    let filename = "simple_render.png";
    save(&image, filename).expect("Failed to save image");
    println!("Saved to {}", filename);
}

fn build_scene() -> SceneDesc {
    let mut scene = SceneDesc::new("simple");

    // Ground
    scene.add(SphereDesc::new([0.0, -1003.0, -12.0], 1000.0, [0.4, 0.4, 0.4], 0.0, 0.0, [0.0; 3]));

    // Glass, mirror and matte spheres
    scene.add(SphereDesc::new([0.0, 0.0, -12.0], 2.0, [1.0, 1.0, 1.0], 1.0, 0.9, [0.0; 3]));
    scene.add(SphereDesc::new([-4.5, -0.5, -14.0], 2.5, [0.8, 0.6, 0.5], 1.0, 0.0, [0.0; 3]));
    scene.add(SphereDesc::new([4.0, -1.5, -10.0], 1.5, [0.3, 0.7, 0.4], 0.0, 0.0, [0.0; 3]));

    // Two lights
    scene.add(SphereDesc::new([-10.0, 15.0, -5.0], 1.0, [0.0; 3], 0.0, 0.0, [1.5; 3]));
    scene.add(SphereDesc::new([10.0, 12.0, -20.0], 1.0, [0.0; 3], 0.0, 0.0, [1.0; 3]));

    scene
}
