//! `glint [settings.json]`
//!
//! Without arguments renders the reference scene to `out.ppm` at 640x480.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use glint_core::{load_settings, RenderSettings};
use glint_renderer::{render, render_parallel, save, spheres_from_scene, Camera, Tracer, TracerOptions};

/// Render according to `settings` and write the image. Returns the output path.
fn run(settings: &RenderSettings) -> Result<PathBuf> {
    let scene = settings.resolve_scene().context("Failed to load scene")?;
    let spheres = spheres_from_scene(&scene);

    let camera = Camera::new(settings.width, settings.height, settings.fov);
    let tracer = Tracer::new(&spheres, TracerOptions::from(&settings.tracer));

    log::info!(
        "Rendering scene '{}' ({} spheres, {} lights) at {}x{}",
        scene.name,
        scene.len(),
        scene.light_count(),
        settings.width,
        settings.height
    );

    let start = Instant::now();
    let image = if settings.parallel {
        render_parallel(&camera, &tracer)
    } else {
        render(&camera, &tracer)
    };
    log::info!("Rendered in {:?}", start.elapsed());

    save(&image, &settings.output_path)
        .with_context(|| format!("Failed to write {}", settings.output_path.display()))?;

    Ok(settings.output_path.clone())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let settings = match args.as_slice() {
        [] => RenderSettings::default(),
        [path] => load_settings(path).with_context(|| format!("Failed to load settings from {path}"))?,
        _ => bail!("usage: glint [settings.json]"),
    };

    log::info!("Starting Glint");

    let output = run(&settings)?;
    log::info!("Saved to {}", output.display());

    Ok(())
}
