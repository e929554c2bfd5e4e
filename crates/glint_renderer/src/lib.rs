//! Glint Renderer - Whitted-style CPU ray tracing of sphere scenes.
//!
//! Direct lighting with hard shadows, recursive mirror reflection and
//! refraction blended by a Fresnel-like term, capped at a fixed depth.

mod camera;
mod output;
mod renderer;
mod sphere;
mod tracer;

pub use camera::Camera;
pub use output::{encode_ppm, save, write_ppm, RenderError, RenderResult};
pub use renderer::{color_to_rgb, render, render_parallel, render_pixel, ImageBuffer};
pub use sphere::{spheres_from_scene, Sphere};
pub use tracer::{fresnel, reflect, refract, Tracer, TracerOptions, FAR_T};

/// Re-export common math types from glint_math
pub use glint_math::{Color, Ray, Vec3};
