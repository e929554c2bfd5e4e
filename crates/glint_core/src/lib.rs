//! Glint Core - scene description and render settings.
//!
//! This crate provides:
//!
//! - **Scene types**: `SceneDesc`, `SphereDesc`, plus the built-in reference scene
//! - **Settings**: `RenderSettings` / `TracerSettings` loaded from JSON
//!
//! # Example
//!
//! ```ignore
//! use glint_core::load_settings;
//!
//! let settings = load_settings("render.json")?;
//! let scene = settings.resolve_scene()?;
//! println!("Loaded {} spheres, {} lights", scene.len(), scene.light_count());
//! ```

pub mod scene;
pub mod settings;

// Re-export commonly used types
pub use scene::{load_scene, load_scene_from_str, SceneDesc, SceneError, SceneResult, SphereDesc};
pub use settings::{load_settings, load_settings_from_str, RenderSettings, TracerSettings};
