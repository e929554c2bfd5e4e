//! Scene description types.
//!
//! A scene is an ordered list of sphere descriptors. Order is significant:
//! the tracer breaks nearest-hit ties in favor of the earlier sphere.

use std::path::Path;

use glint_math::{Color, Vec3};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while loading or validating a scene.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid sphere {index}: {reason}")]
    InvalidSphere { index: usize, reason: String },

    #[error("Scene contains no spheres")]
    Empty,

    #[error("Invalid settings: {0}")]
    InvalidSettings(String),
}

/// Result type for scene operations.
pub type SceneResult<T> = Result<T, SceneError>;

/// Serialized form of one sphere.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SphereDesc {
    /// Center position
    pub center: [f64; 3],

    /// Radius (must be positive)
    pub radius: f64,

    /// Surface color (RGB, 0-1 by convention)
    pub surface_color: [f64; 3],

    /// Reflection coefficient (0-1)
    #[serde(default)]
    pub reflection: f64,

    /// Transparency coefficient (0-1)
    #[serde(default)]
    pub transparency: f64,

    /// Emission color. A positive red channel makes the sphere a light.
    #[serde(default)]
    pub emission_color: [f64; 3],
}

impl SphereDesc {
    /// Create a descriptor.
    pub fn new(
        center: [f64; 3],
        radius: f64,
        surface_color: [f64; 3],
        reflection: f64,
        transparency: f64,
        emission_color: [f64; 3],
    ) -> Self {
        Self {
            center,
            radius,
            surface_color,
            reflection,
            transparency,
            emission_color,
        }
    }

    pub fn center(&self) -> Vec3 {
        Vec3::from_array(self.center)
    }

    pub fn surface_color(&self) -> Color {
        Color::from_array(self.surface_color)
    }

    pub fn emission_color(&self) -> Color {
        Color::from_array(self.emission_color)
    }

    /// Check if this sphere acts as a light source.
    pub fn is_light(&self) -> bool {
        self.emission_color[0] > 0.0
    }
}

/// A named, ordered list of spheres.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneDesc {
    /// Scene name (usually from filename)
    #[serde(default)]
    pub name: String,

    /// Spheres in tracing order
    pub spheres: Vec<SphereDesc>,
}

impl SceneDesc {
    /// Create an empty scene.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            spheres: Vec::new(),
        }
    }

    /// The classic six-sphere scene: a huge ground sphere, four reflective
    /// spheres (the central one also transparent) and one overhead light.
    pub fn reference() -> Self {
        let mut scene = Self::new("reference");
        // position, radius, surface color, reflectivity, transparency, emission color
        scene.add(SphereDesc::new([0.0, -10004.0, -20.0], 10000.0, [0.20, 0.20, 0.20], 0.0, 0.0, [0.0; 3]));
        scene.add(SphereDesc::new([0.0, 0.0, -20.0], 4.0, [1.00, 0.32, 0.36], 1.0, 0.5, [0.0; 3]));
        scene.add(SphereDesc::new([5.0, -1.0, -15.0], 2.0, [0.90, 0.76, 0.46], 1.0, 0.0, [0.0; 3]));
        scene.add(SphereDesc::new([5.0, 0.0, -25.0], 3.0, [0.65, 0.77, 0.97], 1.0, 0.0, [0.0; 3]));
        scene.add(SphereDesc::new([-5.5, 0.0, -15.0], 3.0, [0.90, 0.90, 0.90], 1.0, 0.0, [0.0; 3]));
        // light
        scene.add(SphereDesc::new([0.0, 20.0, -30.0], 3.0, [0.00, 0.00, 0.00], 0.0, 0.0, [3.0; 3]));
        scene
    }

    /// Append a sphere.
    pub fn add(&mut self, sphere: SphereDesc) {
        self.spheres.push(sphere);
    }

    /// Get sphere count.
    pub fn len(&self) -> usize {
        self.spheres.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spheres.is_empty()
    }

    /// Get light count.
    pub fn light_count(&self) -> usize {
        self.spheres.iter().filter(|s| s.is_light()).count()
    }

    /// Reject scenes the tracer cannot meaningfully render.
    ///
    /// Coefficients outside [0, 1] are allowed; only geometry is checked.
    pub fn validate(&self) -> SceneResult<()> {
        if self.spheres.is_empty() {
            return Err(SceneError::Empty);
        }

        for (index, sphere) in self.spheres.iter().enumerate() {
            if !sphere.radius.is_finite() || sphere.radius <= 0.0 {
                return Err(SceneError::InvalidSphere {
                    index,
                    reason: format!("radius must be positive and finite, got {}", sphere.radius),
                });
            }
            if sphere.center.iter().any(|c| !c.is_finite()) {
                return Err(SceneError::InvalidSphere {
                    index,
                    reason: "center must be finite".to_string(),
                });
            }
        }

        Ok(())
    }
}

/// Parse and validate a scene from a JSON string.
pub fn load_scene_from_str(json: &str) -> SceneResult<SceneDesc> {
    let scene: SceneDesc = serde_json::from_str(json)?;
    scene.validate()?;
    Ok(scene)
}

/// Load and validate a scene from a JSON file.
///
/// An unnamed scene takes its name from the file stem.
pub fn load_scene<P: AsRef<Path>>(path: P) -> SceneResult<SceneDesc> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)?;
    let mut scene = load_scene_from_str(&raw)?;

    if scene.name.is_empty() {
        scene.name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("unnamed")
            .to_string();
    }

    log::debug!(
        "Loaded scene '{}' from {}: {} spheres, {} lights",
        scene.name,
        path.display(),
        scene.len(),
        scene.light_count()
    );

    Ok(scene)
}
