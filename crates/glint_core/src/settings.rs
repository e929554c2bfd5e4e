//! Render settings loaded from JSON.
//!
//! Every field has a default matching the classic render: 640x480, 30 degree
//! field of view, reference scene, written to `out.ppm`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::scene::{load_scene, SceneDesc, SceneError, SceneResult};

/// Knobs for the recursive tracer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TracerSettings {
    /// Depth at which reflection/refraction stops recursing
    pub max_depth: u32,
    /// Offset along the normal for secondary ray origins
    pub bias: f64,
    /// Index of refraction for transparent spheres
    pub ior: f64,
    /// Value returned in every channel for rays that miss
    pub background: f64,
    /// Drop the refraction ray on total internal reflection instead of
    /// letting the NaN direction through
    pub guard_total_internal_reflection: bool,
}

impl Default for TracerSettings {
    fn default() -> Self {
        Self {
            max_depth: 5,
            bias: 1e-4,
            ior: 1.1,
            background: 2.0,
            guard_total_internal_reflection: false,
        }
    }
}

/// Top-level render configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderSettings {
    pub width: u32,
    pub height: u32,
    /// Field of view in degrees
    pub fov: f64,
    pub output_path: PathBuf,
    /// Render rows on the rayon pool
    pub parallel: bool,
    /// Scene file, resolved relative to the settings file
    pub scene_path: Option<PathBuf>,
    /// Inline scene; takes precedence over `scene_path`
    pub scene: Option<SceneDesc>,
    pub tracer: TracerSettings,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            fov: 30.0,
            output_path: PathBuf::from("out.ppm"),
            parallel: true,
            scene_path: None,
            scene: None,
            tracer: TracerSettings::default(),
        }
    }
}

impl RenderSettings {
    /// Check values the renderer cannot work with.
    pub fn validate(&self) -> SceneResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(SceneError::InvalidSettings(format!(
                "resolution must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        if !(self.fov > 0.0 && self.fov < 180.0) {
            return Err(SceneError::InvalidSettings(format!(
                "fov must be in (0, 180) degrees, got {}",
                self.fov
            )));
        }
        if !self.tracer.bias.is_finite() || !self.tracer.ior.is_finite() || self.tracer.ior <= 0.0 {
            return Err(SceneError::InvalidSettings(
                "tracer bias and ior must be finite, ior positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Resolve the scene to render: inline scene, then scene file, then the
    /// reference scene.
    pub fn resolve_scene(&self) -> SceneResult<SceneDesc> {
        if let Some(scene) = &self.scene {
            scene.validate()?;
            return Ok(scene.clone());
        }
        match &self.scene_path {
            Some(path) => load_scene(path),
            None => Ok(SceneDesc::reference()),
        }
    }
}

/// Parse and validate settings from a JSON string.
pub fn load_settings_from_str(json: &str) -> SceneResult<RenderSettings> {
    let settings: RenderSettings = serde_json::from_str(json)?;
    settings.validate()?;
    Ok(settings)
}

/// Load settings from a JSON file.
///
/// A relative `scenePath` is taken relative to the settings file's directory.
pub fn load_settings<P: AsRef<Path>>(path: P) -> SceneResult<RenderSettings> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)?;
    let mut settings = load_settings_from_str(&raw)?;

    if let (Some(scene_path), Some(dir)) = (&settings.scene_path, path.parent()) {
        if scene_path.is_relative() {
            settings.scene_path = Some(dir.join(scene_path));
        }
    }

    log::debug!("Loaded settings from {}: {:?}", path.display(), settings);
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_classic_render() {
        let settings = load_settings_from_str("{}").unwrap();

        assert_eq!(settings, RenderSettings::default());
        assert_eq!((settings.width, settings.height), (640, 480));
        assert_eq!(settings.fov, 30.0);
        assert_eq!(settings.output_path, PathBuf::from("out.ppm"));
        assert_eq!(settings.tracer.max_depth, 5);
        assert_eq!(settings.tracer.bias, 1e-4);
        assert_eq!(settings.tracer.ior, 1.1);
        assert_eq!(settings.tracer.background, 2.0);
        assert!(!settings.tracer.guard_total_internal_reflection);
    }

    #[test]
    fn test_partial_override() {
        let json = r#"{
            "width": 64,
            "height": 48,
            "outputPath": "small.png",
            "tracer": { "maxDepth": 2 }
        }"#;

        let settings = load_settings_from_str(json).unwrap();
        assert_eq!((settings.width, settings.height), (64, 48));
        assert_eq!(settings.output_path, PathBuf::from("small.png"));
        assert_eq!(settings.tracer.max_depth, 2);
        // Untouched tracer fields keep their defaults
        assert_eq!(settings.tracer.ior, 1.1);
    }

    #[test]
    fn test_rejects_zero_resolution() {
        let err = load_settings_from_str(r#"{ "width": 0 }"#).unwrap_err();
        assert!(matches!(err, SceneError::InvalidSettings(_)));
    }

    #[test]
    fn test_rejects_bad_fov() {
        assert!(load_settings_from_str(r#"{ "fov": 0 }"#).is_err());
        assert!(load_settings_from_str(r#"{ "fov": 180 }"#).is_err());
    }

    #[test]
    fn test_resolve_scene_prefers_inline() {
        let json = r#"{
            "scene": {
                "name": "inline",
                "spheres": [ { "center": [0, 0, -3], "radius": 1, "surfaceColor": [1, 1, 1] } ]
            }
        }"#;

        let settings = load_settings_from_str(json).unwrap();
        let scene = settings.resolve_scene().unwrap();
        assert_eq!(scene.name, "inline");
        assert_eq!(scene.len(), 1);
    }

    #[test]
    fn test_resolve_scene_defaults_to_reference() {
        let scene = RenderSettings::default().resolve_scene().unwrap();
        assert_eq!(scene, SceneDesc::reference());
    }

    #[test]
    fn test_load_bundled_settings() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../scenes/render.json");
        let settings = load_settings(&path).unwrap();

        assert_eq!((settings.width, settings.height), (800, 600));
        assert!(settings.tracer.guard_total_internal_reflection);

        // Scene path is resolved next to the settings file
        let scene = settings.resolve_scene().unwrap();
        assert_eq!(scene.name, "three_lights");
        assert_eq!(scene.light_count(), 3);
    }
}
