//! Render settings from an optional JSON file plus command-line overrides.

use crate::cli::Args;
use anyhow::{Context, Result};
use lumen_renderer::{CameraSettings, RenderConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// On-disk configuration. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub render: RenderConfig,
    pub camera: CameraSettings,
}

impl FileConfig {
    /// Read and parse a JSON config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("Failed to parse config {}", path.display()))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

/// Combine file config and flags; flags win.
///
/// The camera aspect ratio always follows the final resolution.
pub fn resolve(file: FileConfig, args: &Args) -> Result<(RenderConfig, CameraSettings)> {
    let mut render = file.render;
    if let Some(width) = args.width {
        render.image_width = width;
    }
    if let Some(height) = args.height {
        render.image_height = height;
    }
    if let Some(samples) = args.samples_per_pixel {
        render.samples_per_pixel = samples;
    }
    if let Some(max_depth) = args.max_depth {
        render.max_depth = max_depth;
    }
    if let Some(seed) = args.seed {
        render.seed = seed;
    }
    render.validate()?;

    let camera = file.camera.with_aspect_ratio(render.aspect_ratio());
    Ok((render, camera))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use lumen_renderer::Vec3;

    #[test]
    fn test_empty_file_is_all_defaults() {
        let file = FileConfig::from_json("{}").unwrap();
        assert_eq!(file, FileConfig::default());
    }

    #[test]
    fn test_partial_sections() {
        let file = FileConfig::from_json(
            r#"{
                "render": { "samples_per_pixel": 16, "seed": 9 },
                "camera": { "look_from": [0.0, 1.0, 3.0], "aperture": 0.1, "focus_dist": 4.0 }
            }"#,
        )
        .unwrap();

        assert_eq!(file.render.samples_per_pixel, 16);
        assert_eq!(file.render.seed, 9);
        assert_eq!(file.render.max_depth, 50);
        assert_eq!(file.camera.look_from, Vec3::new(0.0, 1.0, 3.0));
        assert_eq!(file.camera.aperture, 0.1);
        assert_eq!(file.camera.vfov, 90.0);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(FileConfig::from_json(r#"{ "render": { "seed": "x" } }"#).is_err());
    }

    #[test]
    fn test_flags_override_file() {
        let file = FileConfig::from_json(r#"{ "render": { "image_width": 400, "image_height": 200, "seed": 1 } }"#).unwrap();
        let args = Args::try_parse_from(["lumen", "--height", "100", "--seed", "7"]).unwrap();

        let (render, camera) = resolve(file, &args).unwrap();
        assert_eq!(render.image_width, 400);
        assert_eq!(render.image_height, 100);
        assert_eq!(render.seed, 7);
        assert_eq!(camera.aspect_ratio, 4.0);
    }

    #[test]
    fn test_zero_samples_rejected() {
        let args = Args::try_parse_from(["lumen", "-s", "0"]).unwrap();
        assert!(resolve(FileConfig::default(), &args).is_err());
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = FileConfig::load(Path::new("/nonexistent/lumen.json")).unwrap_err();
        assert!(format!("{:#}", err).contains("/nonexistent/lumen.json"));
    }
}
