//! Target canvas dimensions, read from a Manim-style `manim.cfg` INI file.
//!
//! Only the `[CLI]` section's `frame_width` and `frame_height` keys are
//! consulted. A missing file, section, or key falls back to Manim's defaults;
//! a malformed value is logged and replaced by the default rather than
//! aborting the run.

use std::path::Path;

use crate::error::{ScenecastError, ScenecastResult};

pub const DEFAULT_FRAME_WIDTH: f64 = 14.0;
pub const DEFAULT_FRAME_HEIGHT: f64 = 8.0;

/// The fixed output coordinate space every frame is mapped into.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CanvasConfig {
    pub frame_width: f64,
    pub frame_height: f64,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            frame_width: DEFAULT_FRAME_WIDTH,
            frame_height: DEFAULT_FRAME_HEIGHT,
        }
    }
}

impl CanvasConfig {
    /// Load canvas dimensions from `path`, falling back to defaults for
    /// anything absent or malformed. A missing config file is not an error.
    pub fn load(path: &Path) -> Self {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) => {
                tracing::debug!("config '{}' not read ({err}), using defaults", path.display());
                return Self::default();
            }
        };
        Self::from_ini(&text)
    }

    /// Parse the `[CLI]` section out of INI text.
    pub fn from_ini(text: &str) -> Self {
        let mut cfg = Self::default();
        let mut in_cli = false;

        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }
            if let Some(section) = line.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
                in_cli = section.trim() == "CLI";
                continue;
            }
            if !in_cli {
                continue;
            }
            let Some((key, value)) = line.split_once(['=', ':']) else {
                continue;
            };
            let (key, value) = (key.trim(), value.trim());
            let slot = match key {
                "frame_width" => &mut cfg.frame_width,
                "frame_height" => &mut cfg.frame_height,
                _ => continue,
            };
            match parse_dimension(key, value) {
                Ok(v) => *slot = v,
                Err(err) => tracing::warn!("{err}, keeping {}", *slot),
            }
        }

        cfg
    }
}

fn parse_dimension(key: &str, value: &str) -> ScenecastResult<f64> {
    value
        .parse::<f64>()
        .map_err(|_| ScenecastError::config(format!("{key} has non-numeric value '{value}'")))
}
