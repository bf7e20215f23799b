//! Booth configuration.
//!
//! An optional `booth.toml` overrides the stock settings; every field has a
//! default, so an empty (or absent) file is valid. The source variants of
//! this tool disagreed on minimum photo count, padding, and orientation —
//! those divergences live here as explicit fields instead of separate code
//! paths.

use image::Rgba;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::strip::{MAX_PHOTOS, Orientation, StripLayout};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid TOML in {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Top-level `booth.toml` contents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BoothConfig {
    pub strip: StripSettings,
    pub output: OutputSettings,
}

/// `[strip]` — canvas geometry and the strip minimum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StripSettings {
    pub width: u32,
    pub height: u32,
    pub padding: u32,
    pub orientation: Orientation,
    /// Photos required in the gallery before a strip may be composed.
    pub min_photos: usize,
}

impl Default for StripSettings {
    fn default() -> Self {
        Self {
            width: 800,
            height: 200,
            padding: 0,
            orientation: Orientation::Horizontal,
            min_photos: 2,
        }
    }
}

/// `[output]` — encode settings for saved files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputSettings {
    /// JPEG quality, 1–100.
    pub quality: u32,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self { quality: 90 }
    }
}

impl BoothConfig {
    /// Parse and validate TOML text.
    pub fn from_toml(text: &str, origin: &str) -> Result<Self, ConfigError> {
        let config: BoothConfig = toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: origin.to_string(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a file path.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml(&text, &path.display().to_string())
    }

    /// Load from a file path, falling back to stock defaults when the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.strip.width == 0 || self.strip.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "strip canvas must be non-empty, got {}x{}",
                self.strip.width, self.strip.height
            )));
        }
        if self.strip.min_photos == 0 || self.strip.min_photos > MAX_PHOTOS {
            return Err(ConfigError::Invalid(format!(
                "strip.min_photos must be between 1 and {MAX_PHOTOS}, got {}",
                self.strip.min_photos
            )));
        }
        if self.output.quality == 0 || self.output.quality > 100 {
            return Err(ConfigError::Invalid(format!(
                "output.quality must be between 1 and 100, got {}",
                self.output.quality
            )));
        }
        Ok(())
    }
}

impl StripSettings {
    /// The compositor layout these settings describe.
    pub fn layout(&self) -> StripLayout {
        StripLayout {
            width: self.width,
            height: self.height,
            padding: self.padding,
            orientation: self.orientation,
            background: Rgba([255, 255, 255, 255]),
        }
    }
}

/// A documented `booth.toml` with every option at its stock value.
pub fn stock_config_toml() -> String {
    r#"# photostrip configuration. Every option is optional; values shown are
# the stock defaults.

[strip]
# Strip canvas in pixels.
width = 800
height = 200
# Gutter around the edge and between photos. 0 = photos touch.
padding = 0
# "horizontal" (left to right) or "vertical" (top to bottom).
orientation = "horizontal"
# Photos required in the gallery before a strip can be composed (1-4).
min_photos = 2

[output]
# JPEG quality for saved photos and strips (1-100).
quality = 90
"#
    .to_string()
}
