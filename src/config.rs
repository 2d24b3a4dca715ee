// src/config.rs

//! Defines the configuration structures for `circle-raster`.
//!
//! The config is read from a JSON file (see [`Config::load`]). Every section
//! carries `#[serde(default)]`, so a file only needs the keys it changes and
//! an empty object `{}` is a valid config.

use std::fs;
use std::path::Path;

use anyhow::{ensure, Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::circle::Radius;
use crate::color::Rgba;

// --- Top-Level Configuration Structure ---

/// Represents the complete configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Radius used when none is given on the command line or in a request.
    pub default_radius: u32,
    /// Largest radius any mode will render. Bounds the text grid or image
    /// allocated for one circle.
    pub max_radius: u32,
    /// Text renderer settings.
    pub text: TextConfig,
    /// Image renderer settings.
    pub image: ImageConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_radius: 3,
            max_radius: 4096,
            text: TextConfig::default(),
            image: ImageConfig::default(),
        }
    }
}

impl Config {
    /// Reads and validates a JSON config file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_json(&raw)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        debug!("Loaded config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// Parses and validates a config from a JSON string.
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(raw).context("Failed to parse config JSON")?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the radii the config names are usable.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.max_radius <= Radius::MAX,
            "max_radius {} exceeds the maximum of {}",
            self.max_radius,
            Radius::MAX
        );
        ensure!(
            self.default_radius <= self.max_radius,
            "default_radius {} exceeds max_radius {}",
            self.default_radius,
            self.max_radius
        );
        Ok(())
    }

    /// The default radius as a [`Radius`].
    pub fn default_radius(&self) -> Result<Radius> {
        Radius::new(self.default_radius).context("Invalid default_radius")
    }

    /// Rejects a radius above `max_radius` before anything is allocated
    /// for it.
    pub fn check_radius(&self, radius: Radius) -> Result<()> {
        ensure!(
            radius.get() <= self.max_radius,
            "radius {} exceeds max_radius {}",
            radius,
            self.max_radius
        );
        Ok(())
    }
}

// --- Text Configuration ---

/// Characters used by the text renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    /// Character marking circle pixels.
    pub stroke: char,
    /// Character for everything else.
    pub background: char,
}

impl Default for TextConfig {
    fn default() -> Self {
        TextConfig {
            stroke: '#',
            background: ' ',
        }
    }
}

// --- Image Configuration ---

/// Colors used by the image renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageConfig {
    pub stroke: Rgba,
    pub background: Rgba,
}

impl Default for ImageConfig {
    fn default() -> Self {
        ImageConfig {
            stroke: Rgba::WHITE,
            background: Rgba::TRANSPARENT,
        }
    }
}
