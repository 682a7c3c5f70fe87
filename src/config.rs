//! Render settings.
//!
//! Uses RON (Rusty Object Notation) for human-readable config files. Every field
//! is optional; missing fields take the defaults of [`RenderConfig::default`].
//!
//! ```ron
//! (
//!     width: 1024,
//!     height: 1024,
//!     mode: Wireframe,
//!     line_algorithm: Wu,
//!     base_color: (r: 255, g: 255, b: 255, a: 255),
//! )
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::colors::Color;
use crate::engine::RenderMode;
use crate::math::Vec3f;
use crate::render::LineAlgorithm;

/// Error type for config loading
#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    ParseError(ron::error::SpannedError),
    SerializeError(ron::Error),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl From<ron::error::SpannedError> for ConfigError {
    fn from(e: ron::error::SpannedError) -> Self {
        ConfigError::ParseError(e)
    }
}

impl From<ron::Error> for ConfigError {
    fn from(e: ron::Error) -> Self {
        ConfigError::SerializeError(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "Parse error: {}", e),
            ConfigError::SerializeError(e) => write!(f, "Serialize error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Settings for one offline render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub width: usize,
    pub height: usize,
    pub mode: RenderMode,
    /// Only used in wireframe mode.
    pub line_algorithm: LineAlgorithm,
    pub base_color: Color,
    pub background: Color,
    /// Direction the light travels in; normalized on use.
    pub light_direction: Vec3f,
    /// Rescale the mesh into the `[-1, 1]` cube before rendering.
    pub fit_to_unit_cube: bool,
    /// Flip the image on output so +y points up.
    pub flip_vertically: bool,
    /// Rasterize row bands on the rayon thread pool.
    pub parallel: bool,
    /// Rows per band in parallel mode.
    pub band_rows: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 800,
            mode: RenderMode::Shaded,
            line_algorithm: LineAlgorithm::Bresenham,
            base_color: Color::RED,
            background: Color::BLACK,
            light_direction: Vec3f::BACK,
            fit_to_unit_cube: false,
            flip_vertically: true,
            parallel: false,
            band_rows: 32,
        }
    }
}

impl RenderConfig {
    /// Load a config from a RON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_ron_str(&contents)
    }

    /// Parse a config from a RON string
    pub fn from_ron_str(s: &str) -> Result<Self, ConfigError> {
        Ok(ron::from_str(s)?)
    }

    /// Save a config to a RON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let config = ron::ser::PrettyConfig::new()
            .depth_limit(2)
            .indentor("  ".to_string());
        let contents = ron::ser::to_string_pretty(self, config)?;
        fs::write(path, contents)?;
        Ok(())
    }
}
