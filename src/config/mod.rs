//! Configuration file support for laneview.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/laneview/config.toml` (or a path given on the command line).
//! Settings include the road palette, band widths, surface size, frame pacing and
//! car kinematics.
//!
//! If no config file exists, the stock palette and a 600x500 surface at 60 fps are used.

pub mod enums;
pub mod types;

pub use enums::ColorSpec;
pub use types::{DisplayConfig, RoadConfig, SimulationConfig};

use crate::draw::Color;
use crate::road::RoadStyle;
use anyhow::{Context, Result, bail};
use log::{debug, info, warn};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// # Example TOML
/// ```toml
/// [road]
/// shoulder_color = [30, 30, 30]
/// divider_opposite_direction_color = "#C8C800"
/// divider_width = 2
/// lane_width = 0
///
/// [display]
/// width = 600
/// height = 500
/// background_color = "white"
/// fps = 60
///
/// [simulation]
/// tick_rate = 60
/// car_length = 10.0
/// ```
#[derive(Debug, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Road palette and band geometry
    #[serde(default)]
    pub road: RoadConfig,

    /// Output surface and frame pacing
    #[serde(default)]
    pub display: DisplayConfig,

    /// Car kinematics
    #[serde(default)]
    pub simulation: SimulationConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Validated ranges:
    /// - `road.divider_width`: 0 - 50
    /// - `road.lane_width`: 0 - 500
    /// - `road.car_size`: 1 - 100
    /// - `display.width`, `display.height`: 16 - 8192
    /// - `display.fps`: 1 - 240
    /// - `simulation.tick_rate`: 1 - 1000
    /// - `simulation.car_length`: 0.0 - 1000.0
    pub fn validate_and_clamp(&mut self) {
        clamp_i32("road.divider_width", &mut self.road.divider_width, 0, 50);
        clamp_i32("road.lane_width", &mut self.road.lane_width, 0, 500);
        clamp_i32("road.car_size", &mut self.road.car_size, 1, 100);
        clamp_i32("display.width", &mut self.display.width, 16, 8192);
        clamp_i32("display.height", &mut self.display.height, 16, 8192);

        if !(1..=240).contains(&self.display.fps) {
            warn!(
                "Invalid display.fps {}, clamping to 1-240 range",
                self.display.fps
            );
            self.display.fps = self.display.fps.clamp(1, 240);
        }

        if !(1..=1000).contains(&self.simulation.tick_rate) {
            warn!(
                "Invalid simulation.tick_rate {}, clamping to 1-1000 range",
                self.simulation.tick_rate
            );
            self.simulation.tick_rate = self.simulation.tick_rate.clamp(1, 1000);
        }

        if !(0.0..=1000.0).contains(&self.simulation.car_length) {
            warn!(
                "Invalid simulation.car_length {:.1}, clamping to 0.0-1000.0 range",
                self.simulation.car_length
            );
            self.simulation.car_length = if self.simulation.car_length.is_nan() {
                0.0
            } else {
                self.simulation.car_length.clamp(0.0, 1000.0)
            };
        }

        if self.display.filename_template.trim().is_empty() {
            warn!("Empty display.filename_template, falling back to the default");
            self.display.filename_template = DisplayConfig::default().filename_template;
        }
    }

    /// Resolved road style for the renderer.
    pub fn road_style(&self) -> RoadStyle {
        RoadStyle {
            shoulder: self.road.shoulder_color.to_color(),
            general_lane: self.road.general_lane_color.to_color(),
            divider_same_direction: self.road.divider_same_direction_color.to_color(),
            divider_opposite_direction: self.road.divider_opposite_direction_color.to_color(),
            divider_shoulder: self.road.divider_shoulder_color.to_color(),
            divider_width: self.road.divider_width,
            lane_width: self.road.lane_width,
            car_size: self.road.car_size,
        }
    }

    pub fn background(&self) -> Color {
        self.display.background_color.to_color()
    }

    /// Returns the path to the default configuration file.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("laneview");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from `path`, or from the default location when no
    /// path is given. A missing default file yields the defaults.
    ///
    /// # Errors
    /// Returns an error if:
    /// - An explicit `path` does not exist
    /// - No path is given and the config directory cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(path) if !path.exists() => {
                bail!("Config file {} does not exist", path.display());
            }
            Some(path) => path.to_path_buf(),
            None => Self::get_config_path()?,
        };

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config = Self::from_toml_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        config.validate_and_clamp();
        Ok(config)
    }

    /// Parses configuration text without validating it.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// JSON Schema describing the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}

fn clamp_i32(name: &str, value: &mut i32, min: i32, max: i32) {
    if !(min..=max).contains(value) {
        warn!("Invalid {} {}, clamping to {}-{} range", name, value, min, max);
        *value = (*value).clamp(min, max);
    }
}
