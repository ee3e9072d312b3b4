//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::draw::color;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Road palette and band geometry.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct RoadConfig {
    /// Fill color of shoulder lanes
    #[serde(default = "default_shoulder_color")]
    pub shoulder_color: ColorSpec,

    /// Fill color of general traffic lanes
    #[serde(default = "default_general_lane_color")]
    pub general_lane_color: ColorSpec,

    /// Divider between two lanes of the same kind
    #[serde(default = "default_divider_same_direction_color")]
    pub divider_same_direction_color: ColorSpec,

    /// Divider between lanes travelling in opposite directions
    #[serde(default = "default_divider_opposite_direction_color")]
    pub divider_opposite_direction_color: ColorSpec,

    /// Divider next to a shoulder
    #[serde(default = "default_divider_shoulder_color")]
    pub divider_shoulder_color: ColorSpec,

    /// Perpendicular step before each divider, in pixels (valid range: 0 - 50)
    #[serde(default = "default_divider_width")]
    pub divider_width: i32,

    /// Perpendicular step after each lane, in pixels (valid range: 0 - 500)
    /// The default of 0 places each lane at its divider's offset
    #[serde(default = "default_lane_width")]
    pub lane_width: i32,

    /// Side of the square drawn for each car, in pixels (valid range: 1 - 100)
    #[serde(default = "default_car_size")]
    pub car_size: i32,
}

impl Default for RoadConfig {
    fn default() -> Self {
        Self {
            shoulder_color: default_shoulder_color(),
            general_lane_color: default_general_lane_color(),
            divider_same_direction_color: default_divider_same_direction_color(),
            divider_opposite_direction_color: default_divider_opposite_direction_color(),
            divider_shoulder_color: default_divider_shoulder_color(),
            divider_width: default_divider_width(),
            lane_width: default_lane_width(),
            car_size: default_car_size(),
        }
    }
}

/// Output surface and frame pacing.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DisplayConfig {
    /// Surface width in pixels (valid range: 16 - 8192)
    #[serde(default = "default_width")]
    pub width: i32,

    /// Surface height in pixels (valid range: 16 - 8192)
    #[serde(default = "default_height")]
    pub height: i32,

    /// Color the frame is cleared to before drawing
    #[serde(default = "default_background_color")]
    pub background_color: ColorSpec,

    /// Target frames per second (valid range: 1 - 240)
    #[serde(default = "default_fps")]
    pub fps: u32,

    /// Output filename template (chrono format specifiers), without extension
    #[serde(default = "default_filename_template")]
    pub filename_template: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            background_color: default_background_color(),
            fps: default_fps(),
            filename_template: default_filename_template(),
        }
    }
}

/// Car kinematics settings.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct SimulationConfig {
    /// Simulation updates per second of simulated time (valid range: 1 - 1000)
    #[serde(default = "default_tick_rate")]
    pub tick_rate: u32,

    /// Car length subtracted from the track length for wrap-around (valid range: 0.0 - 1000.0)
    #[serde(default = "default_car_length")]
    pub car_length: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            tick_rate: default_tick_rate(),
            car_length: default_car_length(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_shoulder_color() -> ColorSpec {
    color::SHOULDER.into()
}

fn default_general_lane_color() -> ColorSpec {
    color::GENERAL_LANE.into()
}

fn default_divider_same_direction_color() -> ColorSpec {
    color::DIVIDER_SAME_DIRECTION.into()
}

fn default_divider_opposite_direction_color() -> ColorSpec {
    color::DIVIDER_OPPOSITE_DIRECTION.into()
}

fn default_divider_shoulder_color() -> ColorSpec {
    color::DIVIDER_SHOULDER.into()
}

fn default_divider_width() -> i32 {
    2
}

fn default_lane_width() -> i32 {
    0
}

fn default_car_size() -> i32 {
    6
}

fn default_width() -> i32 {
    600
}

fn default_height() -> i32 {
    500
}

fn default_background_color() -> ColorSpec {
    ColorSpec::Name("white".to_string())
}

fn default_fps() -> u32 {
    60
}

fn default_filename_template() -> String {
    "laneview_%Y-%m-%d_%H%M%S".to_string()
}

fn default_tick_rate() -> u32 {
    60
}

fn default_car_length() -> f64 {
    10.0
}
