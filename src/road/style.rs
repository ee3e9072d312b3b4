//! Colors and band widths used when laying out a track.

use super::{DividerKind, LaneKind};
use crate::draw::{Color, color};

/// Resolved rendering style for tracks.
///
/// Built from [`crate::config::RoadConfig`]; the [`Default`] impl carries the
/// stock palette.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoadStyle {
    pub shoulder: Color,
    pub general_lane: Color,
    pub divider_same_direction: Color,
    pub divider_opposite_direction: Color,
    pub divider_shoulder: Color,
    /// Offset added before each divider band
    pub divider_width: i32,
    /// Offset added after each lane band
    pub lane_width: i32,
    /// Side of the square drawn for each car
    pub car_size: i32,
}

impl Default for RoadStyle {
    fn default() -> Self {
        Self {
            shoulder: color::SHOULDER,
            general_lane: color::GENERAL_LANE,
            divider_same_direction: color::DIVIDER_SAME_DIRECTION,
            divider_opposite_direction: color::DIVIDER_OPPOSITE_DIRECTION,
            divider_shoulder: color::DIVIDER_SHOULDER,
            divider_width: 2,
            lane_width: 0,
            car_size: 6,
        }
    }
}

impl RoadStyle {
    pub fn lane_color(&self, kind: LaneKind) -> Color {
        match kind {
            LaneKind::Shoulder => self.shoulder,
            LaneKind::General => self.general_lane,
        }
    }

    pub fn divider_color(&self, kind: DividerKind) -> Color {
        match kind {
            DividerKind::Shoulder => self.divider_shoulder,
            DividerKind::SameDirection => self.divider_same_direction,
            DividerKind::OppositeDirection => self.divider_opposite_direction,
        }
    }
}
