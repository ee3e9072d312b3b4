//! Lane band layout: turns a track's ordered lanes into colored rectangles.

use super::divider::{ClassifyError, DividerKind, classify};
use super::style::RoadStyle;
use super::{Lane, Track};
use crate::draw::Color;
use crate::util::{Rect, directional_rect};

/// What a band represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BandKind {
    Divider(DividerKind),
    /// Lane at this index of the track
    Lane(usize),
}

/// A filled rectangle produced by the layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Band {
    pub kind: BandKind,
    pub color: Color,
    pub rect: Rect,
}

/// Bands produced for one lane: the divider before it (absent for the first
/// lane) and the lane itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaneStep {
    pub index: usize,
    /// Perpendicular offset the lane band was placed at
    pub offset: i32,
    pub divider: Option<Band>,
    pub lane: Band,
}

/// Walks a track's lanes in order, one [`LaneStep`] per lane.
///
/// The running offset starts at zero. Each divider advances it by the divider
/// width before being placed along the track's direction; each lane is placed
/// at the current offset along its own travel direction. The first
/// classification error is yielded once and ends the walk.
pub struct TrackLayout<'a> {
    track: &'a Track,
    style: &'a RoadStyle,
    next_index: usize,
    offset: i32,
    prev: Option<&'a Lane>,
    failed: bool,
}

impl<'a> TrackLayout<'a> {
    pub fn new(track: &'a Track, style: &'a RoadStyle) -> Self {
        Self {
            track,
            style,
            next_index: 0,
            offset: 0,
            prev: None,
            failed: false,
        }
    }

    /// Collects the offset of every lane, failing on the first bad divider.
    pub fn lane_offsets(track: &'a Track, style: &'a RoadStyle) -> Result<Vec<i32>, ClassifyError> {
        Self::new(track, style)
            .map(|step| step.map(|step| step.offset))
            .collect()
    }

    fn divider_before(&mut self, lane: &Lane) -> Result<Option<Band>, ClassifyError> {
        let Some(prev) = self.prev else {
            return Ok(None);
        };
        let kind = classify(prev, lane)?;
        self.offset = self.offset.saturating_add(self.style.divider_width);
        Ok(Some(Band {
            kind: BandKind::Divider(kind),
            color: self.style.divider_color(kind),
            rect: directional_rect(self.track.p1, self.track.p2, self.track.direction, self.offset),
        }))
    }
}

/// Offset for the band after a lane.
///
/// With the default zero lane width every lane starts where its divider
/// ends, so lanes overlap and only the dividers step outward.
fn advance_past_lane(offset: i32, style: &RoadStyle) -> i32 {
    offset.saturating_add(style.lane_width)
}

impl<'a> Iterator for TrackLayout<'a> {
    type Item = Result<LaneStep, ClassifyError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let track = self.track;
        let index = self.next_index;
        let lane = track.lanes().get(index)?;
        self.next_index += 1;

        let divider = match self.divider_before(lane) {
            Ok(divider) => divider,
            Err(err) => {
                self.failed = true;
                return Some(Err(err));
            }
        };

        let step = LaneStep {
            index,
            offset: self.offset,
            divider,
            lane: Band {
                kind: BandKind::Lane(index),
                color: self.style.lane_color(lane.kind),
                rect: directional_rect(track.p1, track.p2, lane.sentido, self.offset),
            },
        };

        self.prev = Some(lane);
        self.offset = advance_past_lane(self.offset, self.style);
        Some(Ok(step))
    }
}
