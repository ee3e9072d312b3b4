//! Road data model: tracks, their ordered lanes, and the divider rules between them.
//!
//! A [`Road`] owns every [`Track`]; a track owns its [`Lane`]s. Anything that
//! needs to point back at a track or lane (lanes themselves, cars) stores a
//! [`TrackId`] or [`LaneId`] into the road instead of a reference.

pub mod divider;
pub mod layout;
pub mod render;
pub mod style;

pub use divider::{ClassifyError, DividerKind, classify};
pub use layout::{Band, BandKind, LaneStep, TrackLayout};
pub use render::{TrackDrawer, render_track};
pub use style::RoadStyle;

use crate::util::Point;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Compass direction of a track or lane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[serde(alias = "leste")]
    East,
    #[serde(alias = "oeste")]
    West,
    #[serde(alias = "norte")]
    North,
    #[serde(alias = "sul")]
    South,
    #[default]
    #[serde(alias = "parado")]
    Stopped,
}

impl Direction {
    /// East/west travel runs along the x-axis.
    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::East | Direction::West)
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::East => Direction::West,
            Direction::West => Direction::East,
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::Stopped => Direction::Stopped,
        }
    }
}

/// Travel sense of a lane relative to its track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Flow {
    #[default]
    Normal,
    Reverse,
}

/// Lane type; decides fill color and divider classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LaneKind {
    #[serde(alias = "acostamento")]
    Shoulder,
    #[serde(alias = "geral")]
    General,
}

impl fmt::Display for LaneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LaneKind::Shoulder => f.write_str("shoulder"),
            LaneKind::General => f.write_str("general"),
        }
    }
}

/// Index of a track inside a [`Road`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TrackId(pub usize);

/// Index of a lane: its track plus its position in the track's lane list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LaneId {
    pub track: TrackId,
    pub lane: usize,
}

/// One traffic lane within a track.
#[derive(Debug, Clone, PartialEq)]
pub struct Lane {
    pub kind: LaneKind,
    /// Direction relative to the track, as given by the scenario
    pub relative: Direction,
    /// Travel direction (sentido); may differ from the track for contraflow lanes
    pub sentido: Direction,
    track: Option<TrackId>,
}

impl Lane {
    pub fn new(kind: LaneKind, relative: Direction, sentido: Direction) -> Self {
        Self {
            kind,
            relative,
            sentido,
            track: None,
        }
    }

    /// Owning track, once the track has been added to a road.
    pub fn track(&self) -> Option<TrackId> {
        self.track
    }
}

/// A straight road segment with an ordered, left-to-right list of lanes.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    pub p1: Point,
    pub p2: Point,
    pub direction: Direction,
    lanes: Vec<Lane>,
}

impl Track {
    pub fn new(p1: Point, p2: Point, direction: Direction, lanes: Vec<Lane>) -> Self {
        Self {
            p1,
            p2,
            direction,
            lanes,
        }
    }

    /// Lanes in physical order; lane `i` and `i + 1` are adjacent.
    pub fn lanes(&self) -> &[Lane] {
        &self.lanes
    }

    pub fn lane(&self, index: usize) -> Option<&Lane> {
        self.lanes.get(index)
    }

    /// Euclidean distance between the endpoints.
    pub fn length(&self) -> f64 {
        self.p1.distance(self.p2)
    }

    /// Travel sense of lane `index`: lanes running against the track flow in reverse.
    pub fn flow_of(&self, index: usize) -> Option<Flow> {
        let lane = self.lanes.get(index)?;
        if self.direction != Direction::Stopped && lane.sentido == self.direction.opposite() {
            Some(Flow::Reverse)
        } else {
            Some(Flow::Normal)
        }
    }
}

/// Arena owning every track of a scenario.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Road {
    tracks: Vec<Track>,
}

impl Road {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a track and points its lanes back at it.
    pub fn push(&mut self, mut track: Track) -> TrackId {
        let id = TrackId(self.tracks.len());
        for lane in &mut track.lanes {
            lane.track = Some(id);
        }
        self.tracks.push(track);
        id
    }

    pub fn track(&self, id: TrackId) -> Option<&Track> {
        self.tracks.get(id.0)
    }

    pub fn lane(&self, id: LaneId) -> Option<&Lane> {
        self.track(id.track)?.lane(id.lane)
    }

    /// Resolves a track/lane index pair, if both exist.
    pub fn resolve(&self, track: usize, lane: usize) -> Option<LaneId> {
        let id = LaneId {
            track: TrackId(track),
            lane,
        };
        self.lane(id).map(|_| id)
    }

    pub fn tracks(&self) -> impl Iterator<Item = (TrackId, &Track)> {
        self.tracks
            .iter()
            .enumerate()
            .map(|(index, track)| (TrackId(index), track))
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}
