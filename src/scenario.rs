//! Scenario files: the JSON description of tracks, lanes and cars.
//!
//! Field names follow the original scenario format (`pistas`, `faixas`,
//! `carros`, ...); the English names are accepted as well.
//!
//! # Example
//! ```json
//! {
//!   "pistas": [
//!     { "p1": [0, 0], "p2": [100, 0], "direcao": "leste",
//!       "faixas": [
//!         { "tipo": "acostamento", "relativo": "leste", "sentido": "leste" },
//!         { "tipo": "geral", "relativo": "leste", "sentido": "leste" }
//!       ] }
//!   ],
//!   "carros": [
//!     { "nome": "a", "cor": "#FF0000", "pista": 0, "faixa": 1,
//!       "posicao": 0.0, "velocidade": 30.0, "destino": [100, 0],
//!       "max_rvel": 10.0, "aceleracao": 0.0 }
//!   ]
//! }
//! ```

use crate::config::ColorSpec;
use crate::road::{Direction, Lane, LaneId, LaneKind, Road, Track, TrackId};
use crate::sim::{Car, Simulation};
use crate::util::Point;
use log::{debug, info};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading a scenario or building its simulation.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("failed to read scenario {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid scenario: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("car '{0}' already exists")]
    DuplicateCar(String),

    #[error("car '{car}' refers to track {track}, which does not exist")]
    UnknownTrack { car: String, track: usize },

    #[error("car '{car}' refers to lane {lane} of track {track}, which does not exist")]
    UnknownLane {
        car: String,
        track: usize,
        lane: usize,
    },
}

/// Parsed scenario file, before any cross-reference is resolved.
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    #[serde(alias = "pistas")]
    pub tracks: Vec<TrackRecord>,

    #[serde(default, alias = "carros")]
    pub cars: Vec<CarRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackRecord {
    pub p1: Point,
    pub p2: Point,
    #[serde(alias = "direcao")]
    pub direction: Direction,
    #[serde(alias = "faixas")]
    pub lanes: Vec<LaneRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LaneRecord {
    #[serde(alias = "tipo")]
    pub kind: LaneKind,
    #[serde(default, alias = "relativo")]
    pub relative: Direction,
    #[serde(alias = "sentido")]
    pub travel: Direction,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CarRecord {
    #[serde(alias = "nome")]
    pub name: String,
    #[serde(default = "default_car_color", alias = "cor")]
    pub color: ColorSpec,
    #[serde(alias = "pista")]
    pub track: usize,
    #[serde(alias = "faixa")]
    pub lane: usize,
    #[serde(default, alias = "posicao")]
    pub position: f64,
    #[serde(default, alias = "velocidade")]
    pub velocity: f64,
    #[serde(alias = "destino")]
    pub destination: Point,
    #[serde(default, alias = "max_rvel")]
    pub max_relative_velocity: f64,
    #[serde(default, alias = "aceleracao")]
    pub acceleration: f64,
}

fn default_car_color() -> ColorSpec {
    ColorSpec::Name("#FF0000".to_string())
}

impl Scenario {
    pub fn from_json_str(json: &str) -> Result<Self, ScenarioError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a scenario file.
    pub fn load(path: &Path) -> Result<Self, ScenarioError> {
        let json = fs::read_to_string(path).map_err(|source| ScenarioError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let scenario = Self::from_json_str(&json)?;
        info!(
            "Loaded scenario from {}: {} tracks, {} cars",
            path.display(),
            scenario.tracks.len(),
            scenario.cars.len()
        );
        Ok(scenario)
    }

    /// Builds the road arena, in file order.
    pub fn road(&self) -> Road {
        let mut road = Road::new();
        for record in &self.tracks {
            let lanes = record
                .lanes
                .iter()
                .map(|lane| Lane::new(lane.kind, lane.relative, lane.travel))
                .collect();
            let id = road.push(Track::new(record.p1, record.p2, record.direction, lanes));
            debug!("Track {} has {} lanes", id.0, record.lanes.len());
        }
        road
    }

    /// Builds the road and resolves every car onto it.
    pub fn build(&self, tick_rate: u32, car_length: f64) -> Result<Simulation, ScenarioError> {
        let cars = self
            .cars
            .iter()
            .map(|record| Car {
                name: record.name.clone(),
                color: record.color.to_color(),
                lane: LaneId {
                    track: TrackId(record.track),
                    lane: record.lane,
                },
                position: record.position,
                velocity: record.velocity,
                destination: record.destination,
                max_relative_velocity: record.max_relative_velocity,
                acceleration: record.acceleration,
            })
            .collect();
        Simulation::new(self.road(), cars, tick_rate, car_length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::Color;

    const SCENARIO: &str = r##"{
        "pistas": [
            { "p1": [0, 0], "p2": [100, 20], "direcao": "leste",
              "faixas": [
                { "tipo": "acostamento", "relativo": "leste", "sentido": "leste" },
                { "tipo": "geral", "relativo": "leste", "sentido": "leste" },
                { "tipo": "geral", "relativo": "oeste", "sentido": "oeste" }
              ] }
        ],
        "carros": [
            { "nome": "a", "cor": "#00FF00", "pista": 0, "faixa": 1,
              "posicao": 5.0, "velocidade": 30.0, "destino": [100, 0],
              "max_rvel": 10.0, "aceleracao": 0.0 }
        ]
    }"##;

    #[test]
    fn parses_original_field_names() {
        let scenario = Scenario::from_json_str(SCENARIO).unwrap();
        assert_eq!(scenario.tracks.len(), 1);
        assert_eq!(scenario.tracks[0].lanes[2].travel, Direction::West);

        let sim = scenario.build(60, 10.0).unwrap();
        let car = sim.car("a").unwrap();
        assert_eq!(car.color, Color::rgb(0, 255, 0));
        assert_eq!(car.lane.lane, 1);
        assert_eq!(sim.road().len(), 1);
    }

    #[test]
    fn accepts_english_names_and_missing_cars() {
        let json = r#"{ "tracks": [ { "p1": [0, 0], "p2": [0, 50], "direction": "north",
            "lanes": [ { "kind": "general", "travel": "south" } ] } ] }"#;
        let scenario = Scenario::from_json_str(json).unwrap();
        assert!(scenario.cars.is_empty());
        let road = scenario.road();
        let lane = road.resolve(0, 0).and_then(|id| road.lane(id)).unwrap();
        assert_eq!(lane.relative, Direction::Stopped);
        assert_eq!(lane.sentido, Direction::South);
    }

    #[test]
    fn duplicate_car_names_fail_to_build() {
        let mut scenario = Scenario::from_json_str(SCENARIO).unwrap();
        let twin = scenario.cars[0].clone();
        scenario.cars.push(twin);
        let err = scenario.build(60, 10.0).unwrap_err();
        assert_eq!(err.to_string(), "car 'a' already exists");
    }

    #[test]
    fn unresolved_indices_fail_to_build() {
        let mut scenario = Scenario::from_json_str(SCENARIO).unwrap();
        scenario.cars[0].track = 4;
        assert!(matches!(
            scenario.build(60, 10.0),
            Err(ScenarioError::UnknownTrack { track: 4, .. })
        ));

        scenario.cars[0].track = 0;
        scenario.cars[0].lane = 9;
        assert!(matches!(
            scenario.build(60, 10.0),
            Err(ScenarioError::UnknownLane { lane: 9, .. })
        ));
    }

    #[test]
    fn unknown_direction_is_a_parse_error() {
        let json = r#"{ "pistas": [ { "p1": [0, 0], "p2": [1, 1], "direcao": "up", "faixas": [] } ] }"#;
        assert!(matches!(
            Scenario::from_json_str(json),
            Err(ScenarioError::Parse(_))
        ));
    }
}
