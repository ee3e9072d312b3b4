//! Car simulation: longitudinal position updates along fixed lanes.
//!
//! The simulation owns the [`Road`] and every [`Car`]. Cars refer to their
//! lane by [`LaneId`], checked once in [`Simulation::new`].

pub mod render;

pub use render::CarDrawer;

use crate::draw::Color;
use crate::road::{LaneId, Road};
use crate::scenario::ScenarioError;
use crate::util::Point;
use log::{debug, trace};
use std::collections::HashSet;

/// A simulated vehicle travelling along one lane.
#[derive(Debug, Clone, PartialEq)]
pub struct Car {
    pub name: String,
    pub color: Color,
    pub lane: LaneId,
    /// Distance travelled from the start of the track
    pub position: f64,
    /// Distance per second
    pub velocity: f64,
    pub destination: Point,
    pub max_relative_velocity: f64,
    /// Not used by the kinematics yet
    pub acceleration: f64,
}

/// Owns the road and the cars driving on it.
#[derive(Debug, Clone)]
pub struct Simulation {
    road: Road,
    cars: Vec<Car>,
    tick_rate: u32,
    car_length: f64,
    ticks: u64,
}

impl Simulation {
    /// Creates a simulation, rejecting duplicate car names and dangling lanes.
    pub fn new(
        road: Road,
        cars: Vec<Car>,
        tick_rate: u32,
        car_length: f64,
    ) -> Result<Self, ScenarioError> {
        let mut names = HashSet::new();
        for car in &cars {
            if !names.insert(car.name.as_str()) {
                return Err(ScenarioError::DuplicateCar(car.name.clone()));
            }
            if road.track(car.lane.track).is_none() {
                return Err(ScenarioError::UnknownTrack {
                    car: car.name.clone(),
                    track: car.lane.track.0,
                });
            }
            if road.lane(car.lane).is_none() {
                return Err(ScenarioError::UnknownLane {
                    car: car.name.clone(),
                    track: car.lane.track.0,
                    lane: car.lane.lane,
                });
            }
        }
        debug!(
            "Simulation ready: {} tracks, {} cars, {} ticks/s",
            road.len(),
            cars.len(),
            tick_rate
        );
        Ok(Self {
            road,
            cars,
            tick_rate: tick_rate.max(1),
            car_length,
            ticks: 0,
        })
    }

    pub fn road(&self) -> &Road {
        &self.road
    }

    pub fn cars(&self) -> &[Car] {
        &self.cars
    }

    pub fn car(&self, name: &str) -> Option<&Car> {
        self.cars.iter().find(|car| car.name == name)
    }

    /// Number of ticks simulated so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Advances every car by one tick.
    ///
    /// A car that ends the tick past `track length - car length` restarts at
    /// the beginning of its track.
    pub fn update(&mut self) {
        let tick_rate = self.tick_rate as f64;
        for car in &mut self.cars {
            let Some(track) = self.road.track(car.lane.track) else {
                continue;
            };
            car.position += car.velocity / tick_rate;
            if car.position > track.length() - self.car_length {
                trace!("Car '{}' wrapped at {:.2}", car.name, car.position);
                car.position = 0.0;
            }
        }
        self.ticks += 1;
    }

    /// Runs the single update belonging to the next frame.
    pub fn jump_to_next_tick(&mut self) {
        self.update();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::RED;
    use crate::road::{Direction, Lane, LaneKind, Track, TrackId};

    fn road() -> Road {
        let mut road = Road::new();
        road.push(Track::new(
            Point::new(0, 0),
            Point::new(100, 0),
            Direction::East,
            vec![Lane::new(LaneKind::General, Direction::East, Direction::East)],
        ));
        road
    }

    fn car(name: &str, position: f64, velocity: f64) -> Car {
        Car {
            name: name.to_string(),
            color: RED,
            lane: LaneId {
                track: TrackId(0),
                lane: 0,
            },
            position,
            velocity,
            destination: Point::new(100, 0),
            max_relative_velocity: 10.0,
            acceleration: 0.0,
        }
    }

    #[test]
    fn car_exactly_at_threshold_keeps_position() {
        let mut sim = Simulation::new(road(), vec![car("a", 90.0, 0.0)], 60, 10.0).unwrap();
        sim.update();
        assert_eq!(sim.car("a").unwrap().position, 90.0);
    }

    #[test]
    fn car_one_unit_past_threshold_wraps_to_zero() {
        let mut sim = Simulation::new(road(), vec![car("a", 91.0, 0.0)], 60, 10.0).unwrap();
        sim.update();
        assert_eq!(sim.car("a").unwrap().position, 0.0);
    }

    #[test]
    fn position_advances_by_velocity_over_tick_rate() {
        let mut sim = Simulation::new(road(), vec![car("a", 0.0, 30.0)], 60, 10.0).unwrap();
        sim.jump_to_next_tick();
        sim.jump_to_next_tick();
        assert!((sim.car("a").unwrap().position - 1.0).abs() < 1e-9);
        assert_eq!(sim.ticks(), 2);
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let err = Simulation::new(road(), vec![car("a", 0.0, 1.0), car("a", 5.0, 1.0)], 60, 10.0)
            .unwrap_err();
        assert!(matches!(err, ScenarioError::DuplicateCar(name) if name == "a"));
    }

    #[test]
    fn dangling_lane_is_rejected() {
        let mut stray = car("b", 0.0, 1.0);
        stray.lane.lane = 3;
        let err = Simulation::new(road(), vec![stray], 60, 10.0).unwrap_err();
        assert!(matches!(err, ScenarioError::UnknownLane { lane: 3, .. }));
    }
}
