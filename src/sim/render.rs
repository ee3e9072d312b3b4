//! Car markers drawn on top of the road.

use super::Car;
use crate::draw::RenderError;
use crate::road::{Flow, RoadStyle, Track, TrackLayout};
use crate::scene::{DrawContext, Drawable};
use crate::util::{Point, Rect, directional_rect};

/// Scene item drawing every car as a small square on its lane.
#[derive(Debug, Clone, Copy, Default)]
pub struct CarDrawer;

impl Drawable for CarDrawer {
    fn draw(&self, ctx: &mut DrawContext<'_>) -> Result<(), RenderError> {
        for car in ctx.cars {
            let track = ctx
                .road
                .track(car.lane.track)
                .ok_or(RenderError::MissingTrack(car.lane.track.0))?;
            let rect = car_rect(car, track, ctx.style)?;
            ctx.canvas.fill_rect(car.color, rect)?;
        }
        Ok(())
    }
}

/// Marker rectangle for `car`: its point along the track, moved onto its lane.
pub fn car_rect(car: &Car, track: &Track, style: &RoadStyle) -> Result<Rect, RenderError> {
    let missing = || RenderError::MissingLane {
        car: car.name.clone(),
    };
    let lane = track.lane(car.lane.lane).ok_or_else(missing)?;
    let offsets = TrackLayout::lane_offsets(track, style)?;
    let offset = *offsets.get(car.lane.lane).ok_or_else(missing)?;

    let (start, end) = match track.flow_of(car.lane.lane) {
        Some(Flow::Reverse) => (track.p2, track.p1),
        _ => (track.p1, track.p2),
    };
    let at = point_along(start, end, car.position, track.length());
    let corner = Point::new(
        at.x.saturating_add(style.car_size),
        at.y.saturating_add(style.car_size),
    );
    Ok(directional_rect(at, corner, lane.sentido, offset))
}

/// Point `distance` units from `start` toward `end`, clamped to the segment.
fn point_along(start: Point, end: Point, distance: f64, length: f64) -> Point {
    if length <= 0.0 {
        return start;
    }
    let t = (distance / length).clamp(0.0, 1.0);
    // Float casts saturate, so far-apart endpoints cannot overflow.
    let lerp = |a: i32, b: i32| (a as f64 + (b as f64 - a as f64) * t).round() as i32;
    Point::new(lerp(start.x, end.x), lerp(start.y, end.y))
}
