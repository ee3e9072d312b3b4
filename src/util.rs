//! Geometry and color parsing helpers.
//!
//! This module provides:
//! - [`Point`] and [`Rect`] integer geometry types
//! - [`rect`]: order-independent bounding rectangle of two points
//! - [`directional_rect`]: the same rectangle shifted perpendicular to a travel axis
//! - Color name / hex parsing used by the scenario and config loaders

use crate::draw::{Color, color::*};
use crate::road::Direction;
use serde::{Deserialize, Serialize};

// ============================================================================
// Geometry
// ============================================================================

/// A 2-D integer point in screen space.
///
/// Deserializes from a two element array (`[x, y]`) to match scenario files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "[i32; 2]", into = "[i32; 2]")]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance between two points.
    pub fn distance(self, other: Point) -> f64 {
        let dx = other.x as f64 - self.x as f64;
        let dy = other.y as f64 - self.y as f64;
        (dx * dx + dy * dy).sqrt()
    }
}

impl From<[i32; 2]> for Point {
    fn from([x, y]: [i32; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Point> for [i32; 2] {
    fn from(point: Point) -> Self {
        [point.x, point.y]
    }
}

/// Axis-aligned rectangle in screen coordinates.
///
/// Unlike a damage region, a zero width or height is allowed here: a track
/// drawn between two points on the same row produces a zero-height band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns true if the rectangle covers no pixels.
    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Returns true if `(px, py)` lies inside the rectangle (max edges exclusive).
    pub fn contains(&self, px: i32, py: i32) -> bool {
        let (px, py) = (px as i64, py as i64);
        let (x, y) = (self.x as i64, self.y as i64);
        px >= x && px < x + self.width as i64 && py >= y && py < y + self.height as i64
    }
}

/// Returns the axis-aligned bounding rectangle of two points.
///
/// The result is the same whichever point comes first and never has a
/// negative width or height. Extents wider than `i32::MAX` saturate.
pub fn rect(p1: Point, p2: Point) -> Rect {
    Rect {
        x: p1.x.min(p2.x),
        y: p1.y.min(p2.y),
        width: extent(p1.x, p2.x),
        height: extent(p1.y, p2.y),
    }
}

fn extent(a: i32, b: i32) -> i32 {
    i32::try_from(a.abs_diff(b)).unwrap_or(i32::MAX)
}

/// Returns the rectangle of `p1`-`p2` shifted by `offset` across the travel axis.
///
/// East/west travel is horizontal, so the band moves along y. Every other
/// direction, [`Direction::Stopped`] included, moves the band along x.
/// Shifted coordinates saturate at the `i32` bounds.
pub fn directional_rect(p1: Point, p2: Point, direction: Direction, offset: i32) -> Rect {
    if direction.is_horizontal() {
        rect(
            Point::new(p1.x, p1.y.saturating_add(offset)),
            Point::new(p2.x, p2.y.saturating_add(offset)),
        )
    } else {
        rect(
            Point::new(p1.x.saturating_add(offset), p1.y),
            Point::new(p2.x.saturating_add(offset), p2.y),
        )
    }
}

// ============================================================================
// Color Parsing
// ============================================================================

/// Maps color name strings to Color values.
///
/// # Supported Names (case-insensitive)
/// - "red", "green", "blue", "yellow", "orange", "pink", "white", "black"
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "yellow" => Some(YELLOW),
        "orange" => Some(ORANGE),
        "pink" => Some(PINK),
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        _ => None,
    }
}

/// Parses a `#RRGGBB` (or `RRGGBB`) hex string.
pub fn hex_to_color(value: &str) -> Option<Color> {
    let hex = value.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some(Color::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Parses either a hex string or a color name.
pub fn parse_color(value: &str) -> Option<Color> {
    if value.trim_start().starts_with('#') {
        hex_to_color(value)
    } else {
        name_to_color(value).or_else(|| hex_to_color(value))
    }
}

// ============================================================================
// Output Naming
// ============================================================================

/// Generates a filename from a chrono template and the current local time.
///
/// # Arguments
/// * `template` - Template string with chrono format specifiers
/// * `extension` - File extension (e.g., "png")
pub fn generate_filename(template: &str, extension: &str) -> String {
    let now = chrono::Local::now();
    format!("{}.{}", now.format(template), extension)
}
