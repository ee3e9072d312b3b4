//! RGB color type, road palette defaults and predefined color constants.

/// Represents an opaque RGB color with 8-bit components.
///
/// # Examples
///
/// ```
/// use laneview::draw::Color;
/// let asphalt = Color::rgb(15, 15, 15);
/// assert_eq!(asphalt.to_unit(), (15.0 / 255.0, 15.0 / 255.0, 15.0 / 255.0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
}

impl Color {
    /// Creates a new color from 0-255 components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Returns the components scaled to Cairo's 0.0-1.0 range.
    pub fn to_unit(self) -> (f64, f64, f64) {
        (
            self.r as f64 / 255.0,
            self.g as f64 / 255.0,
            self.b as f64 / 255.0,
        )
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

// ============================================================================
// Road palette defaults
// ============================================================================

/// Shoulder lane fill
pub const SHOULDER: Color = Color::rgb(30, 30, 30);

/// General lane fill
pub const GENERAL_LANE: Color = Color::rgb(15, 15, 15);

/// Divider between lanes of the same kind
pub const DIVIDER_SAME_DIRECTION: Color = Color::rgb(200, 200, 200);

/// Divider between lanes travelling in opposite directions
pub const DIVIDER_OPPOSITE_DIRECTION: Color = Color::rgb(200, 200, 0);

/// Divider next to a shoulder
pub const DIVIDER_SHOULDER: Color = Color::rgb(160, 160, 160);

// ============================================================================
// Named colors
// ============================================================================

pub const RED: Color = Color::rgb(255, 0, 0);
pub const GREEN: Color = Color::rgb(0, 255, 0);
pub const BLUE: Color = Color::rgb(0, 0, 255);
pub const YELLOW: Color = Color::rgb(255, 255, 0);
pub const ORANGE: Color = Color::rgb(255, 128, 0);
pub const PINK: Color = Color::rgb(255, 0, 255);
pub const WHITE: Color = Color::rgb(255, 255, 255);
pub const BLACK: Color = Color::rgb(0, 0, 0);
