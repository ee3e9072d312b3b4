//! Rendering primitives (Cairo-based).
//!
//! This module defines the surface-level drawing types the road renderer uses:
//! - [`Color`]: 8-bit RGB color with the road palette defaults
//! - [`Canvas`]: fill/clear/present primitives
//! - [`CairoCanvas`]: PNG-publishing Cairo implementation
//! - [`RecordingCanvas`]: in-memory implementation for dry runs and tests
//! - [`RenderError`]: everything that can abort a draw pass

pub mod canvas;
pub mod color;
pub mod error;

pub use canvas::{CairoCanvas, Canvas, FillOp, RecordingCanvas};
pub use color::Color;
pub use error::RenderError;

#[allow(unused_imports)]
pub use color::{BLACK, BLUE, GREEN, ORANGE, PINK, RED, WHITE, YELLOW};
