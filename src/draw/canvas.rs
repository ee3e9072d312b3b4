//! Render targets: the fill/present primitives the road renderer draws through.

use super::color::Color;
use super::error::RenderError;
use crate::util::Rect;
use std::fs::File;
use std::path::PathBuf;

/// A surface that can be filled with solid rectangles and published as a frame.
pub trait Canvas {
    /// Fills the entire surface with `color`.
    fn clear(&mut self, color: Color) -> Result<(), RenderError>;

    /// Fills `rect` with `color`. Empty rectangles draw nothing.
    fn fill_rect(&mut self, color: Color, rect: Rect) -> Result<(), RenderError>;

    /// Publishes the completed frame.
    fn present(&mut self) -> Result<(), RenderError>;
}

/// Cairo image-surface canvas.
///
/// `present` writes the frame to `output` as a PNG when a path is set;
/// every frame overwrites the previous one so the file always holds the
/// latest state of the scene.
pub struct CairoCanvas {
    surface: cairo::ImageSurface,
    ctx: cairo::Context,
    output: Option<PathBuf>,
    frames_presented: u64,
}

impl CairoCanvas {
    /// Creates an RGB canvas of the given size.
    pub fn new(width: i32, height: i32, output: Option<PathBuf>) -> Result<Self, RenderError> {
        let surface = cairo::ImageSurface::create(cairo::Format::Rgb24, width, height)?;
        let ctx = cairo::Context::new(&surface)?;
        Ok(Self {
            surface,
            ctx,
            output,
            frames_presented: 0,
        })
    }

    /// Number of frames published so far.
    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    /// Releases the drawing context and returns the backing surface.
    pub fn into_surface(self) -> cairo::ImageSurface {
        drop(self.ctx);
        self.surface
    }
}

impl Canvas for CairoCanvas {
    fn clear(&mut self, color: Color) -> Result<(), RenderError> {
        let (r, g, b) = color.to_unit();
        self.ctx.set_source_rgb(r, g, b);
        self.ctx.paint()?;
        Ok(())
    }

    fn fill_rect(&mut self, color: Color, rect: Rect) -> Result<(), RenderError> {
        if rect.is_empty() {
            return Ok(());
        }
        let (r, g, b) = color.to_unit();
        self.ctx.set_source_rgb(r, g, b);
        self.ctx.rectangle(
            rect.x as f64,
            rect.y as f64,
            rect.width as f64,
            rect.height as f64,
        );
        self.ctx.fill()?;
        Ok(())
    }

    fn present(&mut self) -> Result<(), RenderError> {
        self.surface.flush();
        if let Some(path) = &self.output {
            let mut file = File::create(path)?;
            self.surface.write_to_png(&mut file)?;
            log::trace!("Frame {} written to {}", self.frames_presented, path.display());
        }
        self.frames_presented += 1;
        Ok(())
    }
}

/// A single recorded fill call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FillOp {
    pub color: Color,
    pub rect: Rect,
}

/// Canvas that records every call instead of rasterizing.
///
/// Used by `--check` style dry runs and by tests that assert on the exact
/// sequence of rectangles a track produces.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    /// Fill calls since the last clear, in draw order
    pub fills: Vec<FillOp>,
    /// Number of times the canvas was cleared
    pub clears: usize,
    /// Number of frames presented
    pub presents: usize,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill calls whose color matches `color`.
    pub fn fills_with(&self, color: Color) -> impl Iterator<Item = &FillOp> {
        self.fills.iter().filter(move |op| op.color == color)
    }
}

impl Canvas for RecordingCanvas {
    fn clear(&mut self, _color: Color) -> Result<(), RenderError> {
        self.fills.clear();
        self.clears += 1;
        Ok(())
    }

    fn fill_rect(&mut self, color: Color, rect: Rect) -> Result<(), RenderError> {
        self.fills.push(FillOp { color, rect });
        Ok(())
    }

    fn present(&mut self) -> Result<(), RenderError> {
        self.presents += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{RED, WHITE};

    fn pixel(surface: &mut cairo::ImageSurface, x: usize, y: usize) -> (u8, u8, u8) {
        let stride = surface.stride() as usize;
        let data = surface.data().unwrap();
        let offset = y * stride + x * 4;
        // Rgb24 is stored as native-endian 0xXXRRGGBB.
        let word = u32::from_ne_bytes([
            data[offset],
            data[offset + 1],
            data[offset + 2],
            data[offset + 3],
        ]);
        (
            ((word >> 16) & 0xff) as u8,
            ((word >> 8) & 0xff) as u8,
            (word & 0xff) as u8,
        )
    }

    #[test]
    fn cairo_canvas_fills_only_inside_rect() {
        let mut canvas = CairoCanvas::new(20, 20, None).unwrap();
        canvas.clear(WHITE).unwrap();
        canvas.fill_rect(RED, Rect::new(5, 5, 4, 4)).unwrap();
        canvas.present().unwrap();
        assert_eq!(canvas.frames_presented(), 1);

        let mut surface = canvas.into_surface();
        assert_eq!(pixel(&mut surface, 6, 6), (255, 0, 0));
        assert_eq!(pixel(&mut surface, 0, 0), (255, 255, 255));
        assert_eq!(pixel(&mut surface, 9, 9), (255, 255, 255));
    }

    #[test]
    fn cairo_canvas_writes_png_on_present() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.png");
        let mut canvas = CairoCanvas::new(8, 8, Some(path.clone())).unwrap();
        canvas.clear(WHITE).unwrap();
        canvas.present().unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn recording_canvas_resets_fills_on_clear() {
        let mut canvas = RecordingCanvas::new();
        canvas.fill_rect(RED, Rect::new(0, 0, 1, 1)).unwrap();
        canvas.clear(WHITE).unwrap();
        canvas.fill_rect(WHITE, Rect::new(0, 0, 2, 2)).unwrap();
        canvas.present().unwrap();

        assert_eq!(canvas.fills.len(), 1);
        assert_eq!(canvas.clears, 1);
        assert_eq!(canvas.presents, 1);
        assert_eq!(canvas.fills_with(WHITE).count(), 1);
    }
}
