//! Track rendering onto a [`Canvas`].

use super::layout::TrackLayout;
use super::style::RoadStyle;
use super::{Track, TrackId};
use crate::draw::{Canvas, RenderError};
use crate::scene::{DrawContext, Drawable};

/// Renders every divider and lane band of `track`, in layout order.
///
/// Bands are filled as they are produced, so when a lane pair cannot be
/// classified nothing belonging to the offending lane reaches the canvas.
pub fn render_track(
    canvas: &mut dyn Canvas,
    track: &Track,
    style: &RoadStyle,
) -> Result<(), RenderError> {
    for step in TrackLayout::new(track, style) {
        let step = step?;
        if let Some(divider) = step.divider {
            canvas.fill_rect(divider.color, divider.rect)?;
        }
        canvas.fill_rect(step.lane.color, step.lane.rect)?;
    }
    Ok(())
}

/// Scene item drawing one track of the road.
#[derive(Debug, Clone, Copy)]
pub struct TrackDrawer {
    pub track: TrackId,
}

impl TrackDrawer {
    pub fn new(track: TrackId) -> Self {
        Self { track }
    }
}

impl Drawable for TrackDrawer {
    fn draw(&self, ctx: &mut DrawContext<'_>) -> Result<(), RenderError> {
        let track = ctx
            .road
            .track(self.track)
            .ok_or(RenderError::MissingTrack(self.track.0))?;
        render_track(&mut *ctx.canvas, track, ctx.style).inspect_err(|err| {
            log::error!("Failed to render track {}: {}", self.track.0, err);
        })
    }
}
