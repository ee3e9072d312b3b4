//! Errors raised while drawing a frame.

use crate::road::ClassifyError;
use thiserror::Error;

/// Any failure that aborts the current draw pass.
///
/// None of these are recoverable mid-frame; the frame loop stops on the first
/// one and hands it to the caller.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Two adjacent lanes cannot be separated by any known divider.
    #[error(transparent)]
    Classification(#[from] ClassifyError),

    /// A drawable item was added to a scene without a draw implementation.
    #[error("draw is not implemented for {0}")]
    NotImplemented(&'static str),

    #[error("track {0} is not part of the road")]
    MissingTrack(usize),

    /// A car refers to a lane the road does not have.
    #[error("car '{car}' refers to a lane that is not part of the road")]
    MissingLane { car: String },

    #[error("cairo drawing failed: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("failed to encode frame as PNG: {0}")]
    Png(#[from] cairo::IoError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
