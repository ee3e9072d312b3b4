//! Divider classification between two adjacent lanes.

use super::{Lane, LaneKind};
use log::debug;
use thiserror::Error;

/// Which divider separates two adjacent lanes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DividerKind {
    /// One side is a shoulder
    Shoulder,
    /// Lanes of the same kind
    SameDirection,
    /// Lanes travelling in opposite directions
    OppositeDirection,
}

/// Adjacent lanes that no divider can separate. Always fatal for the frame.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassifyError {
    #[error("consecutive shoulder lanes ({prev} followed by {next})")]
    ConsecutiveShoulders { prev: LaneKind, next: LaneKind },

    #[error("unrecognized lane pair: {prev} {next}")]
    Unrecognized { prev: LaneKind, next: LaneKind },
}

/// Classifies the divider between `prev` and the lane drawn after it, `next`.
///
/// Rules are tried in order and the first match wins:
/// 1. one shoulder and one general lane, in either order
/// 2. two shoulders (error)
/// 3. same kind
/// 4. different travel directions
/// 5. anything else (error)
///
/// Rule 3 only compares kinds, so two general lanes always get the
/// same-direction divider whatever their `sentido`.
pub fn classify(prev: &Lane, next: &Lane) -> Result<DividerKind, ClassifyError> {
    use LaneKind::{General, Shoulder};

    let kinds = (prev.kind, next.kind);
    if matches!(kinds, (Shoulder, General) | (General, Shoulder)) {
        debug!("divider rule 1: {} / {}", prev.kind, next.kind);
        Ok(DividerKind::Shoulder)
    } else if kinds == (Shoulder, Shoulder) {
        debug!("divider rule 2: {} / {}", prev.kind, next.kind);
        Err(ClassifyError::ConsecutiveShoulders {
            prev: prev.kind,
            next: next.kind,
        })
    } else if prev.kind == next.kind {
        debug!("divider rule 3: {} / {}", prev.kind, next.kind);
        Ok(DividerKind::SameDirection)
    } else if prev.sentido != next.sentido {
        debug!("divider rule 4: {:?} / {:?}", prev.sentido, next.sentido);
        Ok(DividerKind::OppositeDirection)
    } else {
        debug!("divider rule 5: {} / {}", prev.kind, next.kind);
        Err(ClassifyError::Unrecognized {
            prev: prev.kind,
            next: next.kind,
        })
    }
}
