// Error type for pitch, range, and cell construction.

use crate::pitch::Pitch;
use thiserror::Error;

/// Structural problems found while building pitch data. All of these are
/// construction-time failures; nothing here is raised by a query.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PitchError {
    /// A range whose lower bound lies above its upper bound.
    #[error("invalid pitch range: low {low} is above high {high}")]
    InvalidRange { low: Pitch, high: Pitch },

    /// A cell with no pitches.
    #[error("cell must contain at least one pitch")]
    EmptyCell,

    #[error("invalid pitch name: {0:?}")]
    InvalidPitchName(String),

    /// Range text that is not of the form `[low, high]`.
    #[error("invalid pitch range syntax: {0:?}")]
    InvalidRangeSyntax(String),
}
