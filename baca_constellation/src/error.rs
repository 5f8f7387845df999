// Error type for constellation and circuit operations.
//
// Construction problems (bad ranges, empty cells or partitions, an empty
// circuit) and bounds faults on numbered lookups are errors. "Not found" on
// a content query (`number_of`, `find_pivot`, `locate`) is not: those return
// `Option`. The one exception is `Circuit::pivot_segments()`, which promises
// a pivot for every adjacent pair and reports the first pair without one.

use baca_pitch::{Pitch, PitchError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConstellationError>;

#[derive(Debug, Error)]
pub enum ConstellationError {
    #[error(transparent)]
    Pitch(#[from] PitchError),

    /// A partition with no cells.
    #[error("partition must contain at least one cell")]
    EmptyPartition,

    /// A circuit with no partitions.
    #[error("circuit must contain at least one constellation")]
    EmptyCircuit,

    /// `segment_at` called with a number outside `1..=len`.
    #[error("segment number {number} out of bounds (constellation has {len} segments)")]
    SegmentIndexOutOfBounds { number: usize, len: usize },

    /// A 0-based, possibly negative, constellation index beyond one wrap.
    #[error("constellation index {index} out of bounds (circuit has {len} constellations)")]
    ConstellationIndexOutOfBounds { index: isize, len: usize },

    /// A 1-based constellation number outside `1..=len`.
    #[error("constellation number {number} out of bounds (circuit has {len} constellations)")]
    ConstellationNumberOutOfBounds { number: usize, len: usize },

    #[error("no pivot from constellation {from} into constellation {to}")]
    PivotNotFound { from: usize, to: usize },

    /// A pitch that has no MIDI key once middle C is mapped to key 60.
    #[error("pitch {0} is outside the MIDI key range")]
    PitchOutOfMidiRange(Pitch),

    /// A tempo too slow for the 24-bit MIDI tempo field.
    #[error("tempo {0} BPM is below the slowest MIDI tempo of 4 BPM")]
    TempoOutOfRange(u16),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
