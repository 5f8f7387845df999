// Shared pitch types for the baca constellation engine.
//
// Pitches are plain integers counted in semitones from middle C (C4 = 0).
// This crate holds everything that only needs pitches and ranges, with no
// knowledge of partitions, constellations, or circuits:
//
// - `pitch.rs`: the `Pitch` alias, pitch classes, and named-pitch parsing
//   (`"A0"`, `"C#4"`, `"Bb3"`)
// - `range.rs`: `PitchRange`, an immutable inclusive interval with a textual
//   form (`"[A0, C8]"`) used by config files
// - `cell.rs`: `Cell`, the non-empty pitch group transposed as a unit
// - `transpose.rs`: enumeration of every octave transposition of a cell that
//   fits inside a range
// - `error.rs`: `PitchError`
//
// Used by `baca_constellation`, which builds the outer-product segment lists
// on top of the transpositions produced here.

pub mod cell;
pub mod error;
pub mod pitch;
pub mod range;
pub mod transpose;

pub use cell::Cell;
pub use error::PitchError;
pub use pitch::{OCTAVE, Pitch, parse_pitch_name, pitch_class, pitch_name};
pub use range::PitchRange;
pub use transpose::{octave_shifts, octave_transpositions};
