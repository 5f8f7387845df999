// Octave transposition of a cell within a pitch range.
//
// For a cell and a range, the valid shifts are the multiples of 12 that keep
// every pitch of the shifted cell inside the range. Only the cell's lowest
// and highest pitch matter: the shift must lift the lowest pitch to at least
// `range.low()` and keep the highest pitch at most `range.high()`. That gives
// a contiguous run of octave counts `k_min..=k_max`, returned lowest register
// first.
//
// A cell wider than the range, or one that cannot reach it by octaves, has no
// valid shift and yields an empty list. That is an ordinary result: the caller
// decides whether an empty transposition set matters.
//
// The arithmetic runs in `i64`: a cell near the ends of `Pitch` can need a
// shift that is not itself a valid `Pitch`, even though every shifted pitch
// lands inside the range.

use crate::cell::Cell;
use crate::pitch::OCTAVE;
use crate::range::PitchRange;

/// Every octave shift (in semitones) that keeps the whole cell inside the
/// range, in increasing order. Shift 0 appears iff the cell already fits.
pub fn octave_shifts(cell: &Cell, range: &PitchRange) -> Vec<i64> {
    let (lowest, highest) = cell.bounds();
    let (lowest, highest) = (i64::from(lowest), i64::from(highest));
    let (low, high) = (i64::from(range.low()), i64::from(range.high()));
    let octave = i64::from(OCTAVE);
    // Smallest k with lowest + 12k >= low (ceiling division).
    let k_min = (low - lowest + octave - 1).div_euclid(octave);
    // Largest k with highest + 12k <= high (floor division).
    let k_max = (high - highest).div_euclid(octave);
    (k_min..=k_max).map(|k| k * octave).collect()
}

/// Every octave transposition of the cell that lies inside the range,
/// lowest register first. Each returned cell has the input's length and order.
pub fn octave_transpositions(cell: &Cell, range: &PitchRange) -> Vec<Cell> {
    octave_shifts(cell, range)
        .into_iter()
        .filter_map(|shift| cell.transposed(shift))
        .collect()
}
