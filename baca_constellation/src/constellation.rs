// Constellation: every segment reachable from one partition within a range.
//
// Construction is eager. Each cell of the partition is transposed by octaves
// to every position that fits the range (`baca_pitch::transpose`), and the
// per-cell transposition sets are combined in odometer order (`combine.rs`).
// The cost is the product of the set sizes; the CC1 circuit's constellations
// hold 80 to 180 segments each.
//
// Segments are numbered from 1 in that order. A hash index from segment to
// number makes `number_of` and `contains` constant time; when two
// combinations sort to the same pitches, the lower number wins, matching a
// front-to-back scan.
//
// A constellation built by a `Circuit` knows its own 1-based position there
// (`number()`); that index is the only link back to the circuit. One built
// directly with `Constellation::new` has no number.

use crate::combine::combine_transpositions;
use crate::error::{ConstellationError, Result};
use crate::label::CellMap;
use crate::partition::Partition;
use crate::segment::Segment;
use baca_pitch::{Cell, PitchRange, octave_transpositions};
use rustc_hash::FxHashMap;
use std::fmt;
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub struct Constellation {
    number: Option<usize>,
    partition: Partition,
    pitch_range: PitchRange,
    segments: Vec<Segment>,
    numbers: FxHashMap<Segment, usize>,
}

impl Constellation {
    /// Expand a partition inside a range, outside of any circuit.
    pub fn new(partition: Partition, pitch_range: PitchRange) -> Self {
        Self::build(None, partition, pitch_range)
    }

    pub(crate) fn with_number(number: usize, partition: Partition, pitch_range: PitchRange) -> Self {
        Self::build(Some(number), partition, pitch_range)
    }

    fn build(number: Option<usize>, partition: Partition, pitch_range: PitchRange) -> Self {
        let sets: Vec<Vec<Cell>> = partition
            .cells()
            .iter()
            .map(|cell| octave_transpositions(cell, &pitch_range))
            .collect();

        for (index, set) in sets.iter().enumerate() {
            if set.is_empty() {
                warn!(
                    ?number,
                    cell = index,
                    range = %pitch_range,
                    "cell has no octave transposition inside the range; constellation is empty"
                );
            }
        }

        let segments = combine_transpositions(&sets);
        let mut numbers = FxHashMap::default();
        numbers.reserve(segments.len());
        for (i, segment) in segments.iter().enumerate() {
            numbers.entry(segment.clone()).or_insert(i + 1);
        }

        debug!(
            ?number,
            cells = sets.len(),
            segments = segments.len(),
            "expanded constellation"
        );

        Constellation {
            number,
            partition,
            pitch_range,
            segments,
            numbers,
        }
    }

    /// 1-based position in the owning circuit.
    pub fn number(&self) -> Option<usize> {
        self.number
    }

    pub fn partition(&self) -> &Partition {
        &self.partition
    }

    pub fn pitch_range(&self) -> PitchRange {
        self.pitch_range
    }

    /// All segments, in numbering order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of octave transpositions available to each cell. Their product
    /// is `len()`.
    pub fn transposition_counts(&self) -> Vec<usize> {
        self.partition
            .cells()
            .iter()
            .map(|cell| octave_transpositions(cell, &self.pitch_range).len())
            .collect()
    }

    /// The segment with the given 1-based number.
    pub fn segment_at(&self, number: usize) -> Result<&Segment> {
        number
            .checked_sub(1)
            .and_then(|i| self.segments.get(i))
            .ok_or(ConstellationError::SegmentIndexOutOfBounds {
                number,
                len: self.segments.len(),
            })
    }

    pub fn contains(&self, segment: &Segment) -> bool {
        self.numbers.contains_key(segment)
    }

    /// 1-based number of the first segment equal to `segment`.
    pub fn number_of(&self, segment: &Segment) -> Option<usize> {
        self.numbers.get(segment).copied()
    }

    /// The partition's own pitches, flattened and sorted.
    pub fn generator_segment(&self) -> Segment {
        self.partition.flattened()
    }

    /// Number of the generator segment. None only when some cell of the
    /// partition does not fit the range untransposed.
    pub fn generator_number(&self) -> Option<usize> {
        self.number_of(&self.generator_segment())
    }

    pub fn cell_map(&self) -> CellMap {
        CellMap::new(&self.partition)
    }
}

impl fmt::Display for Constellation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Constellation({})", self.segments.len())
    }
}
