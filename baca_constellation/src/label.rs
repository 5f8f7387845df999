// Plain-data labels for segments.
//
// Engraving code marks each chord with the constellation and segment it came
// from, and colors every note by the partition cell that produced it. Both
// are computed here as data so the caller can render them however it likes:
//
// - `SegmentLabel` is the `(constellation, segment)` number pair, displayed
//   as `"3-60"`.
// - `CellMap` sends a pitch to the index of the cell it belongs to. Cells are
//   only ever moved by octaves, so a pitch class identifies its cell.

use crate::partition::Partition;
use crate::segment::Segment;
use baca_pitch::{Pitch, pitch_class};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a segment lives inside a circuit. Both numbers are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SegmentLabel {
    pub constellation: usize,
    pub segment: usize,
}

impl fmt::Display for SegmentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.constellation, self.segment)
    }
}

/// Pitch class to partition-cell lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellMap {
    cells: [Option<usize>; 12],
}

impl CellMap {
    /// When two cells share a pitch class, the earlier cell keeps it.
    pub fn new(partition: &Partition) -> Self {
        let mut cells = [None; 12];
        for (index, cell) in partition.cells().iter().enumerate() {
            for &pitch in cell.pitches() {
                let slot = &mut cells[pitch_class(pitch) as usize];
                if slot.is_none() {
                    *slot = Some(index);
                }
            }
        }
        CellMap { cells }
    }

    /// Index of the cell the pitch belongs to, or None for a foreign pitch class.
    pub fn cell_of(&self, pitch: Pitch) -> Option<usize> {
        self.cells[pitch_class(pitch) as usize]
    }

    /// `cell_of` for every pitch of the segment, in segment order.
    pub fn classify(&self, segment: &Segment) -> Vec<Option<usize>> {
        segment.pitches().iter().map(|&p| self.cell_of(p)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_display() {
        let label = SegmentLabel {
            constellation: 3,
            segment: 60,
        };
        assert_eq!(label.to_string(), "3-60");
    }

    #[test]
    fn test_cell_map_by_pitch_class() {
        let partition =
            Partition::from_pitches(vec![vec![-12, -10, 4], vec![-2, 8], vec![19]]).unwrap();
        let map = CellMap::new(&partition);
        // Any octave of C, D or E is cell 0.
        assert_eq!(map.cell_of(-36), Some(0));
        assert_eq!(map.cell_of(26), Some(0));
        assert_eq!(map.cell_of(-20), Some(0));
        assert_eq!(map.cell_of(10), Some(1));
        assert_eq!(map.cell_of(-5), Some(2));
        assert_eq!(map.cell_of(1), None);
    }

    #[test]
    fn test_earlier_cell_keeps_shared_pitch_class() {
        let partition = Partition::from_pitches(vec![vec![0], vec![12, 7]]).unwrap();
        let map = CellMap::new(&partition);
        assert_eq!(map.cell_of(24), Some(0));
        assert_eq!(map.cell_of(7), Some(1));
    }

    #[test]
    fn test_classify_segment() {
        let partition = Partition::from_pitches(vec![vec![0, 4], vec![7]]).unwrap();
        let map = CellMap::new(&partition);
        // Sorted: [-8, 2, 12, 19]
        let segment = Segment::from(vec![19, -8, 12, 2]);
        assert_eq!(
            map.classify(&segment),
            vec![Some(0), None, Some(0), Some(1)]
        );
    }
}
