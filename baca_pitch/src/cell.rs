// Cells: the smallest pitch group that is transposed as a whole.
//
// A cell keeps its pitches in the order given (no sorting, duplicates kept)
// and is never empty. Serde reads and writes a cell as a bare JSON array and
// runs the same emptiness check as `Cell::new()`.

use crate::error::PitchError;
use crate::pitch::Pitch;
use serde::{Deserialize, Serialize};

/// A non-empty, ordered group of pitches.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Pitch>", into = "Vec<Pitch>")]
pub struct Cell(Vec<Pitch>);

impl Cell {
    pub fn new(pitches: Vec<Pitch>) -> Result<Self, PitchError> {
        if pitches.is_empty() {
            return Err(PitchError::EmptyCell);
        }
        Ok(Cell(pitches))
    }

    pub fn pitches(&self) -> &[Pitch] {
        &self.0
    }

    /// Lowest and highest pitch of the cell.
    pub fn bounds(&self) -> (Pitch, Pitch) {
        self.0
            .iter()
            .fold((Pitch::MAX, Pitch::MIN), |(lo, hi), &p| (lo.min(p), hi.max(p)))
    }

    /// A copy of this cell with every pitch shifted by `interval` semitones,
    /// or `None` if a shifted pitch falls outside `Pitch`.
    pub fn transposed(&self, interval: i64) -> Option<Cell> {
        self.0
            .iter()
            .map(|&p| Pitch::try_from(i64::from(p) + interval).ok())
            .collect::<Option<Vec<_>>>()
            .map(Cell)
    }
}

impl TryFrom<Vec<Pitch>> for Cell {
    type Error = PitchError;

    fn try_from(pitches: Vec<Pitch>) -> Result<Self, Self::Error> {
        Cell::new(pitches)
    }
}

impl From<Cell> for Vec<Pitch> {
    fn from(cell: Cell) -> Self {
        cell.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_cell_rejected() {
        assert_eq!(Cell::new(vec![]), Err(PitchError::EmptyCell));
    }

    #[test]
    fn test_order_and_duplicates_kept() {
        let cell = Cell::new(vec![7, -2, 7]).unwrap();
        assert_eq!(cell.pitches(), &[7, -2, 7]);
        assert_eq!(cell.bounds(), (-2, 7));
    }

    #[test]
    fn test_transposed() {
        let cell = Cell::new(vec![-12, -10, 4]).unwrap();
        assert_eq!(cell.transposed(-24).unwrap().pitches(), &[-36, -34, -20]);
        assert_eq!(cell.transposed(0), Some(cell));
    }

    #[test]
    fn test_transposed_past_pitch_limits() {
        let low = Cell::new(vec![i32::MIN + 5, 0]).unwrap();
        assert_eq!(low.transposed(-6), None);
        assert_eq!(low.transposed(-5).unwrap().pitches(), &[i32::MIN, -5]);

        let high = Cell::new(vec![i32::MAX]).unwrap();
        assert_eq!(high.transposed(1), None);
    }

    #[test]
    fn test_serde_as_array() {
        let cell: Cell = serde_json::from_str("[19, 27, 30]").unwrap();
        assert_eq!(cell.pitches(), &[19, 27, 30]);
        assert_eq!(serde_json::to_string(&cell).unwrap(), "[19,27,30]");
        assert!(serde_json::from_str::<Cell>("[]").is_err());
    }
}
