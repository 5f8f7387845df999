// Partitions: the generator of one constellation.
//
// A partition is a non-empty ordered list of cells. Its flattened, sorted
// pitch content is the constellation's generator segment, and it is also
// what the pivot search looks for in a neighboring constellation.

use crate::error::{ConstellationError, Result};
use crate::segment::Segment;
use baca_pitch::{Cell, Pitch};
use serde::{Deserialize, Serialize};

/// A non-empty, ordered list of cells.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Cell>", into = "Vec<Cell>")]
pub struct Partition(Vec<Cell>);

impl Partition {
    pub fn new(cells: Vec<Cell>) -> Result<Self> {
        if cells.is_empty() {
            return Err(ConstellationError::EmptyPartition);
        }
        Ok(Partition(cells))
    }

    /// Build a partition from raw pitch lists, validating every cell.
    pub fn from_pitches(cells: Vec<Vec<Pitch>>) -> Result<Self> {
        let cells = cells
            .into_iter()
            .map(Cell::new)
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Partition::new(cells)
    }

    pub fn cells(&self) -> &[Cell] {
        &self.0
    }

    /// All pitches of all cells, sorted.
    pub fn flattened(&self) -> Segment {
        let pitches: Vec<Pitch> = self
            .0
            .iter()
            .flat_map(|cell| cell.pitches().iter().copied())
            .collect();
        Segment::from(pitches)
    }
}

impl TryFrom<Vec<Cell>> for Partition {
    type Error = ConstellationError;

    fn try_from(cells: Vec<Cell>) -> Result<Self> {
        Partition::new(cells)
    }
}

impl From<Partition> for Vec<Cell> {
    fn from(partition: Partition) -> Self {
        partition.0
    }
}
