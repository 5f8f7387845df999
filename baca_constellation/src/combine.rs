// Outer-product combination of per-cell transposition sets.
//
// A constellation picks one transposition for each cell of its partition in
// every possible way. The combinations are enumerated in odometer order: the
// last cell's choice advances fastest, the first cell's slowest. Segment
// numbering depends on this order, so it must not change.
//
// If any cell has an empty transposition set the product is empty. The
// product of zero sets is a single empty combination; partitions are never
// empty, so constellations do not reach that case.

use crate::segment::Segment;
use baca_pitch::{Cell, Pitch};

/// Cartesian product of `lists` in odometer order (last list fastest).
pub fn outer_product<T: Clone>(lists: &[Vec<T>]) -> Vec<Vec<T>> {
    if lists.iter().any(|list| list.is_empty()) {
        return Vec::new();
    }

    let total: usize = lists.iter().map(Vec::len).product();
    let mut result = Vec::with_capacity(total);
    let mut indices = vec![0usize; lists.len()];

    loop {
        result.push(
            indices
                .iter()
                .zip(lists)
                .map(|(&i, list)| list[i].clone())
                .collect(),
        );

        // Advance the odometer; when every wheel rolls over we are done.
        let mut wheel = lists.len();
        loop {
            if wheel == 0 {
                return result;
            }
            wheel -= 1;
            indices[wheel] += 1;
            if indices[wheel] < lists[wheel].len() {
                break;
            }
            indices[wheel] = 0;
        }
    }
}

/// One segment per combination of transpositions: flatten the chosen cells
/// and sort. Count is the product of the set sizes.
pub fn combine_transpositions(sets: &[Vec<Cell>]) -> Vec<Segment> {
    let refs: Vec<Vec<&Cell>> = sets.iter().map(|set| set.iter().collect()).collect();
    outer_product(&refs)
        .into_iter()
        .map(|combination| {
            let pitches: Vec<Pitch> = combination
                .into_iter()
                .flat_map(|cell| cell.pitches().iter().copied())
                .collect();
            Segment::from(pitches)
        })
        .collect()
}
