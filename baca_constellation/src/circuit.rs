// Circuit: an ordered, cyclic collection of constellations over one range.
//
// The circuit owns its constellations outright. Each constellation records
// its 1-based position, so moving between neighbors (`advance`, `next_of`,
// `prev_of`) and labeling a segment go through the circuit by number rather
// than through stored references.
//
// Two indexing schemes are exposed, matching how callers use them:
// - `constellation_at(isize)` is 0-based and accepts negative indices that
//   count back from the end (-1 is the last constellation).
// - `constellation(usize)`, `get(usize, usize)` and everything that talks
//   about "numbers" are 1-based, like the labels printed on a score.
//
// A pivot from A into B is the segment of A equal to B's flattened partition:
// the chord in A's material that is also B's starting sonority. The search is
// asymmetric and may come up empty.
//
// Constellations expand independently, so construction maps partitions in
// parallel; `collect` keeps input order so the result is deterministic.

use crate::constellation::Constellation;
use crate::error::{ConstellationError, Result};
use crate::label::SegmentLabel;
use crate::partition::Partition;
use crate::segment::Segment;
use baca_pitch::{Pitch, PitchRange};
use rayon::prelude::*;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct Circuit {
    pitch_range: PitchRange,
    constellations: Vec<Constellation>,
}

impl Circuit {
    pub fn new(partitions: Vec<Partition>, pitch_range: PitchRange) -> Result<Self> {
        if partitions.is_empty() {
            return Err(ConstellationError::EmptyCircuit);
        }

        let constellations: Vec<Constellation> = partitions
            .into_par_iter()
            .enumerate()
            .map(|(i, partition)| Constellation::with_number(i + 1, partition, pitch_range))
            .collect();

        debug!(
            constellations = constellations.len(),
            segments = constellations.iter().map(Constellation::len).sum::<usize>(),
            range = %pitch_range,
            "built circuit"
        );

        Ok(Circuit {
            pitch_range,
            constellations,
        })
    }

    /// Build from raw pitch lists (partition -> cell -> pitch).
    pub fn from_pitches(partitions: Vec<Vec<Vec<Pitch>>>, pitch_range: PitchRange) -> Result<Self> {
        let partitions = partitions
            .into_iter()
            .map(Partition::from_pitches)
            .collect::<Result<Vec<_>>>()?;
        Circuit::new(partitions, pitch_range)
    }

    pub fn pitch_range(&self) -> PitchRange {
        self.pitch_range
    }

    pub fn len(&self) -> usize {
        self.constellations.len()
    }

    /// Always false: an empty circuit cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.constellations.is_empty()
    }

    pub fn constellations(&self) -> &[Constellation] {
        &self.constellations
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Constellation> {
        self.constellations.iter()
    }

    /// 0-based lookup; negative indices count from the end, once.
    pub fn constellation_at(&self, index: isize) -> Result<&Constellation> {
        let len = self.constellations.len();
        let resolved = if index < 0 {
            index + len as isize
        } else {
            index
        };
        usize::try_from(resolved)
            .ok()
            .and_then(|i| self.constellations.get(i))
            .ok_or(ConstellationError::ConstellationIndexOutOfBounds { index, len })
    }

    /// 1-based lookup by constellation number.
    pub fn constellation(&self, number: usize) -> Result<&Constellation> {
        number
            .checked_sub(1)
            .and_then(|i| self.constellations.get(i))
            .ok_or(ConstellationError::ConstellationNumberOutOfBounds {
                number,
                len: self.constellations.len(),
            })
    }

    /// Segment `segment_number` of constellation `constellation_number`, both 1-based.
    pub fn get(&self, constellation_number: usize, segment_number: usize) -> Result<&Segment> {
        self.constellation(constellation_number)?
            .segment_at(segment_number)
    }

    /// The constellation `offset` steps away from `number`, wrapping in both
    /// directions as many times as needed.
    pub fn advance(&self, number: usize, offset: isize) -> Result<&Constellation> {
        self.constellation(number)?;
        let len = self.constellations.len() as isize;
        // Reduce first so the sum stays below 2 * len.
        let target = (number as isize - 1 + offset.rem_euclid(len)).rem_euclid(len);
        Ok(&self.constellations[target as usize])
    }

    pub fn next_of(&self, number: usize) -> Result<&Constellation> {
        self.advance(number, 1)
    }

    pub fn prev_of(&self, number: usize) -> Result<&Constellation> {
        self.advance(number, -1)
    }

    /// The segment of `a` equal to `b`'s flattened partition, if any.
    pub fn find_pivot<'a>(&self, a: &'a Constellation, b: &Constellation) -> Option<&'a Segment> {
        let target = b.generator_segment();
        a.segments().iter().find(|segment| **segment == target)
    }

    /// Pivot from constellation `number` into its cyclic successor.
    pub fn pivot_of(&self, number: usize) -> Result<Option<&Segment>> {
        let from = self.constellation(number)?;
        let to = self.next_of(number)?;
        Ok(self.find_pivot(from, to))
    }

    /// Flattened partition of every constellation, in circuit order.
    pub fn generator_segments(&self) -> Vec<Segment> {
        self.constellations
            .iter()
            .map(Constellation::generator_segment)
            .collect()
    }

    /// Pivot from every constellation into its successor, wrapping from the
    /// last back to the first. Fails on the first pair without a pivot.
    pub fn pivot_segments(&self) -> Result<Vec<&Segment>> {
        (1..=self.len())
            .map(|number| {
                self.pivot_of(number)?.ok_or(ConstellationError::PivotNotFound {
                    from: number,
                    to: number % self.len() + 1,
                })
            })
            .collect()
    }

    /// Label of the first constellation containing `segment`.
    pub fn locate(&self, segment: &Segment) -> Option<SegmentLabel> {
        self.constellations
            .iter()
            .enumerate()
            .find_map(|(i, constellation)| {
                constellation.number_of(segment).map(|n| SegmentLabel {
                    constellation: i + 1,
                    segment: n,
                })
            })
    }
}

impl<'a> IntoIterator for &'a Circuit {
    type Item = &'a Constellation;
    type IntoIter = std::slice::Iter<'a, Constellation>;

    fn into_iter(self) -> Self::IntoIter {
        self.constellations.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Three tiny constellations whose generators all share pitch classes,
    /// so every adjacent pair has a pivot.
    fn triad_circuit() -> Circuit {
        Circuit::from_pitches(
            vec![
                vec![vec![0, 4], vec![7]],
                vec![vec![12, 16], vec![7]],
                vec![vec![0, 4], vec![19]],
            ],
            PitchRange::new(0, 24).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_empty_circuit_rejected() {
        assert!(matches!(
            Circuit::new(vec![], PitchRange::piano()),
            Err(ConstellationError::EmptyCircuit)
        ));
    }

    #[test]
    fn test_numbers_assigned_in_order() {
        let circuit = triad_circuit();
        let numbers: Vec<Option<usize>> = circuit.iter().map(Constellation::number).collect();
        assert_eq!(numbers, vec![Some(1), Some(2), Some(3)]);
    }

    #[test]
    fn test_negative_indexing() {
        let circuit = triad_circuit();
        assert_eq!(circuit.constellation_at(-1).unwrap().number(), Some(3));
        assert_eq!(circuit.constellation_at(-3).unwrap().number(), Some(1));
        assert_eq!(circuit.constellation_at(2).unwrap().number(), Some(3));
        assert!(matches!(
            circuit.constellation_at(-4),
            Err(ConstellationError::ConstellationIndexOutOfBounds { index: -4, len: 3 })
        ));
        assert!(matches!(
            circuit.constellation_at(3),
            Err(ConstellationError::ConstellationIndexOutOfBounds { index: 3, len: 3 })
        ));
    }

    #[test]
    fn test_numbered_lookup() {
        let circuit = triad_circuit();
        // [12, 16] transposes down to [0, 4], so constellation 2 starts on [0, 4, 7].
        assert_eq!(circuit.get(2, 1).unwrap().pitches(), &[0, 4, 7]);
        assert_eq!(circuit.get(2, 3).unwrap().pitches(), &[7, 12, 16]);
        assert!(matches!(
            circuit.constellation(0),
            Err(ConstellationError::ConstellationNumberOutOfBounds { number: 0, len: 3 })
        ));
        assert!(matches!(
            circuit.get(1, 99),
            Err(ConstellationError::SegmentIndexOutOfBounds { number: 99, .. })
        ));
    }

    #[test]
    fn test_advance_always_wraps() {
        let circuit = triad_circuit();
        assert_eq!(circuit.next_of(3).unwrap().number(), Some(1));
        assert_eq!(circuit.prev_of(1).unwrap().number(), Some(3));
        assert_eq!(circuit.advance(1, 7).unwrap().number(), Some(2));
        assert_eq!(circuit.advance(2, -5).unwrap().number(), Some(3));
        // isize::MAX and isize::MIN are both 1 mod 3.
        assert_eq!(circuit.advance(1, isize::MAX).unwrap().number(), Some(2));
        assert_eq!(circuit.advance(3, isize::MAX).unwrap().number(), Some(1));
        assert_eq!(circuit.advance(2, isize::MIN).unwrap().number(), Some(3));
        assert_eq!(circuit.advance(3, isize::MIN + 1).unwrap().number(), Some(2));
        assert!(circuit.advance(4, 1).is_err());
    }

    #[test]
    fn test_pivot_is_target_generator() {
        let circuit = triad_circuit();
        let first = circuit.constellation(1).unwrap();
        let second = circuit.constellation(2).unwrap();
        let pivot = circuit.find_pivot(first, second).unwrap();
        assert_eq!(pivot, &second.generator_segment());
        assert_eq!(pivot.pitches(), &[7, 12, 16]);
    }

    #[test]
    fn test_pivot_absent() {
        let circuit = Circuit::from_pitches(
            vec![vec![vec![0, 4]], vec![vec![1, 5]]],
            PitchRange::new(0, 24).unwrap(),
        )
        .unwrap();
        let a = circuit.constellation(1).unwrap();
        let b = circuit.constellation(2).unwrap();
        assert_eq!(circuit.find_pivot(a, b), None);
        assert_eq!(circuit.pivot_of(1).unwrap(), None);
        assert!(matches!(
            circuit.pivot_segments(),
            Err(ConstellationError::PivotNotFound { from: 1, to: 2 })
        ));
    }

    #[test]
    fn test_pivot_segments_wrap() {
        let circuit = triad_circuit();
        let pivots = circuit.pivot_segments().unwrap();
        assert_eq!(pivots.len(), 3);
        // Last into first: constellation 3 must contain [0, 4, 7].
        assert_eq!(pivots[2].pitches(), &[0, 4, 7]);
    }

    #[test]
    fn test_locate() {
        let circuit = triad_circuit();
        let label = circuit.locate(&Segment::from(vec![0, 4, 19])).unwrap();
        assert_eq!(label.to_string(), "1-2");
        assert_eq!(circuit.locate(&Segment::from(vec![1, 2, 3])), None);
    }
}
