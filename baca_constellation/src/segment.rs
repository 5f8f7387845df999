// Segments: one fully combined chord candidate of a constellation.
//
// A segment is always sorted ascending with duplicates kept. Every way of
// building one (`From<Vec<Pitch>>`, deserialization) sorts, so two segments
// compare equal exactly when they hold the same pitches with the same
// multiplicities.

use baca_pitch::{Pitch, pitch_name};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A sorted, duplicate-preserving pitch collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "Vec<Pitch>", into = "Vec<Pitch>")]
pub struct Segment(Vec<Pitch>);

impl Segment {
    pub fn pitches(&self) -> &[Pitch] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Pitch>> for Segment {
    fn from(mut pitches: Vec<Pitch>) -> Self {
        pitches.sort_unstable();
        Segment(pitches)
    }
}

impl From<Segment> for Vec<Pitch> {
    fn from(segment: Segment) -> Self {
        segment.0
    }
}

/// Chord-style display with pitch names, e.g. `<A0 C4 E4>`.
impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<")?;
        for (i, &pitch) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(&pitch_name(pitch))?;
        }
        f.write_str(">")
    }
}
