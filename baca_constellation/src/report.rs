// Serializable circuit summary.
//
// Downstream score code needs the same few facts about every constellation:
// its size, its generator, and where it pivots into the next one. A
// `CircuitReport` collects them as plain data and writes them as JSON.

use crate::circuit::Circuit;
use crate::error::Result;
use crate::partition::Partition;
use crate::segment::Segment;
use baca_pitch::PitchRange;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstellationReport {
    /// 1-based position in the circuit.
    pub number: usize,
    pub size: usize,
    pub transposition_counts: Vec<usize>,
    pub partition: Partition,
    pub generator: Segment,
    pub generator_number: Option<usize>,
    /// Pivot into the next constellation (wrapping), with its segment number.
    pub pivot: Option<Segment>,
    pub pivot_number: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CircuitReport {
    pub pitch_range: PitchRange,
    pub constellations: Vec<ConstellationReport>,
}

impl CircuitReport {
    pub fn new(circuit: &Circuit) -> Self {
        let all = circuit.constellations();
        let constellations = all
            .iter()
            .enumerate()
            .map(|(i, constellation)| {
                let next = &all[(i + 1) % all.len()];
                let pivot = circuit.find_pivot(constellation, next);
                ConstellationReport {
                    number: i + 1,
                    size: constellation.len(),
                    transposition_counts: constellation.transposition_counts(),
                    partition: constellation.partition().clone(),
                    generator: constellation.generator_segment(),
                    generator_number: constellation.generator_number(),
                    pivot_number: pivot.and_then(|p| constellation.number_of(p)),
                    pivot: pivot.cloned(),
                }
            })
            .collect();

        CircuitReport {
            pitch_range: circuit.pitch_range(),
            constellations,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn write_json(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}
