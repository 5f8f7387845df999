// Circuit definitions loaded from JSON.
//
// A config names the shared pitch range and the generator partitions, in
// circuit order:
//
//     {
//       "pitch_range": "[A0, C8]",
//       "partitions": [[[-12, -10, 4], [-2, 8, 11, 17], ...], ...]
//     }
//
// Deserialization validates the range and every cell and partition, so a
// config that parses can only fail to build when it has no partitions.
//
// The CC1 circuit ships embedded as `data/circuit_1.json`. Nothing is built
// until a caller asks: `circuit_1()` expands all eight constellations on
// every call, so hold on to the result.

use crate::circuit::Circuit;
use crate::error::Result;
use crate::partition::Partition;
use baca_pitch::PitchRange;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CircuitConfig {
    pub pitch_range: PitchRange,
    pub partitions: Vec<Partition>,
}

impl CircuitConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        Self::from_json(&data)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn build(&self) -> Result<Circuit> {
        Circuit::new(self.partitions.clone(), self.pitch_range)
    }

    /// The eight generator partitions of constellation circuit 1 over `[A0, C8]`.
    ///
    /// Panics if the embedded JSON is malformed (should never happen in a
    /// released build).
    pub fn circuit_1() -> Self {
        let json = include_str!("../data/circuit_1.json");
        Self::from_json(json).expect("embedded circuit_1.json is malformed")
    }
}

/// Build constellation circuit 1 (CC1).
pub fn circuit_1() -> Circuit {
    CircuitConfig::circuit_1()
        .build()
        .expect("embedded circuit_1.json has no partitions")
}
