// baca pitch constellations.
//
// A constellation is every chord reachable from one generator partition by
// moving each of its cells through octaves inside a fixed pitch range. A
// circuit is a cyclic sequence of constellations over one range, designed so
// each constellation contains the next one's starting chord (its pivot).
//
// Architecture:
// - partition.rs: `Partition`, the non-empty list of cells that generates a
//   constellation
// - segment.rs: `Segment`, one sorted chord candidate
// - combine.rs: outer product of per-cell transposition sets, in odometer
//   order (segment numbering depends on it)
// - constellation.rs: eager expansion of a partition, 1-based segment
//   numbering and lookup
// - circuit.rs: ownership of the constellations, cyclic navigation, pivots
// - label.rs: `SegmentLabel` and `CellMap`, plain-data inputs for whoever
//   labels and colors chords on the page
// - config.rs: JSON circuit definitions and the embedded CC1 circuit
// - report.rs: serializable per-constellation summary
// - midi.rs: block-chord MIDI rendering of segment progressions
// - error.rs: `ConstellationError`
//
// Octave transposition itself lives in `baca_pitch`. Everything here is pure
// and deterministic: identical partitions and range give identical segment
// lists and numbering.

pub mod circuit;
pub mod combine;
pub mod config;
pub mod constellation;
pub mod error;
pub mod label;
pub mod midi;
pub mod partition;
pub mod report;
pub mod segment;

pub use circuit::Circuit;
pub use config::{CircuitConfig, circuit_1};
pub use constellation::Constellation;
pub use error::{ConstellationError, Result};
pub use label::{CellMap, SegmentLabel};
pub use partition::Partition;
pub use segment::Segment;
