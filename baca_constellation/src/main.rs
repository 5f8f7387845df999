// Constellation circuit CLI.
//
// Builds a circuit (CC1 by default, or one read from a JSON config) and
// prints or exports it.
//
// Usage:
//   cargo run -p baca_constellation -- [--config FILE] summary
//   cargo run -p baca_constellation -- [--config FILE] segments N
//   cargo run -p baca_constellation -- [--config FILE] locate PITCH...
//   cargo run -p baca_constellation -- [--config FILE] export [--json FILE] [--midi FILE] [--tempo BPM]
//
// Pitches are integers (middle C = 0) or names such as C#4 or Bb3.
// Log verbosity follows RUST_LOG (default: info).

use anyhow::{Context, Result, bail};
use baca_constellation::midi::{MidiConfig, write_midi};
use baca_constellation::report::CircuitReport;
use baca_constellation::{Circuit, CircuitConfig, Segment};
use baca_pitch::{Pitch, parse_pitch_name};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "circuit", about = "Inspect and export pitch-constellation circuits")]
struct Cli {
    /// JSON circuit config; defaults to the built-in CC1 circuit.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// One line per constellation: size, generator, pivot into the next.
    Summary,
    /// Every segment of one constellation (1-based number).
    Segments { number: usize },
    /// Find which constellation and segment hold exactly these pitches.
    Locate {
        #[arg(required = true, allow_negative_numbers = true)]
        pitches: Vec<String>,
    },
    /// Write the circuit summary as JSON and/or its generator-pivot
    /// progression as MIDI.
    Export {
        #[arg(long)]
        json: Option<PathBuf>,
        #[arg(long)]
        midi: Option<PathBuf>,
        #[arg(long, default_value_t = 60)]
        tempo: u16,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => {
            info!("Loading circuit config from {}", path.display());
            CircuitConfig::load(path)
                .with_context(|| format!("failed to load {}", path.display()))?
        }
        None => CircuitConfig::circuit_1(),
    };

    let circuit = config.build().context("failed to build circuit")?;
    info!(
        "Built circuit of {} constellations over {}",
        circuit.len(),
        circuit.pitch_range()
    );

    match cli.command.unwrap_or(Command::Summary) {
        Command::Summary => print_summary(&circuit)?,
        Command::Segments { number } => print_segments(&circuit, number)?,
        Command::Locate { pitches } => locate(&circuit, &pitches)?,
        Command::Export { json, midi, tempo } => {
            if json.is_none() && midi.is_none() {
                bail!("export needs --json and/or --midi");
            }
            if let Some(path) = json {
                CircuitReport::new(&circuit)
                    .write_json(&path)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                info!("Wrote JSON report to {}", path.display());
            }
            if let Some(path) = midi {
                let progression = progression(&circuit)?;
                let midi_config = MidiConfig {
                    tempo_bpm: tempo,
                    ..Default::default()
                };
                write_midi(&progression, &path, &midi_config)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                info!(
                    "Wrote {} chords to {}",
                    progression.len(),
                    path.display()
                );
            }
        }
    }

    Ok(())
}

fn print_summary(circuit: &Circuit) -> Result<()> {
    for constellation in circuit {
        let number = constellation.number().unwrap_or_default();
        let generator = constellation.generator_segment();
        println!(
            "{} {}  counts {:?}",
            number,
            constellation,
            constellation.transposition_counts()
        );
        println!(
            "  generator {} {}",
            label_or_dash(constellation.generator_number(), number),
            generator
        );
        match circuit.pivot_of(number)? {
            Some(pivot) => println!(
                "  pivot     {} {}",
                label_or_dash(constellation.number_of(pivot), number),
                pivot
            ),
            None => {
                warn!("Constellation {} has no pivot into its successor", number);
                println!("  pivot     -");
            }
        }
    }
    Ok(())
}

fn label_or_dash(segment_number: Option<usize>, constellation_number: usize) -> String {
    match segment_number {
        Some(n) => format!("{}-{}", constellation_number, n),
        None => "-".to_string(),
    }
}

fn print_segments(circuit: &Circuit, number: usize) -> Result<()> {
    let constellation = circuit.constellation(number)?;
    let cell_map = constellation.cell_map();
    for (i, segment) in constellation.segments().iter().enumerate() {
        let cells: String = cell_map
            .classify(segment)
            .iter()
            .map(|cell| cell.map_or('.', |c| char::from(b'a' + (c % 26) as u8)))
            .collect();
        println!("{}-{}\t{}\t{:?}\t{}", number, i + 1, cells, segment.pitches(), segment);
    }
    Ok(())
}

fn parse_pitch(text: &str) -> Result<Pitch> {
    if let Ok(pitch) = text.parse::<Pitch>() {
        return Ok(pitch);
    }
    Ok(parse_pitch_name(text)?)
}

fn locate(circuit: &Circuit, pitches: &[String]) -> Result<()> {
    let pitches = pitches
        .iter()
        .map(|text| parse_pitch(text))
        .collect::<Result<Vec<_>>>()?;
    let segment = Segment::from(pitches);
    match circuit.locate(&segment) {
        Some(label) => println!("{} {}", label, segment),
        None => println!("not found: {}", segment),
    }
    Ok(())
}

/// Each constellation's generator followed by its pivot into the next.
fn progression(circuit: &Circuit) -> Result<Vec<Segment>> {
    let mut segments = Vec::with_capacity(circuit.len() * 2);
    for constellation in circuit {
        let number = constellation.number().unwrap_or_default();
        segments.push(constellation.generator_segment());
        if let Some(pivot) = circuit.pivot_of(number)? {
            segments.push(pivot.clone());
        }
    }
    Ok(segments)
}
