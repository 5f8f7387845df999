// MIDI output for segment progressions.
//
// Renders a list of segments as block chords in a single-track Standard MIDI
// File, one chord per segment, for auditioning a circuit's generators and
// pivots. Pitch 0 (middle C) maps to MIDI key 60; a pitch that lands outside
// 0..=127 is an error rather than being clamped. Repeated pitches inside a
// segment sound once.
//
// Uses the `midly` crate for MIDI writing.

use crate::error::{ConstellationError, Result};
use crate::segment::Segment;
use baca_pitch::Pitch;
use midly::{
    Format, Header, MetaMessage, MidiMessage, Smf, Timing, Track, TrackEvent, TrackEventKind,
    num::{u4, u7, u15, u24, u28},
};
use std::path::Path;

/// Ticks per quarter note in MIDI output.
const TICKS_PER_QUARTER: u16 = 480;

/// Slowest tempo whose quarter-note length fits the 24-bit tempo field.
pub const MIN_TEMPO_BPM: u16 = 4;

/// MIDI key of pitch 0.
const MIDDLE_C_KEY: Pitch = 60;

#[derive(Debug, Clone)]
pub struct MidiConfig {
    pub tempo_bpm: u16,
    /// Length of each chord in quarter notes.
    pub quarters_per_segment: u16,
    pub velocity: u8,
    /// General MIDI program (0 = acoustic grand piano).
    pub program: u8,
}

impl Default for MidiConfig {
    fn default() -> Self {
        MidiConfig {
            tempo_bpm: 60,
            quarters_per_segment: 4,
            velocity: 80,
            program: 0,
        }
    }
}

/// MIDI key for a pitch.
pub fn midi_key(pitch: Pitch) -> Result<u8> {
    u8::try_from(pitch + MIDDLE_C_KEY)
        .ok()
        .filter(|&key| key <= 127)
        .ok_or(ConstellationError::PitchOutOfMidiRange(pitch))
}

/// Render segments as consecutive chords in an in-memory SMF.
pub fn segments_to_smf(segments: &[Segment], config: &MidiConfig) -> Result<Smf<'static>> {
    let channel = u4::new(0);
    let chord_ticks = u32::from(TICKS_PER_QUARTER) * u32::from(config.quarters_per_segment);
    if config.tempo_bpm < MIN_TEMPO_BPM {
        return Err(ConstellationError::TempoOutOfRange(config.tempo_bpm));
    }
    let tempo_microseconds = 60_000_000 / u32::from(config.tempo_bpm);

    let mut track: Track<'static> = vec![
        TrackEvent {
            delta: u28::new(0),
            kind: TrackEventKind::Meta(MetaMessage::Tempo(u24::new(tempo_microseconds))),
        },
        TrackEvent {
            delta: u28::new(0),
            kind: TrackEventKind::Meta(MetaMessage::TrackName(b"Circuit")),
        },
        TrackEvent {
            delta: u28::new(0),
            kind: TrackEventKind::Midi {
                channel,
                message: MidiMessage::ProgramChange {
                    program: u7::new(config.program.min(127)),
                },
            },
        },
    ];

    for segment in segments {
        let mut keys = segment
            .pitches()
            .iter()
            .map(|&p| midi_key(p))
            .collect::<Result<Vec<u8>>>()?;
        keys.dedup();
        if keys.is_empty() {
            continue;
        }

        for &key in &keys {
            track.push(TrackEvent {
                delta: u28::new(0),
                kind: TrackEventKind::Midi {
                    channel,
                    message: MidiMessage::NoteOn {
                        key: u7::new(key),
                        vel: u7::new(config.velocity.min(127)),
                    },
                },
            });
        }
        for (i, &key) in keys.iter().enumerate() {
            track.push(TrackEvent {
                delta: u28::new(if i == 0 { chord_ticks } else { 0 }),
                kind: TrackEventKind::Midi {
                    channel,
                    message: MidiMessage::NoteOff {
                        key: u7::new(key),
                        vel: u7::new(0),
                    },
                },
            });
        }
    }

    track.push(TrackEvent {
        delta: u28::new(0),
        kind: TrackEventKind::Meta(MetaMessage::EndOfTrack),
    });

    let mut smf = Smf::new(Header::new(
        Format::SingleTrack,
        Timing::Metrical(u15::new(TICKS_PER_QUARTER)),
    ));
    smf.tracks.push(track);
    Ok(smf)
}

/// Encode segments as SMF bytes.
pub fn segments_to_bytes(segments: &[Segment], config: &MidiConfig) -> Result<Vec<u8>> {
    let smf = segments_to_smf(segments, config)?;
    let mut buf = Vec::new();
    smf.write_std(&mut buf)?;
    Ok(buf)
}

/// Convert segments to MIDI and write to a file.
pub fn write_midi(segments: &[Segment], path: &Path, config: &MidiConfig) -> Result<()> {
    let buf = segments_to_bytes(segments, config)?;
    std::fs::write(path, &buf)?;
    Ok(())
}
