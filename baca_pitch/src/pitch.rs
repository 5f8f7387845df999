// Integer pitches and pitch names.
//
// A pitch is a semitone count relative to middle C, so C4 = 0, A0 = -39 and
// C8 = 48. Names use a letter, any number of `#` or `b` accidentals, and an
// octave number in scientific pitch notation. Formatting always spells with
// sharps, so `parse_pitch_name(&pitch_name(p)) == Ok(p)` for every pitch.

use crate::error::PitchError;

/// Semitones from middle C.
pub type Pitch = i32;

/// Semitones in one octave.
pub const OCTAVE: i32 = 12;

/// Sharp spellings indexed by pitch class 0-11.
const SHARP_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Pitch class (0-11) of a pitch, with C = 0. Works for negative pitches.
pub fn pitch_class(pitch: Pitch) -> u8 {
    pitch.rem_euclid(OCTAVE) as u8
}

/// Octave number in scientific pitch notation (middle C is in octave 4).
pub fn octave_number(pitch: Pitch) -> i32 {
    pitch.div_euclid(OCTAVE) + 4
}

/// Format a pitch as a sharp-spelled name, e.g. `-39` -> `"A0"`.
pub fn pitch_name(pitch: Pitch) -> String {
    let name = SHARP_NAMES[pitch_class(pitch) as usize];
    format!("{}{}", name, octave_number(pitch))
}

/// Parse a pitch name such as `"A0"`, `"C#4"`, `"Bb3"` or `"c-1"`.
///
/// The letter is case-insensitive. After the letter, `#` raises and `b`
/// lowers by a semitone; the remainder must be an integer octave number.
pub fn parse_pitch_name(name: &str) -> Result<Pitch, PitchError> {
    let invalid = || PitchError::InvalidPitchName(name.to_string());
    let trimmed = name.trim();
    let mut chars = trimmed.char_indices();

    let base = match chars.next().map(|(_, c)| c.to_ascii_uppercase()) {
        Some('C') => 0,
        Some('D') => 2,
        Some('E') => 4,
        Some('F') => 5,
        Some('G') => 7,
        Some('A') => 9,
        Some('B') => 11,
        _ => return Err(invalid()),
    };

    let mut alteration = 0;
    let mut octave_start = trimmed.len();
    for (i, c) in chars {
        match c {
            '#' => alteration += 1,
            'b' => alteration -= 1,
            _ => {
                octave_start = i;
                break;
            }
        }
    }

    let octave: i32 = trimmed[octave_start..].parse().map_err(|_| invalid())?;
    Ok(base + alteration + (octave - 4) * OCTAVE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_pitches() {
        assert_eq!(parse_pitch_name("C4"), Ok(0));
        assert_eq!(parse_pitch_name("A0"), Ok(-39));
        assert_eq!(parse_pitch_name("C8"), Ok(48));
        assert_eq!(parse_pitch_name("a4"), Ok(9));
    }

    #[test]
    fn test_accidentals() {
        assert_eq!(parse_pitch_name("C#4"), Ok(1));
        assert_eq!(parse_pitch_name("Bb3"), Ok(-2));
        assert_eq!(parse_pitch_name("Ebb4"), Ok(2));
        // Enharmonics cross the octave boundary by pitch, not by name.
        assert_eq!(parse_pitch_name("B#3"), Ok(0));
        assert_eq!(parse_pitch_name("Cb4"), Ok(-1));
    }

    #[test]
    fn test_negative_octave() {
        assert_eq!(parse_pitch_name("C-1"), Ok(-60));
    }

    #[test]
    fn test_invalid_names() {
        for bad in ["", "H4", "C", "C#", "4C", "Cx4"] {
            assert!(
                matches!(parse_pitch_name(bad), Err(PitchError::InvalidPitchName(_))),
                "{bad:?} should not parse"
            );
        }
    }

    #[test]
    fn test_pitch_name_negative_pitches() {
        assert_eq!(pitch_name(-39), "A0");
        assert_eq!(pitch_name(-1), "B3");
        assert_eq!(pitch_name(-12), "C3");
        assert_eq!(pitch_name(37), "C#7");
    }

    #[test]
    fn test_name_roundtrip_across_piano() {
        for pitch in -39..=48 {
            assert_eq!(parse_pitch_name(&pitch_name(pitch)), Ok(pitch));
        }
    }

    #[test]
    fn test_pitch_class() {
        assert_eq!(pitch_class(0), 0);
        assert_eq!(pitch_class(-1), 11);
        assert_eq!(pitch_class(-39), 9);
        assert_eq!(pitch_class(37), 1);
    }
}
