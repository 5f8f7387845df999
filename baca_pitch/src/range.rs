// Inclusive pitch ranges.
//
// A `PitchRange` is fixed at construction: `new()` rejects `low > high`, and
// there are no setters. The textual form is `[low, high]` where each endpoint
// is a pitch name or an integer, e.g. `"[A0, C8]"` or `"[-39, 48]"`. Display
// always uses pitch names, and serde goes through the textual form so config
// files stay readable.

use crate::error::PitchError;
use crate::pitch::{Pitch, parse_pitch_name, pitch_name};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// An inclusive interval `[low, high]` over integer pitches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PitchRange {
    low: Pitch,
    high: Pitch,
}

impl PitchRange {
    pub fn new(low: Pitch, high: Pitch) -> Result<Self, PitchError> {
        if low > high {
            return Err(PitchError::InvalidRange { low, high });
        }
        Ok(PitchRange { low, high })
    }

    /// The 88-key piano range, `[A0, C8]` = `[-39, 48]`.
    pub fn piano() -> Self {
        PitchRange { low: -39, high: 48 }
    }

    pub fn low(&self) -> Pitch {
        self.low
    }

    pub fn high(&self) -> Pitch {
        self.high
    }

    pub fn contains(&self, pitch: Pitch) -> bool {
        self.low <= pitch && pitch <= self.high
    }

    /// True if every pitch lies inside the range. Vacuously true for `[]`.
    pub fn contains_all(&self, pitches: &[Pitch]) -> bool {
        pitches.iter().all(|&p| self.contains(p))
    }
}

fn parse_endpoint(text: &str) -> Result<Pitch, PitchError> {
    let text = text.trim();
    match text.parse::<Pitch>() {
        Ok(pitch) => Ok(pitch),
        Err(_) => parse_pitch_name(text),
    }
}

impl FromStr for PitchRange {
    type Err = PitchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let syntax = || PitchError::InvalidRangeSyntax(s.to_string());
        let inner = s
            .trim()
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
            .ok_or_else(syntax)?;
        let (low, high) = inner.split_once(',').ok_or_else(syntax)?;
        PitchRange::new(parse_endpoint(low)?, parse_endpoint(high)?)
    }
}

impl fmt::Display for PitchRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", pitch_name(self.low), pitch_name(self.high))
    }
}

impl Serialize for PitchRange {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for PitchRange {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_inverted_bounds() {
        assert_eq!(
            PitchRange::new(5, 4),
            Err(PitchError::InvalidRange { low: 5, high: 4 })
        );
        assert!(PitchRange::new(4, 4).is_ok());
    }

    #[test]
    fn test_contains_is_inclusive() {
        let range = PitchRange::new(-3, 3).unwrap();
        assert!(range.contains(-3));
        assert!(range.contains(3));
        assert!(!range.contains(4));
        assert!(!range.contains(-4));
        assert!(range.contains_all(&[-3, 0, 3]));
        assert!(!range.contains_all(&[-3, 0, 4]));
    }

    #[test]
    fn test_parse_piano_range() {
        let range: PitchRange = "[A0, C8]".parse().unwrap();
        assert_eq!(range, PitchRange::piano());
        assert_eq!(range.low(), -39);
        assert_eq!(range.high(), 48);
    }

    #[test]
    fn test_parse_integer_endpoints() {
        let range: PitchRange = " [-39,48] ".parse().unwrap();
        assert_eq!(range, PitchRange::piano());
    }

    #[test]
    fn test_parse_rejects_bad_syntax() {
        for bad in ["A0, C8", "[A0 C8]", "(A0, C8)", "[A0, C8"] {
            assert!(
                matches!(bad.parse::<PitchRange>(), Err(PitchError::InvalidRangeSyntax(_))),
                "{bad:?} should be a syntax error"
            );
        }
        assert!(matches!(
            "[C8, A0]".parse::<PitchRange>(),
            Err(PitchError::InvalidRange { low: 48, high: -39 })
        ));
        assert!(matches!(
            "[H2, C8]".parse::<PitchRange>(),
            Err(PitchError::InvalidPitchName(_))
        ));
    }

    #[test]
    fn test_display_uses_pitch_names() {
        assert_eq!(PitchRange::piano().to_string(), "[A0, C8]");
    }

    #[test]
    fn test_serde_uses_text_form() {
        let json = serde_json::to_string(&PitchRange::piano()).unwrap();
        assert_eq!(json, "\"[A0, C8]\"");
        let back: PitchRange = serde_json::from_str(&json).unwrap();
        assert_eq!(back, PitchRange::piano());
        assert!(serde_json::from_str::<PitchRange>("\"[C8, A0]\"").is_err());
    }
}
