//! The twelve-tone equal-temperament pitch-class alphabet.

use serde::{Deserialize, Serialize};

/// Sharp-spelled names, indexed by pitch class.
const SHARP_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Flat-spelled names, indexed by pitch class.
const FLAT_NAMES: [&str; 12] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];

/// Enharmonic spelling preference for output names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Spelling {
    /// C# D# F# G# A#
    #[default]
    Sharp,
    /// Db Eb Gb Ab Bb
    Flat,
}

/// One of the twelve pitch classes, 0 = C through 11 = B.
///
/// Serializes as a bare number. Deserialized numbers are reduced modulo 12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "i32", into = "u8")]
pub struct PitchClass(u8);

impl PitchClass {
    /// Creates a pitch class from any semitone count, reduced modulo 12.
    pub fn new(semitones: i32) -> Self {
        PitchClass(semitones.rem_euclid(12) as u8)
    }

    /// Semitones above C, in `0..12`.
    pub fn value(self) -> u8 {
        self.0
    }

    /// Moves this pitch class by `semitones` (negative is down).
    pub fn transpose(self, semitones: i32) -> Self {
        PitchClass::new(self.0 as i32 + semitones)
    }

    /// Upward distance in semitones from `other` to `self`, in `0..12`.
    pub fn interval_from(self, other: PitchClass) -> u8 {
        (self.0 + 12 - other.0) % 12
    }

    /// Display name under the given spelling.
    pub fn name(self, spelling: Spelling) -> &'static str {
        match spelling {
            Spelling::Sharp => SHARP_NAMES[self.0 as usize],
            Spelling::Flat => FLAT_NAMES[self.0 as usize],
        }
    }
}

impl From<i32> for PitchClass {
    fn from(semitones: i32) -> Self {
        PitchClass::new(semitones)
    }
}

impl From<PitchClass> for u8 {
    fn from(pc: PitchClass) -> Self {
        pc.0
    }
}

impl std::fmt::Display for PitchClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name(Spelling::Sharp))
    }
}

/// `(pc + semitones) mod 12`. Total for every input.
pub fn transpose(pc: PitchClass, semitones: i32) -> PitchClass {
    pc.transpose(semitones)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_wraps() {
        assert_eq!(PitchClass::new(12).value(), 0);
        assert_eq!(PitchClass::new(14).value(), 2);
        assert_eq!(PitchClass::new(-1).value(), 11);
        assert_eq!(PitchClass::new(-13).value(), 11);
    }

    #[test]
    fn test_transpose() {
        let c = PitchClass::new(0);
        assert_eq!(transpose(c, 7), PitchClass::new(7));
        assert_eq!(transpose(c, -3), PitchClass::new(9));
        assert_eq!(PitchClass::new(1).transpose(-3), PitchClass::new(10));
        assert_eq!(PitchClass::new(11).transpose(1), PitchClass::new(0));
    }

    #[test]
    fn test_interval_from() {
        let c = PitchClass::new(0);
        let a = PitchClass::new(9);
        assert_eq!(a.interval_from(c), 9);
        assert_eq!(c.interval_from(a), 3);
    }

    #[test]
    fn test_names() {
        assert_eq!(PitchClass::new(1).name(Spelling::Sharp), "C#");
        assert_eq!(PitchClass::new(1).name(Spelling::Flat), "Db");
        assert_eq!(PitchClass::new(10).name(Spelling::Flat), "Bb");
        assert_eq!(PitchClass::new(4).name(Spelling::Flat), "E");
        assert_eq!(PitchClass::new(3).to_string(), "D#");
    }

    #[test]
    fn test_json_number() {
        assert_eq!(serde_json::to_string(&PitchClass::new(10)).unwrap(), "10");
        let pc: PitchClass = serde_json::from_str("7").unwrap();
        assert_eq!(pc.value(), 7);
    }

    #[test]
    fn test_deserialize_reduces_out_of_range() {
        let pc: PitchClass = serde_json::from_str("15").unwrap();
        assert_eq!(pc.value(), 3);
        assert_eq!(pc.name(Spelling::Sharp), "D#");
        let pc: PitchClass = serde_json::from_str("-1").unwrap();
        assert_eq!(pc.name(Spelling::Flat), "B");
    }

    #[test]
    fn test_spelling_default_is_sharp() {
        assert_eq!(Spelling::default(), Spelling::Sharp);
    }
}
