//! Root note parsing.
//!
//! A root is a letter `A`-`G` followed by at most one accidental
//! (`#`, `♯`, `b`, `♭`). Only upper-case letters start a note, so a lower-case
//! `b` after the letter is always read as a flat.

use crate::error::{TheoryError, TheoryResult};
use crate::pitch_class::{PitchClass, Spelling};

/// Semitone offsets for note letters (C=0, D=2, E=4, F=5, G=7, A=9, B=11).
const SEMITONE_MAP: [(char, i32); 7] = [
    ('C', 0),
    ('D', 2),
    ('E', 4),
    ('F', 5),
    ('G', 7),
    ('A', 9),
    ('B', 11),
];

/// Accidental written after a note letter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Accidental {
    #[default]
    Natural,
    Sharp,
    Flat,
}

impl Accidental {
    /// Reads an accidental character.
    fn from_char(c: char) -> Option<Self> {
        match c {
            '#' | '♯' => Some(Accidental::Sharp),
            'b' | '♭' => Some(Accidental::Flat),
            _ => None,
        }
    }

    /// Semitone adjustment applied to the letter.
    pub fn offset(self) -> i32 {
        match self {
            Accidental::Natural => 0,
            Accidental::Sharp => 1,
            Accidental::Flat => -1,
        }
    }
}

/// A written note: letter plus accidental, as it appeared in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Note {
    letter: char,
    accidental: Accidental,
}

impl Note {
    /// The note letter, `A`-`G`.
    pub fn letter(&self) -> char {
        self.letter
    }

    /// The accidental as written.
    pub fn accidental(&self) -> Accidental {
        self.accidental
    }

    /// Semitones above C in the same octave, not reduced: `Cb` is -1 and
    /// `B#` is 12.
    pub fn semitone(&self) -> i32 {
        let base = SEMITONE_MAP
            .iter()
            .find(|(c, _)| *c == self.letter)
            .map(|(_, s)| *s)
            .unwrap_or(0);
        base + self.accidental.offset()
    }

    /// Sounding pitch class (`Db` and `C#` both give 1).
    pub fn pitch_class(&self) -> PitchClass {
        PitchClass::new(self.semitone())
    }

    /// Spelling implied by the written accidental: flats for a flat root,
    /// sharps otherwise.
    pub fn spelling(&self) -> Spelling {
        match self.accidental {
            Accidental::Flat => Spelling::Flat,
            Accidental::Natural | Accidental::Sharp => Spelling::Sharp,
        }
    }
}

/// Reads the longest note-name prefix of `text`.
///
/// Leading whitespace is skipped. Returns the note and the unparsed remainder.
///
/// # Examples
/// ```
/// use music_theory_core::{parse_root, PitchClass};
///
/// let (note, rest) = parse_root("C#m7").unwrap();
/// assert_eq!(note.pitch_class(), PitchClass::new(1));
/// assert_eq!(rest, "m7");
///
/// let (note, rest) = parse_root("Db").unwrap();
/// assert_eq!(note.pitch_class(), PitchClass::new(1));
/// assert_eq!(rest, "");
///
/// assert!(parse_root("H7").is_err());
/// ```
pub fn parse_root(text: &str) -> TheoryResult<(Note, &str)> {
    let trimmed = text.trim_start();
    let mut chars = trimmed.char_indices();

    let letter = match chars.next() {
        Some((_, c)) if SEMITONE_MAP.iter().any(|(l, _)| *l == c) => c,
        _ => return Err(TheoryError::invalid_root(text)),
    };

    // Letters A-G are one byte; an accidental may be multi-byte (♯, ♭).
    let mut end = letter.len_utf8();
    let mut accidental = Accidental::Natural;
    if let Some((idx, c)) = chars.next() {
        if let Some(acc) = Accidental::from_char(c) {
            accidental = acc;
            end = idx + c.len_utf8();
        }
    }

    Ok((Note { letter, accidental }, &trimmed[end..]))
}

impl std::fmt::Display for Note {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let acc = match self.accidental {
            Accidental::Natural => "",
            Accidental::Sharp => "#",
            Accidental::Flat => "b",
        };
        write!(f, "{}{}", self.letter, acc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_letter_and_accidental() {
        let cases = [
            ("C", 0),
            ("C#", 1),
            ("Db", 1),
            ("D", 2),
            ("D#", 3),
            ("Eb", 3),
            ("E", 4),
            ("Fb", 4),
            ("E#", 5),
            ("F", 5),
            ("F#", 6),
            ("Gb", 6),
            ("G", 7),
            ("G#", 8),
            ("Ab", 8),
            ("A", 9),
            ("A#", 10),
            ("Bb", 10),
            ("B", 11),
            ("Cb", 11),
            ("B#", 0),
        ];
        for (text, pc) in cases {
            let (note, rest) = parse_root(text).unwrap();
            assert_eq!(note.pitch_class().value(), pc, "pitch class of {}", text);
            assert_eq!(rest, "", "remainder of {}", text);
        }
    }

    #[test]
    fn test_semitone_is_not_reduced() {
        for (text, semitone) in [("Cb", -1), ("C", 0), ("B", 11), ("B#", 12), ("E#", 5)] {
            let (note, _) = parse_root(text).unwrap();
            assert_eq!(note.semitone(), semitone, "semitone of {}", text);
        }
    }

    #[test]
    fn test_unicode_accidentals() {
        let (note, rest) = parse_root("B♭ minor").unwrap();
        assert_eq!(note.pitch_class(), PitchClass::new(10));
        assert_eq!(note.accidental(), Accidental::Flat);
        assert_eq!(rest, " minor");

        let (note, rest) = parse_root("F♯7").unwrap();
        assert_eq!(note.pitch_class(), PitchClass::new(6));
        assert_eq!(rest, "7");
    }

    #[test]
    fn test_remainder_is_untouched() {
        let (_, rest) = parse_root("Cm nondominant -5 679").unwrap();
        assert_eq!(rest, "m nondominant -5 679");
    }

    #[test]
    fn test_leading_whitespace() {
        let (note, rest) = parse_root("  G aug").unwrap();
        assert_eq!(note.letter(), 'G');
        assert_eq!(rest, " aug");
    }

    #[test]
    fn test_invalid_roots() {
        for text in ["", " ", "H", "c", "7", "#C", "♭"] {
            let err = parse_root(text).unwrap_err();
            assert_eq!(err, TheoryError::invalid_root(text), "input {:?}", text);
        }
    }

    #[test]
    fn test_spelling_follows_accidental() {
        assert_eq!(parse_root("Db").unwrap().0.spelling(), Spelling::Flat);
        assert_eq!(parse_root("C#").unwrap().0.spelling(), Spelling::Sharp);
        assert_eq!(parse_root("C").unwrap().0.spelling(), Spelling::Sharp);
    }

    #[test]
    fn test_display() {
        assert_eq!(parse_root("D♭").unwrap().0.to_string(), "Db");
        assert_eq!(parse_root("F♯").unwrap().0.to_string(), "F#");
        assert_eq!(parse_root("A").unwrap().0.to_string(), "A");
    }
}
