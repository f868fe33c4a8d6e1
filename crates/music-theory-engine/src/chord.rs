//! Chord resolution: root plus the chord rule chain.

use std::collections::BTreeMap;

use music_theory_core::{tokenize, PitchClass, Spelling, TheoryResult, ToneSet};

use crate::executor::execute;
use crate::options::ResolveOptions;
use crate::registry::RuleRegistry;

/// A chord resolved from its name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chord {
    name: String,
    root: PitchClass,
    spelling: Spelling,
    tones: ToneSet,
    applied_rules: Vec<&'static str>,
}

impl Chord {
    /// Resolves `name` ("C", "Cm7", "Cm nondominant -5 679").
    ///
    /// # Examples
    /// ```
    /// use music_theory_engine::Chord;
    ///
    /// let chord = Chord::of("Cm").unwrap();
    /// assert_eq!(chord.root_name(), "C");
    /// let names: Vec<_> = chord.note_names().into_values().collect();
    /// assert_eq!(names, ["C", "D#", "G"]);
    /// ```
    pub fn of(name: &str) -> TheoryResult<Self> {
        Self::of_with(name, &ResolveOptions::default())
    }

    /// Resolves `name` with explicit options.
    pub fn of_with(name: &str, options: &ResolveOptions) -> TheoryResult<Self> {
        let parsed = tokenize(name)?;
        let root = parsed.root.pitch_class();
        let out = execute(RuleRegistry::chords(), root, parsed.modifier);
        log::debug!(
            "chord '{}': root {}, minor marker {}, {} rule(s), {} tone(s)",
            name,
            parsed.root,
            parsed.minor,
            out.applied.len(),
            out.tones.len()
        );
        Ok(Self {
            name: name.to_string(),
            root,
            spelling: options.spelling_for(&parsed.root),
            tones: out.tones,
            applied_rules: out.applied,
        })
    }

    /// The name this chord was resolved from.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn root(&self) -> PitchClass {
        self.root
    }

    /// Root note name under this chord's spelling.
    pub fn root_name(&self) -> &'static str {
        self.root.name(self.spelling)
    }

    pub fn spelling(&self) -> Spelling {
        self.spelling
    }

    /// Final degree to pitch-class mapping.
    pub fn tones(&self) -> &ToneSet {
        &self.tones
    }

    /// Rules that fired, in order.
    pub fn applied_rules(&self) -> &[&'static str] {
        &self.applied_rules
    }

    /// Degree number to note name, ascending.
    pub fn note_names(&self) -> BTreeMap<u8, String> {
        self.tones.note_names(self.spelling)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use music_theory_core::{Degree, ErrorCode};
    use pretty_assertions::assert_eq;

    fn names(chord: &Chord) -> Vec<(u8, String)> {
        chord.note_names().into_iter().collect()
    }

    fn expect(pairs: &[(u8, &str)]) -> Vec<(u8, String)> {
        pairs.iter().map(|(d, n)| (*d, n.to_string())).collect()
    }

    #[test]
    fn test_major_triad_default() {
        let chord = Chord::of("C").unwrap();
        assert_eq!(names(&chord), expect(&[(1, "C"), (3, "E"), (5, "G")]));
        assert_eq!(chord.applied_rules(), ["Basic"]);
    }

    #[test]
    fn test_minor_triad() {
        let chord = Chord::of("Cm").unwrap();
        assert_eq!(names(&chord), expect(&[(1, "C"), (3, "D#"), (5, "G")]));
        assert_eq!(chord.applied_rules(), ["Basic", "Minor Triad"]);
    }

    #[test]
    fn test_documented_example() {
        let chord = Chord::of("Cm nondominant -5 679").unwrap();
        assert_eq!(chord.root_name(), "C");
        assert_eq!(
            names(&chord),
            expect(&[(3, "D#"), (6, "A"), (7, "A#"), (9, "D")])
        );
        assert_eq!(
            chord.applied_rules(),
            [
                "Basic",
                "Nondominant",
                "Minor Triad",
                "Omit Fifth",
                "Add Sixth",
                "Add Seventh",
                "Add Ninth"
            ]
        );
    }

    #[test]
    fn test_flat_root_spells_flats() {
        let chord = Chord::of("Dbm").unwrap();
        assert_eq!(chord.root_name(), "Db");
        assert_eq!(names(&chord), expect(&[(1, "Db"), (3, "E"), (5, "Ab")]));
    }

    #[test]
    fn test_forced_spelling() {
        let opts = ResolveOptions::new().with_spelling(Spelling::Flat);
        let chord = Chord::of_with("C7", &opts).unwrap();
        assert_eq!(chord.note_names().get(&7).map(String::as_str), Some("Bb"));
    }

    #[test]
    fn test_invalid_root() {
        let err = Chord::of("Hm7").unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidRoot);
    }

    #[test]
    fn test_idempotent() {
        let a = Chord::of("F#maj9 -5").unwrap();
        let b = Chord::of("F#maj9 -5").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.name(), "F#maj9 -5");
        assert!(!a.tones().contains(Degree::FIFTH));
    }
}
