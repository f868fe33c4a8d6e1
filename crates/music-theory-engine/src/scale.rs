//! Scale resolution: root plus the scale-mode rule chain.

use std::collections::BTreeMap;

use music_theory_core::{tokenize, PitchClass, Spelling, TheoryError, TheoryResult, ToneSet};

use crate::executor::execute;
use crate::options::ResolveOptions;
use crate::registry::RuleRegistry;
use crate::rules::DEFAULT_MODE;

/// A scale resolved from its name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scale {
    name: String,
    root: PitchClass,
    spelling: Spelling,
    mode: &'static str,
    tones: ToneSet,
    applied_rules: Vec<&'static str>,
}

impl Scale {
    /// Resolves `name` ("C", "C aug", "D Melodic Minor Descend").
    ///
    /// Unrecognized modifier text falls back to the default major mode.
    ///
    /// # Examples
    /// ```
    /// use music_theory_engine::Scale;
    ///
    /// let scale = Scale::of("C aug").unwrap();
    /// assert_eq!(scale.mode(), "Augmented");
    /// assert_eq!(scale.tones().len(), 6);
    /// ```
    pub fn of(name: &str) -> TheoryResult<Self> {
        Self::of_with(name, &ResolveOptions::default())
    }

    /// Resolves `name` with explicit options.
    ///
    /// With `strict_modes` set, non-empty modifier text that matches no mode
    /// is an [`TheoryError::UnknownMode`].
    pub fn of_with(name: &str, options: &ResolveOptions) -> TheoryResult<Self> {
        let parsed = tokenize(name)?;
        let root = parsed.root.pitch_class();
        let out = execute(RuleRegistry::scales(), root, parsed.modifier);

        let mode = out.applied.last().copied().unwrap_or(DEFAULT_MODE);
        if options.strict_modes && !parsed.modifier.is_empty() && mode == DEFAULT_MODE {
            return Err(TheoryError::unknown_mode(name, parsed.modifier));
        }
        log::debug!(
            "scale '{}': root {}, mode '{}', {} tone(s)",
            name,
            parsed.root,
            mode,
            out.tones.len()
        );

        Ok(Self {
            name: name.to_string(),
            root,
            spelling: options.spelling_for(&parsed.root),
            mode,
            tones: out.tones,
            applied_rules: out.applied,
        })
    }

    /// Builds the scale of the registered mode `mode` directly, skipping
    /// name matching. Returns `None` for an unregistered mode name.
    pub fn in_mode(root: PitchClass, spelling: Spelling, mode: &str) -> Option<Self> {
        let rule = RuleRegistry::scales().find(mode)?;
        let tones = rule.apply(root, ToneSet::new());
        Some(Self {
            name: format!("{} {}", root.name(spelling), rule.name()),
            root,
            spelling,
            mode: rule.name(),
            tones,
            applied_rules: vec![rule.name()],
        })
    }

    /// The name this scale was resolved from.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn root(&self) -> PitchClass {
        self.root
    }

    /// Root note name under this scale's spelling.
    pub fn root_name(&self) -> &'static str {
        self.root.name(self.spelling)
    }

    pub fn spelling(&self) -> Spelling {
        self.spelling
    }

    /// Name of the mode rule that produced the tones.
    pub fn mode(&self) -> &'static str {
        self.mode
    }

    /// Degrees `1..=N` in ascending order.
    pub fn tones(&self) -> &ToneSet {
        &self.tones
    }

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
    use music_theory_core::ErrorCode;
    use pretty_assertions::assert_eq;

    fn note_list(scale: &Scale) -> Vec<String> {
        scale.note_names().into_values().collect()
    }

    #[test]
    fn test_default_is_major() {
        let scale = Scale::of("C").unwrap();
        assert_eq!(scale.mode(), DEFAULT_MODE);
        assert_eq!(note_list(&scale), ["C", "D", "E", "F", "G", "A", "B"]);
    }

    #[test]
    fn test_augmented_documented_example() {
        let scale = Scale::of("C aug").unwrap();
        let pairs: Vec<(u8, String)> = scale.note_names().into_iter().collect();
        let expected: Vec<(u8, String)> = [
            (1, "C"),
            (2, "D#"),
            (3, "E"),
            (4, "G"),
            (5, "G#"),
            (6, "B"),
        ]
        .iter()
        .map(|(d, n)| (*d, n.to_string()))
        .collect();
        assert_eq!(pairs, expected);
    }

    #[test]
    fn test_minor_marker() {
        let scale = Scale::of("Am").unwrap();
        assert_eq!(scale.mode(), "Minor");
        assert_eq!(note_list(&scale), ["A", "B", "C", "D", "E", "F", "G"]);
    }

    #[test]
    fn test_unknown_mode_falls_back() {
        let scale = Scale::of("C blorp").unwrap();
        assert_eq!(scale.mode(), DEFAULT_MODE);
        assert_eq!(scale.tones().len(), 7);
    }

    #[test]
    fn test_unknown_mode_strict() {
        let opts = ResolveOptions::new().strict(true);
        let err = Scale::of_with("C blorp", &opts).unwrap_err();
        assert_eq!(err.code(), ErrorCode::UnknownMode);
        // no modifier is never an error
        assert!(Scale::of_with("C", &opts).is_ok());
        assert!(Scale::of_with("C dorian", &opts).is_ok());
    }

    #[test]
    fn test_in_mode() {
        let scale = Scale::in_mode(PitchClass::new(2), Spelling::Sharp, "dorian").unwrap();
        assert_eq!(scale.mode(), "Dorian");
        assert_eq!(note_list(&scale), ["D", "E", "F", "G", "A", "B", "C"]);
        assert!(Scale::in_mode(PitchClass::new(0), Spelling::Sharp, "Blues").is_none());
    }

    #[test]
    fn test_flat_root() {
        let scale = Scale::of("Bb").unwrap();
        assert_eq!(note_list(&scale), ["Bb", "C", "D", "Eb", "F", "G", "A"]);
    }
}
