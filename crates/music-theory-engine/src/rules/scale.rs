//! Scale-building rules.
//!
//! Each mode replaces the whole tone set, so when several mode names match
//! the last one registered wins. More specific names are registered after the
//! general names they contain: "Melodic Minor Descend" after "Melodic Minor
//! Ascend" after "Minor", and "Mixolydian" after "Lydian".
//!
//! A minor word must end where a letter cannot follow, so the `m` of
//! "harmonic major" is not read as minor.

use crate::rule::Effect::Replace;
use crate::rule::RuleDef;

const IONIAN: &[i32] = &[0, 2, 4, 5, 7, 9, 11];
const AEOLIAN: &[i32] = &[0, 2, 3, 5, 7, 8, 10];

/// Name of the rule that applies when nothing else matches.
pub const DEFAULT_MODE: &str = "Default (Major)";

pub(crate) const SCALE_RULES: &[RuleDef] = &[
    RuleDef {
        name: DEFAULT_MODE,
        pattern: None,
        effects: &[Replace(IONIAN)],
    },
    RuleDef {
        name: "Minor",
        pattern: Some(r"(?:^|[^a-z])(?:(?-i:m)|min|minor)(?:[^a-z]|$)"),
        effects: &[Replace(AEOLIAN)],
    },
    RuleDef {
        name: "Major",
        pattern: Some(r"(?:^|[^a-z])(?:(?-i:M)|maj|major)(?:[^a-z]|$)"),
        effects: &[Replace(IONIAN)],
    },
    RuleDef {
        name: "Natural Minor",
        pattern: Some(r"nat(?:ural)?\s*(?:(?-i:m)|min|minor)(?:[^a-z]|$)"),
        effects: &[Replace(AEOLIAN)],
    },
    RuleDef {
        name: "Diminished",
        pattern: Some(r"(?:^|[^a-z])(?:°|dim|diminished)"),
        effects: &[Replace(&[0, 2, 3, 5, 6, 8, 9, 11])],
    },
    RuleDef {
        name: "Augmented",
        pattern: Some(r"(?:^|[^a-z])(?:\+|aug|augmented)"),
        effects: &[Replace(&[0, 3, 4, 7, 8, 11])],
    },
    RuleDef {
        name: "Melodic Minor Ascend",
        pattern: Some(r"mel(?:odic)?\s*(?:(?-i:m)|min|minor)(?:[^a-z]|$)"),
        effects: &[Replace(&[0, 2, 3, 5, 7, 9, 11])],
    },
    RuleDef {
        name: "Melodic Minor Descend",
        pattern: Some(r"mel(?:odic)?\s*(?:(?-i:m)|min|minor)(?:[^a-z]|$)\s*desc(?:end(?:ing)?)?"),
        effects: &[Replace(AEOLIAN)],
    },
    RuleDef {
        name: "Harmonic Minor",
        pattern: Some(r"harm(?:onic)?\s*(?:(?-i:m)|min|minor)(?:[^a-z]|$)"),
        effects: &[Replace(&[0, 2, 3, 5, 7, 8, 11])],
    },
    RuleDef {
        name: "Ionian",
        pattern: Some(r"ionian"),
        effects: &[Replace(IONIAN)],
    },
    RuleDef {
        name: "Dorian",
        pattern: Some(r"dorian"),
        effects: &[Replace(&[0, 2, 3, 5, 7, 9, 10])],
    },
    RuleDef {
        name: "Phrygian",
        pattern: Some(r"phrygian"),
        effects: &[Replace(&[0, 1, 3, 5, 7, 8, 10])],
    },
    RuleDef {
        name: "Lydian",
        pattern: Some(r"lydian"),
        effects: &[Replace(&[0, 2, 4, 6, 7, 9, 11])],
    },
    RuleDef {
        name: "Mixolydian",
        pattern: Some(r"mixolydian"),
        effects: &[Replace(&[0, 2, 4, 5, 7, 9, 10])],
    },
    RuleDef {
        name: "Aeolian",
        pattern: Some(r"aeolian"),
        effects: &[Replace(AEOLIAN)],
    },
    RuleDef {
        name: "Locrian",
        pattern: Some(r"locrian"),
        effects: &[Replace(&[0, 1, 3, 5, 6, 8, 10])],
    },
];
