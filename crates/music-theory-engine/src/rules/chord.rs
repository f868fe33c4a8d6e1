//! Chord-building rules.
//!
//! Order is precedence: every matching rule runs, top to bottom, and a later
//! rule overwrites what an earlier one wrote at the same degree. General rules
//! ("Add Seventh") therefore sit above the specific ones that refine them
//! ("Major Seventh"), and omissions sit below the additions they undo.
//!
//! Single letters `M` and `m` are matched case-sensitively inside otherwise
//! case-insensitive patterns. `(?:^|[^a-z])` keeps a quality word from
//! matching inside another word (the `m` of `dim7`). The major qualities may
//! also follow a minor word directly, as in `mM7` and `minmaj7`.

use music_theory_core::Degree;

use crate::rule::Effect::{Add, Alter, Omit};
use crate::rule::RuleDef;

const I: Degree = Degree::ROOT;
const III: Degree = Degree::THIRD;
const IV: Degree = Degree::FOURTH;
const V: Degree = Degree::FIFTH;
const VI: Degree = Degree::SIXTH;
const VII: Degree = Degree::SEVENTH;
const IX: Degree = Degree::NINTH;
const XI: Degree = Degree::ELEVENTH;
const XIII: Degree = Degree::THIRTEENTH;

pub(crate) const CHORD_RULES: &[RuleDef] = &[
    // Triads
    RuleDef {
        name: "Basic",
        pattern: None,
        effects: &[Add(I, 0), Add(III, 4), Add(V, 7)],
    },
    RuleDef {
        name: "Nondominant",
        pattern: Some(r"(?:non-?\s*|!)dom(?:inant)?"),
        effects: &[Omit(I)],
    },
    RuleDef {
        name: "Major Triad",
        pattern: Some(r"^(?:(?-i:M)|maj|major)(?:[^a-z]|$)"),
        effects: &[Add(III, 4), Add(V, 7)],
    },
    RuleDef {
        name: "Minor Triad",
        pattern: Some(r"^(?:(?-i:m)|min|minor)(?:[^a-z]|(?-i:M)|maj|$)"),
        effects: &[Add(III, 3), Add(V, 7)],
    },
    RuleDef {
        name: "Augmented Triad",
        pattern: Some(r"^(?:\+|aug|augmented)"),
        effects: &[Add(III, 4), Add(V, 8)],
    },
    RuleDef {
        name: "Diminished Triad",
        pattern: Some(r"^(?:°|dim|diminished)"),
        effects: &[Add(III, 3), Add(V, 6)],
    },
    RuleDef {
        name: "Suspended Triad",
        pattern: Some(r"sus(?:pended)?"),
        effects: &[Omit(III), Add(IV, 5), Add(V, 7)],
    },
    // Fifth
    RuleDef {
        name: "Omit Fifth",
        pattern: Some(r"(?:omit\s*|no\s*|-)5"),
        effects: &[Omit(V)],
    },
    RuleDef {
        name: "Flat Fifth",
        pattern: Some(r"(?:b|♭|flat\s*)5"),
        effects: &[Alter(V, -1)],
    },
    // Sixth
    RuleDef {
        name: "Add Sixth",
        pattern: Some(r"6"),
        effects: &[Add(VI, 9)],
    },
    RuleDef {
        name: "Augmented Sixth",
        pattern: Some(r"(?:\+|aug|augmented|#|♯)\s*6"),
        effects: &[Add(VI, 10)],
    },
    RuleDef {
        name: "Omit Sixth",
        pattern: Some(r"(?:omit\s*|no\s*|-)6"),
        effects: &[Omit(VI)],
    },
    // Seventh
    RuleDef {
        name: "Add Seventh",
        pattern: Some(r"7"),
        effects: &[Add(VII, 10)],
    },
    RuleDef {
        name: "Dominant Seventh",
        pattern: Some(r"(?:^|[^a-z!-])(?:dom|dominant)\s*7"),
        effects: &[Add(VII, 10)],
    },
    RuleDef {
        name: "Major Seventh",
        pattern: Some(r"(?:^|[^a-z]|(?-i:m)|min|minor)(?:(?-i:M)|maj|major|Δ)\s*7"),
        effects: &[Add(VII, 11)],
    },
    RuleDef {
        name: "Minor Seventh",
        pattern: Some(r"(?:^|[^a-z])(?:(?-i:m)|min|minor)\s*7"),
        effects: &[Add(VII, 10)],
    },
    RuleDef {
        name: "Diminished Seventh",
        pattern: Some(r"(?:°|dim|diminished)\s*7"),
        effects: &[Add(VII, 9)],
    },
    RuleDef {
        name: "Half Diminished Seventh",
        pattern: Some(r"(?:ø|half\s*dim(?:inished)?)\s*7"),
        effects: &[Add(III, 3), Add(V, 6), Add(VII, 10)],
    },
    RuleDef {
        name: "Diminished Major Seventh",
        pattern: Some(r"(?:°|dim|diminished)\s*(?:(?-i:M)|maj|major|Δ)\s*7"),
        effects: &[Add(III, 3), Add(V, 6), Add(VII, 11)],
    },
    RuleDef {
        name: "Augmented Major Seventh",
        pattern: Some(r"(?:\+|aug|augmented)\s*(?:(?-i:M)|maj|major|Δ)\s*7"),
        effects: &[Add(III, 4), Add(V, 8), Add(VII, 11)],
    },
    RuleDef {
        name: "Augmented Minor Seventh",
        pattern: Some(r"(?:\+|aug|augmented)\s*(?:(?-i:m)|min|minor)\s*7"),
        effects: &[Add(III, 4), Add(V, 8), Add(VII, 10)],
    },
    RuleDef {
        name: "Harmonic Seventh",
        pattern: Some(r"harm(?:onic)?\s*7"),
        effects: &[Add(VII, 10)],
    },
    RuleDef {
        name: "Omit Seventh",
        pattern: Some(r"(?:omit\s*|no\s*|-)7"),
        effects: &[Omit(VII)],
    },
    // Ninth
    RuleDef {
        name: "Add Ninth",
        pattern: Some(r"9"),
        effects: &[Add(IX, 14)],
    },
    RuleDef {
        name: "Dominant Ninth",
        pattern: Some(r"(?:^|[^a-z!-])(?:dom|dominant)\s*9"),
        effects: &[Add(VII, 10), Add(IX, 14)],
    },
    RuleDef {
        name: "Major Ninth",
        pattern: Some(r"(?:^|[^a-z]|(?-i:m)|min|minor)(?:(?-i:M)|maj|major|Δ)\s*9"),
        effects: &[Add(VII, 11), Add(IX, 14)],
    },
    RuleDef {
        name: "Minor Ninth",
        pattern: Some(r"(?:^|[^a-z])(?:(?-i:m)|min|minor)\s*9"),
        effects: &[Add(III, 3), Add(VII, 10), Add(IX, 14)],
    },
    RuleDef {
        name: "Sharp Ninth",
        pattern: Some(r"(?:#|♯|sharp\s*)9"),
        effects: &[Add(IX, 15)],
    },
    RuleDef {
        name: "Omit Ninth",
        pattern: Some(r"(?:omit\s*|no\s*|-)9"),
        effects: &[Omit(IX)],
    },
    // Eleventh
    RuleDef {
        name: "Add Eleventh",
        pattern: Some(r"11"),
        effects: &[Add(XI, 17)],
    },
    RuleDef {
        name: "Dominant Eleventh",
        pattern: Some(r"(?:^|[^a-z!-])(?:dom|dominant)\s*11"),
        effects: &[Add(VII, 10), Add(IX, 14), Add(XI, 17)],
    },
    RuleDef {
        name: "Major Eleventh",
        pattern: Some(r"(?:^|[^a-z]|(?-i:m)|min|minor)(?:(?-i:M)|maj|major|Δ)\s*11"),
        effects: &[Add(VII, 11), Add(IX, 14), Add(XI, 17)],
    },
    RuleDef {
        name: "Minor Eleventh",
        pattern: Some(r"(?:^|[^a-z])(?:(?-i:m)|min|minor)\s*11"),
        effects: &[Add(III, 3), Add(VII, 10), Add(IX, 14), Add(XI, 17)],
    },
    RuleDef {
        name: "Omit Eleventh",
        pattern: Some(r"(?:omit\s*|no\s*|-)11"),
        effects: &[Omit(XI)],
    },
    // Thirteenth
    RuleDef {
        name: "Add Thirteenth",
        pattern: Some(r"13"),
        effects: &[Add(XIII, 21)],
    },
    RuleDef {
        name: "Dominant Thirteenth",
        pattern: Some(r"(?:^|[^a-z!-])(?:dom|dominant)\s*13"),
        effects: &[Add(VII, 10), Add(IX, 14), Add(XI, 17), Add(XIII, 21)],
    },
    RuleDef {
        name: "Major Thirteenth",
        pattern: Some(r"(?:^|[^a-z]|(?-i:m)|min|minor)(?:(?-i:M)|maj|major|Δ)\s*13"),
        effects: &[Add(VII, 11), Add(IX, 14), Add(XI, 17), Add(XIII, 21)],
    },
    RuleDef {
        name: "Minor Thirteenth",
        pattern: Some(r"(?:^|[^a-z])(?:(?-i:m)|min|minor)\s*13"),
        effects: &[
            Add(III, 3),
            Add(VII, 10),
            Add(IX, 14),
            Add(XI, 17),
            Add(XIII, 21),
        ],
    },
];
