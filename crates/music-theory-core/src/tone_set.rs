//! Degree to pitch-class mapping.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::pitch_class::{PitchClass, Spelling};

/// Interval position relative to a root (1, 3, 5, 7, 9, 11, 13, ...).
///
/// Degrees need not be contiguous; chords usually skip some.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Degree(pub u8);

impl Degree {
    pub const ROOT: Degree = Degree(1);
    pub const SECOND: Degree = Degree(2);
    pub const THIRD: Degree = Degree(3);
    pub const FOURTH: Degree = Degree(4);
    pub const FIFTH: Degree = Degree(5);
    pub const SIXTH: Degree = Degree(6);
    pub const SEVENTH: Degree = Degree(7);
    pub const NINTH: Degree = Degree(9);
    pub const ELEVENTH: Degree = Degree(11);
    pub const THIRTEENTH: Degree = Degree(13);

    /// The degree number.
    pub fn number(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for Degree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Mapping from degree to pitch class.
///
/// Each degree appears at most once. Writing to a degree that is already
/// present replaces it; nothing is ever duplicated. Iteration is in ascending
/// degree order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToneSet {
    tones: BTreeMap<Degree, PitchClass>,
}

impl ToneSet {
    /// Creates an empty tone set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `degree` to `pitch_class`, returning the entry it replaced.
    pub fn insert(&mut self, degree: Degree, pitch_class: PitchClass) -> Option<PitchClass> {
        self.tones.insert(degree, pitch_class)
    }

    /// Removes `degree`, returning its pitch class if it was present.
    pub fn remove(&mut self, degree: Degree) -> Option<PitchClass> {
        self.tones.remove(&degree)
    }

    /// Drops every entry.
    pub fn clear(&mut self) {
        self.tones.clear();
    }

    /// Pitch class at `degree`.
    pub fn get(&self, degree: Degree) -> Option<PitchClass> {
        self.tones.get(&degree).copied()
    }

    /// Whether `degree` is present.
    pub fn contains(&self, degree: Degree) -> bool {
        self.tones.contains_key(&degree)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.tones.len()
    }

    /// True if no degree is present.
    pub fn is_empty(&self) -> bool {
        self.tones.is_empty()
    }

    /// Entries in ascending degree order.
    pub fn iter(&self) -> impl Iterator<Item = (Degree, PitchClass)> + '_ {
        self.tones.iter().map(|(d, pc)| (*d, *pc))
    }

    /// Degrees in ascending order.
    pub fn degrees(&self) -> Vec<Degree> {
        self.tones.keys().copied().collect()
    }

    /// Pitch classes in ascending degree order.
    pub fn pitch_classes(&self) -> Vec<PitchClass> {
        self.tones.values().copied().collect()
    }

    /// Degree number to note name under `spelling`.
    pub fn note_names(&self, spelling: Spelling) -> BTreeMap<u8, String> {
        self.iter()
            .map(|(d, pc)| (d.number(), pc.name(spelling).to_string()))
            .collect()
    }
}

impl FromIterator<(Degree, PitchClass)> for ToneSet {
    fn from_iter<I: IntoIterator<Item = (Degree, PitchClass)>>(iter: I) -> Self {
        Self {
            tones: iter.into_iter().collect(),
        }
    }
}
