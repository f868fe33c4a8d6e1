//! Rule model: a named trigger paired with a list of tone-set effects.

use music_theory_core::{Degree, PitchClass, ToneSet};
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

/// Which catalog a rule belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleKind {
    Chord,
    Scale,
}

/// One change to a tone set, measured from the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Set the degree to `root + semitones`, replacing any previous entry.
    Add(Degree, i32),
    /// Remove the degree.
    Omit(Degree),
    /// Shift whatever pitch class the degree holds. Absent degrees stay absent.
    Alter(Degree, i32),
    /// Discard everything and write degrees `1..=N` from the interval list.
    Replace(&'static [i32]),
}

impl Effect {
    fn apply(&self, root: PitchClass, tones: &mut ToneSet) {
        match *self {
            Effect::Add(degree, semitones) => {
                tones.insert(degree, root.transpose(semitones));
            }
            Effect::Omit(degree) => {
                tones.remove(degree);
            }
            Effect::Alter(degree, semitones) => {
                if let Some(pc) = tones.get(degree) {
                    tones.insert(degree, pc.transpose(semitones));
                }
            }
            Effect::Replace(intervals) => {
                tones.clear();
                for (idx, semitones) in intervals.iter().enumerate() {
                    tones.insert(Degree(idx as u8 + 1), root.transpose(*semitones));
                }
            }
        }
    }
}

impl std::fmt::Display for Effect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Effect::Add(d, s) => write!(f, "add {}:+{}", d, s),
            Effect::Omit(d) => write!(f, "omit {}", d),
            Effect::Alter(d, s) => write!(f, "alter {}:{:+}", d, s),
            Effect::Replace(intervals) => write!(f, "set {:?}", intervals),
        }
    }
}

/// Static rule definition as written in the catalogs.
#[derive(Debug, Clone, Copy)]
pub struct RuleDef {
    /// Stable display name ("Flat Fifth").
    pub name: &'static str,
    /// Regex source matched case-insensitively against modifier text;
    /// `None` matches every name.
    pub pattern: Option<&'static str>,
    /// Applied in order when the trigger matches.
    pub effects: &'static [Effect],
}

/// When a rule fires.
#[derive(Debug, Clone)]
pub enum Trigger {
    /// Every name, including an empty modifier.
    Always,
    /// Modifier text contains a match.
    Pattern(Regex),
}

impl Trigger {
    /// Tests the modifier text. Never fails; an empty modifier matches only
    /// [`Trigger::Always`].
    pub fn matches(&self, modifier: &str) -> bool {
        match self {
            Trigger::Always => true,
            Trigger::Pattern(re) => !modifier.is_empty() && re.is_match(modifier),
        }
    }

    /// Human-readable form for listings.
    pub fn describe(&self) -> &str {
        match self {
            Trigger::Always => "always",
            Trigger::Pattern(re) => re.as_str(),
        }
    }
}

/// A registered rule with its trigger compiled.
#[derive(Debug, Clone)]
pub struct Rule {
    name: &'static str,
    kind: RuleKind,
    trigger: Trigger,
    effects: &'static [Effect],
}

impl Rule {
    /// Compiles a catalog definition.
    ///
    /// Returns the regex error for a malformed pattern.
    pub fn compile(def: &RuleDef, kind: RuleKind) -> Result<Self, regex::Error> {
        let trigger = match def.pattern {
            None => Trigger::Always,
            Some(src) => Trigger::Pattern(RegexBuilder::new(src).case_insensitive(true).build()?),
        };
        Ok(Self {
            name: def.name,
            kind,
            trigger,
            effects: def.effects,
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn kind(&self) -> RuleKind {
        self.kind
    }

    pub fn trigger(&self) -> &Trigger {
        &self.trigger
    }

    pub fn effects(&self) -> &'static [Effect] {
        self.effects
    }

    /// Whether this rule fires for `modifier`.
    pub fn matches(&self, modifier: &str) -> bool {
        self.trigger.matches(modifier)
    }

    /// Applies every effect to `tones`, returning the new set.
    pub fn apply(&self, root: PitchClass, mut tones: ToneSet) -> ToneSet {
        for effect in self.effects {
            effect.apply(root, &mut tones);
        }
        tones
    }
}
