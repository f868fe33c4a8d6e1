//! Music Theory Engine
//!
//! Resolves human-readable names into chords, scales and keys by running an
//! ordered chain of named rules over the text that follows the root note.
//!
//! # Example
//!
//! ```
//! use music_theory_engine::{Chord, RuleRegistry};
//!
//! let chord = Chord::of("Cm nondominant -5 679").unwrap();
//! let tones: Vec<_> = chord.note_names().into_iter().collect();
//! assert_eq!(tones[0], (3, "D#".to_string()));
//!
//! // The chord catalog, in precedence order
//! let names = RuleRegistry::chords().names();
//! assert_eq!(names[0], "Basic");
//! ```
//!
//! # Module Structure
//!
//! - [`rule`]: Rule model (trigger + effects)
//! - [`rules`]: Built-in chord and scale catalogs
//! - [`registry`]: Process-wide, read-only rule registries
//! - [`executor`]: Single-pass rule-chain execution
//! - [`chord`], [`scale`], [`key`]: Resolvers
//! - [`options`]: Spelling and strictness settings

pub mod chord;
pub mod executor;
pub mod key;
pub mod options;
pub mod registry;
pub mod rule;
pub mod rules;
pub mod scale;

// Re-export main types
pub use chord::Chord;
pub use executor::{execute, ChainOutput};
pub use key::{Key, KeyMode};
pub use options::ResolveOptions;
pub use registry::{registry_for, RuleMetadata, RuleRegistry};
pub use rule::{Effect, Rule, RuleDef, RuleKind, Trigger};
pub use rules::DEFAULT_MODE;
pub use scale::Scale;

/// Names of the chord rules in registration order.
pub fn chord_rule_names() -> Vec<&'static str> {
    RuleRegistry::chords().names()
}

/// Names of the scale rules in registration order.
pub fn scale_rule_names() -> Vec<&'static str> {
    RuleRegistry::scales().names()
}
