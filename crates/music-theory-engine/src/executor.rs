//! Rule-chain executor.
//!
//! Walks a registry once, top to bottom. Every rule whose trigger matches the
//! modifier text is applied to the output of the previous one. There is no
//! branching and no lookahead: conflicts are settled by registration order
//! alone, and a run costs one trigger test per rule.

use music_theory_core::{PitchClass, ToneSet};

use crate::registry::RuleRegistry;

/// Result of running a chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainOutput {
    /// Final degree to pitch-class mapping.
    pub tones: ToneSet,
    /// Names of the rules that fired, in firing order.
    pub applied: Vec<&'static str>,
}

/// Runs every rule of `registry` against `modifier`, starting from an empty
/// tone set rooted at `root`.
pub fn execute(registry: &RuleRegistry, root: PitchClass, modifier: &str) -> ChainOutput {
    let mut tones = ToneSet::new();
    let mut applied = Vec::new();

    for rule in registry.rules() {
        if !rule.matches(modifier) {
            continue;
        }
        tones = rule.apply(root, tones);
        applied.push(rule.name());
        log::trace!(
            "rule '{}' matched '{}': {} tone(s)",
            rule.name(),
            modifier,
            tones.len()
        );
    }

    ChainOutput { tones, applied }
}
