//! Rule registry: the ordered, read-only catalogs of chord and scale rules.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::rule::{Rule, RuleKind};
use crate::rules;

static CHORD_REGISTRY: OnceLock<RuleRegistry> = OnceLock::new();
static SCALE_REGISTRY: OnceLock<RuleRegistry> = OnceLock::new();

/// Ordered catalog of rules of one kind.
///
/// Registration order is precedence order and is also the order reported by
/// [`RuleRegistry::names`].
#[derive(Debug, Clone)]
pub struct RuleRegistry {
    kind: RuleKind,
    rules: Vec<Rule>,
}

impl RuleRegistry {
    /// Creates an empty registry.
    pub fn new(kind: RuleKind) -> Self {
        Self {
            kind,
            rules: Vec::new(),
        }
    }

    /// Builds a registry from the built-in catalog for `kind`.
    pub fn default_rules(kind: RuleKind) -> Self {
        let mut registry = Self::new(kind);
        for def in rules::definitions(kind) {
            let rule = Rule::compile(def, kind).expect("invalid built-in rule pattern");
            registry.register(rule);
        }
        registry
    }

    /// Process-wide chord registry, built on first use.
    pub fn chords() -> &'static RuleRegistry {
        CHORD_REGISTRY.get_or_init(|| Self::default_rules(RuleKind::Chord))
    }

    /// Process-wide scale registry, built on first use.
    pub fn scales() -> &'static RuleRegistry {
        SCALE_REGISTRY.get_or_init(|| Self::default_rules(RuleKind::Scale))
    }

    /// Appends a rule; it takes precedence over every rule registered before it.
    pub fn register(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    pub fn kind(&self) -> RuleKind {
        self.kind
    }

    /// Returns all registered rules in order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Rule names in registration order.
    pub fn names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Looks a rule up by name, ignoring case.
    pub fn find(&self, name: &str) -> Option<&Rule> {
        self.rules
            .iter()
            .find(|r| r.name().eq_ignore_ascii_case(name))
    }

    /// Returns rule metadata for documentation/introspection.
    pub fn rule_metadata(&self) -> Vec<RuleMetadata> {
        self.rules
            .iter()
            .map(|r| RuleMetadata {
                name: r.name().to_string(),
                kind: r.kind(),
                trigger: r.trigger().describe().to_string(),
                effects: r.effects().iter().map(|e| e.to_string()).collect(),
            })
            .collect()
    }

    /// Returns the number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if no rules are registered.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// The shared registry for `kind`.
pub fn registry_for(kind: RuleKind) -> &'static RuleRegistry {
    match kind {
        RuleKind::Chord => RuleRegistry::chords(),
        RuleKind::Scale => RuleRegistry::scales(),
    }
}

/// Metadata about a rule for documentation/introspection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleMetadata {
    /// Rule name.
    pub name: String,
    /// Catalog the rule belongs to.
    pub kind: RuleKind,
    /// Trigger pattern, or "always".
    pub trigger: String,
    /// Effects in application order.
    pub effects: Vec<String>,
}
