//! Built-in rule catalogs.

mod chord;
mod scale;


use crate::rule::{RuleDef, RuleKind};

pub use scale::DEFAULT_MODE;

/// Returns the catalog for `kind`, in registration order.
pub fn definitions(kind: RuleKind) -> &'static [RuleDef] {
    match kind {
        RuleKind::Chord => chord::CHORD_RULES,
        RuleKind::Scale => scale::SCALE_RULES,
    }
}
