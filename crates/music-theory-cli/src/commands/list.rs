//! Rule listing commands (`chords`, `scales`)
//!
//! Prints the names of the built-in rules in registration order, or their
//! full metadata with `--detail`.

use std::process::ExitCode;

use anyhow::Result;
use music_theory_engine::{registry_for, RuleKind};

use crate::output::{render as render_output, OutputFormat};

/// Renders the catalog of `kind`.
pub fn render(kind: RuleKind, detail: bool, format: OutputFormat) -> Result<String> {
    let registry = registry_for(kind);
    if detail {
        render_output(&registry.rule_metadata(), format)
    } else {
        render_output(&registry.names(), format)
    }
}

/// Runs a listing command.
pub fn run(kind: RuleKind, detail: bool, format: OutputFormat) -> Result<ExitCode> {
    println!("{}", render(kind, detail, format)?);
    Ok(ExitCode::SUCCESS)
}
