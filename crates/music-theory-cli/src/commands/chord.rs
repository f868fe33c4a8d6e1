//! Chord command implementation
//!
//! Resolves a chord name into its degree to note mapping.

use std::process::ExitCode;

use anyhow::Result;
use music_theory_engine::{Chord, ResolveOptions};

use crate::output::{render as render_output, ChordOutput, OutputFormat};

/// Resolves `name` and renders it.
///
/// # Arguments
/// * `name` - Chord name such as `Cm7` or `Cm nondominant -5 679`
/// * `options` - Spelling and strictness settings
/// * `explain` - Include the rules that fired
/// * `format` - YAML or JSON
pub fn render(
    name: &str,
    options: &ResolveOptions,
    explain: bool,
    format: OutputFormat,
) -> Result<String> {
    let chord = Chord::of_with(name, options)?;
    render_output(&ChordOutput::new(&chord, explain), format)
}

/// Runs the chord command.
pub fn run(
    name: &str,
    options: &ResolveOptions,
    explain: bool,
    format: OutputFormat,
) -> Result<ExitCode> {
    println!("{}", render(name, options, explain, format)?);
    Ok(ExitCode::SUCCESS)
}
