//! Scale command implementation

use std::process::ExitCode;

use anyhow::Result;
use music_theory_engine::{ResolveOptions, Scale};

use crate::output::{render as render_output, OutputFormat, ScaleOutput};

/// Resolves `name` and renders it. With `explain` the winning mode is
/// included.
pub fn render(
    name: &str,
    options: &ResolveOptions,
    explain: bool,
    format: OutputFormat,
) -> Result<String> {
    let scale = Scale::of_with(name, options)?;
    render_output(&ScaleOutput::new(&scale, explain), format)
}

/// Runs the scale command.
pub fn run(
    name: &str,
    options: &ResolveOptions,
    explain: bool,
    format: OutputFormat,
) -> Result<ExitCode> {
    println!("{}", render(name, options, explain, format)?);
    Ok(ExitCode::SUCCESS)
}
