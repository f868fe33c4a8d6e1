//! Key command implementation

use std::process::ExitCode;

use anyhow::Result;
use music_theory_engine::{Key, ResolveOptions};

use crate::output::{render as render_output, KeyOutput, OutputFormat};

/// Resolves `name` into a key with its relative key. With `with_scale` the
/// notes of the key's scale are included.
pub fn render(
    name: &str,
    options: &ResolveOptions,
    with_scale: bool,
    format: OutputFormat,
) -> Result<String> {
    let key = Key::of_with(name, options)?;
    let mut view = KeyOutput::new(&key);
    if with_scale {
        view = view.with_scale(&key);
    }
    render_output(&view, format)
}

/// Runs the key command.
pub fn run(
    name: &str,
    options: &ResolveOptions,
    with_scale: bool,
    format: OutputFormat,
) -> Result<ExitCode> {
    println!("{}", render(name, options, with_scale, format)?);
    Ok(ExitCode::SUCCESS)
}
