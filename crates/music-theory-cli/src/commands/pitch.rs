//! Pitch command implementation
//!
//! Converts a note name and octave into a frequency in Hz.

use std::process::ExitCode;

use anyhow::Result;
use music_theory_core::pitch::{self, PitchOptions};

use crate::output::{render as render_output, OutputFormat, PitchOutput};

/// Computes the frequency of `note`.
///
/// `note` may carry its own octave (`A4`, `C#-1`); otherwise `octave` is
/// used, and without either the default octave 4. YAML output is the bare
/// number with three decimals.
pub fn render(
    note: &str,
    octave: Option<&str>,
    options: &PitchOptions,
    format: OutputFormat,
) -> Result<String> {
    let hz = match octave {
        Some(octave) => pitch::of_class_and_octave(note, octave, options)?,
        None => pitch::of_note(note, options)?,
    };
    log::debug!("pitch '{}' at A4={} Hz: {} Hz", note, options.tuning_hz, hz);

    match format {
        OutputFormat::Yaml => Ok(format!("{:.3}", hz)),
        OutputFormat::Json => render_output(
            &PitchOutput {
                note: match octave {
                    Some(octave) => format!("{}{}", note, octave),
                    None => note.to_string(),
                },
                tuning_hz: options.tuning_hz,
                frequency_hz: hz,
            },
            format,
        ),
    }
}

/// Runs the pitch command.
pub fn run(
    note: &str,
    octave: Option<&str>,
    options: &PitchOptions,
    format: OutputFormat,
) -> Result<ExitCode> {
    println!("{}", render(note, octave, options, format)?);
    Ok(ExitCode::SUCCESS)
}
