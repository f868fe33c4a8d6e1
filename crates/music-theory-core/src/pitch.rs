//! Note frequency in twelve-tone equal temperament.
//!
//! Uses `f = tuning * 2^((n - 69) / 12)` where `n` is the MIDI-style note
//! number `(octave + 1) * 12 + semitone` and 69 is A4. The semitone is the
//! letter plus its accidental, so `Cb4` sits below `C4` and `B#4` above `B4`.

use crate::error::{TheoryError, TheoryResult};
use crate::note::{parse_root, Note};

/// Concert pitch of A4 in Hz.
pub const DEFAULT_TUNING_HZ: f64 = 440.0;

/// Octave assumed when a note name carries none.
pub const DEFAULT_OCTAVE: i32 = 4;

/// MIDI number of A4.
const A4_MIDI: i32 = 69;

/// Pitch resolution settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PitchOptions {
    /// Frequency of A4 in Hz.
    pub tuning_hz: f64,
    /// Octave used by [`of_note`] when the name has no octave digits.
    pub default_octave: i32,
}

impl Default for PitchOptions {
    fn default() -> Self {
        Self {
            tuning_hz: DEFAULT_TUNING_HZ,
            default_octave: DEFAULT_OCTAVE,
        }
    }
}

impl PitchOptions {
    /// Options with a custom A4 tuning.
    pub fn with_tuning(tuning_hz: f64) -> Self {
        Self {
            tuning_hz,
            ..Self::default()
        }
    }
}

/// MIDI-style note number: C4 = 60, A4 = 69. `None` if the octave is too
/// large for an `i32` note number.
pub fn midi_number(note: &Note, octave: i32) -> Option<i32> {
    octave
        .checked_add(1)?
        .checked_mul(12)?
        .checked_add(note.semitone())
}

/// Frequency in Hz of MIDI-style note `n` at the given A4 tuning.
///
/// # Examples
/// ```
/// use music_theory_core::pitch::midi_to_freq;
///
/// assert!((midi_to_freq(69, 440.0) - 440.0).abs() < 1e-9);
/// assert!((midi_to_freq(60, 440.0) - 261.626).abs() < 0.001);
/// ```
pub fn midi_to_freq(n: i32, tuning_hz: f64) -> f64 {
    tuning_hz * 2.0_f64.powf((n as f64 - A4_MIDI as f64) / 12.0)
}

/// Frequency of a note name with optional octave suffix (`A4`, `C#5`, `Bb`).
///
/// # Examples
/// ```
/// use music_theory_core::pitch::{of_note, PitchOptions};
///
/// let hz = of_note("A4", &PitchOptions::default()).unwrap();
/// assert!((hz - 440.0).abs() < 1e-9);
///
/// let hz = of_note("A", &PitchOptions::with_tuning(432.0)).unwrap();
/// assert!((hz - 432.0).abs() < 1e-9);
/// ```
pub fn of_note(name: &str, options: &PitchOptions) -> TheoryResult<f64> {
    validate_tuning(options.tuning_hz)?;
    let (note, rest) = parse_note(name)?;
    let octave = if rest.is_empty() {
        options.default_octave
    } else {
        parse_octave(rest, name)?
    };
    let n = checked_midi(&note, octave, name)?;
    Ok(midi_to_freq(n, options.tuning_hz))
}

/// Frequency of a pitch-class name in an explicitly given octave.
///
/// # Examples
/// ```
/// use music_theory_core::pitch::{of_class_and_octave, PitchOptions};
///
/// let hz = of_class_and_octave("C", "4", &PitchOptions::default()).unwrap();
/// assert!((hz - 261.626).abs() < 0.001);
/// ```
pub fn of_class_and_octave(
    class: &str,
    octave: &str,
    options: &PitchOptions,
) -> TheoryResult<f64> {
    validate_tuning(options.tuning_hz)?;
    let (note, rest) = parse_note(class)?;
    if !rest.is_empty() {
        return Err(TheoryError::invalid_pitch(
            class,
            format!("unexpected '{}' after note name", rest),
        ));
    }
    let octave = parse_octave(octave.trim(), octave)?;
    let n = checked_midi(&note, octave, class)?;
    Ok(midi_to_freq(n, options.tuning_hz))
}

fn parse_note(name: &str) -> TheoryResult<(Note, &str)> {
    let (note, rest) = parse_root(name)
        .map_err(|_| TheoryError::invalid_pitch(name, "expected a note letter A-G"))?;
    Ok((note, rest.trim()))
}

fn parse_octave(text: &str, input: &str) -> TheoryResult<i32> {
    text.parse::<i32>()
        .map_err(|_| TheoryError::invalid_pitch(input, format!("'{}' is not an octave", text)))
}

fn checked_midi(note: &Note, octave: i32, input: &str) -> TheoryResult<i32> {
    midi_number(note, octave).ok_or_else(|| {
        TheoryError::invalid_pitch(input, format!("octave {} is out of range", octave))
    })
}

fn validate_tuning(tuning_hz: f64) -> TheoryResult<()> {
    if tuning_hz.is_finite() && tuning_hz > 0.0 {
        Ok(())
    } else {
        Err(TheoryError::invalid_pitch(
            tuning_hz.to_string(),
            "tuning must be a positive frequency",
        ))
    }
}
