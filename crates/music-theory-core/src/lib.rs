//! Music Theory Core
//!
//! Value types shared by the name-resolution engine and the command-line tool:
//! the twelve-tone pitch-class alphabet, note-name parsing, the name tokenizer,
//! the degree-to-pitch-class [`ToneSet`], and equal-temperament pitch.
//!
//! # Example
//!
//! ```
//! use music_theory_core::{tokenize, PitchClass, Spelling};
//!
//! let parsed = tokenize("Dbm7").unwrap();
//! assert_eq!(parsed.root.pitch_class(), PitchClass::new(1));
//! assert_eq!(parsed.root.spelling(), Spelling::Flat);
//! assert!(parsed.minor);
//! assert_eq!(parsed.modifier, "m7");
//! ```
//!
//! # Modules
//!
//! - [`error`]: Error taxonomy with stable error codes
//! - [`pitch_class`]: Pitch classes, transposition and enharmonic spelling
//! - [`note`]: Root note parsing (`C`, `C#`, `Db`, `B♭`)
//! - [`name`]: Splitting a chord/scale/key name into root, minor marker and modifier text
//! - [`tone_set`]: Degree to pitch-class mapping built by rule chains
//! - [`pitch`]: Note frequency in Hz

pub mod error;
pub mod name;
pub mod note;
pub mod pitch;
pub mod pitch_class;
pub mod tone_set;

// Re-export commonly used types at the crate root
pub use error::{ErrorCode, TheoryError, TheoryResult};
pub use name::{tokenize, ParsedName};
pub use note::{parse_root, Accidental, Note};
pub use pitch::{PitchOptions, DEFAULT_OCTAVE, DEFAULT_TUNING_HZ};
pub use pitch_class::{transpose, PitchClass, Spelling};
pub use tone_set::{Degree, ToneSet};
