//! Error types for name resolution and pitch computation.

use thiserror::Error;

/// Error codes for resolution failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// T001: Name does not begin with a note letter A-G
    InvalidRoot,
    /// T002: Modifier text names no registered mode (strict mode only)
    UnknownMode,
    /// T003: Malformed note, octave or tuning input
    InvalidPitchInput,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "T001").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::InvalidRoot => "T001",
            ErrorCode::UnknownMode => "T002",
            ErrorCode::InvalidPitchInput => "T003",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Top-level error type for chord, scale, key and pitch resolution.
///
/// Resolution is all-or-nothing: a caller either gets a complete result or
/// one of these.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TheoryError {
    /// The name does not start with a recognizable note letter.
    #[error("invalid root in '{name}': expected a note letter A-G")]
    InvalidRoot {
        /// The full name that failed to parse.
        name: String,
    },

    /// The modifier text was meant to be a mode but matched none.
    #[error("unknown mode '{modifier}' in '{name}'")]
    UnknownMode {
        /// The full name that failed to resolve.
        name: String,
        /// The unmatched modifier text.
        modifier: String,
    },

    /// Note name, octave or tuning input to pitch resolution was malformed.
    #[error("invalid pitch input '{input}': {reason}")]
    InvalidPitchInput {
        /// The offending input.
        input: String,
        /// Why it was rejected.
        reason: String,
    },
}

impl TheoryError {
    /// Creates an invalid-root error for `name`.
    pub fn invalid_root(name: impl Into<String>) -> Self {
        Self::InvalidRoot { name: name.into() }
    }

    /// Creates an unknown-mode error.
    pub fn unknown_mode(name: impl Into<String>, modifier: impl Into<String>) -> Self {
        Self::UnknownMode {
            name: name.into(),
            modifier: modifier.into(),
        }
    }

    /// Creates an invalid-pitch-input error.
    pub fn invalid_pitch(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidPitchInput {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Returns the stable code of this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            TheoryError::InvalidRoot { .. } => ErrorCode::InvalidRoot,
            TheoryError::UnknownMode { .. } => ErrorCode::UnknownMode,
            TheoryError::InvalidPitchInput { .. } => ErrorCode::InvalidPitchInput,
        }
    }
}

/// Result alias used across the workspace.
pub type TheoryResult<T> = Result<T, TheoryError>;
