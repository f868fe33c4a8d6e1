//! Name tokenizer.
//!
//! Splits a free-form name into its root note, the minor-quality marker and the
//! modifier text. The modifier text is handed to rule chains unparsed; each
//! rule does its own matching, so several rules may read the same characters
//! (`679` feeds three independent "add" rules).

use crate::error::TheoryResult;
use crate::note::{parse_root, Note};

/// A tokenized chord, scale or key name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedName<'a> {
    /// The root note as written.
    pub root: Note,
    /// A lower-case `m` directly after the root, not starting a longer word.
    pub minor: bool,
    /// Everything after the root, trimmed. Includes the minor marker.
    pub modifier: &'a str,
}

/// Tokenizes `name`.
///
/// Fails only when the name does not begin with a note letter.
///
/// # Examples
/// ```
/// use music_theory_core::tokenize;
///
/// let parsed = tokenize("Cm nondominant -5 679").unwrap();
/// assert!(parsed.minor);
/// assert_eq!(parsed.modifier, "m nondominant -5 679");
///
/// let parsed = tokenize("Cmaj7").unwrap();
/// assert!(!parsed.minor);
/// ```
pub fn tokenize(name: &str) -> TheoryResult<ParsedName<'_>> {
    let (root, rest) = parse_root(name)?;
    let modifier = rest.trim();
    Ok(ParsedName {
        root,
        minor: has_minor_marker(rest),
        modifier,
    })
}

/// True when `rest` starts with `m` that is not the first letter of a word.
/// A major quality written straight after it (`mM7`, `mΔ7`) still counts.
fn has_minor_marker(rest: &str) -> bool {
    let mut chars = rest.chars();
    match chars.next() {
        Some('m') => !chars
            .next()
            .is_some_and(|c| c.is_alphabetic() && c != 'M' && c != 'Δ'),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pitch_class::PitchClass;

    #[test]
    fn test_plain_root() {
        let parsed = tokenize("C").unwrap();
        assert_eq!(parsed.root.pitch_class(), PitchClass::new(0));
        assert!(!parsed.minor);
        assert_eq!(parsed.modifier, "");
    }

    #[test]
    fn test_minor_marker() {
        assert!(tokenize("Cm").unwrap().minor);
        assert!(tokenize("Cm7").unwrap().minor);
        assert!(tokenize("C#m nondominant").unwrap().minor);
        assert!(tokenize("Dbm").unwrap().minor);
    }

    #[test]
    fn test_minor_marker_before_major_quality() {
        assert!(tokenize("CmM7").unwrap().minor);
        assert!(tokenize("CmΔ7").unwrap().minor);
    }

    #[test]
    fn test_minor_marker_requires_adjacent_lowercase() {
        // part of a longer word
        assert!(!tokenize("Cmaj7").unwrap().minor);
        assert!(!tokenize("Cmin").unwrap().minor);
        // upper case is major
        assert!(!tokenize("CM7").unwrap().minor);
        // separated from the root
        assert!(!tokenize("C m").unwrap().minor);
    }

    #[test]
    fn test_modifier_is_trimmed() {
        let parsed = tokenize("G   aug  ").unwrap();
        assert_eq!(parsed.modifier, "aug");
    }

    #[test]
    fn test_invalid_root_propagates() {
        assert!(tokenize("").is_err());
        assert!(tokenize("xyz").is_err());
    }
}
