//! Key resolution: root, major/minor mode and the relative key.

use music_theory_core::{tokenize, Degree, PitchClass, Spelling, TheoryResult};
use serde::{Deserialize, Serialize};

use crate::options::ResolveOptions;
use crate::scale::Scale;

/// Semitones between a major key and its relative minor.
const RELATIVE_OFFSET: i32 = 3;

/// Tonality of a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyMode {
    Major,
    Minor,
}

impl KeyMode {
    /// Major for Minor and the reverse.
    pub fn opposite(self) -> Self {
        match self {
            KeyMode::Major => KeyMode::Minor,
            KeyMode::Minor => KeyMode::Major,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            KeyMode::Major => "Major",
            KeyMode::Minor => "Minor",
        }
    }
}

impl std::fmt::Display for KeyMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A key and, for a key resolved from a name, its relative key.
///
/// The relative key carries no relative of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key {
    root: PitchClass,
    spelling: Spelling,
    mode: KeyMode,
    relative: Option<Box<Key>>,
}

impl Key {
    /// Resolves `name` ("Db", "F#m", "A minor").
    ///
    /// # Examples
    /// ```
    /// use music_theory_engine::{Key, KeyMode};
    ///
    /// let key = Key::of("Db").unwrap();
    /// assert_eq!(key.root_name(), "Db");
    /// assert_eq!(key.mode(), KeyMode::Major);
    /// let relative = key.relative().unwrap();
    /// assert_eq!(relative.root_name(), "Bb");
    /// assert_eq!(relative.mode(), KeyMode::Minor);
    /// ```
    pub fn of(name: &str) -> TheoryResult<Self> {
        Self::of_with(name, &ResolveOptions::default())
    }

    /// Resolves `name` with explicit options.
    ///
    /// The mode is Minor when the name carries the minor marker or its mode
    /// has a minor third; otherwise Major.
    pub fn of_with(name: &str, options: &ResolveOptions) -> TheoryResult<Self> {
        let parsed = tokenize(name)?;
        let scale = Scale::of_with(name, options)?;
        let minor_third = scale
            .tones()
            .get(Degree::THIRD)
            .is_some_and(|pc| pc.interval_from(scale.root()) == 3);
        let mode = if parsed.minor || minor_third {
            KeyMode::Minor
        } else {
            KeyMode::Major
        };

        let spelling = options.spelling_for(&parsed.root);
        let mut key = Self::bare(parsed.root.pitch_class(), spelling, mode);
        key.relative = Some(Box::new(key.relative_key()));
        log::debug!(
            "key '{}': {} {}, relative {} {}",
            name,
            key.root_name(),
            key.mode,
            key.relative_key().root_name(),
            key.relative_key().mode
        );
        Ok(key)
    }

    /// A key without a relative.
    pub fn bare(root: PitchClass, spelling: Spelling, mode: KeyMode) -> Self {
        Self {
            root,
            spelling,
            mode,
            relative: None,
        }
    }

    pub fn root(&self) -> PitchClass {
        self.root
    }

    /// Root note name under this key's spelling.
    pub fn root_name(&self) -> &'static str {
        self.root.name(self.spelling)
    }

    pub fn spelling(&self) -> Spelling {
        self.spelling
    }

    pub fn mode(&self) -> KeyMode {
        self.mode
    }

    /// The stored relative key, present on keys resolved from a name.
    pub fn relative(&self) -> Option<&Key> {
        self.relative.as_deref()
    }

    /// Computes the relative key: a minor third down from a major key, a
    /// minor third up from a minor key, with the opposite mode.
    pub fn relative_key(&self) -> Key {
        let offset = match self.mode {
            KeyMode::Major => -RELATIVE_OFFSET,
            KeyMode::Minor => RELATIVE_OFFSET,
        };
        Self::bare(self.root.transpose(offset), self.spelling, self.mode.opposite())
    }

    /// The seven-tone scale of this key.
    pub fn scale(&self) -> Option<Scale> {
        Scale::in_mode(self.root, self.spelling, self.mode.name())
    }
}
