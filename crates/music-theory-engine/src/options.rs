//! Resolution settings.

use music_theory_core::{Note, Spelling};

/// Settings shared by the chord, scale and key resolvers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Forces sharp or flat note names. `None` follows the root's accidental.
    pub spelling: Option<Spelling>,
    /// Fail with an unknown-mode error instead of falling back to the default
    /// mode when scale or key modifier text matches no mode.
    pub strict_modes: bool,
}

impl ResolveOptions {
    /// Lenient resolution with inferred spelling.
    pub fn new() -> Self {
        Self::default()
    }

    /// Forces `spelling` on all output names.
    pub fn with_spelling(mut self, spelling: Spelling) -> Self {
        self.spelling = Some(spelling);
        self
    }

    /// Enables or disables strict mode matching.
    pub fn strict(mut self, strict_modes: bool) -> Self {
        self.strict_modes = strict_modes;
        self
    }

    /// Spelling to use for a name rooted at `root`.
    pub fn spelling_for(&self, root: &Note) -> Spelling {
        self.spelling.unwrap_or_else(|| root.spelling())
    }
}
