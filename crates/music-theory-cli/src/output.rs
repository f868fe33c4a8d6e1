//! Serializable views of resolved names and their YAML/JSON rendering.

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use music_theory_engine::{Chord, Key, Scale};
use serde::{Deserialize, Serialize};

/// Output format for resolution results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!(
                "unknown format '{}', expected 'yaml' or 'json'",
                s
            )),
        }
    }
}

/// Renders `value` in `format`. JSON is pretty-printed; neither format has a
/// trailing newline.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> Result<String> {
    let text = match format {
        OutputFormat::Yaml => {
            serde_yaml::to_string(value).context("failed to serialize output as YAML")?
        }
        OutputFormat::Json => {
            serde_json::to_string_pretty(value).context("failed to serialize output as JSON")?
        }
    };
    Ok(text.trim_end().to_string())
}

/// A resolved chord.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChordOutput {
    /// Root note name.
    pub root: String,
    /// Degree number to note name, ascending.
    pub tones: BTreeMap<u8, String>,
    /// Rules that fired, when requested.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<String>,
}

impl ChordOutput {
    pub fn new(chord: &Chord, explain: bool) -> Self {
        Self {
            root: chord.root_name().to_string(),
            tones: chord.note_names(),
            rules: if explain {
                chord.applied_rules().iter().map(|r| r.to_string()).collect()
            } else {
                Vec::new()
            },
        }
    }
}

/// A resolved scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaleOutput {
    /// Root note name.
    pub root: String,
    /// Degree number to note name, `1..=N`.
    pub tones: BTreeMap<u8, String>,
    /// Winning mode rule, when requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
}

impl ScaleOutput {
    pub fn new(scale: &Scale, explain: bool) -> Self {
        Self {
            root: scale.root_name().to_string(),
            tones: scale.note_names(),
            mode: explain.then(|| scale.mode().to_string()),
        }
    }
}

/// A resolved key. The relative key carries no relative of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyOutput {
    pub root: String,
    pub mode: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relative: Option<Box<KeyOutput>>,
    /// Notes of the key's scale, when requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<BTreeMap<u8, String>>,
}

impl KeyOutput {
    pub fn new(key: &Key) -> Self {
        Self {
            root: key.root_name().to_string(),
            mode: key.mode().to_string(),
            relative: key.relative().map(|r| Box::new(KeyOutput::new(r))),
            scale: None,
        }
    }

    /// Adds the notes of `key`'s scale.
    pub fn with_scale(mut self, key: &Key) -> Self {
        self.scale = key.scale().map(|s| s.note_names());
        self
    }
}

/// A computed frequency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PitchOutput {
    /// Note as given on the command line.
    pub note: String,
    /// A4 reference in Hz.
    pub tuning_hz: f64,
    /// Frequency in Hz.
    pub frequency_hz: f64,
}
