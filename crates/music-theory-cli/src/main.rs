//! Music Theory CLI - resolve chord, scale and key names from the command line
//!
//! Prints the notes of a chord, scale or key as YAML (default) or JSON, lists
//! the built-in rules, and converts note names to frequencies.

use clap::{Parser, Subcommand};
use colored::Colorize;
use music_theory_core::{PitchOptions, Spelling, TheoryError, DEFAULT_TUNING_HZ};
use music_theory_engine::{ResolveOptions, RuleKind};
use std::process::ExitCode;

use music_theory_cli::commands;
use music_theory_cli::OutputFormat;

/// Music Theory - chord, scale and key name resolver
#[derive(Parser)]
#[command(name = "music-theory")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Output format (yaml or json)
    #[arg(long, global = true, default_value = "yaml", value_parser = ["yaml", "json"])]
    format: String,

    /// Output JSON instead of YAML (same as `--format json`)
    #[arg(long, global = true)]
    json: bool,

    /// Spell accidentals as flats (default: follow the root)
    #[arg(long, global = true, conflicts_with = "sharps")]
    flats: bool,

    /// Spell accidentals as sharps (default: follow the root)
    #[arg(long, global = true)]
    sharps: bool,

    /// Reject scale and key names whose mode text matches no mode
    #[arg(long, global = true)]
    strict: bool,

    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a chord name (flags go before the name)
    #[command(alias = "c")]
    Chord {
        /// Include the rules that fired
        #[arg(long)]
        explain: bool,

        /// Chord name, e.g. `Cm7` or `Cm nondominant -5 679`
        #[arg(required = true, num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
        name: Vec<String>,
    },

    /// List chord rules in precedence order
    Chords {
        /// Show each rule's trigger and effects
        #[arg(long)]
        detail: bool,
    },

    /// Resolve a scale name (flags go before the name)
    #[command(alias = "s")]
    Scale {
        /// Include the winning mode
        #[arg(long)]
        explain: bool,

        /// Scale name, e.g. `C aug` or `D Melodic Minor Descend`
        #[arg(required = true, num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
        name: Vec<String>,
    },

    /// List scale modes in precedence order
    Scales {
        /// Show each mode's trigger and intervals
        #[arg(long)]
        detail: bool,
    },

    /// Resolve a key and its relative key (flags go before the name)
    #[command(alias = "k")]
    Key {
        /// Include the notes of the key's scale
        #[arg(long)]
        scale: bool,

        /// Key name, e.g. `Db` or `F#m`
        #[arg(required = true, num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
        name: Vec<String>,
    },

    /// Frequency of a note in Hz
    #[command(alias = "p")]
    Pitch {
        /// Note name, optionally with octave (`A4`, `C#5`, `Bb`)
        note: String,

        /// Octave, when not part of the note name (default: 4)
        #[arg(allow_negative_numbers = true)]
        octave: Option<String>,

        /// Frequency of A4 in Hz
        #[arg(short, long, default_value_t = DEFAULT_TUNING_HZ)]
        tuning: f64,
    },
}

impl Cli {
    fn resolve_options(&self) -> ResolveOptions {
        let options = ResolveOptions::new().strict(self.strict);
        if self.flats {
            options.with_spelling(Spelling::Flat)
        } else if self.sharps {
            options.with_spelling(Spelling::Sharp)
        } else {
            options
        }
    }

    fn format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            self.format.parse().unwrap_or_default()
        }
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::init_from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, default_filter),
    );
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let options = cli.resolve_options();
    let format = cli.format();

    let result = match &cli.command {
        Commands::Chord { explain, name } => {
            commands::chord::run(&name.join(" "), &options, *explain, format)
        }
        Commands::Chords { detail } => commands::list::run(RuleKind::Chord, *detail, format),
        Commands::Scale { explain, name } => {
            commands::scale::run(&name.join(" "), &options, *explain, format)
        }
        Commands::Scales { detail } => commands::list::run(RuleKind::Scale, *detail, format),
        Commands::Key { scale, name } => {
            commands::key::run(&name.join(" "), &options, *scale, format)
        }
        Commands::Pitch {
            note,
            octave,
            tuning,
        } => commands::pitch::run(
            note,
            octave.as_deref(),
            &PitchOptions::with_tuning(*tuning),
            format,
        ),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            match e.downcast_ref::<TheoryError>() {
                Some(err) => eprintln!("{} [{}]: {}", "error".red(), err.code(), err),
                None => eprintln!("{}: {}", "error".red(), e),
            }
            ExitCode::from(1)
        }
    }
}
