//! Music Theory CLI library.
//!
//! Command implementations behind the `music-theory` binary. Each command
//! has a `render` function that returns the text it would print, and a `run`
//! function that prints it and returns the process exit code.

pub mod commands;
pub mod output;

pub use output::OutputFormat;
