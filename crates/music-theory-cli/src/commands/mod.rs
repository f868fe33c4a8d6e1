//! Command implementations.

pub mod chord;
pub mod key;
pub mod list;
pub mod pitch;
pub mod scale;
