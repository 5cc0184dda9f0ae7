//! Subcommand handlers for the tfrag binary.

pub mod completions;
pub mod config;
pub mod parse;
pub mod play;
