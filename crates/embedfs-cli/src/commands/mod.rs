//! Command implementations for the embedfs CLI.
//!
//! Each command module runs one subcommand and formats its output according
//! to the requested format. Results go to stdout; logs go to stderr.

pub mod cat;
pub mod completions;
pub mod generate;
pub mod inspect;
