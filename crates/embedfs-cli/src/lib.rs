//! embedfs CLI library.
//!
//! Exposes the command implementations and output formatters of the
//! `embedfs` binary so they can be tested without spawning a process.

pub mod cli;
pub mod commands;
pub mod formatters;
