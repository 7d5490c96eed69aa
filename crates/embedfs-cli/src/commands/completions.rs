//! Shell completion generation command.
//!
//! Generates shell completion scripts for bash, zsh, fish, and `PowerShell`.

use crate::cli::ExitCode;
use clap::Command;
use clap_complete::{Shell, generate};
use std::io::{self, Write};
use tracing::info;

/// Writes the completion script for `shell` to `out`.
///
/// # Examples
///
/// ```
/// use clap::Command;
/// use clap_complete::Shell;
/// use embedfs_cli::commands::completions;
///
/// let mut script = Vec::new();
/// completions::generate_completions(Shell::Bash, &mut Command::new("embedfs"), &mut script);
/// assert!(!script.is_empty());
/// ```
pub fn generate_completions(shell: Shell, cmd: &mut Command, out: &mut dyn Write) {
    let name = cmd.get_name().to_string();
    generate(shell, cmd, name, out);
}

/// Runs the completions command, printing the script to stdout.
#[must_use]
pub fn run(shell: Shell, cmd: &mut Command) -> ExitCode {
    info!("Generating {shell} completions");
    generate_completions(shell, cmd, &mut io::stdout().lock());
    ExitCode::SUCCESS
}
