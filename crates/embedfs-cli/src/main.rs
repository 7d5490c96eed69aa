//! embedfs command-line interface.
//!
//! Generates Rust source embedding a directory tree, and inspects or reads
//! trees the way the generated filesystem would serve them.
//!
//! # Architecture
//!
//! - `generate` - Write the embedding source file for a directory
//! - `inspect` - List what a directory would embed
//! - `cat` - Print one file as the embedded filesystem serves it
//! - `completions` - Generate shell completions
//!
//! # Examples
//!
//! ```bash
//! # Embed ./assets as ASSETS
//! embedfs generate --dir assets --out src/assets_generated.rs
//!
//! # Show what would be embedded
//! embedfs inspect assets --format json
//!
//! # Read a file back
//! embedfs cat assets /css/site.css
//! ```

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use embedfs_cli::cli::{ExitCode, OutputFormat};
use embedfs_cli::commands;
use embedfs_codegen::{ContentMode, GenerateOptions};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// embedfs - Embed directory trees into Rust binaries.
#[derive(Parser, Debug)]
#[command(name = "embedfs")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (json, text, pretty)
    #[arg(long = "format", global = true, default_value = "pretty")]
    format: String,
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate Rust source embedding a directory.
    ///
    /// The source defines a `static` holding every regular file under the
    /// directory. The output file is replaced atomically and left untouched
    /// if anything fails.
    Generate {
        /// Name of the generated static
        #[arg(long, env = "EMBEDFS_ID", default_value = "ASSETS")]
        id: String,

        /// File to write the generated source to
        #[arg(long, env = "EMBEDFS_OUT", default_value = "embedfs_generated.rs")]
        out: PathBuf,

        /// Directory to embed
        #[arg(long, env = "EMBEDFS_DIR", default_value = "assets")]
        dir: PathBuf,

        /// Wrap the static in `pub mod <MODULE>`
        #[arg(long, env = "EMBEDFS_MODULE")]
        module: Option<String>,

        /// Path generated code uses to reach the embedfs crate
        #[arg(long, env = "EMBEDFS_CRATE_PATH", default_value = "::embedfs")]
        crate_path: String,

        /// Store every file as raw bytes
        #[arg(long)]
        raw_only: bool,
    },

    /// List the files a directory would embed.
    Inspect {
        /// Directory to inspect
        dir: PathBuf,

        /// Report every file as raw bytes
        #[arg(long)]
        raw_only: bool,
    },

    /// Print one file as the embedded filesystem would serve it.
    Cat {
        /// Directory to embed
        dir: PathBuf,

        /// Root-relative path of the file, e.g. /css/site.css
        path: String,
    },

    /// Generate shell completions.
    Completions {
        /// Target shell for completion generation
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose)?;

    let exit_code = match cli.format.parse::<OutputFormat>() {
        Ok(output_format) => match execute_command(cli.command, output_format) {
            Ok(code) => code,
            Err(err) => {
                eprintln!("Error: {err:#}");
                ExitCode::for_error(&err)
            }
        },
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::INVALID_INPUT
        }
    };

    std::process::exit(exit_code.as_i32());
}

/// Initializes logging on stderr so stdout carries only command output.
///
/// `--verbose` forces debug level; otherwise `RUST_LOG` applies, falling
/// back to info.
fn init_logging(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()?;

    Ok(())
}

const fn content_mode(raw_only: bool) -> ContentMode {
    if raw_only {
        ContentMode::Raw
    } else {
        ContentMode::Auto
    }
}

/// Routes a parsed command to its handler.
fn execute_command(command: Commands, output_format: OutputFormat) -> Result<ExitCode> {
    match command {
        Commands::Generate {
            id,
            out,
            dir,
            module,
            crate_path,
            raw_only,
        } => {
            let mut options = GenerateOptions::new(id, dir, out)
                .with_crate_path(crate_path)
                .with_content_mode(content_mode(raw_only));
            options.module = module;
            commands::generate::run(&options, output_format)
        }
        Commands::Inspect { dir, raw_only } => {
            commands::inspect::run(&dir, content_mode(raw_only), output_format)
        }
        Commands::Cat { dir, path } => commands::cat::run(&dir, &path, ContentMode::Auto),
        Commands::Completions { shell } => {
            Ok(commands::completions::run(shell, &mut Cli::command()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_generate_defaults() {
        let cli = Cli::try_parse_from(["embedfs", "generate"]).unwrap();
        match cli.command {
            Commands::Generate {
                id,
                out,
                dir,
                module,
                crate_path,
                raw_only,
            } => {
                assert_eq!(id, "ASSETS");
                assert_eq!(out, PathBuf::from("embedfs_generated.rs"));
                assert_eq!(dir, PathBuf::from("assets"));
                assert!(module.is_none());
                assert_eq!(crate_path, "::embedfs");
                assert!(!raw_only);
            }
            other => panic!("unexpected command: {other:?}"),
        }
        assert_eq!(cli.format, "pretty");
        assert!(!cli.verbose);
    }

    #[test]
    fn test_parse_generate_flags() {
        let cli = Cli::try_parse_from([
            "embedfs",
            "generate",
            "--id",
            "SITE",
            "--out",
            "site.rs",
            "--dir",
            "static",
            "--module",
            "site",
            "--raw-only",
            "--format",
            "json",
            "-v",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.format, "json");
        let Commands::Generate {
            id,
            module,
            raw_only,
            ..
        } = cli.command
        else {
            panic!("expected generate");
        };
        assert_eq!(id, "SITE");
        assert_eq!(module.as_deref(), Some("site"));
        assert!(raw_only);
    }

    #[test]
    fn test_parse_cat() {
        let cli = Cli::try_parse_from(["embedfs", "cat", "assets", "/a.txt"]).unwrap();
        let Commands::Cat { dir, path } = cli.command else {
            panic!("expected cat");
        };
        assert_eq!(dir, PathBuf::from("assets"));
        assert_eq!(path, "/a.txt");
    }

    #[test]
    fn test_parse_rejects_missing_cat_path() {
        assert!(Cli::try_parse_from(["embedfs", "cat", "assets"]).is_err());
    }

    #[test]
    fn test_content_mode_flag() {
        assert_eq!(content_mode(true), ContentMode::Raw);
        assert_eq!(content_mode(false), ContentMode::Auto);
    }
}
