//! Generate command implementation.
//!
//! Walks a directory and writes Rust source embedding it as a static
//! `EmbeddedFs`, then reports what was embedded.

use crate::cli::{ExitCode, OutputFormat};
use crate::formatters::format_output;
use anyhow::{Context, Result};
use embedfs_codegen::{GenerateOptions, Generator};
use tracing::info;

/// Runs the generate command.
///
/// # Errors
///
/// Returns an error if the options are invalid, the directory cannot be
/// read, or the output cannot be written. The output file is untouched on
/// failure.
///
/// # Examples
///
/// ```no_run
/// use embedfs_cli::cli::{ExitCode, OutputFormat};
/// use embedfs_cli::commands::generate;
/// use embedfs_codegen::GenerateOptions;
///
/// let options = GenerateOptions::new("ASSETS", "assets", "src/assets_generated.rs");
/// let code = generate::run(&options, OutputFormat::Pretty)?;
/// assert_eq!(code, ExitCode::SUCCESS);
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn run(options: &GenerateOptions, output_format: OutputFormat) -> Result<ExitCode> {
    info!(
        "Generating {} from {}",
        options.out.display(),
        options.dir.display()
    );

    let summary = Generator::new()?
        .generate(options)
        .with_context(|| format!("failed to embed {}", options.dir.display()))?;

    println!("{}", format_output(&summary, output_format)?);
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedfs_codegen::GenerateError;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_run_writes_output() {
        let src = TempDir::new().unwrap();
        fs::write(src.path().join("a.txt"), "hi").unwrap();
        let out = TempDir::new().unwrap();
        let options = GenerateOptions::new("ASSETS", src.path(), out.path().join("gen.rs"));

        let code = run(&options, OutputFormat::Json).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
        assert!(fs::read_to_string(&options.out).unwrap().contains("\"/a.txt\""));
    }

    #[test]
    fn test_run_invalid_id_maps_to_invalid_input() {
        let src = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let options = GenerateOptions::new("bad id", src.path(), out.path().join("gen.rs"));

        let err = run(&options, OutputFormat::Json).unwrap_err();
        assert!(err.downcast_ref::<GenerateError>().is_some());
        assert_eq!(ExitCode::for_error(&err), ExitCode::INVALID_INPUT);
        assert!(!options.out.exists());
    }

    #[test]
    fn test_run_missing_directory_is_general_error() {
        let out = TempDir::new().unwrap();
        let options = GenerateOptions::new(
            "ASSETS",
            out.path().join("missing"),
            out.path().join("gen.rs"),
        );

        let err = run(&options, OutputFormat::Json).unwrap_err();
        assert_eq!(ExitCode::for_error(&err), ExitCode::ERROR);
        assert!(format!("{err:#}").contains("failed to embed"));
    }
}
