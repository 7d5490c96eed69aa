//! Cat command implementation.
//!
//! Builds an in-memory filesystem from a directory and copies one file to
//! stdout, exactly as a program embedding the same directory would read it.

use crate::cli::ExitCode;
use anyhow::{Context, Result, bail};
use embedfs::EmbeddedFs;
use embedfs_codegen::{ContentMode, build_table};
use std::io::{self, Write};
use std::path::Path;
use tracing::{debug, info};

/// Copies the file at `path` in `fs` to `out`, returning the bytes written.
///
/// # Errors
///
/// Returns an error if `path` is not embedded, names a directory, or `out`
/// cannot be written. A missing path keeps its `VfsError` as the source.
///
/// # Examples
///
/// ```
/// use embedfs::{EmbeddedFs, FileData, FileMode, FileRecord};
/// use embedfs_cli::commands::cat::copy_file;
///
/// let fs = EmbeddedFs::from_records([
///     ("/a.txt", FileRecord::new("a.txt", FileMode::new(0o644), 0, FileData::text("hi"))),
/// ]);
/// let mut out = Vec::new();
/// copy_file(&fs, "/a.txt", &mut out)?;
/// assert_eq!(out, b"hi");
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn copy_file(fs: &EmbeddedFs, path: &str, out: &mut dyn Write) -> Result<u64> {
    let mut file = fs.open(path).with_context(|| format!("cannot open {path}"))?;
    if file.metadata().is_dir() {
        bail!("{path} is a directory");
    }

    let written = io::copy(&mut file, out).with_context(|| format!("cannot copy {path}"))?;
    file.close()?;
    debug!(path, bytes = written, "copied embedded file");
    Ok(written)
}

/// Runs the cat command.
///
/// # Errors
///
/// Returns an error if the directory cannot be walked or the file cannot be
/// copied. A path that is not embedded maps to [`ExitCode::NOT_FOUND`].
pub fn run(dir: &Path, path: &str, content_mode: ContentMode) -> Result<ExitCode> {
    info!("Reading {path} from {}", dir.display());

    let table = build_table(dir, content_mode)
        .with_context(|| format!("failed to read {}", dir.display()))?;
    let fs = EmbeddedFs::new(table);

    let mut stdout = io::stdout().lock();
    copy_file(&fs, path, &mut stdout)?;
    stdout.flush()?;
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedfs::{FileData, FileMode, FileRecord};

    fn fs() -> EmbeddedFs {
        EmbeddedFs::from_records([
            (
                "/a.txt",
                FileRecord::new("a.txt", FileMode::new(0o644), 0, FileData::text("hi")),
            ),
            (
                "/img/b.bin",
                FileRecord::new("b.bin", FileMode::new(0o644), 0, FileData::raw(&[0x00, 0xFF])),
            ),
        ])
    }

    #[test]
    fn test_copy_text_file() {
        let mut out = Vec::new();
        assert_eq!(copy_file(&fs(), "/a.txt", &mut out).unwrap(), 2);
        assert_eq!(out, b"hi");
    }

    #[test]
    fn test_copy_binary_file() {
        let mut out = Vec::new();
        copy_file(&fs(), "/img/b.bin", &mut out).unwrap();
        assert_eq!(out, [0x00, 0xFF]);
    }

    #[test]
    fn test_copy_missing_file_is_not_found() {
        let mut out = Vec::new();
        let err = copy_file(&fs(), "/missing", &mut out).unwrap_err();
        assert_eq!(ExitCode::for_error(&err), ExitCode::NOT_FOUND);
        assert!(out.is_empty());
    }

    #[test]
    fn test_copy_directory_fails() {
        let mut out = Vec::new();
        let err = copy_file(&fs(), "/img", &mut out).unwrap_err();
        assert_eq!(ExitCode::for_error(&err), ExitCode::ERROR);
        assert!(err.to_string().contains("is a directory"));
    }
}
