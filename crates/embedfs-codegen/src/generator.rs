//! Generation of embedded filesystem modules.
//!
//! [`Generator::generate`] walks the source directory, renders the table as
//! Rust source, and writes it atomically: the source is written to a
//! temporary file next to the output and renamed into place only once it is
//! complete.
//!
//! # Examples
//!
//! ```
//! use embedfs_codegen::{GenerateOptions, Generator};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let src = tempfile::tempdir()?;
//! std::fs::write(src.path().join("a.txt"), "hi")?;
//! let out = tempfile::tempdir()?;
//!
//! let options = GenerateOptions::new("ASSETS", src.path(), out.path().join("assets.rs"));
//! let summary = Generator::new()?.generate(&options)?;
//!
//! assert_eq!(summary.files, 1);
//! let source = std::fs::read_to_string(out.path().join("assets.rs"))?;
//! assert!(source.contains(r#"::embedfs::FileData::text("hi")"#));
//! # Ok(())
//! # }
//! ```

use crate::error::{GenerateError, Result};
use crate::literal::{data_expr, mode_literal, string_literal};
use crate::options::{ContentMode, GenerateOptions};
use crate::template_engine::{EMBEDDED_FS_TEMPLATE, TemplateEngine};
use crate::walker::build_table;
use embedfs::FileTable;
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Outcome of a generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerateSummary {
    /// Where the artifact was written
    pub output: PathBuf,
    /// Number of embedded files
    pub files: usize,
    /// Files stored as text
    pub text_files: usize,
    /// Files stored as raw bytes
    pub raw_files: usize,
    /// Total content size in bytes
    pub total_bytes: u64,
    /// Representation policy used
    pub content_mode: ContentMode,
}

impl GenerateSummary {
    fn new(output: &Path, table: &FileTable, content_mode: ContentMode) -> Self {
        let text_files = table
            .iter()
            .filter(|(_, record)| record.data().is_text())
            .count();
        Self {
            output: output.to_path_buf(),
            files: table.len(),
            text_files,
            raw_files: table.len() - text_files,
            total_bytes: table.total_size(),
            content_mode,
        }
    }
}

#[derive(Serialize)]
struct RenderContext<'a> {
    id: &'a str,
    module: Option<&'a str>,
    crate_path: &'a str,
    file_count: usize,
    entries: Vec<EntryContext>,
}

#[derive(Serialize)]
struct EntryContext {
    key: String,
    name: String,
    mode: String,
    mod_time: String,
    data: String,
}

/// Renders file tables into Rust source.
#[derive(Debug)]
pub struct Generator<'a> {
    engine: TemplateEngine<'a>,
}

impl Generator<'_> {
    /// Creates a generator with the built-in template.
    ///
    /// # Errors
    ///
    /// Returns an error if template registration fails.
    pub fn new() -> Result<Self> {
        Ok(Self {
            engine: TemplateEngine::new()?,
        })
    }

    /// Renders `table` as Rust source.
    ///
    /// Rendering is pure: the same options and table always produce the
    /// same text. Entries appear in key order.
    ///
    /// # Errors
    ///
    /// Returns an error if the options are invalid or rendering fails.
    pub fn render(&self, options: &GenerateOptions, table: &FileTable) -> Result<String> {
        options.validate()?;

        let crate_path = options.crate_path.as_str();
        let entries = table
            .iter()
            .map(|(key, record)| EntryContext {
                key: string_literal(key),
                name: string_literal(record.name()),
                mode: mode_literal(record.mode().bits()),
                mod_time: record.mod_time().to_string(),
                data: data_expr(crate_path, record.data()),
            })
            .collect();

        let context = RenderContext {
            id: &options.id,
            module: options.module.as_deref(),
            crate_path,
            file_count: table.len(),
            entries,
        };
        self.engine.render(EMBEDDED_FS_TEMPLATE, &context)
    }

    /// Walks `options.dir`, renders the table, and writes it to `options.out`.
    ///
    /// # Errors
    ///
    /// Returns an error if the options are invalid, any file cannot be read,
    /// or the output cannot be written. On error the output path is left
    /// exactly as it was.
    pub fn generate(&self, options: &GenerateOptions) -> Result<GenerateSummary> {
        options.validate()?;

        info!(
            "Embedding {} as {}",
            options.dir.display(),
            options.id
        );
        let table = build_table(&options.dir, options.content_mode)?;
        let source = self.render(options, &table)?;
        write_atomic(&options.out, source.as_bytes())?;

        let summary = GenerateSummary::new(&options.out, &table, options.content_mode);
        info!(
            files = summary.files,
            text = summary.text_files,
            raw = summary.raw_files,
            bytes = summary.total_bytes,
            "Wrote {}",
            summary.output.display()
        );
        Ok(summary)
    }
}

/// Runs a full generation with a fresh [`Generator`].
///
/// # Errors
///
/// See [`Generator::generate`].
pub fn generate(options: &GenerateOptions) -> Result<GenerateSummary> {
    Generator::new()?.generate(options)
}

/// Writes `contents` to `path` via a temporary file in the same directory.
///
/// The temporary file is removed if any step fails, so `path` either keeps
/// its previous content or receives the complete new content.
///
/// # Errors
///
/// Returns `GenerateError::Write` if the temporary file cannot be created,
/// written, synced, or renamed over `path`.
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let write_error = |source| GenerateError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut temp = tempfile::Builder::new()
        .prefix(".embedfs-")
        .suffix(".tmp")
        .tempfile_in(parent)
        .map_err(write_error)?;
    temp.write_all(contents).map_err(write_error)?;
    temp.as_file().sync_all().map_err(write_error)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        temp.as_file()
            .set_permissions(std::fs::Permissions::from_mode(0o644))
            .map_err(write_error)?;
    }

    debug!(temp = %temp.path().display(), "persisting generated source");
    temp.persist(path).map_err(|e| write_error(e.error))?;
    Ok(())
}
