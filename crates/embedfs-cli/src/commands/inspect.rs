//! Inspect command implementation.
//!
//! Builds the file table for a directory in memory, without generating any
//! source, and reports what would be embedded.

use crate::cli::{ExitCode, OutputFormat};
use crate::formatters::format_output;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use embedfs::{FileRecord, FileTable};
use embedfs_codegen::{ContentMode, build_table};
use serde::Serialize;
use std::path::Path;
use tracing::info;

/// Report of the table a directory would produce.
#[derive(Debug, Serialize)]
pub struct InspectReport {
    /// Source directory
    pub root: String,
    /// Representation policy used
    pub content_mode: ContentMode,
    /// Number of files
    pub files: usize,
    /// Total content size in bytes
    pub total_bytes: u64,
    /// One entry per file, in key order
    pub entries: Vec<EntryReport>,
}

/// One embedded file.
#[derive(Debug, Serialize)]
pub struct EntryReport {
    /// Table key
    pub key: String,
    /// Permission string, `ls` style
    pub mode: String,
    /// Content size in bytes
    pub size: u64,
    /// `text` or `raw`
    pub kind: &'static str,
    /// Modification time, RFC 3339
    pub modified: String,
}

impl EntryReport {
    fn new(key: &str, record: &FileRecord) -> Self {
        let modified: DateTime<Utc> = record.modified().into();
        Self {
            key: key.to_string(),
            mode: record.mode().to_string(),
            size: record.size(),
            kind: record.data().kind().as_str(),
            modified: modified.to_rfc3339(),
        }
    }
}

impl InspectReport {
    /// Builds the report for an already walked table.
    #[must_use]
    pub fn new(root: &Path, content_mode: ContentMode, table: &FileTable) -> Self {
        Self {
            root: root.display().to_string(),
            content_mode,
            files: table.len(),
            total_bytes: table.total_size(),
            entries: table
                .iter()
                .map(|(key, record)| EntryReport::new(key, record))
                .collect(),
        }
    }
}

/// Runs the inspect command.
///
/// # Errors
///
/// Returns an error if the directory cannot be walked.
pub fn run(dir: &Path, content_mode: ContentMode, output_format: OutputFormat) -> Result<ExitCode> {
    info!("Inspecting {}", dir.display());

    let table = build_table(dir, content_mode)
        .with_context(|| format!("failed to read {}", dir.display()))?;
    let report = InspectReport::new(dir, content_mode, &table);

    println!("{}", format_output(&report, output_format)?);
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedfs::{FileData, FileMode};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_entry_report_fields() {
        let record = FileRecord::new("a.txt", FileMode::new(0o644), 0, FileData::text("hi"));
        let entry = EntryReport::new("/a.txt", &record);

        assert_eq!(entry.key, "/a.txt");
        assert_eq!(entry.mode, "-rw-r--r--");
        assert_eq!(entry.size, 2);
        assert_eq!(entry.kind, "text");
        assert_eq!(entry.modified, "1970-01-01T00:00:00+00:00");
    }

    #[test]
    fn test_report_from_directory() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("b.bin"), [0x00, 0xFF]).unwrap();
        fs::create_dir(dir.path().join("docs")).unwrap();
        fs::write(dir.path().join("docs/readme.md"), "# docs\n").unwrap();

        let table = build_table(dir.path(), ContentMode::Auto).unwrap();
        let report = InspectReport::new(dir.path(), ContentMode::Auto, &table);

        assert_eq!(report.files, 2);
        assert_eq!(report.total_bytes, 9);
        let keys: Vec<_> = report.entries.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, ["/b.bin", "/docs/readme.md"]);
        assert_eq!(report.entries[0].kind, "raw");
        assert_eq!(report.entries[1].kind, "text");
    }

    #[test]
    fn test_report_raw_mode() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.txt"), "hi").unwrap();

        let table = build_table(dir.path(), ContentMode::Raw).unwrap();
        let report = InspectReport::new(dir.path(), ContentMode::Raw, &table);
        assert_eq!(report.entries[0].kind, "raw");

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["content_mode"], "raw");
    }

    #[test]
    fn test_run_missing_directory() {
        let dir = TempDir::new().unwrap();
        let err = run(&dir.path().join("missing"), ContentMode::Auto, OutputFormat::Json)
            .unwrap_err();
        assert!(format!("{err:#}").contains("failed to read"));
    }
}
