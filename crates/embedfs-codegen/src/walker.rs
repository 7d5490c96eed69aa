//! Source tree walking.
//!
//! Builds a [`FileTable`] with one entry per regular file reachable from a
//! root directory. Symbolic links to files are embedded with their target's
//! content; symbolic links to directories are never entered, so cyclic links
//! cannot cause unbounded traversal.
//!
//! # Examples
//!
//! ```
//! use embedfs_codegen::{ContentMode, walker::build_table};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let dir = tempfile::tempdir()?;
//! std::fs::write(dir.path().join("a.txt"), "hi")?;
//!
//! let table = build_table(dir.path(), ContentMode::Auto)?;
//! assert_eq!(table.get("/a.txt").unwrap().bytes(), b"hi");
//! # Ok(())
//! # }
//! ```

use crate::error::{GenerateError, Result};
use crate::options::ContentMode;
use embedfs::types::unix_nanos;
use embedfs::{FileData, FileMode, FileRecord, FileTable};
use std::fs::{self, Metadata};
use std::path::{Component, Path};
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

/// Walks `root` and reads every regular file into a table.
///
/// Directories are traversed but not stored. Sockets, FIFOs and other
/// special files are skipped.
///
/// # Errors
///
/// Any failure aborts the whole walk; no partial table is returned:
/// - `NotADirectory` if `root` is not a directory
/// - `Walk` if a directory cannot be listed
/// - `Io` if a file, its metadata, or a symlink target cannot be read
/// - `NonUtf8Path` if a path component is not valid UTF-8
pub fn build_table(root: impl AsRef<Path>, content_mode: ContentMode) -> Result<FileTable> {
    let root = root.as_ref();
    let root_metadata = fs::metadata(root).map_err(|source| GenerateError::Io {
        path: root.to_path_buf(),
        source,
    })?;
    if !root_metadata.is_dir() {
        return Err(GenerateError::NotADirectory {
            path: root.to_path_buf(),
        });
    }

    let mut records = Vec::new();
    for entry in WalkDir::new(root).follow_links(false).sort_by_file_name() {
        let entry = entry?;
        if let Some(record) = embed_entry(root, &entry, content_mode)? {
            records.push(record);
        }
    }

    debug!(root = %root.display(), files = records.len(), "walked source tree");
    Ok(FileTable::from_records(records))
}

fn embed_entry(
    root: &Path,
    entry: &DirEntry,
    content_mode: ContentMode,
) -> Result<Option<(String, FileRecord)>> {
    let path = entry.path();
    let Some(metadata) = file_metadata(entry)? else {
        return Ok(None);
    };

    let key = table_key(root, path)?;
    let name = entry
        .file_name()
        .to_str()
        .ok_or_else(|| GenerateError::NonUtf8Path {
            path: path.to_path_buf(),
        })?;

    let read_error = |source| GenerateError::Io {
        path: path.to_path_buf(),
        source,
    };
    let bytes = fs::read(path).map_err(read_error)?;
    let modified = metadata.modified().map_err(read_error)?;

    let data = match content_mode {
        ContentMode::Auto => FileData::classify(bytes),
        ContentMode::Raw => FileData::raw_from(bytes),
    };
    debug!(%key, size = data.len(), kind = %data.kind(), "embedding file");

    let record = FileRecord::new(
        name.to_string(),
        FileMode::from_permissions(&metadata.permissions()),
        unix_nanos(modified),
        data,
    );
    Ok(Some((key, record)))
}

/// Returns the metadata to embed for `entry`, or `None` if it is skipped.
fn file_metadata(entry: &DirEntry) -> Result<Option<Metadata>> {
    let file_type = entry.file_type();
    if file_type.is_dir() {
        return Ok(None);
    }

    let metadata = if file_type.is_symlink() {
        let path = entry.path();
        let target = fs::metadata(path).map_err(|source| GenerateError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        if target.is_dir() {
            debug!(path = %path.display(), "skipping symlink to directory");
            return Ok(None);
        }
        target
    } else {
        entry.metadata()?
    };

    if metadata.is_file() {
        Ok(Some(metadata))
    } else {
        debug!(path = %entry.path().display(), "skipping special file");
        Ok(None)
    }
}

/// Computes the table key of `path`: its location below `root`, using `/`
/// separators and a leading `/`.
///
/// # Errors
///
/// Returns `OutsideRoot` if `path` is not below `root`, or `NonUtf8Path` if
/// a component is not valid UTF-8.
///
/// # Examples
///
/// ```
/// use embedfs_codegen::walker::table_key;
/// use std::path::Path;
///
/// let key = table_key(Path::new("assets"), Path::new("assets/css/site.css")).unwrap();
/// assert_eq!(key, "/css/site.css");
/// ```
pub fn table_key(root: &Path, path: &Path) -> Result<String> {
    let relative = path
        .strip_prefix(root)
        .map_err(|_| GenerateError::OutsideRoot {
            path: path.to_path_buf(),
            root: root.to_path_buf(),
        })?;

    let mut key = String::new();
    for component in relative.components() {
        if let Component::Normal(part) = component {
            let part = part.to_str().ok_or_else(|| GenerateError::NonUtf8Path {
                path: path.to_path_buf(),
            })?;
            key.push('/');
            key.push_str(part);
        }
    }

    if key.is_empty() {
        key.push('/');
    }
    Ok(key)
}
