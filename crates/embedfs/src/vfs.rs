//! Virtual filesystem over an embedded file table.
//!
//! [`EmbeddedFs`] answers `open(path)` requests against an immutable
//! [`FileTable`]. Files resolve to seekable handles over their content;
//! directories are inferred from key prefixes and resolve to empty,
//! unlistable handles.
//!
//! Hosts that serve static files generically can depend on the
//! [`FileSystem`] and [`VirtualFile`] traits instead of the concrete types.
//!
//! # Examples
//!
//! ```
//! use embedfs::{EmbeddedFs, FileData, FileMode, FileRecord};
//! use std::io::Read;
//!
//! let fs = EmbeddedFs::from_records([(
//!     "/a.txt",
//!     FileRecord::new("a.txt", FileMode::new(0o644), 0, FileData::text("hi")),
//! )]);
//!
//! let mut content = String::new();
//! fs.open("/a.txt").unwrap().read_to_string(&mut content).unwrap();
//! assert_eq!(content, "hi");
//!
//! assert!(fs.open("/missing").unwrap_err().is_not_found());
//! ```

use crate::error::{Result, VfsError};
use crate::file::{File, Metadata};
use crate::path::RequestPath;
use crate::types::{FileRecord, FileTable};
use std::borrow::Cow;
use std::io::{self, Read, Seek};

/// A read-only filesystem as seen by a static-file server.
///
/// Missing entries must surface as `io::ErrorKind::NotFound` so that
/// generic servers answer with their standard not-found response.
pub trait FileSystem {
    /// Handle type returned by [`FileSystem::open`].
    type File<'a>: VirtualFile
    where
        Self: 'a;

    /// Opens the entry at a root-relative path such as `/index.html`.
    ///
    /// # Errors
    ///
    /// Returns an error of kind `NotFound` if nothing exists at `path`.
    fn open(&self, path: &str) -> io::Result<Self::File<'_>>;
}

/// An open entry of a [`FileSystem`].
pub trait VirtualFile: Read + Seek {
    /// Returns the entry's metadata.
    ///
    /// # Errors
    ///
    /// Returns an error if metadata is unavailable.
    fn stat(&self) -> io::Result<Metadata>;

    /// Lists up to `count` directory children.
    ///
    /// # Errors
    ///
    /// Returns an error if the listing cannot be produced.
    fn read_dir(&mut self, count: usize) -> io::Result<Vec<Metadata>>;

    /// Releases the handle.
    ///
    /// # Errors
    ///
    /// Returns an error if releasing underlying resources fails.
    fn close(self) -> io::Result<()>
    where
        Self: Sized;
}

/// A read-only virtual filesystem backed by an embedded [`FileTable`].
///
/// The table is never modified after construction, so a single instance can
/// serve any number of concurrent readers without locking. Typical use is a
/// `static` produced by `embedfs-codegen`.
///
/// # Thread Safety
///
/// This type is `Send` and `Sync`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmbeddedFs {
    table: FileTable,
}

impl EmbeddedFs {
    /// Wraps a built table.
    #[must_use]
    pub const fn new(table: FileTable) -> Self {
        Self { table }
    }

    /// Builds a filesystem directly from `(key, record)` pairs.
    ///
    /// This is the entry point used by generated code.
    #[must_use]
    pub fn from_records<K, I>(records: I) -> Self
    where
        K: Into<Cow<'static, str>>,
        I: IntoIterator<Item = (K, FileRecord)>,
    {
        Self::new(FileTable::from_records(records))
    }

    /// Opens a file or inferred directory.
    ///
    /// Resolution order:
    /// 1. A file path that is a key opens that file.
    /// 2. A file path that prefixes other keys opens a directory handle.
    /// 3. A directory path (trailing `/`) opens a directory handle when it is
    ///    the root or prefixes some key.
    ///
    /// # Errors
    ///
    /// Returns `VfsError::NotFound` for anything else.
    ///
    /// # Examples
    ///
    /// ```
    /// use embedfs::{EmbeddedFs, FileData, FileMode, FileRecord};
    ///
    /// let fs = EmbeddedFs::from_records([(
    ///     "/css/site.css",
    ///     FileRecord::new("site.css", FileMode::new(0o644), 0, FileData::text("body{}")),
    /// )]);
    ///
    /// assert_eq!(fs.open("/css/site.css")?.metadata().len(), 6);
    /// assert!(fs.open("/css/")?.metadata().is_dir());
    /// assert!(fs.open("/css")?.metadata().is_dir());
    /// assert!(fs.open("/")?.metadata().is_dir());
    /// assert!(fs.open("/js/").is_err());
    /// # Ok::<(), embedfs::VfsError>(())
    /// ```
    pub fn open(&self, path: &str) -> Result<File<'_>> {
        let request = RequestPath::parse(path);
        let found = match request {
            RequestPath::File(key) => self
                .table
                .get(key)
                .map(File::from_record)
                .or_else(|| self.directory(request, key)),
            RequestPath::Dir(key) => self.directory(request, key),
        };

        found.ok_or_else(|| {
            tracing::trace!(path, "embedded entry not found");
            VfsError::NotFound {
                path: path.to_string(),
            }
        })
    }

    fn directory(&self, request: RequestPath<'_>, key: &str) -> Option<File<'_>> {
        (key.starts_with('/') && self.table.contains_dir(key))
            .then(|| File::directory(request.base_name()))
    }

    /// Returns `true` if `path` names an embedded file.
    #[must_use]
    pub fn exists(&self, path: &str) -> bool {
        self.table.contains_key(path)
    }

    /// Returns the underlying table.
    #[must_use]
    pub const fn table(&self) -> &FileTable {
        &self.table
    }

    /// Iterates over embedded files in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FileRecord)> + '_ {
        self.table.iter()
    }

    /// Number of embedded files.
    #[must_use]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns `true` if nothing is embedded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl From<FileTable> for EmbeddedFs {
    fn from(table: FileTable) -> Self {
        Self::new(table)
    }
}

impl FileSystem for EmbeddedFs {
    type File<'a> = File<'a>;

    fn open(&self, path: &str) -> io::Result<File<'_>> {
        Self::open(self, path).map_err(io::Error::from)
    }
}

impl VirtualFile for File<'_> {
    fn stat(&self) -> io::Result<Metadata> {
        Self::stat(self)
    }

    fn read_dir(&mut self, count: usize) -> io::Result<Vec<Metadata>> {
        Self::read_dir(self, count)
    }

    fn close(self) -> io::Result<()> {
        Self::close(self)
    }
}
