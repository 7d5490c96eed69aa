//! Open file handles.
//!
//! A [`File`] is a read-only cursor over content borrowed from the
//! filesystem that produced it. Every handle owns its own position, so any
//! number of handles to the same entry can be read independently.

use crate::types::{FileMode, FileRecord, system_time};
use std::io::{self, BufRead, Cursor, Read, Seek, SeekFrom};
use std::time::SystemTime;

/// Metadata of an open entry, as reported by [`File::stat`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Metadata {
    name: String,
    mode: FileMode,
    size: u64,
    mod_time: i64,
}

impl Metadata {
    /// Metadata for a synthesized directory entry.
    #[must_use]
    pub fn directory(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mode: FileMode::directory(),
            size: 0,
            mod_time: 0,
        }
    }

    /// Base name of the entry.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Permission and type bits.
    #[must_use]
    pub const fn mode(&self) -> FileMode {
        self.mode
    }

    /// Length in bytes; zero for directories.
    #[must_use]
    pub const fn len(&self) -> u64 {
        self.size
    }

    /// Returns `true` if the entry has no content.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns `true` for directory entries.
    #[must_use]
    pub const fn is_dir(&self) -> bool {
        self.mode.is_dir()
    }

    /// Returns `true` for file entries.
    #[must_use]
    pub const fn is_file(&self) -> bool {
        !self.mode.is_dir()
    }

    /// Modification time.
    #[must_use]
    pub fn modified(&self) -> SystemTime {
        system_time(self.mod_time)
    }

    /// Modification time in nanoseconds since the Unix epoch.
    #[must_use]
    pub const fn mod_time_nanos(&self) -> i64 {
        self.mod_time
    }
}

impl From<&FileRecord> for Metadata {
    fn from(record: &FileRecord) -> Self {
        Self {
            name: record.name().to_string(),
            mode: record.mode(),
            size: record.size(),
            mod_time: record.mod_time(),
        }
    }
}

/// A read-only, seekable handle to an embedded file or directory.
///
/// Directory handles read as empty and never list children.
///
/// # Examples
///
/// ```
/// use embedfs::{EmbeddedFs, FileData, FileMode, FileRecord};
/// use std::io::{Read, Seek, SeekFrom};
///
/// let fs = EmbeddedFs::from_records([(
///     "/hello.txt",
///     FileRecord::new("hello.txt", FileMode::new(0o644), 0, FileData::text("hello world")),
/// )]);
///
/// let mut file = fs.open("/hello.txt").unwrap();
/// file.seek(SeekFrom::Start(6)).unwrap();
///
/// let mut rest = String::new();
/// file.read_to_string(&mut rest).unwrap();
/// assert_eq!(rest, "world");
/// ```
#[derive(Debug, Clone)]
pub struct File<'a> {
    metadata: Metadata,
    cursor: Cursor<&'a [u8]>,
}

impl<'a> File<'a> {
    pub(crate) fn from_record(record: &'a FileRecord) -> Self {
        Self {
            metadata: Metadata::from(record),
            cursor: Cursor::new(record.bytes()),
        }
    }

    pub(crate) fn directory(name: &str) -> Self {
        Self {
            metadata: Metadata::directory(name),
            cursor: Cursor::new(&[][..]),
        }
    }

    /// Metadata of the open entry.
    #[must_use]
    pub const fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Returns a copy of the entry's metadata.
    ///
    /// This never fails; it returns `io::Result` to match [`crate::VirtualFile`].
    ///
    /// # Errors
    ///
    /// None.
    pub fn stat(&self) -> io::Result<Metadata> {
        Ok(self.metadata.clone())
    }

    /// Lists directory children. Listing is unsupported, so this is always empty.
    ///
    /// # Errors
    ///
    /// None.
    pub fn read_dir(&mut self, _count: usize) -> io::Result<Vec<Metadata>> {
        Ok(Vec::new())
    }

    /// Releases the handle. Content lives as long as the filesystem, so
    /// there is nothing to release.
    ///
    /// # Errors
    ///
    /// None.
    pub fn close(self) -> io::Result<()> {
        Ok(())
    }

    /// Current read position.
    #[must_use]
    pub fn position(&self) -> u64 {
        self.cursor.position()
    }

    /// The whole content, independent of the read position.
    #[must_use]
    pub fn contents(&self) -> &'a [u8] {
        *self.cursor.get_ref()
    }
}

impl Read for File<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.cursor.read(buf)
    }
}

impl BufRead for File<'_> {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        self.cursor.fill_buf()
    }

    fn consume(&mut self, amt: usize) {
        self.cursor.consume(amt);
    }
}

impl Seek for File<'_> {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.cursor.seek(pos)
    }
}
