//! Core types for embedded file records.
//!
//! A [`FileTable`] maps root-relative path keys (always starting with `/`)
//! to immutable [`FileRecord`]s. Each record carries the metadata captured
//! when the source tree was walked and its content as [`FileData`].
//!
//! # Examples
//!
//! ```
//! use embedfs::{FileData, FileMode, FileRecord, FileTable};
//!
//! let table = FileTable::from_records([
//!     ("/a.txt", FileRecord::new("a.txt", FileMode::new(0o644), 0, FileData::text("hi"))),
//!     ("/b.bin", FileRecord::new("b.bin", FileMode::new(0o644), 0, FileData::raw(&[0x00, 0xFF]))),
//! ]);
//!
//! assert_eq!(table.len(), 2);
//! assert_eq!(table.get("/a.txt").unwrap().size(), 2);
//! assert!(table.contains_dir("/"));
//! ```

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use std::fs::Permissions;
use std::ops::Bound;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Epoch that record modification times are measured from.
///
/// Stored timestamps are signed nanosecond offsets from this instant, so the
/// adjustment needed to turn one back into an absolute time is zero.
pub const MOD_TIME_EPOCH: SystemTime = UNIX_EPOCH;

/// Converts a wall-clock time into signed nanoseconds since [`MOD_TIME_EPOCH`].
///
/// Times before the epoch become negative. Values outside the `i64` range
/// (about 292 years either side of 1970) saturate.
///
/// # Examples
///
/// ```
/// use embedfs::types::{system_time, unix_nanos};
/// use std::time::{Duration, UNIX_EPOCH};
///
/// let t = UNIX_EPOCH + Duration::new(1_700_000_000, 42);
/// assert_eq!(unix_nanos(t), 1_700_000_000_000_000_042);
/// assert_eq!(system_time(unix_nanos(t)), t);
/// ```
#[must_use]
pub fn unix_nanos(time: SystemTime) -> i64 {
    match time.duration_since(MOD_TIME_EPOCH) {
        Ok(after) => i64::try_from(after.as_nanos()).unwrap_or(i64::MAX),
        Err(before) => i64::try_from(before.duration().as_nanos()).map_or(i64::MIN, |n| -n),
    }
}

/// Converts signed nanoseconds since [`MOD_TIME_EPOCH`] back into a `SystemTime`.
#[must_use]
pub fn system_time(nanos: i64) -> SystemTime {
    let magnitude = Duration::from_nanos(nanos.unsigned_abs());
    let shifted = if nanos >= 0 {
        MOD_TIME_EPOCH.checked_add(magnitude)
    } else {
        MOD_TIME_EPOCH.checked_sub(magnitude)
    };
    shifted.unwrap_or(MOD_TIME_EPOCH)
}

/// Permission and type bits of an embedded entry.
///
/// The low nine bits are the usual `rwxrwxrwx` permission bits. Bit 31
/// ([`FileMode::DIR`]) marks a directory; embedded files never carry it,
/// only directory handles synthesized at lookup time do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FileMode(u32);

impl FileMode {
    /// Directory flag.
    pub const DIR: u32 = 1 << 31;

    /// Mask selecting the permission bits.
    pub const PERM_MASK: u32 = 0o777;

    /// Creates a mode from raw bits.
    #[must_use]
    pub const fn new(bits: u32) -> Self {
        Self(bits)
    }

    /// Mode used for directory handles: `dr-xr-xr-x`.
    #[must_use]
    pub const fn directory() -> Self {
        Self(Self::DIR | 0o555)
    }

    /// Captures the permission bits of a filesystem entry.
    ///
    /// On non-Unix platforms only the read-only flag is available, so the
    /// result is either `0o444` or `0o644`.
    #[must_use]
    pub fn from_permissions(permissions: &Permissions) -> Self {
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            Self(permissions.mode() & Self::PERM_MASK)
        }
        #[cfg(not(unix))]
        {
            if permissions.readonly() {
                Self(0o444)
            } else {
                Self(0o644)
            }
        }
    }

    /// Returns the raw bits.
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Returns `true` if the directory flag is set.
    #[must_use]
    pub const fn is_dir(self) -> bool {
        self.0 & Self::DIR != 0
    }

    /// Returns only the permission bits.
    #[must_use]
    pub const fn permissions(self) -> u32 {
        self.0 & Self::PERM_MASK
    }
}

impl fmt::Display for FileMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write;

        f.write_char(if self.is_dir() { 'd' } else { '-' })?;
        for (i, flag) in "rwxrwxrwx".chars().enumerate() {
            let bit = 1 << (8 - i);
            f.write_char(if self.0 & bit == 0 { '-' } else { flag })?;
        }
        Ok(())
    }
}

/// Which representation a [`FileData`] uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataKind {
    /// Valid UTF-8, stored as a string.
    Text,
    /// Arbitrary bytes.
    Raw,
}

impl DataKind {
    /// Returns the lowercase name of the representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Raw => "raw",
        }
    }
}

impl fmt::Display for DataKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Content of an embedded file.
///
/// Both variants expose the same bytes through [`FileData::as_bytes`]; the
/// text variant only exists because it renders as a readable string literal
/// in generated source.
///
/// # Examples
///
/// ```
/// use embedfs::{DataKind, FileData};
///
/// let text = FileData::classify(b"hello".to_vec());
/// assert_eq!(text.kind(), DataKind::Text);
///
/// let raw = FileData::classify(vec![0x00, 0xFF]);
/// assert_eq!(raw.kind(), DataKind::Raw);
/// assert_eq!(raw.as_bytes(), &[0x00, 0xFF]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FileData {
    /// Content that survives a bytes → string → bytes round trip.
    Text(Cow<'static, str>),
    /// Content stored verbatim.
    Raw(Cow<'static, [u8]>),
}

impl FileData {
    /// Wraps a string literal. Used by generated code.
    #[must_use]
    pub const fn text(text: &'static str) -> Self {
        Self::Text(Cow::Borrowed(text))
    }

    /// Wraps a byte-string literal. Used by generated code.
    #[must_use]
    pub const fn raw(bytes: &'static [u8]) -> Self {
        Self::Raw(Cow::Borrowed(bytes))
    }

    /// Picks the representation for freshly read content.
    ///
    /// Content is stored as text exactly when it is valid UTF-8, which is
    /// when reinterpreting it as a `String` and back yields the same bytes.
    /// The buffer is moved, not copied, in both cases.
    #[must_use]
    pub fn classify(bytes: Vec<u8>) -> Self {
        match String::from_utf8(bytes) {
            Ok(text) => Self::Text(Cow::Owned(text)),
            Err(err) => Self::Raw(Cow::Owned(err.into_bytes())),
        }
    }

    /// Stores content as raw bytes without classification.
    #[must_use]
    pub const fn raw_from(bytes: Vec<u8>) -> Self {
        Self::Raw(Cow::Owned(bytes))
    }

    /// Returns the content bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Text(text) => text.as_bytes(),
            Self::Raw(bytes) => bytes,
        }
    }

    /// Returns the content length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    /// Returns `true` if there is no content.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the representation in use.
    #[must_use]
    pub const fn kind(&self) -> DataKind {
        match self {
            Self::Text(_) => DataKind::Text,
            Self::Raw(_) => DataKind::Raw,
        }
    }

    /// Returns `true` for the text representation.
    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }
}

/// One embedded file: metadata plus content.
///
/// Records are immutable. `size` is derived from the content when the record
/// is created and cannot drift from it afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    name: Cow<'static, str>,
    mode: FileMode,
    size: u64,
    mod_time: i64,
    data: FileData,
}

impl FileRecord {
    /// Creates a record. `mod_time` is in nanoseconds since [`MOD_TIME_EPOCH`].
    ///
    /// # Examples
    ///
    /// ```
    /// use embedfs::{FileData, FileMode, FileRecord};
    ///
    /// let record = FileRecord::new("index.html", FileMode::new(0o644), 0, FileData::text("<p>"));
    /// assert_eq!(record.name(), "index.html");
    /// assert_eq!(record.size(), 3);
    /// ```
    #[must_use]
    pub fn new(
        name: impl Into<Cow<'static, str>>,
        mode: FileMode,
        mod_time: i64,
        data: FileData,
    ) -> Self {
        Self {
            name: name.into(),
            mode,
            size: data.len() as u64,
            mod_time,
            data,
        }
    }

    /// Base file name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Permission and type bits.
    #[must_use]
    pub const fn mode(&self) -> FileMode {
        self.mode
    }

    /// Content length in bytes.
    #[must_use]
    pub const fn size(&self) -> u64 {
        self.size
    }

    /// Modification time in nanoseconds since [`MOD_TIME_EPOCH`].
    #[must_use]
    pub const fn mod_time(&self) -> i64 {
        self.mod_time
    }

    /// Modification time as a `SystemTime`.
    #[must_use]
    pub fn modified(&self) -> SystemTime {
        system_time(self.mod_time)
    }

    /// Stored content.
    #[must_use]
    pub const fn data(&self) -> &FileData {
        &self.data
    }

    /// Content bytes.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        self.data.as_bytes()
    }
}

/// Path-keyed collection of embedded files.
///
/// Keys are root-relative and start with `/`. Iteration is always in key
/// order. Only files are stored; directories are inferred from key prefixes.
/// If a key appears more than once during construction, the last record wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileTable {
    entries: BTreeMap<Cow<'static, str>, FileRecord>,
}

impl FileTable {
    /// Builds a table from `(key, record)` pairs.
    #[must_use]
    pub fn from_records<K, I>(records: I) -> Self
    where
        K: Into<Cow<'static, str>>,
        I: IntoIterator<Item = (K, FileRecord)>,
    {
        Self {
            entries: records
                .into_iter()
                .map(|(key, record)| (key.into(), record))
                .collect(),
        }
    }

    /// Looks up a record by exact key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&FileRecord> {
        self.entries.get(key)
    }

    /// Returns `true` if `key` names an embedded file.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns `true` if `dir` is the root or a directory of some key.
    ///
    /// A trailing `/` on `dir` is ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use embedfs::{FileData, FileMode, FileRecord, FileTable};
    ///
    /// let table = FileTable::from_records([(
    ///     "/css/site.css",
    ///     FileRecord::new("site.css", FileMode::new(0o644), 0, FileData::text("")),
    /// )]);
    ///
    /// assert!(table.contains_dir("/css"));
    /// assert!(table.contains_dir("/css/"));
    /// assert!(!table.contains_dir("/cs"));
    /// assert!(!table.contains_dir("/css/site.css"));
    /// ```
    #[must_use]
    pub fn contains_dir(&self, dir: &str) -> bool {
        let trimmed = dir.trim_end_matches('/');
        if trimmed.is_empty() {
            return true;
        }

        let prefix = format!("{trimmed}/");
        self.entries
            .range::<str, _>((Bound::Included(prefix.as_str()), Bound::Unbounded))
            .next()
            .is_some_and(|(key, _)| key.starts_with(&prefix))
    }

    /// Iterates over `(key, record)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FileRecord)> + '_ {
        self.entries.iter().map(|(key, record)| (key.as_ref(), record))
    }

    /// Number of embedded files.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is embedded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all file sizes.
    #[must_use]
    pub fn total_size(&self) -> u64 {
        self.entries.values().map(FileRecord::size).sum()
    }
}

impl<K> FromIterator<(K, FileRecord)> for FileTable
where
    K: Into<Cow<'static, str>>,
{
    fn from_iter<I: IntoIterator<Item = (K, FileRecord)>>(iter: I) -> Self {
        Self::from_records(iter)
    }
}
