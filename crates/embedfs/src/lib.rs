//! Read-only virtual filesystem over directory trees embedded at build time.
//!
//! `embedfs-codegen` walks a source directory and generates Rust source that
//! builds an [`EmbeddedFs`]; this crate is the runtime half that serves the
//! embedded files through an `open(path) -> File` interface.
//!
//! # Features
//!
//! - **Immutable table**: files are keyed by root-relative paths (`/css/site.css`)
//!   and never change after construction
//! - **Two content representations**: valid UTF-8 is stored as text, anything
//!   else as raw bytes; both read back identically
//! - **Seekable handles**: every [`File`] has its own cursor and implements
//!   `Read`, `BufRead` and `Seek`
//! - **Inferred directories**: directories exist when some file lives under
//!   them, but are never listed
//! - **Thread-safe**: all types are `Send + Sync`
//!
//! # Examples
//!
//! ```
//! use embedfs::{EmbeddedFs, FileData, FileMode, FileRecord};
//! use std::io::Read;
//!
//! let fs = EmbeddedFs::from_records([
//!     ("/a.txt", FileRecord::new("a.txt", FileMode::new(0o644), 0, FileData::text("hi"))),
//!     ("/b.bin", FileRecord::new("b.bin", FileMode::new(0o644), 0, FileData::raw(&[0x00, 0xFF]))),
//! ]);
//!
//! let mut buf = Vec::new();
//! fs.open("/b.bin")?.read_to_end(&mut buf).unwrap();
//! assert_eq!(buf, [0x00, 0xFF]);
//!
//! assert!(fs.open("/missing").is_err());
//! # Ok::<(), embedfs::VfsError>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod error;
pub mod file;
pub mod path;
pub mod types;
pub mod vfs;

pub use error::{Result, VfsError};
pub use file::{File, Metadata};
pub use path::RequestPath;
pub use types::{DataKind, FileData, FileMode, FileRecord, FileTable, MOD_TIME_EPOCH};
pub use vfs::{EmbeddedFs, FileSystem, VirtualFile};
