//! Error types for code generation.

use std::io;
use std::path::PathBuf;

/// Result type for generation operations.
pub type Result<T> = std::result::Result<T, GenerateError>;

/// Errors that can occur while walking a source tree or writing the artifact.
///
/// Every variant aborts generation: a table is either built from the whole
/// tree or not at all, and the output file is never left half-written.
#[derive(thiserror::Error, Debug)]
pub enum GenerateError {
    /// The source root exists but is not a directory.
    #[error("Source root is not a directory: {}", path.display())]
    NotADirectory {
        /// The offending root
        path: PathBuf,
    },

    /// Directory traversal failed.
    #[error("Directory traversal failed: {0}")]
    Walk(#[from] walkdir::Error),

    /// Reading a file or its metadata failed.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        /// Path being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// A path component cannot be represented as UTF-8.
    ///
    /// Table keys and names are emitted as Rust string literals, so they
    /// must be valid UTF-8.
    #[error("Path is not valid UTF-8: {}", path.display())]
    NonUtf8Path {
        /// The offending path
        path: PathBuf,
    },

    /// A walked path does not lie under the source root.
    #[error("Path {} is outside source root {}", path.display(), root.display())]
    OutsideRoot {
        /// The walked path
        path: PathBuf,
        /// The source root
        root: PathBuf,
    },

    /// A generation option is invalid.
    #[error("Invalid {field} '{value}': {reason}")]
    InvalidOption {
        /// Name of the option
        field: &'static str,
        /// Rejected value
        value: String,
        /// Why it was rejected
        reason: String,
    },

    /// Template registration or rendering failed.
    #[error("Template error: {message}")]
    Template {
        /// Description of the failure
        message: String,
    },

    /// Writing or moving the generated artifact into place failed.
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        /// Final output path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
}

impl GenerateError {
    /// Returns `true` if the error came from reading the source tree.
    #[must_use]
    pub const fn is_read_error(&self) -> bool {
        matches!(
            self,
            Self::Walk(_) | Self::Io { .. } | Self::NonUtf8Path { .. } | Self::OutsideRoot { .. }
        )
    }

    /// Returns `true` if an option was rejected.
    #[must_use]
    pub const fn is_invalid_option(&self) -> bool {
        matches!(self, Self::InvalidOption { .. } | Self::NotADirectory { .. })
    }

    /// Returns `true` if the artifact could not be written.
    #[must_use]
    pub const fn is_write_error(&self) -> bool {
        matches!(self, Self::Write { .. })
    }
}
