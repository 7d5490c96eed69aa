//! Error types for embedded filesystem lookups.
//!
//! Lookups are the only fallible runtime operation: the table is immutable
//! and fully in memory, so the sole failure is asking for a path that was
//! never embedded.
//!
//! # Examples
//!
//! ```
//! use embedfs::VfsError;
//!
//! let error = VfsError::NotFound {
//!     path: "/missing.txt".to_string(),
//! };
//!
//! assert!(error.is_not_found());
//! let io: std::io::Error = error.into();
//! assert_eq!(io.kind(), std::io::ErrorKind::NotFound);
//! ```

use std::io;
use thiserror::Error;

/// Errors that can occur when opening entries of an embedded filesystem.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VfsError {
    /// No file or inferred directory exists at the requested path.
    #[error("File not found: {path}")]
    NotFound {
        /// The path that was requested
        path: String,
    },
}

impl VfsError {
    /// Returns `true` if this is a not-found error.
    ///
    /// # Examples
    ///
    /// ```
    /// use embedfs::VfsError;
    ///
    /// let error = VfsError::NotFound {
    ///     path: "/test.txt".to_string(),
    /// };
    ///
    /// assert!(error.is_not_found());
    /// ```
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns the path the failed operation was asked about.
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::NotFound { path } => path,
        }
    }
}

impl From<VfsError> for io::Error {
    fn from(error: VfsError) -> Self {
        let kind = match error {
            VfsError::NotFound { .. } => io::ErrorKind::NotFound,
        };
        Self::new(kind, error)
    }
}

/// Type alias for embedded filesystem results.
pub type Result<T> = std::result::Result<T, VfsError>;
