//! Generation options.
//!
//! # Examples
//!
//! ```
//! use embedfs_codegen::{ContentMode, GenerateOptions};
//!
//! let options = GenerateOptions::new("SITE", "static", "src/site_generated.rs")
//!     .with_module("site")
//!     .with_content_mode(ContentMode::Raw);
//!
//! assert!(options.validate().is_ok());
//! assert!(GenerateOptions::default().with_id("not an ident").validate().is_err());
//! ```

use crate::error::{GenerateError, Result};
use serde::Serialize;
use std::path::PathBuf;

/// How file content is stored in the generated table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentMode {
    /// Valid UTF-8 becomes a string literal, everything else a byte string.
    #[default]
    Auto,
    /// Every file becomes a byte string.
    Raw,
}

/// Parameters of one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Name of the generated `static`.
    pub id: String,
    /// Source directory to embed.
    pub dir: PathBuf,
    /// File the generated source is written to.
    pub out: PathBuf,
    /// Optional module wrapping the generated `static`.
    pub module: Option<String>,
    /// Path under which generated code reaches the runtime crate.
    pub crate_path: String,
    /// Content representation policy.
    pub content_mode: ContentMode,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            id: "ASSETS".to_string(),
            dir: PathBuf::from("assets"),
            out: PathBuf::from("embedfs_generated.rs"),
            module: None,
            crate_path: "::embedfs".to_string(),
            content_mode: ContentMode::Auto,
        }
    }
}

impl GenerateOptions {
    /// Creates options with the three required parameters.
    #[must_use]
    pub fn new(id: impl Into<String>, dir: impl Into<PathBuf>, out: impl Into<PathBuf>) -> Self {
        Self {
            id: id.into(),
            dir: dir.into(),
            out: out.into(),
            ..Self::default()
        }
    }

    /// Sets the name of the generated `static`.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Wraps the generated `static` in `pub mod <module>`.
    #[must_use]
    pub fn with_module(mut self, module: impl Into<String>) -> Self {
        self.module = Some(module.into());
        self
    }

    /// Sets the path generated code uses to name runtime types.
    #[must_use]
    pub fn with_crate_path(mut self, crate_path: impl Into<String>) -> Self {
        self.crate_path = crate_path.into();
        self
    }

    /// Sets the content representation policy.
    #[must_use]
    pub const fn with_content_mode(mut self, content_mode: ContentMode) -> Self {
        self.content_mode = content_mode;
        self
    }

    /// Checks that every name will be valid in generated Rust source.
    ///
    /// # Errors
    ///
    /// Returns `GenerateError::InvalidOption` if `id` or `module` is not a
    /// Rust identifier (keywords included), or `crate_path` is not a path.
    pub fn validate(&self) -> Result<()> {
        validate_ident("id", &self.id)?;
        if let Some(module) = &self.module {
            validate_ident("module", module)?;
        }
        syn::parse_str::<syn::Path>(&self.crate_path).map_err(|e| {
            GenerateError::InvalidOption {
                field: "crate path",
                value: self.crate_path.clone(),
                reason: e.to_string(),
            }
        })?;
        Ok(())
    }
}

fn validate_ident(field: &'static str, value: &str) -> Result<()> {
    syn::parse_str::<syn::Ident>(value)
        .map(drop)
        .map_err(|e| GenerateError::InvalidOption {
            field,
            value: value.to_string(),
            reason: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = GenerateOptions::default();
        assert_eq!(options.id, "ASSETS");
        assert_eq!(options.crate_path, "::embedfs");
        assert_eq!(options.content_mode, ContentMode::Auto);
        assert!(options.module.is_none());
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_builder_methods() {
        let options = GenerateOptions::new("FILES", "web", "out.rs")
            .with_module("web")
            .with_crate_path("crate::fs")
            .with_content_mode(ContentMode::Raw);

        assert_eq!(options.id, "FILES");
        assert_eq!(options.dir, PathBuf::from("web"));
        assert_eq!(options.out, PathBuf::from("out.rs"));
        assert_eq!(options.module.as_deref(), Some("web"));
        assert_eq!(options.crate_path, "crate::fs");
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_identifiers() {
        for id in ["", "1abc", "has-dash", "two words", "fn"] {
            let err = GenerateOptions::default().with_id(id).validate().unwrap_err();
            assert!(err.is_invalid_option(), "{id:?} should be rejected");
        }
    }

    #[test]
    fn test_accepts_raw_identifiers() {
        assert!(GenerateOptions::default().with_id("r#static").validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_module() {
        let err = GenerateOptions::default()
            .with_module("main.rs")
            .validate()
            .unwrap_err();
        assert!(matches!(err, GenerateError::InvalidOption { field: "module", .. }));
    }

    #[test]
    fn test_rejects_bad_crate_path() {
        let err = GenerateOptions::default()
            .with_crate_path("::")
            .validate()
            .unwrap_err();
        assert!(err.is_invalid_option());
    }

    #[test]
    fn test_content_mode_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&ContentMode::Raw).unwrap(), "\"raw\"");
    }
}
