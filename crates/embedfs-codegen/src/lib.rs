//! Code generation for embedded filesystems.
//!
//! Walks a directory tree and writes a Rust source file defining a `static`
//! [`embedfs::EmbeddedFs`] that holds every regular file of the tree. The
//! generated file is meant to be `include!`d from a build script's output
//! directory or checked in next to the code that serves it.
//!
//! # Architecture
//!
//! ```text
//! directory ──► walker ──► FileTable ──► literal ──► TemplateEngine ──► write_atomic
//! ```
//!
//! - [`walker`] turns the tree into an [`embedfs::FileTable`] keyed by
//!   root-relative paths
//! - [`literal`] renders keys, names and content as Rust literals
//! - [`template_engine`] fills the Handlebars template with those literals
//! - [`Generator`] ties the steps together and writes the result atomically
//!
//! # Examples
//!
//! ```no_run
//! use embedfs_codegen::{GenerateOptions, generate};
//!
//! let options = GenerateOptions::new("ASSETS", "assets", "src/assets_generated.rs");
//! let summary = generate(&options)?;
//! println!("embedded {} files", summary.files);
//! # Ok::<(), embedfs_codegen::GenerateError>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod error;
pub mod generator;
pub mod literal;
pub mod options;
pub mod template_engine;
pub mod walker;

pub use error::{GenerateError, Result};
pub use generator::{GenerateSummary, Generator, generate, write_atomic};
pub use options::{ContentMode, GenerateOptions};
pub use walker::build_table;
