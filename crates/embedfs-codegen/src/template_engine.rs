//! Template engine for code generation using Handlebars.
//!
//! Wraps Handlebars with the built-in template for embedded filesystem
//! modules. Values are inserted verbatim: every literal is escaped for Rust
//! before it reaches the template, so HTML escaping is disabled.
//!
//! # Examples
//!
//! ```
//! use embedfs_codegen::template_engine::TemplateEngine;
//! use serde_json::json;
//!
//! let mut engine = TemplateEngine::new().unwrap();
//! engine.register_template_string("greeting", "const GREETING: &str = {{text}};").unwrap();
//! let out = engine.render("greeting", &json!({"text": "\"<hi>\""})).unwrap();
//! assert_eq!(out, "const GREETING: &str = \"<hi>\";");
//! ```

use crate::error::{GenerateError, Result};
use handlebars::Handlebars;
use serde::Serialize;

/// Name of the built-in embedded filesystem template.
pub const EMBEDDED_FS_TEMPLATE: &str = "embedded_fs";

/// Template engine for code generation.
///
/// # Thread Safety
///
/// This type is `Send` and `Sync`, allowing it to be used across
/// thread boundaries safely.
#[derive(Debug)]
pub struct TemplateEngine<'a> {
    handlebars: Handlebars<'a>,
}

impl<'a> TemplateEngine<'a> {
    /// Creates a new template engine with the built-in templates registered.
    ///
    /// # Errors
    ///
    /// Returns error if template registration fails (should not happen
    /// with valid built-in templates).
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();

        // Strict mode: fail on missing variables
        handlebars.set_strict_mode(true);
        handlebars.register_escape_fn(handlebars::no_escape);

        Self::register_builtin_templates(&mut handlebars)?;

        Ok(Self { handlebars })
    }

    fn register_builtin_templates(handlebars: &mut Handlebars<'a>) -> Result<()> {
        handlebars
            .register_template_string(
                EMBEDDED_FS_TEMPLATE,
                include_str!("../templates/embedded_fs.rs.hbs"),
            )
            .map_err(|e| GenerateError::Template {
                message: format!("Failed to register embedded_fs template: {e}"),
            })
    }

    /// Renders a template with the given context.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Template name is not registered
    /// - Context cannot be serialized
    /// - A referenced variable is missing (strict mode)
    pub fn render<T: Serialize>(&self, template_name: &str, context: &T) -> Result<String> {
        self.handlebars
            .render(template_name, context)
            .map_err(|e| GenerateError::Template {
                message: format!("Template rendering failed: {e}"),
            })
    }

    /// Registers a custom template.
    ///
    /// # Errors
    ///
    /// Returns error if template string is invalid.
    pub fn register_template_string(&mut self, name: &str, template: &str) -> Result<()> {
        self.handlebars
            .register_template_string(name, template)
            .map_err(|e| GenerateError::Template {
                message: format!("Failed to register template '{name}': {e}"),
            })
    }

    /// Returns `true` if a template with this name is registered.
    #[must_use]
    pub fn has_template(&self, name: &str) -> bool {
        self.handlebars.has_template(name)
    }
}
