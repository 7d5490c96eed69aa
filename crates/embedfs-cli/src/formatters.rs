//! Output formatters for CLI commands.
//!
//! Provides consistent formatting across all CLI commands for JSON, text, and pretty output modes.

use crate::cli::OutputFormat;
use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

/// Format data according to the specified output format.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
///
/// # Examples
///
/// ```
/// use embedfs_cli::cli::OutputFormat;
/// use embedfs_cli::formatters::format_output;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Entry {
///     key: String,
///     size: u64,
/// }
///
/// let entry = Entry {
///     key: "/a.txt".to_string(),
///     size: 2,
/// };
///
/// let output = format_output(&entry, OutputFormat::Json)?;
/// assert!(output.contains("\"key\""));
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn format_output<T: Serialize>(data: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::format(data),
        OutputFormat::Text => text::format(data),
        OutputFormat::Pretty => pretty::format(data),
    }
}

/// JSON output formatting.
pub mod json {
    use super::{Result, Serialize};

    /// Format data as JSON with 2-space indentation.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        Ok(serde_json::to_string_pretty(data)?)
    }

    /// Format data as compact JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn format_compact<T: Serialize>(data: &T) -> Result<String> {
        Ok(serde_json::to_string(data)?)
    }
}

/// Plain text output formatting.
pub mod text {
    use super::{Result, Serialize, json};

    /// Format data as a single line for piping into other tools.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        json::format_compact(data)
    }
}

/// Pretty (human-readable) output formatting.
pub mod pretty {
    use super::{Colorize, Result, Serialize};
    use serde_json::Value;
    use std::fmt::Write;

    /// Format data as colorized, indented output.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        let value = serde_json::to_value(data)?;
        let mut out = String::new();
        format_value(&mut out, &value, 0)?;
        Ok(out)
    }

    fn format_value(out: &mut String, value: &Value, indent: usize) -> Result<()> {
        let indent_str = "  ".repeat(indent);
        let next_indent_str = "  ".repeat(indent + 1);

        match value {
            Value::Null => write!(out, "{}", "null".dimmed())?,
            Value::Bool(b) => write!(out, "{}", b.to_string().yellow())?,
            Value::Number(n) => write!(out, "{}", n.to_string().cyan())?,
            Value::String(s) => write!(out, "\"{}\"", s.green())?,
            Value::Array(items) if items.is_empty() => out.push_str("[]"),
            Value::Array(items) => {
                out.push_str("[\n");
                for (i, item) in items.iter().enumerate() {
                    out.push_str(&next_indent_str);
                    format_value(out, item, indent + 1)?;
                    if i + 1 < items.len() {
                        out.push(',');
                    }
                    out.push('\n');
                }
                out.push_str(&indent_str);
                out.push(']');
            }
            Value::Object(fields) if fields.is_empty() => out.push_str("{}"),
            Value::Object(fields) => {
                out.push_str("{\n");
                for (i, (key, val)) in fields.iter().enumerate() {
                    write!(out, "{next_indent_str}\"{}\": ", key.blue().bold())?;
                    format_value(out, val, indent + 1)?;
                    if i + 1 < fields.len() {
                        out.push(',');
                    }
                    out.push('\n');
                }
                out.push_str(&indent_str);
                out.push('}');
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    struct TestData {
        key: String,
        size: u64,
        text: bool,
        tags: Vec<String>,
    }

    fn sample() -> TestData {
        TestData {
            key: "/a.txt".to_string(),
            size: 2,
            text: true,
            tags: vec!["x".to_string()],
        }
    }

    #[test]
    fn test_json_format() {
        let output = json::format(&sample()).unwrap();
        assert!(output.contains("\"key\": \"/a.txt\""));
        assert!(output.contains("\"size\": 2"));
        assert!(output.contains('\n'));
    }

    #[test]
    fn test_text_format_is_single_line() {
        let output = text::format(&sample()).unwrap();
        assert!(!output.contains('\n'));
        assert!(output.contains("\"key\":\"/a.txt\""));
    }

    #[test]
    fn test_pretty_format() {
        colored::control::set_override(false);
        let output = pretty::format(&sample()).unwrap();
        assert!(output.starts_with("{\n"));
        assert!(output.contains("\"key\": \"/a.txt\","));
        assert!(output.contains("\"size\": 2,"));
        assert!(output.contains("\"tags\": [\n    \"x\"\n  ]"));
        assert!(output.ends_with('}'));
    }

    #[test]
    fn test_pretty_format_empty_containers() {
        colored::control::set_override(false);
        assert_eq!(pretty::format(&Vec::<u8>::new()).unwrap(), "[]");
        assert_eq!(pretty::format(&serde_json::json!({})).unwrap(), "{}");
        assert_eq!(pretty::format(&Option::<u8>::None).unwrap(), "null");
    }

    #[test]
    fn test_format_output_dispatch() {
        let data = sample();
        assert_eq!(
            format_output(&data, OutputFormat::Json).unwrap(),
            json::format(&data).unwrap()
        );
        assert_eq!(
            format_output(&data, OutputFormat::Text).unwrap(),
            text::format(&data).unwrap()
        );
    }
}
