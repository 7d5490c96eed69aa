//! Rust literal rendering for generated source.
//!
//! Every value that ends up in generated code goes through one of these
//! functions, so the output never depends on anything but the input bytes.

use embedfs::FileData;

/// Renders a string literal, escaping quotes, backslashes, control and
/// non-printable characters.
///
/// # Examples
///
/// ```
/// use embedfs_codegen::literal::string_literal;
///
/// assert_eq!(string_literal("say \"hi\"\n"), r#""say \"hi\"\n""#);
/// ```
#[must_use]
pub fn string_literal(text: &str) -> String {
    format!("{text:?}")
}

/// Renders a byte-string literal. Printable ASCII is kept as is; every
/// other byte becomes an escape.
///
/// # Examples
///
/// ```
/// use embedfs_codegen::literal::byte_string_literal;
///
/// assert_eq!(byte_string_literal(&[b'o', b'k', 0x00, 0xFF]), r#"b"ok\x00\xff""#);
/// ```
#[must_use]
pub fn byte_string_literal(bytes: &[u8]) -> String {
    let mut literal = String::with_capacity(bytes.len() + 3);
    literal.push_str("b\"");
    for &byte in bytes {
        literal.extend(std::ascii::escape_default(byte).map(char::from));
    }
    literal.push('"');
    literal
}

/// Renders the constructor expression for `data` under `crate_path`.
///
/// # Examples
///
/// ```
/// use embedfs::FileData;
/// use embedfs_codegen::literal::data_expr;
///
/// assert_eq!(
///     data_expr("::embedfs", &FileData::classify(b"hi".to_vec())),
///     r#"::embedfs::FileData::text("hi")"#,
/// );
/// assert_eq!(
///     data_expr("::embedfs", &FileData::classify(vec![0x00, 0xFF])),
///     r#"::embedfs::FileData::raw(b"\x00\xff")"#,
/// );
/// ```
#[must_use]
pub fn data_expr(crate_path: &str, data: &FileData) -> String {
    match data {
        FileData::Text(text) => format!("{crate_path}::FileData::text({})", string_literal(text)),
        FileData::Raw(bytes) => {
            format!("{crate_path}::FileData::raw({})", byte_string_literal(bytes))
        }
    }
}

/// Renders permission bits as an octal literal.
#[must_use]
pub fn mode_literal(bits: u32) -> String {
    format!("{bits:#o}")
}
