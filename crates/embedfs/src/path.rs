//! Request path classification.
//!
//! A request is classified exactly once, before any lookup: paths ending in
//! `/` ask for a directory, everything else asks for a file (which may still
//! resolve to an inferred directory).

/// A path requested from an embedded filesystem.
///
/// # Examples
///
/// ```
/// use embedfs::RequestPath;
///
/// assert_eq!(RequestPath::parse("/index.html"), RequestPath::File("/index.html"));
/// assert_eq!(RequestPath::parse("/css/"), RequestPath::Dir("/css/"));
/// assert_eq!(RequestPath::parse("/"), RequestPath::Dir("/"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestPath<'a> {
    /// Path without a trailing separator.
    File(&'a str),
    /// Path with a trailing separator, including the root.
    Dir(&'a str),
}

impl<'a> RequestPath<'a> {
    /// Classifies a raw request path.
    #[must_use]
    pub fn parse(path: &'a str) -> Self {
        if path.ends_with('/') {
            Self::Dir(path)
        } else {
            Self::File(path)
        }
    }

    /// Returns the path as requested.
    #[must_use]
    pub const fn as_str(&self) -> &'a str {
        match self {
            Self::File(path) | Self::Dir(path) => path,
        }
    }

    /// Returns `true` for directory requests.
    #[must_use]
    pub const fn is_dir(&self) -> bool {
        matches!(self, Self::Dir(_))
    }

    /// Returns the final path component, or `/` for the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use embedfs::RequestPath;
    ///
    /// assert_eq!(RequestPath::parse("/a/b.txt").base_name(), "b.txt");
    /// assert_eq!(RequestPath::parse("/a/b/").base_name(), "b");
    /// assert_eq!(RequestPath::parse("/").base_name(), "/");
    /// ```
    #[must_use]
    pub fn base_name(&self) -> &'a str {
        let trimmed = self.as_str().trim_end_matches('/');
        match trimmed.rsplit_once('/') {
            Some((_, name)) if !name.is_empty() => name,
            None if !trimmed.is_empty() => trimmed,
            _ => "/",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_file() {
        let path = RequestPath::parse("/docs/readme.md");
        assert!(!path.is_dir());
        assert_eq!(path.as_str(), "/docs/readme.md");
    }

    #[test]
    fn test_parse_dir() {
        let path = RequestPath::parse("/docs/");
        assert!(path.is_dir());
        assert_eq!(path.as_str(), "/docs/");
    }

    #[test]
    fn test_parse_root_is_dir() {
        assert!(RequestPath::parse("/").is_dir());
    }

    #[test]
    fn test_parse_empty_is_file() {
        assert_eq!(RequestPath::parse(""), RequestPath::File(""));
    }

    #[test]
    fn test_base_name() {
        assert_eq!(RequestPath::parse("/a.txt").base_name(), "a.txt");
        assert_eq!(RequestPath::parse("/x/y/z").base_name(), "z");
        assert_eq!(RequestPath::parse("/x/y//").base_name(), "y");
        assert_eq!(RequestPath::parse("relative").base_name(), "relative");
        assert_eq!(RequestPath::parse("//").base_name(), "/");
    }
}
