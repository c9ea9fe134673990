//! Config and content field paths.

use owo_colors::OwoColorize;
use std::borrow::Cow;
use std::fmt;

/// Dotted path to a config or content field, e.g. `serve.port` or
/// `projects[1].details_slug`.
///
/// Static paths for known config fields are `const`; content paths are built
/// at validation time with [`FieldPath::index`] and [`FieldPath::join`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath(Cow<'static, str>);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(Cow::Borrowed(path))
    }

    /// `experiences` + 2 -> `experiences[2]`
    pub fn index(&self, i: usize) -> Self {
        Self(Cow::Owned(format!("{}[{i}]", self.0)))
    }

    /// `projects[0]` + `title` -> `projects[0].title`
    pub fn join(&self, field: &str) -> Self {
        Self(Cow::Owned(format!("{}.{field}", self.0)))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl From<String> for FieldPath {
    fn from(path: String) -> Self {
        Self(Cow::Owned(path))
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_path_building() {
        let root = FieldPath::new("projects");
        let slug = root.index(1).join("details_slug");
        assert_eq!(slug.as_str(), "projects[1].details_slug");
        assert_eq!(root.as_str(), "projects");
    }

    #[test]
    fn test_nested_index() {
        let tech = FieldPath::new("experiences").index(0).join("technologies").index(3);
        assert_eq!(tech.as_str(), "experiences[0].technologies[3]");
    }
}
