//! `[images]` section configuration.
//!
//! Declares which remote hosts images may be loaded from. Site-relative
//! paths (`/company/logo.png`) are always allowed.
//!
//! ```toml
//! [images]
//! remote = [
//!     { protocol = "https", hostname = "imagekit.io" },
//!     { protocol = "https", hostname = "**.imagekit.io" },   # any subdomain depth
//!     { protocol = "https", hostname = "*.pinimg.com" },     # exactly one label
//! ]
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ImagesConfig {
    /// Allowed remote image sources.
    pub remote: Vec<RemotePattern>,
}

/// One allowed remote image source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemotePattern {
    #[serde(default = "default_protocol")]
    pub protocol: String,
    pub hostname: String,
}

fn default_protocol() -> String {
    "https".into()
}

impl RemotePattern {
    pub fn new(protocol: &str, hostname: &str) -> Self {
        Self {
            protocol: protocol.into(),
            hostname: hostname.into(),
        }
    }
}

impl ImagesConfig {
    pub const REMOTE: FieldPath = FieldPath::new("images.remote");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for (i, pattern) in self.remote.iter().enumerate() {
            let field = Self::REMOTE.index(i);
            if !matches!(pattern.protocol.as_str(), "https" | "http") {
                diag.error_with_hint(
                    field.join("protocol"),
                    format!("protocol '{}' not supported", pattern.protocol),
                    "use \"https\"",
                );
            }

            let host = pattern
                .hostname
                .trim_start_matches("**.")
                .trim_start_matches("*.");
            if host.is_empty() || host.contains(['/', ':', '*']) {
                diag.error_with_hint(
                    field.join("hostname"),
                    format!("invalid hostname pattern '{}'", pattern.hostname),
                    "use a bare host like \"imagekit.io\" or \"**.imagekit.io\"",
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_remote_patterns_parse() {
        let config = test_parse_config(
            r#"
[images]
remote = [
    { protocol = "https", hostname = "imagekit.io" },
    { hostname = "i.pinimg.com" },
]
"#,
        );
        assert_eq!(config.images.remote.len(), 2);
        assert_eq!(config.images.remote[1], RemotePattern::new("https", "i.pinimg.com"));
    }

    #[test]
    fn test_validate_patterns() {
        let config = test_parse_config(
            r#"
[images]
remote = [
    { protocol = "ftp", hostname = "imagekit.io" },
    { protocol = "https", hostname = "https://cdn.dribbble.com" },
    { protocol = "https", hostname = "**.postimg.cc" },
]
"#,
        );
        let mut diag = ConfigDiagnostics::new();
        config.images.validate(&mut diag);
        let fields: Vec<_> = diag.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(
            fields,
            vec!["images.remote[0].protocol", "images.remote[1].hostname"]
        );
    }
}
