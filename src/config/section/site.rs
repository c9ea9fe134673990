//! `[site]` section configuration.
//!
//! ```toml
//! [site]
//! title = "Kaustubh"
//! description = "A Full Stack web developer."
//! url = "https://kstubhie.dev"   # optional, enables sitemap.xml
//! language = "en"
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSectionConfig {
    /// Page title suffix and `<title>` of the home page.
    pub title: String,

    /// `<meta name="description">` content.
    pub description: String,

    /// Public URL of the deployed site.
    pub url: Option<String>,

    /// `<html lang>` attribute.
    pub language: String,
}

impl Default for SiteSectionConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            url: None,
            language: "en".into(),
        }
    }
}

impl SiteSectionConfig {
    pub const URL: FieldPath = FieldPath::new("site.url");
    pub const TITLE: FieldPath = FieldPath::new("site.title");

    /// Validate site configuration.
    ///
    /// - `title` should be set (warning)
    /// - `url` must be an http(s) URL with a host
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.title.trim().is_empty() {
            diag.warn(Self::TITLE, "empty, pages will be titled by section only");
        }

        let Some(url_str) = &self.url else {
            return;
        };
        match url::Url::parse(url_str) {
            Ok(parsed) => {
                if !matches!(parsed.scheme(), "http" | "https") {
                    diag.error_with_hint(
                        Self::URL,
                        format!(
                            "scheme '{}' not supported, must be http or https",
                            parsed.scheme()
                        ),
                        "use format like https://example.com",
                    );
                }
                if parsed.host_str().is_none() {
                    diag.error_with_hint(
                        Self::URL,
                        "URL must have a valid host",
                        "use format like https://example.com",
                    );
                }
            }
            Err(e) => {
                diag.error_with_hint(
                    Self::URL,
                    format!("invalid URL: {e}"),
                    "use format like https://example.com",
                );
            }
        }
    }

    /// Site URL without trailing slash, if configured.
    pub fn base_url(&self) -> Option<&str> {
        self.url.as_deref().map(|u| u.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_site_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.site.title, "Test");
        assert_eq!(config.site.language, "en");
        assert!(config.site.url.is_none());
    }

    #[test]
    fn test_validate_url_scheme() {
        let config = test_parse_config("url = \"ftp://example.com\"");
        let mut diag = ConfigDiagnostics::new();
        config.site.validate(&mut diag);
        assert!(diag.has_errors());
        assert!(diag.errors()[0].message.contains("ftp"));
    }

    #[test]
    fn test_validate_url_ok() {
        let config = test_parse_config("url = \"https://kstubhie.dev/\"");
        let mut diag = ConfigDiagnostics::new();
        config.site.validate(&mut diag);
        assert!(!diag.has_errors());
        assert_eq!(config.site.base_url(), Some("https://kstubhie.dev"));
    }

    #[test]
    fn test_validate_url_garbage() {
        let config = test_parse_config("url = \"not a url\"");
        let mut diag = ConfigDiagnostics::new();
        config.site.validate(&mut diag);
        assert!(diag.errors()[0].message.starts_with("invalid URL"));
    }
}
