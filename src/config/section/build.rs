//! `[build]` section configuration.
//!
//! ```toml
//! [build]
//! content = "content"       # Content registry directory (*.toml)
//! output = "public"         # Output directory for generated HTML
//! static = "static"         # Copied verbatim into the output directory
//! icons = "icons"           # *.svg files overriding built-in icons
//! minify = true             # Compact HTML output
//! sitemap = true            # Generate sitemap.xml (requires site.url)
//! featured = 3              # Entries per list on the home page
//! ignore_errors = false     # Build even if content validation fails
//! ignore_warnings = false   # Silence warnings
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildSectionConfig {
    /// Content registry directory.
    pub content: PathBuf,

    /// Build output directory.
    pub output: PathBuf,

    /// Static files directory.
    #[serde(rename = "static")]
    pub static_dir: PathBuf,

    /// Icon override directory.
    pub icons: PathBuf,

    /// Compact HTML output (no indentation).
    pub minify: bool,

    /// Generate `sitemap.xml`.
    pub sitemap: bool,

    /// How many experiences/projects the home page shows.
    pub featured: usize,

    /// Keep building when content validation reports errors.
    pub ignore_errors: bool,

    /// Suppress warning output.
    pub ignore_warnings: bool,

    /// Clean output directory before building (CLI only).
    #[serde(skip)]
    pub clean: bool,
}

impl Default for BuildSectionConfig {
    fn default() -> Self {
        Self {
            content: "content".into(),
            output: "public".into(),
            static_dir: "static".into(),
            icons: "icons".into(),
            minify: true,
            sitemap: true,
            featured: 3,
            ignore_errors: false,
            ignore_warnings: false,
            clean: false,
        }
    }
}

impl BuildSectionConfig {
    pub const CONTENT: FieldPath = FieldPath::new("build.content");
    pub const FEATURED: FieldPath = FieldPath::new("build.featured");

    /// Validate build configuration.
    ///
    /// Runs after path normalization, so paths are absolute here.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !self.content.is_dir() {
            diag.error_with_hint(
                Self::CONTENT,
                format!("directory '{}' not found", self.content.display()),
                "run `folio init` or point build.content at your content directory",
            );
        }
        if self.featured == 0 {
            diag.warn(Self::FEATURED, "0, the home page will list no entries");
        }
    }
}
