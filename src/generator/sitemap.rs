//! Sitemap generation.
//!
//! Lists every rendered route for search engine indexing. Needs `site.url`,
//! since sitemap locations must be absolute.
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://example.com/</loc>
//!     <priority>1.0</priority>
//!   </url>
//! </urlset>
//! ```

use crate::{config::SiteConfig, generator::minify_xml, log, site::Page};
use anyhow::{Context, Result};
use std::borrow::Cow;
use std::fs;

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";
const SITEMAP_FILE: &str = "sitemap.xml";

/// Build sitemap if enabled and the site has a base url.
///
/// Returns whether a sitemap was written.
pub fn build_sitemap(config: &SiteConfig) -> Result<bool> {
    if !config.build.sitemap {
        return Ok(false);
    }
    let Some(base_url) = config.site.base_url() else {
        crate::debug!("sitemap"; "site.url not set, skipping");
        return Ok(false);
    };

    Sitemap::build(base_url).write(config)?;
    Ok(true)
}

struct Sitemap {
    urls: Vec<UrlEntry>,
}

struct UrlEntry {
    loc: String,
    priority: &'static str,
}

impl Sitemap {
    fn build(base_url: &str) -> Self {
        let base_url = base_url.trim_end_matches('/');
        let urls = Page::ALL
            .iter()
            .map(|page| UrlEntry {
                loc: format!("{}{}", base_url, page.route()),
                priority: if *page == Page::Home { "1.0" } else { "0.8" },
            })
            .collect();

        Self { urls }
    }

    fn into_xml(self) -> String {
        let mut xml = String::with_capacity(1024);

        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str("<urlset xmlns=\"");
        xml.push_str(SITEMAP_NS);
        xml.push_str("\">\n");

        for entry in self.urls {
            xml.push_str("  <url>\n    <loc>");
            xml.push_str(&escape_xml(&entry.loc));
            xml.push_str("</loc>\n    <priority>");
            xml.push_str(entry.priority);
            xml.push_str("</priority>\n  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }

    fn write(self, config: &SiteConfig) -> Result<()> {
        let sitemap_path = config.build.output.join(SITEMAP_FILE);
        let xml = self.into_xml();
        let xml = minify_xml(&xml, config.build.minify);

        fs::write(&sitemap_path, xml.as_bytes())
            .with_context(|| format!("Failed to write sitemap to {}", sitemap_path.display()))?;

        log!("sitemap"; "{}", SITEMAP_FILE);
        Ok(())
    }
}

/// Escape special XML characters.
fn escape_xml(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    Cow::Owned(
        s.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&apos;"),
    )
}
