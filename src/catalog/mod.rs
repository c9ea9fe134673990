//! Icon catalog: one mapping from technology name to renderable icon.
//!
//! Names are normalized before lookup, so `"Next.js"`, `"nextjs"` and
//! `"NextJs"` resolve to the same entry. Lookups of unknown names fail with
//! [`IconError::NotFound`]; nothing renders a silent blank.

mod builtin;

use std::fs;
use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::render::{Html, Render};

#[derive(Debug, Error)]
pub enum IconError {
    #[error("no icon named '{name}'")]
    NotFound { name: String },

    #[error("failed to read icon {0}: {1}")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("{0} is not an <svg> document")]
    InvalidSvg(PathBuf),
}

/// A renderable icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Icon {
    /// Built-in text badge on a colored square.
    Badge {
        label: &'static str,
        color: &'static str,
    },
    /// User-supplied SVG markup.
    Svg(String),
}

impl Render for Icon {
    fn render(&self, html: &mut Html) {
        match self {
            Self::Badge { label, color } => {
                let fg = contrast_color(color);
                html.raw(&format!(
                    concat!(
                        r#"<svg class="icon" viewBox="0 0 24 24" aria-hidden="true">"#,
                        r#"<rect width="24" height="24" rx="5" fill="{}"/>"#,
                        r#"<text x="12" y="16" text-anchor="middle" font-size="{}" "#,
                        r#"font-family="sans-serif" font-weight="700" fill="{}">"#
                    ),
                    color,
                    if label.chars().count() > 2 { 7 } else { 10 },
                    fg
                ));
                html.text(label).raw("</text></svg>");
            }
            Self::Svg(svg) => {
                html.raw(svg);
            }
        }
    }
}

/// Black or white, whichever reads better on `background` (`#RRGGBB`).
fn contrast_color(background: &str) -> &'static str {
    let hex = background.trim_start_matches('#');
    let channel = |i: usize| {
        hex.get(i..i + 2)
            .and_then(|c| u8::from_str_radix(c, 16).ok())
            .map_or(0.0, f32::from)
    };
    let luma = 0.299 * channel(0) + 0.587 * channel(2) + 0.114 * channel(4);
    if luma > 150.0 { "#000000" } else { "#FFFFFF" }
}

/// Normalize an icon name to its catalog key.
///
/// ASCII lowercase, alphanumerics only; `+` becomes `plus` and `#` becomes
/// `sharp` so `C++` and `C#` stay distinct from `C`.
pub fn normalize_key(name: &str) -> String {
    let mut key = String::with_capacity(name.len());
    for c in name.chars() {
        match c {
            c if c.is_ascii_alphanumeric() => key.push(c.to_ascii_lowercase()),
            '+' => key.push_str("plus"),
            '#' => key.push_str("sharp"),
            _ => {}
        }
    }
    key
}

/// Consolidated icon mapping: built-ins plus SVG overrides.
#[derive(Debug, Clone)]
pub struct IconCatalog {
    icons: FxHashMap<String, Icon>,
}

impl IconCatalog {
    /// Catalog holding only the built-in icons.
    pub fn builtin() -> Self {
        let mut icons = FxHashMap::default();
        for (keys, label, color) in builtin::BADGES {
            for key in *keys {
                icons.insert(
                    (*key).to_string(),
                    Icon::Badge {
                        label: *label,
                        color: *color,
                    },
                );
            }
        }
        Self { icons }
    }

    /// Built-ins overridden by every `*.svg` file in `dir`.
    ///
    /// The file stem is the icon name (`icons/Next.js.svg` overrides `nextjs`).
    /// A missing directory is not an error.
    pub fn load(dir: &Path) -> Result<Self, IconError> {
        let mut catalog = Self::builtin();
        if !dir.is_dir() {
            return Ok(catalog);
        }

        let entries = fs::read_dir(dir).map_err(|e| IconError::Io(dir.to_path_buf(), e))?;
        let mut loaded = 0;
        for entry in entries {
            let path = entry.map_err(|e| IconError::Io(dir.to_path_buf(), e))?.path();
            let is_svg = path
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            if !is_svg || !path.is_file() {
                continue;
            }

            let svg = fs::read_to_string(&path).map_err(|e| IconError::Io(path.clone(), e))?;
            let svg = svg.trim();
            if !svg.starts_with("<svg") && !svg.starts_with("<?xml") {
                return Err(IconError::InvalidSvg(path));
            }
            catalog.insert(stem, Icon::Svg(svg.to_string()));
            loaded += 1;
        }

        crate::debug!("icons"; "loaded {} svg icon(s) from {}", loaded, dir.display());
        Ok(catalog)
    }

    pub fn insert(&mut self, name: &str, icon: Icon) {
        self.icons.insert(normalize_key(name), icon);
    }

    /// Resolve `name` to an icon.
    pub fn lookup(&self, name: &str) -> Result<&Icon, IconError> {
        self.icons
            .get(&normalize_key(name))
            .ok_or_else(|| IconError::NotFound {
                name: name.to_string(),
            })
    }

    /// Number of keys, aliases included.
    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }
}

impl Default for IconCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_key() {
        assert_eq!(normalize_key("Next.js"), "nextjs");
        assert_eq!(normalize_key("NextJs"), "nextjs");
        assert_eq!(normalize_key("Tailwind CSS"), "tailwindcss");
        assert_eq!(normalize_key("C++"), "cplusplus");
        assert_eq!(normalize_key("C#"), "csharp");
        assert_eq!(normalize_key(""), "");
    }

    #[test]
    fn test_lookup_present_and_absent() {
        let catalog = IconCatalog::builtin();
        assert!(catalog.lookup("Next.js").is_ok());
        assert_eq!(catalog.lookup("nextjs").unwrap(), catalog.lookup("NextJs").unwrap());
        assert!(catalog.lookup("Shadcn UI").is_ok());

        let err = catalog.lookup("Cobol").unwrap_err();
        assert!(matches!(err, IconError::NotFound { ref name } if name == "Cobol"));
    }

    #[test]
    fn test_builtin_keys_are_normalized() {
        for (keys, _, _) in builtin::BADGES {
            for key in *keys {
                assert_eq!(normalize_key(key), *key);
            }
        }
    }

    #[test]
    fn test_svg_override() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("Next.js.svg"), "<svg><path d=\"M0 0\"/></svg>").unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let catalog = IconCatalog::load(dir.path()).unwrap();
        assert_eq!(
            catalog.lookup("nextjs").unwrap(),
            &Icon::Svg("<svg><path d=\"M0 0\"/></svg>".into())
        );
        assert_eq!(catalog.len(), IconCatalog::builtin().len());
    }

    #[test]
    fn test_invalid_svg_rejected() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("broken.svg"), "not an svg").unwrap();
        assert!(matches!(
            IconCatalog::load(dir.path()),
            Err(IconError::InvalidSvg(_))
        ));
    }

    #[test]
    fn test_missing_dir_is_builtin() {
        let catalog = IconCatalog::load(Path::new("/nonexistent/icons")).unwrap();
        assert_eq!(catalog.len(), IconCatalog::builtin().len());
    }

    #[test]
    fn test_badge_render() {
        let mut html = Html::fragment();
        html.render(IconCatalog::builtin().lookup("JavaScript").unwrap());
        let out = html.into_string();
        assert!(out.contains("fill=\"#F7DF1E\""));
        assert!(out.contains(">JS</text>"));
        // yellow background gets dark text
        assert!(out.contains("fill=\"#000000\">"));
    }

    #[test]
    fn test_contrast_color() {
        assert_eq!(contrast_color("#000000"), "#FFFFFF");
        assert_eq!(contrast_color("#FBF0DF"), "#000000");
        assert_eq!(contrast_color("bogus"), "#FFFFFF");
    }
}
