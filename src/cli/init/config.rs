//! Starter file generation.
//!
//! Writes `folio.toml`, the starter content registry, placeholder images and
//! ignore files for new portfolios.

use anyhow::{Context, Result};
use std::{fs, path::Path};

use crate::content::ContentFile;
use crate::embed::starter::{self, CONFIG_TOML, StarterVars};

/// Files to write ignore patterns to
const IGNORE_FILES: &[&str] = &[".gitignore", ".ignore"];

/// Generate `folio.toml` content
pub fn generate_config_template(title: &str) -> String {
    CONFIG_TOML.render(&StarterVars::new(title))
}

/// Write default configuration to `config_path`
pub fn write_config(config_path: &Path, title: &str) -> Result<()> {
    fs::write(config_path, generate_config_template(title))
        .with_context(|| format!("Failed to write config file '{}'", config_path.display()))
}

/// Write one starter file per registry collection into `content_dir`
pub fn write_content(content_dir: &Path, title: &str) -> Result<()> {
    let vars = StarterVars::new(title);
    for file in ContentFile::ALL {
        let path = content_dir.join(file.file_name());
        fs::write(&path, starter::content(file).render(&vars))
            .with_context(|| format!("Failed to write '{}'", path.display()))?;
    }
    Ok(())
}

/// Write the placeholder images the starter content references
pub fn write_placeholders(static_dir: &Path) -> Result<()> {
    for image in starter::PLACEHOLDER_IMAGES {
        let path = static_dir.join(image);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, starter::PLACEHOLDER_SVG)
            .with_context(|| format!("Failed to write '{}'", path.display()))?;
    }
    Ok(())
}

/// Write .gitignore and .ignore files with standard patterns
///
/// Patterns include:
/// - Output directory (e.g., `/public`)
/// - OS-specific files (`.DS_Store`)
pub fn write_ignore_files(root: &Path, output_dir: &Path) -> Result<()> {
    let output_pattern = Path::new("/").join(output_dir);
    let patterns = [
        output_pattern.to_string_lossy().into_owned(),
        ".DS_Store".to_string(),
    ];

    let content = patterns.join("\n");

    for filename in IGNORE_FILES {
        let path = root.join(filename);
        // Only create if doesn't exist (don't overwrite user's ignore files)
        if !path.exists() {
            fs::write(&path, &content)
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
        }
    }

    Ok(())
}
