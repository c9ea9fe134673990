//! Portfolio directory structure creation.

use crate::config::SiteConfig;
use anyhow::{Context, Result};
use std::{fs, path::Path};

/// Create the portfolio directory structure described by `config`:
/// the root, content, static and icon directories.
///
/// The root directory is created if it doesn't exist.
pub fn create_structure(config: &SiteConfig) -> Result<()> {
    let build = &config.build;
    for dir in [
        config.get_root(),
        &build.content,
        &build.static_dir,
        &build.icons,
    ] {
        create_dir(dir)?;
    }
    Ok(())
}

fn create_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path)
        .with_context(|| format!("Failed to create directory '{}'", path.display()))
}

/// Config rooted at `root` with default directory names, as `SiteConfig::load`
/// would produce for `folio init`.
#[cfg(test)]
pub(super) fn config_at(root: &Path) -> SiteConfig {
    let mut config = SiteConfig {
        root: root.to_path_buf(),
        config_path: root.join("folio.toml"),
        ..SiteConfig::default()
    };
    for dir in [
        &mut config.build.content,
        &mut config.build.output,
        &mut config.build.static_dir,
        &mut config.build.icons,
    ] {
        *dir = root.join(&*dir);
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_create_structure() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("portfolio");

        create_structure(&config_at(&root)).unwrap();

        assert!(root.join("content").is_dir());
        assert!(root.join("static").is_dir());
        assert!(root.join("icons").is_dir());
        assert!(!root.join("public").exists());
    }

    #[test]
    fn test_create_structure_existing_root() {
        let temp = TempDir::new().unwrap();
        create_structure(&config_at(temp.path())).unwrap();

        assert!(temp.path().join("content").is_dir());
    }
}
