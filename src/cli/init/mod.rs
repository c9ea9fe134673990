//! Portfolio initialization module.
//!
//! Creates a new portfolio with default configuration and starter content.
//!
//! # Module Structure
//!
//! - [`validate`]: Pre-initialization validation
//! - [`structure`]: Directory structure creation
//! - [`config`]: Config, content and ignore file generation

mod config;
mod structure;
mod validate;

use crate::{config::SiteConfig, log};
use anyhow::Result;

pub use validate::InitMode;

/// Title used when the root directory has no usable name.
const DEFAULT_TITLE: &str = "My Portfolio";

/// Create a new portfolio with default structure
///
/// # Steps
/// 1. Validate target directory
/// 2. Create directory structure
/// 3. Write `folio.toml` and starter content
/// 4. Write placeholder images and ignore files
///
/// If `dry_run` is true, only prints the config template to stdout
pub fn new_site(site_config: &SiteConfig, has_name: bool, dry_run: bool) -> Result<()> {
    let title = site_title(site_config);

    if dry_run {
        print!("{}", config::generate_config_template(&title));
        return Ok(());
    }

    let root = site_config.get_root();
    let mode = if has_name {
        InitMode::NewDir
    } else {
        InitMode::CurrentDir
    };
    validate::validate_target(root, mode)?;

    structure::create_structure(site_config)?;

    let build = &site_config.build;
    config::write_config(&site_config.config_path, &title)?;
    config::write_content(&build.content, &title)?;
    config::write_placeholders(&build.static_dir)?;
    let output_dir = site_config.root_relative(&build.output);
    config::write_ignore_files(root, &output_dir)?;

    log!("init"; "portfolio initialized in {}", root.display());
    log!("init"; "run `folio serve` to preview it");
    Ok(())
}

/// Portfolio title derived from the root directory name.
fn site_title(config: &SiteConfig) -> String {
    config
        .get_root()
        .file_name()
        .and_then(|name| name.to_str())
        .map(|name| name.trim())
        .filter(|name| !name.is_empty())
        .unwrap_or(DEFAULT_TITLE)
        .replace('"', "")
}
