//! Content validation command.
//!
//! Loads the registry and icon catalog exactly as `build` does, prints every
//! problem grouped by content file, then a one-line summary.

use anyhow::{Result, bail};
use std::sync::Arc;

use crate::cli::ValidateArgs;
use crate::config::SiteConfig;
use crate::content::ValidationReport;
use crate::log;
use crate::site::Site;
use crate::utils::plural_s;

/// Validate content and icons for the site described by `config`
pub fn validate_site(config: Arc<SiteConfig>, args: &ValidateArgs) -> Result<()> {
    let (site, report) = Site::load(config)?;
    let registry = &site.registry;

    log!(
        "validate";
        "checked {} experience{}, {} project{}, {} quote{}, {} social{} against {} icons",
        registry.experiences.len(),
        plural_s(registry.experiences.len()),
        registry.projects.len(),
        plural_s(registry.projects.len()),
        registry.quotes.len(),
        plural_s(registry.quotes.len()),
        registry.socials.len(),
        plural_s(registry.socials.len()),
        site.catalog.len()
    );

    report.print();
    if !report.is_empty() {
        eprintln!();
    }
    log!("validate"; "{}", report);

    print_summary(&report, args.warn_only)
}

/// Fail when there are errors, unless only warnings were requested
fn print_summary(report: &ValidationReport, warn_only: bool) -> Result<()> {
    let errors = report.error_count();
    if errors == 0 {
        return Ok(());
    }
    if warn_only {
        crate::warn!("validate"; "{} error{} ignored (--warn-only)", errors, plural_s(errors));
        return Ok(());
    }
    bail!("validation failed with {} error{}", errors, plural_s(errors))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use crate::content::ContentFile;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn config_with_projects(root: &Path, projects: &str) -> Arc<SiteConfig> {
        let content = root.join("content");
        fs::create_dir_all(&content).unwrap();
        fs::write(content.join(ContentFile::Projects.file_name()), projects).unwrap();

        let mut config = test_parse_config("");
        config.root = root.to_path_buf();
        config.build.content = content;
        config.build.icons = root.join("icons");
        config.build.static_dir = root.join("static");
        Arc::new(config)
    }

    const BROKEN: &str = r#"
[[projects]]
title = "AI Financial Advisor"
description = "Portfolio tracking with personalised guidance."
image = "/project/financial/findash.png"
link = "https://youtu.be/UyRYWzAS7-4"
details = true
"#;

    #[test]
    fn test_errors_fail_validation() {
        let temp = TempDir::new().unwrap();
        let config = config_with_projects(temp.path(), BROKEN);
        let args = ValidateArgs { warn_only: false };

        let err = validate_site(config, &args).unwrap_err();
        assert!(err.to_string().contains("validation failed with 1 error"));
    }

    #[test]
    fn test_warn_only_succeeds() {
        let temp = TempDir::new().unwrap();
        let config = config_with_projects(temp.path(), BROKEN);
        let args = ValidateArgs { warn_only: true };

        assert!(validate_site(config, &args).is_ok());
    }

    #[test]
    fn test_warnings_alone_pass() {
        let temp = TempDir::new().unwrap();
        let fixed = BROKEN.replace("details = true", "details = false");
        let config = config_with_projects(temp.path(), &fixed);
        let args = ValidateArgs { warn_only: false };

        assert!(validate_site(config, &args).is_ok());
    }
}
