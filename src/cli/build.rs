//! Site building orchestration.
//!
//! Build pipeline phases:
//! - **Load** - Read content and icons, validate, print the report
//! - **Init** - Prepare (and optionally clean) the output directory
//! - **Render** - Render every page in parallel, write `style.css`
//! - **Post-process** - Copy static files and write the sitemap in parallel
//! - **Finalize** - Logging

use crate::{
    config::SiteConfig,
    embed::STYLE_CSS,
    generator::sitemap::build_sitemap,
    log,
    site::{Page, Site},
    utils::{path::copy_dir, plural_s},
};
use anyhow::{Context, Result, bail};
use rayon::prelude::*;
use std::{fs, path::Path, sync::Arc};

/// Output file for the embedded stylesheet.
const STYLE_FILE: &str = "style.css";

/// What a finished build produced.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BuildStats {
    pub pages: usize,
    pub static_files: usize,
    pub sitemap: bool,
}

/// Build the entire site
///
/// Pipeline: load -> init -> render -> post-process -> finalize
pub fn build_site(config: Arc<SiteConfig>, quiet: bool) -> Result<BuildStats> {
    let site = load_site(config)?;
    let config = &site.config;
    let output = &config.build.output;

    init_output(output, config.build.clean)?;

    let pages = render_pages(&site, output)?;
    write_file(&output.join(STYLE_FILE), STYLE_CSS)?;

    let (static_files, sitemap) = rayon::join(
        || copy_static(&config.build.static_dir, output),
        || build_sitemap(config),
    );
    let stats = BuildStats {
        pages,
        static_files: static_files?,
        sitemap: sitemap?,
    };

    if !quiet {
        log_build_result(&stats, &config.root_relative(output));
    }
    Ok(stats)
}

/// Load the site and report validation problems.
///
/// Errors stop the build unless `build.ignore_errors` is set.
fn load_site(config: Arc<SiteConfig>) -> Result<Site> {
    let (site, report) = Site::load(config)?;

    if !report.is_empty() {
        report.print();
        log!("validate"; "{}", report);
    }

    if report.has_errors() {
        if !site.config.build.ignore_errors {
            bail!(
                "content validation failed with {} error{}, set build.ignore_errors to build anyway",
                report.error_count(),
                plural_s(report.error_count())
            );
        }
        crate::warn!("build"; "ignoring content errors, affected sections may be incomplete");
    }

    Ok(site)
}

/// Ensure the output directory exists, clearing it first when `clean`
fn init_output(output: &Path, clean: bool) -> Result<()> {
    if clean && output.exists() {
        fs::remove_dir_all(output).with_context(|| {
            format!("Failed to clear output directory: {}", output.display())
        })?;
    }
    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create output directory: {}", output.display()))
}

/// Render all pages in parallel. Each render mounts its own quote selector.
fn render_pages(site: &Site, output: &Path) -> Result<usize> {
    Page::ALL
        .par_iter()
        .map(|&page| -> Result<()> {
            let html = site
                .render(page, &mut rand::rng())
                .with_context(|| format!("failed to render {}", page.route()))?;
            write_file(&output.join(page.output_path()), &html)?;
            crate::debug!("build"; "{} -> {}", page.route(), page.output_path());
            Ok(())
        })
        .collect::<Result<Vec<()>>>()
        .map(|pages| pages.len())
}

fn copy_static(static_dir: &Path, output: &Path) -> Result<usize> {
    copy_dir(static_dir, output).with_context(|| {
        format!("Failed to copy static files from {}", static_dir.display())
    })
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}

fn log_build_result(stats: &BuildStats, output: &Path) {
    log!(
        "build";
        "rendered {} page{}, copied {} static file{}{}",
        stats.pages,
        plural_s(stats.pages),
        stats.static_files,
        plural_s(stats.static_files),
        if stats.sitemap { ", wrote sitemap.xml" } else { "" }
    );
    log!("build"; "done, output in {}", output.display());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use crate::content::ContentFile;
    use tempfile::TempDir;

    const QUOTES: &str =
        "[[quotes]]\nquote = \"People's dreams... have no end!\"\nauthor = \"Marshall D. Teach\"\n";

    fn config_in(root: &Path, extra: &str) -> SiteConfig {
        let mut config = test_parse_config(extra);
        config.root = root.to_path_buf();
        config.build.content = root.join("content");
        config.build.output = root.join("public");
        config.build.static_dir = root.join("static");
        config.build.icons = root.join("icons");
        config
    }

    fn write_content(root: &Path, file: ContentFile, source: &str) {
        let dir = root.join("content");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(file.file_name()), source).unwrap();
    }

    #[test]
    fn test_build_writes_every_page() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        write_content(root, ContentFile::Quotes, QUOTES);
        fs::create_dir_all(root.join("static/company")).unwrap();
        fs::write(root.join("static/company/rpa.png"), b"png").unwrap();

        let config = config_in(root, "url = \"https://kstubhie.dev\"\n");
        let stats = build_site(Arc::new(config), true).unwrap();

        assert_eq!(stats.pages, Page::ALL.len());
        assert_eq!(stats.static_files, 1);
        assert!(stats.sitemap);

        let public = root.join("public");
        for page in Page::ALL {
            assert!(public.join(page.output_path()).is_file());
        }
        assert!(public.join("style.css").is_file());
        assert!(public.join("company/rpa.png").is_file());
        assert!(public.join("sitemap.xml").is_file());

        let home = fs::read_to_string(public.join("index.html")).unwrap();
        assert!(home.contains("Marshall D. Teach"));
    }

    #[test]
    fn test_build_stops_on_content_errors() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        write_content(
            root,
            ContentFile::Projects,
            "[[projects]]\ntitle = \"TechMart\"\ndetails = true\n",
        );

        let err = build_site(Arc::new(config_in(root, "")), true).unwrap_err();
        assert!(err.to_string().contains("content validation failed"));
        assert!(!root.join("public/index.html").exists());
    }

    #[test]
    fn test_ignore_errors_builds_anyway() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        write_content(root, ContentFile::Quotes, "[[quotes]]\nauthor = \"Nobody\"\n");

        let config = config_in(root, "[build]\nignore_errors = true\nsitemap = false\n");
        let stats = build_site(Arc::new(config), true).unwrap();
        assert_eq!(stats.pages, 3);
        assert!(!stats.sitemap);
    }

    #[test]
    fn test_ignore_errors_renders_unknown_icons_without_them() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        write_content(
            root,
            ContentFile::Projects,
            "[[projects]]\ntitle = \"Ledger\"\n\
             technologies = [{ name = \"Cobol\", href = \"https://example.com\" }]\n",
        );

        let config = config_in(root, "[build]\nignore_errors = true\nsitemap = false\n");
        let stats = build_site(Arc::new(config), true).unwrap();
        assert_eq!(stats.pages, 3);

        let projects = fs::read_to_string(root.join("public/projects/index.html")).unwrap();
        assert!(projects.contains("Ledger"));
        assert!(projects.contains("<span>Cobol</span>"));
    }

    #[test]
    fn test_unknown_icon_fails_without_ignore_errors() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        let mut config = config_in(root, "");
        config.build.ignore_errors = false;
        write_content(
            root,
            ContentFile::Socials,
            "[[socials]]\nname = \"Mastodon\"\nhref = \"https://example.social/@me\"\n",
        );

        assert!(build_site(Arc::new(config), true).is_err());
        assert!(!root.join("public/index.html").exists());
    }

    #[test]
    fn test_clean_removes_stale_output() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        fs::create_dir_all(root.join("public")).unwrap();
        fs::write(root.join("public/stale.html"), "old").unwrap();

        let mut config = config_in(root, "");
        config.build.clean = true;
        build_site(Arc::new(config), true).unwrap();

        assert!(!root.join("public/stale.html").exists());
        assert!(root.join("public/index.html").is_file());
    }
}
