//! Site configuration management for `folio.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # [site] [build] [serve] [images]
//! ├── types/         # ConfigError, diagnostics, FieldPath, global handle
//! ├── util.rs        # config file discovery
//! └── mod.rs         # SiteConfig (this file)
//! ```

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

pub use section::{
    BuildSectionConfig, ImagesConfig, RemotePattern, ServeConfig, SiteSectionConfig,
};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath, cfg, init_config, reload_config};

use crate::{
    cli::{BuildArgs, Cli, Commands},
    log,
};
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing folio.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// CLI arguments reference (internal use only)
    #[serde(skip)]
    pub cli: Option<&'static Cli>,

    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    #[serde(default)]
    pub site: SiteSectionConfig,

    #[serde(default)]
    pub build: BuildSectionConfig,

    #[serde(default)]
    pub serve: ServeConfig,

    #[serde(default)]
    pub images: ImagesConfig,
}

impl SiteConfig {
    /// Load configuration from CLI arguments.
    ///
    /// For non-Init commands, searches upward from cwd to find config file.
    /// The project root is determined by the config file's parent directory.
    pub fn load(cli: &'static Cli) -> Result<Self> {
        let (config_path, exists) = Self::resolve_config_path(cli)?;

        if !cli.is_init() && !exists {
            bail!(ConfigError::Validation(format!(
                "config file '{}' not found, run 'folio init' to create a new portfolio",
                cli.config.display()
            )));
        }

        let mut config = if exists && !cli.is_init() {
            Self::from_path(&config_path)?
        } else {
            Self::default()
        };

        config.config_path = config_path;
        config.cli = Some(cli);
        config.finalize(cli);

        if !cli.is_init() {
            config.validate()?;
        }

        Ok(config)
    }

    /// Resolve config file path based on command.
    fn resolve_config_path(cli: &Cli) -> Result<(PathBuf, bool)> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        match &cli.command {
            Commands::Init { name, .. } => {
                let dir = name.as_ref().map_or_else(|| cwd.clone(), |n| cwd.join(n));
                let path = dir.join(&cli.config);
                let exists = path.exists();
                Ok((path, exists))
            }
            _ => match find_config_file(&cli.config) {
                Some(path) => Ok((path, true)),
                None => Ok((cwd.join(&cli.config), false)),
            },
        }
    }

    /// Finalize configuration after loading.
    fn finalize(&mut self, cli: &Cli) {
        let root = match &cli.command {
            Commands::Init { name, .. } => {
                let cwd = std::env::current_dir().unwrap_or_default();
                name.as_ref().map_or_else(|| cwd.clone(), |n| cwd.join(n))
            }
            _ => self
                .config_path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default(),
        };

        self.normalize_paths(&root, cli);
        self.apply_command_options(cli);
        crate::logger::set_quiet_warnings(self.build.ignore_warnings);
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content).map_err(ConfigError::Toml)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
            if !Self::prompt_continue()? {
                bail!("Aborted due to unknown config fields");
            }
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), toml::de::Error> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        eprintln!();
        log!("warning"; "unknown fields in {}:", display_path);
        log!("warning"; "ignoring:");
        for field in fields {
            eprintln!("- {}", field);
        }
        eprintln!();
    }

    /// Prompt user to continue. Non-interactive sessions continue with the warning.
    fn prompt_continue() -> Result<bool> {
        use std::io::{self, IsTerminal, Write};

        if !io::stdin().is_terminal() {
            return Ok(true);
        }

        eprint!("Continue? [y/N] ");
        io::stderr().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        let input = input.trim().to_lowercase();
        Ok(input == "y" || input == "yes")
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Get path relative to the site root (for display)
    pub fn root_relative(&self, path: impl AsRef<Path>) -> PathBuf {
        path.as_ref()
            .strip_prefix(&self.root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.as_ref().to_path_buf())
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    fn apply_command_options(&mut self, cli: &Cli) {
        match &cli.command {
            Commands::Build { build_args } => self.apply_build_args(build_args),
            Commands::Serve {
                build_args,
                interface,
                port,
                watch,
            } => {
                self.apply_build_args(build_args);
                Self::update_option(&mut self.serve.interface, interface.as_ref());
                Self::update_option(&mut self.serve.port, port.as_ref());
                Self::update_option(&mut self.serve.watch, watch.as_ref());
            }
            Commands::Init { .. } | Commands::Validate { .. } => {}
        }
    }

    fn apply_build_args(&mut self, args: &BuildArgs) {
        crate::logger::set_verbose(args.verbose);

        Self::update_option(&mut self.build.minify, args.minify.as_ref());
        Self::update_option(&mut self.build.sitemap, args.sitemap.as_ref());
        self.build.clean = args.clean;

        if let Some(ref url) = args.site_url {
            self.site.url = Some(url.clone());
        }
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // path normalization
    // ========================================================================

    /// Normalize all paths relative to root directory.
    fn normalize_paths(&mut self, root: &Path, cli: &Cli) {
        use crate::utils::path::normalize_path;

        Self::update_option(&mut self.build.content, cli.content.as_ref());
        Self::update_option(&mut self.build.output, cli.output.as_ref());

        self.root = normalize_path(root);
        self.config_path = normalize_path(&self.config_path);

        let root = self.root.clone();
        for dir in [
            &mut self.build.content,
            &mut self.build.output,
            &mut self.build.static_dir,
            &mut self.build.icons,
        ] {
            *dir = normalize_path(&root.join(&*dir));
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration, collecting all errors and returning them at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        if !self.config_path.exists() {
            bail!(ConfigError::Validation("config file not found".into()));
        }

        self.site.validate(&mut diag);
        self.build.validate(&mut diag);
        self.serve.validate(&mut diag);
        self.images.validate(&mut diag);

        if self.build.sitemap && self.site.url.is_none() {
            diag.warn(SiteSectionConfig::URL, "not set, sitemap.xml will be skipped");
        }

        diag.print_warnings();
        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config with minimal `[site]` fields; `extra` is appended inside
/// `[site]`, so it may add site keys or open new sections.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let config = format!("[site]\ntitle = \"Test\"\ndescription = \"Test\"\n{extra}");
    let (parsed, ignored) = SiteConfig::parse_with_ignored(&config).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
