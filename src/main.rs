//! folio - a static portfolio generator.
//!
//! Experience, projects, quotes and social links are authored as TOML under
//! `content/`, validated once at load, and rendered into static pages.

mod catalog;
mod cli;
mod config;
mod content;
mod core;
mod embed;
mod generator;
mod image;
mod logger;
mod quote;
mod render;
mod site;
mod template;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::{SiteConfig, init_config};

fn main() -> Result<()> {
    // Setup global Ctrl+C handler (before any blocking operations)
    core::setup_shutdown_handler()?;

    let cli: &'static Cli = Box::leak(Box::new(Cli::parse()));

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = init_config(SiteConfig::load(cli)?);

    match &cli.command {
        Commands::Init { name, dry } => cli::init::new_site(&config, name.is_some(), *dry),
        Commands::Build { .. } => cli::build::build_site(config, false).map(|_| ()),
        Commands::Serve { .. } => cli::serve::serve_site(config),
        Commands::Validate { args } => cli::validate::validate_site(config, args),
    }
}
