//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// folio static portfolio generator CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Output directory path (relative to project root)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Content directory path (relative to project root)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub content: Option<PathBuf>,

    /// Config file path (default: folio.toml)
    #[arg(short = 'C', long, default_value = "folio.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Scaffold a new portfolio with starter content
    #[command(visible_alias = "i")]
    Init {
        /// Site directory name/path (relative to current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        name: Option<PathBuf>,

        /// Print the config template instead of writing files
        #[arg(long)]
        dry: bool,
    },

    /// Render the portfolio into the output directory
    #[command(visible_alias = "b")]
    Build {
        #[command(flatten)]
        build_args: BuildArgs,
    },

    /// Start a preview server rendering pages on request
    #[command(visible_alias = "s")]
    Serve {
        #[command(flatten)]
        build_args: BuildArgs,

        /// Network interface to bind (e.g., 127.0.0.1, 0.0.0.0)
        #[arg(short, long)]
        interface: Option<std::net::IpAddr>,

        /// Port number to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// Reload content when files change
        #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
        watch: Option<bool>,
    },

    /// Check content for missing data, bad URLs, unknown icons and template tokens
    #[command(visible_alias = "v")]
    Validate {
        #[command(flatten)]
        args: ValidateArgs,
    },
}

/// Validate command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ValidateArgs {
    /// Report problems but exit successfully
    #[arg(long, short = 'w')]
    pub warn_only: bool,
}

/// Shared build arguments for Build and Serve commands
#[derive(clap::Args, Debug, Clone)]
pub struct BuildArgs {
    /// Clean output directory completely before building
    #[arg(long)]
    pub clean: bool,

    /// Compact the HTML output
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub minify: Option<bool>,

    /// Enable sitemap generation
    #[arg(short = 'S', long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub sitemap: Option<bool>,

    /// Override site URL for deployment.
    ///
    /// Useful when the production URL differs from the one in folio.toml.
    #[arg(short = 'U', long = "site-url", value_hint = clap::ValueHint::Url)]
    pub site_url: Option<String>,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

impl Cli {
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Commands::Init { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_build_flags() {
        let cli = Cli::parse_from(["folio", "build", "--minify=false", "-U", "https://a.dev"]);
        let Commands::Build { build_args } = cli.command else {
            panic!("expected build");
        };
        assert_eq!(build_args.minify, Some(false));
        assert_eq!(build_args.site_url.as_deref(), Some("https://a.dev"));
        assert_eq!(cli.config, PathBuf::from("folio.toml"));
    }

    #[test]
    fn test_parse_serve_watch_flag() {
        let cli = Cli::parse_from(["folio", "serve", "-p", "8080", "-w"]);
        let Commands::Serve { port, watch, .. } = cli.command else {
            panic!("expected serve");
        };
        assert_eq!(port, Some(8080));
        assert_eq!(watch, Some(true));
    }

    #[test]
    fn test_parse_init_alias() {
        let cli = Cli::parse_from(["folio", "i", "my-site", "--dry"]);
        assert!(cli.is_init());
    }
}
