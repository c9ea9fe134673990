//! Embedded static resources.
//!
//! - `STYLE_CSS` - the default stylesheet, written as `style.css`
//! - `starter` - files `folio init` scaffolds a new portfolio with
//!
//! # Usage
//!
//! ```ignore
//! use embed::starter::{CONFIG_TOML, StarterVars};
//!
//! let toml = CONFIG_TOML.render(&StarterVars::new("Kaustubh"));
//! ```

mod template;

pub use template::{Template, TemplateVars};

/// Default stylesheet served at `/style.css`.
pub const STYLE_CSS: &str = include_str!("style.css");

pub mod starter {
    use super::{Template, TemplateVars};
    use crate::content::ContentFile;

    /// Variables shared by the starter files.
    pub struct StarterVars<'a> {
        pub title: &'a str,
        pub version: &'a str,
    }

    impl<'a> StarterVars<'a> {
        pub const fn new(title: &'a str) -> Self {
            Self {
                title,
                version: env!("CARGO_PKG_VERSION"),
            }
        }
    }

    impl TemplateVars for StarterVars<'_> {
        fn apply(&self, content: &str) -> String {
            content
                .replace("__TITLE__", self.title)
                .replace("__VERSION__", self.version)
        }
    }

    /// `folio.toml` with every section spelled out.
    pub const CONFIG_TOML: Template<StarterVars<'static>> =
        Template::new(include_str!("starter/folio.toml"));

    const HERO_TOML: Template<StarterVars<'static>> =
        Template::new(include_str!("starter/hero.toml"));
    const EXPERIENCES_TOML: Template<StarterVars<'static>> =
        Template::new(include_str!("starter/experiences.toml"));
    const PROJECTS_TOML: Template<StarterVars<'static>> =
        Template::new(include_str!("starter/projects.toml"));
    const QUOTES_TOML: Template<StarterVars<'static>> =
        Template::new(include_str!("starter/quotes.toml"));
    const SOCIALS_TOML: Template<StarterVars<'static>> =
        Template::new(include_str!("starter/socials.toml"));

    /// Placeholder artwork for the images the starter content references.
    pub const PLACEHOLDER_SVG: &str = include_str!("starter/placeholder.svg");

    /// Site paths (under `static/`) the starter content points at.
    pub const PLACEHOLDER_IMAGES: &[&str] =
        &["images/avatar.svg", "images/company.svg", "images/project.svg"];

    /// Starter content for one registry file.
    pub const fn content(file: ContentFile) -> Template<StarterVars<'static>> {
        match file {
            ContentFile::Hero => HERO_TOML,
            ContentFile::Experiences => EXPERIENCES_TOML,
            ContentFile::Projects => PROJECTS_TOML,
            ContentFile::Quotes => QUOTES_TOML,
            ContentFile::Socials => SOCIALS_TOML,
        }
    }
}
