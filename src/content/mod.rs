//! Content registry: the hand-authored data a portfolio is rendered from.
//!
//! ```text
//! content/
//! ├── hero.toml          # HeroConfig (singleton)
//! ├── experiences.toml   # [[experiences]]
//! ├── projects.toml      # [[projects]]
//! ├── quotes.toml        # [[quotes]]
//! └── socials.toml       # [[socials]]
//! ```
//!
//! A missing file loads as an empty collection; the sections it feeds render
//! nothing. The registry is immutable once loaded.

mod error;
mod report;
mod types;
mod validate;

pub use error::ContentError;
pub use report::ValidationReport;
pub use types::{
    Button, ButtonVariant, Experience, HeroConfig, Project, Quote, SocialLink, Technology,
};
pub use validate::validate;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::fmt;
use std::path::Path;

/// The content files making up a registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContentFile {
    Hero,
    Experiences,
    Projects,
    Quotes,
    Socials,
}

impl ContentFile {
    pub const ALL: [Self; 5] = [
        Self::Hero,
        Self::Experiences,
        Self::Projects,
        Self::Quotes,
        Self::Socials,
    ];

    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Hero => "hero.toml",
            Self::Experiences => "experiences.toml",
            Self::Projects => "projects.toml",
            Self::Quotes => "quotes.toml",
            Self::Socials => "socials.toml",
        }
    }

    /// Root of field paths reported for this file.
    pub const fn field_root(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::Experiences => "experiences",
            Self::Projects => "projects",
            Self::Quotes => "quotes",
            Self::Socials => "socials",
        }
    }
}

impl fmt::Display for ContentFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct ExperiencesFile {
    experiences: Vec<Experience>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct ProjectsFile {
    projects: Vec<Project>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct QuotesFile {
    quotes: Vec<Quote>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct SocialsFile {
    socials: Vec<SocialLink>,
}

/// Immutable, process-wide portfolio content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    pub hero: Option<HeroConfig>,
    pub experiences: Vec<Experience>,
    pub projects: Vec<Project>,
    pub quotes: Vec<Quote>,
    pub socials: Vec<SocialLink>,
}

/// Observations made while loading, fed into the validation report.
#[derive(Debug, Default)]
pub struct LoadNotes {
    /// Files that do not exist.
    pub missing: Vec<ContentFile>,
    /// Keys no record type knows, per file.
    pub unknown_fields: Vec<(ContentFile, String)>,
}

impl Registry {
    /// Load every content file from `dir`.
    pub fn load(dir: &Path) -> Result<(Self, LoadNotes), ContentError> {
        let mut notes = LoadNotes::default();

        let hero = read_file::<HeroConfig>(dir, ContentFile::Hero, &mut notes)?;
        let experiences =
            read_file::<ExperiencesFile>(dir, ContentFile::Experiences, &mut notes)?;
        let projects = read_file::<ProjectsFile>(dir, ContentFile::Projects, &mut notes)?;
        let quotes = read_file::<QuotesFile>(dir, ContentFile::Quotes, &mut notes)?;
        let socials = read_file::<SocialsFile>(dir, ContentFile::Socials, &mut notes)?;

        let registry = Self {
            hero,
            experiences: experiences.unwrap_or_default().experiences,
            projects: projects.unwrap_or_default().projects,
            quotes: quotes.unwrap_or_default().quotes,
            socials: socials.unwrap_or_default().socials,
        };
        crate::debug!(
            "content";
            "loaded {} experiences, {} projects, {} quotes, {} socials",
            registry.experiences.len(),
            registry.projects.len(),
            registry.quotes.len(),
            registry.socials.len()
        );

        Ok((registry, notes))
    }

    /// Parse a single content file's source text, as it would be loaded from disk.
    #[cfg(test)]
    pub fn parse_file(file: ContentFile, content: &str) -> Result<Self, toml::de::Error> {
        let mut registry = Self::default();
        match file {
            ContentFile::Hero => registry.hero = Some(toml::from_str(content)?),
            ContentFile::Experiences => {
                registry.experiences = toml::from_str::<ExperiencesFile>(content)?.experiences;
            }
            ContentFile::Projects => {
                registry.projects = toml::from_str::<ProjectsFile>(content)?.projects;
            }
            ContentFile::Quotes => registry.quotes = toml::from_str::<QuotesFile>(content)?.quotes,
            ContentFile::Socials => {
                registry.socials = toml::from_str::<SocialsFile>(content)?.socials;
            }
        }
        Ok(registry)
    }
}

/// Read and deserialize one content file, collecting unknown keys.
///
/// Returns `Ok(None)` when the file does not exist.
fn read_file<T: DeserializeOwned>(
    dir: &Path,
    file: ContentFile,
    notes: &mut LoadNotes,
) -> Result<Option<T>, ContentError> {
    let path = dir.join(file.file_name());
    if !path.is_file() {
        notes.missing.push(file);
        return Ok(None);
    }

    let content =
        std::fs::read_to_string(&path).map_err(|e| ContentError::Io(path.clone(), e))?;
    let deserializer = toml::Deserializer::new(&content);
    let value = serde_ignored::deserialize(deserializer, |key: serde_ignored::Path| {
        notes.unknown_fields.push((file, key.to_string()));
    })
    .map_err(|e| ContentError::Toml(path.clone(), e))?;

    Ok(Some(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_load_missing_files_are_empty() {
        let dir = tempfile::tempdir().unwrap();
        let (registry, notes) = Registry::load(dir.path()).unwrap();

        assert!(registry.hero.is_none());
        assert!(registry.quotes.is_empty());
        assert_eq!(notes.missing.len(), ContentFile::ALL.len());
    }

    #[test]
    fn test_load_quotes_and_unknown_fields() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("quotes.toml"),
            r#"
[[quotes]]
quote = "A man's dream will never die!"
author = "Marshall D. Teach, One Piece"
mood = "hopeful"
"#,
        )
        .unwrap();

        let (registry, notes) = Registry::load(dir.path()).unwrap();
        assert_eq!(registry.quotes.len(), 1);
        assert_eq!(registry.quotes[0].author, "Marshall D. Teach, One Piece");
        assert_eq!(notes.unknown_fields.len(), 1);
        assert_eq!(notes.unknown_fields[0].0, ContentFile::Quotes);
        assert!(notes.unknown_fields[0].1.contains("mood"));
        assert!(!notes.missing.contains(&ContentFile::Quotes));
    }

    #[test]
    fn test_load_reports_parse_error_with_path() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("projects.toml"), "[[projects]\ntitle = 1").unwrap();

        let err = Registry::load(dir.path()).unwrap_err();
        assert!(matches!(err, ContentError::Toml(ref p, _) if p.ends_with("projects.toml")));
    }

    #[test]
    fn test_parse_experience_technologies() {
        let registry = Registry::parse_file(
            ContentFile::Experiences,
            r#"
[[experiences]]
company = "MedikaRX"
position = "Frontend Developer"
start_date = "May 2025"
end_date = "July 2025"
technologies = [
    { name = "Next.js", href = "https://nextjs.org/" },
    { name = "Shadcn UI", href = "https://ui.shadcn.com/", icon = "shadcn" },
]
"#,
        )
        .unwrap();

        let exp = &registry.experiences[0];
        assert!(!exp.is_current);
        assert_eq!(exp.technologies.len(), 2);
        assert_eq!(exp.technologies[1].icon_key(), "shadcn");
    }
}
