//! Content registry record types.
//!
//! Every field defaults when absent so a half-written entry still loads;
//! the validator reports what is missing with a precise field path.

use serde::{Deserialize, Serialize};

/// A named external tool or library. The icon is resolved by name through the
/// icon catalog; `icon` only overrides the catalog key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Technology {
    pub name: String,
    pub href: Option<String>,
    pub icon: Option<String>,
}

impl Technology {
    pub fn new(name: &str, href: &str) -> Self {
        Self {
            name: name.into(),
            href: Some(href.into()),
            icon: None,
        }
    }

    /// Catalog key used to resolve this technology's icon.
    pub fn icon_key(&self) -> &str {
        self.icon.as_deref().unwrap_or(&self.name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Experience {
    pub company: String,
    pub position: String,
    pub location: String,
    pub image: String,
    /// Bullet points, in display order. `*text*` renders emphasised.
    pub description: Vec<String>,
    pub start_date: String,
    /// Only meaningful when `is_current` is false.
    pub end_date: String,
    pub website: String,
    pub x: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub technologies: Vec<Technology>,
    pub is_current: bool,
}

impl Experience {
    /// End of the date range as displayed: "Present" for current positions.
    pub fn display_end(&self) -> &str {
        if self.is_current {
            "Present"
        } else {
            &self.end_date
        }
    }

    /// `(label, url)` pairs for the entry's social profiles, in display order.
    pub fn social_links(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("X", self.x.as_deref()),
            ("LinkedIn", self.linkedin.as_deref()),
            ("GitHub", self.github.as_deref()),
        ]
        .into_iter()
        .filter_map(|(label, url)| url.map(|u| (label, u)))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub image: String,
    pub video: Option<String>,
    pub link: String,
    pub technologies: Vec<Technology>,
    pub github: Option<String>,
    pub live: Option<String>,
    /// A detail page exists at `details_slug`.
    pub details: bool,
    pub details_slug: Option<String>,
    pub is_working: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Quote {
    pub quote: String,
    pub author: String,
}

impl Quote {
    pub fn new(quote: &str, author: &str) -> Self {
        Self {
            quote: quote.into(),
            author: author.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    #[default]
    Default,
    Outline,
}

impl ButtonVariant {
    pub const fn class(self) -> &'static str {
        match self {
            Self::Default => "button",
            Self::Outline => "button button-outline",
        }
    }
}

/// Call-to-action button in the hero section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Button {
    pub variant: ButtonVariant,
    pub text: String,
    pub href: String,
    pub icon: Option<String>,
}

/// The hero singleton: who, what, featured skills and calls to action.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroConfig {
    pub name: String,
    pub title: String,
    pub avatar: String,
    /// Featured skills, referenced from `description` by position or name.
    pub skills: Vec<Technology>,
    /// Template with `{skills:N}` / `{skill:Name}` placeholders.
    pub description: String,
    pub buttons: Vec<Button>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLink {
    pub name: String,
    pub href: String,
    pub icon: Option<String>,
}

impl SocialLink {
    pub fn icon_key(&self) -> &str {
        self.icon.as_deref().unwrap_or(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_experience_hides_end_date() {
        let exp = Experience {
            start_date: "May 2025".into(),
            end_date: "July 2025".into(),
            is_current: true,
            ..Experience::default()
        };
        assert_eq!(exp.display_end(), "Present");

        let past = Experience {
            is_current: false,
            ..exp
        };
        assert_eq!(past.display_end(), "July 2025");
    }

    #[test]
    fn test_technology_icon_key() {
        let mut tech = Technology::new("React", "https://react.dev/");
        assert_eq!(tech.icon_key(), "React");
        tech.icon = Some("ReactIcon".into());
        assert_eq!(tech.icon_key(), "ReactIcon");
    }

    #[test]
    fn test_experience_social_links_order() {
        let exp = Experience {
            github: Some("https://github.com/kstubhieeee/store".into()),
            x: Some("https://x.com/kstubhie".into()),
            ..Experience::default()
        };
        let labels: Vec<_> = exp.social_links().map(|(label, _)| label).collect();
        assert_eq!(labels, vec!["X", "GitHub"]);
    }

    #[test]
    fn test_button_variant_parse() {
        let button: Button =
            toml::from_str("variant = \"outline\"\ntext = \"Resume / CV\"\nhref = \"/resume\"")
                .unwrap();
        assert_eq!(button.variant, ButtonVariant::Outline);
        assert_eq!(button.variant.class(), "button button-outline");
    }
}
