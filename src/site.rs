//! The loaded site: config, content, icons and image policy, plus the pages
//! rendered from them.

use std::borrow::Cow;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use rand::Rng;

use crate::catalog::IconCatalog;
use crate::config::SiteConfig;
use crate::content::{self, Registry, ValidationReport};
use crate::image::ImagePolicy;
use crate::quote::QuoteSelector;
use crate::render::{Html, PageMeta, RenderError, Renderer};
use crate::template;

/// Routes the site renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Experience,
    Projects,
}

impl Page {
    pub const ALL: [Self; 3] = [Self::Home, Self::Experience, Self::Projects];

    pub const fn route(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Experience => "/experience/",
            Self::Projects => "/projects/",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Experience => "Experience",
            Self::Projects => "Projects",
        }
    }

    /// Output file, relative to the output directory.
    pub const fn output_path(self) -> &'static str {
        match self {
            Self::Home => "index.html",
            Self::Experience => "experience/index.html",
            Self::Projects => "projects/index.html",
        }
    }

    /// Match a request path (already percent-decoded, without query).
    pub fn from_url(path: &str) -> Option<Self> {
        let path = path.strip_suffix("index.html").unwrap_or(path);
        let path = path.trim_end_matches('/');
        match path {
            "" => Some(Self::Home),
            "/experience" => Some(Self::Experience),
            "/projects" => Some(Self::Projects),
            _ => None,
        }
    }
}

/// Everything needed to render pages. Immutable once loaded.
#[derive(Debug)]
pub struct Site {
    pub config: Arc<SiteConfig>,
    pub registry: Registry,
    pub catalog: IconCatalog,
    pub images: ImagePolicy,
}

impl Site {
    /// Load content and icons for `config` and validate them.
    ///
    /// Only unreadable or malformed files fail here; content problems are
    /// returned in the report.
    pub fn load(config: Arc<SiteConfig>) -> Result<(Self, ValidationReport)> {
        let build = &config.build;
        let (registry, notes) = Registry::load(&build.content)
            .with_context(|| format!("failed to load content from {}", build.content.display()))?;
        let catalog = IconCatalog::load(&build.icons).context("failed to load icons")?;
        let images = ImagePolicy::new(&config.images);

        let static_dir = Some(build.static_dir.as_path()).filter(|p| p.is_dir());
        let report = content::validate(&registry, &notes, &catalog, &images, static_dir);

        let site = Self {
            registry,
            catalog,
            images,
            config,
        };
        Ok((site, report))
    }

    /// Assemble a site from already loaded parts.
    #[cfg(test)]
    pub fn from_parts(config: Arc<SiteConfig>, registry: Registry, catalog: IconCatalog) -> Self {
        let images = ImagePolicy::new(&config.images);
        Self {
            config,
            registry,
            catalog,
            images,
        }
    }

    pub fn renderer(&self) -> Renderer<'_> {
        Renderer::new(&self.catalog, &self.images).lenient(self.config.build.ignore_errors)
    }

    pub fn static_dir(&self) -> &Path {
        &self.config.build.static_dir
    }

    /// Render one page. A fresh quote selector is mounted for the render.
    pub fn render<R: Rng + ?Sized>(&self, page: Page, rng: &mut R) -> Result<String, RenderError> {
        let config = &self.config;
        let registry = &self.registry;
        let renderer = self.renderer();
        let description = self.description();
        let meta = PageMeta {
            site_name: &config.site.title,
            title: page.label(),
            description: &description,
            language: &config.site.language,
            page,
        };

        renderer.page(!config.build.minify, &meta, &registry.socials, |html| match page {
            Page::Home => self.home(&renderer, html, rng),
            Page::Experience => {
                if !registry.experiences.is_empty() {
                    renderer.section_heading(html, "Where I've worked", "Experience");
                    renderer.experience_list(html, &registry.experiences)?;
                }
                Ok(())
            }
            Page::Projects => {
                if !registry.projects.is_empty() {
                    renderer.section_heading(html, "What I've built", "Projects");
                    renderer.project_list(html, &registry.projects)?;
                }
                Ok(())
            }
        })
    }

    /// `site.description`, or the hero description as plain text when unset.
    fn description(&self) -> Cow<'_, str> {
        let configured = self.config.site.description.trim();
        match &self.registry.hero {
            Some(hero) if configured.is_empty() => {
                let plain = template::substitute(&hero.description, &hero.skills);
                Cow::Owned(plain.output.replace('*', ""))
            }
            _ => Cow::Borrowed(configured),
        }
    }

    fn home<R: Rng + ?Sized>(
        &self,
        renderer: &Renderer<'_>,
        html: &mut Html,
        rng: &mut R,
    ) -> Result<(), RenderError> {
        let registry = &self.registry;
        let featured = self.config.build.featured;

        if let Some(hero) = &registry.hero {
            renderer.hero(html, hero)?;
        }

        if !registry.experiences.is_empty() {
            renderer.container(html, "home-section", |html| {
                renderer.section_heading(html, "Featured", "Experience");
                let shown = featured.min(registry.experiences.len());
                renderer.experience_list(html, &registry.experiences[..shown])?;
                view_all(html, Page::Experience, registry.experiences.len() > shown);
                Ok(())
            })?;
        }

        if !registry.projects.is_empty() {
            renderer.container(html, "home-section", |html| {
                renderer.section_heading(html, "Featured", "Projects");
                let shown = featured.min(registry.projects.len());
                renderer.project_list(html, &registry.projects[..shown])?;
                view_all(html, Page::Projects, registry.projects.len() > shown);
                Ok(())
            })?;
        }

        let mut selector = QuoteSelector::new();
        selector.mount(&registry.quotes, rng);
        if selector.selected().is_some() {
            renderer.container(html, "home-section", |html| {
                renderer.quote(html, selector.state());
                Ok(())
            })?;
        }

        Ok(())
    }
}

fn view_all(html: &mut Html, page: Page, more: bool) {
    if more {
        html.element(
            "a",
            &[("class", "view-all"), ("href", page.route())],
            &format!("View all {}", page.label().to_lowercase()),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use crate::content::{ContentFile, Experience, HeroConfig, Quote, Technology};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::fs;

    fn site(registry: Registry, extra: &str) -> Site {
        let config = Arc::new(test_parse_config(extra));
        Site::from_parts(config, registry, IconCatalog::builtin())
    }

    fn experience(company: &str) -> Experience {
        Experience {
            company: company.into(),
            position: "Intern".into(),
            image: "/company/logo.png".into(),
            start_date: "2024".into(),
            end_date: "2025".into(),
            website: "https://example.com".into(),
            ..Experience::default()
        }
    }

    #[test]
    fn test_page_routes() {
        assert_eq!(Page::from_url("/"), Some(Page::Home));
        assert_eq!(Page::from_url("/index.html"), Some(Page::Home));
        assert_eq!(Page::from_url("/experience"), Some(Page::Experience));
        assert_eq!(Page::from_url("/experience/"), Some(Page::Experience));
        assert_eq!(Page::from_url("/projects/index.html"), Some(Page::Projects));
        assert_eq!(Page::from_url("/style.css"), None);
        assert_eq!(Page::from_url("/projects/techmart"), None);

        for page in Page::ALL {
            assert_eq!(Page::from_url(page.route()), Some(page));
        }
    }

    #[test]
    fn test_home_limits_featured() {
        let registry = Registry {
            experiences: vec![experience("RPA Infotech"), experience("MedikaRX")],
            ..Registry::default()
        };
        let site = site(registry, "[build]\nfeatured = 1\n");
        let mut rng = StdRng::seed_from_u64(3);

        let home = site.render(Page::Home, &mut rng).unwrap();
        assert!(home.contains("RPA Infotech"));
        assert!(!home.contains("MedikaRX"));
        assert!(home.contains(r#"href="/experience/">View all experience</a>"#));

        let all = site.render(Page::Experience, &mut rng).unwrap();
        assert!(all.contains("RPA Infotech") && all.contains("MedikaRX"));
    }

    #[test]
    fn test_empty_quotes_render_no_quote() {
        let site = site(Registry::default(), "");
        let home = site.render(Page::Home, &mut StdRng::seed_from_u64(0)).unwrap();
        assert!(!home.contains("class=\"quote\""));
        assert!(home.contains("</html>"));
    }

    #[test]
    fn test_description_falls_back_to_hero() {
        let mut config = test_parse_config("");
        config.site.description = String::new();
        let registry = Registry {
            hero: Some(HeroConfig {
                name: "Kaustubh".into(),
                skills: vec![Technology::new("Next.js", "https://nextjs.org/")],
                description: "I build with {skills:0} and *care*.".into(),
                ..HeroConfig::default()
            }),
            ..Registry::default()
        };
        let site = Site::from_parts(Arc::new(config), registry, IconCatalog::builtin());

        let home = site.render(Page::Home, &mut StdRng::seed_from_u64(1)).unwrap();
        let meta = r#"<meta name="description" content="I build with Next.js and care.">"#;
        assert!(home.contains(meta));
    }

    #[test]
    fn test_home_shows_a_registry_quote() {
        let quotes = vec![
            Quote::new("Set your heart ablaze.", "Kyojuro Rengoku"),
            Quote::new("Power comes in response to a need.", "Goku"),
        ];
        let site = site(
            Registry {
                quotes: quotes.clone(),
                ..Registry::default()
            },
            "",
        );
        let home = site.render(Page::Home, &mut StdRng::seed_from_u64(9)).unwrap();
        assert_eq!(home.matches("class=\"quote\"").count(), 1);
        assert!(quotes.iter().any(|q| home.contains(&q.author)));
    }

    #[test]
    fn test_load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let content = dir.path().join("content");
        fs::create_dir_all(&content).unwrap();
        fs::write(
            content.join(ContentFile::Quotes.file_name()),
            "[[quotes]]\nquote = \"A man's dream will never die!\"\nauthor = \"Marshall D. Teach\"\n",
        )
        .unwrap();

        let mut config = test_parse_config("");
        config.build.content = content;
        config.build.icons = dir.path().join("icons");
        config.build.static_dir = dir.path().join("static");

        let (site, report) = Site::load(Arc::new(config)).unwrap();
        assert_eq!(site.registry.quotes.len(), 1);
        assert!(!report.has_errors());
        assert!(report.warning_count() >= 4);
    }
}
