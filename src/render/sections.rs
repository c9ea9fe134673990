//! Page sections: hero, experience, projects and socials.

use super::components::emphasis;
use super::{Html, RenderError, Renderer};
use crate::content::{Experience, HeroConfig, Project, SocialLink};
use crate::template::{Piece, Template};

const EXTERNAL: [(&str, &str); 2] = [("target", "_blank"), ("rel", "noopener noreferrer")];

impl Renderer<'_> {
    pub fn hero(&self, html: &mut Html, hero: &HeroConfig) -> Result<(), RenderError> {
        html.open("section", &[("class", "hero")]);
        self.image(html, &hero.avatar, &hero.name, "avatar");
        html.open("h1", &[])
            .text("Hi, I'm ")
            .element("span", &[("class", "highlight")], &hero.name)
            .text(" - ")
            .element("span", &[("class", "hero-title")], &hero.title)
            .close("h1");

        html.open("p", &[("class", "hero-description")]);
        let mut result = Ok(());
        Template::parse(&hero.description).expand(&hero.skills, |piece| {
            if result.is_err() {
                return;
            }
            match piece {
                Piece::Text(text) => emphasis(html, text),
                Piece::Skill(skill) => result = self.tech_badge(html, skill),
            }
        });
        result?;
        html.close("p");

        if !hero.buttons.is_empty() {
            html.wrap::<RenderError>("div", &[("class", "hero-buttons")], |html| {
                for button in &hero.buttons {
                    self.button(html, button)?;
                }
                Ok(())
            })?;
        }
        html.close("section");
        Ok(())
    }

    pub fn experience(&self, html: &mut Html, exp: &Experience) -> Result<(), RenderError> {
        html.open("article", &[("class", "experience")]);
        html.open("header", &[("class", "experience-header")]);
        self.image(html, &exp.image, &exp.company, "company-logo");

        html.open("div", &[("class", "experience-role")]);
        html.open("h3", &[]);
        let mut attrs = vec![("href", exp.website.as_str())];
        attrs.extend(EXTERNAL);
        html.element("a", &attrs, &exp.company);
        if exp.is_current {
            html.element("span", &[("class", "status status-current")], "Working");
        }
        html.close("h3");
        html.element("p", &[("class", "position")], &exp.position);
        if !exp.location.is_empty() {
            html.element("p", &[("class", "location")], &exp.location);
        }
        html.close("div");

        html.element(
            "p",
            &[("class", "dates")],
            &format!("{} - {}", exp.start_date, exp.display_end()),
        );

        let links: Vec<_> = exp.social_links().collect();
        if !links.is_empty() {
            html.open("div", &[("class", "experience-socials")]);
            for (label, url) in links {
                let mut attrs = vec![("href", url), ("aria-label", label)];
                attrs.extend(EXTERNAL);
                html.open("a", &attrs);
                self.icon_or_text(html, label, label)?;
                html.close("a");
            }
            html.close("div");
        }
        html.close("header");

        self.tech_list(html, &exp.technologies)?;

        if !exp.description.is_empty() {
            html.open("ul", &[("class", "experience-description")]);
            for line in &exp.description {
                html.open("li", &[]);
                emphasis(html, line);
                html.close("li");
            }
            html.close("ul");
        }
        html.close("article");
        Ok(())
    }

    pub fn experience_list(
        &self,
        html: &mut Html,
        exps: &[Experience],
    ) -> Result<(), RenderError> {
        for exp in exps {
            self.experience(html, exp)?;
        }
        Ok(())
    }

    pub fn project(&self, html: &mut Html, project: &Project) -> Result<(), RenderError> {
        html.open("article", &[("class", "project")]);

        match &project.video {
            Some(video) => {
                let poster = if self.images.allows(&project.image) {
                    project.image.as_str()
                } else {
                    crate::warn!("render"; "skipping poster for '{}'", project.title);
                    ""
                };
                let mut attrs = vec![
                    ("class", "project-media"),
                    ("autoplay", ""),
                    ("muted", ""),
                    ("loop", ""),
                    ("playsinline", ""),
                ];
                if !poster.is_empty() {
                    attrs.push(("poster", poster));
                }
                html.open("video", &attrs)
                    .void("source", &[("src", video.as_str())])
                    .close("video");
            }
            None => {
                self.image(html, &project.image, &project.title, "project-media");
            }
        }

        html.open("div", &[("class", "project-body")]);
        html.open("div", &[("class", "project-title")]);
        html.open("h3", &[]);
        let mut attrs = vec![("href", project.link.as_str())];
        attrs.extend(EXTERNAL);
        html.element("a", &attrs, &project.title);
        html.close("h3");
        let (class, label) = if project.is_working {
            ("status status-working", "All systems operational")
        } else {
            ("status status-building", "Building")
        };
        html.element("span", &[("class", class)], label);
        html.close("div");

        html.open("p", &[("class", "project-description")]);
        emphasis(html, &project.description);
        html.close("p");

        self.tech_list(html, &project.technologies)?;

        html.open("div", &[("class", "project-links")]);
        if let Some(github) = &project.github {
            let mut attrs = vec![("href", github.as_str())];
            attrs.extend(EXTERNAL);
            html.open("a", &attrs);
            if let Some(icon) = self.icon("github")? {
                html.render(icon);
            }
            html.element("span", &[], "Source").close("a");
        }
        if let Some(live) = &project.live {
            let mut attrs = vec![("href", live.as_str())];
            attrs.extend(EXTERNAL);
            html.element("a", &attrs, "Live");
        }
        if project.details
            && let Some(slug) = project.details_slug.as_deref()
        {
            html.element("a", &[("href", slug), ("class", "details")], "View details");
        }
        html.close("div");

        html.close("div");
        html.close("article");
        Ok(())
    }

    pub fn project_list(&self, html: &mut Html, projects: &[Project]) -> Result<(), RenderError> {
        html.wrap("div", &[("class", "project-grid")], |html| {
            for project in projects {
                self.project(html, project)?;
            }
            Ok(())
        })
    }

    /// Icon links to social profiles; nothing when the list is empty.
    pub fn socials(&self, html: &mut Html, socials: &[SocialLink]) -> Result<(), RenderError> {
        if socials.is_empty() {
            return Ok(());
        }
        html.wrap("ul", &[("class", "socials")], |html| {
            for social in socials {
                html.open("li", &[]);
                let mut attrs = vec![
                    ("href", social.href.as_str()),
                    ("aria-label", social.name.as_str()),
                ];
                if !social.href.starts_with("mailto:") && !social.href.starts_with('/') {
                    attrs.extend(EXTERNAL);
                }
                html.open("a", &attrs);
                self.icon_or_text(html, social.icon_key(), &social.name)?;
                html.close("a");
                html.close("li");
            }
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::IconCatalog;
    use crate::content::{Button, ButtonVariant, Technology};
    use crate::image::ImagePolicy;

    fn render(f: impl FnOnce(&Renderer<'_>, &mut Html) -> Result<(), RenderError>) -> String {
        let catalog = IconCatalog::builtin();
        let images = ImagePolicy::default();
        let renderer = Renderer::new(&catalog, &images);
        let mut html = Html::fragment();
        f(&renderer, &mut html).unwrap();
        html.into_string()
    }

    fn experience(is_current: bool) -> Experience {
        Experience {
            company: "MedikaRX".into(),
            position: "Frontend Developer".into(),
            location: "Mumbai, India (Remote)".into(),
            image: "/company/medikarx.png".into(),
            description: vec!["Built *MedikaRX* landing pages.".into()],
            start_date: "May 2025".into(),
            end_date: "July 2025".into(),
            website: "https://medikarx.com".into(),
            github: Some("https://github.com/kstubhieeee".into()),
            technologies: vec![Technology::new("React", "https://react.dev/")],
            is_current,
            ..Experience::default()
        }
    }

    #[test]
    fn test_current_experience_shows_present() {
        let exp = experience(true);
        let out = render(|r, html| r.experience(html, &exp));
        assert!(out.contains("May 2025 - Present"));
        assert!(!out.contains("July 2025"));
    }

    #[test]
    fn test_past_experience_shows_end_date() {
        let exp = experience(false);
        let out = render(|r, html| r.experience(html, &exp));
        assert!(out.contains("May 2025 - July 2025"));
        assert!(out.contains("<b>MedikaRX</b>"));
        assert!(out.contains(r#"aria-label="GitHub""#));
    }

    #[test]
    fn test_hero_substitutes_badges() {
        let hero = HeroConfig {
            name: "Kaustubh".into(),
            title: "A Full Stack web developer.".into(),
            avatar: "/assets/logo.png".into(),
            skills: vec![
                Technology::new("Next.js", "https://nextjs.org/"),
                Technology::new("TypeScript", "https://www.typescriptlang.org/"),
            ],
            description: "Built with {skills:0} and {skills:1}. Love *modern web*.".into(),
            buttons: vec![Button {
                variant: ButtonVariant::Outline,
                text: "Resume / CV".into(),
                href: "/resume".into(),
                icon: Some("CV".into()),
            }],
        };
        let out = render(|r, html| r.hero(html, &hero));
        assert!(out.contains("Built with <a class=\"tech\" href=\"https://nextjs.org/\""));
        assert!(out.contains("<span>TypeScript</span></a>. Love <b>modern web</b>."));
        assert!(out.contains(r#"<a class="button button-outline" href="/resume">"#));
    }

    #[test]
    fn test_hero_out_of_range_token_is_empty() {
        let hero = HeroConfig {
            skills: vec![Technology::new("Bun", "https://bun.sh/")],
            description: "Uses {skills:5}.".into(),
            ..HeroConfig::default()
        };
        let out = render(|r, html| r.hero(html, &hero));
        assert!(out.contains(r#"<p class="hero-description">Uses .</p>"#));
    }

    #[test]
    fn test_project_video_and_details() {
        let project = Project {
            title: "AI Financial Advisor".into(),
            description: "Personal finance assistant.".into(),
            image: "/project/finance.png".into(),
            video: Some("/project/finance.mp4".into()),
            link: "https://github.com/kstubhieeee/finance".into(),
            details: true,
            details_slug: Some("/projects/ai-financial-advisor".into()),
            is_working: true,
            ..Project::default()
        };
        let out = render(|r, html| r.project(html, &project));
        assert!(out.contains(r#"poster="/project/finance.png""#));
        assert!(out.contains(r#"<source src="/project/finance.mp4">"#));
        assert!(out.contains(r#"href="/projects/ai-financial-advisor""#));
        assert!(out.contains("status-working"));
        assert!(!out.contains("<img"));
    }

    #[test]
    fn test_empty_socials_render_nothing() {
        assert!(render(|r, html| r.socials(html, &[])).is_empty());
    }

    #[test]
    fn test_mail_social_is_not_external() {
        let socials = vec![SocialLink {
            name: "Email".into(),
            href: "mailto:kaustubh@example.com".into(),
            icon: Some("Mail".into()),
        }];
        let out = render(|r, html| r.socials(html, &socials));
        assert!(out.contains(r#"href="mailto:kaustubh@example.com""#));
        assert!(!out.contains("_blank"));
    }
}
