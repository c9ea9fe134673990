//! Shared page shell: head, navigation, main and footer.

use super::{Html, RenderError, Renderer};
use crate::content::SocialLink;
use crate::site::Page;

/// Per-page head data.
#[derive(Debug, Clone, Copy)]
pub struct PageMeta<'p> {
    pub site_name: &'p str,
    pub title: &'p str,
    pub description: &'p str,
    pub language: &'p str,
    pub page: Page,
}

impl PageMeta<'_> {
    /// `<title>` text: the site name alone on the home page.
    fn document_title(&self) -> String {
        if self.page == Page::Home || self.title.is_empty() {
            self.site_name.to_string()
        } else {
            format!("{} | {}", self.title, self.site_name)
        }
    }
}

impl Renderer<'_> {
    /// Render a complete HTML document around `body`.
    pub fn page(
        &self,
        pretty: bool,
        meta: &PageMeta<'_>,
        socials: &[SocialLink],
        body: impl FnOnce(&mut Html) -> Result<(), RenderError>,
    ) -> Result<String, RenderError> {
        let mut html = Html::new(pretty);
        html.raw("<!DOCTYPE html>");
        html.open("html", &[("lang", meta.language)]);

        html.open("head", &[])
            .void("meta", &[("charset", "utf-8")])
            .void(
                "meta",
                &[
                    ("name", "viewport"),
                    ("content", "width=device-width, initial-scale=1"),
                ],
            )
            .element("title", &[], &meta.document_title())
            .void("meta", &[("name", "description"), ("content", meta.description)])
            .void("link", &[("rel", "stylesheet"), ("href", "/style.css")])
            .close("head");

        html.open("body", &[]);
        self.nav(&mut html, meta);
        html.wrap("main", &[("class", "container")], body)?;

        html.open("footer", &[("class", "site-footer")]);
        html.open("div", &[("class", "container")]);
        self.socials(&mut html, socials)?;
        html.element("p", &[("class", "copyright")], meta.site_name);
        html.close("div").close("footer");

        html.close("body").close("html");
        Ok(html.into_string())
    }

    fn nav(&self, html: &mut Html, meta: &PageMeta<'_>) {
        html.open("header", &[("class", "site-header")]);
        html.open("nav", &[("class", "container")]);
        html.element("a", &[("class", "brand"), ("href", "/")], meta.site_name);
        html.open("ul", &[]);
        for page in Page::ALL {
            html.open("li", &[]);
            if page == meta.page {
                html.element(
                    "a",
                    &[("href", page.route()), ("aria-current", "page")],
                    page.label(),
                );
            } else {
                html.element("a", &[("href", page.route())], page.label());
            }
            html.close("li");
        }
        html.close("ul").close("nav").close("header");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::IconCatalog;
    use crate::image::ImagePolicy;

    fn meta(page: Page) -> PageMeta<'static> {
        PageMeta {
            site_name: "Kaustubh",
            title: page.label(),
            description: "A Full Stack web developer.",
            language: "en",
            page,
        }
    }

    fn render(page: Page, pretty: bool) -> String {
        let catalog = IconCatalog::builtin();
        let images = ImagePolicy::default();
        Renderer::new(&catalog, &images)
            .page(pretty, &meta(page), &[], |html| {
                html.element("h2", &[], "Projects");
                Ok(())
            })
            .unwrap()
    }

    #[test]
    fn test_document_shell() {
        let out = render(Page::Projects, false);
        assert!(out.starts_with("<!DOCTYPE html><html lang=\"en\"><head>"));
        assert!(out.contains("<title>Projects | Kaustubh</title>"));
        assert!(out.contains(r#"<link rel="stylesheet" href="/style.css">"#));
        assert!(out.contains(r#"<main class="container"><h2>Projects</h2></main>"#));
        assert!(out.ends_with("</body></html>"));
    }

    #[test]
    fn test_nav_marks_current_page() {
        let out = render(Page::Experience, false);
        assert!(out.contains(r#"<a href="/experience/" aria-current="page">Experience</a>"#));
        assert!(out.contains(r#"<a href="/">Home</a>"#));
    }

    #[test]
    fn test_home_title_is_site_name() {
        assert!(render(Page::Home, false).contains("<title>Kaustubh</title>"));
    }

    #[test]
    fn test_pretty_output_has_lines() {
        let out = render(Page::Home, true);
        assert!(out.lines().count() > 10);
        assert!(out.contains("\n  <head>"));
    }
}
