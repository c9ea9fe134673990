//! Small building blocks shared by the page sections.

use super::{Html, RenderError, Renderer};
use crate::content::{Button, Quote, Technology};
use crate::image::ImageSource;
use crate::quote::QuoteState;

impl Renderer<'_> {
    /// Small caption above a section title.
    pub fn section_heading(&self, html: &mut Html, subheading: &str, heading: &str) {
        html.open("div", &[("class", "section-heading")])
            .element("p", &[("class", "section-sub")], subheading)
            .element("h2", &[], heading)
            .close("div");
    }

    /// Centered content column.
    pub fn container(
        &self,
        html: &mut Html,
        class: &str,
        body: impl FnOnce(&mut Html) -> Result<(), RenderError>,
    ) -> Result<(), RenderError> {
        let class = if class.is_empty() {
            "container".to_string()
        } else {
            format!("container {class}")
        };
        html.wrap("div", &[("class", class.as_str())], body)
    }

    /// The selected quote; nothing at all while unselected.
    pub fn quote(&self, html: &mut Html, state: QuoteState<'_>) {
        let QuoteState::Selected(Quote { quote, author }) = state else {
            return;
        };
        html.open("figure", &[("class", "quote")])
            .open("blockquote", &[])
            .text("\u{201C}")
            .text(quote)
            .text("\u{201D}")
            .close("blockquote")
            .element("figcaption", &[], author)
            .close("figure");
    }

    /// Technology chip: icon plus linked name.
    pub fn tech_badge(&self, html: &mut Html, tech: &Technology) -> Result<(), RenderError> {
        let icon = self.icon(tech.icon_key())?;
        match tech.href.as_deref() {
            Some(href) => html.open(
                "a",
                &[
                    ("class", "tech"),
                    ("href", href),
                    ("target", "_blank"),
                    ("rel", "noopener noreferrer"),
                ],
            ),
            None => html.open("span", &[("class", "tech")]),
        };
        if let Some(icon) = icon {
            html.render(icon);
        }
        html.element("span", &[], &tech.name);
        html.close(if tech.href.is_some() { "a" } else { "span" });
        Ok(())
    }

    pub fn tech_list(&self, html: &mut Html, techs: &[Technology]) -> Result<(), RenderError> {
        if techs.is_empty() {
            return Ok(());
        }
        html.wrap("ul", &[("class", "tech-list")], |html| {
            for tech in techs {
                html.wrap("li", &[], |html| self.tech_badge(html, tech))?;
            }
            Ok(())
        })
    }

    /// Call-to-action button.
    pub fn button(&self, html: &mut Html, button: &Button) -> Result<(), RenderError> {
        html.open("a", &[("class", button.variant.class()), ("href", button.href.as_str())]);
        if let Some(name) = &button.icon
            && let Some(icon) = self.icon(name)?
        {
            html.render(icon);
        }
        html.element("span", &[], &button.text).close("a");
        Ok(())
    }

    /// Emit an `<img>` for an allowed source. A disallowed source renders
    /// nothing and returns false.
    pub fn image(&self, html: &mut Html, src: &str, alt: &str, class: &str) -> bool {
        match self.images.check(src) {
            Ok(source) => {
                let src = match &source {
                    ImageSource::Local(path) => *path,
                    ImageSource::Remote(url) => url.as_str(),
                };
                html.void(
                    "img",
                    &[("src", src), ("alt", alt), ("class", class), ("loading", "lazy")],
                );
                true
            }
            Err(err) => {
                crate::warn!("render"; "skipping image for '{}': {}", alt, err);
                false
            }
        }
    }
}

/// Write `text`, turning `*span*` into `<b>span</b>`.
///
/// An unpaired `*` is written as-is.
pub fn emphasis(html: &mut Html, text: &str) {
    let mut rest = text;
    while let Some(open) = rest.find('*') {
        let after = &rest[open + 1..];
        let Some(close) = after.find('*') else {
            break;
        };
        if close == 0 {
            html.text(&rest[..open + 2]);
            rest = &after[1..];
            continue;
        }
        html.text(&rest[..open]).element("b", &[], &after[..close]);
        rest = &after[close + 1..];
    }
    html.text(rest);
}
