//! Minimal HTML writer used by every renderer.
//!
//! Text and attribute values are escaped on the way in; `raw` is only used for
//! trusted markup (built-in icons, user SVG files, the embedded stylesheet).

use crate::utils::html::{escape, escape_attr, is_block_element, is_void_element};

/// Anything that can write itself into an [`Html`] buffer.
pub trait Render {
    fn render(&self, html: &mut Html);
}

/// HTML output buffer.
///
/// In pretty mode block-level elements start on their own indented line;
/// otherwise output is compact.
#[derive(Debug, Default)]
pub struct Html {
    buf: String,
    pretty: bool,
    depth: usize,
    /// Whether the last thing written was a block tag (open or close).
    after_block: bool,
}

impl Html {
    pub fn new(pretty: bool) -> Self {
        Self {
            buf: String::with_capacity(8 * 1024),
            pretty,
            depth: 0,
            after_block: false,
        }
    }

    /// Compact writer, mostly for fragments and tests.
    pub fn fragment() -> Self {
        Self::new(false)
    }

    fn newline(&mut self) {
        if self.pretty && !self.buf.is_empty() {
            self.buf.push('\n');
            for _ in 0..self.depth {
                self.buf.push_str("  ");
            }
        }
    }

    fn write_attrs(&mut self, attrs: &[(&str, &str)]) {
        for (name, value) in attrs {
            self.buf.push(' ');
            self.buf.push_str(name);
            if !value.is_empty() {
                self.buf.push_str("=\"");
                self.buf.push_str(&escape_attr(value));
                self.buf.push('"');
            }
        }
    }

    /// Write an opening tag. Attributes with an empty value are written bare
    /// (`muted`, `loop`).
    pub fn open(&mut self, tag: &str, attrs: &[(&str, &str)]) -> &mut Self {
        let block = is_block_element(tag);
        if block {
            self.newline();
        }
        self.buf.push('<');
        self.buf.push_str(tag);
        self.write_attrs(attrs);
        self.buf.push('>');

        if is_void_element(tag) {
            self.after_block = block;
        } else if block {
            self.depth += 1;
            self.after_block = true;
        } else {
            self.after_block = false;
        }
        self
    }

    /// Write a void element such as `<img>` or `<meta>`.
    pub fn void(&mut self, tag: &str, attrs: &[(&str, &str)]) -> &mut Self {
        debug_assert!(is_void_element(tag), "<{tag}> is not a void element");
        self.open(tag, attrs)
    }

    pub fn close(&mut self, tag: &str) -> &mut Self {
        if is_block_element(tag) {
            self.depth = self.depth.saturating_sub(1);
            if self.after_block {
                self.newline();
            }
            self.after_block = true;
        } else {
            self.after_block = false;
        }
        self.buf.push_str("</");
        self.buf.push_str(tag);
        self.buf.push('>');
        self
    }

    /// Escaped text content.
    pub fn text(&mut self, s: &str) -> &mut Self {
        self.buf.push_str(&escape(s));
        self.after_block = false;
        self
    }

    /// Trusted markup, written verbatim.
    pub fn raw(&mut self, s: &str) -> &mut Self {
        self.buf.push_str(s);
        self.after_block = false;
        self
    }

    /// `<tag attrs>text</tag>`
    pub fn element(&mut self, tag: &str, attrs: &[(&str, &str)], text: &str) -> &mut Self {
        self.open(tag, attrs).text(text).close(tag)
    }

    /// Open `tag`, let `body` write the children, then close it.
    pub fn wrap<E>(
        &mut self,
        tag: &str,
        attrs: &[(&str, &str)],
        body: impl FnOnce(&mut Self) -> Result<(), E>,
    ) -> Result<(), E> {
        self.open(tag, attrs);
        body(self)?;
        self.close(tag);
        Ok(())
    }

    /// Append anything renderable.
    pub fn render(&mut self, item: &impl Render) -> &mut Self {
        item.render(self);
        self
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn into_string(self) -> String {
        self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_output() {
        let mut html = Html::fragment();
        html.open("div", &[("class", "space-y-3")])
            .element("p", &[("class", "sub")], "Featured")
            .element("h2", &[], "Projects")
            .close("div");
        assert_eq!(
            html.as_str(),
            r#"<div class="space-y-3"><p class="sub">Featured</p><h2>Projects</h2></div>"#
        );
    }

    #[test]
    fn test_escaping() {
        let mut html = Html::fragment();
        html.element("a", &[("href", "/?a=1&b=\"2\"")], "<TechMart>");
        assert_eq!(
            html.as_str(),
            r#"<a href="/?a=1&amp;b=&quot;2&quot;">&lt;TechMart&gt;</a>"#
        );
    }

    #[test]
    fn test_bare_attributes_and_void() {
        let mut html = Html::fragment();
        html.open("video", &[("muted", ""), ("loop", "")])
            .void("source", &[("src", "/demo.mp4")])
            .close("video");
        assert_eq!(
            html.as_str(),
            r#"<video muted loop><source src="/demo.mp4"></video>"#
        );
    }

    #[test]
    fn test_pretty_indents_blocks() {
        let mut html = Html::new(true);
        html.open("ul", &[])
            .open("li", &[])
            .element("span", &[], "React")
            .close("li")
            .close("ul");
        assert_eq!(html.as_str(), "<ul>\n  <li><span>React</span></li>\n</ul>");
    }

    #[test]
    fn test_wrap_propagates_error() {
        let mut html = Html::fragment();
        let result: Result<(), &str> = html.wrap("section", &[], |_| Err("missing icon"));
        assert_eq!(result, Err("missing icon"));
    }
}
