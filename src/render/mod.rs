//! HTML rendering.
//!
//! ```text
//! render/
//! ├── html.rs        # Html writer + Render trait
//! ├── components.rs  # headings, badges, buttons, quote, images
//! ├── sections.rs    # hero, experience, projects, socials
//! └── layout.rs      # page shell
//! ```
//!
//! Renderers are stateless: they read registry records and write markup.
//! Icons are resolved through the catalog at render time, so a name the
//! catalog does not know fails the render with [`RenderError::Icon`]. A
//! lenient renderer (`build.ignore_errors`) logs a warning instead and
//! renders the item without its icon.

mod components;
mod html;
mod layout;
mod sections;

pub use html::{Html, Render};
pub use layout::PageMeta;

use thiserror::Error;

use crate::catalog::{Icon, IconCatalog, IconError};
use crate::image::ImagePolicy;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Icon(#[from] IconError),
}

/// Shared lookups every component needs.
#[derive(Clone, Copy)]
pub struct Renderer<'a> {
    catalog: &'a IconCatalog,
    images: &'a ImagePolicy,
    lenient: bool,
}

impl<'a> Renderer<'a> {
    pub fn new(catalog: &'a IconCatalog, images: &'a ImagePolicy) -> Self {
        Self {
            catalog,
            images,
            lenient: false,
        }
    }

    /// Render unknown icons as missing instead of failing.
    pub fn lenient(mut self, lenient: bool) -> Self {
        self.lenient = lenient;
        self
    }

    /// `None` only when lenient and the catalog has no such icon.
    fn icon(&self, name: &str) -> Result<Option<&'a Icon>, RenderError> {
        match self.catalog.lookup(name) {
            Ok(icon) => Ok(Some(icon)),
            Err(err) if self.lenient => {
                crate::warn!("render"; "{}, rendering without it", err);
                Ok(None)
            }
            Err(err) => Err(err.into()),
        }
    }

    /// The icon for `name`, or `fallback` as text when it is missing.
    fn icon_or_text(&self, html: &mut Html, name: &str, fallback: &str) -> Result<(), RenderError> {
        match self.icon(name)? {
            Some(icon) => html.render(icon),
            None => html.text(fallback),
        };
        Ok(())
    }
}
