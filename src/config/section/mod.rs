//! Configuration section definitions.
//!
//! Each module corresponds to a section in `folio.toml`:
//!
//! | Module   | TOML Section | Purpose                                 |
//! |----------|--------------|-----------------------------------------|
//! | `build`  | `[build]`    | Paths, minify, sitemap, strictness      |
//! | `images` | `[images]`   | Remote image host allow-list            |
//! | `serve`  | `[serve]`    | Development server                      |
//! | `site`   | `[site]`     | Title, description, url, language       |

mod build;
mod images;
mod serve;
mod site;

pub use build::BuildSectionConfig;
pub use images::{ImagesConfig, RemotePattern};
pub use serve::ServeConfig;
pub use site::SiteSectionConfig;
