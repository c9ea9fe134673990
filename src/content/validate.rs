//! Content validation.
//!
//! Every problem is collected into a [`ValidationReport`] rather than failing
//! on the first one, so a single `folio validate` run shows everything that
//! needs fixing.

use std::path::Path;

use url::Url;

use super::report::{IssueKind, ValidationReport};
use super::types::{Experience, HeroConfig, Project, Quote, SocialLink, Technology};
use super::{ContentFile, LoadNotes, Registry};
use crate::catalog::IconCatalog;
use crate::config::FieldPath;
use crate::image::{ImageError, ImagePolicy, ImageSource};
use crate::template::Template;

/// Validate a loaded registry against the icon catalog and image allow-list.
///
/// When `static_dir` is given, site-relative images are also checked for
/// existence.
pub fn validate(
    registry: &Registry,
    notes: &LoadNotes,
    catalog: &IconCatalog,
    images: &ImagePolicy,
    static_dir: Option<&Path>,
) -> ValidationReport {
    let mut validator = Validator::new(catalog, images);
    if let Some(dir) = static_dir {
        validator = validator.with_static_dir(dir);
    }
    validator.run(registry, notes)
}

/// Which link forms a field accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LinkRule {
    /// `/path` or an absolute http(s) url
    Web,
    /// `Web`, or a `mailto:` address
    WebOrMail,
}

/// Stateful content checker.
pub struct Validator<'a> {
    catalog: &'a IconCatalog,
    images: &'a ImagePolicy,
    static_dir: Option<&'a Path>,
    report: ValidationReport,
}

impl<'a> Validator<'a> {
    pub fn new(catalog: &'a IconCatalog, images: &'a ImagePolicy) -> Self {
        Self {
            catalog,
            images,
            static_dir: None,
            report: ValidationReport::new(),
        }
    }

    /// Also check that site-relative images exist under `dir`.
    pub fn with_static_dir(mut self, dir: &'a Path) -> Self {
        self.static_dir = Some(dir);
        self
    }

    pub fn run(mut self, registry: &Registry, notes: &LoadNotes) -> ValidationReport {
        self.load_notes(notes);

        if let Some(hero) = &registry.hero {
            self.hero(hero);
        }

        self.collection(ContentFile::Experiences, &registry.experiences, notes, Self::experience);
        self.collection(ContentFile::Projects, &registry.projects, notes, Self::project);
        self.collection(ContentFile::Quotes, &registry.quotes, notes, Self::quote);
        self.collection(ContentFile::Socials, &registry.socials, notes, Self::social);

        self.report
    }

    fn load_notes(&mut self, notes: &LoadNotes) {
        for file in &notes.missing {
            self.report
                .warning(
                    *file,
                    IssueKind::EmptyCollection,
                    FieldPath::new(file.field_root()),
                    format!("{} not found, its section renders nothing", file.file_name()),
                )
                .with_hint(format!("create content/{}", file.file_name()));
        }

        for (file, key) in &notes.unknown_fields {
            self.report
                .warning(
                    *file,
                    IssueKind::UnknownField,
                    ignored_field_path(*file, key),
                    "unknown field, ignored",
                )
                .with_hint("check the field name for typos");
        }
    }

    fn collection<T>(
        &mut self,
        file: ContentFile,
        items: &[T],
        notes: &LoadNotes,
        check: fn(&mut Self, &T, FieldPath),
    ) {
        let root = FieldPath::new(file.field_root());
        if items.is_empty() {
            if !notes.missing.contains(&file) {
                self.report
                    .warning(
                        file,
                        IssueKind::EmptyCollection,
                        root,
                        format!("no {} entries, the section renders nothing", file.field_root()),
                    )
                    .with_hint(format!("add [[{}]] tables", file.field_root()));
            }
            return;
        }
        for (i, item) in items.iter().enumerate() {
            check(self, item, root.index(i));
        }
    }

    // ========================================================================
    // records
    // ========================================================================

    fn hero(&mut self, hero: &HeroConfig) {
        const FILE: ContentFile = ContentFile::Hero;
        let root = FieldPath::new("hero");

        self.require(FILE, root.join("name"), &hero.name);
        self.require(FILE, root.join("title"), &hero.title);
        self.image(FILE, root.join("avatar"), &hero.avatar);
        self.technologies(FILE, &root.join("skills"), &hero.skills);

        let template = Template::parse(&hero.description);
        for token in template.unresolved(&hero.skills) {
            self.report
                .error(
                    FILE,
                    IssueKind::OutOfRangeTemplateToken,
                    root.join("description"),
                    format!(
                        "{token} matches none of the {} skill{}",
                        hero.skills.len(),
                        crate::utils::plural_s(hero.skills.len())
                    ),
                )
                .with_hint("use an index below the number of skills, or a listed skill name");
        }

        for (i, button) in hero.buttons.iter().enumerate() {
            let field = root.join("buttons").index(i);
            self.require(FILE, field.join("text"), &button.text);
            self.link(FILE, field.join("href"), &button.href, LinkRule::WebOrMail);
            if let Some(icon) = &button.icon {
                self.icon(FILE, field.join("icon"), icon);
            }
        }
    }

    fn experience(&mut self, exp: &Experience, field: FieldPath) {
        const FILE: ContentFile = ContentFile::Experiences;

        self.require(FILE, field.join("company"), &exp.company);
        self.require(FILE, field.join("position"), &exp.position);
        self.require(FILE, field.join("start_date"), &exp.start_date);
        self.link(FILE, field.join("website"), &exp.website, LinkRule::Web);
        self.image(FILE, field.join("image"), &exp.image);

        if !exp.is_current && exp.end_date.trim().is_empty() {
            self.report
                .error(
                    FILE,
                    IssueKind::MissingData,
                    field.join("end_date"),
                    "required for a past position",
                )
                .with_hint("set end_date, or is_current = true");
        } else if exp.is_current && !exp.end_date.trim().is_empty() {
            self.report.warning(
                FILE,
                IssueKind::MissingData,
                field.join("end_date"),
                format!("'{}' is not shown while is_current = true", exp.end_date),
            );
        }

        for (name, url) in [("x", &exp.x), ("linkedin", &exp.linkedin), ("github", &exp.github)] {
            if let Some(url) = url {
                self.link(FILE, field.join(name), url, LinkRule::Web);
            }
        }

        self.technologies(FILE, &field.join("technologies"), &exp.technologies);
    }

    fn project(&mut self, project: &Project, field: FieldPath) {
        const FILE: ContentFile = ContentFile::Projects;

        self.require(FILE, field.join("title"), &project.title);
        self.require(FILE, field.join("description"), &project.description);
        self.image(FILE, field.join("image"), &project.image);
        self.link(FILE, field.join("link"), &project.link, LinkRule::Web);

        for (name, url) in [
            ("video", &project.video),
            ("github", &project.github),
            ("live", &project.live),
        ] {
            if let Some(url) = url {
                self.link(FILE, field.join(name), url, LinkRule::Web);
            }
        }

        let slug = project.details_slug.as_deref().map(str::trim).unwrap_or("");
        if project.details {
            if slug.is_empty() {
                self.report
                    .error(
                        FILE,
                        IssueKind::MissingData,
                        field.join("details_slug"),
                        "required when details = true",
                    )
                    .with_hint("set details_slug = \"/projects/<name>\", or details = false");
            } else if !slug.starts_with('/') {
                self.report
                    .error(
                        FILE,
                        IssueKind::InvalidUrl,
                        field.join("details_slug"),
                        format!("'{slug}' must be a site path"),
                    )
                    .with_hint(format!("use \"/{slug}\""));
            }
        } else if !slug.is_empty() {
            self.report.warning(
                FILE,
                IssueKind::MissingData,
                field.join("details_slug"),
                "ignored while details = false",
            );
        }

        self.technologies(FILE, &field.join("technologies"), &project.technologies);
    }

    fn quote(&mut self, quote: &Quote, field: FieldPath) {
        self.require(ContentFile::Quotes, field.join("quote"), &quote.quote);
        self.require(ContentFile::Quotes, field.join("author"), &quote.author);
    }

    fn social(&mut self, social: &SocialLink, field: FieldPath) {
        const FILE: ContentFile = ContentFile::Socials;

        self.require(FILE, field.join("name"), &social.name);
        self.link(FILE, field.join("href"), &social.href, LinkRule::WebOrMail);
        if !social.icon_key().trim().is_empty() {
            self.icon(FILE, field.join("icon"), social.icon_key());
        }
    }

    // ========================================================================
    // field checks
    // ========================================================================

    fn technologies(&mut self, file: ContentFile, root: &FieldPath, techs: &[Technology]) {
        for (i, tech) in techs.iter().enumerate() {
            let field = root.index(i);
            if !self.require(file, field.join("name"), &tech.name) {
                continue;
            }
            match &tech.href {
                Some(href) => self.link(file, field.join("href"), href, LinkRule::Web),
                None => {
                    self.report.error(
                        file,
                        IssueKind::MissingData,
                        field.join("href"),
                        format!("'{}' has no link", tech.name),
                    );
                }
            }
            self.icon(file, field.join("icon"), tech.icon_key());
        }
    }

    /// Report an empty required string. Returns whether the value is present.
    fn require(&mut self, file: ContentFile, field: FieldPath, value: &str) -> bool {
        if value.trim().is_empty() {
            self.report
                .error(file, IssueKind::MissingData, field, "is required");
            return false;
        }
        true
    }

    fn icon(&mut self, file: ContentFile, field: FieldPath, name: &str) {
        if let Err(err) = self.catalog.lookup(name) {
            self.report
                .error(file, IssueKind::MissingData, field, err.to_string())
                .with_hint(format!(
                    "add icons/{name}.svg, or set `icon` to a built-in name"
                ));
        }
    }

    fn link(&mut self, file: ContentFile, field: FieldPath, link: &str, rule: LinkRule) {
        if !self.require(file, field.clone(), link) {
            return;
        }
        if let Err(message) = check_link(link.trim(), rule) {
            self.report.error(file, IssueKind::InvalidUrl, field, message);
        }
    }

    fn image(&mut self, file: ContentFile, field: FieldPath, src: &str) {
        match self.images.check(src) {
            Ok(ImageSource::Local(path)) => self.local_asset(file, field, path),
            Ok(ImageSource::Remote(_)) => {}
            Err(ImageError::Empty) => {
                self.report.error(file, IssueKind::MissingData, field, "is required");
            }
            Err(err @ ImageError::InvalidUrl(_)) => {
                self.report
                    .error(file, IssueKind::InvalidUrl, field, err.to_string())
                    .with_hint("use a site path like \"/images/cover.png\"");
            }
            Err(err) => {
                self.report
                    .error(file, IssueKind::ForbiddenImage, field, err.to_string())
                    .with_hint("add the host to [images] remote in folio.toml");
            }
        }
    }

    fn local_asset(&mut self, file: ContentFile, field: FieldPath, path: &str) {
        let Some(dir) = self.static_dir else { return };
        let relative = path
            .split(['?', '#'])
            .next()
            .unwrap_or(path)
            .trim_start_matches('/');
        if !dir.join(relative).is_file() {
            self.report.warning(
                file,
                IssueKind::MissingAsset,
                field,
                format!("'{path}' not found in {}", dir.display()),
            );
        }
    }
}

/// Check a link against the forms `rule` accepts.
fn check_link(link: &str, rule: LinkRule) -> Result<(), String> {
    if link.starts_with('/') && !link.starts_with("//") {
        return Ok(());
    }

    let url = Url::parse(link).map_err(|e| format!("'{link}' is not a valid url ({e})"))?;
    match url.scheme() {
        "http" | "https" if url.host_str().is_some_and(|h| !h.is_empty()) => Ok(()),
        "http" | "https" => Err(format!("'{link}' has no host")),
        "mailto" if rule == LinkRule::WebOrMail => {
            if url.path().is_empty() {
                Err(format!("'{link}' has no address"))
            } else {
                Ok(())
            }
        }
        scheme => Err(format!("'{scheme}:' links are not supported here")),
    }
}

/// Turn a `serde_ignored` path (`projects.0.mood`) into a field path
/// (`projects[0].mood`).
fn ignored_field_path(file: ContentFile, key: &str) -> FieldPath {
    let mut path = String::with_capacity(key.len() + 8);
    for segment in key.split('.') {
        if !path.is_empty() && segment.bytes().all(|b| b.is_ascii_digit()) {
            path.push('[');
            path.push_str(segment);
            path.push(']');
        } else {
            if !path.is_empty() {
                path.push('.');
            }
            path.push_str(segment);
        }
    }

    let root = file.field_root();
    let rooted = path
        .strip_prefix(root)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with(['[', '.']));
    if rooted {
        FieldPath::from(path)
    } else {
        FieldPath::new(root).join(&path)
    }
}
