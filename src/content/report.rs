//! Content validation report types and formatting.

use std::collections::BTreeMap;
use std::fmt;

use owo_colors::OwoColorize;

use super::ContentFile;
use crate::config::FieldPath;
use crate::utils::plural_s;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

/// What kind of problem an issue describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueKind {
    /// A required field, icon or slug is absent.
    MissingData,
    /// A collection (or its file) is empty; its section renders nothing.
    EmptyCollection,
    /// A hero template placeholder names no skill.
    OutOfRangeTemplateToken,
    /// A link is not a well-formed URL or site path.
    InvalidUrl,
    /// An image source is outside the `[images]` allow-list.
    ForbiddenImage,
    /// A site-relative image does not exist in the static directory.
    MissingAsset,
    /// A key no record type knows.
    UnknownField,
}

/// A single validation finding
#[derive(Debug, Clone)]
pub struct Issue {
    pub field: FieldPath,
    pub kind: IssueKind,
    pub severity: Severity,
    pub message: String,
    pub hint: Option<String>,
}

/// Validation findings grouped by content file
#[derive(Debug, Default)]
pub struct ValidationReport {
    issues: BTreeMap<ContentFile, Vec<Issue>>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(
        &mut self,
        file: ContentFile,
        kind: IssueKind,
        field: FieldPath,
        message: impl Into<String>,
    ) -> &mut Issue {
        self.add(file, kind, Severity::Error, field, message.into())
    }

    pub fn warning(
        &mut self,
        file: ContentFile,
        kind: IssueKind,
        field: FieldPath,
        message: impl Into<String>,
    ) -> &mut Issue {
        self.add(file, kind, Severity::Warning, field, message.into())
    }

    fn add(
        &mut self,
        file: ContentFile,
        kind: IssueKind,
        severity: Severity,
        field: FieldPath,
        message: String,
    ) -> &mut Issue {
        let issues = self.issues.entry(file).or_default();
        issues.push(Issue {
            field,
            kind,
            severity,
            message,
            hint: None,
        });
        let last = issues.len() - 1;
        &mut issues[last]
    }

    /// All issues, file by file.
    pub fn iter(&self) -> impl Iterator<Item = (ContentFile, &Issue)> {
        self.issues
            .iter()
            .flat_map(|(file, issues)| issues.iter().map(move |i| (*file, i)))
    }

    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    fn count(&self, severity: Severity) -> usize {
        self.iter().filter(|(_, i)| i.severity == severity).count()
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Print the full report to stderr, grouped by file.
    ///
    /// Warnings are skipped when they are silenced by config.
    pub fn print(&self) {
        let quiet = crate::logger::warnings_silenced();
        for (file, issues) in &self.issues {
            let shown: Vec<_> = issues
                .iter()
                .filter(|i| !(quiet && i.severity == Severity::Warning))
                .collect();
            if shown.is_empty() {
                continue;
            }

            eprintln!();
            eprintln!("{}{}{}", "[".dimmed(), file.file_name().cyan(), "]".dimmed());
            for issue in shown {
                let marker = match issue.severity {
                    Severity::Error => "→".red().to_string(),
                    Severity::Warning => "→".yellow().to_string(),
                };
                eprintln!(
                    "{} {} {}",
                    marker,
                    issue.field.as_str().bright_blue(),
                    issue.message
                );
                if let Some(hint) = &issue.hint {
                    eprintln!("  {} {}", "hint:".yellow(), hint);
                }
            }
        }
    }
}

impl Issue {
    pub fn with_hint(&mut self, hint: impl Into<String>) -> &mut Self {
        self.hint = Some(hint.into());
        self
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let errors = self.error_count();
        let warnings = self.warning_count();

        if errors == 0 && warnings == 0 {
            return write!(f, "{}", "all checks passed".green());
        }
        write!(
            f,
            "{} {} {}, {} {}",
            "found".dimmed(),
            errors.to_string().red().bold(),
            format!("error{}", plural_s(errors)).dimmed(),
            warnings.to_string().yellow().bold(),
            format!("warning{}", plural_s(warnings)).dimmed()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_by_severity() {
        let mut report = ValidationReport::new();
        report.error(
            ContentFile::Projects,
            IssueKind::MissingData,
            FieldPath::new("projects[0].details_slug"),
            "required when details = true",
        );
        report
            .warning(
                ContentFile::Quotes,
                IssueKind::EmptyCollection,
                FieldPath::new("quotes"),
                "no quotes, the quote section renders nothing",
            )
            .with_hint("add [[quotes]] entries");

        assert_eq!(report.error_count(), 1);
        assert_eq!(report.warning_count(), 1);
        assert!(report.has_errors());

        let quotes: Vec<_> = report
            .iter()
            .filter(|(file, _)| *file == ContentFile::Quotes)
            .collect();
        assert_eq!(quotes[0].1.hint.as_deref(), Some("add [[quotes]] entries"));
    }

    fn strip_ansi(s: &str) -> String {
        regex::Regex::new("\x1b\\[[0-9;]*m")
            .unwrap()
            .replace_all(s, "")
            .into_owned()
    }

    #[test]
    fn test_display_summary() {
        let mut report = ValidationReport::new();
        assert_eq!(strip_ansi(&report.to_string()), "all checks passed");

        report.warning(
            ContentFile::Hero,
            IssueKind::EmptyCollection,
            FieldPath::new("hero"),
            "hero.toml not found",
        );
        assert_eq!(strip_ansi(&report.to_string()), "found 0 errors, 1 warning");
    }
}
