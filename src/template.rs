//! Hero description templates.
//!
//! A template is plain text with skill placeholders:
//!
//! - `{skills:N}` refers to the N-th hero skill (zero-based),
//! - `{skill:Name}` refers to the skill whose normalized name matches `Name`.
//!
//! Either prefix accepts either form; a purely numeric argument is always an
//! index. Braces that do not form a placeholder are kept as written.
//!
//! A placeholder that names no skill expands to nothing. It is logged and
//! returned to the caller so validation can turn it into an error.

use std::fmt;
use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

use crate::catalog::normalize_key;
use crate::content::Technology;

static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{skills?:([^{}]+)\}").unwrap());

/// Anything a placeholder can resolve to.
pub trait Named {
    fn name(&self) -> &str;
}

impl Named for Technology {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for &str {
    fn name(&self) -> &str {
        self
    }
}

impl Named for String {
    fn name(&self) -> &str {
        self
    }
}

/// What a placeholder refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkillRef {
    Index(usize),
    Name(String),
}

impl SkillRef {
    fn parse(arg: &str) -> Self {
        let arg = arg.trim();
        if !arg.is_empty()
            && arg.bytes().all(|b| b.is_ascii_digit())
            && let Ok(index) = arg.parse()
        {
            return Self::Index(index);
        }
        Self::Name(arg.to_string())
    }

    /// Find the referenced skill.
    pub fn resolve<'s, T: Named>(&self, skills: &'s [T]) -> Option<&'s T> {
        match self {
            Self::Index(i) => skills.get(*i),
            Self::Name(name) => {
                let key = normalize_key(name);
                skills.iter().find(|s| normalize_key(s.name()) == key)
            }
        }
    }
}

impl fmt::Display for SkillRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(i) => write!(f, "{{skills:{i}}}"),
            Self::Name(name) => write!(f, "{{skill:{name}}}"),
        }
    }
}

/// A chunk of an expanded template.
#[derive(Debug, PartialEq, Eq)]
pub enum Piece<'a, 's, T> {
    Text(&'a str),
    Skill(&'s T),
}

#[derive(Debug)]
struct Token {
    span: Range<usize>,
    skill: SkillRef,
}

/// A parsed description template.
#[derive(Debug)]
pub struct Template<'a> {
    source: &'a str,
    tokens: Vec<Token>,
}

impl<'a> Template<'a> {
    pub fn parse(source: &'a str) -> Self {
        let tokens = TOKEN_RE
            .captures_iter(source)
            .filter_map(|caps| {
                let span = caps.get(0)?.range();
                let skill = SkillRef::parse(caps.get(1)?.as_str());
                Some(Token { span, skill })
            })
            .collect();
        Self { source, tokens }
    }

    /// Placeholders in source order.
    pub fn tokens(&self) -> impl Iterator<Item = &SkillRef> {
        self.tokens.iter().map(|t| &t.skill)
    }

    /// Placeholders that resolve to nothing in `skills`.
    pub fn unresolved<T: Named>(&self, skills: &[T]) -> Vec<SkillRef> {
        self.tokens()
            .filter(|s| s.resolve(skills).is_none())
            .cloned()
            .collect()
    }

    /// Walk the template, handing text runs and resolved skills to `emit`.
    ///
    /// Unresolved placeholders emit nothing and are returned.
    pub fn expand<'s, T: Named>(
        &self,
        skills: &'s [T],
        mut emit: impl FnMut(Piece<'a, 's, T>),
    ) -> Vec<SkillRef> {
        let mut unresolved = Vec::new();
        let mut cursor = 0;

        for token in &self.tokens {
            if token.span.start > cursor {
                emit(Piece::Text(&self.source[cursor..token.span.start]));
            }
            match token.skill.resolve(skills) {
                Some(skill) => emit(Piece::Skill(skill)),
                None => {
                    crate::warn!(
                        "template";
                        "{} matches none of the {} skill{}, left empty",
                        token.skill,
                        skills.len(),
                        crate::utils::plural_s(skills.len())
                    );
                    unresolved.push(token.skill.clone());
                }
            }
            cursor = token.span.end;
        }

        if cursor < self.source.len() {
            emit(Piece::Text(&self.source[cursor..]));
        }
        unresolved
    }
}

/// Result of plain-text substitution.
#[derive(Debug, PartialEq, Eq)]
pub struct Substitution {
    pub output: String,
    pub unresolved: Vec<SkillRef>,
}

/// Replace every placeholder in `template` with the skill's name.
pub fn substitute<T: Named>(template: &str, skills: &[T]) -> Substitution {
    let mut output = String::with_capacity(template.len());
    let unresolved = Template::parse(template).expand(skills, |piece| match piece {
        Piece::Text(text) => output.push_str(text),
        Piece::Skill(skill) => output.push_str(skill.name()),
    });
    Substitution { output, unresolved }
}
