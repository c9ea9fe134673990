//! Image source allow-list.
//!
//! Site-relative paths are always allowed. Remote images must match one of
//! the `[images] remote` patterns by protocol and hostname:
//!
//! | pattern             | matches                                  |
//! |---------------------|------------------------------------------|
//! | `imagekit.io`       | exactly `imagekit.io`                    |
//! | `*.pinimg.com`      | `i.pinimg.com`, not `a.b.pinimg.com`     |
//! | `**.imagekit.io`    | any depth below `imagekit.io`            |

use thiserror::Error;
use url::Url;

use crate::config::{ImagesConfig, RemotePattern};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ImageError {
    #[error("image source is empty")]
    Empty,

    #[error("'{0}' is neither a site path nor a valid url")]
    InvalidUrl(String),

    #[error("host '{host}' is not in the [images] allow-list")]
    ForbiddenHost { host: String },

    #[error("protocol '{protocol}' is not allowed for host '{host}'")]
    ForbiddenProtocol { protocol: String, host: String },
}

/// A permitted image source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource<'a> {
    /// Site-relative path served from the static directory.
    Local(&'a str),
    Remote(Url),
}

#[derive(Debug, Clone, Default)]
pub struct ImagePolicy {
    remote: Vec<RemotePattern>,
}

impl ImagePolicy {
    pub fn new(config: &ImagesConfig) -> Self {
        Self {
            remote: config
                .remote
                .iter()
                .map(|p| RemotePattern::new(&p.protocol, &p.hostname.to_ascii_lowercase()))
                .collect(),
        }
    }

    /// Classify `src`, rejecting anything outside the allow-list.
    pub fn check<'a>(&self, src: &'a str) -> Result<ImageSource<'a>, ImageError> {
        let src = src.trim();
        if src.is_empty() {
            return Err(ImageError::Empty);
        }
        if src.starts_with('/') && !src.starts_with("//") {
            return Ok(ImageSource::Local(src));
        }

        let url = Url::parse(src).map_err(|_| ImageError::InvalidUrl(src.to_string()))?;
        let Some(host) = url.host_str() else {
            return Err(ImageError::InvalidUrl(src.to_string()));
        };

        let mut host_known = false;
        for pattern in &self.remote {
            if host_matches(&pattern.hostname, host) {
                if pattern.protocol == url.scheme() {
                    return Ok(ImageSource::Remote(url));
                }
                host_known = true;
            }
        }

        if host_known {
            Err(ImageError::ForbiddenProtocol {
                protocol: url.scheme().to_string(),
                host: host.to_string(),
            })
        } else {
            Err(ImageError::ForbiddenHost {
                host: host.to_string(),
            })
        }
    }

    pub fn allows(&self, src: &str) -> bool {
        self.check(src).is_ok()
    }
}

fn host_matches(pattern: &str, host: &str) -> bool {
    let (suffix, any_depth) = if let Some(rest) = pattern.strip_prefix("**.") {
        (rest, true)
    } else if let Some(rest) = pattern.strip_prefix("*.") {
        (rest, false)
    } else {
        return pattern == host;
    };

    let Some(labels) = host
        .strip_suffix(suffix)
        .and_then(|h| h.strip_suffix('.'))
    else {
        return false;
    };
    !labels.is_empty() && (any_depth || !labels.contains('.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> ImagePolicy {
        ImagePolicy::new(&ImagesConfig {
            remote: vec![
                RemotePattern::new("https", "imagekit.io"),
                RemotePattern::new("https", "*.pinimg.com"),
                RemotePattern::new("https", "**.dribbble.com"),
            ],
        })
    }

    #[test]
    fn test_local_paths_allowed() {
        let policy = policy();
        assert_eq!(
            policy.check("/company/rpa.png"),
            Ok(ImageSource::Local("/company/rpa.png"))
        );
        assert!(matches!(
            policy.check("//evil.example/x.png"),
            Err(ImageError::InvalidUrl(_))
        ));
        assert!(matches!(policy.check("company/rpa.png"), Err(ImageError::InvalidUrl(_))));
        assert_eq!(policy.check("  "), Err(ImageError::Empty));
    }

    #[test]
    fn test_exact_host() {
        let policy = policy();
        assert!(policy.allows("https://imagekit.io/demo/cover.png"));
        assert_eq!(
            policy.check("https://ik.imagekit.io/demo/cover.png"),
            Err(ImageError::ForbiddenHost {
                host: "ik.imagekit.io".into()
            })
        );
    }

    #[test]
    fn test_single_label_wildcard() {
        let policy = policy();
        assert!(policy.allows("https://i.pinimg.com/736x/a.jpg"));
        assert!(!policy.allows("https://a.b.pinimg.com/a.jpg"));
        assert!(!policy.allows("https://pinimg.com/a.jpg"));
        assert!(!policy.allows("https://evilpinimg.com/a.jpg"));
    }

    #[test]
    fn test_any_depth_wildcard() {
        let policy = policy();
        assert!(policy.allows("https://cdn.dribbble.com/shot.png"));
        assert!(policy.allows("https://a.cdn.dribbble.com/shot.png"));
        assert!(!policy.allows("https://dribbble.com/shot.png"));
    }

    #[test]
    fn test_protocol_must_match() {
        assert_eq!(
            policy().check("http://imagekit.io/a.png"),
            Err(ImageError::ForbiddenProtocol {
                protocol: "http".into(),
                host: "imagekit.io".into()
            })
        );
    }

    #[test]
    fn test_empty_allow_list_rejects_remote() {
        let policy = ImagePolicy::default();
        assert!(policy.allows("/avatar.png"));
        assert!(!policy.allows("https://imagekit.io/a.png"));
    }
}
