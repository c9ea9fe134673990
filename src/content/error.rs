//! Content loading errors.

use std::path::PathBuf;
use thiserror::Error;

/// Failure to read or parse a content file.
///
/// Structural problems inside well-formed files are not errors here; they are
/// reported by the validator.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("failed to parse `{0}`")]
    Toml(PathBuf, #[source] toml::de::Error),
}
