//! Request URL to filesystem path resolution.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use percent_encoding::percent_decode_str;

/// Decoded request path without query string or fragment, always rooted.
///
/// `None` when the decoded bytes are not UTF-8.
pub fn request_path(url: &str) -> Option<String> {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    let decoded = percent_decode_str(path)
        .decode_utf8()
        .map(Cow::into_owned)
        .ok()?;

    if decoded.starts_with('/') {
        Some(decoded)
    } else {
        Some(format!("/{decoded}"))
    }
}

/// Resolve a request path to a file under `serve_root`, handling
/// `index.html` for directories.
pub fn resolve_path(path: &str, serve_root: &Path) -> Option<PathBuf> {
    let clean = path.trim_matches('/');

    // Reject paths with suspicious patterns early
    if clean.contains("..") {
        return None;
    }

    let local = serve_root.join(clean);

    // Canonicalize to resolve symlinks and verify path is under serve_root
    let canonical = local.canonicalize().ok()?;
    let root_canonical = serve_root.canonicalize().ok()?;

    if !canonical.starts_with(&root_canonical) {
        return None;
    }

    if canonical.is_file() {
        return Some(canonical);
    }

    if canonical.is_dir() {
        let index = canonical.join("index.html");
        if index.is_file() {
            return Some(index);
        }
    }

    None
}
