//! Filesystem path helpers.

use std::path::{Path, PathBuf};

/// Normalize a file system path to absolute form.
///
/// Tries `canonicalize()` first, falling back to joining relative paths onto
/// the current directory when the path does not exist yet (e.g. output dir).
#[inline]
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
        }
    })
}

/// Recursively copy `src` into `dst`, returning the number of files copied.
///
/// A missing `src` copies nothing.
pub fn copy_dir(src: &Path, dst: &Path) -> std::io::Result<usize> {
    if !src.is_dir() {
        return Ok(0);
    }
    std::fs::create_dir_all(dst)?;

    let mut copied = 0;
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let target = dst.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copied += copy_dir(&entry.path(), &target)?;
        } else {
            std::fs::copy(entry.path(), &target)?;
            copied += 1;
        }
    }
    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_normalize_path_relative() {
        let normalized = normalize_path(Path::new("relative/path/file.txt"));
        assert!(normalized.is_absolute());
    }

    #[test]
    fn test_copy_dir_nested() {
        let src = tempfile::tempdir().unwrap();
        let dst = tempfile::tempdir().unwrap();
        fs::create_dir_all(src.path().join("company")).unwrap();
        fs::write(src.path().join("company/rpa.png"), b"png").unwrap();
        fs::write(src.path().join("favicon.ico"), b"ico").unwrap();

        let copied = copy_dir(src.path(), &dst.path().join("out")).unwrap();
        assert_eq!(copied, 2);
        assert!(dst.path().join("out/company/rpa.png").is_file());
    }

    #[test]
    fn test_copy_dir_missing_source() {
        let dst = tempfile::tempdir().unwrap();
        let copied = copy_dir(Path::new("/definitely/not/here"), dst.path()).unwrap();
        assert_eq!(copied, 0);
    }
}
