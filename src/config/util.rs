//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Find config file by searching upward from current directory
///
/// Starts from cwd and walks up parent directories until finding `config_name`.
/// Returns the absolute path to the config file if found.
///
/// ```text
/// /home/user/site/content/        ← cwd
/// /home/user/site/folio.toml      ← found!
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let cwd = std::env::current_dir().ok()?;
    find_config_from(&cwd, config_name)
}

fn find_config_from(start: &Path, config_name: &Path) -> Option<PathBuf> {
    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.is_file() {
            return Some(candidate);
        }
        current = current.parent()?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_find_config_in_parent() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("content/deep");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("folio.toml"), "").unwrap();

        let found = find_config_from(&nested, Path::new("folio.toml")).unwrap();
        assert_eq!(found, dir.path().join("folio.toml"));
    }

    #[test]
    fn test_find_config_missing() {
        let dir = tempfile::tempdir().unwrap();
        assert!(find_config_from(dir.path(), Path::new("no-such-folio.toml")).is_none());
    }
}
