//! Input discovery.

use std::path::{Path, PathBuf};

use glob::Pattern;

use crate::{Error, Result};

/// Pattern matched against file names when none is given.
pub const DEFAULT_PATTERN: &str = "*.yaml";

/// List the files in `dir` whose name matches `pattern`.
///
/// Only the top level of `dir` is searched. Matching directories are left out.
/// Paths are returned in the alphabetical order the glob walker yields them.
pub fn discover(dir: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(Error::NotADirectory {
            path: dir.to_path_buf(),
        });
    }

    // Metacharacters in the directory name must not be interpreted.
    let base = Pattern::escape(&dir.to_string_lossy());
    let full = Path::new(&base).join(pattern);
    let full = full.to_string_lossy();

    let entries = glob::glob(&full).map_err(|source| Error::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| Error::Listing {
            path: e.path().to_path_buf(),
            source: e.into_error(),
        })?;
        if path.is_file() {
            files.push(path);
        }
    }
    Ok(files)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn names(paths: &[PathBuf]) -> Vec<String> {
        paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn test_discover_matches_yaml_files_only() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("b.yaml"), "").unwrap();
        fs::write(temp.path().join("a.yaml"), "").unwrap();
        fs::write(temp.path().join("c.yml"), "").unwrap();
        fs::write(temp.path().join("notes.txt"), "").unwrap();

        let files = discover(temp.path(), DEFAULT_PATTERN).unwrap();

        assert_eq!(names(&files), vec!["a.yaml", "b.yaml"]);
    }

    #[test]
    fn test_discover_does_not_recurse() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("nested")).unwrap();
        fs::write(temp.path().join("nested").join("inner.yaml"), "").unwrap();
        fs::write(temp.path().join("top.yaml"), "").unwrap();

        let files = discover(temp.path(), DEFAULT_PATTERN).unwrap();

        assert_eq!(names(&files), vec!["top.yaml"]);
    }

    #[test]
    fn test_discover_skips_matching_directories() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("dir.yaml")).unwrap();
        fs::write(temp.path().join("file.yaml"), "").unwrap();

        let files = discover(temp.path(), DEFAULT_PATTERN).unwrap();

        assert_eq!(names(&files), vec!["file.yaml"]);
    }

    #[test]
    fn test_discover_escapes_directory_name() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("[secrets]");
        fs::create_dir(&dir).unwrap();
        fs::write(dir.join("app.yaml"), "").unwrap();

        let files = discover(&dir, DEFAULT_PATTERN).unwrap();

        assert_eq!(names(&files), vec!["app.yaml"]);
    }

    #[test]
    fn test_discover_empty_directory() {
        let temp = TempDir::new().unwrap();

        let files = discover(temp.path(), DEFAULT_PATTERN).unwrap();

        assert!(files.is_empty());
    }

    #[test]
    fn test_discover_missing_directory() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing");

        let err = discover(&missing, DEFAULT_PATTERN).unwrap_err();

        assert!(matches!(err, Error::NotADirectory { .. }));
    }

    #[test]
    fn test_discover_invalid_pattern() {
        let temp = TempDir::new().unwrap();

        let err = discover(temp.path(), "[*.yaml").unwrap_err();

        assert!(matches!(err, Error::InvalidPattern { .. }));
    }
}
