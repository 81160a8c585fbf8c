use std::collections::HashSet;
use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Trim names, drop empty entries and remove duplicates, keeping first
/// occurrences in order.
pub(super) fn sanitize_names(values: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut cleaned = Vec::new();
    for value in values {
        let trimmed = value.trim().to_string();
        if trimmed.is_empty() {
            continue;
        }
        if seen.insert(trimmed.clone()) {
            cleaned.push(trimmed);
        }
    }
    cleaned
}

/// Drop blank entries and duplicates without altering the names themselves,
/// so keys with edge whitespace stay addressable.
pub(super) fn drop_blank_names(values: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .into_iter()
        .filter(|value| !value.trim().is_empty())
        .filter(|value| seen.insert(value.clone()))
        .collect()
}

/// Anchor a relative path to the current working directory.
pub(super) fn absolutize(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    Ok(env::current_dir()
        .context("failed to determine working directory")?
        .join(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_trimmed_and_deduplicated() {
        let cleaned = sanitize_names(vec![
            " _folder ".into(),
            "_folder".into(),
            "".into(),
            "Ocean Blue".into(),
        ]);
        assert_eq!(cleaned, vec!["_folder", "Ocean Blue"]);
    }

    #[test]
    fn inner_whitespace_is_kept() {
        assert_eq!(sanitize_names(vec!["  Ocean  Blue ".into()]), vec!["Ocean  Blue"]);
    }

    #[test]
    fn accent_names_keep_edge_whitespace() {
        let kept = drop_blank_names(vec![
            " blue ".into(),
            "  ".into(),
            "blue".into(),
            " blue ".into(),
        ]);
        assert_eq!(kept, vec![" blue ", "blue"]);
    }

    #[test]
    fn absolute_paths_are_unchanged() {
        let path = Path::new("/srv/theme/icons");
        assert_eq!(absolutize(path).unwrap(), path);
    }

    #[test]
    fn relative_paths_join_the_working_directory() {
        let resolved = absolutize(Path::new("icons")).unwrap();
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("icons"));
    }
}
