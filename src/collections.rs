//! Glob-style collections.
//!
//! The site has one collection, `pages`: every `*.njk` file below
//! `src/pages/`, at any depth. Paths are returned relative to the project
//! root and sorted, so listings are stable across platforms.

use crate::config::CollectionConfig;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum CollectionError {
    #[error("walk error: {0}")]
    WalkDir(#[from] walkdir::Error),
}

/// Collect the files of `collection` below project `root`.
///
/// A missing collection root yields an empty list.
pub fn collect(
    root: &Path,
    collection: &CollectionConfig,
) -> Result<Vec<PathBuf>, CollectionError> {
    let dir = root.join(&collection.root);
    if !dir.is_dir() {
        debug!(path = %dir.display(), "collection root missing");
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(&dir) {
        let entry = entry?;
        let matches = entry.file_type().is_file()
            && entry
                .path()
                .extension()
                .is_some_and(|e| e == collection.extension.as_str());
        if matches {
            let rel = entry.path().strip_prefix(root).unwrap_or(entry.path());
            files.push(rel.to_path_buf());
        }
    }
    files.sort();
    debug!(root = %collection.root, count = files.len(), "collected");
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use tempfile::TempDir;

    #[test]
    fn collects_nested_pages_sorted() {
        let tmp = setup_project();
        let pages = collect(tmp.path(), &CollectionConfig::default()).unwrap();
        assert_eq!(
            pages,
            vec![
                PathBuf::from("src/pages/about/team.njk"),
                PathBuf::from("src/pages/contact.njk"),
                PathBuf::from("src/pages/index.njk"),
            ]
        );
    }

    #[test]
    fn ignores_other_extensions() {
        let tmp = setup_project();
        let pages = collect(tmp.path(), &CollectionConfig::default()).unwrap();
        assert!(pages.iter().all(|p| p.extension().unwrap() == "njk"));
    }

    #[test]
    fn custom_extension() {
        let tmp = setup_project();
        let config = CollectionConfig {
            root: "src/pages".into(),
            extension: "md".into(),
        };
        let pages = collect(tmp.path(), &config).unwrap();
        assert_eq!(pages, vec![PathBuf::from("src/pages/notes.md")]);
    }

    #[test]
    fn missing_root_is_empty() {
        let tmp = TempDir::new().unwrap();
        let pages = collect(tmp.path(), &CollectionConfig::default()).unwrap();
        assert!(pages.is_empty());
    }
}
