//! Passthrough copy of static assets.
//!
//! Each [`PassthroughRule`] names a file or directory under the project root
//! that is copied unchanged into the output directory. Directories are copied
//! recursively. A rule whose source does not exist is skipped with a warning,
//! so a fresh project without fonts still builds.

use crate::config::{PassthroughRule, SiteConfig};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum PassthroughError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("walk error: {0}")]
    WalkDir(#[from] walkdir::Error),
}

/// Outcome of one rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopiedEntry {
    pub from: PathBuf,
    pub to: PathBuf,
    /// Number of files written; `0` when the source was missing.
    pub files: usize,
}

/// Destination of `rule`, relative to the output directory.
///
/// An explicit `to` wins. Otherwise `from` is used with the input directory
/// prefix removed, matching where the templating engine would place it.
pub fn destination(rule: &PassthroughRule, input_dir: &str) -> PathBuf {
    match &rule.to {
        Some(to) => PathBuf::from(to),
        None => {
            let from = Path::new(&rule.from);
            from.strip_prefix(input_dir).unwrap_or(from).to_path_buf()
        }
    }
}

/// Apply every passthrough rule of `config`, relative to project `root`.
pub fn copy_passthrough(
    root: &Path,
    config: &SiteConfig,
) -> Result<Vec<CopiedEntry>, PassthroughError> {
    let output_dir = root.join(&config.site.output);
    let mut entries = Vec::with_capacity(config.passthrough.len());
    for rule in &config.passthrough {
        let from = root.join(&rule.from);
        let to = output_dir.join(destination(rule, &config.site.input));
        let files = copy_path(&from, &to)?;
        entries.push(CopiedEntry { from, to, files });
    }
    Ok(entries)
}

/// Copy a file or directory tree, returning the number of files written.
fn copy_path(from: &Path, to: &Path) -> Result<usize, PassthroughError> {
    if !from.exists() {
        warn!(path = %from.display(), "passthrough source missing, skipped");
        return Ok(0);
    }
    if from.is_file() {
        if let Some(parent) = to.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(from, to)?;
        debug!(from = %from.display(), to = %to.display(), "copied file");
        return Ok(1);
    }

    let mut files = 0;
    for entry in WalkDir::new(from).sort_by_file_name() {
        let entry = entry?;
        let rel = entry.path().strip_prefix(from).unwrap_or(entry.path());
        let target = to.join(rel);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            fs::copy(entry.path(), &target)?;
            files += 1;
        }
    }
    debug!(from = %from.display(), to = %to.display(), files, "copied directory");
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;

    #[test]
    fn destination_explicit() {
        let rule = PassthroughRule {
            from: "src/assets/images".into(),
            to: Some("images".into()),
        };
        assert_eq!(destination(&rule, "src"), PathBuf::from("images"));
    }

    #[test]
    fn destination_strips_input_dir() {
        let rule = PassthroughRule {
            from: "src/robots.txt".into(),
            to: None,
        };
        assert_eq!(destination(&rule, "src"), PathBuf::from("robots.txt"));
    }

    #[test]
    fn destination_outside_input_kept() {
        let rule = PassthroughRule {
            from: "static/favicon.ico".into(),
            to: None,
        };
        assert_eq!(destination(&rule, "src"), PathBuf::from("static/favicon.ico"));
    }

    #[test]
    fn copies_default_rules() {
        let tmp = setup_project();
        let entries = copy_passthrough(tmp.path(), &SiteConfig::default()).unwrap();

        assert_eq!(entries.len(), 3);
        let out = tmp.path().join("_site");
        assert!(out.join("images/hero.jpg").is_file());
        assert!(out.join("images/team/jane.jpg").is_file());
        assert!(out.join("fonts/inter.woff2").is_file());
        assert!(out.join("robots.txt").is_file());
        assert_eq!(entries[0].files, 2);
        assert_eq!(entries[1].files, 1);
        assert_eq!(entries[2].files, 1);
    }

    #[test]
    fn missing_source_is_skipped() {
        let tmp = setup_project();
        let mut config = SiteConfig::default();
        config.passthrough = vec![PassthroughRule {
            from: "src/does-not-exist".into(),
            to: None,
        }];
        let entries = copy_passthrough(tmp.path(), &config).unwrap();
        assert_eq!(entries[0].files, 0);
        assert!(!tmp.path().join("_site/does-not-exist").exists());
    }

    #[test]
    fn copied_content_is_identical() {
        let tmp = setup_project();
        copy_passthrough(tmp.path(), &SiteConfig::default()).unwrap();
        let original = fs::read(tmp.path().join("src/robots.txt")).unwrap();
        let copied = fs::read(tmp.path().join("_site/robots.txt")).unwrap();
        assert_eq!(original, copied);
    }
}
