//! Shared test utilities.
//!
//! Provides a builder bound to a fixed base URL, a throwaway project tree
//! laid out like the real site, and tiny attribute extractors for asserting
//! on rendered markup.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let html = test_builder().simple_image("a.jpg", "A", &Default::default()).into_string();
//! assert_eq!(attr_value(&html, "alt"), Some("A"));
//! ```

use std::fs;
use std::path::Path;
use tempfile::TempDir;

use crate::imaging::ImageUrlBuilder;

/// Base URL used by every builder in the test suite.
pub const TEST_BASE_URL: &str = "https://ik.imagekit.io/acct";

pub fn test_builder() -> ImageUrlBuilder {
    ImageUrlBuilder::new(TEST_BASE_URL)
}

// =========================================================================
// Fixture setup
// =========================================================================

/// Create a project tree in a temp directory and return it.
///
/// ```text
/// src/
/// ├── assets/images/hero.jpg
/// ├── assets/images/team/jane.jpg
/// ├── assets/fonts/inter.woff2
/// ├── pages/index.njk
/// ├── pages/contact.njk
/// ├── pages/notes.md
/// ├── pages/about/team.njk
/// └── robots.txt
/// ```
pub fn setup_project() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let files: &[(&str, &str)] = &[
        ("src/assets/images/hero.jpg", "jpeg bytes"),
        ("src/assets/images/team/jane.jpg", "jpeg bytes"),
        ("src/assets/fonts/inter.woff2", "font bytes"),
        ("src/pages/index.njk", "{% img \"hero.jpg\", \"Hero\" %}"),
        ("src/pages/contact.njk", "contact"),
        ("src/pages/notes.md", "# Notes"),
        ("src/pages/about/team.njk", "team"),
        ("src/robots.txt", "User-agent: *\nAllow: /\n"),
    ];
    for (rel, content) in files {
        write_file(tmp.path(), rel, content);
    }
    tmp
}

fn write_file(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

// =========================================================================
// Markup inspection
// =========================================================================

/// Value of the first `name="..."` attribute in `html`.
///
/// Matches whole attribute names only: `src` does not match `data-src`.
pub fn attr_value<'a>(html: &'a str, name: &str) -> Option<&'a str> {
    let needle = format!(" {name}=\"");
    let start = html.find(&needle)? + needle.len();
    let len = html[start..].find('"')?;
    Some(&html[start..start + len])
}

/// Number of `name="..."` attributes in `html`.
pub fn count_attr(html: &str, name: &str) -> usize {
    html.matches(&format!(" {name}=\"")).count()
}
