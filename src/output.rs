//! CLI output formatting.
//!
//! Each command has a `format_*` function returning `Vec<String>` for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure. Diagnostics go through `tracing` on stderr; only
//! results land here.
//!
//! # Output Format
//!
//! ## Check
//!
//! ```text
//! ImageKit
//!     https://ik.imagekit.io/acct
//! Site
//!     src → _site (njk, md, html)
//! Passthrough
//!     src/assets/images → images
//!     src/robots.txt → robots.txt
//! Pages
//!     src/pages/**/*.njk
//! ```
//!
//! ## Copy
//!
//! ```text
//! 001 src/assets/images → _site/images (2 files)
//! 002 src/assets/fonts → _site/fonts (missing)
//!
//! Copied 2 files
//! ```

use crate::config::SiteConfig;
use crate::passthrough::{CopiedEntry, destination};
use std::path::{Path, PathBuf};

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Show `path` relative to `root` when possible.
fn relative<'a>(path: &'a Path, root: &Path) -> &'a Path {
    path.strip_prefix(root).unwrap_or(path)
}

pub fn format_check_output(config: &SiteConfig) -> Vec<String> {
    let mut lines = vec![
        "ImageKit".to_string(),
        format!("{}{}", indent(1), config.imagekit.url),
        "Site".to_string(),
        format!(
            "{}{} → {} ({})",
            indent(1),
            config.site.input,
            config.site.output,
            config.site.template_formats.join(", ")
        ),
        "Passthrough".to_string(),
    ];
    for rule in &config.passthrough {
        lines.push(format!(
            "{}{} → {}",
            indent(1),
            rule.from,
            destination(rule, &config.site.input).display()
        ));
    }
    lines.push("Pages".to_string());
    lines.push(format!(
        "{}{}/**/*.{}",
        indent(1),
        config.collections.pages.root,
        config.collections.pages.extension
    ));
    lines
}

pub fn print_check_output(config: &SiteConfig) {
    for line in format_check_output(config) {
        println!("{}", line);
    }
}

pub fn format_copy_output(entries: &[CopiedEntry], root: &Path) -> Vec<String> {
    let mut lines = Vec::new();
    for (i, entry) in entries.iter().enumerate() {
        let status = match entry.files {
            0 => "missing".to_string(),
            1 => "1 file".to_string(),
            n => format!("{n} files"),
        };
        lines.push(format!(
            "{} {} → {} ({})",
            format_index(i + 1),
            relative(&entry.from, root).display(),
            relative(&entry.to, root).display(),
            status
        ));
    }
    let total: usize = entries.iter().map(|e| e.files).sum();
    lines.push(String::new());
    lines.push(format!(
        "Copied {} {}",
        total,
        if total == 1 { "file" } else { "files" }
    ));
    lines
}

pub fn print_copy_output(entries: &[CopiedEntry], root: &Path) {
    for line in format_copy_output(entries, root) {
        println!("{}", line);
    }
}

pub fn format_pages_output(pages: &[PathBuf]) -> Vec<String> {
    let mut lines: Vec<String> = pages
        .iter()
        .enumerate()
        .map(|(i, p)| format!("{} {}", format_index(i + 1), p.display()))
        .collect();
    lines.push(String::new());
    lines.push(format!(
        "{} {}",
        pages.len(),
        if pages.len() == 1 { "page" } else { "pages" }
    ));
    lines
}

pub fn print_pages_output(pages: &[PathBuf]) {
    for line in format_pages_output(pages) {
        println!("{}", line);
    }
}
