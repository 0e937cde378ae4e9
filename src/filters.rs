//! Template filters.
//!
//! | Filter | Input | Output |
//! |---|---|---|
//! | `limit` | list, n | first `n` items (negative `n` drops from the end) |
//! | `hash` | any text | first 8 hex chars of its MD5, for cache busting |
//! | `date` | `YYYY-MM-DD` or RFC 3339, locale | long localized date |
//! | `slugify` | text | lowercase, dash-separated, ASCII word chars only |
//!
//! The typed functions are what Rust callers use. [`apply`] is the string
//! interface used by the CLI, where every argument arrives as text.

use chrono::{DateTime, Datelike, NaiveDate};
use md5::{Digest, Md5};
use thiserror::Error;

/// Locale used by `date` when none is given.
pub const DEFAULT_DATE_LOCALE: &str = "de-DE";

/// Names accepted by [`apply`].
pub const FILTERS: [&str; 4] = ["limit", "hash", "date", "slugify"];

#[derive(Error, Debug)]
pub enum FilterError {
    #[error("unknown filter: {0}")]
    Unknown(String),
    #[error("not a date: {0}")]
    InvalidDate(String),
    #[error("invalid limit: {0}")]
    InvalidLimit(String),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// First `n` items of `items`.
///
/// Mirrors array slicing: `n` past the end returns everything, a negative `n`
/// drops `|n|` items from the end.
pub fn limit<T>(items: &[T], n: i64) -> &[T] {
    let len = items.len() as i64;
    let end = if n < 0 { (len + n).max(0) } else { n.min(len) };
    &items[..end as usize]
}

/// Short content hash for cache-busting query strings.
pub fn hash(content: &str) -> String {
    let digest = Md5::digest(content.as_bytes());
    let mut hex = format!("{:x}", digest);
    hex.truncate(8);
    hex
}

/// Long-form date rendering for a handful of locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateLocale {
    /// `19. Oktober 2026`
    German,
    /// `October 19, 2026`
    EnglishUs,
    /// `19 October 2026`
    EnglishGb,
}

impl DateLocale {
    /// Map a BCP 47 tag to a supported locale. Unknown tags fall back to US
    /// English.
    pub fn from_tag(tag: &str) -> Self {
        let tag = tag.to_ascii_lowercase();
        if tag == "de" || tag.starts_with("de-") {
            Self::German
        } else if tag == "en-gb" {
            Self::EnglishGb
        } else {
            Self::EnglishUs
        }
    }

    fn month_name(self, month0: u32) -> &'static str {
        const DE: [&str; 12] = [
            "Januar", "Februar", "März", "April", "Mai", "Juni", "Juli", "August", "September",
            "Oktober", "November", "Dezember",
        ];
        const EN: [&str; 12] = [
            "January", "February", "March", "April", "May", "June", "July", "August",
            "September", "October", "November", "December",
        ];
        match self {
            Self::German => DE[month0 as usize],
            Self::EnglishUs | Self::EnglishGb => EN[month0 as usize],
        }
    }

    pub fn format(self, date: NaiveDate) -> String {
        let month = self.month_name(date.month0());
        match self {
            Self::German => format!("{}. {} {}", date.day(), month, date.year()),
            Self::EnglishUs => format!("{} {}, {}", month, date.day(), date.year()),
            Self::EnglishGb => format!("{} {} {}", date.day(), month, date.year()),
        }
    }
}

/// Parse `YYYY-MM-DD` or an RFC 3339 timestamp.
///
/// Timestamps keep their own calendar date; no time zone conversion happens.
pub fn parse_date(input: &str) -> Result<NaiveDate, FilterError> {
    let input = input.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.date_naive());
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map_err(|_| FilterError::InvalidDate(input.to_string()))
}

/// Render `input` as a long date in `locale`.
pub fn date(input: &str, locale: &str) -> Result<String, FilterError> {
    let date = parse_date(input)?;
    Ok(DateLocale::from_tag(locale).format(date))
}

/// URL slug: lowercase, whitespace runs become one `-`, and anything that is
/// not an ASCII letter, digit, `_` or `-` is dropped.
pub fn slugify(input: &str) -> String {
    let lower = input.to_lowercase();
    let mut slug = String::with_capacity(lower.len());
    let mut in_space = false;
    for c in lower.chars() {
        if c.is_whitespace() {
            if !in_space {
                slug.push('-');
            }
            in_space = true;
            continue;
        }
        in_space = false;
        if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
            slug.push(c);
        }
    }
    slug
}

/// Apply a filter by name to string arguments.
///
/// `limit` takes a JSON array and a count and returns a JSON array.
pub fn apply(name: &str, args: &[&str]) -> Result<String, FilterError> {
    let arg = |i: usize| args.get(i).copied().unwrap_or("");
    match name {
        "limit" => {
            let items: Vec<serde_json::Value> = serde_json::from_str(arg(0))?;
            let n = arg(1)
                .trim()
                .parse::<i64>()
                .map_err(|_| FilterError::InvalidLimit(arg(1).to_string()))?;
            Ok(serde_json::to_string(limit(&items, n))?)
        }
        "hash" => Ok(hash(arg(0))),
        "date" => {
            let locale = match arg(1) {
                "" => DEFAULT_DATE_LOCALE,
                l => l,
            };
            date(arg(0), locale)
        }
        "slugify" => Ok(slugify(arg(0))),
        other => Err(FilterError::Unknown(other.to_string())),
    }
}
