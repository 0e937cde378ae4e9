//! Transformation segments and the CDN URLs built from them.
//!
//! Every ImageKit URL this crate produces has exactly three parts:
//!
//! ```text
//! https://ik.imagekit.io/acct / tr:w-800,f-auto,q-80 / photos/hero.jpg
//! └──────── base URL ───────┘   └─── transform ────┘   └─ asset path ─┘
//! ```
//!
//! The transform segment is `tr:` followed by comma-separated `key-value`
//! pairs. Pair order is part of the contract: the CDN caches by literal URL,
//! so `w-800,f-auto` and `f-auto,w-800` are two different cache entries.
//! [`Transform`] therefore keeps pairs in insertion order and never sorts.
//!
//! ## No encoding
//!
//! Neither the asset path nor any parameter value is percent-encoded. Asset
//! identifiers come from content authors and are already URL-safe; encoding
//! them here would change URLs that are baked into published pages. Callers
//! that accept untrusted paths must sanitize them before they reach this
//! module.

use std::fmt;

/// Quality used for every full-resolution variant.
pub const QUALITY: u32 = 80;

/// Width of the blurred low-quality placeholder.
pub const PLACEHOLDER_WIDTH: u32 = 40;
/// Blur radius of the placeholder.
pub const PLACEHOLDER_BLUR: u32 = 30;
/// Quality of the placeholder.
pub const PLACEHOLDER_QUALITY: u32 = 20;

/// A width or height as it appears inside a transformation segment.
///
/// Shortcode arguments come straight from template markup, so a value can be
/// anything the author typed. Input that is already a canonical integer
/// becomes [`Dimension::Px`]; everything else, including `0800` or `+800`, is
/// kept verbatim in [`Dimension::Raw`] and formatted as-is, without
/// validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dimension {
    Px(u32),
    Raw(String),
}

impl From<u32> for Dimension {
    fn from(value: u32) -> Self {
        Self::Px(value)
    }
}

impl From<&str> for Dimension {
    fn from(value: &str) -> Self {
        match value.parse::<u32>() {
            Ok(px) if px.to_string() == value => Self::Px(px),
            _ => Self::Raw(value.to_string()),
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Px(px) => write!(f, "{px}"),
            Self::Raw(raw) => f.write_str(raw),
        }
    }
}

/// Builder for a `tr:` transformation segment.
///
/// ```
/// # use ik_shortcodes::imaging::Transform;
/// let t = Transform::new().width(800).format_auto().quality(80);
/// assert_eq!(t.to_string(), "tr:w-800,f-auto,q-80");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transform {
    pairs: Vec<String>,
}

impl Transform {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a `key-value` pair.
    pub fn param(mut self, key: &str, value: impl fmt::Display) -> Self {
        self.pairs.push(format!("{key}-{value}"));
        self
    }

    pub fn width(self, width: impl fmt::Display) -> Self {
        self.param("w", width)
    }

    pub fn height(self, height: impl fmt::Display) -> Self {
        self.param("h", height)
    }

    pub fn quality(self, quality: u32) -> Self {
        self.param("q", quality)
    }

    pub fn blur(self, radius: u32) -> Self {
        self.param("bl", radius)
    }

    /// Let the CDN pick the best format the browser accepts.
    pub fn format_auto(self) -> Self {
        self.param("f", "auto")
    }

    /// Crop around a focus target, e.g. `face`.
    pub fn focus(self, target: &str) -> Self {
        self.param("fo", target)
    }

    /// Round corners as far as possible (a circle for square crops).
    pub fn radius_max(self) -> Self {
        self.param("r", "max")
    }

    /// Append author-supplied flags verbatim.
    ///
    /// The string is opaque: it is neither split nor checked. An empty string
    /// adds nothing, so a segment never ends in a dangling comma.
    pub fn raw(mut self, flags: &str) -> Self {
        if !flags.is_empty() {
            self.pairs.push(flags.to_string());
        }
        self
    }

    /// `w-{width},f-auto,q-80`: the full-resolution variant shared by most
    /// shortcodes.
    pub fn optimized(width: impl fmt::Display) -> Self {
        Self::new().width(width).format_auto().quality(QUALITY)
    }

    /// `w-40,bl-30,q-20`: a tiny blurred stand-in shown while the real image
    /// loads.
    pub fn placeholder() -> Self {
        Self::new()
            .width(PLACEHOLDER_WIDTH)
            .blur(PLACEHOLDER_BLUR)
            .quality(PLACEHOLDER_QUALITY)
    }

    /// `w-{s},h-{s},fo-face,r-max,f-auto`: a face-centred circular crop.
    pub fn avatar(size: impl fmt::Display + Copy) -> Self {
        Self::new()
            .width(size)
            .height(size)
            .focus("face")
            .radius_max()
            .format_auto()
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tr:{}", self.pairs.join(","))
    }
}

/// A fully resolved CDN URL, kept in parts until rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformedUrl<'a> {
    pub base_url: &'a str,
    pub transform: Transform,
    pub asset_path: &'a str,
}

impl fmt::Display for TransformedUrl<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.base_url, self.transform, self.asset_path)
    }
}

/// Join base URL, transform segment and asset path with single slashes.
///
/// No part is encoded or otherwise altered.
pub fn build_transformed_url(base_url: &str, transform_segment: &str, source_path: &str) -> String {
    format!("{base_url}/{transform_segment}/{source_path}")
}
