//! Shortcode registry.
//!
//! Templates call shortcodes by name with positional string arguments, e.g.
//! `{% img "team/photo.jpg", "Our team", 1200 %}`. [`Shortcodes::render`]
//! maps such a call onto the typed [`ImageUrlBuilder`] operations and the two
//! small non-image shortcodes.
//!
//! | Name | Arguments (defaults) |
//! |---|---|
//! | `img` | src, alt, width (800), flags ("") |
//! | `picture` | src, alt, sizes ("100vw"), class ("") |
//! | `bgimg` | src, width (1920) |
//! | `lazyimg` | src, alt, width (800), class ("") |
//! | `avatar` | src, alt, size (64) |
//! | `year` | — |
//! | `icon` | name, size (24), class ("") |
//!
//! Argument handling is deliberately permissive: a missing or empty optional
//! argument takes its default, a missing required argument becomes an empty
//! string, and no value is validated. Broken content shows up as a broken
//! image in the rendered page instead of failing the build.

use crate::config::SiteConfig;
use crate::imaging::{
    AVATAR_SIZE, AvatarOptions, BACKGROUND_WIDTH, BackgroundOptions, DEFAULT_SIZES, DEFAULT_WIDTH,
    Dimension, ImageOptions, ImageUrlBuilder, LazyOptions, PictureOptions,
};
use chrono::{Datelike, Local, NaiveDate};
use maud::{Markup, html};
use thiserror::Error;

/// Names accepted by [`Shortcodes::render`].
pub const SHORTCODES: [&str; 7] = [
    "img", "picture", "bgimg", "lazyimg", "avatar", "year", "icon",
];

/// Default edge length of an icon, in CSS pixels.
pub const ICON_SIZE: u32 = 24;

#[derive(Error, Debug)]
pub enum ShortcodeError {
    #[error("unknown shortcode: {0}")]
    Unknown(String),
}

/// Positional shortcode arguments with default handling.
struct Args<'a>(&'a [&'a str]);

impl<'a> Args<'a> {
    fn required(&self, i: usize) -> &'a str {
        self.0.get(i).copied().unwrap_or("")
    }

    fn optional(&self, i: usize) -> Option<&'a str> {
        self.0.get(i).copied().filter(|s| !s.is_empty())
    }

    fn text(&self, i: usize, default: &str) -> String {
        self.optional(i).unwrap_or(default).to_string()
    }

    fn dimension(&self, i: usize, default: u32) -> Dimension {
        self.optional(i)
            .map(Dimension::from)
            .unwrap_or(Dimension::Px(default))
    }
}

/// All shortcodes, bound to one resolved configuration.
#[derive(Debug, Clone)]
pub struct Shortcodes {
    images: ImageUrlBuilder,
}

impl Shortcodes {
    pub fn new(images: ImageUrlBuilder) -> Self {
        Self { images }
    }

    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(ImageUrlBuilder::from_config(&config.imagekit))
    }

    pub fn images(&self) -> &ImageUrlBuilder {
        &self.images
    }

    /// Render shortcode `name` with positional `args`.
    pub fn render(&self, name: &str, args: &[&str]) -> Result<String, ShortcodeError> {
        let args = Args(args);
        let images = &self.images;
        let out = match name {
            "img" => {
                let opts = ImageOptions {
                    width: args.dimension(2, DEFAULT_WIDTH),
                    extra_flags: args.text(3, ""),
                };
                images
                    .simple_image(args.required(0), args.required(1), &opts)
                    .into_string()
            }
            "picture" => {
                let opts = PictureOptions {
                    sizes: args.text(2, DEFAULT_SIZES),
                    class_name: args.text(3, ""),
                };
                images
                    .responsive_image(args.required(0), args.required(1), &opts)
                    .into_string()
            }
            "bgimg" => {
                let opts = BackgroundOptions {
                    width: args.dimension(1, BACKGROUND_WIDTH),
                };
                images.background_image_url(args.required(0), &opts)
            }
            "lazyimg" => {
                let opts = LazyOptions {
                    width: args.dimension(2, DEFAULT_WIDTH),
                    class_name: args.text(3, ""),
                };
                images
                    .lazy_placeholder_image(args.required(0), args.required(1), &opts)
                    .into_string()
            }
            "avatar" => {
                let opts = AvatarOptions {
                    size: args.dimension(2, AVATAR_SIZE),
                };
                images
                    .avatar_image(args.required(0), args.required(1), &opts)
                    .into_string()
            }
            "year" => year(Local::now().date_naive()),
            "icon" => icon(
                args.required(0),
                &args.dimension(1, ICON_SIZE),
                &args.text(2, ""),
            )
            .into_string(),
            other => return Err(ShortcodeError::Unknown(other.to_string())),
        };
        Ok(out)
    }
}

/// Four-digit year of `today`, for copyright footers.
pub fn year(today: NaiveDate) -> String {
    today.year().to_string()
}

/// Lucide icon placeholder, replaced client-side by the icon script.
pub fn icon(name: &str, size: &Dimension, class_name: &str) -> Markup {
    let class = format!("inline-block {class_name}");
    let style = format!("width:{size}px;height:{size}px;");
    html! {
        i data-lucide=(name) class=(class.trim_end()) style=(style) {}
    }
}
