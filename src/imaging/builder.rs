//! Markup and URL rendering for the image shortcodes.
//!
//! [`ImageUrlBuilder`] owns the one piece of process-wide state, the CDN base
//! URL, and exposes the five image operations. All of them are pure: the same
//! arguments always produce byte-identical output, nothing is cached and
//! nothing is fetched.
//!
//! Attribute names and their order match the markup already published by the
//! site, so rebuilt pages diff cleanly against old ones.

use super::params::{
    AvatarOptions, BREAKPOINTS, BackgroundOptions, DEFAULT_WIDTH, ImageOptions, LazyOptions,
    PictureOptions,
};
use super::transform::{Transform, TransformedUrl};
use crate::config::ImageKitConfig;
use maud::{Markup, html};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUrlBuilder {
    base_url: String,
}

impl ImageUrlBuilder {
    /// Trailing slashes on `base_url` are dropped so the joined URL has
    /// exactly one separator between base and transform.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    pub fn from_config(config: &ImageKitConfig) -> Self {
        Self::new(config.url.as_str())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolve `transform` against `source_path` without rendering it.
    pub fn transformed<'a>(
        &'a self,
        transform: Transform,
        source_path: &'a str,
    ) -> TransformedUrl<'a> {
        TransformedUrl {
            base_url: &self.base_url,
            transform,
            asset_path: source_path,
        }
    }

    pub fn url(&self, transform: Transform, source_path: &str) -> String {
        self.transformed(transform, source_path).to_string()
    }

    /// `<img>` with a single optimized source.
    pub fn simple_image(&self, source_path: &str, alt: &str, opts: &ImageOptions) -> Markup {
        let transform = Transform::optimized(&opts.width).raw(&opts.extra_flags);
        let src = self.url(transform, source_path);
        html! {
            img src=(src) alt=(alt) loading="lazy" decoding="async" class="rounded-lg";
        }
    }

    /// `srcset` value covering every breakpoint, ascending.
    pub fn srcset(&self, source_path: &str) -> String {
        BREAKPOINTS
            .iter()
            .map(|w| format!("{} {}w", self.url(Transform::optimized(w), source_path), w))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Responsive `<img>`; the browser picks a candidate from the srcset and
    /// falls back to the 800px variant.
    pub fn responsive_image(&self, source_path: &str, alt: &str, opts: &PictureOptions) -> Markup {
        let src = self.url(Transform::optimized(DEFAULT_WIDTH), source_path);
        let srcset = self.srcset(source_path);
        let class = (!opts.class_name.is_empty()).then_some(opts.class_name.as_str());
        html! {
            img src=(src) srcset=(srcset) sizes=(opts.sizes) alt=(alt) loading="lazy" decoding="async" class=[class];
        }
    }

    /// Bare URL for use as a CSS `background-image` value.
    pub fn background_image_url(&self, source_path: &str, opts: &BackgroundOptions) -> String {
        self.url(Transform::optimized(&opts.width), source_path)
    }

    /// `<img>` that shows a blurred placeholder first and swaps in the full
    /// image once the placeholder has loaded.
    ///
    /// The swap is the inline `onload` handler; no script is shipped for it.
    /// The placeholder segment always carries `bl-` and `q-20`, so it cannot
    /// coincide with the full-resolution URL, even at width 40.
    pub fn lazy_placeholder_image(
        &self,
        source_path: &str,
        alt: &str,
        opts: &LazyOptions,
    ) -> Markup {
        let placeholder = self.url(Transform::placeholder(), source_path);
        let full = self.url(Transform::optimized(&opts.width), source_path);
        let class = format!("lazyload {}", opts.class_name);
        html! {
            img src=(placeholder) data-src=(full) alt=(alt) loading="lazy" decoding="async" class=(class.trim_end()) onload="this.src=this.dataset.src";
        }
    }

    /// Square, face-cropped, fully rounded avatar with explicit dimensions so
    /// the layout does not shift while it loads.
    pub fn avatar_image(&self, source_path: &str, alt: &str, opts: &AvatarOptions) -> Markup {
        let src = self.url(Transform::avatar(&opts.size), source_path);
        let size = opts.size.to_string();
        html! {
            img src=(src) alt=(alt) width=(size) height=(size) loading="lazy" class="rounded-full";
        }
    }
}

impl Default for ImageUrlBuilder {
    fn default() -> Self {
        Self::from_config(&ImageKitConfig::default())
    }
}
