//! # ik-shortcodes
//!
//! Image shortcodes, filters and asset helpers for a static content site
//! served through the ImageKit CDN.
//!
//! The templating engine, the bundler and the CSS toolchain are off-the-shelf
//! and stay that way. What lives here is the logic those tools are configured
//! with: above all, the **image transformation URL scheme**. Every image on
//! the site is referenced through a CDN URL such as
//!
//! ```text
//! https://ik.imagekit.io/acct/tr:w-800,f-auto,q-80/team/photo.jpg
//! ```
//!
//! and those URLs are cache keys. Changing a single character, even the order
//! of two transform parameters, invalidates the CDN cache and every rendered
//! page that embeds the old URL. The [`imaging`] module reproduces the scheme
//! exactly.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`imaging`] | Transform segments, URL joining and the five image operations |
//! | [`shortcodes`] | Name-based shortcode dispatch over template string arguments |
//! | [`filters`] | `limit`, `hash`, `date` and `slugify` template filters |
//! | [`config`] | `config.toml` loading, `IMAGEKIT_URL` override, validation |
//! | [`passthrough`] | Verbatim copy of static assets into the output directory |
//! | [`collections`] | The `pages` collection (`src/pages/**/*.njk`) |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Configuration Is a Value
//!
//! The CDN base URL is read once, by [`config::load_config`], and handed to
//! [`imaging::ImageUrlBuilder`] as an ordinary value. Builder methods never
//! consult the environment, so every URL produced in a run shares one base
//! and tests need no environment mutation.
//!
//! ## No Encoding
//!
//! Asset paths and transform values are joined verbatim. Content authors
//! supply identifiers that are already URL-safe, and encoding them now would
//! change URLs that are already published.
//!
//! ## Permissive Arguments
//!
//! Shortcodes never fail on content: missing alt text renders as `alt=""`,
//! odd widths are formatted as typed. A broken image in a preview is a better
//! failure mode than a failed build.
//!
//! ## Maud for Markup
//!
//! Fragments are built with [Maud](https://maud.lambda.xyz/), so attribute
//! values are escaped and tags are always well formed, while attribute order
//! stays exactly as written in the template.
//!
//! Escaping means the bytes can differ from markup produced by plain string
//! interpolation: `Tom & Jerry` is written as `alt="Tom &amp; Jerry"` and a
//! `&` in an asset path as `&amp;`. The parsed DOM, and therefore the URL the
//! browser requests, is the same.

pub mod collections;
pub mod config;
pub mod filters;
pub mod imaging;
pub mod output;
pub mod passthrough;
pub mod shortcodes;

#[cfg(test)]
pub(crate) mod test_helpers;
