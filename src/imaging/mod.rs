//! ImageKit transformation URLs and image markup, as pure string building.
//!
//! | Shortcode | Builder method | Transform |
//! |---|---|---|
//! | `img` | [`ImageUrlBuilder::simple_image`] | `w-{w},f-auto,q-80[,flags]` |
//! | `picture` | [`ImageUrlBuilder::responsive_image`] | `w-{400..1600},f-auto,q-80` |
//! | `bgimg` | [`ImageUrlBuilder::background_image_url`] | `w-{w},f-auto,q-80` |
//! | `lazyimg` | [`ImageUrlBuilder::lazy_placeholder_image`] | `w-40,bl-30,q-20` + full |
//! | `avatar` | [`ImageUrlBuilder::avatar_image`] | `w-{s},h-{s},fo-face,r-max,f-auto` |
//!
//! The module is split into:
//! - **Transform**: the `tr:` segment builder and URL joining
//! - **Parameters**: per-shortcode option structs and their defaults
//! - **Builder**: [`ImageUrlBuilder`], which renders URLs and markup

mod builder;
mod params;
mod transform;

pub use builder::ImageUrlBuilder;
pub use params::{
    AVATAR_SIZE, AvatarOptions, BACKGROUND_WIDTH, BREAKPOINTS, BackgroundOptions, DEFAULT_SIZES,
    DEFAULT_WIDTH, ImageOptions, LazyOptions, PictureOptions,
};
pub use transform::{Dimension, Transform, TransformedUrl, build_transformed_url};
