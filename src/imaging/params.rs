//! Option types for the image shortcodes.
//!
//! These structs describe *what* a shortcode should render; the
//! [`builder`](super::builder) decides *how*. Every option has a `Default`
//! matching the values templates rely on when they omit an argument.
//!
//! | Option | Default | Effect |
//! |---|---|---|
//! | `width` | 800 | `w-` value of the full-resolution variant |
//! | `extra_flags` | `""` | appended verbatim to the transform segment |
//! | `sizes` | `"100vw"` | `sizes` attribute of responsive images |
//! | `class_name` | `""` | extra CSS class; attribute omitted when empty |
//! | background `width` | 1920 | `w-` value of background URLs |
//! | avatar `size` | 64 | square crop edge and `width`/`height` attributes |

use super::transform::Dimension;

/// Default display width for inline images.
pub const DEFAULT_WIDTH: u32 = 800;
/// Default width for CSS background images.
pub const BACKGROUND_WIDTH: u32 = 1920;
/// Default avatar edge length.
pub const AVATAR_SIZE: u32 = 64;
/// Default `sizes` attribute for responsive images.
pub const DEFAULT_SIZES: &str = "100vw";

/// Candidate widths for responsive `srcset` lists, ascending.
pub const BREAKPOINTS: [u32; 4] = [400, 800, 1200, 1600];

/// Options for a plain `<img>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageOptions {
    pub width: Dimension,
    pub extra_flags: String,
}

impl Default for ImageOptions {
    fn default() -> Self {
        Self {
            width: Dimension::Px(DEFAULT_WIDTH),
            extra_flags: String::new(),
        }
    }
}

/// Options for a responsive `<img>` with a `srcset`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PictureOptions {
    pub sizes: String,
    pub class_name: String,
}

impl Default for PictureOptions {
    fn default() -> Self {
        Self {
            sizes: DEFAULT_SIZES.to_string(),
            class_name: String::new(),
        }
    }
}

/// Options for a background-image URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackgroundOptions {
    pub width: Dimension,
}

impl Default for BackgroundOptions {
    fn default() -> Self {
        Self {
            width: Dimension::Px(BACKGROUND_WIDTH),
        }
    }
}

/// Options for a lazily swapped image with a blurred placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LazyOptions {
    pub width: Dimension,
    pub class_name: String,
}

impl Default for LazyOptions {
    fn default() -> Self {
        Self {
            width: Dimension::Px(DEFAULT_WIDTH),
            class_name: String::new(),
        }
    }
}

/// Options for a square avatar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarOptions {
    pub size: Dimension,
}

impl Default for AvatarOptions {
    fn default() -> Self {
        Self {
            size: Dimension::Px(AVATAR_SIZE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoints_are_ascending() {
        assert!(BREAKPOINTS.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn defaults() {
        assert_eq!(ImageOptions::default().width, Dimension::Px(800));
        assert_eq!(ImageOptions::default().extra_flags, "");
        assert_eq!(PictureOptions::default().sizes, "100vw");
        assert_eq!(PictureOptions::default().class_name, "");
        assert_eq!(BackgroundOptions::default().width, Dimension::Px(1920));
        assert_eq!(LazyOptions::default().width, Dimension::Px(800));
        assert_eq!(AvatarOptions::default().size, Dimension::Px(64));
    }
}
