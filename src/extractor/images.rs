//! Image normalization for sanitized fragments.
//!
//! Images are made lazy, accessible and unstyled. Lazy-loading pages often
//! park the real source in a `data-src*` attribute behind a placeholder
//! `src`; that source is promoted before attribute stripping would drop it.

use dom_query::Selection;

use crate::dom;

/// Lazy-source attributes, in order of preference.
const LAZY_SOURCE_ATTRIBUTES: &[&str] = &["data-src", "data-lazy-src", "data-original", "data-srcset"];

/// How images in a fragment are normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePolicy {
    /// Alt text given to images without any.
    pub placeholder_alt: String,
    /// Add `loading="lazy"` when no loading behavior is set.
    pub lazy_load: bool,
}

impl Default for ImagePolicy {
    fn default() -> Self {
        Self {
            placeholder_alt: "Image".to_string(),
            lazy_load: true,
        }
    }
}

/// Check if a URL points to an image file by extension.
fn is_image_file(src: &str) -> bool {
    let path = src.split(['?', '#']).next().unwrap_or(src);
    let ext = path.rsplit('.').next().unwrap_or("").to_ascii_lowercase();

    matches!(
        ext.as_str(),
        "jpg" | "jpeg" | "png" | "gif" | "webp" | "svg" | "bmp" | "ico" | "tiff" | "tif" | "avif"
    )
}

/// Whether `src` is missing or only a placeholder (empty or inline data).
fn is_placeholder_source(src: Option<&str>) -> bool {
    src.map_or(true, |s| {
        let s = s.trim();
        s.is_empty() || s.starts_with("data:")
    })
}

/// Move a lazy-loaded image source into `src`.
///
/// Only replaces a missing or placeholder `src`. `data-srcset` values are
/// reduced to their first candidate URL.
pub fn promote_lazy_source(img: &Selection) {
    if !is_placeholder_source(dom::get_attribute(img, "src").as_deref()) {
        return;
    }

    for name in LAZY_SOURCE_ATTRIBUTES {
        let Some(value) = dom::get_attribute(img, name) else {
            continue;
        };
        let candidate = value
            .split(',')
            .next()
            .and_then(|entry| entry.split_whitespace().next())
            .unwrap_or_default();

        if is_image_file(candidate) {
            dom::set_attribute(img, "src", candidate);
            return;
        }
    }
}

/// Normalize one image element.
pub fn normalize_image(img: &Selection, policy: &ImagePolicy) {
    if policy.lazy_load && !dom::has_attribute(img, "loading") {
        dom::set_attribute(img, "loading", "lazy");
    }

    let has_alt = dom::get_attribute(img, "alt").is_some_and(|alt| !alt.trim().is_empty());
    if !has_alt {
        dom::set_attribute(img, "alt", &policy.placeholder_alt);
    }

    dom::remove_attribute(img, "style");
}

/// Normalize every image element under `root`.
pub fn normalize_images(root: &Selection, policy: &ImagePolicy) {
    for img in root.select("img").iter() {
        normalize_image(&img, policy);
    }
}
