//! Noise selectors
//!
//! Boilerplate removed from a sanitized copy: navigation chrome, ads,
//! sidebars, social widgets, popups and overlays, cookie and newsletter
//! banners, share-button clusters, and embedded script or style blocks.
//! Class/id substring tests that CSS cannot express well live in
//! [`NoisePattern`].

use dom_query::Selection;
use regex::Regex;

use crate::dom;
use crate::error::Result;
use crate::selector::query_all;

/// Default noise selectors.
pub const DEFAULT_NOISE_SELECTORS: &[&str] = &[
    // Navigation chrome
    "nav",
    "header",
    "footer",
    "[role=\"navigation\"]",
    "[role=\"banner\"]",
    "[role=\"contentinfo\"]",
    ".breadcrumb",
    ".breadcrumbs",
    ".pagination",
    // Sidebars
    "aside",
    ".sidebar",
    "#sidebar",
    "[role=\"complementary\"]",
    // Ads
    ".ad",
    ".ads",
    ".advert",
    ".advertisement",
    "ins.adsbygoogle",
    "[id^=\"google_ads\"]",
    "[data-ad]",
    // Social widgets and share buttons
    ".social",
    ".social-links",
    ".social-share",
    ".share",
    ".share-buttons",
    ".sharing",
    "[class*=\"share-\"]",
    // Popups, modals, overlays
    ".popup",
    ".modal",
    ".overlay",
    "[role=\"dialog\"]",
    "dialog",
    // Cookie and newsletter banners
    "[class*=\"cookie\"]",
    "[id*=\"cookie\"]",
    "[class*=\"consent\"]",
    "[class*=\"newsletter\"]",
    "[id*=\"newsletter\"]",
    ".subscribe",
    // Related/recommended widgets and comments
    ".related",
    ".related-posts",
    ".recommended",
    ".comments",
    "#comments",
    // Executable and non-content embeds
    "script",
    "style",
    "noscript",
    "iframe",
    "object",
    "embed",
    "form",
    "template",
];

/// Compiled class/id pattern for ad, banner and promo containers.
#[derive(Debug, Clone)]
pub struct NoisePattern {
    regex: Regex,
}

impl NoisePattern {
    /// Compile a noise pattern.
    pub fn new(pattern: &str) -> Result<Self> {
        Ok(Self {
            regex: Regex::new(pattern)?,
        })
    }

    /// Whether the element's `class` or `id` matches.
    #[must_use]
    pub fn matches(&self, sel: &Selection) -> bool {
        ["class", "id"].iter().any(|name| {
            dom::get_attribute(sel, name).is_some_and(|value| self.regex.is_match(&value))
        })
    }

    /// All matching descendants of `root`, in document order.
    #[must_use]
    pub fn find_all<'a>(&self, root: &Selection<'a>) -> Vec<Selection<'a>> {
        query_all(root, |sel| self.matches(sel))
    }
}
