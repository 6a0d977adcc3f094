//! Configuration options for content extraction.
//!
//! The `Options` struct is the whole configuration surface of the engine.
//! It is compiled once by [`Extractor::new`](crate::Extractor::new) and is
//! never renegotiated per call.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::patterns::DEFAULT_NOISE_PATTERN;
use crate::selector::content::{DEFAULT_CONTENT_SELECTORS, DEFAULT_DENSITY_CANDIDATES};
use crate::selector::discard::DEFAULT_NOISE_SELECTORS;

/// Configuration options for content extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use rs_readermode::Options;
///
/// // Use defaults
/// let options = Options::default();
///
/// // Customize specific fields
/// let options = Options {
///     density_threshold: 40.0,
///     base_url: Some("https://example.com/news/".to_string()),
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Known content selectors, tried in priority order before any scoring.
    ///
    /// Default: article containers and common CMS content classes/ids
    pub content_selectors: Vec<String>,

    /// Selector enumerating the containers considered by the density scan.
    ///
    /// Default: `"div, section, main"`
    pub density_candidates: String,

    /// Minimum density a container must strictly exceed to be selected by
    /// the density scan.
    ///
    /// Default: `25.0`
    pub density_threshold: f64,

    /// Minimum trimmed text length (characters) for a valid candidate.
    ///
    /// Default: `100`
    pub min_text_length: usize,

    /// Maximum ratio of link text to total text for a valid candidate.
    ///
    /// A ratio exactly equal to this value is still accepted.
    ///
    /// Default: `0.5`
    pub max_link_ratio: f64,

    /// Selectors for boilerplate removed from the sanitized copy.
    ///
    /// Default: navigation chrome, ads, sidebars, social widgets, popups,
    /// cookie/newsletter banners, share buttons and embedded scripts
    pub noise_selectors: Vec<String>,

    /// Regular expression matched against `class` and `id`; matching
    /// elements are removed from the sanitized copy. `None` disables it.
    ///
    /// Default: ad/banner/promo/sponsor tokens
    pub noise_pattern: Option<String>,

    /// Attributes kept on sanitized elements. Everything else is removed.
    ///
    /// Default: `["src", "alt", "href", "title"]`
    pub allowed_attributes: Vec<String>,

    /// Alt text given to images that have none.
    ///
    /// Default: `"Image"`
    pub placeholder_alt: String,

    /// Mark images without a `loading` attribute as `loading="lazy"`.
    ///
    /// Default: `true`
    pub lazy_load_images: bool,

    /// Base URL used to make relative `href`/`src` values absolute.
    ///
    /// Default: `None` (values are left as they are)
    pub base_url: Option<String>,

    /// Drop `href`/`src` values using script schemes (`javascript:`,
    /// `vbscript:`) and `data:` URLs outside of images.
    ///
    /// Default: `true`
    pub strip_unsafe_urls: bool,

    /// Reading speed used for the reading time estimate.
    ///
    /// Default: `200`
    pub words_per_minute: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            content_selectors: DEFAULT_CONTENT_SELECTORS.iter().map(ToString::to_string).collect(),
            density_candidates: DEFAULT_DENSITY_CANDIDATES.to_string(),
            density_threshold: 25.0,
            min_text_length: 100,
            max_link_ratio: 0.5,
            noise_selectors: DEFAULT_NOISE_SELECTORS.iter().map(ToString::to_string).collect(),
            noise_pattern: Some(DEFAULT_NOISE_PATTERN.to_string()),
            allowed_attributes: ["src", "alt", "href", "title"]
                .iter()
                .map(ToString::to_string)
                .collect(),
            placeholder_alt: "Image".to_string(),
            lazy_load_images: true,
            base_url: None,
            strip_unsafe_urls: true,
            words_per_minute: 200,
        }
    }
}

impl Options {
    /// Load options from a JSON document. Missing fields take their defaults.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rs_readermode::Options;
    ///
    /// let options = Options::from_json(r#"{"density_threshold": 30.0}"#)?;
    /// assert_eq!(options.density_threshold, 30.0);
    /// assert_eq!(options.min_text_length, 100);
    /// # Ok::<(), rs_readermode::Error>(())
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::InvalidConfig(e.to_string()))
    }
}
