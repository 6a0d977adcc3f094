//! Compiled regex patterns used by the extraction pipeline.
//!
//! Static patterns are compiled once using `LazyLock`. The noise pattern is
//! configurable, so only its default source text lives here.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

/// Default class/id pattern for advertisement, banner and promotion blocks.
///
/// `banner`, `promo`, `advert` and `sponsor` match as substrings, so
/// `topbanner` and `sitepromo` are caught. The short `ad`/`ads` token must
/// stand alone or be delimited by `-`, `_` or whitespace, so `ad-slot`
/// matches while `header`, `shadow` and `download` do not.
pub const DEFAULT_NOISE_PATTERN: &str =
    r"(?i)(?:^|[\s_-])ads?(?:$|[\s_-])|adsbygoogle|advert|banner|promo|sponsor";

/// Matches runs of whitespace, used for word counting.
pub static WHITESPACE_NORMALIZE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+").expect("WHITESPACE_NORMALIZE regex")
});

/// Matches URL schemes that execute script when followed.
pub static SCRIPT_SCHEME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(?:javascript|vbscript|livescript)\s*:").expect("SCRIPT_SCHEME regex")
});

/// Collapse whitespace runs into single spaces and trim.
#[must_use]
pub fn normalize_whitespace(text: &str) -> String {
    WHITESPACE_NORMALIZE.replace_all(text, " ").trim().to_string()
}
