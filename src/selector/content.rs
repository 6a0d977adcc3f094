//! Content selectors
//!
//! Known containers for the main content of a page, in priority order.
//! Semantic elements come first, then the class and id names used by the
//! common CMS themes, then generic "content" wrappers.

/// Stage-one selectors, highest priority first.
pub const DEFAULT_CONTENT_SELECTORS: &[&str] = &[
    "article",
    "[role=\"main\"]",
    "main",
    "[itemprop=\"articleBody\"]",
    ".post-content",
    ".entry-content",
    ".article-content",
    ".article-body",
    ".post-body",
    ".story-body",
    ".content-body",
    "#article-body",
    "#main-content",
    ".main-content",
    "#content",
    ".content",
];

/// Containers enumerated by the density scan.
pub const DEFAULT_DENSITY_CANDIDATES: &str = "div, section, main";
