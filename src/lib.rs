//! # rs-readermode
//!
//! Reading-mode content extraction for web pages.
//!
//! Given a parsed page, the crate locates the element holding the main
//! content and produces a sanitized, detached copy of it that is safe to
//! re-render: navigation, ads, scripts and other noise removed, attributes
//! stripped to an allow-list, images normalized for lazy display.
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_readermode::extract;
//!
//! let html = format!(
//!     "<html><head><title>My Article</title></head><body><nav>Menu</nav>\
//!      <article><p>{}</p></article></body></html>",
//!     "Main content here. ".repeat(10)
//! );
//!
//! let result = extract(&html)?;
//! assert_eq!(result.title.as_deref(), Some("My Article"));
//! assert!(!result.fragment.html().contains("Menu"));
//! # Ok::<(), rs_readermode::Error>(())
//! ```
//!
//! ## Locating content
//!
//! The locator runs three stages and stops at the first that succeeds:
//!
//! 1. **Selector**: known content selectors, in priority order
//! 2. **Density**: block elements scored by text per descendant
//! 3. **Largest block**: the largest valid block in the body
//!
//! Each candidate must carry enough text and not be mostly links.
//!
//! ## Sessions
//!
//! [`ReadingSession`] tracks whether the reading view is shown and reports
//! changes to registered [`ReaderObserver`]s.

mod error;
mod options;
mod patterns;
mod result;

/// DOM adapter over `dom_query`.
pub mod dom;

/// Compiled selector lists and the default content and noise selectors.
pub mod selector;

/// Locator, sanitizer and the [`Extractor`] that combines them.
pub mod extractor;

/// Density scoring for locator candidates.
pub mod scoring;

/// Link density and content validity.
pub mod link_density;

/// URL validation and resolution.
pub mod url_utils;

/// Character encoding detection and transcoding.
pub mod encoding;

/// Reading session events and observers.
pub mod events;

/// Reading sessions and scroll progress.
pub mod session;

pub use error::{Error, Result};
pub use events::{ReaderEvent, ReaderMode, ReaderObserver};
pub use extractor::{Candidate, Extractor, LocateStage};
pub use options::Options;
pub use patterns::DEFAULT_NOISE_PATTERN;
pub use result::{reading_minutes, ExtractResult, Fragment, ReaderView};
pub use session::{reading_progress, ReadingSession};

/// Extracts the main content of an HTML document using default options.
///
/// # Example
///
/// ```rust
/// use rs_readermode::{extract, Error};
///
/// // Too little text for a reading view
/// let html = "<html><body><article>Content</article></body></html>";
/// assert!(matches!(extract(html), Err(Error::NoContent)));
/// ```
pub fn extract(html: &str) -> Result<ExtractResult> {
    extract_with_options(html, &Options::default())
}

/// Extracts the main content of an HTML document with custom options.
///
/// Builds a one-off [`Extractor`]; construct one directly to reuse the
/// compiled selectors across pages.
///
/// # Example
///
/// ```rust
/// use rs_readermode::{extract_with_options, Options};
///
/// let html = "<html><body><article><p>Short but enough here.</p></article></body></html>";
/// let options = Options {
///     min_text_length: 10,
///     ..Options::default()
/// };
/// let result = extract_with_options(html, &options)?;
/// assert_eq!(result.word_count, 4);
/// # Ok::<(), rs_readermode::Error>(())
/// ```
pub fn extract_with_options(html: &str, options: &Options) -> Result<ExtractResult> {
    Extractor::new(options.clone())?.extract_html(html)
}

/// Extracts the main content of raw HTML bytes.
///
/// The charset is detected from a byte order mark or `<meta>` declaration
/// and defaults to UTF-8. Invalid sequences become U+FFFD.
///
/// # Example
///
/// ```rust
/// use rs_readermode::{extract_bytes_with_options, Options};
///
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"></head>\
///              <body><article><p>Caf\xE9 au lait</p></article></body></html>";
/// let options = Options { min_text_length: 5, ..Options::default() };
/// let result = extract_bytes_with_options(html, &options)?;
/// assert!(result.fragment.text().contains("Café"));
/// # Ok::<(), rs_readermode::Error>(())
/// ```
pub fn extract_bytes(html: &[u8]) -> Result<ExtractResult> {
    extract_bytes_with_options(html, &Options::default())
}

/// Extracts the main content of raw HTML bytes with custom options.
pub fn extract_bytes_with_options(html: &[u8], options: &Options) -> Result<ExtractResult> {
    let html = encoding::transcode_to_utf8(html);
    extract_with_options(&html, options)
}
