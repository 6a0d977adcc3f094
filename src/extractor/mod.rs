//! Main content extraction module.
//!
//! # Module Structure
//!
//! - `locator`: three-stage main content locator and the `Candidate` type
//! - `sanitizer`: deep copy, noise removal, attribute stripping
//! - `images`: image normalization for sanitized fragments
//!
//! [`Extractor`] ties them together. It is an explicitly constructed,
//! caller-owned value: build one per configuration and reuse it.
//!
//! # Usage
//!
//! ```rust
//! use rs_readermode::{dom, Extractor, Options};
//!
//! let extractor = Extractor::new(Options::default())?;
//! let doc = dom::parse("<html><body><article><p>Too short.</p></article></body></html>");
//!
//! // Locate, then sanitize. Both return Option.
//! let candidate = extractor.locate(&doc);
//! let fragment = extractor.sanitize(candidate.as_ref());
//! assert!(fragment.is_none());
//! # Ok::<(), rs_readermode::Error>(())
//! ```

pub mod images;
pub mod locator;
pub mod sanitizer;

pub use locator::{Candidate, LocateStage, Locator};
pub use sanitizer::Sanitizer;

use dom_query::Document;

use crate::dom;
use crate::error::{Error, Result};
use crate::options::Options;
use crate::result::{reading_minutes, ExtractResult, Fragment};

/// Locator and sanitizer built from one set of options.
#[derive(Debug, Clone)]
pub struct Extractor {
    options: Options,
    locator: Locator,
    sanitizer: Sanitizer,
}

impl Extractor {
    /// Validate and compile the options.
    pub fn new(options: Options) -> Result<Self> {
        let locator = Locator::new(&options)?;
        let sanitizer = Sanitizer::new(&options)?;
        Ok(Self {
            options,
            locator,
            sanitizer,
        })
    }

    /// Options this extractor was built from.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Locate the main content. Read-only over `doc`.
    #[must_use]
    pub fn locate<'a>(&self, doc: &'a Document) -> Option<Candidate<'a>> {
        self.locator.locate(doc)
    }

    /// Sanitize a located candidate. `None` in gives `None` out.
    #[must_use]
    pub fn sanitize(&self, candidate: Option<&Candidate<'_>>) -> Option<Fragment> {
        self.sanitizer.sanitize(candidate)
    }

    /// Locate and sanitize the main content of a parsed document.
    pub fn extract(&self, doc: &Document) -> Result<ExtractResult> {
        let candidate = self.locate(doc).ok_or(Error::NoContent)?;
        let fragment = self.sanitizer.sanitize_candidate(&candidate);

        let title = document_title(doc).or_else(|| candidate.heading());
        let word_count = fragment.word_count();

        Ok(ExtractResult {
            stage: candidate.stage(),
            title,
            word_count,
            reading_minutes: reading_minutes(word_count, self.options.words_per_minute),
            fragment,
        })
    }

    /// Parse and extract an HTML string.
    pub fn extract_html(&self, html: &str) -> Result<ExtractResult> {
        self.extract(&dom::parse(html))
    }
}

/// Trimmed, whitespace-normalized text of the document `<title>`.
fn document_title(doc: &Document) -> Option<String> {
    dom::first(&doc.select("head title"))
        .map(|t| crate::patterns::normalize_whitespace(&dom::text_content(&t)))
        .filter(|t| !t.is_empty())
}
