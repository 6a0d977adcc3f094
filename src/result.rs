//! Result types for extraction output.
//!
//! A [`Fragment`] is the sanitized copy of the main content. It owns its own
//! document, shares nothing with the page it came from, and only offers
//! read access.

use dom_query::{Document, Selection};
use serde::{Deserialize, Serialize};

use crate::dom;
use crate::extractor::LocateStage;
use crate::patterns::normalize_whitespace;

/// Sanitized, detached copy of a page's main content.
pub struct Fragment {
    doc: Document,
    tag: String,
}

impl Fragment {
    pub(crate) fn new(doc: Document, tag: String) -> Self {
        Self { doc, tag }
    }

    fn root(&self) -> Option<Selection<'_>> {
        dom::cloned_root(&self.doc, &self.tag)
    }

    /// Tag name of the fragment root.
    #[must_use]
    pub fn tag_name(&self) -> &str {
        &self.tag
    }

    /// Serialized fragment, root element included.
    #[must_use]
    pub fn html(&self) -> String {
        self.root()
            .map(|root| dom::outer_html(&root).to_string())
            .unwrap_or_default()
    }

    /// Serialized children of the fragment root.
    #[must_use]
    pub fn inner_html(&self) -> String {
        self.root()
            .map(|root| dom::inner_html(&root).to_string())
            .unwrap_or_default()
    }

    /// Trimmed text content.
    #[must_use]
    pub fn text(&self) -> String {
        self.root()
            .map(|root| dom::text_content(&root).trim().to_string())
            .unwrap_or_default()
    }

    /// Trimmed text length in characters.
    #[must_use]
    pub fn text_length(&self) -> usize {
        self.root().map_or(0, |root| dom::trimmed_text_length(&root))
    }

    /// Number of whitespace-separated words.
    #[must_use]
    pub fn word_count(&self) -> usize {
        normalize_whitespace(&self.text()).split(' ').filter(|w| !w.is_empty()).count()
    }

    /// Number of elements under the root matching a CSS selector.
    ///
    /// Invalid selectors match nothing.
    #[must_use]
    pub fn count(&self, css: &str) -> usize {
        let Ok(matcher) = dom::Matcher::new(css) else {
            return 0;
        };
        self.root().map_or(0, |root| dom::select_matching(&root, &matcher).length())
    }

    /// Attributes of the fragment root.
    #[must_use]
    pub fn root_attributes(&self) -> Vec<(String, String)> {
        self.root().map(|root| dom::get_all_attributes(&root)).unwrap_or_default()
    }

    /// Attributes of every element under the root matching a CSS selector,
    /// in document order.
    #[must_use]
    pub fn attributes_of(&self, css: &str) -> Vec<Vec<(String, String)>> {
        let Ok(matcher) = dom::Matcher::new(css) else {
            return Vec::new();
        };
        self.root()
            .map(|root| {
                dom::select_matching(&root, &matcher)
                    .iter()
                    .map(|el| dom::get_all_attributes(&el))
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl PartialEq for Fragment {
    /// Structural equivalence: same serialized markup.
    fn eq(&self, other: &Self) -> bool {
        self.tag == other.tag && self.html() == other.html()
    }
}

impl std::fmt::Debug for Fragment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Fragment")
            .field("tag", &self.tag)
            .field("text_length", &self.text_length())
            .finish()
    }
}

/// Result of extracting the reading view of a page.
#[derive(Debug)]
pub struct ExtractResult {
    /// Sanitized main content.
    pub fragment: Fragment,

    /// Locator stage that found the content.
    pub stage: LocateStage,

    /// Page title: the document `<title>`, else the first `<h1>` of the content.
    pub title: Option<String>,

    /// Word count of the sanitized content.
    pub word_count: usize,

    /// Estimated reading time in whole minutes (rounded up).
    pub reading_minutes: usize,
}

impl ExtractResult {
    /// Serializable summary including the fragment markup and text.
    #[must_use]
    pub fn to_view(&self) -> ReaderView {
        ReaderView {
            title: self.title.clone(),
            stage: self.stage,
            html: self.fragment.html(),
            text: self.fragment.text(),
            word_count: self.word_count,
            reading_minutes: self.reading_minutes,
        }
    }
}

/// Owned, serializable snapshot of an [`ExtractResult`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReaderView {
    /// Page title.
    pub title: Option<String>,
    /// Locator stage that found the content.
    pub stage: LocateStage,
    /// Sanitized markup.
    pub html: String,
    /// Plain text.
    pub text: String,
    /// Word count.
    pub word_count: usize,
    /// Estimated reading time in minutes.
    pub reading_minutes: usize,
}

/// Reading time in whole minutes, rounded up. Zero words read in zero minutes.
#[must_use]
pub fn reading_minutes(word_count: usize, words_per_minute: usize) -> usize {
    if word_count == 0 {
        return 0;
    }
    word_count.div_ceil(words_per_minute.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fragment(html: &str, tag: &str) -> Fragment {
        let doc = dom::parse(html);
        let (copy, tag) = dom::clone_element(&doc.select(tag));
        Fragment::new(copy, tag)
    }

    #[test]
    fn test_fragment_accessors() {
        let f = fragment(r#"<div title="t"><p>One two</p><p>three <img src="a.png"></p></div>"#, "div");

        assert_eq!(f.tag_name(), "div");
        assert_eq!(f.text(), "One twothree");
        assert_eq!(f.count("p"), 2);
        assert_eq!(f.count("img"), 1);
        assert_eq!(f.root_attributes(), vec![("title".to_string(), "t".to_string())]);
        assert!(f.html().starts_with("<div"));
        assert!(f.inner_html().starts_with("<p>"));
    }

    #[test]
    fn test_word_count() {
        let f = fragment("<section><p>Alpha beta</p>\n<p>gamma   delta epsilon</p></section>", "section");
        assert_eq!(f.word_count(), 5);
    }

    #[test]
    fn test_invalid_selector_matches_nothing() {
        let f = fragment("<div><p>x</p></div>", "div");
        assert_eq!(f.count("p[["), 0);
        assert!(f.attributes_of("p[[").is_empty());
    }

    #[test]
    fn test_fragment_equality_is_structural() {
        let a = fragment("<div><p>same</p></div>", "div");
        let b = fragment("<body><div><p>same</p></div></body>", "div");
        let c = fragment("<div><p>other</p></div>", "div");

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_reading_minutes_rounds_up() {
        assert_eq!(reading_minutes(0, 200), 0);
        assert_eq!(reading_minutes(1, 200), 1);
        assert_eq!(reading_minutes(200, 200), 1);
        assert_eq!(reading_minutes(201, 200), 2);
        assert_eq!(reading_minutes(10, 0), 10);
    }
}
