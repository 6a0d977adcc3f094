//! Main content locator.
//!
//! Three stages run in order and the first one to produce an element wins:
//!
//! 1. **Selector**: known content selectors in priority order, each match
//!    gated by the validity filter.
//! 2. **Density**: the densest container strictly above the threshold.
//! 3. **Largest block**: the valid element with the most text.
//!
//! The locator only reads the document. Absence of a candidate is a normal
//! outcome, never an error.

use std::fmt;

use dom_query::{Document, Selection};
use serde::{Deserialize, Serialize};

use crate::dom;
use crate::error::Result;
use crate::link_density::{is_valid_content, ValidityThresholds};
use crate::options::Options;
use crate::scoring::density_score;
use crate::selector::SelectorList;

/// Elements enumerated by the largest-block scan: the body and everything in it.
const LARGEST_BLOCK_SCOPE: &str = "body, body *";

/// The locator stage that produced a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocateStage {
    /// Matched a known content selector.
    Selector,
    /// Won the text-density scan.
    Density,
    /// Largest valid block of text.
    LargestBlock,
}

impl fmt::Display for LocateStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Selector => "selector",
            Self::Density => "density",
            Self::LargestBlock => "largest_block",
        })
    }
}

/// An element proposed as the page's main content.
///
/// Borrows the document it was found in and only exposes read access to
/// it; the sanitizer works on its own deep copy.
#[derive(Clone)]
pub struct Candidate<'a> {
    element: Selection<'a>,
    stage: LocateStage,
}

impl<'a> Candidate<'a> {
    pub(crate) fn new(element: Selection<'a>, stage: LocateStage) -> Self {
        Self { element, stage }
    }

    pub(crate) fn element(&self) -> &Selection<'a> {
        &self.element
    }

    /// Stage that produced this candidate.
    #[must_use]
    pub fn stage(&self) -> LocateStage {
        self.stage
    }

    /// Lowercase tag name.
    #[must_use]
    pub fn tag_name(&self) -> String {
        dom::tag_name(&self.element).unwrap_or_default()
    }

    /// Attribute value on the candidate element itself.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<String> {
        dom::get_attribute(&self.element, name)
    }

    /// Trimmed text content.
    #[must_use]
    pub fn text(&self) -> String {
        dom::text_content(&self.element).trim().to_string()
    }

    /// Trimmed text length in characters.
    #[must_use]
    pub fn text_length(&self) -> usize {
        dom::trimmed_text_length(&self.element)
    }

    /// Outer HTML of the candidate as it is in the live document.
    #[must_use]
    pub fn html(&self) -> String {
        dom::outer_html(&self.element).to_string()
    }

    /// Text of the first `h1` inside the candidate, if any.
    #[must_use]
    pub fn heading(&self) -> Option<String> {
        dom::first(&self.element.select("h1"))
            .map(|h1| dom::text_content(&h1).trim().to_string())
            .filter(|t| !t.is_empty())
    }
}

impl fmt::Debug for Candidate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Candidate")
            .field("tag", &self.tag_name())
            .field("stage", &self.stage)
            .field("text_length", &self.text_length())
            .finish()
    }
}

/// Three-stage main content locator.
#[derive(Debug, Clone)]
pub struct Locator {
    content_selectors: SelectorList,
    density_candidates: SelectorList,
    density_threshold: f64,
    validity: ValidityThresholds,
}

impl Locator {
    /// Build a locator, compiling all configured selectors.
    pub fn new(options: &Options) -> Result<Self> {
        Ok(Self {
            content_selectors: SelectorList::compile(&options.content_selectors)?,
            density_candidates: SelectorList::compile([options.density_candidates.as_str()])?,
            density_threshold: options.density_threshold,
            validity: ValidityThresholds {
                min_text_length: options.min_text_length,
                max_link_ratio: options.max_link_ratio,
            },
        })
    }

    /// Validity thresholds used by stages one and three.
    #[must_use]
    pub fn validity(&self) -> &ValidityThresholds {
        &self.validity
    }

    /// Locate the main content of a document.
    #[must_use]
    pub fn locate<'a>(&self, doc: &'a Document) -> Option<Candidate<'a>> {
        let found = self
            .by_selector(doc)
            .or_else(|| self.by_density(doc))
            .or_else(|| self.largest_block(doc));

        match &found {
            Some(candidate) => tracing::debug!(
                stage = %candidate.stage(),
                tag = %candidate.tag_name(),
                text_length = candidate.text_length(),
                "main content located"
            ),
            None => tracing::debug!("no main content candidate found"),
        }

        found
    }

    /// Stage one: first valid match of the known content selectors.
    #[must_use]
    pub fn by_selector<'a>(&self, doc: &'a Document) -> Option<Candidate<'a>> {
        for (css, matcher) in self.content_selectors.iter() {
            for element in doc.select_matcher(matcher).iter() {
                if is_valid_content(Some(&element), &self.validity) {
                    tracing::trace!(selector = css, "content selector matched");
                    return Some(Candidate::new(element, LocateStage::Selector));
                }
            }
        }
        None
    }

    /// Stage two: densest container whose score is strictly above the
    /// threshold. The first of several equal scores wins.
    #[must_use]
    pub fn by_density<'a>(&self, doc: &'a Document) -> Option<Candidate<'a>> {
        let mut best: Option<(Selection<'a>, f64)> = None;

        for (_, matcher) in self.density_candidates.iter() {
            for element in doc.select_matcher(matcher).iter() {
                let score = density_score(&element);
                let bar = best.as_ref().map_or(self.density_threshold, |(_, s)| *s);
                if score > bar {
                    tracing::trace!(score, "new density leader");
                    best = Some((element, score));
                }
            }
        }

        best.map(|(element, _)| Candidate::new(element, LocateStage::Density))
    }

    /// Stage three: the valid element with the longest text.
    /// The first of several equal lengths wins.
    #[must_use]
    pub fn largest_block<'a>(&self, doc: &'a Document) -> Option<Candidate<'a>> {
        let mut best: Option<(Selection<'a>, usize)> = None;

        for element in doc.select(LARGEST_BLOCK_SCOPE).iter() {
            let length = dom::trimmed_text_length(&element);
            let longer = best.as_ref().map_or(true, |(_, l)| length > *l);
            if longer && is_valid_content(Some(&element), &self.validity) {
                best = Some((element, length));
            }
        }

        best.map(|(element, _)| Candidate::new(element, LocateStage::LargestBlock))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn locator() -> Locator {
        Locator::new(&Options::default()).expect("default options")
    }

    fn prose(len: usize) -> String {
        "word ".repeat(len / 5).trim_end().to_string()
    }

    #[test]
    fn test_empty_document_has_no_candidate() {
        let doc = dom::parse("");
        assert!(locator().locate(&doc).is_none());
    }

    #[test]
    fn test_selector_stage_wins_first() {
        let doc = dom::parse(&format!(
            "<body><div class=\"content\">{}</div><article>{}</article></body>",
            prose(400),
            prose(200)
        ));
        let candidate = locator().locate(&doc).expect("candidate");

        assert_eq!(candidate.stage(), LocateStage::Selector);
        assert_eq!(candidate.tag_name(), "article");
    }

    #[test]
    fn test_selector_match_must_be_valid() {
        let doc = dom::parse(&format!(
            "<body><article>short</article><main id=\"m\">{}</main></body>",
            prose(300)
        ));
        let candidate = locator().by_selector(&doc).expect("candidate");
        assert_eq!(candidate.attribute("id").as_deref(), Some("m"));
    }

    #[test]
    fn test_later_match_of_same_selector_is_considered() {
        let doc = dom::parse(&format!(
            "<body><article id=\"a\">tiny</article><article id=\"b\">{}</article></body>",
            prose(300)
        ));
        let candidate = locator().by_selector(&doc).expect("candidate");
        assert_eq!(candidate.attribute("id").as_deref(), Some("b"));
    }

    #[test]
    fn test_density_stage_picks_densest() {
        let doc = dom::parse(&format!(
            "<body><div id=\"sparse\"><p>{}</p><p>a</p><p>b</p><p>c</p></div><div id=\"dense\"><p>{}</p></div></body>",
            prose(200),
            prose(300)
        ));
        let loc = locator();
        assert!(loc.by_selector(&doc).is_none());

        let candidate = loc.locate(&doc).expect("candidate");
        assert_eq!(candidate.stage(), LocateStage::Density);
        assert_eq!(candidate.attribute("id").as_deref(), Some("dense"));
    }

    #[test]
    fn test_density_ties_keep_first() {
        let doc = dom::parse(&format!(
            "<body><section id=\"one\"><p>{0}</p></section><section id=\"two\"><p>{0}</p></section></body>",
            prose(200)
        ));
        let candidate = locator().by_density(&doc).expect("candidate");
        assert_eq!(candidate.attribute("id").as_deref(), Some("one"));
    }

    #[test]
    fn test_density_at_threshold_is_rejected() {
        // 25 characters over one descendant: exactly the threshold
        let doc = dom::parse("<body><div><p>abcdefghijklmnopqrstuvwxy</p></div></body>");
        assert!(locator().by_density(&doc).is_none());
    }

    #[test]
    fn test_largest_block_fallback() {
        // Text spread over many elements keeps density low, no selector matches.
        // The link-heavy menu makes the body as a whole invalid.
        let items: String = (0..30).map(|i| format!("<li>Item number {i:02}</li>")).collect();
        let menu: String = (0..50).map(|i| format!("<a href=\"/{i}\">Menu {i:04}</a>")).collect();
        let doc = dom::parse(&format!("<body><nav>{menu}</nav><ul id=\"list\">{items}</ul></body>"));

        let loc = locator();
        assert!(loc.by_selector(&doc).is_none());
        assert!(loc.by_density(&doc).is_none());

        let candidate = loc.locate(&doc).expect("candidate");
        assert_eq!(candidate.stage(), LocateStage::LargestBlock);
        assert_eq!(candidate.attribute("id").as_deref(), Some("list"));
    }

    #[test]
    fn test_largest_block_includes_body() {
        let doc = dom::parse(&format!("<body>{}<span>x</span></body>", prose(200)));
        let candidate = locator().locate(&doc).expect("candidate");

        assert_eq!(candidate.stage(), LocateStage::LargestBlock);
        assert_eq!(candidate.tag_name(), "body");
    }

    #[test]
    fn test_largest_block_skips_link_farms() {
        let links: String = (0..30).map(|i| format!("<li><a href=\"/{i}\">Link number {i:02}</a></li>")).collect();
        let doc = dom::parse(&format!("<body><ul>{links}</ul></body>"));
        assert!(locator().locate(&doc).is_none());
    }

    #[test]
    fn test_locate_does_not_mutate_document() {
        let html = format!("<body><article class=\"x\" onclick=\"f()\"><nav>menu</nav>{}</article></body>", prose(300));
        let doc = dom::parse(&html);
        let before = doc.html().to_string();

        let _ = locator().locate(&doc);
        assert_eq!(doc.html().to_string(), before);
    }

    #[test]
    fn test_candidate_heading() {
        let doc = dom::parse(&format!("<article><h1> Title </h1><p>{}</p></article>", prose(200)));
        let candidate = locator().locate(&doc).expect("candidate");
        assert_eq!(candidate.heading().as_deref(), Some("Title"));
    }

    #[test]
    fn test_invalid_density_candidates_rejected() {
        let options = Options {
            density_candidates: "div[".to_string(),
            ..Options::default()
        };
        assert!(matches!(Locator::new(&options), Err(Error::InvalidSelector(_))));
    }
}
