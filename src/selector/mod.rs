//! Selector Infrastructure
//!
//! Ordered CSS selector lists are compiled once into [`SelectorList`]s.
//! Tests that CSS cannot express (substring patterns over `class` and `id`)
//! are plain predicates run through [`query_all`].

use dom_query::{Matcher, Selection};

use crate::dom;
use crate::error::{Error, Result};

pub mod content;
pub mod discard;

/// An ordered list of compiled CSS selectors.
///
/// Order is significant: it encodes priority for content selectors.
#[derive(Clone)]
pub struct SelectorList {
    entries: Vec<(String, Matcher)>,
}

impl SelectorList {
    /// Compile every selector, failing on the first one that does not parse.
    pub fn compile<I, S>(selectors: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = selectors
            .into_iter()
            .map(|css| {
                let css = css.as_ref();
                Matcher::new(css)
                    .map(|matcher| (css.to_string(), matcher))
                    .map_err(|_| Error::InvalidSelector(css.to_string()))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { entries })
    }

    /// Selector sources, in priority order.
    pub fn sources(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(css, _)| css.as_str())
    }

    /// Compiled selectors with their sources, in priority order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Matcher)> {
        self.entries.iter().map(|(css, m)| (css.as_str(), m))
    }

    /// Number of selectors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Debug for SelectorList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.sources()).finish()
    }
}

/// Query for all descendants matching the rule, in document order.
#[must_use]
pub fn query_all<'a, F>(root: &Selection<'a>, rule: F) -> Vec<Selection<'a>>
where
    F: Fn(&Selection) -> bool,
{
    dom::descendants(root).iter().filter(|sel| rule(sel)).collect()
}
