//! Link Density and Validity
//!
//! Measures how much of an element's text sits inside hyperlinks and gates
//! candidate acceptance on it. Navigation blocks and link farms are mostly
//! anchor text; article bodies are not.

use dom_query::Selection;

use crate::dom;

/// Thresholds for the validity filter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidityThresholds {
    /// Minimum trimmed text length (characters).
    pub min_text_length: usize,
    /// Maximum accepted ratio of anchor text to total text.
    pub max_link_ratio: f64,
}

impl Default for ValidityThresholds {
    fn default() -> Self {
        Self {
            min_text_length: 100,
            max_link_ratio: 0.5,
        }
    }
}

/// Summed trimmed text length of every hyperlink under the element.
#[must_use]
pub fn anchor_text_length(element: &Selection) -> usize {
    element
        .select("a")
        .iter()
        .map(|link| dom::trimmed_text_length(&link))
        .sum()
}

/// Ratio of anchor text length to total text length.
///
/// Elements without text have a ratio of zero.
#[must_use]
pub fn link_ratio(anchor_length: usize, text_length: usize) -> f64 {
    if text_length == 0 {
        return 0.0;
    }
    anchor_length as f64 / text_length as f64
}

/// Check whether an element is plausible main content.
///
/// Fails when the element is absent, when its trimmed text is shorter than
/// `min_text_length`, or when its link ratio is strictly above
/// `max_link_ratio`.
#[must_use]
pub fn is_valid_content(element: Option<&Selection>, thresholds: &ValidityThresholds) -> bool {
    let Some(element) = element else {
        return false;
    };
    if !element.exists() {
        return false;
    }

    let text_length = dom::trimmed_text_length(element);
    if text_length < thresholds.min_text_length {
        return false;
    }

    let ratio = link_ratio(anchor_text_length(element), text_length);
    ratio <= thresholds.max_link_ratio
}
