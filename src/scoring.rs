//! Text density scoring.
//!
//! Density is non-link text per descendant element:
//!
//! ```text
//! density = (text_length - anchor_text_length) / max(1, descendant_count)
//! ```
//!
//! Content-rich blocks carry a lot of prose in few elements; layout wrappers
//! and link lists carry little text spread over many elements.

use dom_query::Selection;

use crate::dom;
use crate::link_density::anchor_text_length;

/// Raw measurements behind a density score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DensityMetrics {
    /// Trimmed character count of all text under the element.
    pub text_length: usize,
    /// Summed trimmed character count of all hyperlink text.
    pub anchor_text_length: usize,
    /// Number of descendant elements, not counting the element itself.
    pub descendant_count: usize,
}

impl DensityMetrics {
    /// Measure an element.
    #[must_use]
    pub fn measure(element: &Selection) -> Self {
        Self {
            text_length: dom::trimmed_text_length(element),
            anchor_text_length: anchor_text_length(element),
            descendant_count: dom::descendants(element).length(),
        }
    }

    /// Density score of these measurements. Never negative.
    ///
    /// An element with no descendants is divided by one, not zero.
    #[must_use]
    pub fn score(&self) -> f64 {
        let content = self.text_length.saturating_sub(self.anchor_text_length);
        content as f64 / self.descendant_count.max(1) as f64
    }
}

/// Density score of an element.
#[must_use]
pub fn density_score(element: &Selection) -> f64 {
    DensityMetrics::measure(element).score()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_formula() {
        let metrics = DensityMetrics {
            text_length: 1000,
            anchor_text_length: 200,
            descendant_count: 40,
        };
        assert!((metrics.score() - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zero_descendants_floors_denominator() {
        let metrics = DensityMetrics {
            text_length: 30,
            anchor_text_length: 0,
            descendant_count: 0,
        };
        assert!((metrics.score() - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_element_scores_zero() {
        let doc = dom::parse("<div></div>");
        assert_eq!(density_score(&doc.select("div")), 0.0);
    }

    #[test]
    fn test_measure_counts_all_descendants() {
        let doc = dom::parse(
            r#"<div id="c"><p>Some words here</p><p>More <a href="/x">link</a> text</p></div>"#,
        );
        let metrics = DensityMetrics::measure(&doc.select("#c"));

        assert_eq!(metrics.descendant_count, 3);
        assert_eq!(metrics.anchor_text_length, 4);
        assert_eq!(metrics.text_length, "Some words hereMore link text".chars().count());
    }

    #[test]
    fn test_link_heavy_block_scores_low() {
        let links: String = (0..20).map(|i| format!("<li><a href=\"/{i}\">Link {i}</a></li>")).collect();
        let doc = dom::parse(&format!("<div id=\"nav\"><ul>{links}</ul></div>"));

        assert!(density_score(&doc.select("#nav")) < 1.0);
    }
}
