//! Candidate sanitizer.
//!
//! Turns a located candidate into a [`Fragment`] that is safe to re-host:
//!
//! 1. deep-copy the candidate into a private document,
//! 2. detach every noise element (selectors, then the class/id pattern),
//! 3. strip every attribute outside the allow-list, and make surviving
//!    `href`/`src` values safe and absolute,
//! 4. normalize images.
//!
//! The live document is never touched; all mutation happens on the copy.

use dom_query::Selection;
use url::Url;

use crate::dom;
use crate::error::Result;
use crate::extractor::images::{normalize_images, promote_lazy_source, ImagePolicy};
use crate::extractor::locator::Candidate;
use crate::options::Options;
use crate::result::Fragment;
use crate::selector::discard::NoisePattern;
use crate::selector::SelectorList;
use crate::url_utils::{create_absolute_url, is_unsafe_url, parse_base_url};

/// Attributes carrying URLs.
const URL_ATTRIBUTES: &[&str] = &["href", "src"];

/// Attribute-level policy: the allow-list and URL handling.
#[derive(Debug, Clone)]
struct AttributePolicy {
    allowed: Vec<String>,
    base_url: Option<Url>,
    strip_unsafe_urls: bool,
}

impl AttributePolicy {
    fn allows(&self, name: &str) -> bool {
        self.allowed.iter().any(|a| a.eq_ignore_ascii_case(name))
    }

    /// Remove disallowed attributes, then clean up URL attributes.
    fn apply(&self, element: &Selection) {
        for (name, _) in dom::get_all_attributes(element) {
            if !self.allows(&name) {
                dom::remove_attribute(element, &name);
            }
        }

        let is_img = dom::tag_name(element).as_deref() == Some("img");
        for name in URL_ATTRIBUTES {
            let Some(value) = dom::get_attribute(element, name) else {
                continue;
            };

            if self.strip_unsafe_urls && is_unsafe_url(&value, is_img && *name == "src") {
                tracing::trace!(attribute = name, "unsafe url removed");
                dom::remove_attribute(element, name);
                continue;
            }

            if let Some(base) = &self.base_url {
                let absolute = create_absolute_url(&value, base);
                if self.strip_unsafe_urls && is_unsafe_url(&absolute, is_img && *name == "src") {
                    tracing::trace!(attribute = name, "unsafe url removed after resolution");
                    dom::remove_attribute(element, name);
                } else if absolute != value {
                    dom::set_attribute(element, name, &absolute);
                }
            }
        }
    }
}

/// Produces sanitized fragments from candidates.
#[derive(Debug, Clone)]
pub struct Sanitizer {
    noise_selectors: SelectorList,
    noise_pattern: Option<NoisePattern>,
    attributes: AttributePolicy,
    images: ImagePolicy,
}

impl Sanitizer {
    /// Build a sanitizer, compiling the noise selectors and pattern and
    /// parsing the base URL.
    pub fn new(options: &Options) -> Result<Self> {
        let noise_pattern = options
            .noise_pattern
            .as_deref()
            .map(NoisePattern::new)
            .transpose()?;
        let base_url = options.base_url.as_deref().map(parse_base_url).transpose()?;

        Ok(Self {
            noise_selectors: SelectorList::compile(&options.noise_selectors)?,
            noise_pattern,
            attributes: AttributePolicy {
                allowed: options.allowed_attributes.clone(),
                base_url,
                strip_unsafe_urls: options.strip_unsafe_urls,
            },
            images: ImagePolicy {
                placeholder_alt: options.placeholder_alt.clone(),
                lazy_load: options.lazy_load_images,
            },
        })
    }

    /// Sanitize an optional candidate. `None` in gives `None` out.
    #[must_use]
    pub fn sanitize(&self, candidate: Option<&Candidate<'_>>) -> Option<Fragment> {
        candidate.map(|c| self.sanitize_candidate(c))
    }

    /// Sanitize a candidate into an independent fragment.
    #[must_use]
    pub fn sanitize_candidate(&self, candidate: &Candidate<'_>) -> Fragment {
        let (doc, tag) = dom::clone_element(candidate.element());

        if let Some(root) = dom::cloned_root(&doc, &tag) {
            let removed = self.remove_noise(&root);

            for img in root.select("img").iter() {
                promote_lazy_source(&img);
            }

            self.attributes.apply(&root);
            for element in dom::descendants(&root).iter() {
                self.attributes.apply(&element);
            }

            normalize_images(&root, &self.images);

            tracing::debug!(
                stage = %candidate.stage(),
                noise_removed = removed,
                "candidate sanitized"
            );
        }

        Fragment::new(doc, tag)
    }

    /// Detach all noise under `root`. Returns the number of elements that
    /// left the copy, nested ones included, each counted once.
    fn remove_noise(&self, root: &Selection) -> usize {
        let before = dom::descendants(root).length();

        for (css, matcher) in self.noise_selectors.iter() {
            let found = dom::select_matching(root, matcher);
            if found.exists() {
                tracing::trace!(selector = css, count = found.length(), "noise removed");
                dom::remove(&found);
            }
        }

        if let Some(pattern) = &self.noise_pattern {
            for element in pattern.find_all(root) {
                dom::remove(&element);
            }
        }

        before.saturating_sub(dom::descendants(root).length())
    }
}
