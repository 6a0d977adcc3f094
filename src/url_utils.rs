//! URL Utility Functions
//!
//! Resolution of relative `href`/`src` values and detection of URLs that
//! must not survive into a re-hosted fragment.

use url::Url;

use crate::error::{Error, Result};
use crate::patterns::SCRIPT_SCHEME;

/// Parse a base URL for resolution.
pub fn parse_base_url(url_str: &str) -> Result<Url> {
    let url = Url::parse(url_str.trim()).map_err(|e| Error::InvalidBaseUrl(format!("{url_str}: {e}")))?;
    if url.cannot_be_a_base() {
        return Err(Error::InvalidBaseUrl(format!("{url_str}: cannot be a base")));
    }
    Ok(url)
}

/// Check if a string is a valid absolute http(s) URL.
#[must_use]
pub fn is_absolute_url(s: &str) -> bool {
    let s = s.trim();

    if !s.starts_with("http://") && !s.starts_with("https://") {
        return false;
    }

    Url::parse(s).is_ok_and(|url| url.host().is_some())
}

/// Convert a relative or absolute URL to absolute form.
///
/// # Returns
/// * The absolute URL string, or the trimmed original if resolution fails
#[must_use]
pub fn create_absolute_url(url_str: &str, base: &Url) -> String {
    let url_str = url_str.trim();

    if url_str.is_empty() {
        return String::new();
    }

    // Fragments and special schemes are preserved unchanged
    if url_str.starts_with('#')
        || url_str.starts_with("data:")
        || url_str.starts_with("mailto:")
        || url_str.starts_with("tel:")
    {
        return url_str.to_string();
    }

    if is_absolute_url(url_str) {
        return url_str.to_string();
    }

    match base.join(url_str) {
        Ok(resolved) => resolved.to_string(),
        Err(_) => url_str.to_string(),
    }
}

/// The value as a browser reads its scheme: ASCII tab and newlines removed,
/// leading control characters and spaces trimmed.
fn scheme_view(value: &str) -> String {
    let stripped: String = value.chars().filter(|c| !matches!(c, '\t' | '\n' | '\r')).collect();
    stripped.trim_start_matches(|c: char| c <= ' ').to_ascii_lowercase()
}

/// Check whether a URL is unsafe to keep in sanitized output.
///
/// Script schemes are always unsafe, including when split by tabs or
/// newlines or preceded by control characters. `data:` URLs are only
/// tolerated for image sources, and only with an image media type.
#[must_use]
pub fn is_unsafe_url(value: &str, image_source: bool) -> bool {
    let view = scheme_view(value);
    if SCRIPT_SCHEME.is_match(&view) {
        return true;
    }

    if let Some(rest) = view.strip_prefix("data:") {
        return !(image_source && rest.starts_with("image/"));
    }

    false
}
