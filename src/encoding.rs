//! Character decoding of raw page bytes.
//!
//! Pages saved or captured as bytes are decoded before parsing. The charset
//! comes from, in order: a byte order mark, a `charset=` declaration in the
//! first kilobyte (`<meta charset>` or `http-equiv` content), then UTF-8.

use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8};
use regex::bytes::Regex;

/// Bytes scanned for a charset declaration.
const SNIFF_LIMIT: usize = 1024;

/// `charset=` inside a `<meta>` tag, quoted or not.
#[allow(clippy::expect_used)]
static META_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i-u)<meta[^>]*?charset\s*=\s*["']?\s*([A-Za-z0-9_.:-]+)"#).expect("META_CHARSET regex")
});

/// Detect the encoding of an HTML byte stream.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    if let Some((encoding, _)) = Encoding::for_bom(html) {
        return encoding;
    }

    let head = &html[..html.len().min(SNIFF_LIMIT)];
    META_CHARSET
        .captures(head)
        .and_then(|c| c.get(1))
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        // A declared UTF-16 cannot be right for bytes that are ASCII-readable
        .map(|e| if e.name().starts_with("UTF-16") { UTF_8 } else { e })
        .unwrap_or(UTF_8)
}

/// Decode HTML bytes to a UTF-8 string.
///
/// Invalid sequences become U+FFFD rather than errors.
///
/// # Examples
///
/// ```
/// use rs_readermode::encoding::transcode_to_utf8;
///
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body>Caf\xE9</body></html>";
/// assert!(transcode_to_utf8(html).contains("Café"));
/// ```
#[must_use]
pub fn transcode_to_utf8(html: &[u8]) -> String {
    let encoding = detect_encoding(html);
    let (decoded, used, had_errors) = encoding.decode(html);
    if had_errors {
        tracing::debug!(encoding = used.name(), "invalid byte sequences replaced while decoding");
    }
    decoded.into_owned()
}
