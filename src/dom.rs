//! DOM Operations Adapter
//!
//! Thin layer over the `dom_query` crate. Every tree operation the engine
//! needs goes through here: parsing, text access, attribute access, querying
//! with precompiled matchers, detaching nodes and deep copies.

// Re-export core types for external use
pub use dom_query::{Document, Matcher, Selection};

// Re-export StrTendril for external use
pub use tendril::StrTendril;

/// Tags whose serialized form is dropped by the HTML parser outside a table.
const TABLE_PARTS: &[&str] = &["td", "th", "tr", "tbody", "thead", "tfoot", "caption", "colgroup", "col"];

/// Tags that cannot be the root of a copied fragment.
const DOCUMENT_PARTS: &[&str] = &["html", "head", "body"];

// === Parsing ===

/// Parse HTML string into document
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

// === Attribute Operations ===

/// Get any attribute value
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Set an attribute value
#[inline]
pub fn set_attribute(sel: &Selection, name: &str, value: &str) {
    sel.set_attr(name, value);
}

/// Check if attribute exists
#[inline]
#[must_use]
pub fn has_attribute(sel: &Selection, name: &str) -> bool {
    sel.has_attr(name)
}

/// Remove an attribute
#[inline]
pub fn remove_attribute(sel: &Selection, name: &str) {
    sel.remove_attr(name);
}

/// Get all attributes as key-value pairs
///
/// Returns empty vector if node has no attributes or if selection is empty.
#[must_use]
pub fn get_all_attributes(sel: &Selection) -> Vec<(String, String)> {
    sel.nodes()
        .first()
        .map(|node| {
            node.attrs()
                .iter()
                .map(|attr| (attr.name.local.to_string(), attr.value.to_string()))
                .collect()
        })
        .unwrap_or_default()
}

// === Tag/Node Information ===

/// Get tag name (lowercase)
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name)
        .map(|t| t.to_ascii_lowercase())
}

// === Text Content ===

/// Get all text content of node and descendants
///
/// Returns `StrTendril` for zero-copy passing. Use `.to_string()` only when
/// you need owned storage.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Character count of the whitespace-trimmed text of node and descendants.
#[must_use]
pub fn trimmed_text_length(sel: &Selection) -> usize {
    let text = text_content(sel);
    text.trim().chars().count()
}

/// Get inner HTML content
#[inline]
#[must_use]
pub fn inner_html(sel: &Selection) -> StrTendril {
    sel.inner_html()
}

/// Get outer HTML content
#[inline]
#[must_use]
pub fn outer_html(sel: &Selection) -> StrTendril {
    sel.html()
}

// === Querying ===

/// All descendants matching a precompiled selector, in document order.
#[inline]
#[must_use]
pub fn select_matching<'a>(sel: &Selection<'a>, matcher: &Matcher) -> Selection<'a> {
    sel.select_matcher(matcher)
}

/// All descendant elements.
#[inline]
#[must_use]
pub fn descendants<'a>(sel: &Selection<'a>) -> Selection<'a> {
    sel.select("*")
}

/// First node of a selection as its own selection.
#[must_use]
pub fn first<'a>(sel: &Selection<'a>) -> Option<Selection<'a>> {
    sel.nodes().first().map(|node| Selection::from(*node))
}

// === Tree Manipulation ===

/// Detach elements from the tree
#[inline]
pub fn remove(sel: &Selection) {
    sel.remove();
}

/// Deep-copy an element into a new, independent document.
///
/// Returns the new document and the tag to select its root by. The copy is
/// made through serialization, so no node is shared with the source tree.
/// Table parts are wrapped in the minimal table scaffolding the parser needs
/// to keep them; document-level elements are copied as a `div`.
#[must_use]
pub fn clone_element(sel: &Selection) -> (Document, String) {
    let tag = tag_name(sel).unwrap_or_else(|| "div".to_string());

    if DOCUMENT_PARTS.contains(&tag.as_str()) {
        let html = format!("<div>{}</div>", inner_html(sel));
        return (Document::from(html), "div".to_string());
    }

    let outer = outer_html(sel);
    let html = match tag.as_str() {
        "td" | "th" => format!("<table><tbody><tr>{outer}</tr></tbody></table>"),
        "tr" => format!("<table><tbody>{outer}</tbody></table>"),
        "col" => format!("<table><colgroup>{outer}</colgroup></table>"),
        t if TABLE_PARTS.contains(&t) => format!("<table>{outer}</table>"),
        _ => outer.to_string(),
    };

    (Document::from(html), tag)
}

/// Root element of a document produced by [`clone_element`].
#[must_use]
pub fn cloned_root<'a>(doc: &'a Document, tag: &str) -> Option<Selection<'a>> {
    first(&doc.select("body").select(tag))
}
