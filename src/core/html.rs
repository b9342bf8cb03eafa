// src/core/html.rs
use scraper::{ElementRef, Html};

/// Parse a page tolerantly. html5ever never rejects input; broken markup
/// is repaired into a best-effort tree.
pub fn parse(body: &str) -> Html {
    Html::parse_document(body)
}

/// Every element named `tag` (ASCII case-insensitive), in document order,
/// at any depth.
pub fn select_tag<'a>(doc: &'a Html, tag: &'a str) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    doc.root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter(move |el| el.value().name().eq_ignore_ascii_case(tag))
}

/// Descendant text joined as-is, outer whitespace trimmed only.
pub fn element_text(el: ElementRef<'_>) -> String {
    let joined: String = el.text().collect();
    s!(joined.trim())
}

/// Trimmed text for each element named `tag`.
pub fn extract_tag_text(doc: &Html, tag: &str) -> Vec<String> {
    select_tag(doc, tag).map(element_text).collect()
}
