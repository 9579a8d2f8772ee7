// src/core/html.rs
use scraper::ElementRef;

use super::sanitize::normalize_ws;

/// True when `el` carries every class token in `classes` (any order, extras allowed).
pub fn has_classes(el: &ElementRef, classes: &[&str]) -> bool {
    let value = el.value();
    classes.iter().all(|c| value.has_class(c, scraper::CaseSensitivity::CaseSensitive))
}

/// Visible text of an element: all descendant text nodes, whitespace normalized.
pub fn text_of(el: &ElementRef) -> String {
    let raw: String = el.text().collect();
    normalize_ws(&raw)
}

/// Descendant elements of `el` with tag `name`, in document order.
/// Nested matches are included, the way a recursive find-all walks the tree.
pub fn elements_named<'a>(el: ElementRef<'a>, name: &'a str) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    el.descendants()
        .skip(1)
        .filter_map(ElementRef::wrap)
        .filter(move |e| e.value().name() == name)
}
