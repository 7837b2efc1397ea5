//! Progress badge lookup on the third-party report page.
//!
//! The page shows a `div` labelled `Progressing:` followed by a pill
//! (`div.rounded-full`) whose `span` holds text such as `42% P5`.

use scraper::{ElementRef, Html, Selector};

/// Label text of the container that precedes the progress badge.
pub const PROGRESS_LABEL: &str = "Progressing:";

/// Class carried by the badge element.
pub const BADGE_CLASS: &str = "rounded-full";

/// Find the progress badge text in a page, whitespace-normalized.
///
/// Returns `None` if the label, the badge after it, or a non-empty `span`
/// inside the badge is missing.
pub fn find_progress_badge(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let div = Selector::parse("div").ok()?;
    let span = Selector::parse("span").ok()?;

    // `select` walks in document order, so everything after the label
    // (its own descendants included) follows it in this iterator.
    let mut divs = document.select(&div);
    divs.by_ref().find(|el| is_label(*el))?;
    let badge = divs.find(|el| el.value().classes().any(|c| c == BADGE_CLASS))?;

    badge
        .select(&span)
        .map(|s| normalize_ws(&s.text().collect::<String>()))
        .find(|text| !text.is_empty())
}

/// True when the element's direct text is the label, or when its only
/// child element is (following the same rule down a single-child chain).
fn is_label(el: ElementRef) -> bool {
    let text = own_text(el);
    if text == PROGRESS_LABEL {
        return true;
    }
    if !text.is_empty() {
        return false;
    }
    let mut children = el.children().filter_map(ElementRef::wrap);
    match (children.next(), children.next()) {
        (Some(only), None) => is_label(only),
        _ => false,
    }
}

/// Text directly inside the element, ignoring nested elements.
fn own_text(el: ElementRef) -> String {
    let text: String = el
        .children()
        .filter_map(|child| child.value().as_text().map(|t| &**t))
        .collect();
    text.trim().to_string()
}

fn normalize_ws(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
