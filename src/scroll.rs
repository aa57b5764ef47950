//! Smooth scrolling for in-page anchor links.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::dom;

/// Clearance for the fixed navbar when jumping to an anchor.
const ANCHOR_OFFSET: f64 = 80.0;

pub(crate) fn init_smooth_scrolling(document: &Document) {
    dom::for_each(document, "a[href^=\"#\"]", |anchor| {
        let source = anchor.clone();
        dom::listen(&anchor, "click", move |event| {
            event.prevent_default();
            let Some(fragment) = source.get_attribute("href") else {
                return;
            };
            scroll_to_fragment(&dom::document(), &fragment);
        });
    });
}

/// Scrolls the viewport to the element the fragment resolves to; invalid or
/// unresolved fragments are ignored.
fn scroll_to_fragment(document: &Document, fragment: &str) {
    let Some(target) = document.query_selector(fragment).ok().flatten() else {
        return;
    };
    let Ok(target) = target.dyn_into::<HtmlElement>() else {
        return;
    };
    let top = f64::from(target.offset_top()) - ANCHOR_OFFSET;
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    dom::window().scroll_to_with_scroll_to_options(&options);
}
