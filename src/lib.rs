//! Browser enhancement script for a personal academic website, compiled to
//! WebAssembly. The page is server-rendered static markup; this crate only
//! attaches behavior to it: smooth anchor scrolling, scroll-triggered
//! fade-ins, the navbar shadow/hide effect, the research statistics
//! counters and the citation popup.

pub mod animate;
pub mod api;
mod bootstrap;
pub mod citation;
mod clipboard;
mod dom;
pub mod error;
mod fade;
pub mod navbar;
mod scroll;
pub mod stats;
pub mod util;

pub use error::Error;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::JsValue;
use web_sys::{Document, Event, HtmlButtonElement};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let document = dom::document();
    if document.ready_state() == "loading" {
        dom::listen(&document, "DOMContentLoaded", |_event| {
            init_page(&dom::document());
        });
    } else {
        init_page(&document);
    }
}

fn init_page(document: &Document) {
    initialize_page(document);
    scroll::init_smooth_scrolling(document);
    fade::init_scroll_animations(document);
    navbar::init_scroll_effect(document);
    stats::load_research_statistics();
    util::init_keyboard_shortcuts(document);
    util::inject_print_styles(document);
    util::init_image_error_fallback(document);
    util::init_load_timing();

    // the citation modal markup only exists on the research page
    if matches!(document.query_selector(".cite-btn"), Ok(Some(_))) {
        citation::init_citation_popup(document);
    }
}

/// Marks the body for page transitions and activates tooltip widgets.
fn initialize_page(document: &Document) {
    if let Some(body) = document.body() {
        let _ = body.class_list().add_1("loaded");
    }
    bootstrap::init_tooltips(document);
}

// Exports for other page scripts, mirroring the site-wide helper namespace
// the pages already expect.

#[wasm_bindgen(js_name = formatDate)]
pub fn format_date(value: &str) -> String {
    util::format_date(value)
}

#[wasm_bindgen(js_name = truncateText)]
pub fn truncate_text(text: &str, max_length: usize) -> String {
    util::truncate_text(text, max_length)
}

#[wasm_bindgen(js_name = trackClick)]
pub fn track_click(element: &str, action: &str) {
    util::track_click(element, action);
}

#[wasm_bindgen(js_name = loadResearchStatistics)]
pub fn load_research_statistics() {
    stats::load_research_statistics();
}

#[wasm_bindgen(js_name = initializeCitationPopup)]
pub fn initialize_citation_popup() {
    citation::init_citation_popup(&dom::document());
}

#[wasm_bindgen(js_name = handleContactForm)]
pub fn handle_contact_form(event: &Event) {
    util::handle_contact_form(event);
}

/// Puts `button` into its loading state and hands back a zero-argument JS
/// function that restores it.
#[wasm_bindgen(js_name = addLoadingState)]
pub fn add_loading_state(button: HtmlButtonElement, label: Option<String>) -> JsValue {
    let guard = util::LoadingGuard::start(button, label.as_deref());
    Closure::once_into_js(move || guard.restore())
}
