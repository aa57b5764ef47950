//! Small page utilities: date formatting, truncation, button loading state,
//! click tracking, keyboard shortcuts and the print stylesheet.

use chrono::{DateTime, NaiveDate};
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlButtonElement, HtmlElement, HtmlFormElement, KeyboardEvent};

use crate::{bootstrap, dom};

const DEFAULT_LOADING_LABEL: &str = "Loading...";
const CONTACT_FORM_DELAY_MS: u32 = 2_000;

/// "January 5, 2024" rendering of an ISO date or RFC 3339 timestamp.
/// Unparseable input comes back unchanged.
pub fn format_date(value: &str) -> String {
    parse_date(value)
        .map(|date| date.format("%B %-d, %Y").to_string())
        .unwrap_or_else(|| value.to_string())
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|timestamp| timestamp.date_naive())
}

/// Caps `text` at `max_length` characters, appending an ellipsis marker when
/// anything was cut.
pub fn truncate_text(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        return text.to_string();
    }
    let mut truncated: String = text.chars().take(max_length).collect();
    truncated.push_str("...");
    truncated
}

/// Disabled-button scope: swaps the label and disables the button on
/// creation; `restore` puts both back. There is no automatic release, the
/// caller decides when the operation is over.
pub struct LoadingGuard {
    button: HtmlButtonElement,
    original_label: String,
}

impl LoadingGuard {
    pub fn start(button: HtmlButtonElement, label: Option<&str>) -> Self {
        let original_label = button.text_content().unwrap_or_default();
        button.set_text_content(Some(label.unwrap_or(DEFAULT_LOADING_LABEL)));
        button.set_disabled(true);
        LoadingGuard {
            button,
            original_label,
        }
    }

    pub fn restore(self) {
        self.button.set_text_content(Some(&self.original_label));
        self.button.set_disabled(false);
    }
}

/// Analytics stub; logs the pair until real telemetry exists.
pub fn track_click(element: &str, action: &str) {
    log::info!("tracked: {action} on {element}");
}

/// Escape closes every open modal.
pub(crate) fn init_keyboard_shortcuts(document: &Document) {
    let target = document.clone();
    dom::listen(document, "keydown", move |event| {
        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        if event.key() == "Escape" {
            bootstrap::hide_open_modals(&target);
        }
    });
}

const PRINT_STYLES: &str = "\
@media print {
    .navbar, .hero-buttons, .contact-links, footer {
        display: none !important;
    }

    body {
        font-size: 12pt;
        line-height: 1.4;
    }

    .container {
        max-width: none !important;
    }
}
";

/// Installs the print-media stylesheet; run once at startup.
pub(crate) fn inject_print_styles(document: &Document) {
    let Ok(style) = document.create_element("style") else {
        return;
    };
    style.set_text_content(Some(PRINT_STYLES));
    if let Some(head) = document.head() {
        let _ = head.append_child(&style);
    }
}

/// Submission flow for a future contact form: loading state on the submit
/// button, then a thank-you alert and form reset after a short delay.
pub fn handle_contact_form(event: &Event) {
    event.prevent_default();
    let Some(form) = event
        .target()
        .and_then(|target| target.dyn_into::<HtmlFormElement>().ok())
    else {
        return;
    };
    let Some(submit) = form
        .query_selector("button[type=\"submit\"]")
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<HtmlButtonElement>().ok())
    else {
        return;
    };
    let guard = LoadingGuard::start(submit, Some("Sending..."));
    Timeout::new(CONTACT_FORM_DELAY_MS, move || {
        guard.restore();
        let _ = dom::window()
            .alert_with_message("Thank you for your message! I'll get back to you soon.");
        form.reset();
    })
    .forget();
}

/// Hides images whose source failed to load. Registered on the capture
/// phase since `error` does not bubble.
pub(crate) fn init_image_error_fallback(document: &Document) {
    dom::listen_capture(document, "error", |event| {
        let Some(target) = event
            .target()
            .and_then(|target| target.dyn_into::<HtmlElement>().ok())
        else {
            return;
        };
        if target.tag_name() == "IMG" {
            let _ = target.style().set_property("display", "none");
            log::warn!(
                "image failed to load: {}",
                target.get_attribute("src").unwrap_or_default()
            );
        }
    });
}

/// Logs the total page load time once the window `load` event fires.
pub(crate) fn init_load_timing() {
    dom::listen(&dom::window(), "load", |_event| {
        if let Some(timing) = dom::window().performance().map(|p| p.timing()) {
            let elapsed = timing.load_event_end() - timing.navigation_start();
            log::info!("page loaded in {elapsed}ms");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_iso_dates_long_form() {
        assert_eq!(format_date("2024-01-05"), "January 5, 2024");
        assert_eq!(format_date("1999-12-31"), "December 31, 1999");
    }

    #[test]
    fn formats_rfc3339_timestamps_by_date() {
        assert_eq!(format_date("2024-01-05T10:30:00Z"), "January 5, 2024");
    }

    #[test]
    fn passes_unparseable_dates_through() {
        assert_eq!(format_date("last Tuesday"), "last Tuesday");
        assert_eq!(format_date(""), "");
    }

    #[test]
    fn truncates_over_limit_with_ellipsis() {
        assert_eq!(truncate_text("hello world", 5), "hello...");
    }

    #[test]
    fn keeps_short_text_unchanged() {
        assert_eq!(truncate_text("hi", 5), "hi");
        assert_eq!(truncate_text("exact", 5), "exact");
    }

    #[test]
    fn truncates_on_character_boundaries() {
        assert_eq!(truncate_text("héllo wörld", 5), "héllo...");
    }
}
