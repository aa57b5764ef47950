//! Citation popup: formats publication metadata carried on cite buttons and
//! copies the rendered reference to the clipboard.

use std::cell::RefCell;

use gloo_timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement};

use crate::{bootstrap, clipboard, dom};

const COPY_LABEL_RESET_MS: u32 = 1_500;
const COPY_BADGE_RESET_MS: u32 = 2_000;

thread_local! {
    /// Metadata of the publication whose modal is currently open; replaced
    /// wholesale on every open.
    static CURRENT_CITATION: RefCell<Option<Citation>> = RefCell::new(None);
}

/// One publication, as carried on a cite button's data attributes.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Citation {
    pub title: String,
    pub authors: String,
    pub journal: String,
    pub year: String,
    pub doi: String,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum CitationFormat {
    #[default]
    Apa,
    Mla,
    Chicago,
}

impl CitationFormat {
    /// Maps a radio value to a format; anything unrecognized renders as APA.
    pub fn from_value(value: &str) -> Self {
        match value {
            "mla" => CitationFormat::Mla,
            "chicago" => CitationFormat::Chicago,
            _ => CitationFormat::Apa,
        }
    }
}

impl Citation {
    fn from_button(button: &Element) -> Self {
        let attr = |name: &str| button.get_attribute(name).unwrap_or_default();
        Citation {
            title: attr("data-title"),
            authors: attr("data-authors"),
            journal: attr("data-journal"),
            year: attr("data-year"),
            doi: attr("data-doi"),
        }
    }

    /// Renders the reference string for the requested bibliographic style.
    pub fn format(&self, format: CitationFormat) -> String {
        let Citation {
            title,
            authors,
            journal,
            year,
            doi,
        } = self;
        match format {
            CitationFormat::Apa => {
                format!("{authors} ({year}). {title}. {journal}. https://doi.org/{doi}")
            }
            CitationFormat::Mla => {
                format!("{authors}. \"{title}.\" {journal}, {year}, https://doi.org/{doi}.")
            }
            CitationFormat::Chicago => {
                format!("{authors}. \"{title}.\" {journal} ({year}). https://doi.org/{doi}.")
            }
        }
    }
}

pub(crate) fn init_citation_popup(document: &Document) {
    dom::for_each(document, ".cite-btn", |button| {
        let source = button.clone();
        dom::listen(&button, "click", move |event| {
            event.prevent_default();
            open_citation_modal(&source);
        });
    });
    dom::for_each(document, "input[name=\"citationFormat\"]", |radio| {
        dom::listen(&radio, "change", move |_event| {
            update_citation_text(&dom::document());
        });
    });
    if let Some(copy_btn) = document.get_element_by_id("copyCitationBtn") {
        dom::listen(&copy_btn, "click", move |_event| {
            copy_citation(&dom::document());
        });
    }
}

fn open_citation_modal(button: &Element) {
    let citation = Citation::from_button(button);
    CURRENT_CITATION.with(|current| *current.borrow_mut() = Some(citation));
    let document = dom::document();
    update_citation_text(&document);
    if let Some(modal) = document.get_element_by_id("citationModal") {
        bootstrap::show_modal(&modal);
    }
}

/// Regenerates the displayed reference from the retained record and the
/// selected format radio. No-op while no citation is loaded.
fn update_citation_text(document: &Document) {
    let Some(citation) = CURRENT_CITATION.with(|current| current.borrow().clone()) else {
        return;
    };
    let text = citation.format(selected_format(document));
    if let Some(field) = document.get_element_by_id("citationText") {
        dom::set_field_value(&field, &text);
    }
}

fn selected_format(document: &Document) -> CitationFormat {
    document
        .query_selector("input[name=\"citationFormat\"]:checked")
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<HtmlInputElement>().ok())
        .map(|input| CitationFormat::from_value(&input.value()))
        .unwrap_or_default()
}

fn copy_citation(document: &Document) {
    let Some(field) = document.get_element_by_id("citationText") else {
        return;
    };
    let Some(text) = dom::field_value(&field) else {
        return;
    };
    let document = document.clone();
    spawn_local(async move {
        match clipboard::write_text(&text).await {
            Ok(true) => show_copy_feedback(&document),
            Ok(false) => copy_failed(None),
            Err(err) => copy_failed(Some(err)),
        }
    });
}

fn copy_failed(err: Option<JsValue>) {
    match err {
        Some(err) => log::error!("failed to copy citation: {err:?}"),
        None => log::error!("failed to copy citation"),
    }
    let _ = dom::window()
        .alert_with_message("Failed to copy citation. Please select and copy manually.");
}

fn show_copy_feedback(document: &Document) {
    if let Some(badge) = document
        .get_element_by_id("copySuccess")
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
    {
        let _ = badge.style().set_property("display", "inline");
        Timeout::new(COPY_BADGE_RESET_MS, move || {
            let _ = badge.style().set_property("display", "none");
        })
        .forget();
    }
    if let Some(button) = document.get_element_by_id("copyCitationBtn") {
        let original = button.inner_html();
        button.set_inner_html("<i class=\"bi bi-check me-1\"></i>Copied!");
        let class_list = button.class_list();
        let _ = class_list.remove_1("btn-primary");
        let _ = class_list.add_1("btn-success");
        Timeout::new(COPY_LABEL_RESET_MS, move || {
            button.set_inner_html(&original);
            let class_list = button.class_list();
            let _ = class_list.remove_1("btn-success");
            let _ = class_list.add_1("btn-primary");
        })
        .forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> Citation {
        Citation {
            title: "Deep Learning for Citation Analysis".into(),
            authors: "Seth G. Walker".into(),
            journal: "Journal of Informetrics".into(),
            year: "2024".into(),
            doi: "10.1000/xyz123".into(),
        }
    }

    #[test]
    fn apa_format_matches_the_template() {
        assert_eq!(
            record().format(CitationFormat::Apa),
            "Seth G. Walker (2024). Deep Learning for Citation Analysis. \
             Journal of Informetrics. https://doi.org/10.1000/xyz123",
        );
    }

    #[test]
    fn mla_format_matches_the_template() {
        assert_eq!(
            record().format(CitationFormat::Mla),
            "Seth G. Walker. \"Deep Learning for Citation Analysis.\" \
             Journal of Informetrics, 2024, https://doi.org/10.1000/xyz123.",
        );
    }

    #[test]
    fn chicago_format_matches_the_template() {
        assert_eq!(
            record().format(CitationFormat::Chicago),
            "Seth G. Walker. \"Deep Learning for Citation Analysis.\" \
             Journal of Informetrics (2024). https://doi.org/10.1000/xyz123.",
        );
    }

    #[test]
    fn author_strings_pass_through_verbatim() {
        // initials ending in a period keep it; the template separator is
        // appended regardless
        let citation = Citation {
            authors: "Walker, S. G.".into(),
            ..record()
        };
        let mla = citation.format(CitationFormat::Mla);
        assert!(mla.starts_with("Walker, S. G.. \"Deep Learning"), "{mla}");
        let apa = citation.format(CitationFormat::Apa);
        assert!(apa.starts_with("Walker, S. G. (2024)."), "{apa}");
    }

    #[test]
    fn unrecognized_format_falls_back_to_apa() {
        let citation = record();
        let fallback = citation.format(CitationFormat::from_value("bibtex"));
        assert_eq!(fallback, citation.format(CitationFormat::Apa));
    }

    #[test]
    fn format_values_map_case_sensitively() {
        assert_eq!(CitationFormat::from_value("mla"), CitationFormat::Mla);
        assert_eq!(CitationFormat::from_value("chicago"), CitationFormat::Chicago);
        assert_eq!(CitationFormat::from_value("apa"), CitationFormat::Apa);
        assert_eq!(CitationFormat::from_value("MLA"), CitationFormat::Apa);
        assert_eq!(CitationFormat::from_value(""), CitationFormat::Apa);
    }
}
