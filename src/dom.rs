//! Shared DOM plumbing: lookups that degrade silently and listener
//! registration helpers.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, HtmlInputElement, HtmlTextAreaElement, Window};

pub(crate) fn window() -> Window {
    gloo_utils::window()
}

pub(crate) fn document() -> Document {
    gloo_utils::document()
}

/// Runs `f` for every element matching `selector`. Invalid selectors and
/// empty result sets are ignored.
pub(crate) fn for_each(document: &Document, selector: &str, mut f: impl FnMut(Element)) {
    let Ok(nodes) = document.query_selector_all(selector) else {
        return;
    };
    for index in 0..nodes.length() {
        if let Some(element) = nodes
            .get(index)
            .and_then(|node| node.dyn_into::<Element>().ok())
        {
            f(element);
        }
    }
}

/// Attaches a listener that lives for the rest of the page; the closure is
/// leaked rather than tracked.
pub(crate) fn listen(target: &EventTarget, event: &str, f: impl FnMut(Event) + 'static) {
    let closure = Closure::wrap(Box::new(f) as Box<dyn FnMut(Event)>);
    let _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Same as [`listen`], registered for the capture phase.
pub(crate) fn listen_capture(target: &EventTarget, event: &str, f: impl FnMut(Event) + 'static) {
    let closure = Closure::wrap(Box::new(f) as Box<dyn FnMut(Event)>);
    let _ = target.add_event_listener_with_callback_and_bool(
        event,
        closure.as_ref().unchecked_ref(),
        true,
    );
    closure.forget();
}

/// Reads the value of a text field, whether it is a textarea or an input.
pub(crate) fn field_value(element: &Element) -> Option<String> {
    if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
        return Some(area.value());
    }
    element
        .dyn_ref::<HtmlInputElement>()
        .map(|input| input.value())
}

pub(crate) fn set_field_value(element: &Element, value: &str) {
    if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
        area.set_value(value);
    } else if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.set_value(value);
    }
}
