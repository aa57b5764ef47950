//! Interop with the Bootstrap JS bundle through `js_sys::Reflect`. Every
//! entry point is a no-op when the bundle is not loaded on the page.

use js_sys::{Array, Function, Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element};

use crate::dom;

fn namespace() -> Option<Object> {
    let value = Reflect::get(&dom::window(), &JsValue::from_str("bootstrap")).ok()?;
    if value.is_undefined() || value.is_null() {
        return None;
    }
    value.dyn_into().ok()
}

fn class(name: &str) -> Option<Function> {
    let ns = namespace()?;
    let value = Reflect::get(&ns, &JsValue::from_str(name)).ok()?;
    value.dyn_into().ok()
}

fn call_method(target: &JsValue, name: &str) {
    let Ok(value) = Reflect::get(target, &JsValue::from_str(name)) else {
        return;
    };
    let Ok(method) = value.dyn_into::<Function>() else {
        return;
    };
    if let Err(err) = method.call0(target) {
        log::debug!("bootstrap {name}() failed: {err:?}");
    }
}

/// Instantiates a tooltip for every `[data-bs-toggle="tooltip"]` element.
pub(crate) fn init_tooltips(document: &Document) {
    let Some(tooltip) = class("Tooltip") else {
        return;
    };
    dom::for_each(document, "[data-bs-toggle=\"tooltip\"]", |element| {
        if let Err(err) = Reflect::construct(&tooltip, &Array::of1(&element)) {
            log::debug!("tooltip init failed: {err:?}");
        }
    });
}

/// Constructs and shows the modal wrapping `element`.
pub(crate) fn show_modal(element: &Element) {
    let Some(modal) = class("Modal") else {
        return;
    };
    match Reflect::construct(&modal, &Array::of1(element)) {
        Ok(instance) => call_method(&instance, "show"),
        Err(err) => log::debug!("modal init failed: {err:?}"),
    }
}

/// Hides every `.modal.show` instance Bootstrap knows about.
pub(crate) fn hide_open_modals(document: &Document) {
    let Some(modal) = class("Modal") else {
        return;
    };
    let Some(get_instance) = Reflect::get(&modal, &JsValue::from_str("getInstance"))
        .ok()
        .and_then(|value| value.dyn_into::<Function>().ok())
    else {
        return;
    };
    dom::for_each(document, ".modal.show", |element| {
        if let Ok(instance) = get_instance.call1(&modal, &element) {
            if !instance.is_null() && !instance.is_undefined() {
                call_method(&instance, "hide");
            }
        }
    });
}
