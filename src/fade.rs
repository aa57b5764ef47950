//! Visibility-triggered fade-in transition for page sections.

use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

use crate::dom;

const VISIBLE_RATIO: f64 = 0.1;
const VIEWPORT_MARGIN: &str = "0px 0px -50px 0px";

/// Hero and page-header sections render immediately and are never tagged.
fn animates(section: &Element) -> bool {
    let class_list = section.class_list();
    !class_list.contains("hero-section") && !class_list.contains("page-header")
}

pub(crate) fn init_scroll_animations(document: &Document) {
    let callback = Closure::wrap(Box::new(
        |entries: Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    // one-way: the class stays on once the element was seen
                    let _ = entry.target().class_list().add_1("visible");
                }
            }
        },
    )
        as Box<dyn FnMut(Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from(VISIBLE_RATIO));
    init.set_root_margin(VIEWPORT_MARGIN);
    let observer =
        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
            Ok(observer) => observer,
            Err(err) => {
                log::debug!("intersection observer unavailable: {err:?}");
                return;
            }
        };
    callback.forget();

    dom::for_each(document, "section", |section| {
        if animates(&section) {
            let _ = section.class_list().add_1("fade-in");
        }
    });
    dom::for_each(document, ".fade-in", |element| observer.observe(&element));
}
