use js_sys::{Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlTextAreaElement;

use crate::dom;

/// Writes `text` to the system clipboard, preferring the async Clipboard API
/// and falling back to a hidden textarea with `execCommand("copy")`.
/// `Ok(false)` means both routes ran without throwing but nothing was copied.
pub(crate) async fn write_text(text: &str) -> Result<bool, JsValue> {
    let navigator = dom::window().navigator();
    let has_clipboard =
        Reflect::has(&navigator, &JsValue::from_str("clipboard")).unwrap_or(false);
    if has_clipboard {
        let promise = navigator.clipboard().write_text(text);
        if JsFuture::from(promise).await.is_ok() {
            return Ok(true);
        }
    }

    let document = dom::document();
    let textarea = document
        .create_element("textarea")?
        .dyn_into::<HtmlTextAreaElement>()?;
    textarea.set_value(text);
    textarea.set_attribute("readonly", "")?;
    textarea.style().set_property("position", "absolute")?;
    textarea.style().set_property("left", "-9999px")?;
    let Some(body) = document.body() else {
        return Ok(false);
    };
    let _ = body.append_child(&textarea);
    textarea.select();

    let exec = Reflect::get(document.as_ref(), &JsValue::from_str("execCommand"))?;
    let success = if exec.is_function() {
        let func: Function = exec.dyn_into()?;
        let result = func.call1(document.as_ref(), &JsValue::from_str("copy"))?;
        result.as_bool().unwrap_or(false)
    } else {
        false
    };
    textarea.remove();
    Ok(success)
}
