use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

#[derive(Debug, Error)]
pub enum Error {
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("unexpected status: {0}")]
    Status(u16),
    #[error("browser error: {0}")]
    Js(String),
}

impl From<JsValue> for Error {
    fn from(value: JsValue) -> Self {
        if let Some(message) = value.as_string() {
            return Error::Js(message);
        }
        match value.dyn_into::<js_sys::Error>() {
            Ok(error) => Error::Js(String::from(error.message())),
            Err(value) => Error::Js(format!("{value:?}")),
        }
    }
}
