use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum DomError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("node is not mounted")]
    NotMounted,
    #[error("could not read scroll offset: {0}")]
    ScrollOffset(String),
    #[error("could not register {event} listener: {message}")]
    Listener { event: &'static str, message: String },
    #[error("intersection observer rejected: {0}")]
    Observer(String),
}

pub(crate) fn js_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
