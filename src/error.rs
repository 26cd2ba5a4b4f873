// Errors raised while wiring the page to the DOM

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Error, Debug)]
pub enum PageError {
    #[error("no global window")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("missing element: {0}")]
    MissingElement(String),

    #[error("canvas 2d context unavailable")]
    ContextUnavailable,

    #[error("element {0} is not of the expected type")]
    WrongElementType(String),

    #[error("javascript error: {0}")]
    Js(String),
}

pub type Result<T> = std::result::Result<T, PageError>;

impl PageError {
    // Browser APIs report failures as opaque JsValues; keep whatever text they carry
    pub fn from_js(value: JsValue) -> PageError {
        let message = value
            .as_string()
            .or_else(|| {
                js_sys::Reflect::get(&value, &JsValue::from_str("message"))
                    .ok()
                    .and_then(|m| m.as_string())
            })
            .unwrap_or_else(|| format!("{:?}", value));
        PageError::Js(message)
    }
}

impl From<PageError> for JsValue {
    fn from(err: PageError) -> JsValue {
        js_sys::Error::new(&err.to_string()).into()
    }
}
