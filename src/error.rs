// error.rs - Crate error type
//
// Everything fallible returns `Result<T, Error>`. At the wasm boundary the
// error is flattened to a JS string.

use wasm_bindgen::JsValue;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no global window")]
    NoWindow,
    #[error("no document on window")]
    NoDocument,
    #[error("element #{0} not found")]
    MissingElement(String),
    #[error("element #{id} is not a {expected}")]
    WrongElement { id: String, expected: &'static str },
    #[error("2d canvas context not available")]
    NoContext,
    #[error("javascript error: {0}")]
    Js(String),
    #[error("invalid slider value {0:?}")]
    InvalidSlider(String),
    #[error("sprite decode failed: {0}")]
    Decode(#[from] image::ImageError),
    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),
}

impl From<JsValue> for Error {
    fn from(value: JsValue) -> Self {
        let msg = value
            .as_string()
            .unwrap_or_else(|| format!("{value:?}"));
        Error::Js(msg)
    }
}

impl From<Error> for JsValue {
    fn from(err: Error) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
