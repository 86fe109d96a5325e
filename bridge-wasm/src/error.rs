//! Error types for the browser bridge

use bridge_traits::error::BridgeError;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

/// Result type for browser bridge operations
pub type WasmResult<T> = Result<T, WasmError>;

/// Errors raised while reading browser globals or calling into JavaScript
#[derive(Error, Debug)]
pub enum WasmError {
    /// JavaScript exception or rejected value
    #[error("JavaScript error: {0}")]
    JavaScript(String),

    /// A required browser global is absent (`window`, `navigator`, ...)
    #[error("Browser global not available: {0}")]
    MissingGlobal(String),

    /// A host API path did not resolve to a function
    #[error("Not a function: {0}")]
    NotCallable(String),

    /// Conversion between Rust and JavaScript values failed
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Building the dispatcher configuration failed
    #[error(transparent)]
    Config(#[from] core_runtime::Error),
}

impl From<WasmError> for BridgeError {
    fn from(err: WasmError) -> Self {
        match err {
            WasmError::MissingGlobal(name) | WasmError::NotCallable(name) => {
                BridgeError::NotAvailable(name)
            }
            WasmError::Serialization(message) => BridgeError::InvalidParams(message),
            other => BridgeError::OperationFailed(other.to_string()),
        }
    }
}

impl From<JsValue> for WasmError {
    fn from(js_value: JsValue) -> Self {
        WasmError::JavaScript(js_message(&js_value))
    }
}

impl From<serde_wasm_bindgen::Error> for WasmError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        WasmError::Serialization(err.to_string())
    }
}

impl From<WasmError> for JsValue {
    fn from(err: WasmError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

/// Best-effort message for a thrown JavaScript value.
pub(crate) fn js_message(js_value: &JsValue) -> String {
    if let Some(message) = js_value.as_string() {
        message
    } else if let Some(error) = js_value.dyn_ref::<js_sys::Error>() {
        error.message().into()
    } else {
        format!("{:?}", js_value)
    }
}
