use std::fmt;
use wasm_bindgen::JsValue;

/// Fatal startup failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientError {
    CanvasNotFound,
    ContextUnavailable,
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::CanvasNotFound => write!(f, "Unable to find the required canvas element."),
            ClientError::ContextUnavailable => {
                write!(f, "Unable to get 2D draw context from the canvas.")
            }
        }
    }
}

impl std::error::Error for ClientError {}

impl From<ClientError> for JsValue {
    fn from(err: ClientError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
