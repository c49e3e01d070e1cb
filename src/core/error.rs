use thiserror::Error;
use wasm_bindgen::JsValue;

pub type Result<T> = std::result::Result<T, EngineError>;

#[derive(Debug, Error)]
pub enum EngineError {
    /// Stored drawing is not a JSON array of `rgb(r, g, b)` strings.
    #[error("malformed persisted drawing: {0}")]
    MalformedState(String),

    #[error("image export failed: {0}")]
    Export(String),

    #[error("storage error: {0}")]
    Storage(String),

    #[error("invalid config: {0}")]
    Config(String),
}

impl EngineError {
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedState(message.into())
    }

    pub fn export(message: impl Into<String>) -> Self {
        Self::Export(message.into())
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }
}

impl From<EngineError> for JsValue {
    fn from(err: EngineError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
