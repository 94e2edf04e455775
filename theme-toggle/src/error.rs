use wasm_bindgen::JsValue;

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum ThemeError {
    #[error("Required element not found: #{id}")]
    MissingElement { id: String },
    #[error("No document available")]
    NoDocument,
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("DOM error: {0}")]
    Dom(String),
    #[error("Invalid theme config: {0}")]
    Config(String),
}

impl ThemeError {
    pub(crate) fn storage(err: JsValue) -> Self {
        ThemeError::Storage(describe(&err))
    }

    pub(crate) fn dom(err: JsValue) -> Self {
        ThemeError::Dom(describe(&err))
    }
}

impl From<ThemeError> for JsValue {
    fn from(err: ThemeError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}
