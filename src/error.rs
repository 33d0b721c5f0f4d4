//! Error type shared by every component.
//!
//! Component bindings return `Result<(), SiteError>`; the lifecycle logs a
//! failed install and moves on to the next component, so no error here ever
//! stops the page.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("browser window is unavailable")]
    NoWindow,
    #[error("document is unavailable")]
    NoDocument,
    #[error("dom operation failed: {0}")]
    Dom(String),
    #[error("invalid site config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("unknown theme: {0}")]
    UnknownTheme(String),
    #[error("unknown code sample language: {0}")]
    UnknownLang(String),
    #[error("typewriter needs at least one phrase")]
    EmptyPhrases,
    #[error("clipboard api unavailable")]
    ClipboardUnavailable,
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for SiteError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        let detail = value.as_string().unwrap_or_else(|| format!("{value:?}"));
        Self::Dom(detail)
    }
}
