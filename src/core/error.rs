//! Error types for installing page behaviors.
//!
//! Only environment failures are errors. Optional page elements that are
//! absent (no registration form, no user menu) are reported as "not bound"
//! by the behaviors instead.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BehaviorError {
    /// Browser window not available
    #[error("browser window not available")]
    NoWindow,
    /// Window has no document
    #[error("document not available")]
    NoDocument,
    /// Document has no `<head>` to inject styles into
    #[error("document has no <head> element")]
    NoHead,
    /// A DOM call threw
    #[error("DOM operation failed: {0}")]
    Dom(String),
    /// Malformed JSON override block
    #[error("invalid page configuration: {0}")]
    Config(String),
}

impl From<JsValue> for BehaviorError {
    fn from(value: JsValue) -> Self {
        Self::Dom(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}
