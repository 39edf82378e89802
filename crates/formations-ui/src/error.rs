//! Browser-side errors of the UI crate

use thiserror::Error;

/// Failures of the browser environment itself, as opposed to API errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UiError {
    /// No `window` object, e.g. outside a browser.
    #[error("browser window is not available")]
    NoWindow,

    /// A blocking dialog (`alert`/`confirm`) could not be shown.
    #[error("dialog failed: {0}")]
    Dialog(String),
}

/// Result type alias for browser operations
pub type Result<T> = std::result::Result<T, UiError>;
