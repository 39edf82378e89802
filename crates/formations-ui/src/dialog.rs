//! Blocking browser dialogs

use tracing::warn;

use formations_core::Dialogs;

use crate::error::{Result, UiError};

fn window() -> Result<web_sys::Window> {
    web_sys::window().ok_or(UiError::NoWindow)
}

/// Asks the user to confirm `message`.
///
/// # Errors
/// Returns `UiError` if there is no window or the dialog is refused.
pub fn confirm(message: &str) -> Result<bool> {
    window()?
        .confirm_with_message(message)
        .map_err(|err| UiError::Dialog(format!("{err:?}")))
}

/// Shows `message` in an alert box.
///
/// # Errors
/// Returns `UiError` if there is no window or the dialog is refused.
pub fn alert(message: &str) -> Result<()> {
    window()?
        .alert_with_message(message)
        .map_err(|err| UiError::Dialog(format!("{err:?}")))
}

/// Alerts `message`, logging instead when the browser refuses.
pub fn notify(message: &str) {
    if let Err(err) = alert(message) {
        warn!(%err, message, "could not show alert");
    }
}

/// `Dialogs` backed by the browser window. A dialog that cannot be shown
/// counts as a refusal.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserDialogs;

impl Dialogs for BrowserDialogs {
    fn confirm(&self, message: &str) -> bool {
        confirm(message).unwrap_or_else(|err| {
            warn!(%err, "confirmation unavailable");
            false
        })
    }

    fn alert(&self, message: &str) {
        notify(message);
    }
}
