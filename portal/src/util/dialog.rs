//! Native blocking browser dialogs (`confirm` / `alert`).
//!
//! Requires a browser environment; on the server `confirm` answers `false`
//! so no action is ever dispatched during SSR.

#[cfg(test)]
#[path = "dialog_test.rs"]
mod dialog_test;

/// Ask the user to confirm `message`.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        false
    }
}

/// Show `message` in a blocking alert.
pub fn alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if window.alert_with_message(message).is_err() {
                log::warn!("alert failed: {message}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
    }
}
