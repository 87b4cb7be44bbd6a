//! Blocking Notifications
//!
//! `window.alert` / `window.confirm`, behind a trait for tests.

pub trait Notifier {
    /// Show a blocking message
    fn alert(&self, message: &str);

    /// Ask a blocking yes/no question
    fn confirm(&self, message: &str) -> bool;
}

/// Native browser dialogs
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNotifier;

impl Notifier for BrowserNotifier {
    fn alert(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.alert_with_message(message) {
                log::warn!("alert failed: {:?}", e);
            }
        }
    }

    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
}
