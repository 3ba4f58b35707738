//! Cross-screen UI state

use std::time::Instant;

/// How long a toast stays on screen.
pub const TOAST_MILLIS: u128 = 2500;

#[derive(Debug)]
pub struct UiModel {
    /// Toast message (text, timestamp). Messages starting with "Error:"
    /// render in the error style.
    pub toast_message: Option<(String, Instant)>,

    pub should_quit: bool,
}

impl UiModel {
    pub fn new() -> Self {
        Self {
            toast_message: None,
            should_quit: false,
        }
    }

    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast_message = Some((message.into(), Instant::now()));
    }

    pub fn show_error(&mut self, message: impl std::fmt::Display) {
        self.show_toast(format!("Error: {}", message));
    }

    pub fn dismiss_stale_toast(&mut self, now: Instant) {
        if let Some((_, shown_at)) = self.toast_message {
            if now.duration_since(shown_at).as_millis() >= TOAST_MILLIS {
                self.toast_message = None;
            }
        }
    }
}

impl Default for UiModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn toast_dismisses_after_timeout() {
        let mut ui = UiModel::new();
        ui.show_toast("Saved");
        let shown_at = ui.toast_message.as_ref().unwrap().1;

        ui.dismiss_stale_toast(shown_at + Duration::from_millis(100));
        assert!(ui.toast_message.is_some());

        ui.dismiss_stale_toast(shown_at + Duration::from_millis(2500));
        assert!(ui.toast_message.is_none());
    }

    #[test]
    fn errors_are_prefixed() {
        let mut ui = UiModel::new();
        ui.show_error("upload failed");
        assert_eq!(ui.toast_message.as_ref().unwrap().0, "Error: upload failed");
    }
}
