//! Blocking user dialogs (`window.alert` / `window.confirm`)

/// Modal dialogs shown to the user.
///
/// Both calls block the UI thread until the user answers.
pub trait UserPrompt {
    fn alert(&self, message: &str);
    /// `true` when the user pressed OK
    fn confirm(&self, message: &str) -> bool;
}

/// Native browser dialogs
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserPrompt;

impl UserPrompt for BrowserPrompt {
    fn alert(&self, message: &str) {
        let Some(window) = web_sys::window() else {
            log::error!("alert skipped, no window: {}", message);
            return;
        };
        if let Err(err) = window.alert_with_message(message) {
            log::error!("alert failed: {:?}", err);
        }
    }

    fn confirm(&self, message: &str) -> bool {
        let Some(window) = web_sys::window() else {
            log::error!("confirm skipped, no window: {}", message);
            return false;
        };
        match window.confirm_with_message(message) {
            Ok(accepted) => accepted,
            Err(err) => {
                log::error!("confirm failed: {:?}", err);
                false
            }
        }
    }
}

/// Ask the user to confirm a destructive action.
pub fn confirm_action(prompt: &impl UserPrompt, message: &str) -> bool {
    prompt.confirm(message)
}

#[cfg(test)]
pub(crate) mod testing {
    use super::UserPrompt;
    use std::cell::RefCell;

    /// Records every dialog and answers confirms with a fixed choice
    #[derive(Default)]
    pub struct RecordingPrompt {
        pub accept: bool,
        pub alerts: RefCell<Vec<String>>,
        pub confirms: RefCell<Vec<String>>,
    }

    impl RecordingPrompt {
        pub fn answering(accept: bool) -> Self {
            Self {
                accept,
                ..Default::default()
            }
        }
    }

    impl UserPrompt for RecordingPrompt {
        fn alert(&self, message: &str) {
            self.alerts.borrow_mut().push(message.to_string());
        }

        fn confirm(&self, message: &str) -> bool {
            self.confirms.borrow_mut().push(message.to_string());
            self.accept
        }
    }
}
