//! Confirmation prompts guarding destructive actions.

/// Asks the user to confirm an action (modal dialog, terminal prompt, ...).
#[cfg_attr(test, mockall::automock)]
pub trait Confirm: Send + Sync {
    fn confirm(&self, message: &str) -> bool;
}

/// Fixed answer, for non-interactive use (`--yes`) and tests.
#[derive(Debug, Clone, Copy)]
pub struct AutoConfirm(pub bool);

impl Confirm for AutoConfirm {
    fn confirm(&self, _message: &str) -> bool {
        self.0
    }
}
