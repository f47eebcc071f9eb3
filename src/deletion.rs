//! Confirmation step before an account deletion form is submitted.

pub const DELETE_ACCOUNT_PROMPT: &str =
    "Are you absolutely sure you want to delete your account? This action cannot be undone.";

/// Whether a guarded form submission goes ahead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitDecision {
    Proceed,
    Cancel,
}

impl SubmitDecision {
    pub fn should_submit(&self) -> bool {
        matches!(self, SubmitDecision::Proceed)
    }
}

/// Asks the user to confirm the deletion.
///
/// `ask` receives [`DELETE_ACCOUNT_PROMPT`] and returns the user's answer,
/// e.g. from a browser `confirm` dialog or a terminal prompt.
pub fn confirm_account_deletion<F>(ask: F) -> SubmitDecision
where
    F: FnOnce(&str) -> bool,
{
    if ask(DELETE_ACCOUNT_PROMPT) {
        SubmitDecision::Proceed
    } else {
        #[cfg(feature = "tracing")]
        tracing::info!("Account deletion cancelled by user");
        SubmitDecision::Cancel
    }
}
