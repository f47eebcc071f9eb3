//! Async binding that feeds input events into a [`PasswordForm`].

use secrecy::SecretString;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::form::{FormSnapshot, PasswordForm};

/// Change event coming from one of the two password inputs.
#[derive(Debug)]
pub enum FormEvent {
    PrimaryChanged(SecretString),
    ConfirmationChanged(SecretString),
}

impl FormEvent {
    /// Applies the event to the form, recomputing what depends on it.
    pub fn apply(self, form: &mut PasswordForm) {
        match self {
            FormEvent::PrimaryChanged(password) => form.set_primary(password),
            FormEvent::ConfirmationChanged(password) => form.set_confirmation(password),
        }
    }
}

/// Applies every incoming event to `form` and publishes a snapshot after each.
///
/// The form is updated before its snapshot is sent, so a receiver never sees
/// a state older than the last event it caused. Stops when the token is
/// cancelled, the event channel closes or the snapshot receiver goes away,
/// and hands the form back.
pub async fn drive_form(
    mut form: PasswordForm,
    mut events: mpsc::Receiver<FormEvent>,
    token: CancellationToken,
    snapshots: mpsc::Sender<FormSnapshot>,
) -> PasswordForm {
    #[cfg(feature = "tracing")]
    tracing::info!("password form binding started");

    loop {
        let event = tokio::select! {
            biased;
            _ = token.cancelled() => break,
            event = events.recv() => match event {
                Some(event) => event,
                None => break,
            },
        };

        event.apply(&mut form);

        // A stalled receiver must not keep the binding alive past cancellation
        let sent = tokio::select! {
            biased;
            _ = token.cancelled() => break,
            sent = snapshots.send(form.snapshot()) => sent,
        };

        if let Err(_e) = sent {
            #[cfg(feature = "tracing")]
            tracing::error!("Failed to send form snapshot: {}", _e);
            break;
        }
    }

    #[cfg(feature = "tracing")]
    tracing::info!("password form binding stopped");

    form
}
