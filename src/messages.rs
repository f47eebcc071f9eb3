//! Flash message auto-dismissal.
//!
//! A message stays visible for `dismiss_delay`, fades out for
//! `fade_duration` and is then removed.

use std::time::Duration;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::config::FeedbackConfig;

/// Lifecycle of a flash message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissPhase {
    Visible,
    Fading,
    Removed,
}

/// When a message starts fading and when it disappears.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DismissSchedule {
    pub fade_at: Duration,
    pub remove_at: Duration,
}

impl DismissSchedule {
    pub fn new(config: &FeedbackConfig) -> Self {
        Self {
            fade_at: config.dismiss_delay,
            remove_at: config.dismiss_delay.saturating_add(config.fade_duration),
        }
    }

    /// Phase of a message `elapsed` after it was shown.
    pub fn phase_at(&self, elapsed: Duration) -> DismissPhase {
        if elapsed < self.fade_at {
            DismissPhase::Visible
        } else if elapsed < self.remove_at {
            DismissPhase::Fading
        } else {
            DismissPhase::Removed
        }
    }
}

impl Default for DismissSchedule {
    fn default() -> Self {
        Self::new(&FeedbackConfig::default())
    }
}

/// Drives one message through its schedule, sending `Fading` then `Removed`.
///
/// Returns the last phase reached. Cancelling the token keeps the message in
/// whatever phase it was in, even while a send is waiting on a full channel.
#[cfg(feature = "async")]
pub async fn run_dismiss(
    schedule: DismissSchedule,
    token: CancellationToken,
    tx: mpsc::Sender<DismissPhase>,
) -> DismissPhase {
    let mut phase = DismissPhase::Visible;
    let steps = [
        (schedule.fade_at, DismissPhase::Fading),
        (schedule.remove_at.saturating_sub(schedule.fade_at), DismissPhase::Removed),
    ];

    for (wait, next) in steps {
        tokio::select! {
            _ = token.cancelled() => {
                #[cfg(feature = "tracing")]
                tracing::debug!("message dismissal cancelled in phase {:?}", phase);
                return phase;
            }
            _ = tokio::time::sleep(wait) => {}
        }

        phase = next;
        let sent = tokio::select! {
            biased;
            _ = token.cancelled() => return phase,
            sent = tx.send(phase) => sent,
        };

        if let Err(_e) = sent {
            #[cfg(feature = "tracing")]
            tracing::error!("Failed to send dismiss phase: {}", _e);
            return phase;
        }
    }

    phase
}


#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_run_dismiss_full_lifecycle() {
        let (tx, mut rx) = mpsc::channel(4);
        let token = CancellationToken::new();
        let start = tokio::time::Instant::now();

        let last = run_dismiss(DismissSchedule::default(), token, tx).await;

        assert_eq!(last, DismissPhase::Removed);
        assert!(start.elapsed() >= Duration::from_millis(5300));
        assert_eq!(rx.recv().await, Some(DismissPhase::Fading));
        assert_eq!(rx.recv().await, Some(DismissPhase::Removed));
        assert_eq!(rx.recv().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_dismiss_cancelled_before_fade() {
        let (tx, mut rx) = mpsc::channel(4);
        let token = CancellationToken::new();
        token.cancel();

        let last = run_dismiss(DismissSchedule::default(), token, tx).await;

        assert_eq!(last, DismissPhase::Visible);
        assert_eq!(rx.recv().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_dismiss_cancel_while_receiver_stalled() {
        // Capacity 1 and nobody reads: sending `Removed` blocks
        let (tx, _rx) = mpsc::channel(1);
        let token = CancellationToken::new();

        let handle = tokio::spawn(run_dismiss(DismissSchedule::default(), token.clone(), tx));

        tokio::time::sleep(Duration::from_secs(10)).await;
        token.cancel();

        let last = tokio::time::timeout(Duration::from_secs(5), handle)
            .await
            .expect("dismissal should stop after cancellation")
            .expect("dismissal task should not panic");
        assert_eq!(last, DismissPhase::Removed);
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_dismiss_receiver_dropped() {
        let (tx, rx) = mpsc::channel(4);
        drop(rx);

        let last = run_dismiss(DismissSchedule::default(), CancellationToken::new(), tx).await;
        assert_eq!(last, DismissPhase::Fading);
    }
}
