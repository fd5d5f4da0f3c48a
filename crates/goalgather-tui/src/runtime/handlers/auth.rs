use std::time::Duration;

use goalgather_core::forms::AuthOutcome;
use tokio_util::sync::CancellationToken;

use crate::common::TaskKind;
use crate::events::UiEvent;

/// Waits out the simulated sign-in latency, then reports the outcome that
/// was decided when the form was submitted.
pub async fn simulated_auth(
    kind: TaskKind,
    outcome: AuthOutcome,
    delay: Duration,
    cancel: Option<CancellationToken>,
) -> UiEvent {
    let cancel = cancel.unwrap_or_default();
    tokio::select! {
        () = cancel.cancelled() => UiEvent::AuthCancelled { kind },
        () = tokio::time::sleep(delay) => UiEvent::AuthFinished { kind, outcome },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_outcome_arrives_after_delay() {
        let start = tokio::time::Instant::now();
        let event = simulated_auth(
            TaskKind::Login,
            AuthOutcome::Success,
            Duration::from_millis(1500),
            None,
        )
        .await;
        assert!(start.elapsed() >= Duration::from_millis(1500));
        assert!(matches!(
            event,
            UiEvent::AuthFinished {
                kind: TaskKind::Login,
                outcome: AuthOutcome::Success
            }
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_token_wins_over_delay() {
        let token = CancellationToken::new();
        token.cancel();
        let event = simulated_auth(
            TaskKind::SignUp,
            AuthOutcome::Success,
            Duration::from_secs(60),
            Some(token),
        )
        .await;
        assert!(matches!(
            event,
            UiEvent::AuthCancelled {
                kind: TaskKind::SignUp
            }
        ));
    }
}
