use std::sync::Arc;
use std::sync::atomic::Ordering;

use kanal::AsyncSender;
use kotoba_client::ParseService;
use kotoba_types::{AppEvent, ParseOutcome, Submission};
use tokio::task::JoinHandle;

use crate::state::AppState;

/// Fire one request without waiting for it.
///
/// Submissions are neither queued nor cancelled: overlapping requests race
/// and their results reach the UI in completion order.
pub fn handle_submission(
    state: Arc<AppState>,
    service: Arc<dyn ParseService>,
    app_to_ui_tx: AsyncSender<AppEvent>,
    submission: Submission,
) -> JoinHandle<()> {
    let in_flight = state.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
    tracing::info!(
        "Submitting {} ({} chars, {} in flight)",
        submission.id,
        submission.sentence.chars().count(),
        in_flight
    );

    tokio::spawn(async move {
        let Submission { id, sentence } = submission;
        let outcome = service.submit(&sentence).await;
        state.in_flight.fetch_sub(1, Ordering::SeqCst);

        match &outcome {
            ParseOutcome::Parsed(analysis) => tracing::info!(
                "Submission {} returned {} tokens, {} still in flight",
                id,
                analysis.len(),
                state.in_flight()
            ),
            ParseOutcome::Failed(cause) => tracing::warn!(
                "Submission {} failed: {}, {} still in flight",
                id,
                cause,
                state.in_flight()
            ),
        }

        if let Err(e) = app_to_ui_tx.send(AppEvent::ParseFinished { id, outcome }).await {
            tracing::error!("Failed to deliver result of {} to UI: {}", id, e);
        }
    })
}
