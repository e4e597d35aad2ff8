use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use kotoba_client::ParseService;
use kotoba_types::AppEvent;
use tokio_util::sync::CancellationToken;

use crate::state::AppState;

pub mod submit;

use submit::handle_submission;

/// Backend loop: turns UI submissions into parse requests
pub async fn event_loop(
    state: Arc<AppState>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
    service: Arc<dyn ParseService>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    tracing::info!("[EVENT_LOOP] Waiting for submissions");
    loop {
        let event = tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("[EVENT_LOOP] Cancelled");
                break;
            }
            event = ui_to_app_rx.recv() => match event {
                Ok(event) => event,
                Err(e) => {
                    tracing::info!("[EVENT_LOOP] UI channel closed: {}", e);
                    break;
                }
            },
        };

        handle_event(&state, &service, &app_to_ui_tx, event);
    }

    Ok(())
}

fn handle_event(
    state: &Arc<AppState>,
    service: &Arc<dyn ParseService>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    event: AppEvent,
) {
    match event {
        AppEvent::SubmitSentence(submission) => {
            handle_submission(state.clone(), service.clone(), app_to_ui_tx.clone(), submission);
        }
        AppEvent::ParseFinished { .. } | AppEvent::Shutdown => {
            // UI-only events
        }
    }
}
