use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use kotoba_client::ParseService;
use kotoba_types::AppEvent;
use tokio::runtime::Handle;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::events::event_loop;
use crate::state::AppState;

/// Centralized channel management
pub struct ChannelSet {
    pub app_to_ui: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
    pub ui_to_app: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
}

impl ChannelSet {
    pub fn new(capacity: usize) -> Self {
        Self {
            app_to_ui: kanal::bounded_async(capacity),
            ui_to_app: kanal::bounded_async(capacity),
        }
    }
}

/// Backend task spawning and lifecycle
pub struct AppController {
    channels: ChannelSet,
    state: Arc<AppState>,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(state: Arc<AppState>, capacity: usize) -> Self {
        Self {
            channels: ChannelSet::new(capacity),
            state,
            cancel_token: CancellationToken::new(),
        }
    }

    /// Ends of the channels the UI thread holds
    pub fn ui_channels(&self) -> (AsyncReceiver<AppEvent>, AsyncSender<AppEvent>) {
        (
            self.channels.app_to_ui.1.clone(),
            self.channels.ui_to_app.0.clone(),
        )
    }

    pub fn spawn_tasks(
        &self,
        runtime: &Handle,
        service: Arc<dyn ParseService>,
    ) -> JoinSet<anyhow::Result<()>> {
        let mut tasks = JoinSet::new();

        // Event loop
        tasks.spawn_on(
            event_loop(
                self.state.clone(),
                self.channels.ui_to_app.1.clone(),
                self.channels.app_to_ui.0.clone(),
                service,
                self.cancel_token.child_token(),
            ),
            runtime,
        );

        // Ctrl+C closes the window
        let cancel = self.cancel_token.child_token();
        let to_ui = self.channels.app_to_ui.0.clone();
        tasks.spawn_on(
            async move {
                tokio::select! {
                    result = tokio::signal::ctrl_c() => {
                        result?;
                        tracing::info!("Ctrl+C received");
                        to_ui.send(AppEvent::Shutdown).await?;
                    }
                    _ = cancel.cancelled() => {}
                }
                Ok::<(), anyhow::Error>(())
            },
            runtime,
        );

        tasks
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}
