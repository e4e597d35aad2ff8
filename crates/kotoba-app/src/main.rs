use std::sync::Arc;

use kotoba_client::{HttpParseClient, ParseService};

pub mod controller;
pub mod events;
pub mod logging;
pub mod profile;
pub mod state;
pub mod ui;


use self::controller::AppController;
use self::state::AppState;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    logging::init_tracing();

    let config = profile::load_config()?;
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let service: Arc<dyn ParseService> =
        Arc::new(HttpParseClient::new(config.network.endpoint.clone()));
    let state = Arc::new(AppState::new());
    let controller = AppController::new(state, config.channel_capacity);

    let mut tasks = controller.spawn_tasks(runtime.handle(), service);
    let (app_to_ui_rx, ui_to_app_tx) = controller.ui_channels();

    // Slint needs the main thread; backend work stays on the runtime
    let ui_result = ui::ui_loop(&config, app_to_ui_rx, ui_to_app_tx);
    if let Err(e) = &ui_result {
        tracing::error!("UI loop exited with error: {e:#}");
    }

    controller.shutdown();
    runtime.block_on(async {
        while let Some(result) = tasks.join_next().await {
            match result {
                Ok(Ok(())) => {}
                Ok(Err(e)) => tracing::warn!("Backend task failed: {e:#}"),
                Err(e) => tracing::error!("Backend task panicked: {e}"),
            }
        }
    });
    tracing::info!("Shut down");

    ui_result
}
