use kanal::{AsyncReceiver, AsyncSender};
use kotoba_config::Config;
use kotoba_core::StalePolicy;
use kotoba_types::AppEvent;

pub fn ui_loop(
    config: &Config,
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let stale_policy = StalePolicy::from_flag(config.network.discard_stale_responses);
    kotoba_ui::ui_loop(&config.ui, stale_policy, app_to_ui_rx, ui_to_app_tx)
}
