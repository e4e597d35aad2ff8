use std::env;
use std::path::PathBuf;

use anyhow::Context;
use kotoba_config::Config;

/// Profile location: `KOTOBA_CONFIG`, else `config.json` in the working directory
pub fn config_path() -> PathBuf {
    env::var("KOTOBA_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config.json"))
}

pub fn load_config() -> anyhow::Result<Config> {
    let path = config_path();
    let config = Config::load_or_default(&path)
        .with_context(|| format!("Failed to load profile {}", path.display()))?;

    tracing::info!(
        "Parse endpoint: {} (discard stale responses: {})",
        config.network.endpoint,
        config.network.discard_stale_responses
    );
    Ok(config)
}
