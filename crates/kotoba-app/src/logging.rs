use std::env;

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str =
    "kotoba=info,kotoba_core=info,kotoba_ui=info,kotoba_client=info,kotoba_config=info";

/// Install the global subscriber. `RUST_LOG` overrides the default filter,
/// `KOTOBA_LOG_JSON=1` switches to JSON lines.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let json = env::var("KOTOBA_LOG_JSON").is_ok_and(|v| v == "1" || v.eq_ignore_ascii_case("true"));

    let result = if json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .try_init()
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(atty::is(atty::Stream::Stderr))
            .with_writer(std::io::stderr)
            .try_init()
    };

    if let Err(e) = result {
        eprintln!("tracing already initialized: {e}");
    }
}
