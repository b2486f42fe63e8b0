use std::env;
use std::time::Duration;

use services::DEFAULT_ADVANCE_DELAY;

/// Settings read from the environment (and `.env`), before CLI overrides.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub rust_log: String,
    pub advance_delay: Duration,
    pub seed_library: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        let advance_delay = env::var("STUDY_ADVANCE_MS")
            .ok()
            .and_then(|value| value.parse::<u64>().ok())
            .map_or(DEFAULT_ADVANCE_DELAY, Duration::from_millis);

        let seed_library = env::var("STUDY_SEED")
            .map(|value| !matches!(value.trim(), "0" | "false" | "no"))
            .unwrap_or(true);

        Self {
            rust_log,
            advance_delay,
            seed_library,
        }
    }
}
