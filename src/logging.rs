//! Tracing setup
//!
//! Diagnostics go to stderr so command output on stdout stays clean.

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Settings;

/// Environment variable holding an `EnvFilter` directive string
pub const LOG_ENV: &str = "MONEYCOUNT_LOG";

static TRACING_INIT: Once = Once::new();

/// Build the filter: `MONEYCOUNT_LOG` wins, otherwise the configured level
/// for this crate only
pub fn build_filter(settings: &Settings) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| default_filter(&settings.log_level))
}

fn default_filter(level: &str) -> EnvFilter {
    EnvFilter::try_new(format!("moneycount={}", level.trim()))
        .unwrap_or_else(|_| EnvFilter::new("moneycount=warn"))
}

/// Install the global subscriber once
pub fn init(settings: &Settings) {
    TRACING_INIT.call_once(|| {
        let _ = fmt()
            .with_env_filter(build_filter(settings))
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}
