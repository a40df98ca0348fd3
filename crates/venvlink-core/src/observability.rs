//! Tracing initialization.
//!
//! Uses `config::ObservabilityConfig` for VENVLINK_QUIET, VENVLINK_LOG_LEVEL
//! and VENVLINK_LOG_JSON. Output goes to stderr so stdout stays free for
//! command results.

use tracing_subscriber::{prelude::*, EnvFilter};

use crate::config::ObservabilityConfig;

/// Filter directive for the given config. `RUST_LOG` still wins at init time.
pub fn filter_directive(cfg: &ObservabilityConfig) -> String {
    if cfg.quiet {
        "venvlink=warn,venvlink_env=warn".to_string()
    } else {
        cfg.log_level.clone()
    }
}

/// Initialize tracing. Call once at process startup; later calls are no-ops.
pub fn init_tracing() {
    let cfg = ObservabilityConfig::from_env();
    let level = filter_directive(&cfg);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&level));

    let _ = if cfg.log_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .without_time(),
            )
            .try_init()
    };
}
