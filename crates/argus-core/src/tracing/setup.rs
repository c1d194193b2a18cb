//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::LOG_ENV_VAR;

static INIT: Once = Once::new();

/// Filter applied when `ARGUS_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "argus_core=info,argus_storage=info,argus_cli=info";

/// Initialize the Argus tracing/logging system.
///
/// Reads `ARGUS_LOG` for per-crate log levels, e.g.
/// `ARGUS_LOG=argus_storage=debug,argus_cli=info`.
///
/// Calling it more than once is a no-op.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true))
            .with(filter)
            .init();
    });
}
