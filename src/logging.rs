//! Structured logging setup
//!
//! The binary installs a `tracing` subscriber writing to stderr. The filter
//! comes from `KAKEIBO_LOG` (e.g. `KAKEIBO_LOG=kakeibo_plan=debug`) and
//! defaults to `warn` so normal output stays clean.

use std::io::IsTerminal;
use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding the log filter directives
pub const LOG_ENV: &str = "KAKEIBO_LOG";

static INIT: Once = Once::new();

/// Install the global subscriber. Later calls are no-ops.
pub fn init() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

        // another subscriber may already be installed (tests, embedding apps)
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_ansi(std::io::stderr().is_terminal())
            .with_target(false)
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_is_idempotent() {
        super::init();
        super::init();
        tracing::debug!("logging initialised twice without panicking");
    }
}
