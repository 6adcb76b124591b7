//! Tracing setup
//!
//! Log output goes to stderr so invoice text on stdout can be piped straight
//! into a clipboard tool.

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding a `tracing` filter directive
pub const LOG_ENV_VAR: &str = "TUTOR_INVOICE_LOG";

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber.
///
/// `TUTOR_INVOICE_LOG` wins when set; otherwise only warnings are shown, or
/// debug output when `verbose` is true. Safe to call more than once.
pub fn init(verbose: bool) {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

        // A subscriber may already be installed by a test harness
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}

fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "tutor_invoice=debug"
    } else {
        "tutor_invoice=warn"
    }
}
