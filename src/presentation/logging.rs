//! Diagnostic logging
//!
//! `tracing` events go to stderr so they never mix with progress output or
//! the NDJSON stream on stdout.

use tracing_subscriber::EnvFilter;

/// Filter for a verbosity count: warn, then debug, then trace
pub fn default_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "evpn_deploy=debug,warn",
        _ => "evpn_deploy=trace,debug",
    }
}

/// Install the global subscriber. `RUST_LOG` wins over `-v`.
pub fn init(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose > 1)
        .try_init();
}
