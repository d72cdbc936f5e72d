//! Logging setup for the bundlecfg CLI.
//!
//! Logs go to stderr so that descriptors printed on stdout stay pipeable.
//!
//! The filter is chosen in this order:
//! 1. `--verbose`: DEBUG for bundlecfg crates
//! 2. `--quiet`: ERROR only
//! 3. `RUST_LOG`
//! 4. INFO for bundlecfg crates

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const VERBOSE_FILTER: &str = "bundlecfg=debug,bundlecfg_config=debug,bundlecfg_cli=debug";
pub const QUIET_FILTER: &str = "bundlecfg=error,bundlecfg_config=error,bundlecfg_cli=error";
pub const DEFAULT_FILTER: &str = "bundlecfg=info,bundlecfg_config=info,bundlecfg_cli=info";

/// Pick the filter for the given flags.
pub fn select_filter(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

/// Install the global subscriber. Call once, before any logging.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    init_logger_with_filter(select_filter(verbose, quiet), no_color);
}

/// Install the global subscriber with a custom filter.
pub fn init_logger_with_filter(filter: EnvFilter, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
