//! Logging init: structured `tracing` output on stderr so stdout stays clean
//! for JSON and HTML.

use std::env;

use tracing_subscriber::EnvFilter;

/// Checked before `RUST_LOG`.
pub const LOG_ENV: &str = "FONTSCOPE_LOG";

/// Filter directives for a `-v` count when no env override is present.
pub fn default_directives(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "warn,fontscope_core=debug,fontscope_cli=debug",
        _ => "trace",
    }
}

fn env_filter(verbosity: u8) -> EnvFilter {
    if let Ok(raw) = env::var(LOG_ENV) {
        if !raw.trim().is_empty() {
            if let Ok(filter) = EnvFilter::try_new(raw.trim()) {
                return filter;
            }
        }
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives(verbosity)))
}

/// Install the global subscriber. A second call is a no-op.
pub fn init_logging(verbosity: u8) {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbosity))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .try_init();

    if installed.is_ok() {
        tracing::debug!(verbosity, "fontscope logging initialized");
    }
}
