//! Log output.

use std::io::IsTerminal;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, prelude::*, util::TryInitError, EnvFilter};

fn filter() -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy()
}

/// Log to stderr. Verbosity comes from `RUST_LOG`, INFO by default;
/// recovered conversions log at DEBUG.
pub fn init() -> Result<(), TryInitError> {
    let format = fmt::layer()
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .with_file(false);

    tracing_subscriber::registry()
        .with(format)
        .with(filter())
        .try_init()
}

/// Log to stderr as JSON lines.
pub fn init_json() -> Result<(), TryInitError> {
    let format = fmt::layer()
        .json()
        .with_writer(std::io::stderr)
        .with_file(false);

    tracing_subscriber::registry()
        .with(format)
        .with(filter())
        .try_init()
}
