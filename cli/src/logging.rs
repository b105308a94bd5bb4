//! Log filtering for the `brewkit` binary.

use tracing_subscriber::EnvFilter;

const DEFAULT_DIRECTIVES: &str = "info";

/// Filter for the stderr subscriber.
///
/// `--verbose` turns on debug output everywhere. Otherwise the `RUST_LOG`
/// directives apply when they parse, and `info` when they are absent or do not.
#[must_use]
pub fn log_filter(verbose: bool, rust_log: Option<&str>) -> EnvFilter {
    if verbose {
        return EnvFilter::new("debug");
    }
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVES))
}
