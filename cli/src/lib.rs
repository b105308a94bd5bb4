//! Configuration and commands behind the `brewkit` binary.

mod commands;
mod config;
mod logging;

pub use commands::{ConvertSummary, convert, inspect, units};
pub use config::{CONFIG_FILE, Config, ExportConfig};
pub use logging::log_filter;
