//! Tracing setup for applications embedding the storefront.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "info,coursely=debug,reqwest=warn";

/// Installs a fmt subscriber filtered by `RUST_LOG`.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=coursely=trace` - Show trace for coursely crates only
/// - Default: [`DEFAULT_FILTER`]
///
/// Returns false if a global subscriber was already installed.
pub fn init_tracing() -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt().with_env_filter(filter).try_init().is_ok()
}
