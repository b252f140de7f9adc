//! Tracing bootstrap shared by the `serve` and `export_site` binaries.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter: info for this crate, debug for request tracing, warn otherwise.
pub const DEFAULT_FILTER: &str = "portfolio_site=info,tower_http=debug,axum=debug,warn";

/// Installs the global subscriber. `RUST_LOG` overrides `default_filter`.
///
/// Returns `false` when a subscriber was already installed (e.g. in tests).
pub fn init_tracing(default_filter: &str) -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_harmless() {
        init_tracing(DEFAULT_FILTER);
        assert!(!init_tracing(DEFAULT_FILTER));
    }
}
