//! Process-wide `tracing` subscriber setup.

use tracing_subscriber::{fmt, EnvFilter};

/// Installs a formatted subscriber. `RUST_LOG` wins over `default_filter`.
///
/// Returns `false` when a global subscriber was already installed, which
/// makes repeated calls (tests, embedding applications) harmless.
pub fn init(default_filter: &str) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_is_rejected_without_panicking() {
        init("debug");
        assert!(!init("info"));
    }
}
