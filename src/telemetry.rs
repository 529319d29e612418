//! Telemetry and Observability
//!
//! Structured logging setup. Output format depends on the running
//! environment: compact JSON in production, human-readable elsewhere.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Build the env filter, honoring `RUST_LOG` when set.
fn build_env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,charsheet_server=debug,sqlx=warn,tower_http=debug"))
}

/// Check whether the given environment name means production.
fn is_production(environment: &str) -> bool {
    environment.eq_ignore_ascii_case("production")
}

/// Initialize tracing subscriber.
///
/// Safe to call more than once; subsequent calls are no-ops.
pub fn init_tracing(environment: &str) {
    let env_filter = build_env_filter();

    if is_production(environment) {
        let fmt_layer = fmt::layer().json().with_target(true);

        let _ = tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init();
    } else {
        let fmt_layer = fmt::layer()
            .with_target(true)
            .with_file(true)
            .with_line_number(true);

        let _ = tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init();
    }

    tracing::info!(environment, "Tracing initialized");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_production() {
        assert!(is_production("production"));
        assert!(is_production("PRODUCTION"));
        assert!(!is_production("development"));
        assert!(!is_production("dev"));
        assert!(!is_production(""));
    }

    #[test]
    fn test_init_tracing_does_not_panic_across_environments() {
        // Only the first call installs a subscriber; the rest must
        // still return without panicking.
        init_tracing("development");
        init_tracing("dev");
        init_tracing("production");
        init_tracing("staging");
        init_tracing("production");
    }

    #[test]
    fn test_env_filter_builds() {
        let _ = build_env_filter();
    }
}
