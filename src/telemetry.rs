//! Opt-in `tracing` setup for hosts embedding `gleam-chart`.
//!
//! The library only emits events. Hosts that already run a subscriber can
//! ignore this module entirely.

/// Filter applied when `RUST_LOG` is unset: view lifecycle at `info`,
/// everything else at `warn`.
pub const DEFAULT_TRACING_DIRECTIVE: &str = "warn,gleam_chart=info";

/// Installs a compact fmt subscriber filtered by `RUST_LOG`, or by
/// [`DEFAULT_TRACING_DIRECTIVE`] when the variable is missing or malformed.
///
/// Returns `false` without the `telemetry` feature or when a global
/// subscriber is already in place.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_directive(DEFAULT_TRACING_DIRECTIVE)
}

/// Same as [`init_default_tracing`] with a caller-provided fallback directive.
#[must_use]
pub fn init_tracing_with_directive(fallback: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(fallback))
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_TRACING_DIRECTIVE));

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .compact()
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback;
        false
    }
}
