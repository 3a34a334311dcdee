//! Catalog observability.
//!
//! - structured logging through `tracing`, with daily-rolling JSON files
//! - optional OpenTelemetry export when `OTEL_EXPORTER_OTLP_ENDPOINT` is set
//! - Prometheus metrics for HTTP traffic and business events
//!
//! Compiling without the `observability` feature, or running with
//! `OBSERVABILITY_ENABLED=false`, leaves console logging only. The public
//! surface is identical either way so callers never need `cfg` attributes.
//!
//! ```no_run
//! use catalog_observability::{init_tracing, shutdown_tracer};
//!
//! #[tokio::main]
//! async fn main() {
//!     init_tracing();
//!     // ... application code ...
//!     shutdown_tracer().await;
//! }
//! ```

use std::sync::OnceLock;

pub mod basic_logging;
pub mod logging;
#[cfg(feature = "observability")]
pub mod metrics;

#[cfg(not(feature = "observability"))]
mod stubs;

pub use logging::{init_tracing, logging_middleware, shutdown_tracer};

#[cfg(feature = "observability")]
pub use metrics::{
    init_metrics, metrics_middleware, track_entity_created, track_jwt_issued,
    track_login_failure, track_login_success, track_user_registered,
};

#[cfg(not(feature = "observability"))]
pub use stubs::*;

static OBSERVABILITY_ENABLED: OnceLock<bool> = OnceLock::new();

/// Runtime switch read once from `OBSERVABILITY_ENABLED` (enabled unless set
/// to `false` or `0`). Always `false` without the `observability` feature.
pub fn is_observability_enabled() -> bool {
    cfg!(feature = "observability")
        && *OBSERVABILITY_ENABLED.get_or_init(|| {
            std::env::var("OBSERVABILITY_ENABLED")
                .map(|v| !v.eq_ignore_ascii_case("false") && v != "0")
                .unwrap_or(true)
        })
}
