use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter: the `LOG_LEVEL` level (info when unset) with chatty
/// dependencies held at warn.
pub(crate) fn default_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        EnvFilter::new(format!(
            "{},tower_http=warn,hyper=warn,tonic=warn,h2=warn,sqlx=warn",
            log_level
        ))
    })
}

/// Compact console logging only. Used when observability is disabled at
/// compile time or through `OBSERVABILITY_ENABLED=false`, and by the CLI.
pub fn init_basic_console_logging() {
    let console_layer = fmt::layer()
        .compact()
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_filter(default_filter());

    // A subscriber may already be installed (tests, embedding binaries).
    let _ = tracing_subscriber::registry().with(console_layer).try_init();
}
