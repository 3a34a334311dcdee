use anyhow::Context;
use catalog::router::init_router;
use catalog::state::init_app_state;
use catalog_config::{DatabaseConfig, ServerConfig};
use catalog_observability::{init_metrics, init_tracing, shutdown_tracer};
use dotenvy::dotenv;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_tracing();

    let server = ServerConfig::from_env();
    let database = DatabaseConfig::from_env()?;

    let state = init_app_state(&database)
        .await
        .context("Failed to connect to database")?;

    if server.run_migrations {
        sqlx::migrate!("./migrations")
            .run(&state.db)
            .await
            .context("Failed to run migrations")?;
        info!("Migrations applied");
    }

    if let Some(metrics_app) = init_metrics() {
        let metrics_addr = format!("{}:{}", server.host, server.metrics_port);
        let listener = tokio::net::TcpListener::bind(&metrics_addr)
            .await
            .with_context(|| format!("Failed to bind metrics listener on {}", metrics_addr))?;
        info!(address = %metrics_addr, "Metrics available at /metrics");
        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, metrics_app).await {
                error!(error = %e, "Metrics server stopped");
            }
        });
    }

    let db = state.db.clone();
    let app = init_router(state);

    let address = server.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;
    info!(address = %address, "Server running");
    info!("Swagger UI available at http://{}/swagger-ui", address);
    info!("Scalar UI available at http://{}/scalar", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Shutting down");
    db.close().await;
    shutdown_tracer().await;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for Ctrl-C");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
