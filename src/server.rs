//! HTTP Server and Poll Loop
//!
//! This module implements the exporter HTTP server and the background loop
//! that keeps the raid-set family current.
//!
//! # Architecture
//!
//! - **HTTP Server**: Axum-based server exposing `/metrics`, `/health`, and `/` endpoints
//! - **Poll Loop**: Background task that re-runs `rsf info` and reconciles the family
//! - **Startup**: Controller identity is captured once, before the server accepts requests
//!
//! # Endpoints
//!
//! - `GET /` - HTML landing page with links to metrics and health
//! - `GET /metrics` - Prometheus metrics in text format
//! - `GET /health` - Liveness check (always 200 while the server runs)
//!
//! # Error Handling
//!
//! A failed CLI invocation parses to an empty snapshot, which empties the
//! raid-set family until a later poll succeeds; the loop itself never exits
//! and scrapes keep being served throughout. Only the listener failing to
//! bind (or the accept loop dying) is fatal.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, error, info, warn};

use crate::areca::{cli, ArecaCli};
use crate::config::Config;
use crate::error::{ExporterError, Result};
use crate::metrics::ExporterMetrics;

/// Delay between raid-set polls. The CLI takes well under a second to
/// answer, so a fixed post-poll sleep is close enough to a fixed period.
const POLL_INTERVAL: Duration = Duration::from_secs(5);

#[derive(Clone)]
struct AppState {
    metrics: ExporterMetrics,
}

pub async fn start(config: Config) -> Result<()> {
    if config.areca.cli_path.is_empty() {
        return Err(ExporterError::Config(
            "areca.cli_path must not be empty".to_string(),
        ));
    }

    let areca = ArecaCli::new(config.areca.cli_path.clone());

    // Identity is read once and baked into const labels; a controller swap
    // needs a process restart to be picked up.
    let controller = areca.sys_info().await;
    if controller.is_empty() {
        warn!(
            "`{} {}` yielded no identity; controller_info will carry no labels",
            areca.path(),
            cli::SYS_INFO
        );
    } else {
        info!(
            "Captured controller identity ({} labels) from {}",
            controller.len(),
            areca.path()
        );
    }

    let metrics = ExporterMetrics::new(&controller)?;

    let state = AppState {
        metrics: metrics.clone(),
    };

    // Start the background poll loop
    tokio::spawn(poll_loop(areca, metrics));

    // Build the router
    let app = Router::new()
        .route("/", get(root_handler))
        .route("/metrics", get(metrics_handler))
        .route("/health", get(health_handler))
        .with_state(state);

    // Start the server
    let addr = format!("{}:{}", config.server.addr, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("Metrics server listening on {}", addr);
    info!("Metrics available at http://{}/metrics", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| ExporterError::Server(e.to_string()))?;

    Ok(())
}

/// Poll `rsf info` and reconcile the raid-set family, forever.
async fn poll_loop(areca: ArecaCli, metrics: ExporterMetrics) {
    loop {
        let records = areca.rsf_info().await;
        debug!("Poll returned {} raid set record(s)", records.len());
        metrics.raid_sets.store(records);
        sleep(POLL_INTERVAL).await;
    }
}

async fn root_handler() -> impl IntoResponse {
    r#"<html>
<head><title>Areca Exporter</title></head>
<body>
<h1>Areca RAID Prometheus Exporter</h1>
<p><a href="/metrics">Metrics</a></p>
<p><a href="/health">Health</a></p>
</body>
</html>"#
}

async fn metrics_handler(State(state): State<AppState>) -> Response {
    match state.metrics.render() {
        Ok(metrics) => metrics.into_response(),
        Err(e) => {
            error!("Failed to render metrics: {}", e);
            (
                axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                format!("Error rendering metrics: {}", e),
            )
                .into_response()
        }
    }
}

async fn health_handler() -> impl IntoResponse {
    // An empty raid-set family is a valid state (the CLI may be down), so
    // there is nothing to degrade on; reachability of this endpoint is the
    // health signal.
    (axum::http::StatusCode::OK, "OK")
}
