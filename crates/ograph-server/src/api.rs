//! HTTP endpoints for the ograph service

use anyhow::Result;
use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use serde_json::json;
use std::path::PathBuf;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use uuid::Uuid;

use ograph_common::OGraphError;
use ograph_complexity::{resolve, SampleSeries};
use ograph_config::{Config, GraphSettings};
use ograph_graphs::{CurveChartRenderer, DataSet, GraphConfig, GraphRenderer, StyleConfig};

/// Shared application state for the API
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<Config>,
    /// Chart renderer
    pub renderer: Arc<CurveChartRenderer>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            renderer: Arc::new(CurveChartRenderer::new()),
        }
    }
}

/// Query parameters for the graph-generation endpoint
#[derive(Debug, Deserialize)]
pub struct GenerateGraphQuery {
    /// Time complexity (e.g., "nlogn", "n2", "2^h")
    pub complexity: Option<String>,
    /// Maximum input size to plot
    pub n_max: Option<u32>,
}

/// API error response wrapper
///
/// Input errors map to 400 with the error message as the detail; everything
/// else maps to 500 with a wrapped message.
#[derive(Debug)]
pub struct ApiError(OGraphError);

impl From<OGraphError> for ApiError {
    fn from(err: OGraphError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = if self.0.is_client_error() {
            (StatusCode::BAD_REQUEST, self.0.to_string())
        } else {
            tracing::error!(error = %self.0, "request failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Error generating graph: {}", self.0),
            )
        };
        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

/// Create the API router with all endpoints
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/status", get(get_status))
        .route("/generate-graph", get(generate_graph))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

/// Liveness endpoint
async fn get_status() -> Json<serde_json::Value> {
    Json(json!({ "message": "Server is running" }))
}

/// Generate a time-complexity graph and return it as a PNG image
async fn generate_graph(
    Query(query): Query<GenerateGraphQuery>,
    State(state): State<AppState>,
) -> Result<Response, ApiError> {
    let complexity = query
        .complexity
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| {
            OGraphError::validation_field("complexity query parameter is required", "complexity")
        })?;
    let n_max = query.n_max.unwrap_or(state.config.server.default_n_max);

    let resolved = resolve(complexity)?;
    let series = SampleSeries::generate(resolved.class, n_max)?;

    let dataset = DataSet::from_points(&resolved.label, &series.points);
    let graph_config = build_graph_config(&state.config.graph, &resolved.label);

    let bytes = state
        .renderer
        .render_to_bytes(&graph_config, &dataset)
        .await?;

    if state.config.artifact.enabled {
        archive_graph(&state.config.artifact.dir, &bytes).await?;
    }

    info!(
        complexity = %complexity,
        label = %resolved.label,
        n_max,
        "generated complexity graph"
    );

    Ok(([(header::CONTENT_TYPE, "image/png")], bytes).into_response())
}

/// Persist a rendered graph under a unique per-request file name
async fn archive_graph(dir: &str, bytes: &[u8]) -> Result<(), OGraphError> {
    let dir = PathBuf::from(dir);
    tokio::fs::create_dir_all(&dir).await?;
    let path = dir.join(format!("time_complexity_{}.png", Uuid::new_v4()));
    tokio::fs::write(&path, bytes).await?;
    tracing::debug!(path = %path.display(), "archived rendered graph");
    Ok(())
}

/// Build the chart configuration from application settings and the curve label
fn build_graph_config(settings: &GraphSettings, label: &str) -> GraphConfig {
    GraphConfig {
        title: format!("Time Complexity Analysis: {label}"),
        width: settings.width,
        height: settings.height,
        x_label: Some("Input Size (n)".to_string()),
        y_label: Some("Number of Operations".to_string()),
        style: StyleConfig {
            background_color: settings.background_color.clone(),
            primary_color: settings.primary_color.clone(),
            font_family: settings.font_family.clone(),
            title_font_size: settings.font_size + 6,
            label_font_size: settings.font_size,
            show_grid: settings.show_grid,
            show_legend: settings.show_legend,
        },
    }
}

/// Start the API server
pub async fn start_server(state: AppState, bind_address: &str) -> Result<()> {
    info!("Starting ograph server on {}", bind_address);

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(bind_address).await?;

    info!("ograph server listening on {}", bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {:?}", e);
        return;
    }
    info!("Received shutdown signal, shutting down");
}
