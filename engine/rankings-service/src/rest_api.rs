//! REST API for the power rankings
//!
//! `GET /mfl-scoring` ranks the league on every request and returns either
//! the text table or the JSON payload used by the web page.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::sync::Arc;
use tracing::{error, info};
use warp::http::StatusCode;
use warp::reply::Response;
use warp::{Filter, Reply};

use crate::config::{RenderConfig, ServerConfig};
use crate::error::ServiceError;
use crate::pipeline::{compute_rankings, LeagueSource};
use crate::render::{render, OutputFormat};

/// Query parameters of the scoring endpoint
#[derive(Debug, Default, Deserialize)]
pub struct ScoringParams {
    /// "json" selects the JSON payload; anything else the text table
    pub output: Option<String>,
    /// Overrides the configured name hiding
    pub hide_names: Option<bool>,
}

impl ScoringParams {
    pub fn format(&self) -> OutputFormat {
        match self.output.as_deref() {
            Some("json") => OutputFormat::Json,
            _ => OutputFormat::Table,
        }
    }
}

/// Error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
    pub timestamp: String,
}

/// Error detail
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    fn from_error(err: &ServiceError) -> Self {
        Self {
            error: ErrorDetail { code: err.code().to_string(), message: err.to_string() },
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

fn error_reply(err: ServiceError) -> Response {
    let status = match err {
        ServiceError::Render(_) | ServiceError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        ServiceError::Ranking(_) | ServiceError::Upstream(_) => StatusCode::BAD_GATEWAY,
    };
    error!("Scoring request failed ({}): {}", status, err);

    warp::reply::with_status(warp::reply::json(&ErrorResponse::from_error(&err)), status)
        .into_response()
}

/// Rank the league and render it
pub async fn get_scoring(
    params: ScoringParams,
    source: Arc<dyn LeagueSource>,
    render_config: RenderConfig,
) -> Result<Response, Infallible> {
    let format = params.format();
    let hide_names = params.hide_names.unwrap_or(render_config.hide_team_names);
    info!("Scoring request: format={:?} hide_names={}", format, hide_names);

    let teams = match compute_rankings(source.as_ref()).await {
        Ok(teams) => teams,
        Err(e) => return Ok(error_reply(ServiceError::from_pipeline(e))),
    };

    let body = match render(&teams, format, hide_names) {
        Ok(body) => body,
        Err(e) => return Ok(error_reply(e)),
    };

    let response = match format {
        OutputFormat::Json => {
            warp::reply::with_header(body, "content-type", "application/json").into_response()
        }
        OutputFormat::Table => body.into_response(),
    };
    Ok(response)
}

/// Create all REST API routes
pub fn create_routes(
    source: Arc<dyn LeagueSource>,
    render_config: RenderConfig,
) -> impl Filter<Extract = impl Reply, Error = warp::Rejection> + Clone {
    let source_filter = warp::any().map(move || source.clone());
    let render_filter = warp::any().map(move || render_config.clone());

    let scoring = warp::path("mfl-scoring")
        .and(warp::path::end())
        .and(warp::get())
        .and(warp::query::<ScoringParams>())
        .and(source_filter)
        .and(render_filter)
        .and_then(get_scoring);

    // Health check endpoint
    let health = warp::path("health").and(warp::path::end()).and(warp::get()).map(|| {
        warp::reply::json(&serde_json::json!({
            "status": "healthy",
            "timestamp": chrono::Utc::now().to_rfc3339()
        }))
    });

    scoring.or(health).with(
        warp::cors()
            .allow_any_origin()
            .allow_headers(vec!["content-type"])
            .allow_methods(vec!["GET", "OPTIONS"]),
    )
}

/// Serve the API until Ctrl+C
pub async fn serve(
    server: &ServerConfig,
    render_config: RenderConfig,
    source: Arc<dyn LeagueSource>,
) -> Result<()> {
    let addr = server.socket_addr()?;
    let routes = create_routes(source, render_config);

    let (bound, running) = warp::serve(routes).try_bind_with_graceful_shutdown(addr, async {
        tokio::signal::ctrl_c().await.ok();
        info!("Shutdown signal received");
    })?;

    info!("Rankings service listening on http://{}", bound);
    running.await;
    Ok(())
}
