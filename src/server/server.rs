//! HTTP wrapper around the dashboard assembler.
//!
//! A deliberately thin layer: one data endpoint serving the assembled
//! aggregate payload, one status endpoint. All logic lives below.

use anyhow::Result;
use std::time::Duration;

use axum::{
    extract::State,
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tracing::{error, info};

use super::{http_cache, log_requests, state::*, ServerConfig};

/// User-facing message for a failed assembly pass. The dashboard shows it
/// verbatim in its unavailable state.
const UNAVAILABLE_MESSAGE: &str =
    "Failed to fetch data from MoSPI. Data temporarily unavailable.";

#[derive(Serialize)]
struct ServerStats {
    pub uptime: String,
    pub hash: String,
}

#[derive(Serialize)]
struct ErrorBody {
    pub error: String,
}

fn format_uptime(duration: Duration) -> String {
    let total_seconds = duration.as_secs();

    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}d {:02}:{:02}:{:02}", days, hours, minutes, seconds)
}

async fn get_status(State(state): State<ServerState>) -> impl IntoResponse {
    Json(ServerStats {
        uptime: format_uptime(state.start_time.elapsed()),
        hash: state.hash.clone(),
    })
}

/// Serve the full aggregate payload.
///
/// Either the whole assembly succeeds or the dashboard gets a 503 with a
/// displayable error; no partial aggregate is ever returned.
async fn get_dashboard(State(state): State<ServerState>) -> Response {
    match state.assembler.fetch_all().await {
        Ok(data) => Json(data).into_response(),
        Err(err) => {
            error!("dashboard assembly failed: {:#}", err);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ErrorBody {
                    error: UNAVAILABLE_MESSAGE.to_string(),
                }),
            )
                .into_response()
        }
    }
}

pub fn make_app(config: ServerConfig, assembler: GuardedAssembler) -> Router {
    let state = ServerState::new(config.clone(), assembler);

    let data_routes: Router = Router::new()
        .route("/plfs", get(get_dashboard))
        .layer(middleware::from_fn_with_state(
            config.http_cache,
            http_cache,
        ))
        .with_state(state.clone());

    let status_routes: Router = Router::new()
        .route("/status", get(get_status))
        .with_state(state.clone());

    Router::new()
        .nest("/api", data_routes.merge(status_routes))
        .layer(middleware::from_fn_with_state(state, log_requests))
}

pub async fn run_server(config: ServerConfig, assembler: GuardedAssembler) -> Result<()> {
    let port = config.port;
    let app = make_app(config, assembler);

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port)).await?;
    info!("listening on 127.0.0.1:{}", port);

    Ok(axum::serve(listener, app).await?)
}
