//! `serve` command: the status page over HTTP, recomputed on every request.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::{
    cli::types::{Gameweek, LeagueId},
    commands::gameweek::{run_cycle, CycleOptions, GameweekView},
    config::AppConfig,
    fpl::DraftSource,
    render::render_page,
    Result,
};

use super::common::build_source;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn DraftSource>,
    pub league_id: LeagueId,
    pub opts: CycleOptions,
}

/// `?gw=N` selects a gameweek other than the current one.
#[derive(Debug, Default, Deserialize)]
pub struct GameweekQuery {
    pub gw: Option<u8>,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

fn requested_gameweek(
    query: &GameweekQuery,
    opts: &CycleOptions,
) -> std::result::Result<Option<Gameweek>, Response> {
    query
        .gw
        .map(|gw| Gameweek::new(gw).within_season(opts.max_gameweek))
        .transpose()
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()).into_response())
}

async fn build_view(
    state: &AppState,
    query: &GameweekQuery,
) -> std::result::Result<GameweekView, Response> {
    let gameweek = requested_gameweek(query, &state.opts)?;
    Ok(run_cycle(state.source.as_ref(), state.league_id, gameweek, &state.opts).await)
}

/// `GET /`
pub async fn page_handler(
    State(state): State<AppState>,
    Query(query): Query<GameweekQuery>,
) -> Response {
    match build_view(&state, &query).await {
        Ok(view) => Html(render_page(&view)).into_response(),
        Err(rejection) => rejection,
    }
}

/// `GET /api/gameweek`
pub async fn gameweek_handler(
    State(state): State<AppState>,
    Query(query): Query<GameweekQuery>,
) -> Response {
    match build_view(&state, &query).await {
        Ok(view) => Json(view).into_response(),
        Err(rejection) => rejection,
    }
}

/// `GET /health`
pub async fn health_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy",
            version: env!("CARGO_PKG_VERSION"),
        }),
    )
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(page_handler))
        .route("/api/gameweek", get(gameweek_handler))
        .route("/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind `config.listen_addr` and serve until the process is stopped.
pub async fn handle_serve(config: &AppConfig) -> Result<()> {
    let state = AppState {
        source: build_source(config)?,
        league_id: config.require_league_id()?,
        opts: CycleOptions::from(config),
    };

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    info!(addr = %config.listen_addr, league = %state.league_id, "server listening");

    axum::serve(listener, build_router(state)).await?;
    Ok(())
}
