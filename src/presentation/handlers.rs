// HTTP request handlers
use crate::application::dashboard_service::DashboardService;
use crate::infrastructure::http_response::{accepts_brotli, json_response};
use crate::presentation::app_state::AppState;
use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

const INDEX_HTML: &str = include_str!("../../assets/index.html");

/// Current control values sent by the page on every change
#[derive(Debug, Deserialize)]
pub struct RenderRequest {
    /// Absent selects every city; an empty list selects none
    pub cities: Option<Vec<String>>,
    pub metric: Option<String>,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Static page hosting the controls and chart containers
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Options and defaults for the dashboard controls
pub async fn controls(headers: HeaderMap, State(state): State<Arc<AppState>>) -> Response {
    let controls = state.dashboard_service.controls();
    into_response(json_response(StatusCode::OK, &controls, accepts_brotli(&headers)).await)
}

/// Recompute the five charts for the submitted control values
pub async fn render(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
    Json(request): Json<RenderRequest>,
) -> Response {
    let compress = accepts_brotli(&headers);

    let filter =
        match DashboardService::filter_from_controls(request.cities, request.metric.as_deref()) {
            Ok(filter) => filter,
            Err(e) => {
                tracing::warn!("Rejected render request: {}", e);
                let body = ErrorBody { error: e.to_string() };
                return into_response(json_response(StatusCode::BAD_REQUEST, &body, compress).await);
            }
        };

    let charts = state.dashboard_service.render(&filter);
    into_response(json_response(StatusCode::OK, &charts, compress).await)
}

fn into_response(result: Result<Response, StatusCode>) -> Response {
    match result {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}
