// Route table
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{controls, health_check, index, render};
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/healthz", get(health_check))
        .route("/api/controls", get(controls))
        .route("/api/render", post(render))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
