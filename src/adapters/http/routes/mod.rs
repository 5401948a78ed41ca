pub mod admin;
pub mod common;
pub mod survey;
pub mod waitlist;

use axum::{Router, routing::get};

use crate::adapters::http::app_state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(waitlist::router())
        .merge(survey::router())
        .nest("/admin", admin::router())
}

/// Liveness probe, mounted outside `/api`.
pub fn health_router() -> Router<AppState> {
    Router::new().route("/health", get(|| async { "ok" }))
}
