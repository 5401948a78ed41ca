use axum::{
    Json, Router,
    extract::{Query, State},
    response::IntoResponse,
    routing::get,
};

use crate::{
    adapters::http::{app_state::AppState, routes::common::AdminQuery},
    app_error::AppResult,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/stats", get(stats))
}

async fn stats(
    State(app_state): State<AppState>,
    Query(query): Query<AdminQuery>,
) -> AppResult<impl IntoResponse> {
    app_state.admin_key.verify(query.key.as_deref())?;
    let summary = app_state.dashboard_use_cases.summary().await?;
    Ok(Json(summary))
}
