use axum::{
    Json, Router,
    body::Bytes,
    extract::{Query, State},
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::json;

use crate::{
    adapters::http::{
        app_state::AppState,
        routes::common::{AdminQuery, csv_download, parse_json_body},
    },
    app_error::AppResult,
    domain::entities::survey_response::SurveyRecord,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/survey", get(export).post(submit))
}

async fn submit(State(app_state): State<AppState>, body: Bytes) -> AppResult<impl IntoResponse> {
    let record: SurveyRecord = parse_json_body(&body)?;
    app_state.survey_use_cases.submit(record).await?;
    Ok(Json(json!({ "ok": true })))
}

async fn export(
    State(app_state): State<AppState>,
    Query(query): Query<AdminQuery>,
) -> AppResult<Response> {
    app_state.admin_key.verify(query.key.as_deref())?;

    if query.wants_csv() {
        let csv = app_state.survey_use_cases.export_csv().await?;
        return Ok(csv_download("survey-responses.csv", csv));
    }

    let responses = app_state.survey_use_cases.list().await?;
    Ok(Json(responses).into_response())
}
