use axum::{
    Json, Router,
    body::Bytes,
    extract::{Query, State},
    response::{IntoResponse, Response},
    routing::get,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    adapters::http::{
        app_state::AppState,
        routes::common::{AdminQuery, csv_download, parse_json_body},
    },
    app_error::AppResult,
    application::validators::{optional_referrer, require_email},
    use_cases::waitlist::JoinOutcome,
};

/// Signup body. Fields are untyped here; `require_email` decides what passes.
#[derive(Deserialize)]
struct JoinPayload {
    email: Option<Value>,
    #[serde(rename = "referredBy")]
    referred_by: Option<Value>,
}

#[derive(Serialize)]
struct JoinResponse {
    ok: bool,
    #[serde(flatten)]
    outcome: JoinOutcome,
}

#[derive(Serialize)]
struct CountResponse {
    count: usize,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/waitlist", get(count_or_export).post(join))
}

async fn join(State(app_state): State<AppState>, body: Bytes) -> AppResult<impl IntoResponse> {
    let payload: JoinPayload = parse_json_body(&body)?;
    let email = require_email(payload.email.as_ref())?;
    let referred_by = optional_referrer(payload.referred_by.as_ref());

    let outcome = app_state.waitlist_use_cases.join(email, referred_by).await?;

    Ok(Json(JoinResponse { ok: true, outcome }))
}

/// Without a key only the public count is returned; with one the caller
/// must hold the admin key and gets every entry.
async fn count_or_export(
    State(app_state): State<AppState>,
    Query(query): Query<AdminQuery>,
) -> AppResult<Response> {
    let Some(key) = query.key() else {
        let count = app_state.waitlist_use_cases.count().await?;
        return Ok(Json(CountResponse { count }).into_response());
    };

    app_state.admin_key.verify(Some(key))?;

    if query.wants_csv() {
        let csv = app_state.waitlist_use_cases.export_csv().await?;
        return Ok(csv_download("waitlist.csv", csv));
    }

    let entries = app_state.waitlist_use_cases.list().await?;
    Ok(Json(entries).into_response())
}
