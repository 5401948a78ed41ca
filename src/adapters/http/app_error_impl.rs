use crate::app_error::{AppError, ErrorCode};
use axum::Json;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the error before it gets converted into a status response.
        match &self {
            AppError::Storage(_) => tracing::error!(error = ?self, "Request failed"),
            _ => tracing::warn!(error = %self, "Request rejected"),
        }

        match self {
            AppError::InvalidEmail => {
                error_resp(StatusCode::BAD_REQUEST, ErrorCode::InvalidEmail, "Invalid email")
            }
            AppError::InvalidInput(_) => {
                error_resp(StatusCode::BAD_REQUEST, ErrorCode::InvalidInput, "Invalid request body")
            }
            AppError::Unauthorized => {
                error_resp(StatusCode::UNAUTHORIZED, ErrorCode::Unauthorized, "Unauthorized")
            }
            AppError::Storage(_) => error_resp(
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorCode::StorageError,
                "Internal error",
            ),
        }
    }
}

fn error_resp(status: StatusCode, code: ErrorCode, message: &'static str) -> Response {
    let body = serde_json::json!({ "code": code.as_str(), "error": message });
    (status, Json(body)).into_response()
}
