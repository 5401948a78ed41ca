use axum::{
    body::Bytes,
    http::header,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, de::DeserializeOwned};

use crate::app_error::{AppError, AppResult};

/// Query string shared by the admin-readable endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct AdminQuery {
    pub key: Option<String>,
    pub format: Option<String>,
}

impl AdminQuery {
    /// The supplied key, treating `?key=` like no key at all.
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref().filter(|k| !k.is_empty())
    }

    pub fn wants_csv(&self) -> bool {
        self.format.as_deref() == Some("csv")
    }
}

/// Parses a request body as JSON regardless of its `Content-Type`.
pub fn parse_json_body<T: DeserializeOwned>(body: &Bytes) -> AppResult<T> {
    serde_json::from_slice(body).map_err(|e| AppError::InvalidInput(e.to_string()))
}

pub fn csv_download(filename: &str, csv: String) -> Response {
    (
        [
            (header::CONTENT_TYPE, "text/csv".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename={filename}"),
            ),
        ],
        csv,
    )
        .into_response()
}
