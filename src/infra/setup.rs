use std::{fs::File, path::Path, sync::Arc};

use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    adapters::{http::app_state::AppState, persistence::JsonFilePersistence},
    application::admin_key::AdminKey,
    infra::{config::AppConfig, error::InfraError},
    use_cases::{
        dashboard::DashboardUseCases,
        survey::{SurveyRepo, SurveyUseCases},
        waitlist::{WaitlistRepo, WaitlistUseCases},
    },
};

pub async fn init_app_state(config: AppConfig) -> Result<AppState, InfraError> {
    tokio::fs::create_dir_all(config.data_dir())
        .await
        .map_err(|source| InfraError::DataDir {
            path: config.data_dir().display().to_string(),
            source,
        })?;

    let persistence = Arc::new(JsonFilePersistence::new(
        config.waitlist_path(),
        config.survey_path(),
    ));
    info!(
        waitlist = %persistence.waitlist_path().display(),
        survey = %persistence.survey_path().display(),
        "Using JSON data files"
    );

    let admin_key = AdminKey::new(config.admin_key.as_ref());
    if !admin_key.is_configured() {
        tracing::warn!("SURVEY_ADMIN_KEY is not set; admin reads will always be rejected");
    }

    let waitlist_use_cases = Arc::new(WaitlistUseCases::new(
        persistence.clone() as Arc<dyn WaitlistRepo>
    ));
    let survey_use_cases = Arc::new(SurveyUseCases::new(persistence as Arc<dyn SurveyRepo>));

    Ok(AppState {
        config: Arc::new(config),
        admin_key,
        dashboard_use_cases: Arc::new(DashboardUseCases::new(
            waitlist_use_cases.clone(),
            survey_use_cases.clone(),
        )),
        waitlist_use_cases,
        survey_use_cases,
    })
}

pub fn init_tracing(log_file: Option<&Path>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "whitecoat_waitlist=debug,tower_http=debug".into());

    // Console (pretty logs)
    let console_layer = fmt::layer()
        .with_target(false) // don't show target (module path)
        .with_level(true) // show log level
        .pretty(); // human-friendly, with colors

    // File (structured JSON logs)
    let json_layer = log_file.and_then(|path| match File::create(path) {
        Ok(file) => Some(
            fmt::layer()
                .json()
                .with_writer(file)
                .with_current_span(true)
                .with_span_list(true),
        ),
        Err(err) => {
            eprintln!("cannot create log file {}: {err}", path.display());
            None
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(json_layer)
        .try_init()
        .ok();
}

#[cfg(test)]
mod tests {
    use std::{net::SocketAddr, path::PathBuf};

    use axum::http::HeaderValue;
    use secrecy::SecretString;
    use serde_json::json;
    use tempfile::TempDir;

    use super::*;

    fn config(data_dir: PathBuf) -> AppConfig {
        AppConfig {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 0)),
            admin_key: Some(SecretString::from("k".to_string())),
            data_dir,
            waitlist_file: "waitlist-data.json".to_string(),
            survey_file: "survey-data.json".to_string(),
            cors_origin: HeaderValue::from_static("http://localhost:3000"),
            log_file: None,
        }
    }

    #[tokio::test]
    async fn init_app_state_creates_data_dir_and_writes_there() {
        let dir = TempDir::new().unwrap();
        let data_dir = dir.path().join("nested").join("data");

        let app_state = init_app_state(config(data_dir.clone())).await.unwrap();
        app_state.waitlist_use_cases.join("a@b.c", None).await.unwrap();
        app_state.survey_use_cases.submit(json!({})).await.unwrap();

        assert!(data_dir.join("waitlist-data.json").exists());
        assert!(data_dir.join("survey-data.json").exists());
        assert!(app_state.admin_key.verify(Some("k")).is_ok());
    }

    #[tokio::test]
    async fn init_app_state_fails_when_data_dir_is_a_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("occupied");
        std::fs::write(&file, "x").unwrap();

        let result = init_app_state(config(file)).await;

        assert!(matches!(result, Err(InfraError::DataDir { .. })));
    }
}
