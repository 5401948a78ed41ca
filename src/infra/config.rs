use std::{
    net::SocketAddr,
    path::{Path, PathBuf},
};

use axum::http::HeaderValue;
use env_helpers::get_env_default;
use secrecy::SecretString;

use crate::infra::error::InfraError;

pub struct AppConfig {
    pub bind_addr: SocketAddr,
    /// Shared secret for admin reads. `None` locks every admin endpoint.
    pub admin_key: Option<SecretString>,
    /// Directory holding the JSON data files.
    pub data_dir: PathBuf,
    pub waitlist_file: String,
    pub survey_file: String,
    pub cors_origin: HeaderValue,
    /// Destination of the structured JSON log. `None` disables the file layer.
    pub log_file: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, InfraError> {
        let bind_addr: SocketAddr =
            get_env_default("BIND_ADDR", SocketAddr::from(([127, 0, 0, 1], 3001)));
        let admin_key = std::env::var("SURVEY_ADMIN_KEY")
            .ok()
            .filter(|key| !key.is_empty())
            .map(SecretString::from);
        let data_dir = PathBuf::from(get_env_default("DATA_DIR", ".".to_string()));
        let waitlist_file: String =
            get_env_default("WAITLIST_FILE", "waitlist-data.json".to_string());
        let survey_file: String = get_env_default("SURVEY_FILE", "survey-data.json".to_string());
        let cors_origin: HeaderValue =
            get_env_default("CORS_ORIGIN", String::from("http://localhost:3000"))
                .parse()
                .map_err(|_| InfraError::ConfigInvalid { var: "CORS_ORIGIN" })?;
        let log_file: String = get_env_default("LOG_FILE", "app.log".to_string());
        let log_file = (!log_file.is_empty()).then(|| PathBuf::from(log_file));

        Ok(Self {
            bind_addr,
            admin_key,
            data_dir,
            waitlist_file,
            survey_file,
            cors_origin,
            log_file,
        })
    }

    pub fn waitlist_path(&self) -> PathBuf {
        self.data_dir.join(&self.waitlist_file)
    }

    pub fn survey_path(&self) -> PathBuf {
        self.data_dir.join(&self.survey_file)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
