//! Test app state builder for HTTP-level integration testing.
//!
//! This module provides `TestAppStateBuilder` which creates a minimal `AppState`
//! with in-memory repositories for testing HTTP endpoints.

use std::{net::SocketAddr, path::PathBuf, sync::Arc};

use axum::http::HeaderValue;
use secrecy::SecretString;

use crate::{
    adapters::http::app_state::AppState,
    application::{
        admin_key::AdminKey,
        use_cases::{
            dashboard::DashboardUseCases, survey::SurveyUseCases, waitlist::WaitlistUseCases,
        },
    },
    domain::entities::{
        survey_response::SurveyRecord,
        waitlist_entry::{WaitlistEntry, WaitlistRecord},
    },
    infra::config::AppConfig,
    test_utils::{InMemorySurveyRepo, InMemoryWaitlistRepo},
};

/// Admin key configured by default in `TestAppStateBuilder`.
pub const TEST_ADMIN_KEY: &str = "test-admin-key";

/// Handles to the in-memory repositories behind a built `AppState`.
pub struct TestRepos {
    pub waitlist: Arc<InMemoryWaitlistRepo>,
    pub surveys: Arc<InMemorySurveyRepo>,
}

/// Builder for creating `AppState` with in-memory mocks for testing.
///
/// # Example
///
/// ```ignore
/// let (app_state, repos) = TestAppStateBuilder::new()
///     .with_entry(create_test_entry(|e| e.email = "a@x.com".to_string()))
///     .build_with_repos();
/// ```
pub struct TestAppStateBuilder {
    admin_key: Option<String>,
    entries: Vec<WaitlistRecord>,
    surveys: Vec<SurveyRecord>,
    failing_writes: bool,
}

impl TestAppStateBuilder {
    pub fn new() -> Self {
        Self {
            admin_key: Some(TEST_ADMIN_KEY.to_string()),
            entries: vec![],
            surveys: vec![],
            failing_writes: false,
        }
    }

    pub fn with_entry(mut self, entry: WaitlistEntry) -> Self {
        self.entries.push(entry.into_record());
        self
    }

    /// Seed a raw stored record, whatever its shape.
    pub fn with_record(mut self, record: WaitlistRecord) -> Self {
        self.entries.push(record);
        self
    }

    pub fn with_survey(mut self, record: SurveyRecord) -> Self {
        self.surveys.push(record);
        self
    }

    /// Simulate a deployment where `SURVEY_ADMIN_KEY` is not set.
    pub fn without_admin_key(mut self) -> Self {
        self.admin_key = None;
        self
    }

    /// Make every write to either repository fail.
    pub fn with_failing_writes(mut self) -> Self {
        self.failing_writes = true;
        self
    }

    pub fn build(self) -> AppState {
        self.build_with_repos().0
    }

    pub fn build_with_repos(self) -> (AppState, TestRepos) {
        let (waitlist, surveys) = if self.failing_writes {
            (
                InMemoryWaitlistRepo::failing_writes(),
                InMemorySurveyRepo::failing_writes(),
            )
        } else {
            (InMemoryWaitlistRepo::new(), InMemorySurveyRepo::new())
        };
        *waitlist.entries.lock().unwrap() = self.entries;
        *surveys.responses.lock().unwrap() = self.surveys;
        let waitlist = Arc::new(waitlist);
        let surveys = Arc::new(surveys);

        let config = AppConfig {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 0)),
            admin_key: self.admin_key.map(SecretString::from),
            data_dir: PathBuf::from("."),
            waitlist_file: "waitlist-data.json".to_string(),
            survey_file: "survey-data.json".to_string(),
            cors_origin: HeaderValue::from_static("http://localhost:3000"),
            log_file: None,
        };

        let waitlist_use_cases = Arc::new(WaitlistUseCases::new(waitlist.clone()));
        let survey_use_cases = Arc::new(SurveyUseCases::new(surveys.clone()));

        let app_state = AppState {
            admin_key: AdminKey::new(config.admin_key.as_ref()),
            config: Arc::new(config),
            dashboard_use_cases: Arc::new(DashboardUseCases::new(
                waitlist_use_cases.clone(),
                survey_use_cases.clone(),
            )),
            waitlist_use_cases,
            survey_use_cases,
        };

        (app_state, TestRepos { waitlist, surveys })
    }
}
