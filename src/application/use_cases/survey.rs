use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{info, instrument};

use crate::{
    app_error::AppResult,
    application::csv,
    domain::entities::survey_response::{SURVEY_CSV_COLUMNS, SurveyRecord, survey_csv_fields},
};

/// Whole-array storage for raw survey submissions.
#[async_trait]
pub trait SurveyRepo: Send + Sync {
    async fn load_responses(&self) -> AppResult<Vec<SurveyRecord>>;
    async fn save_responses(&self, responses: &[SurveyRecord]) -> AppResult<()>;
}

/// Reads and writes share one lock so a reader never sees a half-written file.
pub struct SurveyUseCases {
    repo: Arc<dyn SurveyRepo>,
    lock: Mutex<()>,
}

impl SurveyUseCases {
    pub fn new(repo: Arc<dyn SurveyRepo>) -> Self {
        Self {
            repo,
            lock: Mutex::new(()),
        }
    }

    /// Appends the submission exactly as received. No field is checked.
    #[instrument(skip_all)]
    pub async fn submit(&self, record: SurveyRecord) -> AppResult<()> {
        let _guard = self.lock.lock().await;
        let mut responses = self.repo.load_responses().await?;
        responses.push(record);
        self.repo.save_responses(&responses).await?;
        info!(total = responses.len(), "survey response recorded");
        Ok(())
    }

    pub async fn list(&self) -> AppResult<Vec<SurveyRecord>> {
        let _guard = self.lock.lock().await;
        self.repo.load_responses().await
    }

    pub async fn export_csv(&self) -> AppResult<String> {
        let responses = self.list().await?;
        Ok(csv::render(
            &SURVEY_CSV_COLUMNS,
            responses.iter().map(survey_csv_fields),
        ))
    }
}
