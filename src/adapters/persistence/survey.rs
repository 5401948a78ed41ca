use async_trait::async_trait;

use crate::{
    adapters::persistence::{JsonFilePersistence, read_array, write_array},
    app_error::AppResult,
    domain::entities::survey_response::SurveyRecord,
    use_cases::survey::SurveyRepo,
};

#[async_trait]
impl SurveyRepo for JsonFilePersistence {
    async fn load_responses(&self) -> AppResult<Vec<SurveyRecord>> {
        Ok(read_array(self.survey_path()).await)
    }

    async fn save_responses(&self, responses: &[SurveyRecord]) -> AppResult<()> {
        write_array(self.survey_path(), responses).await
    }
}
