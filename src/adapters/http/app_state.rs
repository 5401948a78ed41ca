use std::sync::Arc;

use crate::{
    application::admin_key::AdminKey,
    infra::config::AppConfig,
    use_cases::{dashboard::DashboardUseCases, survey::SurveyUseCases, waitlist::WaitlistUseCases},
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub admin_key: AdminKey,
    pub waitlist_use_cases: Arc<WaitlistUseCases>,
    pub survey_use_cases: Arc<SurveyUseCases>,
    pub dashboard_use_cases: Arc<DashboardUseCases>,
}
