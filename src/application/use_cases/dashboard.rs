use std::{collections::HashSet, sync::Arc};

use serde::Serialize;

use crate::{
    app_error::AppResult,
    application::use_cases::{survey::SurveyUseCases, waitlist::WaitlistUseCases},
    domain::entities::{
        survey_response::{SurveyRecord, SurveyResponse},
        waitlist_entry::{StoredEntry, WaitlistRecord, normalize_email},
    },
};

/// Career breakdown label for responses without a career stage.
pub const UNKNOWN_CAREER_STAGE: &str = "unknown";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelCount {
    pub label: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DreamFeature {
    pub email: Option<String>,
    pub career_stage: Option<String>,
    pub dream_feature: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_responses: usize,
    pub waitlist_count: usize,
    pub career_breakdown: Vec<LabelCount>,
    pub product_ranking: Vec<LabelCount>,
    pub card_distribution: Vec<LabelCount>,
    pub dream_features: Vec<DreamFeature>,
    pub referred_signups: Vec<WaitlistRecord>,
    pub emails_without_survey: Vec<String>,
}

/// Reduces the stored arrays into the admin dashboard's aggregates.
/// Pure: the same inputs always give the same summary.
pub fn summarize(waitlist: &[WaitlistRecord], surveys: &[SurveyRecord]) -> DashboardSummary {
    let responses: Vec<SurveyResponse> = surveys.iter().map(SurveyResponse::from_record).collect();
    let entries: Vec<StoredEntry> = waitlist.iter().map(StoredEntry::from_record).collect();

    let career_breakdown = tally(
        responses
            .iter()
            .map(|r| r.career_stage.as_deref().unwrap_or(UNKNOWN_CAREER_STAGE)),
    );
    let product_ranking = tally(responses.iter().flat_map(|r| r.top_products.iter().map(String::as_str)));
    let card_distribution = tally(responses.iter().flat_map(|r| r.current_cards.iter().map(String::as_str)));

    let dream_features = responses
        .iter()
        .filter_map(|r| {
            let feature = r.dream_feature.as_deref().filter(|f| !f.is_empty())?;
            Some(DreamFeature {
                email: r.email.clone(),
                career_stage: r.career_stage.clone(),
                dream_feature: feature.to_string(),
            })
        })
        .collect();

    let surveyed: HashSet<String> = responses
        .iter()
        .filter_map(|r| r.email.as_deref())
        .map(normalize_email)
        .collect();
    let emails_without_survey = entries
        .iter()
        .filter_map(|e| e.email.clone())
        .filter(|email| !surveyed.contains(&normalize_email(email)))
        .collect();

    let referred_signups = waitlist
        .iter()
        .zip(&entries)
        .filter(|(_, e)| e.referred_by.is_some())
        .map(|(record, _)| record.clone())
        .collect();

    DashboardSummary {
        total_responses: surveys.len(),
        waitlist_count: waitlist.len(),
        career_breakdown,
        product_ranking,
        card_distribution,
        dream_features,
        referred_signups,
        emails_without_survey,
    }
}

/// Counts labels, most frequent first; ties keep first-seen order.
fn tally<'a>(labels: impl Iterator<Item = &'a str>) -> Vec<LabelCount> {
    let mut counts: Vec<LabelCount> = Vec::new();
    for label in labels {
        match counts.iter_mut().find(|c| c.label == label) {
            Some(existing) => existing.count += 1,
            None => counts.push(LabelCount {
                label: label.to_string(),
                count: 1,
            }),
        }
    }
    // stable sort keeps first-seen order among equal counts
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

/// Reads through the other use cases so it shares their file locks.
pub struct DashboardUseCases {
    waitlist: Arc<WaitlistUseCases>,
    surveys: Arc<SurveyUseCases>,
}

impl DashboardUseCases {
    pub fn new(waitlist: Arc<WaitlistUseCases>, surveys: Arc<SurveyUseCases>) -> Self {
        Self { waitlist, surveys }
    }

    pub async fn summary(&self) -> AppResult<DashboardSummary> {
        let waitlist = self.waitlist.list().await?;
        let surveys = self.surveys.list().await?;
        Ok(summarize(&waitlist, &surveys))
    }
}
