use serde::Serialize;
use serde_json::Value;

use super::record::scalar_text;

/// A survey submission exactly as the client sent it. Nothing about its
/// shape is enforced; it is persisted and exported verbatim.
pub type SurveyRecord = Value;

pub const SURVEY_CSV_COLUMNS: [&str; 6] = [
    "email",
    "careerStage",
    "currentCards",
    "topProducts",
    "dreamFeature",
    "submittedAt",
];

/// Typed read view over a [`SurveyRecord`]. Fields with an unexpected type
/// read as absent instead of failing the whole record.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyResponse {
    pub email: Option<String>,
    pub career_stage: Option<String>,
    pub current_cards: Vec<String>,
    pub top_products: Vec<String>,
    pub dream_feature: Option<String>,
    pub submitted_at: Option<String>,
}

impl SurveyResponse {
    pub fn from_record(record: &SurveyRecord) -> Self {
        let text = |key: &str| record.get(key).and_then(Value::as_str).map(str::to_owned);
        let list = |key: &str| {
            record
                .get(key)
                .and_then(Value::as_array)
                .map(|items| items.iter().filter_map(Value::as_str).map(str::to_owned).collect())
                .unwrap_or_default()
        };

        Self {
            email: text("email"),
            career_stage: text("careerStage"),
            current_cards: list("currentCards"),
            top_products: list("topProducts"),
            dream_feature: text("dreamFeature"),
            submitted_at: text("submittedAt"),
        }
    }
}

/// Field values of a raw record in `SURVEY_CSV_COLUMNS` order.
///
/// Arrays are joined with `"; "`. Falsy scalars (`null`, `false`, `0`, `""`
/// or a missing key) render empty. Objects render as compact JSON.
pub fn survey_csv_fields(record: &SurveyRecord) -> [String; 6] {
    SURVEY_CSV_COLUMNS.map(|column| match record.get(column) {
        Some(Value::Array(items)) => items.iter().map(list_item_text).collect::<Vec<_>>().join("; "),
        Some(value) => scalar_text(value),
        None => String::new(),
    })
}

fn list_item_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
