use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Value, json};

use super::{
    record::{field_text, scalar_text},
    referral_code::ReferralCode,
};

/// A stored waitlist record as it sits on disk. Records written by other
/// versions may miss keys, carry extra ones or use other types; they are
/// kept and written back untouched.
pub type WaitlistRecord = Value;

pub const WAITLIST_CSV_COLUMNS: [&str; 4] = ["email", "joinedAt", "referralCode", "referredBy"];

/// A new signup, before it is appended to the stored array.
#[derive(Debug, Clone, PartialEq)]
pub struct WaitlistEntry {
    pub email: String,
    pub joined_at: DateTime<Utc>,
    pub referral_code: ReferralCode,
    pub referred_by: Option<String>,
}

impl WaitlistEntry {
    /// The stored shape: camelCase keys, `joinedAt` as
    /// `2026-01-02T03:04:05.678Z`, `referredBy` as `null` when absent.
    pub fn into_record(self) -> WaitlistRecord {
        json!({
            "email": self.email,
            "joinedAt": format_timestamp(&self.joined_at),
            "referralCode": self.referral_code.as_str(),
            "referredBy": self.referred_by,
        })
    }
}

/// Typed read view over a [`WaitlistRecord`]. Fields that are missing or
/// have an unexpected type read as absent instead of failing the record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoredEntry {
    pub email: Option<String>,
    pub referral_code: Option<String>,
    /// Any truthy value counts as a referrer.
    pub referred_by: Option<String>,
}

impl StoredEntry {
    pub fn from_record(record: &WaitlistRecord) -> Self {
        let text = |key: &str| record.get(key).and_then(Value::as_str).map(str::to_owned);

        Self {
            email: text("email"),
            referral_code: text("referralCode"),
            referred_by: field_text(record, "referredBy"),
        }
    }

    /// Whether this record belongs to an already normalized email.
    pub fn has_email(&self, normalized: &str) -> bool {
        self.email
            .as_deref()
            .is_some_and(|email| normalize_email(email) == normalized)
    }
}

/// Field values of a raw record in `WAITLIST_CSV_COLUMNS` order. Missing or
/// falsy values render empty; `joinedAt` is exported as stored.
pub fn waitlist_csv_fields(record: &WaitlistRecord) -> [String; 4] {
    WAITLIST_CSV_COLUMNS.map(|column| record.get(column).map(scalar_text).unwrap_or_default())
}

/// Trims and lower-cases an email so it can be compared against stored entries.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

pub fn format_timestamp(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}
