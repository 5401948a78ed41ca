use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use serde::Serialize;
use tokio::sync::Mutex;
use tracing::{debug, info, instrument};

use crate::{
    app_error::{AppError, AppResult},
    application::{csv, validators::is_valid_email},
    domain::entities::{
        referral_code::ReferralCode,
        waitlist_entry::{
            StoredEntry, WAITLIST_CSV_COLUMNS, WaitlistEntry, WaitlistRecord, normalize_email,
            waitlist_csv_fields,
        },
    },
};

/// Whole-array storage for waitlist records.
///
/// `load_entries` returns an empty list when nothing has been stored yet or
/// the stored data is not a JSON array. Records are returned as stored.
#[async_trait]
pub trait WaitlistRepo: Send + Sync {
    async fn load_entries(&self) -> AppResult<Vec<WaitlistRecord>>;
    async fn save_entries(&self, entries: &[WaitlistRecord]) -> AppResult<()>;
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinOutcome {
    /// 1-based place in the list.
    pub position: usize,
    pub referral_code: ReferralCode,
    pub duplicate: bool,
}

/// Reads and writes share one lock so a reader never sees a half-written file.
pub struct WaitlistUseCases {
    repo: Arc<dyn WaitlistRepo>,
    lock: Mutex<()>,
}

impl WaitlistUseCases {
    pub fn new(repo: Arc<dyn WaitlistRepo>) -> Self {
        Self {
            repo,
            lock: Mutex::new(()),
        }
    }

    /// Adds `email` to the waitlist, or reports where it already sits.
    ///
    /// A repeat signup gets the original referral code back and nothing is
    /// written. The caller's identity is not checked.
    #[instrument(skip(self, email))]
    pub async fn join(&self, email: &str, referred_by: Option<String>) -> AppResult<JoinOutcome> {
        if !is_valid_email(email) {
            return Err(AppError::InvalidEmail);
        }
        let normalized = normalize_email(email);

        let _guard = self.lock.lock().await;
        let mut records = self.repo.load_entries().await?;

        let existing = records
            .iter()
            .map(StoredEntry::from_record)
            .enumerate()
            .find(|(_, stored)| stored.has_email(&normalized));
        if let Some((index, stored)) = existing {
            debug!(position = index + 1, "duplicate waitlist signup");
            return Ok(JoinOutcome {
                position: index + 1,
                referral_code: ReferralCode::from(stored.referral_code.unwrap_or_default()),
                duplicate: true,
            });
        }

        let referral_code = ReferralCode::generate();
        let entry = WaitlistEntry {
            email: normalized,
            joined_at: Utc::now(),
            referral_code: referral_code.clone(),
            referred_by,
        };
        records.push(entry.into_record());
        self.repo.save_entries(&records).await?;

        let position = records.len();
        info!(position, referral_code = %referral_code, "waitlist signup recorded");

        Ok(JoinOutcome {
            position,
            referral_code,
            duplicate: false,
        })
    }

    pub async fn count(&self) -> AppResult<usize> {
        Ok(self.list().await?.len())
    }

    pub async fn list(&self) -> AppResult<Vec<WaitlistRecord>> {
        let _guard = self.lock.lock().await;
        self.repo.load_entries().await
    }

    pub async fn export_csv(&self) -> AppResult<String> {
        let records = self.list().await?;
        Ok(csv::render(
            &WAITLIST_CSV_COLUMNS,
            records.iter().map(waitlist_csv_fields),
        ))
    }
}
