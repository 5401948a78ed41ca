//! In-memory mock implementations for the storage ports.

use std::sync::{
    Mutex,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;

use crate::{
    app_error::{AppError, AppResult},
    application::use_cases::{survey::SurveyRepo, waitlist::WaitlistRepo},
    domain::entities::{
        survey_response::SurveyRecord,
        waitlist_entry::{WaitlistEntry, WaitlistRecord},
    },
};

/// In-memory implementation of WaitlistRepo for testing.
#[derive(Default)]
pub struct InMemoryWaitlistRepo {
    pub entries: Mutex<Vec<WaitlistRecord>>,
    saves: AtomicUsize,
    fail_writes: bool,
}

impl InMemoryWaitlistRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the repo with initial entries for testing.
    pub fn with_entries(entries: Vec<WaitlistEntry>) -> Self {
        Self::with_records(entries.into_iter().map(WaitlistEntry::into_record).collect())
    }

    /// Seed the repo with raw stored records of any shape.
    pub fn with_records(records: Vec<WaitlistRecord>) -> Self {
        Self {
            entries: Mutex::new(records),
            ..Self::default()
        }
    }

    /// Every save fails with a storage error, like a full or read-only disk.
    pub fn failing_writes() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    /// Get all stored records (for test assertions).
    pub fn get_all(&self) -> Vec<WaitlistRecord> {
        self.entries.lock().unwrap().clone()
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WaitlistRepo for InMemoryWaitlistRepo {
    async fn load_entries(&self) -> AppResult<Vec<WaitlistRecord>> {
        Ok(self.get_all())
    }

    async fn save_entries(&self, entries: &[WaitlistRecord]) -> AppResult<()> {
        if self.fail_writes {
            return Err(AppError::Storage("simulated write failure".into()));
        }
        // Truncate, yield, then fill, like a file being rewritten in place.
        // Unsynchronized callers would see the empty state or interleave.
        self.entries.lock().unwrap().clear();
        tokio::task::yield_now().await;
        *self.entries.lock().unwrap() = entries.to_vec();
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// In-memory implementation of SurveyRepo for testing.
#[derive(Default)]
pub struct InMemorySurveyRepo {
    pub responses: Mutex<Vec<SurveyRecord>>,
    fail_writes: bool,
}

impl InMemorySurveyRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_responses(responses: Vec<SurveyRecord>) -> Self {
        Self {
            responses: Mutex::new(responses),
            ..Self::default()
        }
    }

    pub fn failing_writes() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    pub fn get_all(&self) -> Vec<SurveyRecord> {
        self.responses.lock().unwrap().clone()
    }
}

#[async_trait]
impl SurveyRepo for InMemorySurveyRepo {
    async fn load_responses(&self) -> AppResult<Vec<SurveyRecord>> {
        Ok(self.get_all())
    }

    async fn save_responses(&self, responses: &[SurveyRecord]) -> AppResult<()> {
        if self.fail_writes {
            return Err(AppError::Storage("simulated write failure".into()));
        }
        *self.responses.lock().unwrap() = responses.to_vec();
        Ok(())
    }
}
