//! Test data factories for creating valid test fixtures.
//!
//! Each factory function creates a complete, valid object with sensible defaults.
//! Use the closure parameter to override specific fields as needed.

use chrono::{DateTime, TimeZone, Utc};

use crate::domain::entities::{referral_code::ReferralCode, waitlist_entry::WaitlistEntry};

/// Create a test waitlist entry with sensible defaults.
pub fn create_test_entry(overrides: impl FnOnce(&mut WaitlistEntry)) -> WaitlistEntry {
    let mut entry = WaitlistEntry {
        email: "jane@example.com".to_string(),
        joined_at: test_datetime(),
        referral_code: ReferralCode::generate(),
        referred_by: None,
    };
    overrides(&mut entry);
    entry
}

/// Fixed timestamp for reproducible fixtures.
pub fn test_datetime() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0)
        .single()
        .expect("valid fixed timestamp")
}
