pub mod record;
pub mod referral_code;
pub mod survey_response;
pub mod waitlist_entry;
