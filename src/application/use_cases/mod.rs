pub mod dashboard;
pub mod survey;
pub mod waitlist;
