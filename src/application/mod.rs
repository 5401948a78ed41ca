pub mod admin_key;
pub mod app_error;
pub mod csv;
pub mod use_cases;
pub mod validators;
