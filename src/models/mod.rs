pub mod analytics;
pub mod call_log;
pub mod dashboard;
pub mod error;
