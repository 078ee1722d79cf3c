pub mod use_dashboard;
pub mod use_theme;
