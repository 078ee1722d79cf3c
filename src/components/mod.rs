pub mod call_table;
pub mod chart;
pub mod dashboard;
pub mod evolution_chart;
pub mod kpi_grid;
pub mod metric_card;
pub mod origin_chart;
pub mod sentiment_chart;
pub mod status;
pub mod theme_toggle;

pub use dashboard::Dashboard;
pub use status::Status;
pub use theme_toggle::ThemeToggle;
