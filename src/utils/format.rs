/// Shown wherever a value is missing from the payload.
pub const PLACEHOLDER: &str = "—";

pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}

pub fn format_value(value: f64) -> String {
    format!("{value:.1}")
}

/// Dollar amount without forced decimals: `1200.0` renders as `$1200`.
pub fn format_dollars(amount: f64) -> String {
    format!("${amount}")
}

pub fn or_placeholder(value: Option<String>) -> String {
    value.unwrap_or_else(|| PLACEHOLDER.to_string())
}
