//! Currency and percentage strings for the dashboard cards.

use super::num::group_formatted;

/// en-US dollar amount with exactly two decimals: `$65,000.00`, `-$200.00`.
pub fn format_currency(value: f64) -> String {
    if value.is_nan() {
        return "$NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "$∞".to_string() } else { "-$∞".to_string() };
    }
    let fixed = format!("{:.2}", value.abs());
    let negative = value < 0.0 && fixed != "0.00";
    format!("{}${}", if negative { "-" } else { "" }, group_formatted(&fixed))
}

/// Two-decimal percentage with an explicit `+` for positive values.
pub fn format_signed_percent(value: f64) -> String {
    let sign = if value > 0.0 { "+" } else { "" };
    format!("{}{:.2}%", sign, value)
}
