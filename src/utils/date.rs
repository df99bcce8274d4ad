use chrono::Utc;

/// The current calendar date as "YYYY-MM-DD", the value a date input expects.
pub fn today_date_string() -> String {
    Utc::now().format("%Y-%m-%d").to_string()
}
