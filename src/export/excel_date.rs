// src/export/excel_date.rs

use crate::utils::time::parse_duration_ms;
use chrono::NaiveDate;

/// Interpret a cell string as a date or an `H:MM:SS` value, returning the
/// Excel serial and its number format.
///
/// Clock times and durations share the `[h]:mm:ss` format so totals above
/// 24 hours are shown unwrapped.
pub(crate) fn parse_to_excel_value(s: &str) -> Option<(&'static str, f64)> {
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(("yyyy-mm-dd", date_to_excel_serial(d)));
    }

    if s.matches(':').count() == 2
        && let Ok(ms) = parse_duration_ms(s)
    {
        return Some(("[h]:mm:ss", ms as f64 / 86_400_000.0));
    }

    None
}

fn date_to_excel_serial(d: NaiveDate) -> f64 {
    match NaiveDate::from_ymd_opt(1899, 12, 30) {
        Some(epoch) => (d - epoch).num_days() as f64,
        None => 0.0,
    }
}
