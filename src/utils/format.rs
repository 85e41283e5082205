use chrono::NaiveDateTime;

/// Time-of-day for a check-in/check-out timestamp, or a dash placeholder.
pub fn format_time_of_day(timestamp: Option<&NaiveDateTime>) -> String {
    match timestamp {
        Some(ts) => locale_time(ts),
        None => "-".into(),
    }
}

#[cfg(target_arch = "wasm32")]
fn locale_time(ts: &NaiveDateTime) -> String {
    let millis = ts.and_utc().timestamp_millis() as f64;
    let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(millis));
    String::from(date.to_locale_time_string("default"))
}

#[cfg(not(target_arch = "wasm32"))]
fn locale_time(ts: &NaiveDateTime) -> String {
    ts.format("%H:%M:%S").to_string()
}

pub fn format_working_hours(hours: Option<f64>) -> String {
    hours
        .map(|h| format!("{:.2} hrs", h))
        .unwrap_or_else(|| "-".into())
}

pub fn format_date(date: &chrono::NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn ts(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").unwrap()
    }

    #[test]
    fn formats_working_hours_with_suffix() {
        assert_eq!(format_working_hours(Some(7.5)), "7.50 hrs");
        assert_eq!(format_working_hours(Some(0.0)), "0.00 hrs");
        assert_eq!(format_working_hours(None), "-");
    }

    #[test]
    fn missing_timestamp_renders_dash() {
        assert_eq!(format_time_of_day(None), "-");
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn host_time_formatting_is_stable() {
        assert_eq!(
            format_time_of_day(Some(&ts("2025-03-01T09:05:00"))),
            "09:05:00"
        );
    }

    #[test]
    fn formats_dates_iso() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        assert_eq!(format_date(&date), "2025-03-01");
    }
}
