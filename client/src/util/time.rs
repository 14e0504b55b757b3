//! Clock and date formatting for status lines and transcript entries.
//!
//! In the browser these use the operator's locale and timezone through
//! `js_sys::Date`; elsewhere they fall back to UTC / the raw input.

#[cfg(test)]
#[path = "time_test.rs"]
mod time_test;

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsValue;

/// Current time in milliseconds since the Unix epoch.
pub fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0.0, |d| d.as_secs_f64() * 1000.0)
    }
}

/// `HH:MM` label for a millisecond timestamp.
pub fn format_clock(ms: f64) -> String {
    #[cfg(feature = "hydrate")]
    {
        let date = js_sys::Date::new(&JsValue::from_f64(ms));
        clock_label(date.get_hours(), date.get_minutes())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        #[allow(clippy::cast_possible_truncation)]
        let total_minutes = (ms / 60_000.0).floor() as i64;
        let hours = u32::try_from(total_minutes.div_euclid(60).rem_euclid(24)).unwrap_or_default();
        let minutes = u32::try_from(total_minutes.rem_euclid(60)).unwrap_or_default();
        clock_label(hours, minutes)
    }
}

pub(crate) fn clock_label(hours: u32, minutes: u32) -> String {
    format!("{hours:02}:{minutes:02}")
}

/// Localized rendering of an ISO timestamp; `—` when absent.
///
/// Unparseable input is shown as received.
pub fn format_date(raw: Option<&str>) -> String {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return "—".to_owned();
    };
    #[cfg(feature = "hydrate")]
    {
        let date = js_sys::Date::new(&JsValue::from_str(raw));
        if date.get_time().is_nan() {
            return raw.to_owned();
        }
        String::from(date.to_locale_string("default", &JsValue::UNDEFINED))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        raw.to_owned()
    }
}
