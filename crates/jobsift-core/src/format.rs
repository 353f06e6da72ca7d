//! Cell formatting helpers.
//!
//! Every helper takes an `Option` and renders `None` as the [`NA`] sentinel,
//! so a missing input can never fail a conversion halfway through a row.

use chrono::{DateTime, Utc};

/// The canonical missing-value marker, used uniformly across all columns.
pub const NA: &str = "N/A";

const GIB: f64 = 1_073_741_824.0;

/// Byte count → gigabytes with two decimals, e.g. `"32.00 GB"`.
pub fn format_bytes_gb(bytes: Option<f64>) -> String {
    match bytes {
        Some(b) => format!("{:.2} GB", b / GIB),
        None => NA.to_string(),
    }
}

/// Bytes per second → `"2.00 GB/s"`.
pub fn format_bandwidth_gbs(bytes_per_sec: Option<f64>) -> String {
    match bytes_per_sec {
        Some(b) => format!("{:.2} GB/s", b / GIB),
        None => NA.to_string(),
    }
}

/// Plain two-decimal rendering, e.g. `"3.14"`.
pub fn format_float(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.2}"),
        None => NA.to_string(),
    }
}

/// Ratio → percentage with two decimals, e.g. `0.4567` → `"45.67%"`.
pub fn format_percentage(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}%", v * 100.0),
        None => NA.to_string(),
    }
}

/// Seconds → `HH:MM:SS`, zero-padded. Hours widen past two digits as needed.
pub fn format_duration(seconds: Option<i64>) -> String {
    match seconds {
        Some(s) => {
            let hours = s / 3600;
            let minutes = (s % 3600) / 60;
            let secs = s % 60;
            format!("{hours:02}:{minutes:02}:{secs:02}")
        }
        None => NA.to_string(),
    }
}

/// Unix epoch seconds → `YYYY-MM-DD HH:MM:SS` in UTC.
///
/// An epoch value outside chrono's representable range is treated as missing.
pub fn format_timestamp(epoch: Option<i64>) -> String {
    epoch
        .and_then(|ts| DateTime::<Utc>::from_timestamp(ts, 0))
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| NA.to_string())
}

/// Pass-through rendering for identity columns: the value's `Display` form,
/// or the sentinel when absent.
pub fn or_na<T: std::fmt::Display>(value: Option<T>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => NA.to_string(),
    }
}
