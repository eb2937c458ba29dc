/// Format a position or duration in seconds as `m:ss`.
///
/// Invalid values (NaN, infinities, negatives) render as `"0:00"` instead
/// of propagating into the transport bar.
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "0:00".to_string();
    }

    let total = seconds.floor() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

/// Format a total library duration as `"Hh Mm"`, or `"Mm"` under an hour.
pub fn format_total_duration(total_secs: u64) -> String {
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;

    if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else {
        format!("{}m", minutes)
    }
}
