use chrono::{DateTime, Utc};

/// `0.92` -> `"92.0%"`
pub fn confidence_percent(score: f64) -> String {
    format!("{:.1}%", score * 100.0)
}

/// Width of the confidence bar, clamped for the style attribute.
pub fn confidence_bar_width(score: f64) -> String {
    format!("{:.1}%", (score * 100.0).clamp(0.0, 100.0))
}

pub fn created_at_label(created_at: &DateTime<Utc>) -> String {
    created_at.format("%d %b %Y, %H:%M").to_string()
}

pub fn char_count_label(count: usize) -> String {
    if count == 1 {
        "1 character".to_string()
    } else {
        format!("{} characters", count)
    }
}
