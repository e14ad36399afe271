use chrono::{DateTime, Utc};

pub fn now() -> DateTime<Utc> {
    Utc::now()
}

pub fn format_deadline(dt: DateTime<Utc>) -> String {
    dt.format("%d %b %Y").to_string()
}

pub fn format_clock(dt: DateTime<Utc>) -> String {
    dt.format("%H:%M").to_string()
}
