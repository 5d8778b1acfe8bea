/// Current time as unix seconds.
pub fn now_unix() -> i64 {
    chrono::Utc::now().timestamp()
}

/// Today's date in the `DD.MM.YYYY` form used in reminder messages.
pub fn today_display() -> String {
    chrono::Local::now().format("%d.%m.%Y").to_string()
}
