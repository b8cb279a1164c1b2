use chrono::{Local, Utc};

/// Name echoed in every response envelope
pub fn service_name() -> String {
    std::env::var("SERVICE_NAME").unwrap_or_else(|_| "Unknown".to_string())
}

/// Milliseconds since the Unix epoch
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Current local time in the `M/D/YYYY, h:mm:ss AM` shape posts display
pub fn display_date() -> String {
    Local::now().format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_date_has_date_and_meridiem() {
        let date = display_date();
        let (day, time) = date.split_once(", ").unwrap();
        assert_eq!(day.split('/').count(), 3);
        assert!(time.ends_with("AM") || time.ends_with("PM"));
    }
}
