//! Line formatting and time sources

use chrono::{Local, NaiveDateTime};

use super::level::Severity;

/// Timestamp layout: `YYYY-MM-DD HH:MM:SS.mmm`
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Source of local wall-clock time for log lines
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Reads the system clock in local time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always reports the same instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Render a timestamp with zero-padded fields and millisecond precision
pub fn format_timestamp(time: &NaiveDateTime) -> String {
    time.format(TIMESTAMP_FORMAT).to_string()
}

/// Build a log line: `[timestamp] [LEVEL] name - message`
///
/// The message is passed through untouched. No trailing newline.
pub fn format_line(time: &NaiveDateTime, severity: Severity, name: &str, message: &str) -> String {
    format!(
        "[{}] [{}] {} - {}",
        format_timestamp(time),
        severity,
        name,
        message
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn fixed_time() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(1984, 5, 7)
            .unwrap()
            .and_hms_milli_opt(3, 9, 5, 8)
            .unwrap()
    }

    #[test]
    fn test_format_timestamp_pads_fields() {
        assert_eq!(format_timestamp(&fixed_time()), "1984-05-07 03:09:05.008");
    }

    #[test]
    fn test_format_timestamp_full_width_fields() {
        let time = NaiveDate::from_ymd_opt(2026, 12, 31)
            .unwrap()
            .and_hms_milli_opt(23, 59, 58, 999)
            .unwrap();
        assert_eq!(format_timestamp(&time), "2026-12-31 23:59:58.999");
    }

    #[test]
    fn test_format_line() {
        let line = format_line(&fixed_time(), Severity::Error, "svc", "boom");
        assert_eq!(line, "[1984-05-07 03:09:05.008] [ERROR] svc - boom");
    }

    #[test]
    fn test_format_line_keeps_message_verbatim() {
        let line = format_line(&fixed_time(), Severity::Info, "svc", "a - b\t%s {}");
        assert_eq!(line, "[1984-05-07 03:09:05.008] [INFO] svc - a - b\t%s {}");
    }

    #[test]
    fn test_fixed_clock_is_stable() {
        let clock = FixedClock(fixed_time());
        assert_eq!(clock.now(), clock.now());
    }
}
