//! Pure label and parsing functions for the calendar views.
//!
//! Everything here is a plain function of its inputs so the header title,
//! day-cell counts, and slot time labels can be tested without any
//! rendering in the loop.

use chrono::{Datelike, NaiveDate, NaiveDateTime};

/// Parse a naive wall-clock timestamp. Both `2025-04-15T10:00:00` and
/// `2025-04-15 10:00:00` forms appear in stored data, so the space
/// separator is normalized before parsing.
pub fn parse_wall_clock(raw: &str) -> Option<NaiveDateTime> {
    let normalized = raw.replacen(' ', "T", 1);
    NaiveDateTime::parse_from_str(&normalized, "%Y-%m-%dT%H:%M:%S").ok()
}

/// English month name, long form.
pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "Unknown",
    }
}

/// Header label for the overview (month) view, e.g. "April 2025".
pub fn month_label(year: i32, month: u32) -> String {
    format!("{} {}", month_name(month), year)
}

/// Two-line header label for the detail (day) view:
/// ("Tuesday", "April 15, 2025").
pub fn detail_title(date: NaiveDate) -> (String, String) {
    let weekday = date.format("%A").to_string();
    let date_line = format!("{} {}, {}", month_name(date.month()), date.day(), date.year());
    (weekday, date_line)
}

/// Time label for a selected slot, e.g. "09:00 AM".
pub fn slot_time_label(start: NaiveDateTime) -> String {
    start.format("%I:%M %p").to_string()
}

/// Day-cell annotation for the overview view, e.g. "3 Appointments".
pub fn day_count_label(count: usize) -> String {
    format!("{} Appointments", count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_wall_clock_accepts_t_and_space_separators() {
        let expected = NaiveDate::from_ymd_opt(2025, 4, 15)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();

        assert_eq!(parse_wall_clock("2025-04-15T10:00:00"), Some(expected));
        assert_eq!(parse_wall_clock("2025-04-15 10:00:00"), Some(expected));
        assert_eq!(parse_wall_clock("not-a-date"), None);
    }

    #[test]
    fn test_month_label() {
        assert_eq!(month_label(2025, 4), "April 2025");
        assert_eq!(month_label(2024, 12), "December 2024");
    }

    #[test]
    fn test_detail_title_has_weekday_and_date_lines() {
        let date = NaiveDate::from_ymd_opt(2025, 4, 15).unwrap();
        let (weekday, date_line) = detail_title(date);

        assert_eq!(weekday, "Tuesday");
        assert_eq!(date_line, "April 15, 2025");
    }

    #[test]
    fn test_slot_time_label_is_twelve_hour() {
        let morning = NaiveDate::from_ymd_opt(2025, 4, 15)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        let afternoon = NaiveDate::from_ymd_opt(2025, 4, 15)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap();

        assert_eq!(slot_time_label(morning), "09:00 AM");
        assert_eq!(slot_time_label(afternoon), "02:30 PM");
    }

    #[test]
    fn test_day_count_label() {
        assert_eq!(day_count_label(1), "1 Appointments");
        assert_eq!(day_count_label(4), "4 Appointments");
    }
}
