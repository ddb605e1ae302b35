//! Calendar-month date handling
//!
//! The store keeps dates as `YYYY-MM` strings; everything date-shaped goes
//! through here. Display formatting is tolerant (malformed input falls back
//! to the raw string), while `parse_month` is strict for `check`.

use chrono::NaiveDate;

use crate::error::{FolioError, FolioResult};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Parse a `YYYY-MM` string into the first day of that month
pub fn parse_month(value: &str, context: &str) -> FolioResult<NaiveDate> {
    let invalid = || FolioError::InvalidDate {
        value: value.to_string(),
        context: context.to_string(),
    };

    let (year, month) = value.split_once('-').ok_or_else(invalid)?;
    if year.len() != 4 || month.len() != 2 {
        return Err(invalid());
    }
    let year: i32 = year.parse().map_err(|_| invalid())?;
    let month: u32 = month.parse().map_err(|_| invalid())?;
    NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)
}

/// Format a `YYYY-MM` string as "Month Year" (e.g. "August 2024")
///
/// Malformed input is returned verbatim; display formatting never fails.
pub fn format_month(value: &str) -> String {
    match parse_month(value, "display") {
        Ok(date) => {
            use chrono::Datelike;
            format!(
                "{} {}",
                MONTH_NAMES[(date.month() - 1) as usize],
                date.year()
            )
        }
        Err(_) => value.to_string(),
    }
}

/// The year component of a `YYYY-MM` string, verbatim fallback on bad input
pub fn year_of(value: &str) -> String {
    match parse_month(value, "display") {
        Ok(date) => {
            use chrono::Datelike;
            date.year().to_string()
        }
        Err(_) => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_calendar_month() {
        let date = parse_month("2024-08", "test").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 8, 1).unwrap());
    }

    #[test]
    fn rejects_malformed_months() {
        assert!(parse_month("2024", "test").is_err());
        assert!(parse_month("2024-13", "test").is_err());
        assert!(parse_month("24-08", "test").is_err());
        assert!(parse_month("2024-8", "test").is_err());
        assert!(parse_month("soon", "test").is_err());
    }

    #[test]
    fn formats_long_month() {
        assert_eq!(format_month("2024-08"), "August 2024");
        assert_eq!(format_month("2021-06"), "June 2021");
    }

    #[test]
    fn display_formatting_falls_back_to_raw_input() {
        assert_eq!(format_month("whenever"), "whenever");
        assert_eq!(year_of("whenever"), "whenever");
    }

    #[test]
    fn year_of_extracts_year() {
        assert_eq!(year_of("2023-01"), "2023");
    }
}
