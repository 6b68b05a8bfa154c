//! CalendarDate value object.

use super::errors::ValidationError;
use chrono::{Datelike, Local, NaiveDate, Weekday};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Textual format used for input, display and storage.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

// `\d` would also match non-ASCII digits
static DATE_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}$").expect("valid date regex"));

/// A real calendar date written as `DD.MM.YYYY`.
///
/// Parsing is strict: two-digit day, two-digit month, four-digit year and
/// literal dots. Dates that do not exist (`31.02.2024`) are rejected.
///
/// # Example
///
/// ```
/// use contact_book::domain::CalendarDate;
///
/// let date = CalendarDate::parse("15.06.1990").unwrap();
/// assert_eq!(date.to_string(), "15.06.1990");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Parse a `DD.MM.YYYY` string.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDate` on any shape or calendar error.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        if !DATE_SHAPE.is_match(raw) {
            return Err(ValidationError::InvalidDate(raw.to_string()));
        }

        NaiveDate::parse_from_str(raw, DATE_FORMAT)
            .ok()
            // There is no year 0 in the calendar
            .filter(|date| date.year() >= 1)
            .map(Self)
            .ok_or_else(|| ValidationError::InvalidDate(raw.to_string()))
    }

    /// Today's date in the local timezone.
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Whether the date is a Saturday or Sunday.
    pub fn is_weekend(&self) -> bool {
        matches!(self.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// The same day and month in `year`.
    ///
    /// 29 February maps to 28 February when `year` is not a leap year.
    pub fn anniversary_in(&self, year: i32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, self.month(), self.day())
            .or_else(|| {
                if self.month() == 2 && self.day() == 29 {
                    NaiveDate::from_ymd_opt(year, 2, 28)
                } else {
                    None
                }
            })
            .map(Self)
    }

    /// Whole days from `self` to `other` (negative if `other` is earlier).
    pub fn days_until(&self, other: &Self) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// The date `days` days later.
    pub fn add_days(&self, days: u64) -> Option<Self> {
        self.0.checked_add_days(chrono::Days::new(days)).map(Self)
    }
}

/// Validate a raw `DD.MM.YYYY` date.
pub fn validate_date(raw: &str) -> Result<CalendarDate, ValidationError> {
    CalendarDate::parse(raw)
}

// Serde support - serialize in the display format
impl Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        CalendarDate::parse(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_round_trips() {
        for raw in ["01.01.2000", "29.02.2024", "31.12.1999", "15.06.0987"] {
            let date = validate_date(raw).unwrap();
            assert_eq!(date.to_string(), raw);
        }
    }

    #[test]
    fn test_date_rejects_impossible_dates() {
        assert!(validate_date("31.02.2024").is_err());
        assert!(validate_date("30.02.2023").is_err());
        assert!(validate_date("29.02.2023").is_err());
        assert!(validate_date("00.01.2024").is_err());
        assert!(validate_date("10.13.2024").is_err());
        assert!(validate_date("01.01.0000").is_err());
        assert!(validate_date("29.02.0000").is_err());
    }

    #[test]
    fn test_date_rejects_wrong_shape() {
        assert!(validate_date("").is_err());
        assert!(validate_date("1.1.2024").is_err());
        assert!(validate_date("01.01.24").is_err());
        assert!(validate_date("2024-01-01").is_err());
        assert!(validate_date("01/01/2024").is_err());
        assert!(validate_date(" 01.01.2024").is_err());
        assert!(validate_date("01.01.2024 ").is_err());
        assert!(validate_date("01.01.20245").is_err());
    }

    #[test]
    fn test_date_error_variant() {
        assert_eq!(
            validate_date("nope"),
            Err(ValidationError::InvalidDate("nope".to_string()))
        );
    }

    #[test]
    fn test_weekend_detection() {
        // 15.06.2024 is a Saturday, 16.06.2024 a Sunday, 17.06.2024 a Monday
        assert!(CalendarDate::parse("15.06.2024").unwrap().is_weekend());
        assert!(CalendarDate::parse("16.06.2024").unwrap().is_weekend());
        assert!(!CalendarDate::parse("17.06.2024").unwrap().is_weekend());
    }

    #[test]
    fn test_anniversary_in_leap_day() {
        let leap = CalendarDate::parse("29.02.2000").unwrap();
        assert_eq!(
            leap.anniversary_in(2023).unwrap().to_string(),
            "28.02.2023"
        );
        assert_eq!(
            leap.anniversary_in(2024).unwrap().to_string(),
            "29.02.2024"
        );
    }

    #[test]
    fn test_days_until() {
        let a = CalendarDate::parse("31.12.2024").unwrap();
        let b = CalendarDate::parse("02.01.2025").unwrap();
        assert_eq!(a.days_until(&b), 2);
        assert_eq!(b.days_until(&a), -2);
    }

    #[test]
    fn test_date_serialization() {
        let date = CalendarDate::parse("05.03.1985").unwrap();
        assert_eq!(serde_json::to_string(&date).unwrap(), "\"05.03.1985\"");

        let back: CalendarDate = serde_json::from_str("\"05.03.1985\"").unwrap();
        assert_eq!(back, date);

        let bad: Result<CalendarDate, _> = serde_json::from_str("\"1985-03-05\"");
        assert!(bad.is_err());
    }
}
