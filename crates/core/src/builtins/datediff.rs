//! Date-difference builtin over fixed-width `DDMMYYYY` strings.
//!
//! Emitted scripts never handle date errors: anything that does not parse
//! is replaced by the current moment ([`parse_or_now`]), and a difference
//! is always a whole number of seconds.

use chrono::{Duration, Local, NaiveDate, NaiveDateTime, NaiveTime};
use thiserror::Error;

/// Error type for `DDMMYYYY` parsing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DateStringError {
    #[error("date string must be exactly 8 characters, got {0}")]
    WrongLength(usize),

    #[error("date string contains a non-digit character: {0}")]
    NotDigits(String),

    #[error("date out of representable range: {0}")]
    OutOfRange(String),
}

/// Parse a `DDMMYYYY` date string into a naive local midnight.
///
/// Characters 0-1 are the day, 2-3 the month (1-based in the text, held
/// 0-based internally), 4-7 a 4-digit year. Out-of-range day and month
/// values are not rejected: they roll over the way the host date
/// constructor of the emitted scripts does, so month 13 wraps into the
/// next year and day 00 is the last day of the previous month.
pub fn parse_date_string(s: &str) -> Result<NaiveDateTime, DateStringError> {
    if s.len() != 8 {
        return Err(DateStringError::WrongLength(s.len()));
    }
    if !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DateStringError::NotDigits(s.to_string()));
    }

    let day: i64 = s[0..2].parse().map_err(|_| DateStringError::NotDigits(s.to_string()))?;
    let month = s[2..4].parse::<i32>().map_err(|_| DateStringError::NotDigits(s.to_string()))? - 1;
    let year: i32 = s[4..8].parse().map_err(|_| DateStringError::NotDigits(s.to_string()))?;

    let year = year + month.div_euclid(12);
    let month = month.rem_euclid(12) as u32 + 1;

    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| DateStringError::OutOfRange(s.to_string()))?;
    let date = first
        .checked_add_signed(Duration::days(day - 1))
        .ok_or_else(|| DateStringError::OutOfRange(s.to_string()))?;

    Ok(date.and_time(NaiveTime::MIN))
}

/// The default-substitution strategy: a date string that fails to parse
/// becomes the current local moment. This is deliberate policy, not error
/// recovery — emitted scripts rely on date endpoints never failing.
pub fn parse_or_now(s: &str) -> NaiveDateTime {
    match parse_date_string(s) {
        Ok(dt) => dt,
        Err(e) => {
            tracing::debug!("substituting current time for date string {s:?}: {e}");
            Local::now().naive_local()
        }
    }
}

/// Whole seconds elapsed between two `DDMMYYYY` endpoints.
///
/// The quotient floors toward negative infinity, so reversed endpoints
/// give the exact negation for whole-day spans. Both instants are naive
/// local midnights; the zone cancels in the subtraction.
pub fn diff_seconds(start: &str, end: &str) -> i64 {
    let start = parse_or_now(start);
    let end = parse_or_now(end);
    (end - start).num_milliseconds().div_euclid(1000)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_date() {
        let dt = parse_date_string("16112006").unwrap();
        assert_eq!(dt.date(), NaiveDate::from_ymd_opt(2006, 11, 16).unwrap());
        assert_eq!(dt.time(), NaiveTime::MIN);
    }

    #[test]
    fn test_parse_month_rollover() {
        // month 13 is not rejected, it wraps into January of the next year
        let dt = parse_date_string("01132025").unwrap();
        assert_eq!(dt.date(), NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());
    }

    #[test]
    fn test_parse_day_zero_rolls_back() {
        let dt = parse_date_string("00122025").unwrap();
        assert_eq!(dt.date(), NaiveDate::from_ymd_opt(2025, 11, 30).unwrap());
    }

    #[test]
    fn test_parse_day_overflow_rolls_forward() {
        // Feb 29 in a non-leap year lands on Mar 1
        let dt = parse_date_string("29022023").unwrap();
        assert_eq!(dt.date(), NaiveDate::from_ymd_opt(2023, 3, 1).unwrap());

        let dt = parse_date_string("29022024").unwrap();
        assert_eq!(dt.date(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    }

    #[test]
    fn test_parse_wrong_length() {
        assert_eq!(parse_date_string("1612006"), Err(DateStringError::WrongLength(7)));
        assert_eq!(parse_date_string(""), Err(DateStringError::WrongLength(0)));
    }

    #[test]
    fn test_parse_non_digit() {
        assert_eq!(
            parse_date_string("16x12006"),
            Err(DateStringError::NotDigits("16x12006".to_string()))
        );
    }

    #[test]
    fn test_diff_pinned_regression() {
        // 2006-11-16 00:00:00 to 2025-12-17 00:00:00 is 6971 days
        assert_eq!(diff_seconds("16112006", "17122025"), 602_294_400);
    }

    #[test]
    fn test_diff_reversed_is_exact_negation() {
        assert_eq!(diff_seconds("17122025", "16112006"), -602_294_400);
    }

    #[test]
    fn test_diff_same_date_is_zero() {
        assert_eq!(diff_seconds("16112006", "16112006"), 0);
    }

    #[test]
    fn test_diff_non_negative_when_end_after_start() {
        assert!(diff_seconds("01012000", "02012000") >= 0);
        assert_eq!(diff_seconds("01012000", "02012000"), 86_400);
    }

    #[test]
    fn test_malformed_input_falls_back_to_now() {
        // both endpoints substitute the current moment, read microseconds
        // apart, so the floored difference is zero
        let d = diff_seconds("nonsense", "gibberish");
        assert!((0..=1).contains(&d));
    }

    #[test]
    fn test_malformed_end_is_roughly_now() {
        // start is a fixed past date, end falls back to the clock
        let d = diff_seconds("01012020", "oops");
        assert!(d > 0);
    }
}
