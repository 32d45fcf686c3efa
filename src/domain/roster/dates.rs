// ============================================================
// DATE NORMALIZATION
// ============================================================
// Source dates arrive as MM/DD/YYYY and are stored as YYYY-MM-DD

use chrono::NaiveDate;

use crate::domain::error::{AppError, Result};

/// Case-insensitive token marking "not terminated" in `termination_date`.
/// Passed through to storage unconverted.
pub const NO_TERMINATION_SENTINEL: &str = "NULL";

/// Convert an `MM/DD/YYYY` date to `YYYY-MM-DD`.
///
/// Month and day are zero-padded to two digits, the year to four. Single
/// digit months and days in the input are accepted.
pub fn convert_mdy_date(field: &str, value: &str) -> Result<String> {
    let date = NaiveDate::parse_from_str(value.trim(), "%m/%d/%Y").map_err(|e| {
        AppError::ParseError(format!("{}: invalid date '{}': {}", field, value, e))
    })?;
    Ok(date.format("%Y-%m-%d").to_string())
}

/// True when the trimmed, case-folded value equals the sentinel.
pub fn is_no_termination(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case(NO_TERMINATION_SENTINEL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_mdy_date() {
        assert_eq!(convert_mdy_date("dob", "01/15/1980").unwrap(), "1980-01-15");
        assert_eq!(
            convert_mdy_date("hire_date", "12/31/2020").unwrap(),
            "2020-12-31"
        );
    }

    #[test]
    fn test_single_digit_month_and_day_are_padded() {
        assert_eq!(convert_mdy_date("dob", "3/1/2015").unwrap(), "2015-03-01");
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        assert_eq!(
            convert_mdy_date("dob", " 01/15/1980 ").unwrap(),
            "1980-01-15"
        );
    }

    #[test]
    fn test_invalid_date_is_parse_error() {
        for bad in ["13/01/2020", "02/30/2020", "1980-01-15", "garbage", ""] {
            let err = convert_mdy_date("dob", bad).unwrap_err();
            assert!(
                matches!(err, AppError::ParseError(_)),
                "expected ParseError for {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_conversion_is_deterministic() {
        let once = convert_mdy_date("dob", "07/04/1975").unwrap();
        let twice = convert_mdy_date("dob", "07/04/1975").unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_sentinel_detection_is_case_insensitive() {
        assert!(is_no_termination("NULL"));
        assert!(is_no_termination("null"));
        assert!(is_no_termination(" Null "));
        assert!(!is_no_termination("02/28/2023"));
        assert!(!is_no_termination(""));
        assert!(!is_no_termination("NULLS"));
    }
}
