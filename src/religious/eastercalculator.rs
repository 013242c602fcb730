use chrono::NaiveDate;

use crate::holiday::holidayerror::HolidayError;

/// First year of the Gregorian calendar.
pub const MIN_YEAR: i32 = 1583;
/// Last supported year; chrono stops at 262142 and feasts run up to
/// 60 days past Easter.
pub const MAX_YEAR: i32 = 262_000;

pub fn check_year(year: i32) -> Result<(), HolidayError> {
    if (MIN_YEAR..=MAX_YEAR).contains(&year) {
        Ok(())
    } else {
        Err(HolidayError::YearOutOfRange {
            year,
            min: MIN_YEAR,
            max: MAX_YEAR
        })
    }
}

/// Western Easter Sunday of `year` (anonymous Gregorian algorithm of
/// Meeus, Jones and Butcher).
pub fn compute_easter(year: i32) -> Result<NaiveDate, HolidayError> {
    check_year(year)?;

    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    // century corrections: skipped leap days and the lunar (Metonic) drift
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    // epact, days from March 21 to the paschal full moon
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    // days from the full moon to the following Sunday
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;

    let n = h + l - 7 * m + 114;
    let month = (n / 31) as u32;
    let day = (n % 31 + 1) as u32;

    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(HolidayError::InvalidDate { year, month, day })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_dates() {
        let expected = [
            (2023, 4, 9),
            (2024, 3, 31),
            (2025, 4, 20),
            (2026, 4, 5)
        ];
        for (y, m, d) in expected {
            assert_eq!(compute_easter(y).unwrap(), NaiveDate::from_ymd_opt(y, m, d).unwrap());
        }
    }

    #[test]
    fn test_year_out_of_range() {
        assert_eq!(
            compute_easter(1582),
            Err(HolidayError::YearOutOfRange { year: 1582, min: MIN_YEAR, max: MAX_YEAR })
        );
        assert!(compute_easter(MAX_YEAR + 1).is_err());
        assert!(compute_easter(4100).is_ok());
        assert!(compute_easter(MIN_YEAR).is_ok());
        assert!(compute_easter(MAX_YEAR).is_ok());
    }
}
