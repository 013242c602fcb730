use chrono::NaiveDate;

use crate::holiday::holidayerror::HolidayError;
use crate::holiday::holidayspecification::DateSource;
use super::recurringholiday::RecurringHoliday;

#[derive(Clone)]
pub struct FixedDateHoliday {
    month: u32,
    day: u32
}

impl FixedDateHoliday {
    pub fn new(month: u32, day: u32) -> Result<FixedDateHoliday, HolidayError> {
        // 2000 is a leap year, so February 29 is accepted here
        if NaiveDate::from_ymd_opt(2000, month, day).is_none() {
            return Err(HolidayError::InvalidRule(format!("month {} has no day {}", month, day)));
        }
        Ok(FixedDateHoliday { month, day })
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }
}

impl RecurringHoliday for FixedDateHoliday {
    fn get_date_source(&self, year: i32) -> Option<DateSource> {
        NaiveDate::from_ymd_opt(year, self.month, self.day).map(DateSource::Fixed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leap_day_only_in_leap_years() {
        let leap_day = FixedDateHoliday::new(2, 29).unwrap();
        assert_eq!(
            leap_day.get_date_source(2024),
            Some(DateSource::Fixed(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()))
        );
        assert_eq!(leap_day.get_date_source(2023), None);
    }

    #[test]
    fn test_invalid_month_day() {
        assert!(FixedDateHoliday::new(13, 1).is_err());
        assert!(FixedDateHoliday::new(4, 31).is_err());
    }
}
