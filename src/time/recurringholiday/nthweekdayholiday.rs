use chrono::{
    NaiveDate,
    Weekday
};

use crate::holiday::holidayerror::HolidayError;
use crate::holiday::holidayspecification::DateSource;
use super::recurringholiday::RecurringHoliday;

#[derive(Clone)]
pub struct NthWeekdayHoliday {
    month: u32,
    n: u8,
    weekday: Weekday
}

impl NthWeekdayHoliday {
    pub fn new(month: u32, n: u8, weekday: Weekday) -> Result<NthWeekdayHoliday, HolidayError> {
        if !(1..=12).contains(&month) || !(1..=5).contains(&n) {
            Err(HolidayError::InvalidRule(format!("no weekday #{} in month {}", n, month)))
        } else {
            Ok(NthWeekdayHoliday { month, n, weekday })
        }
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn n(&self) -> u8 {
        self.n
    }

    pub fn weekday(&self) -> Weekday {
        self.weekday
    }
}

impl RecurringHoliday for NthWeekdayHoliday {
    fn get_date_source(&self, year: i32) -> Option<DateSource> {
        NaiveDate::from_weekday_of_month_opt(year, self.month, self.weekday, self.n)
            .map(DateSource::Fixed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thanksgiving() {
        let thanksgiving = NthWeekdayHoliday::new(11, 4, Weekday::Thu).unwrap();
        assert_eq!(
            thanksgiving.get_date_source(2024),
            Some(DateSource::Fixed(NaiveDate::from_ymd_opt(2024, 11, 28).unwrap()))
        );
    }

    #[test]
    fn test_missing_fifth_weekday() {
        // February 2023 has only four Mondays
        let fifth_monday = NthWeekdayHoliday::new(2, 5, Weekday::Mon).unwrap();
        assert_eq!(fifth_monday.get_date_source(2023), None);
        assert!(NthWeekdayHoliday::new(2, 6, Weekday::Mon).is_err());
    }
}
