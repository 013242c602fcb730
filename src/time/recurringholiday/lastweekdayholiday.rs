use chrono::{
    Datelike,
    Days,
    NaiveDate,
    Weekday
};

use crate::holiday::holidayerror::HolidayError;
use crate::holiday::holidayspecification::DateSource;
use crate::time::utility::days_of_month;
use super::recurringholiday::RecurringHoliday;

#[derive(Clone)]
pub struct LastWeekdayHoliday {
    month: u32,
    weekday: Weekday
}

impl LastWeekdayHoliday {
    pub fn new(month: u32, weekday: Weekday) -> Result<LastWeekdayHoliday, HolidayError> {
        if !(1..=12).contains(&month) {
            Err(HolidayError::InvalidRule(format!("invalid month {}", month)))
        } else {
            Ok(LastWeekdayHoliday { month, weekday })
        }
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn weekday(&self) -> Weekday {
        self.weekday
    }
}

impl RecurringHoliday for LastWeekdayHoliday {
    fn get_date_source(&self, year: i32) -> Option<DateSource> {
        let end_of_month = NaiveDate::from_ymd_opt(year, self.month, days_of_month(year, self.month))?;
        let days_back = (end_of_month.weekday().num_days_from_monday() + 7
                         - self.weekday.num_days_from_monday()) % 7;
        end_of_month
            .checked_sub_days(Days::new(days_back as u64))
            .map(DateSource::Fixed)
    }
}
