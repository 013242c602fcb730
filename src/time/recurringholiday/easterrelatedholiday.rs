use crate::holiday::holidayspecification::DateSource;
use super::recurringholiday::RecurringHoliday;

/// Holiday at a fixed number of days from Western Easter Sunday. The date
/// itself is left to the processor, which resolves the offset for the
/// requested year.
#[derive(Clone)]
pub struct EasterRelatedHoliday {
    shift_days: i64
}

impl EasterRelatedHoliday {
    pub fn new(shift_days: i64) -> EasterRelatedHoliday {
        EasterRelatedHoliday { shift_days }
    }

    pub fn shift_days(&self) -> i64 {
        self.shift_days
    }
}

impl RecurringHoliday for EasterRelatedHoliday {
    fn get_date_source(&self, _year: i32) -> Option<DateSource> {
        Some(DateSource::EasterOffset(self.shift_days))
    }
}
