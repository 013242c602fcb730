use crate::holiday::holidayspecification::DateSource;

/// A yearly holiday rule.
///
/// Returns `None` for years in which the rule produces no date (e.g. a
/// February 29 holiday in a common year).
pub trait RecurringHoliday: Send + Sync {
    fn get_date_source(&self, year: i32) -> Option<DateSource>;
}
