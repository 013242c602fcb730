use chrono::{
    Datelike,
    NaiveDate
};

/// Inclusive range of dates; the bounds are swapped when given in reverse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeOfDates {
    start_date: NaiveDate,
    end_date: NaiveDate
}

impl RangeOfDates {
    pub fn new(d1: NaiveDate, d2: NaiveDate) -> RangeOfDates {
        if d1 > d2 {
            RangeOfDates {start_date: d2, end_date: d1}
        } else {
            RangeOfDates {start_date: d1, end_date: d2}
        }
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    pub fn len(&self) -> usize {
        ((self.end_date - self.start_date).num_days() + 1) as usize
    }

    pub fn contain(&self, d: NaiveDate) -> bool {
        (d >= self.start_date) && (d <= self.end_date)
    }

    /// Calendar years touched by the range, ascending.
    pub fn years(&self) -> std::ops::RangeInclusive<i32> {
        self.start_date.year()..=self.end_date.year()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reversed_bounds_and_years() {
        let d1 = NaiveDate::from_ymd_opt(2025, 1, 2).unwrap();
        let d2 = NaiveDate::from_ymd_opt(2024, 12, 30).unwrap();
        let range = RangeOfDates::new(d1, d2);
        assert_eq!(range.start_date(), d2);
        assert_eq!(range.len(), 4);
        assert!(range.contain(NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()));
        assert!(!range.contain(NaiveDate::from_ymd_opt(2025, 1, 3).unwrap()));
        assert_eq!(range.years().collect::<Vec<_>>(), vec![2024, 2025]);
    }
}
