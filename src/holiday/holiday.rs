use chrono::{
    Datelike,
    NaiveDate
};
use serde::Serialize;

use super::countrycode::CountryCode;
use super::holidaytypes::{
    HolidayType,
    HolidayTypes
};

/// A resolved holiday of one country in one year.
#[derive(Debug, PartialEq, Eq, Clone, Hash, Serialize)]
pub struct Holiday {
    date: NaiveDate,
    local_name: String,
    english_name: String,
    country_code: CountryCode,
    holiday_types: HolidayTypes,
    /// Sorted and unique; empty means nationwide.
    subdivision_codes: Vec<String>
}

impl Holiday {
    pub(crate) fn new(
        date: NaiveDate,
        local_name: String,
        english_name: String,
        country_code: CountryCode,
        holiday_types: HolidayTypes,
        subdivision_codes: Vec<String>
    ) -> Holiday {
        Holiday {
            date,
            local_name,
            english_name,
            country_code,
            holiday_types,
            subdivision_codes
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }

    pub fn local_name(&self) -> &str {
        &self.local_name
    }

    pub fn english_name(&self) -> &str {
        &self.english_name
    }

    pub fn country_code(&self) -> CountryCode {
        self.country_code
    }

    pub fn holiday_types(&self) -> HolidayTypes {
        self.holiday_types
    }

    pub fn subdivision_codes(&self) -> &[String] {
        &self.subdivision_codes
    }

    pub fn is_nationwide(&self) -> bool {
        self.subdivision_codes.is_empty()
    }

    pub fn is_public(&self) -> bool {
        self.holiday_types.contains(HolidayType::Public)
    }

    /// Whether the holiday is observed in `subdivision_code`, nationwide
    /// holidays included.
    pub fn applies_to(&self, subdivision_code: &str) -> bool {
        self.is_nationwide()
            || self.subdivision_codes.iter().any(|code| code.eq_ignore_ascii_case(subdivision_code))
    }
}
