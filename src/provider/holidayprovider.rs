use std::collections::BTreeMap;

use crate::holiday::countrycode::CountryCode;
use crate::holiday::holiday::Holiday;
use crate::holiday::holidayerror::HolidayError;
use crate::holiday::holidayspecification::HolidaySpecification;
use crate::processor::holidayspecificationprocessor::process;

/// Holidays of one country.
///
/// Implementors only list the specifications of a year; resolution,
/// filtering and ordering are shared through `get_holidays`.
pub trait HolidayProvider: Send + Sync {
    fn country_code(&self) -> CountryCode;

    fn get_holiday_specifications(&self, year: i32) -> Result<Vec<HolidaySpecification>, HolidayError>;

    fn get_holidays(&self, year: i32) -> Result<Vec<Holiday>, HolidayError> {
        let specifications = self.get_holiday_specifications(year)?;
        process(&specifications, self.country_code(), year)
    }

    /// Reference URLs the data was taken from.
    fn get_sources(&self) -> Vec<String> {
        Vec::new()
    }

    /// Capability query; providers of countries with subdivisions return
    /// `Some(self)`.
    fn as_subdivision_codes_provider(&self) -> Option<&dyn SubdivisionCodesProvider> {
        None
    }
}

pub trait SubdivisionCodesProvider {
    /// Subdivision code (`CC-XXX`) to region name.
    fn get_subdivision_codes(&self) -> BTreeMap<String, String>;
}
