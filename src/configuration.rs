use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

use chrono::{
    Datelike,
    NaiveDate
};
use serde::Deserialize;

use crate::holiday::countrycode::CountryCode;
use crate::holiday::holiday::Holiday;
use crate::manager::manager::{
    IManager,
    Manager
};
use crate::manager::managererror::ManagerError;
use crate::provider::franceholidayprovider::FranceHolidayProvider;
use crate::provider::holidayprovider::HolidayProvider;
use crate::provider::holidayprovidermanager::HolidayProviderManager;
use crate::time::rangeofdates::RangeOfDates;

#[derive(Deserialize)]
struct ConfigurationJsonProp {
    holiday_providers: Vec<serde_json::Value>
}

/// Entry point bundling the provider registry with the queries built on
/// top of it. Safe to share between threads.
pub struct Configuration {
    holiday_provider_manager: Manager<Arc<dyn HolidayProvider>>
}

impl Configuration {
    /// Registry holding the built-in providers.
    pub fn new() -> Configuration {
        let holiday_provider_manager = HolidayProviderManager::new();
        let builtins: [Arc<dyn HolidayProvider>; 1] = [Arc::new(FranceHolidayProvider)];
        for provider in builtins {
            holiday_provider_manager.insert(provider.country_code().to_string(), provider);
        }
        Configuration { holiday_provider_manager }
    }

    pub fn holiday_provider_manager(&self) -> &Manager<Arc<dyn HolidayProvider>> {
        &self.holiday_provider_manager
    }

    /// Loads configured providers; a provider replaces any already
    /// registered for the same country.
    pub fn from_reader(&self, file_path: &Path) -> Result<(), ManagerError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let json_prop: ConfigurationJsonProp = serde_json::from_reader(reader)?;
        self.holiday_provider_manager.insert_obj_from_json_vec(&json_prop.holiday_providers)
    }

    pub fn from_json_str(&self, json: &str) -> Result<(), ManagerError> {
        let json_prop: ConfigurationJsonProp = serde_json::from_str(json)?;
        self.holiday_provider_manager.insert_obj_from_json_vec(&json_prop.holiday_providers)
    }

    pub fn country_codes(&self) -> Vec<String> {
        self.holiday_provider_manager.names()
    }

    pub fn get_provider(&self, country_code: CountryCode) -> Result<Arc<dyn HolidayProvider>, ManagerError> {
        self.holiday_provider_manager.get(country_code.as_str())
    }

    pub fn get_holidays(&self, country_code: CountryCode, year: i32) -> Result<Vec<Holiday>, ManagerError> {
        Ok(self.get_provider(country_code)?.get_holidays(year)?)
    }

    /// Holidays in the inclusive range `[start_date, end_date]`, ordered by date.
    pub fn get_holidays_between(
        &self,
        country_code: CountryCode,
        start_date: NaiveDate,
        end_date: NaiveDate
    ) -> Result<Vec<Holiday>, ManagerError> {
        let provider = self.get_provider(country_code)?;
        let range = RangeOfDates::new(start_date, end_date);
        let mut holidays = Vec::new();
        for year in range.years() {
            holidays.extend(
                provider
                    .get_holidays(year)?
                    .into_iter()
                    .filter(|holiday| range.contain(holiday.date()))
            );
        }
        Ok(holidays)
    }

    /// True when `date` is a nationwide public holiday.
    pub fn is_public_holiday(&self, country_code: CountryCode, date: NaiveDate) -> Result<bool, ManagerError> {
        let holidays = self.get_holidays(country_code, date.year())?;
        Ok(holidays
            .iter()
            .any(|holiday| holiday.date() == date && holiday.is_public() && holiday.is_nationwide()))
    }

    /// `None` when the country has no subdivisions.
    pub fn get_subdivision_codes(&self, country_code: CountryCode) -> Result<Option<BTreeMap<String, String>>, ManagerError> {
        let provider = self.get_provider(country_code)?;
        Ok(provider
            .as_subdivision_codes_provider()
            .map(|subdivisions| subdivisions.get_subdivision_codes()))
    }

    pub fn get_sources(&self, country_code: CountryCode) -> Result<Vec<String>, ManagerError> {
        Ok(self.get_provider(country_code)?.get_sources())
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new()
    }
}
