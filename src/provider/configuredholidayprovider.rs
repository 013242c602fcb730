use std::collections::{
    BTreeMap,
    BTreeSet
};
use std::sync::Arc;

use chrono::Datelike;

use crate::holiday::countrycode::CountryCode;
use crate::holiday::holidayerror::HolidayError;
use crate::holiday::holidayspecification::{
    DateSource,
    HolidaySpecification
};
use crate::holiday::holidaytypes::HolidayTypes;
use crate::time::recurringholiday::recurringholiday::RecurringHoliday;
use super::holidayprovider::{
    HolidayProvider,
    SubdivisionCodesProvider
};

/// A recurring holiday rule plus the metadata stamped on every
/// specification it produces.
#[derive(Clone)]
pub struct HolidayRule {
    recurring_holiday: Arc<dyn RecurringHoliday>,
    english_name: String,
    local_name: String,
    holiday_types: HolidayTypes,
    launch_year: Option<i32>,
    end_year: Option<i32>,
    subdivision_codes: BTreeSet<String>
}

impl HolidayRule {
    pub fn new(
        recurring_holiday: Arc<dyn RecurringHoliday>,
        english_name: &str,
        local_name: &str
    ) -> Result<HolidayRule, HolidayError> {
        if english_name.trim().is_empty() || local_name.trim().is_empty() {
            return Err(HolidayError::EmptyName);
        }
        Ok(HolidayRule {
            recurring_holiday,
            english_name: english_name.to_owned(),
            local_name: local_name.to_owned(),
            holiday_types: HolidayTypes::PUBLIC,
            launch_year: None,
            end_year: None,
            subdivision_codes: BTreeSet::new()
        })
    }

    pub fn with_holiday_types(mut self, holiday_types: HolidayTypes) -> HolidayRule {
        self.holiday_types = holiday_types;
        self
    }

    pub fn with_validity(mut self, launch_year: Option<i32>, end_year: Option<i32>) -> HolidayRule {
        self.launch_year = launch_year;
        self.end_year = end_year;
        self
    }

    pub fn with_subdivision_codes<I, S>(mut self, codes: I) -> HolidayRule
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>
    {
        self.subdivision_codes = codes
            .into_iter()
            .map(|code| code.as_ref().trim().to_ascii_uppercase())
            .collect();
        self
    }

    pub fn english_name(&self) -> &str {
        &self.english_name
    }

    pub fn subdivision_codes(&self) -> &BTreeSet<String> {
        &self.subdivision_codes
    }

    pub fn specification(&self, year: i32) -> Result<Option<HolidaySpecification>, HolidayError> {
        let date_source = match self.recurring_holiday.get_date_source(year) {
            Some(date_source) => date_source,
            None => return Ok(None)
        };

        let mut specification = match date_source {
            DateSource::Fixed(date) => HolidaySpecification::fixed(date, &self.english_name, &self.local_name)?,
            DateSource::EasterOffset(offset) => HolidaySpecification::easter_relative(offset, &self.english_name, &self.local_name)?
        }
        .with_holiday_types(self.holiday_types)
        .with_subdivision_codes(&self.subdivision_codes);

        if let Some(launch_year) = self.launch_year {
            specification = specification.with_launch_year(launch_year);
        }
        if let Some(end_year) = self.end_year {
            specification = specification.with_end_year(end_year);
        }
        Ok(Some(specification))
    }
}

/// Provider assembled from declarative data instead of code.
pub struct ConfiguredHolidayProvider {
    country_code: CountryCode,
    subdivision_codes: BTreeMap<String, String>,
    sources: Vec<String>,
    rules: Vec<HolidayRule>,
    additional_holidays: Vec<HolidaySpecification>
}

impl ConfiguredHolidayProvider {
    /// Every subdivision code referenced by a rule or an additional holiday
    /// must be declared in `subdivision_codes`.
    pub fn new(
        country_code: CountryCode,
        subdivision_codes: BTreeMap<String, String>,
        sources: Vec<String>,
        rules: Vec<HolidayRule>,
        additional_holidays: Vec<HolidaySpecification>
    ) -> Result<ConfiguredHolidayProvider, HolidayError> {
        let prefix = format!("{}-", country_code);
        if let Some(code) = subdivision_codes.keys().find(|code| !code.starts_with(&prefix)) {
            return Err(HolidayError::InvalidSubdivisionCode {
                code: code.to_owned(),
                country_code: country_code.to_string()
            });
        }

        let referenced = rules
            .iter()
            .flat_map(|rule| rule.subdivision_codes().iter())
            .chain(additional_holidays.iter().flat_map(|spec| spec.subdivision_codes().iter()));
        for code in referenced {
            if !subdivision_codes.contains_key(code) {
                return Err(HolidayError::UnknownSubdivisionCode {
                    code: code.to_owned(),
                    country_code: country_code.to_string()
                });
            }
        }

        for specification in additional_holidays.iter() {
            specification.validate()?;
        }

        Ok(ConfiguredHolidayProvider {
            country_code,
            subdivision_codes,
            sources,
            rules,
            additional_holidays
        })
    }

    pub fn rules(&self) -> &[HolidayRule] {
        &self.rules
    }
}

impl HolidayProvider for ConfiguredHolidayProvider {
    fn country_code(&self) -> CountryCode {
        self.country_code
    }

    fn get_holiday_specifications(&self, year: i32) -> Result<Vec<HolidaySpecification>, HolidayError> {
        let mut specifications = Vec::with_capacity(self.rules.len() + self.additional_holidays.len());
        for rule in self.rules.iter() {
            if let Some(specification) = rule.specification(year)? {
                specifications.push(specification);
            }
        }

        // one-off dated holidays only belong to their own year
        specifications.extend(
            self.additional_holidays
                .iter()
                .filter(|spec| match spec.date_source() {
                    DateSource::Fixed(date) => date.year() == year,
                    DateSource::EasterOffset(_) => true
                })
                .cloned()
        );

        Ok(specifications)
    }

    fn get_sources(&self) -> Vec<String> {
        self.sources.clone()
    }

    fn as_subdivision_codes_provider(&self) -> Option<&dyn SubdivisionCodesProvider> {
        if self.subdivision_codes.is_empty() {
            None
        } else {
            Some(self)
        }
    }
}

impl SubdivisionCodesProvider for ConfiguredHolidayProvider {
    fn get_subdivision_codes(&self) -> BTreeMap<String, String> {
        self.subdivision_codes.clone()
    }
}
