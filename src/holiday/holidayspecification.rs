use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{
    Deserialize,
    Serialize
};

use super::holidayerror::HolidayError;
use super::holidaytypes::HolidayTypes;

/// Where a candidate holiday takes its date from.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum DateSource {
    Fixed(NaiveDate),
    /// Days relative to Western Easter Sunday of the requested year.
    EasterOffset(i64)
}

impl DateSource {
    /// Builds a date source from two optional raw fields, exactly one of
    /// which must be set.
    pub fn from_parts(
        name: &str,
        date: Option<NaiveDate>,
        easter_offset: Option<i64>
    ) -> Result<DateSource, HolidayError> {
        match (date, easter_offset) {
            (Some(d), None) => Ok(DateSource::Fixed(d)),
            (None, Some(offset)) => Ok(DateSource::EasterOffset(offset)),
            (Some(_), Some(_)) => Err(HolidayError::AmbiguousDateSource(name.to_owned())),
            (None, None) => Err(HolidayError::MissingDateSource(name.to_owned()))
        }
    }

    pub fn fixed_date(&self) -> Option<NaiveDate> {
        match self {
            DateSource::Fixed(d) => Some(*d),
            DateSource::EasterOffset(_) => None
        }
    }

    pub fn easter_offset(&self) -> Option<i64> {
        match self {
            DateSource::Fixed(_) => None,
            DateSource::EasterOffset(offset) => Some(*offset)
        }
    }
}

/// A candidate holiday before resolution. Immutable once built; the
/// `with_*` builders consume and return a new value.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
#[serde(try_from = "HolidaySpecificationJsonProp", into = "HolidaySpecificationJsonProp")]
pub struct HolidaySpecification {
    date_source: DateSource,
    english_name: String,
    local_name: String,
    holiday_types: HolidayTypes,
    launch_year: Option<i32>,
    end_year: Option<i32>,
    subdivision_codes: BTreeSet<String>
}

impl HolidaySpecification {
    fn new(date_source: DateSource, english_name: &str, local_name: &str) -> Result<HolidaySpecification, HolidayError> {
        if english_name.trim().is_empty() || local_name.trim().is_empty() {
            return Err(HolidayError::EmptyName);
        }
        Ok(HolidaySpecification {
            date_source,
            english_name: english_name.to_owned(),
            local_name: local_name.to_owned(),
            holiday_types: HolidayTypes::PUBLIC,
            launch_year: None,
            end_year: None,
            subdivision_codes: BTreeSet::new()
        })
    }

    pub fn fixed(date: NaiveDate, english_name: &str, local_name: &str) -> Result<HolidaySpecification, HolidayError> {
        HolidaySpecification::new(DateSource::Fixed(date), english_name, local_name)
    }

    pub fn fixed_ymd(
        year: i32,
        month: u32,
        day: u32,
        english_name: &str,
        local_name: &str
    ) -> Result<HolidaySpecification, HolidayError> {
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(HolidayError::InvalidDate { year, month, day })?;
        HolidaySpecification::fixed(date, english_name, local_name)
    }

    pub fn easter_relative(offset_days: i64, english_name: &str, local_name: &str) -> Result<HolidaySpecification, HolidayError> {
        HolidaySpecification::new(DateSource::EasterOffset(offset_days), english_name, local_name)
    }

    pub fn with_holiday_types(mut self, holiday_types: impl Into<HolidayTypes>) -> HolidaySpecification {
        self.holiday_types = holiday_types.into();
        self
    }

    pub fn with_launch_year(mut self, launch_year: i32) -> HolidaySpecification {
        self.launch_year = Some(launch_year);
        self
    }

    pub fn with_end_year(mut self, end_year: i32) -> HolidaySpecification {
        self.end_year = Some(end_year);
        self
    }

    /// Restricts the holiday to the given subdivisions. Codes are trimmed and
    /// upper-cased; an empty set means nationwide.
    pub fn with_subdivision_codes<I, S>(mut self, codes: I) -> HolidaySpecification
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

    pub fn date_source(&self) -> DateSource {
        self.date_source
    }

    pub fn english_name(&self) -> &str {
        &self.english_name
    }

    pub fn local_name(&self) -> &str {
        &self.local_name
    }

    pub fn holiday_types(&self) -> HolidayTypes {
        self.holiday_types
    }

    pub fn launch_year(&self) -> Option<i32> {
        self.launch_year
    }

    pub fn end_year(&self) -> Option<i32> {
        self.end_year
    }

    pub fn subdivision_codes(&self) -> &BTreeSet<String> {
        &self.subdivision_codes
    }

    pub fn is_nationwide(&self) -> bool {
        self.subdivision_codes.is_empty()
    }

    /// True when `year` lies within `[launch_year, end_year]`, either bound
    /// being open when absent.
    pub fn is_valid_in(&self, year: i32) -> bool {
        self.launch_year.is_none_or(|launch| launch <= year)
            && self.end_year.is_none_or(|end| year <= end)
    }

    pub fn validate(&self) -> Result<(), HolidayError> {
        if self.english_name.trim().is_empty() || self.local_name.trim().is_empty() {
            return Err(HolidayError::EmptyName);
        }
        if let (Some(launch_year), Some(end_year)) = (self.launch_year, self.end_year) {
            if launch_year > end_year {
                return Err(HolidayError::InvalidValidityRange {
                    name: self.english_name.clone(),
                    launch_year,
                    end_year
                });
            }
        }
        Ok(())
    }
}

fn default_holiday_types() -> HolidayTypes {
    HolidayTypes::PUBLIC
}

#[derive(Serialize, Deserialize)]
struct HolidaySpecificationJsonProp {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    easter_offset: Option<i64>,
    english_name: String,
    local_name: String,
    #[serde(default = "default_holiday_types")]
    holiday_types: HolidayTypes,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    launch_year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    end_year: Option<i32>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    subdivision_codes: BTreeSet<String>
}

impl TryFrom<HolidaySpecificationJsonProp> for HolidaySpecification {
    type Error = HolidayError;

    fn try_from(json_prop: HolidaySpecificationJsonProp) -> Result<Self, Self::Error> {
        let date_source = DateSource::from_parts(
            &json_prop.english_name,
            json_prop.date,
            json_prop.easter_offset
        )?;
        let mut specification = HolidaySpecification::new(date_source, &json_prop.english_name, &json_prop.local_name)?
            .with_holiday_types(json_prop.holiday_types)
            .with_subdivision_codes(json_prop.subdivision_codes);
        specification.launch_year = json_prop.launch_year;
        specification.end_year = json_prop.end_year;
        specification.validate()?;
        Ok(specification)
    }
}

impl From<HolidaySpecification> for HolidaySpecificationJsonProp {
    fn from(specification: HolidaySpecification) -> Self {
        HolidaySpecificationJsonProp {
            date: specification.date_source.fixed_date(),
            easter_offset: specification.date_source.easter_offset(),
            english_name: specification.english_name,
            local_name: specification.local_name,
            holiday_types: specification.holiday_types,
            launch_year: specification.launch_year,
            end_year: specification.end_year,
            subdivision_codes: specification.subdivision_codes
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::holiday::holidaytypes::HolidayType;

    #[test]
    fn test_from_parts_requires_exactly_one_source() {
        let d = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(DateSource::from_parts("x", Some(d), None).unwrap(), DateSource::Fixed(d));
        assert_eq!(DateSource::from_parts("x", None, Some(1)).unwrap(), DateSource::EasterOffset(1));
        assert_eq!(
            DateSource::from_parts("x", Some(d), Some(1)),
            Err(HolidayError::AmbiguousDateSource("x".to_owned()))
        );
        assert_eq!(
            DateSource::from_parts("x", None, None),
            Err(HolidayError::MissingDateSource("x".to_owned()))
        );
    }

    #[test]
    fn test_empty_names_are_rejected() {
        assert_eq!(HolidaySpecification::easter_relative(1, "", "Lundi"), Err(HolidayError::EmptyName));
        assert_eq!(HolidaySpecification::easter_relative(1, "Easter Monday", "  "), Err(HolidayError::EmptyName));
        assert!(matches!(
            HolidaySpecification::fixed_ymd(2023, 2, 29, "Leap", "Leap"),
            Err(HolidayError::InvalidDate { year: 2023, month: 2, day: 29 })
        ));
    }

    #[test]
    fn test_validity_window() {
        let spec = HolidaySpecification::easter_relative(1, "Easter Monday", "Ostermontag")
            .unwrap()
            .with_launch_year(1990)
            .with_end_year(2000);
        assert!(!spec.is_valid_in(1989));
        assert!(spec.is_valid_in(1990));
        assert!(spec.is_valid_in(2000));
        assert!(!spec.is_valid_in(2001));

        let inverted = spec.with_launch_year(2010);
        assert!(matches!(inverted.validate(), Err(HolidayError::InvalidValidityRange { .. })));
    }

    #[test]
    fn test_subdivision_codes_are_normalized() {
        let spec = HolidaySpecification::fixed_ymd(2024, 1, 6, "Epiphany", "Heilige Drei Könige")
            .unwrap()
            .with_subdivision_codes([" de-by", "DE-BW", "de-by"]);
        let codes: Vec<&str> = spec.subdivision_codes().iter().map(String::as_str).collect();
        assert_eq!(codes, vec!["DE-BW", "DE-BY"]);
        assert!(!spec.is_nationwide());
    }

    #[test]
    fn test_deserialize_rejects_ambiguous_source() {
        let json = r#"{"date": "2024-05-01", "easter_offset": 39, "english_name": "X", "local_name": "X"}"#;
        let result: Result<HolidaySpecification, _> = serde_json::from_str(json);
        assert!(result.is_err());

        let json = r#"{"english_name": "X", "local_name": "X"}"#;
        let result: Result<HolidaySpecification, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_defaults_to_public() {
        let json = r#"{"easter_offset": 50, "english_name": "Whit Monday", "local_name": "Pfingstmontag"}"#;
        let spec: HolidaySpecification = serde_json::from_str(json).unwrap();
        assert_eq!(spec.date_source(), DateSource::EasterOffset(50));
        assert!(spec.holiday_types().contains(HolidayType::Public));
        assert!(spec.is_nationwide());
    }
}
