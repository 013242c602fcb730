use std::collections::HashSet;

use chrono::{
    Datelike,
    NaiveDate
};
use tracing::{
    debug,
    warn
};

use crate::holiday::countrycode::CountryCode;
use crate::holiday::holiday::Holiday;
use crate::holiday::holidayerror::HolidayError;
use crate::holiday::holidayspecification::{
    DateSource,
    HolidaySpecification
};
use crate::religious::eastercalculator::check_year;
use crate::religious::feastoffsetresolver::FeastOffsetResolver;

/// Expands holiday specifications into the holidays of `country_code` in
/// `year`, ordered by date.
///
/// - specifications outside their launch/end years are skipped;
/// - `DateSource::EasterOffset` is resolved through `FeastOffsetResolver`;
/// - the sort is stable, so records sharing a date keep their input order;
/// - a record whose `(date, subdivision codes)` key was already emitted is
///   dropped.
///
/// Inputs are never modified and nothing is cached between calls.
pub fn process(
    specifications: &[HolidaySpecification],
    country_code: CountryCode,
    year: i32
) -> Result<Vec<Holiday>, HolidayError> {
    check_year(year)?;

    let mut resolver: Option<FeastOffsetResolver> = None;
    let mut holidays: Vec<Holiday> = Vec::with_capacity(specifications.len());

    for specification in specifications {
        specification.validate()?;

        if !specification.is_valid_in(year) {
            debug!(
                country_code = %country_code,
                year,
                holiday = specification.english_name(),
                "holiday specification not valid in requested year"
            );
            continue;
        }

        let date = match specification.date_source() {
            DateSource::Fixed(date) => date,
            DateSource::EasterOffset(offset_days) => {
                let feasts = match resolver {
                    Some(feasts) => feasts,
                    None => {
                        let feasts = FeastOffsetResolver::for_year(year)?;
                        resolver = Some(feasts);
                        feasts
                    }
                };
                feasts.date_at_offset(offset_days)?
            }
        };

        holidays.push(project(specification, date, country_code, year)?);
    }

    holidays.sort_by_key(|holiday| holiday.date());

    let mut seen: HashSet<(NaiveDate, Vec<String>)> = HashSet::with_capacity(holidays.len());
    holidays.retain(|holiday| {
        let key = (holiday.date(), holiday.subdivision_codes().to_vec());
        let is_new = seen.insert(key);
        if !is_new {
            warn!(
                country_code = %country_code,
                date = %holiday.date(),
                holiday = holiday.english_name(),
                "duplicate holiday dropped"
            );
        }
        is_new
    });

    debug!(
        country_code = %country_code,
        year,
        specifications = specifications.len(),
        holidays = holidays.len(),
        "holiday specifications processed"
    );

    Ok(holidays)
}

fn project(
    specification: &HolidaySpecification,
    date: NaiveDate,
    country_code: CountryCode,
    year: i32
) -> Result<Holiday, HolidayError> {
    if date.year() != year {
        return Err(HolidayError::DateOutsideYear {
            name: specification.english_name().to_owned(),
            date,
            year
        });
    }

    let prefix = format!("{}-", country_code);
    let mut subdivision_codes: Vec<String> = Vec::with_capacity(specification.subdivision_codes().len());
    for code in specification.subdivision_codes() {
        if !code.starts_with(&prefix) || code.len() == prefix.len() {
            return Err(HolidayError::InvalidSubdivisionCode {
                code: code.to_owned(),
                country_code: country_code.to_string()
            });
        }
        subdivision_codes.push(code.to_owned());
    }

    Ok(Holiday::new(
        date,
        specification.local_name().to_owned(),
        specification.english_name().to_owned(),
        country_code,
        specification.holiday_types(),
        subdivision_codes
    ))
}
