use chrono::NaiveDate;
use thiserror::Error;

/// Failures raised while building or resolving holidays.
///
/// Every variant aborts a single resolution call only; nothing is cached,
/// so a failed call never affects the next one.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HolidayError {
    #[error("year {year} is outside the supported range {min}..={max}")]
    YearOutOfRange {
        year: i32,
        min: i32,
        max: i32
    },

    #[error("{year}-{month:02}-{day:02} is not a valid calendar date")]
    InvalidDate {
        year: i32,
        month: u32,
        day: u32
    },

    #[error("date arithmetic overflowed: {date} shifted by {days} days")]
    DateOverflow {
        date: NaiveDate,
        days: i64
    },

    #[error("holiday '{0}' sets both an explicit date and an Easter offset")]
    AmbiguousDateSource(String),

    #[error("holiday '{0}' sets neither an explicit date nor an Easter offset")]
    MissingDateSource(String),

    #[error("holiday names must not be empty")]
    EmptyName,

    #[error("holiday '{name}' has launch year {launch_year} after end year {end_year}")]
    InvalidValidityRange {
        name: String,
        launch_year: i32,
        end_year: i32
    },

    #[error("holiday '{name}' resolves to {date}, outside requested year {year}")]
    DateOutsideYear {
        name: String,
        date: NaiveDate,
        year: i32
    },

    #[error("'{0}' is not an ISO-3166-1 alpha-2 country code")]
    InvalidCountryCode(String),

    #[error("subdivision code '{code}' does not belong to country {country_code}")]
    InvalidSubdivisionCode {
        code: String,
        country_code: String
    },

    #[error("subdivision code '{code}' is not declared by country {country_code}")]
    UnknownSubdivisionCode {
        code: String,
        country_code: String
    },

    #[error("invalid recurring holiday rule: {0}")]
    InvalidRule(String)
}
