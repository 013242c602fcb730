use std::fmt;
use std::str::FromStr;

use serde::{
    Deserialize,
    Serialize
};

use super::holidayerror::HolidayError;

/// ISO-3166-1 alpha-2 country code, stored as two uppercase ASCII letters.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CountryCode([u8; 2]);

impl CountryCode {
    pub const FR: CountryCode = CountryCode(*b"FR");
    pub const DE: CountryCode = CountryCode(*b"DE");

    pub fn new(code: &str) -> Result<CountryCode, HolidayError> {
        let trimmed = code.trim();
        match trimmed.as_bytes() {
            [a, b] if a.is_ascii_alphabetic() && b.is_ascii_alphabetic() => {
                Ok(CountryCode([a.to_ascii_uppercase(), b.to_ascii_uppercase()]))
            },
            _ => Err(HolidayError::InvalidCountryCode(code.to_owned()))
        }
    }

    pub fn as_str(&self) -> &str {
        // both bytes are ASCII letters by construction
        std::str::from_utf8(&self.0).unwrap_or("??")
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CountryCode {
    type Err = HolidayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CountryCode::new(s)
    }
}

impl TryFrom<String> for CountryCode {
    type Error = HolidayError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        CountryCode::new(&value)
    }
}

impl From<CountryCode> for String {
    fn from(code: CountryCode) -> String {
        code.as_str().to_owned()
    }
}
