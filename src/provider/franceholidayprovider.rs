use std::collections::BTreeMap;

use crate::holiday::countrycode::CountryCode;
use crate::holiday::holidayerror::HolidayError;
use crate::holiday::holidayspecification::HolidaySpecification;
use crate::holiday::holidaytypes::HolidayTypes;
use crate::religious::feastoffsetresolver::FeastOffsetResolver;
use super::holidayprovider::{
    HolidayProvider,
    SubdivisionCodesProvider
};

const SUBDIVISION_CODES: [(&str, &str); 13] = [
    ("FR-ARA", "Auvergne-Rhone-Alpes"),
    ("FR-BFC", "Bourgogne-Franche-Comte"),
    ("FR-BRE", "Bretagne"),
    ("FR-CVL", "Centre-Val de Loire"),
    ("FR-20R", "Corse"),
    ("FR-GES", "Grand-Est"),
    ("FR-HDF", "Hauts-de-France"),
    ("FR-IDF", "Ile-de-France"),
    ("FR-NOR", "Normandie"),
    ("FR-NAQ", "Nouvelle-Aquitaine"),
    ("FR-OCC", "Occitanie"),
    ("FR-PDL", "Pays-de-la-Loire"),
    ("FR-PAC", "Provence-Alpes-Cote-d'Azur")
];

const FIXED_HOLIDAYS: [(u32, u32, &str, &str); 8] = [
    (1, 1, "New Year's Day", "Jour de l'an"),
    (5, 1, "Labour Day", "Fête du Travail"),
    (5, 8, "Victory in Europe Day", "Victoire 1945"),
    (7, 14, "Bastille Day", "Fête nationale"),
    (8, 15, "Assumption Day", "Assomption"),
    (11, 1, "All Saints' Day", "Toussaint"),
    (11, 11, "Armistice Day", "Armistice 1918"),
    (12, 25, "Christmas Day", "Noël")
];

#[derive(Debug, Clone, Copy, Default)]
pub struct FranceHolidayProvider;

impl HolidayProvider for FranceHolidayProvider {
    fn country_code(&self) -> CountryCode {
        CountryCode::FR
    }

    fn get_holiday_specifications(&self, year: i32) -> Result<Vec<HolidaySpecification>, HolidayError> {
        let mut specifications = Vec::with_capacity(FIXED_HOLIDAYS.len() + 3);
        for (month, day, english_name, local_name) in FIXED_HOLIDAYS {
            specifications.push(HolidaySpecification::fixed_ymd(year, month, day, english_name, local_name)?);
        }

        let feasts = FeastOffsetResolver::for_year(year)?;
        specifications.push(feasts.easter_monday("Lundi de Pâques", HolidayTypes::PUBLIC)?);
        specifications.push(feasts.ascension_day("Ascension", HolidayTypes::PUBLIC)?);
        specifications.push(feasts.whit_monday("Lundi de Pentecôte", HolidayTypes::PUBLIC)?);

        Ok(specifications)
    }

    fn get_sources(&self) -> Vec<String> {
        vec![
            "https://en.wikipedia.org/wiki/Public_holidays_in_France".to_owned(),
            "https://en.wikipedia.org/wiki/ISO_3166-2:FR".to_owned(),
            "https://ec.europa.eu/taxation_customs/dds2/rd/publicholidays_consultation.jsp?Screen=0&Expand=true&Country=FR".to_owned()
        ]
    }

    fn as_subdivision_codes_provider(&self) -> Option<&dyn SubdivisionCodesProvider> {
        Some(self)
    }
}

impl SubdivisionCodesProvider for FranceHolidayProvider {
    fn get_subdivision_codes(&self) -> BTreeMap<String, String> {
        SUBDIVISION_CODES
            .iter()
            .map(|&(code, name)| (code.to_owned(), name.to_owned()))
            .collect()
    }
}
