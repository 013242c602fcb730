//! Specification processing: filtering, ordering, year stamping.

use chrono::{
    Datelike,
    NaiveDate
};

use holidayengine::holiday::countrycode::CountryCode;
use holidayengine::holiday::holidayerror::HolidayError;
use holidayengine::holiday::holidayspecification::HolidaySpecification;
use holidayengine::holiday::holidaytypes::HolidayTypes;
use holidayengine::processor::holidayspecificationprocessor::process;
use holidayengine::religious::feastoffsetresolver::FeastOffsetResolver;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn sample_specifications(year: i32) -> Vec<HolidaySpecification> {
    let feasts = FeastOffsetResolver::for_year(year).unwrap();
    vec![
        HolidaySpecification::fixed_ymd(year, 12, 25, "Christmas Day", "Noël").unwrap(),
        feasts.whit_monday("Lundi de Pentecôte", HolidayTypes::PUBLIC).unwrap(),
        HolidaySpecification::fixed_ymd(year, 1, 1, "New Year's Day", "Jour de l'an").unwrap(),
        HolidaySpecification::easter_relative(1, "Easter Monday", "Lundi de Pâques").unwrap()
    ]
}

#[test]
fn test_output_sorted_by_date() {
    let holidays = process(&sample_specifications(2024), CountryCode::FR, 2024).unwrap();
    let dates: Vec<NaiveDate> = holidays.iter().map(|h| h.date()).collect();
    assert_eq!(dates, vec![ymd(2024, 1, 1), ymd(2024, 4, 1), ymd(2024, 5, 20), ymd(2024, 12, 25)]);
}

#[test]
fn test_deterministic() {
    let specs = sample_specifications(2025);
    let first = process(&specs, CountryCode::FR, 2025).unwrap();
    let second = process(&specs, CountryCode::FR, 2025).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_launch_year_filter() {
    let specs = vec![
        HolidaySpecification::fixed_ymd(1989, 10, 3, "German Unity Day", "Tag der Deutschen Einheit")
            .unwrap()
            .with_launch_year(1990)
    ];
    assert!(process(&specs, CountryCode::DE, 1989).unwrap().is_empty());

    for year in [1990, 1991, 2024] {
        let specs = vec![
            HolidaySpecification::fixed_ymd(year, 10, 3, "German Unity Day", "Tag der Deutschen Einheit")
                .unwrap()
                .with_launch_year(1990)
        ];
        assert_eq!(process(&specs, CountryCode::DE, year).unwrap().len(), 1, "year {}", year);
    }
}

#[test]
fn test_end_year_filter() {
    let spec = HolidaySpecification::easter_relative(-2, "Good Friday", "Karfreitag")
        .unwrap()
        .with_end_year(2000);
    assert_eq!(process(&[spec.clone()], CountryCode::DE, 2000).unwrap().len(), 1);
    assert!(process(&[spec.clone()], CountryCode::DE, 2001).unwrap().is_empty());
    assert!(process(&[spec], CountryCode::DE, 2024).unwrap().is_empty());
}

#[test]
fn test_same_date_keeps_input_order() {
    let specs = vec![
        HolidaySpecification::fixed_ymd(2024, 10, 31, "Reformation Day", "Reformationstag")
            .unwrap()
            .with_subdivision_codes(["DE-SN"]),
        HolidaySpecification::fixed_ymd(2024, 1, 1, "New Year's Day", "Neujahr").unwrap(),
        HolidaySpecification::fixed_ymd(2024, 10, 31, "Reformation Day", "Reformationstag")
            .unwrap()
            .with_subdivision_codes(["DE-HB"]),
        HolidaySpecification::fixed_ymd(2024, 10, 31, "Halloween", "Halloween")
            .unwrap()
            .with_holiday_types(HolidayTypes::OBSERVANCE)
    ];
    let holidays = process(&specs, CountryCode::DE, 2024).unwrap();
    let scopes: Vec<Vec<String>> = holidays.iter().map(|h| h.subdivision_codes().to_vec()).collect();
    assert_eq!(scopes, vec![
        vec![],
        vec!["DE-SN".to_owned()],
        vec!["DE-HB".to_owned()],
        vec![]
    ]);
    assert_eq!(holidays[3].english_name(), "Halloween");
}

#[test]
fn test_every_holiday_in_requested_year() {
    for year in [1583, 1818, 1900, 2000, 2038, 2285, 4099, 5000, 262_000] {
        let holidays = process(&sample_specifications(year), CountryCode::FR, year).unwrap();
        assert_eq!(holidays.len(), 4);
        assert!(holidays.iter().all(|h| h.date().year() == year));
    }
}

#[test]
fn test_errors_abort_the_call() {
    let ambiguous: Result<HolidaySpecification, _> = serde_json::from_str(
        r#"{"date": "2024-01-01", "easter_offset": 1, "english_name": "X", "local_name": "X"}"#
    );
    assert!(ambiguous.is_err());

    assert!(matches!(
        process(&sample_specifications(2024), CountryCode::FR, 1500),
        Err(HolidayError::YearOutOfRange { year: 1500, .. })
    ));

    let inverted = vec![
        HolidaySpecification::fixed_ymd(2024, 1, 1, "New Year's Day", "Neujahr")
            .unwrap()
            .with_launch_year(2030)
            .with_end_year(2020)
    ];
    assert!(matches!(
        process(&inverted, CountryCode::DE, 2024),
        Err(HolidayError::InvalidValidityRange { .. })
    ));
}
