use std::collections::{
    BTreeMap,
    BTreeSet
};
use std::sync::Arc;

use chrono::Weekday;
use serde::Deserialize;
use serde_json;
use tracing::info;

use crate::holiday::countrycode::CountryCode;
use crate::holiday::holidayspecification::HolidaySpecification;
use crate::holiday::holidaytypes::HolidayTypes;
use crate::manager::manager::Manager;
use crate::manager::managererror::{
    ManagerError,
    parse_json_value
};
use crate::time::recurringholiday::easterrelatedholiday::EasterRelatedHoliday;
use crate::time::recurringholiday::fixeddateholiday::FixedDateHoliday;
use crate::time::recurringholiday::lastweekdayholiday::LastWeekdayHoliday;
use crate::time::recurringholiday::nthweekdayholiday::NthWeekdayHoliday;
use crate::time::recurringholiday::recurringholiday::RecurringHoliday;
use super::configuredholidayprovider::{
    ConfiguredHolidayProvider,
    HolidayRule
};
use super::holidayprovider::HolidayProvider;

#[derive(Deserialize)]
struct EasterRelatedHolidayJsonProp {
    shift_days: i64
}

fn easter_related_holiday_from_json(json: serde_json::Value) -> Result<Arc<dyn RecurringHoliday>, ManagerError> {
    let json_prop: EasterRelatedHolidayJsonProp = parse_json_value(json)?;
    Ok(Arc::new(EasterRelatedHoliday::new(json_prop.shift_days)))
}

#[derive(Deserialize)]
struct FixedDateHolidayJsonProp {
    month: u32,
    day: u32
}

fn fixed_date_holiday_from_json(json: serde_json::Value) -> Result<Arc<dyn RecurringHoliday>, ManagerError> {
    let json_prop: FixedDateHolidayJsonProp = parse_json_value(json)?;
    Ok(Arc::new(FixedDateHoliday::new(json_prop.month, json_prop.day)?))
}

#[derive(Deserialize)]
struct NthWeekdayHolidayJsonProp {
    month: u32,
    n: u8,
    weekday: Weekday
}

fn nth_weekday_from_json(json: serde_json::Value) -> Result<Arc<dyn RecurringHoliday>, ManagerError> {
    let json_prop: NthWeekdayHolidayJsonProp = parse_json_value(json)?;
    Ok(Arc::new(NthWeekdayHoliday::new(json_prop.month, json_prop.n, json_prop.weekday)?))
}

#[derive(Deserialize)]
struct LastWeekdayHolidayJsonProp {
    month: u32,
    weekday: Weekday
}

fn last_weekday_from_json(json: serde_json::Value) -> Result<Arc<dyn RecurringHoliday>, ManagerError> {
    let json_prop: LastWeekdayHolidayJsonProp = parse_json_value(json)?;
    Ok(Arc::new(LastWeekdayHoliday::new(json_prop.month, json_prop.weekday)?))
}

#[derive(Deserialize)]
enum RuleType {
    EasterRelated,
    FixedDate,
    NthWeekday,
    LastWeekday
}

#[derive(Deserialize)]
struct RuleTypedObject {
    rule_type: RuleType
}

fn get_recurring_holiday_from_json(json: serde_json::Value) -> Result<Arc<dyn RecurringHoliday>, ManagerError> {
    let rule_type_obj: RuleTypedObject = parse_json_value(json.clone())?;
    match rule_type_obj.rule_type {
        RuleType::EasterRelated => easter_related_holiday_from_json(json),
        RuleType::FixedDate     => fixed_date_holiday_from_json(json),
        RuleType::NthWeekday    => nth_weekday_from_json(json),
        RuleType::LastWeekday   => last_weekday_from_json(json)
    }
}

fn default_holiday_types() -> HolidayTypes {
    HolidayTypes::PUBLIC
}

#[derive(Deserialize)]
struct HolidayRuleJsonProp {
    english_name: String,
    local_name: String,
    #[serde(default = "default_holiday_types")]
    holiday_types: HolidayTypes,
    #[serde(default)]
    launch_year: Option<i32>,
    #[serde(default)]
    end_year: Option<i32>,
    #[serde(default)]
    subdivision_codes: BTreeSet<String>
}

fn holiday_rule_from_json(json: serde_json::Value) -> Result<HolidayRule, ManagerError> {
    let json_prop: HolidayRuleJsonProp = parse_json_value(json.clone())?;
    let recurring_holiday = get_recurring_holiday_from_json(json)?;
    let rule = HolidayRule::new(recurring_holiday, &json_prop.english_name, &json_prop.local_name)?
        .with_holiday_types(json_prop.holiday_types)
        .with_validity(json_prop.launch_year, json_prop.end_year)
        .with_subdivision_codes(json_prop.subdivision_codes);
    Ok(rule)
}

#[derive(Deserialize)]
struct ConfiguredHolidayProviderJsonProp {
    country_code: CountryCode,
    #[serde(default)]
    subdivision_codes: BTreeMap<String, String>,
    #[serde(default)]
    sources: Vec<String>,
    holidays: Vec<serde_json::Value>,
    #[serde(default)]
    additional_holidays: Vec<HolidaySpecification>
}

pub fn holiday_provider_from_json(json: serde_json::Value) -> Result<(String, Arc<dyn HolidayProvider>), ManagerError> {
    let json_prop: ConfiguredHolidayProviderJsonProp = parse_json_value(json)?;
    let mut rules: Vec<HolidayRule> = Vec::with_capacity(json_prop.holidays.len());
    for rule_json in json_prop.holidays.into_iter() {
        rules.push(holiday_rule_from_json(rule_json)?);
    }

    let n_rules = rules.len();
    let provider = ConfiguredHolidayProvider::new(
        json_prop.country_code,
        json_prop.subdivision_codes,
        json_prop.sources,
        rules,
        json_prop.additional_holidays
    )?;
    info!(
        country_code = %json_prop.country_code,
        rules = n_rules,
        "configured holiday provider loaded"
    );

    let provider: Arc<dyn HolidayProvider> = Arc::new(provider);
    Ok((json_prop.country_code.to_string(), provider))
}

/// Registry of holiday providers keyed by country code.
pub struct HolidayProviderManager;

impl HolidayProviderManager {
    pub fn new() -> Manager<Arc<dyn HolidayProvider>> {
        Manager::new(holiday_provider_from_json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::holiday::holidayerror::HolidayError;
    use crate::manager::manager::IManager;
    use chrono::NaiveDate;

    #[test]
    fn test_load_provider_with_every_rule_type() {
        let json = serde_json::json!({
            "country_code": "us",
            "holidays": [
                {"rule_type": "FixedDate", "month": 7, "day": 4, "english_name": "Independence Day", "local_name": "Independence Day"},
                {"rule_type": "NthWeekday", "month": 11, "n": 4, "weekday": "Thu", "english_name": "Thanksgiving Day", "local_name": "Thanksgiving Day"},
                {"rule_type": "LastWeekday", "month": 5, "weekday": "Mon", "english_name": "Memorial Day", "local_name": "Memorial Day"},
                {"rule_type": "EasterRelated", "shift_days": -2, "english_name": "Good Friday", "local_name": "Good Friday", "holiday_types": ["Optional"]}
            ]
        });
        let manager = HolidayProviderManager::new();
        manager.insert_obj_from_json(json).unwrap();

        let provider = manager.get("US").unwrap();
        assert!(provider.as_subdivision_codes_provider().is_none());
        let dates: Vec<NaiveDate> = provider.get_holidays(2024).unwrap().iter().map(|h| h.date()).collect();
        assert_eq!(dates, vec![
            NaiveDate::from_ymd_opt(2024, 3, 29).unwrap(),
            NaiveDate::from_ymd_opt(2024, 5, 27).unwrap(),
            NaiveDate::from_ymd_opt(2024, 7, 4).unwrap(),
            NaiveDate::from_ymd_opt(2024, 11, 28).unwrap()
        ]);
    }

    #[test]
    fn test_unknown_rule_type_fails() {
        let json = serde_json::json!({
            "country_code": "US",
            "holidays": [{"rule_type": "LunarNewYear", "english_name": "x", "local_name": "x"}]
        });
        assert!(matches!(
            holiday_provider_from_json(json),
            Err(ManagerError::JsonParseError(_))
        ));
    }

    #[test]
    fn test_invalid_fixed_date_fails() {
        let json = serde_json::json!({
            "country_code": "US",
            "holidays": [{"rule_type": "FixedDate", "month": 2, "day": 30, "english_name": "x", "local_name": "x"}]
        });
        assert!(matches!(
            holiday_provider_from_json(json),
            Err(ManagerError::HolidayError(HolidayError::InvalidRule(_)))
        ));
    }
}
