use chrono::{
    NaiveDate,
    TimeDelta
};

use crate::holiday::holidayerror::HolidayError;
use crate::holiday::holidayspecification::HolidaySpecification;
use crate::holiday::holidaytypes::HolidayTypes;
use super::eastercalculator::compute_easter;

/// Movable feasts anchored on Western Easter Sunday.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Feast {
    AshWednesday,
    PalmSunday,
    MaundyThursday,
    GoodFriday,
    EasterSunday,
    EasterMonday,
    AscensionDay,
    WhitSunday,
    WhitMonday,
    CorpusChristi
}

impl Feast {
    pub fn offset_days(&self) -> i64 {
        match self {
            Feast::AshWednesday => -46,
            Feast::PalmSunday => -7,
            Feast::MaundyThursday => -3,
            Feast::GoodFriday => -2,
            Feast::EasterSunday => 0,
            Feast::EasterMonday => 1,
            Feast::AscensionDay => 39,
            Feast::WhitSunday => 49,
            Feast::WhitMonday => 50,
            Feast::CorpusChristi => 60
        }
    }

    pub fn english_name(&self) -> &'static str {
        match self {
            Feast::AshWednesday => "Ash Wednesday",
            Feast::PalmSunday => "Palm Sunday",
            Feast::MaundyThursday => "Maundy Thursday",
            Feast::GoodFriday => "Good Friday",
            Feast::EasterSunday => "Easter Sunday",
            Feast::EasterMonday => "Easter Monday",
            Feast::AscensionDay => "Ascension Day",
            Feast::WhitSunday => "Pentecost",
            Feast::WhitMonday => "Whit Monday",
            Feast::CorpusChristi => "Corpus Christi"
        }
    }
}

/// Derives Easter-dependent dates for a single year.
///
/// The named helpers return already-resolved specifications (an explicit
/// date), so the processor never has to look at Easter again.
#[derive(Debug, Clone, Copy)]
pub struct FeastOffsetResolver {
    easter_sunday: NaiveDate
}

impl FeastOffsetResolver {
    pub fn new(easter_sunday: NaiveDate) -> FeastOffsetResolver {
        FeastOffsetResolver { easter_sunday }
    }

    pub fn for_year(year: i32) -> Result<FeastOffsetResolver, HolidayError> {
        Ok(FeastOffsetResolver::new(compute_easter(year)?))
    }

    pub fn easter_sunday(&self) -> NaiveDate {
        self.easter_sunday
    }

    pub fn date_at_offset(&self, offset_days: i64) -> Result<NaiveDate, HolidayError> {
        TimeDelta::try_days(offset_days)
            .and_then(|delta| self.easter_sunday.checked_add_signed(delta))
            .ok_or(HolidayError::DateOverflow {
                date: self.easter_sunday,
                days: offset_days
            })
    }

    pub fn date_of(&self, feast: Feast) -> Result<NaiveDate, HolidayError> {
        self.date_at_offset(feast.offset_days())
    }

    pub fn feast(
        &self,
        feast: Feast,
        english_name: &str,
        local_name: &str,
        holiday_types: HolidayTypes
    ) -> Result<HolidaySpecification, HolidayError> {
        Ok(HolidaySpecification::fixed(self.date_of(feast)?, english_name, local_name)?
            .with_holiday_types(holiday_types))
    }

    fn named_feast(&self, feast: Feast, local_name: &str, holiday_types: HolidayTypes) -> Result<HolidaySpecification, HolidayError> {
        self.feast(feast, feast.english_name(), local_name, holiday_types)
    }

    pub fn ash_wednesday(&self, local_name: &str, holiday_types: HolidayTypes) -> Result<HolidaySpecification, HolidayError> {
        self.named_feast(Feast::AshWednesday, local_name, holiday_types)
    }

    pub fn palm_sunday(&self, local_name: &str, holiday_types: HolidayTypes) -> Result<HolidaySpecification, HolidayError> {
        self.named_feast(Feast::PalmSunday, local_name, holiday_types)
    }

    pub fn maundy_thursday(&self, local_name: &str, holiday_types: HolidayTypes) -> Result<HolidaySpecification, HolidayError> {
        self.named_feast(Feast::MaundyThursday, local_name, holiday_types)
    }

    pub fn good_friday(&self, local_name: &str, holiday_types: HolidayTypes) -> Result<HolidaySpecification, HolidayError> {
        self.named_feast(Feast::GoodFriday, local_name, holiday_types)
    }

    pub fn easter_sunday_holiday(&self, local_name: &str, holiday_types: HolidayTypes) -> Result<HolidaySpecification, HolidayError> {
        self.named_feast(Feast::EasterSunday, local_name, holiday_types)
    }

    pub fn easter_monday(&self, local_name: &str, holiday_types: HolidayTypes) -> Result<HolidaySpecification, HolidayError> {
        self.named_feast(Feast::EasterMonday, local_name, holiday_types)
    }

    pub fn ascension_day(&self, local_name: &str, holiday_types: HolidayTypes) -> Result<HolidaySpecification, HolidayError> {
        self.named_feast(Feast::AscensionDay, local_name, holiday_types)
    }

    pub fn whit_sunday(&self, local_name: &str, holiday_types: HolidayTypes) -> Result<HolidaySpecification, HolidayError> {
        self.named_feast(Feast::WhitSunday, local_name, holiday_types)
    }

    pub fn whit_monday(&self, local_name: &str, holiday_types: HolidayTypes) -> Result<HolidaySpecification, HolidayError> {
        self.named_feast(Feast::WhitMonday, local_name, holiday_types)
    }

    pub fn corpus_christi(&self, local_name: &str, holiday_types: HolidayTypes) -> Result<HolidaySpecification, HolidayError> {
        self.named_feast(Feast::CorpusChristi, local_name, holiday_types)
    }
}
