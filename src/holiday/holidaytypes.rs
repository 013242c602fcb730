use std::fmt;
use std::ops::BitOr;

use serde::{
    Deserialize,
    Serialize
};

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum HolidayType {
    Public,
    Bank,
    School,
    Authorities,
    Optional,
    Observance
}

impl HolidayType {
    pub const ALL: [HolidayType; 6] = [
        HolidayType::Public,
        HolidayType::Bank,
        HolidayType::School,
        HolidayType::Authorities,
        HolidayType::Optional,
        HolidayType::Observance
    ];

    #[inline]
    const fn bit(self) -> u8 {
        1u8 << (self as u8)
    }

    pub fn name(&self) -> &'static str {
        match self {
            HolidayType::Public => "Public",
            HolidayType::Bank => "Bank",
            HolidayType::School => "School",
            HolidayType::Authorities => "Authorities",
            HolidayType::Optional => "Optional",
            HolidayType::Observance => "Observance"
        }
    }
}

/// Set of holiday categories packed into a bitmask.
/// Each bit is one `HolidayType`, in declaration order.
#[derive(PartialEq, Eq, Clone, Copy, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Vec<HolidayType>", into = "Vec<HolidayType>")]
pub struct HolidayTypes(u8);

impl HolidayTypes {
    pub const NONE: HolidayTypes = HolidayTypes(0);
    pub const PUBLIC: HolidayTypes = HolidayTypes(HolidayType::Public.bit());
    pub const BANK: HolidayTypes = HolidayTypes(HolidayType::Bank.bit());
    pub const SCHOOL: HolidayTypes = HolidayTypes(HolidayType::School.bit());
    pub const AUTHORITIES: HolidayTypes = HolidayTypes(HolidayType::Authorities.bit());
    pub const OPTIONAL: HolidayTypes = HolidayTypes(HolidayType::Optional.bit());
    pub const OBSERVANCE: HolidayTypes = HolidayTypes(HolidayType::Observance.bit());

    pub fn new(types: &[HolidayType]) -> HolidayTypes {
        types.iter().fold(HolidayTypes::NONE, |acc, &t| acc | t)
    }

    #[inline]
    pub fn contains(&self, holiday_type: HolidayType) -> bool {
        (self.0 & holiday_type.bit()) != 0
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn to_vec(&self) -> Vec<HolidayType> {
        HolidayType::ALL
            .into_iter()
            .filter(|&t| self.contains(t))
            .collect()
    }
}

impl BitOr for HolidayTypes {
    type Output = HolidayTypes;

    fn bitor(self, rhs: HolidayTypes) -> HolidayTypes {
        HolidayTypes(self.0 | rhs.0)
    }
}

impl BitOr<HolidayType> for HolidayTypes {
    type Output = HolidayTypes;

    fn bitor(self, rhs: HolidayType) -> HolidayTypes {
        HolidayTypes(self.0 | rhs.bit())
    }
}

impl From<HolidayType> for HolidayTypes {
    fn from(holiday_type: HolidayType) -> HolidayTypes {
        HolidayTypes(holiday_type.bit())
    }
}

impl From<Vec<HolidayType>> for HolidayTypes {
    fn from(types: Vec<HolidayType>) -> HolidayTypes {
        HolidayTypes::new(&types)
    }
}

impl From<HolidayTypes> for Vec<HolidayType> {
    fn from(types: HolidayTypes) -> Vec<HolidayType> {
        types.to_vec()
    }
}

impl fmt::Debug for HolidayTypes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.to_vec()).finish()
    }
}

impl fmt::Display for HolidayTypes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.to_vec().iter().map(|t| t.name()).collect();
        write!(f, "{}", names.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_union_and_membership() {
        let types = HolidayTypes::PUBLIC | HolidayTypes::BANK;
        assert!(types.contains(HolidayType::Public));
        assert!(types.contains(HolidayType::Bank));
        assert!(!types.contains(HolidayType::School));
        assert_eq!(types.to_string(), "Public, Bank");
        assert!(HolidayTypes::NONE.is_empty());
    }

    #[test]
    fn test_serde_as_list_of_names() {
        let types = HolidayTypes::new(&[HolidayType::School, HolidayType::Authorities]);
        let json = serde_json::to_string(&types).unwrap();
        assert_eq!(json, r#"["School","Authorities"]"#);
        let back: HolidayTypes = serde_json::from_str(&json).unwrap();
        assert_eq!(back, types);
    }
}
