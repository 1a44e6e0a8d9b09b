//! Age value object and dosage age groups.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Maximum accepted age in years.
const MAX_AGE: u8 = 120;

/// A validated age in whole years (0-120).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Age(u8);

impl Age {
    /// Creates an Age, returning error if out of range.
    pub fn try_new(years: u32) -> Result<Self, ValidationError> {
        if years > u32::from(MAX_AGE) {
            return Err(ValidationError::out_of_range(
                "age",
                0,
                i32::from(MAX_AGE),
                years.min(i32::MAX as u32) as i32,
            ));
        }
        Ok(Self(years as u8))
    }

    /// Returns the age in years.
    pub fn years(&self) -> u8 {
        self.0
    }

    /// Returns the dosage age group this age falls into.
    pub fn group(&self) -> AgeGroup {
        AgeGroup::for_age(*self)
    }
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Dosage age brackets used by medication guidance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgeGroup {
    /// 0-2 years.
    Infant,
    /// 3-12 years.
    Child,
    /// 13-64 years.
    Adult,
    /// 65 years and above.
    Elderly,
}

impl AgeGroup {
    /// Returns all age groups in ascending order.
    pub fn all() -> &'static [AgeGroup] {
        &[
            AgeGroup::Infant,
            AgeGroup::Child,
            AgeGroup::Adult,
            AgeGroup::Elderly,
        ]
    }

    /// Returns the group bracketing the given age.
    pub fn for_age(age: Age) -> AgeGroup {
        match age.years() {
            0..=2 => AgeGroup::Infant,
            3..=12 => AgeGroup::Child,
            13..=64 => AgeGroup::Adult,
            _ => AgeGroup::Elderly,
        }
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            AgeGroup::Infant => "Infant",
            AgeGroup::Child => "Child",
            AgeGroup::Adult => "Adult",
            AgeGroup::Elderly => "Elderly",
        }
    }
}

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn age_try_new_accepts_valid_range() {
        assert_eq!(Age::try_new(0).unwrap().years(), 0);
        assert_eq!(Age::try_new(35).unwrap().years(), 35);
        assert_eq!(Age::try_new(120).unwrap().years(), 120);
    }

    #[test]
    fn age_try_new_rejects_over_120() {
        assert!(Age::try_new(121).is_err());
        assert!(Age::try_new(1000).is_err());
    }

    #[test]
    fn age_group_brackets_match_boundaries() {
        assert_eq!(Age::try_new(0).unwrap().group(), AgeGroup::Infant);
        assert_eq!(Age::try_new(2).unwrap().group(), AgeGroup::Infant);
        assert_eq!(Age::try_new(3).unwrap().group(), AgeGroup::Child);
        assert_eq!(Age::try_new(12).unwrap().group(), AgeGroup::Child);
        assert_eq!(Age::try_new(13).unwrap().group(), AgeGroup::Adult);
        assert_eq!(Age::try_new(64).unwrap().group(), AgeGroup::Adult);
        assert_eq!(Age::try_new(65).unwrap().group(), AgeGroup::Elderly);
        assert_eq!(Age::try_new(120).unwrap().group(), AgeGroup::Elderly);
    }

    #[test]
    fn age_group_all_is_ascending() {
        assert_eq!(
            AgeGroup::all(),
            &[
                AgeGroup::Infant,
                AgeGroup::Child,
                AgeGroup::Adult,
                AgeGroup::Elderly
            ]
        );
    }

    #[test]
    fn age_group_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&AgeGroup::Infant).unwrap(),
            "\"infant\""
        );
        assert_eq!(
            serde_json::to_string(&AgeGroup::Elderly).unwrap(),
            "\"elderly\""
        );
    }

    proptest! {
        #[test]
        fn every_valid_age_has_exactly_one_group(years in 0u32..=120) {
            let age = Age::try_new(years).unwrap();
            let group = age.group();
            let matches = AgeGroup::all()
                .iter()
                .filter(|g| **g == group)
                .count();
            prop_assert_eq!(matches, 1);
        }
    }
}
