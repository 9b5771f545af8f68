//! Personal data used as generation input.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Sex as encoded in the fiscal code day field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
}

impl Sex {
    /// Whether the day-of-birth field gets the +40 female offset.
    #[must_use]
    pub fn is_female(&self) -> bool {
        matches!(self, Sex::Female)
    }
}

/// Personal data from which a fiscal code is derived.
///
/// Ephemeral generation input; never persisted by this crate. The
/// province is a two-letter code, or [`fisco_lookup::FOREIGN_PROVINCE`]
/// for people born outside Italy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonData {
    pub given_name: String,
    pub surname: String,
    pub birth_date: NaiveDate,
    pub sex: Sex,
    pub birthplace: String,
    pub province: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sex_serializes_single_letter() {
        assert_eq!(serde_json::to_string(&Sex::Male).unwrap(), "\"M\"");
        assert_eq!(serde_json::to_string(&Sex::Female).unwrap(), "\"F\"");
    }

    #[test]
    fn test_person_json_roundtrip() {
        let person = PersonData {
            given_name: "Mario".to_string(),
            surname: "Rossi".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1985, 8, 1).unwrap(),
            sex: Sex::Male,
            birthplace: "Roma".to_string(),
            province: "RM".to_string(),
        };
        let json = serde_json::to_string(&person).unwrap();
        let parsed: PersonData = serde_json::from_str(&json).unwrap();
        assert_eq!(person, parsed);
    }
}
