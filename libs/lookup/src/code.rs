//! Strongly typed place codes.

use crate::PlaceCodeError;

/// Reserved province marker for people born outside Italy.
///
/// Foreign countries are keyed under this pseudo-province in the place
/// table, with the country name in the place-name column.
pub const FOREIGN_PROVINCE: &str = "EE";

/// A 4-character place code: one uppercase letter followed by three
/// decimal digits, e.g. `H501` (Roma).
///
/// This is the normalized form; homograph variants are resolved by the
/// codec before a code reaches this type.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlaceCode(String);

impl PlaceCode {
    /// Parses a place code from a string.
    ///
    /// Input is trimmed and upper-cased before the shape check.
    pub fn parse(s: &str) -> Result<Self, PlaceCodeError> {
        let s = s.trim().to_uppercase();

        if s.is_empty() {
            return Err(PlaceCodeError::Empty);
        }

        let len = s.chars().count();
        if len != 4 {
            return Err(PlaceCodeError::Length { actual: len });
        }

        let mut chars = s.chars();
        let head = chars.next().unwrap_or('\0');
        let shape_ok = head.is_ascii_uppercase() && chars.all(|c| c.is_ascii_digit());
        if !shape_ok {
            return Err(PlaceCodeError::Shape { code: s });
        }

        Ok(Self(s))
    }

    /// Returns the code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PlaceCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for PlaceCode {
    type Err = PlaceCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for PlaceCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for PlaceCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for PlaceCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
