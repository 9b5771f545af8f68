//! Validation outcomes.
//!
//! Validation never raises across the codec boundary: every defect is a
//! normal outcome carrying a closed fault kind. Only the lookup layer
//! can genuinely fail, and that too arrives here as a [`Fault::Lookup`]
//! outcome rather than an error.

use serde::{Deserialize, Serialize};

/// Closed taxonomy of validation faults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Fault {
    /// The identifier does not match the positional grammar.
    Format,

    /// The check character does not match the recomputed checksum.
    Checksum,

    /// The embedded birth date is not a real calendar date.
    Date,

    /// The embedded place code is unknown to the lookup.
    PlaceCode,

    /// The identifier does not match the supplied personal data.
    PersonalData,

    /// The place lookup itself failed (I/O fault, not a miss).
    Lookup,
}

/// Immutable result of a validation call.
///
/// Constructed once per call and never mutated. A successful outcome
/// carries no fault; a failed one carries exactly the first fault found,
/// in the fixed order format, date, place, checksum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationOutcome {
    valid: bool,
    message: String,
    fault: Option<Fault>,
    homograph: bool,
}

impl ValidationOutcome {
    /// A successful outcome.
    pub(crate) fn ok(message: impl Into<String>, homograph: bool) -> Self {
        Self {
            valid: true,
            message: message.into(),
            fault: None,
            homograph,
        }
    }

    /// A failed outcome with the given fault kind.
    pub(crate) fn fail(fault: Fault, message: impl Into<String>, homograph: bool) -> Self {
        Self {
            valid: false,
            message: message.into(),
            fault: Some(fault),
            homograph,
        }
    }

    /// Whether the identifier passed every check.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Human-readable description of the outcome.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The fault kind, if any.
    #[must_use]
    pub fn fault(&self) -> Option<Fault> {
        self.fault
    }

    /// Whether the identifier used homograph letters at numeric offsets.
    #[must_use]
    pub fn is_homograph(&self) -> bool {
        self.homograph
    }

    /// Whether the identifier is formally valid: either fully valid, or
    /// invalid only relative to personal data.
    #[must_use]
    pub fn is_formally_valid(&self) -> bool {
        self.valid || self.fault == Some(Fault::PersonalData)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_carries_no_fault() {
        let outcome = ValidationOutcome::ok("valid fiscal code", false);
        assert!(outcome.is_valid());
        assert!(outcome.is_formally_valid());
        assert_eq!(outcome.fault(), None);
        assert!(!outcome.is_homograph());
    }

    #[test]
    fn test_personal_data_fault_is_still_formally_valid() {
        let outcome = ValidationOutcome::fail(Fault::PersonalData, "mismatch", false);
        assert!(!outcome.is_valid());
        assert!(outcome.is_formally_valid());
    }

    #[test]
    fn test_format_fault_is_not_formally_valid() {
        let outcome = ValidationOutcome::fail(Fault::Format, "bad format", false);
        assert!(!outcome.is_formally_valid());
    }

    #[test]
    fn test_fault_serializes_snake_case() {
        let json = serde_json::to_string(&Fault::PlaceCode).unwrap();
        assert_eq!(json, "\"place_code\"");
    }
}
