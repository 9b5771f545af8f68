//! Fiscal code validation and generation against an injected place
//! lookup.

use chrono::Datelike;

use fisco_lookup::{LookupError, PlaceCode, PlaceLookup};

use crate::codec::{check_char, extract_birth_date, is_homograph, matches_grammar, normalize};
use crate::name::{name_code, NamePart};
use crate::outcome::{Fault, ValidationOutcome};
use crate::person::PersonData;
use crate::tables::MONTH_CODES;

const MSG_VALID: &str = "valid fiscal code";
const MSG_VALID_HOMOGRAPH: &str = "valid fiscal code (homograph form)";

/// Validates and generates fiscal codes.
///
/// The place lookup is an explicit capability passed at construction,
/// so tests substitute an in-memory table and services share one cached
/// backend across validators.
pub struct Validator<L> {
    lookup: L,
}

impl<L: PlaceLookup> Validator<L> {
    /// Creates a validator over the given lookup.
    pub fn new(lookup: L) -> Self {
        Self { lookup }
    }

    /// Returns the underlying lookup.
    pub fn lookup(&self) -> &L {
        &self.lookup
    }

    /// Validates the formal correctness of a fiscal code.
    ///
    /// Checks run in a fixed order and the first failure wins: grammar,
    /// birth date, place code, checksum. The order is part of the
    /// contract; it decides which single fault is reported when several
    /// defects coexist.
    pub async fn validate(&self, code: &str) -> ValidationOutcome {
        let code = code.trim().to_uppercase();

        if !matches_grammar(&code) {
            return ValidationOutcome::fail(
                Fault::Format,
                "identifier does not match the fiscal code format",
                false,
            );
        }

        let homograph = is_homograph(&code);
        let normalized = normalize(&code);

        if let Err(e) = extract_birth_date(&normalized) {
            return ValidationOutcome::fail(
                Fault::Date,
                format!("invalid birth date in identifier: {e}"),
                homograph,
            );
        }

        // Post-grammar the slice is always letter-plus-three-digits.
        let place = match PlaceCode::parse(&normalized[11..15]) {
            Ok(place) => place,
            Err(e) => {
                return ValidationOutcome::fail(Fault::Format, e.to_string(), homograph);
            }
        };

        match self.lookup.exists(&place).await {
            Ok(true) => {}
            Ok(false) => {
                return ValidationOutcome::fail(
                    Fault::PlaceCode,
                    format!("unknown place code: {place}"),
                    homograph,
                );
            }
            Err(e) => {
                return ValidationOutcome::fail(
                    Fault::Lookup,
                    format!("place lookup failed: {e}"),
                    homograph,
                );
            }
        }

        let expected = check_char(&normalized[..15]);
        if normalized.as_bytes()[15] as char != expected {
            return ValidationOutcome::fail(
                Fault::Checksum,
                "check character does not match",
                homograph,
            );
        }

        ValidationOutcome::ok(
            if homograph { MSG_VALID_HOMOGRAPH } else { MSG_VALID },
            homograph,
        )
    }

    /// Validates a fiscal code against the personal data it should
    /// encode.
    ///
    /// Formal validity gates the comparison: any grammar, date, place,
    /// or checksum fault is returned unchanged. The expected identifier
    /// is regenerated from the personal data and compared against the
    /// normalized input, so homograph forms of the same person still
    /// match.
    pub async fn validate_person(&self, code: &str, person: &PersonData) -> ValidationOutcome {
        let outcome = self.validate(code).await;
        if !outcome.is_formally_valid() {
            return outcome;
        }

        let homograph = outcome.is_homograph();
        let normalized = normalize(&code.trim().to_uppercase());

        let expected = match self.generate(person).await {
            Ok(Some(expected)) => expected,
            Ok(None) => {
                return ValidationOutcome::fail(
                    Fault::PersonalData,
                    "cannot derive an identifier from the given personal data",
                    homograph,
                );
            }
            Err(e) => {
                return ValidationOutcome::fail(
                    Fault::Lookup,
                    format!("place lookup failed: {e}"),
                    homograph,
                );
            }
        };

        if normalized != expected {
            return ValidationOutcome::fail(
                Fault::PersonalData,
                "identifier does not match the given personal data",
                homograph,
            );
        }

        ValidationOutcome::ok(
            if homograph { MSG_VALID_HOMOGRAPH } else { MSG_VALID },
            homograph,
        )
    }

    /// Generates the fiscal code for the given personal data.
    ///
    /// Always emits the standard non-homograph form; homograph variants
    /// only arise from historical de-duplication, which generation does
    /// not simulate. Returns `Ok(None)` when the birthplace cannot be
    /// resolved; there is no partial output.
    pub async fn generate(&self, person: &PersonData) -> Result<Option<String>, LookupError> {
        let place = match self
            .lookup
            .resolve(&person.province, &person.birthplace)
            .await?
        {
            Some(place) => place,
            None => return Ok(None),
        };

        let surname_code = name_code(&person.surname, NamePart::Surname);
        let given_code = name_code(&person.given_name, NamePart::Given);

        let year = person.birth_date.year().rem_euclid(100);
        let month = MONTH_CODES.as_bytes()[person.birth_date.month0() as usize] as char;
        let mut day = person.birth_date.day();
        if person.sex.is_female() {
            day += 40;
        }

        let mut code =
            format!("{surname_code}{given_code}{year:02}{month}{day:02}{place}");
        let check = check_char(&code);
        code.push(check);

        Ok(Some(code))
    }
}
