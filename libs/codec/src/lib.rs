//! # fisco-codec
//!
//! Codec, validation, and generation engine for Italian fiscal codes:
//! the 16-character personal tax identifiers encoding surname, given
//! name, birth date, sex, and birthplace, closed by a checksum letter.
//!
//! ## Anatomy of a code
//!
//! ```text
//! RSS MRA 85 M 01 H501 Q
//!  |   |   |  |  |   |  └ check character
//!  |   |   |  |  |   └ place code (municipality or country)
//!  |   |   |  |  └ day of birth (+40 for women)
//!  |   |   |  └ month letter
//!  |   |   └ year of birth, two digits
//!  |   └ given-name code
//!  └ surname code
//! ```
//!
//! Seven of the positions carry digits. When two people would derive
//! the same code, the registry replaces digits with "homograph" letters
//! at those positions; this crate detects and normalizes such forms
//! before any semantic check.
//!
//! ## Design Principles
//!
//! - The codec functions ([`normalize`], [`is_homograph`],
//!   [`check_char`], [`extract_birth_date`], [`name_code`]) are pure,
//!   synchronous, and safe to call concurrently.
//! - Validation defects are outcomes, not errors: [`ValidationOutcome`]
//!   carries a closed [`Fault`] taxonomy and a homograph flag.
//! - The place-code lookup is an injected capability
//!   ([`fisco_lookup::PlaceLookup`]), never hidden process state.

mod codec;
mod name;
mod outcome;
mod person;
mod tables;
mod validator;

pub use codec::{check_char, extract_birth_date, is_homograph, matches_grammar, normalize, DateError};
pub use name::{name_code, NamePart};
pub use outcome::{Fault, ValidationOutcome};
pub use person::{PersonData, Sex};
pub use tables::{CHECK_ALPHABET, CONSONANTS, MONTH_CODES, NUMERIC_OFFSETS, ODD_VALUES, VOWELS};
pub use validator::Validator;

/// Re-export the lookup contract for consumers wiring a validator.
pub use fisco_lookup;
