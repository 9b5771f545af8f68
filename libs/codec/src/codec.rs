//! Pure codec functions: homograph handling, checksum, birth-date
//! extraction, and the positional grammar check.

use chrono::{Datelike, Local, NaiveDate};
use thiserror::Error;

use crate::tables::{
    homograph_digit, CHECK_ALPHABET, MONTH_CODES, NUMERIC_OFFSETS, ODD_VALUES,
};

/// Errors from birth-date extraction.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DateError {
    /// The code is not 16 characters long.
    #[error("code is not 16 characters")]
    Truncated,

    /// A year or day field holds a non-digit after normalization.
    #[error("date field is not numeric")]
    NotNumeric,

    /// The month letter is not in the month alphabet.
    #[error("unknown month code: '{0}'")]
    UnknownMonth(char),

    /// The fields do not form a real calendar date.
    #[error("no such calendar date: {year:04}-{month:02}-{day:02}")]
    Calendar { year: i32, month: u32, day: u32 },
}

/// Replaces homograph letters with their digits at the seven numeric
/// offsets; everything else passes through unchanged.
///
/// Idempotent: digits are never homograph letters, so re-normalizing a
/// normalized code is a no-op. Inputs that are not 16 characters long
/// are returned as-is.
#[must_use]
pub fn normalize(code: &str) -> String {
    let mut chars: Vec<char> = code.chars().collect();
    if chars.len() != 16 {
        return code.to_string();
    }

    for &offset in &NUMERIC_OFFSETS {
        if let Some(digit) = homograph_digit(chars[offset]) {
            chars[offset] = digit;
        }
    }

    chars.into_iter().collect()
}

/// True iff at least one numeric offset holds a homograph letter.
///
/// Requires exact length 16; any other length is simply `false`.
#[must_use]
pub fn is_homograph(code: &str) -> bool {
    let chars: Vec<char> = code.chars().collect();
    if chars.len() != 16 {
        return false;
    }

    NUMERIC_OFFSETS
        .iter()
        .any(|&offset| homograph_digit(chars[offset]).is_some())
}

/// Computes the check character over the first 15 characters of a code.
///
/// Digits use their numeric value, letters A=0..Z=25. Values at
/// 1-indexed odd positions map through [`ODD_VALUES`], even positions
/// through the identity; the sum modulo 26 indexes [`CHECK_ALPHABET`].
///
/// Single source of truth for both verification and generation.
/// Characters outside `[0-9A-Z]` contribute zero; callers pass
/// grammar-checked input.
#[must_use]
pub fn check_char(first15: &str) -> char {
    let sum: u32 = first15
        .chars()
        .take(15)
        .enumerate()
        .map(|(i, c)| {
            let value = match c {
                '0'..='9' => c as u32 - '0' as u32,
                'A'..='Z' => c as u32 - 'A' as u32,
                _ => 0,
            };
            // 0-indexed even is 1-indexed odd.
            if i % 2 == 0 {
                ODD_VALUES[value as usize]
            } else {
                value
            }
        })
        .sum();

    CHECK_ALPHABET.as_bytes()[(sum % 26) as usize] as char
}

/// Extracts the birth date from a normalized code.
///
/// The day field carries the +40 female offset, removed when strictly
/// greater than 40 before calendar validation; an encoded day of exactly
/// 40 is left alone and rejected as day 40. The two-digit year resolves
/// to the current century, or the previous one when that would land in
/// the future.
pub fn extract_birth_date(normalized: &str) -> Result<NaiveDate, DateError> {
    extract_birth_date_at(normalized, Local::now().date_naive())
}

/// Birth-date extraction with an explicit "today" for century resolution.
pub(crate) fn extract_birth_date_at(
    normalized: &str,
    today: NaiveDate,
) -> Result<NaiveDate, DateError> {
    let chars: Vec<char> = normalized.chars().collect();
    if chars.len() != 16 {
        return Err(DateError::Truncated);
    }

    let year = two_digits(chars[6], chars[7]).ok_or(DateError::NotNumeric)?;
    let month_index = MONTH_CODES
        .find(chars[8])
        .ok_or(DateError::UnknownMonth(chars[8]))?;
    let month = month_index as u32 + 1;

    let mut day = two_digits(chars[9], chars[10]).ok_or(DateError::NotNumeric)?;
    if day > 40 {
        day -= 40;
    }

    let current_year = today.year();
    let mut full_year = (current_year / 100) * 100 + year as i32;
    if full_year > current_year {
        full_year -= 100;
    }

    NaiveDate::from_ymd_opt(full_year, month, day).ok_or(DateError::Calendar {
        year: full_year,
        month,
        day,
    })
}

/// Checks the full positional grammar of a 16-character code.
///
/// Offsets 0-5, 11, and 15 are uppercase letters; offset 8 is a month
/// letter; the seven numeric offsets accept a digit or a homograph
/// letter.
#[must_use]
pub fn matches_grammar(code: &str) -> bool {
    let chars: Vec<char> = code.chars().collect();
    if chars.len() != 16 {
        return false;
    }

    chars.iter().enumerate().all(|(i, &c)| match i {
        0..=5 | 11 | 15 => c.is_ascii_uppercase(),
        8 => MONTH_CODES.contains(c),
        _ => c.is_ascii_digit() || homograph_digit(c).is_some(),
    })
}

fn two_digits(tens: char, units: char) -> Option<u32> {
    Some(tens.to_digit(10)? * 10 + units.to_digit(10)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const STANDARD: &str = "RSSMRA85M01H501Q";
    // Offset 14 carries 'M' for '1'; check char is computed over the
    // normalized form, so it stays 'Q'.
    const HOMOGRAPH: &str = "RSSMRA85M01H50MQ";

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_normalize_is_identity_on_standard_codes() {
        assert_eq!(normalize(STANDARD), STANDARD);
    }

    #[test]
    fn test_normalize_replaces_homograph_letters() {
        assert_eq!(normalize(HOMOGRAPH), STANDARD);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = normalize(HOMOGRAPH);
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn test_normalize_passes_through_wrong_lengths() {
        assert_eq!(normalize("SHORT"), "SHORT");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_normalize_ignores_letters_outside_numeric_offsets() {
        // Offsets 0-5 hold homograph letters but are name slots.
        assert_eq!(&normalize("MSSMRA85M01H501Q")[..6], "MSSMRA");
    }

    #[test]
    fn test_is_homograph() {
        assert!(!is_homograph(STANDARD));
        assert!(is_homograph(HOMOGRAPH));
        assert!(!is_homograph(&normalize(HOMOGRAPH)));
        assert!(!is_homograph("SHORT"));
        assert!(!is_homograph(""));
    }

    #[test]
    fn test_check_char_known_value() {
        assert_eq!(check_char("RSSMRA85M01H501"), 'Q');
    }

    #[test]
    fn test_check_char_uses_odd_table_not_identity() {
        // 'B' alone: base value 1 at an odd position maps to 0 -> 'A'.
        // An identity mapping would give 'B'.
        assert_eq!(check_char("B"), 'A');
    }

    #[test]
    fn test_extract_birth_date_male() {
        let born = extract_birth_date_at("RSSMRA85M01H501Q", date(2026, 8, 28)).unwrap();
        assert_eq!(born, date(1985, 8, 1));
    }

    #[test]
    fn test_extract_birth_date_female_offset() {
        // Day 41 is the 1st with the female offset.
        let born = extract_birth_date_at("RSSMRA85M41H501Q", date(2026, 8, 28)).unwrap();
        assert_eq!(born, date(1985, 8, 1));
    }

    #[test]
    fn test_extract_birth_date_day_forty_is_invalid() {
        // Exactly 40 gets no subtraction, and day 40 is not a date.
        let result = extract_birth_date_at("RSSMRA85M40H501Q", date(2026, 8, 28));
        assert!(matches!(result, Err(DateError::Calendar { day: 40, .. })));
    }

    #[test]
    fn test_extract_birth_date_century_resolution() {
        // Year 10 is in the past of 2026: current century.
        let born = extract_birth_date_at("RSSMRA10M01H501Q", date(2026, 8, 28)).unwrap();
        assert_eq!(born.year(), 2010);

        // Year 85 would be 2085: previous century.
        let born = extract_birth_date_at("RSSMRA85M01H501Q", date(2026, 8, 28)).unwrap();
        assert_eq!(born.year(), 1985);

        // Boundary: the current year itself stays in this century.
        let born = extract_birth_date_at("RSSMRA26M01H501Q", date(2026, 8, 28)).unwrap();
        assert_eq!(born.year(), 2026);
    }

    #[test]
    fn test_extract_birth_date_bad_month() {
        let result = extract_birth_date_at("RSSMRA85Z01H501Q", date(2026, 8, 28));
        assert_eq!(result, Err(DateError::UnknownMonth('Z')));
    }

    #[test]
    fn test_extract_birth_date_impossible_day() {
        let result = extract_birth_date_at("RSSMRA85B30H501Q", date(2026, 8, 28));
        assert!(matches!(result, Err(DateError::Calendar { month: 2, .. })));
    }

    #[test]
    fn test_extract_birth_date_truncated() {
        assert_eq!(extract_birth_date("SHORT"), Err(DateError::Truncated));
    }

    #[test]
    fn test_grammar_accepts_standard_and_homograph() {
        assert!(matches_grammar(STANDARD));
        assert!(matches_grammar(HOMOGRAPH));
    }

    #[test]
    fn test_grammar_rejects_defects() {
        assert!(!matches_grammar("INVALID"));
        assert!(!matches_grammar(""));
        // Digit in a name slot.
        assert!(!matches_grammar("R5SMRA85M01H501Q"));
        // 'Z' is not a month letter.
        assert!(!matches_grammar("RSSMRA85Z01H501Q"));
        // 'A' is not a homograph letter at a numeric offset.
        assert!(!matches_grammar("RSSMRA8AM01H501Q"));
        // Lowercase is rejected; callers upper-case first.
        assert!(!matches_grammar("rssmra85m01h501q"));
    }

    proptest! {
        #[test]
        fn prop_check_char_is_deterministic(s in "[A-Z0-9]{15}") {
            prop_assert_eq!(check_char(&s), check_char(&s));
        }

        #[test]
        fn prop_check_char_in_alphabet(s in "[A-Z0-9]{15}") {
            prop_assert!(check_char(&s).is_ascii_uppercase());
        }

        #[test]
        fn prop_normalize_idempotent(s in "[A-Z0-9]{16}") {
            let once = normalize(&s);
            prop_assert_eq!(normalize(&once), once.clone());
            prop_assert!(!is_homograph(&once));
        }
    }
}
