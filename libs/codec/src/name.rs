//! Name-code extraction: the three letters derived from a surname or a
//! given name.

use crate::tables::{CONSONANTS, VOWELS};

/// Which identifier slot a text fills; given names get the consonant
/// reduction rule, surnames do not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamePart {
    Given,
    Surname,
}

/// Derives the 3-letter code from a name or surname.
///
/// Non-alphabetic characters are stripped and the rest upper-cased, then
/// split into consonants and vowels preserving relative order. A given
/// name with more than three consonants keeps the 1st, 3rd, and 4th;
/// a surname keeps the first three. Consonants come first, vowels fill
/// the remainder, `X` pads to length three.
#[must_use]
pub fn name_code(text: &str, part: NamePart) -> String {
    let mut consonants = String::new();
    let mut vowels = String::new();

    for c in text.chars() {
        if !c.is_ascii_alphabetic() {
            continue;
        }
        let c = c.to_ascii_uppercase();
        if CONSONANTS.contains(c) {
            consonants.push(c);
        } else if VOWELS.contains(c) {
            vowels.push(c);
        }
    }

    if part == NamePart::Given && consonants.len() > 3 {
        let kept = consonants.as_bytes();
        consonants = [kept[0], kept[2], kept[3]]
            .iter()
            .map(|&b| b as char)
            .collect();
    }

    let mut code = consonants;
    code.push_str(&vowels);
    while code.len() < 3 {
        code.push('X');
    }
    code.truncate(3);
    code
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Rossi", "RSS")]
    #[case("Bianchi", "BNC")]
    #[case("Fo", "FOX")]
    #[case("Re", "REX")]
    #[case("D'Amico", "DMC")]
    #[case("De Luca", "DLC")]
    #[case("", "XXX")]
    fn test_surname_codes(#[case] surname: &str, #[case] expected: &str) {
        assert_eq!(name_code(surname, NamePart::Surname), expected);
    }

    #[rstest]
    #[case("Mario", "MRA")]
    #[case("Anna", "NNA")]
    #[case("Luca", "LCU")]
    #[case("Ada", "DAA")]
    fn test_given_name_codes(#[case] name: &str, #[case] expected: &str) {
        assert_eq!(name_code(name, NamePart::Given), expected);
    }

    #[rstest]
    // Four or more consonants: a given name keeps the 1st, 3rd, and 4th,
    // a surname keeps the first three. Same text, different slot.
    #[case("Gianfranco", "GFR", "GNF")]
    #[case("Bianchi", "BCH", "BNC")]
    #[case("Barbara", "BBR", "BRB")]
    fn test_given_consonant_reduction(
        #[case] text: &str,
        #[case] as_given: &str,
        #[case] as_surname: &str,
    ) {
        assert_eq!(name_code(text, NamePart::Given), as_given);
        assert_eq!(name_code(text, NamePart::Surname), as_surname);
    }

    #[test]
    fn test_case_and_whitespace_are_irrelevant() {
        assert_eq!(
            name_code("  rossi ", NamePart::Surname),
            name_code("ROSSI", NamePart::Surname)
        );
    }
}
