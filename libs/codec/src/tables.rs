//! Fixed alphabets and substitution tables of the fiscal code format.

/// Month letters, indexed by month minus one (January = `A`).
pub const MONTH_CODES: &str = "ABCDEHLMPRST";

/// Consonant alphabet for name-code extraction.
pub const CONSONANTS: &str = "BCDFGHJKLMNPQRSTVWXYZ";

/// Vowel alphabet for name-code extraction.
pub const VOWELS: &str = "AEIOU";

/// Check characters, indexed by the weighted sum modulo 26.
pub const CHECK_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Substitution table for 1-indexed odd positions of the checksum.
///
/// Indexed by the character's base value (digit value, or A=0..Z=25).
/// This is a real permutation, not the identity; even positions pass
/// through unchanged.
pub const ODD_VALUES: [u32; 26] = [
    1, 0, 5, 7, 9, 13, 15, 17, 19, 21, 2, 4, 18, 20, 11, 3, 6, 8, 12, 14, 16, 10, 22, 25, 24, 23,
];

/// The seven 0-indexed offsets that carry digits (or their homograph
/// letters): two year, two day, three place-code digits.
pub const NUMERIC_OFFSETS: [usize; 7] = [6, 7, 9, 10, 12, 13, 14];

/// Maps a homograph letter to the digit it stands for.
///
/// Homograph substitution replaces digits with letters at the numeric
/// offsets to de-duplicate otherwise identical codes; only these ten
/// letters participate.
#[must_use]
pub fn homograph_digit(c: char) -> Option<char> {
    match c {
        'L' => Some('0'),
        'M' => Some('1'),
        'N' => Some('2'),
        'P' => Some('3'),
        'Q' => Some('4'),
        'R' => Some('5'),
        'S' => Some('6'),
        'T' => Some('7'),
        'U' => Some('8'),
        'V' => Some('9'),
        _ => None,
    }
}
