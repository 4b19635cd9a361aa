//! Alphabet codec: conversion between the letters `A..=Z` and contact
//! indices `0..26`.
//!
//! Every other component works on indices; letters only appear at the
//! outer edges of the machine.

use crate::error::EnigmaError;

/// Number of symbols (and therefore contacts) in the alphabet.
pub const ALPHABET_LEN: usize = 26;

/// Returns `true` if `c` is one of the 26 uppercase symbols the machine accepts.
#[inline]
pub fn is_symbol(c: char) -> bool {
    c.is_ascii_uppercase()
}

/// Converts an uppercase letter to its contact index.
///
/// # Errors
/// Returns [`EnigmaError::InvalidSymbol`] if `c` is not in `A..=Z`.
///
/// # Examples
///
/// ```
/// use enigma::alphabet::letter_to_index;
///
/// assert_eq!(letter_to_index('A').unwrap(), 0);
/// assert_eq!(letter_to_index('Z').unwrap(), 25);
/// assert!(letter_to_index('a').is_err());
/// ```
pub fn letter_to_index(c: char) -> Result<u8, EnigmaError> {
    if is_symbol(c) {
        Ok(c as u8 - b'A')
    } else {
        Err(EnigmaError::InvalidSymbol(c))
    }
}

/// Converts any integer to a letter, reducing it modulo 26 first.
///
/// Negative values wrap the same way: `-1` is `'Z'`.
///
/// # Examples
///
/// ```
/// use enigma::alphabet::index_to_letter;
///
/// assert_eq!(index_to_letter(0), 'A');
/// assert_eq!(index_to_letter(27), 'B');
/// assert_eq!(index_to_letter(-1), 'Z');
/// ```
pub fn index_to_letter(i: i32) -> char {
    (b'A' + i.rem_euclid(ALPHABET_LEN as i32) as u8) as char
}

/// Parses a string of letters into contact indices.
///
/// Used for wirings and for ring/position settings such as `"ADV"`.
///
/// # Errors
/// Returns [`EnigmaError::InvalidSymbol`] on the first non `A..=Z` character.
pub fn letters_to_indices(s: &str) -> Result<Vec<u8>, EnigmaError> {
    s.chars().map(letter_to_index).collect()
}

/// Uppercases `text` and drops everything outside `A..=Z`.
///
/// This is the cleanup a caller performs before handing text to
/// [`Machine::encrypt_text`](crate::Machine::encrypt_text).
///
/// ```
/// use enigma::alphabet::normalize;
///
/// assert_eq!(normalize("Hello, World 42!"), "HELLOWORLD");
/// ```
pub fn normalize(text: &str) -> String {
    text.chars()
        .map(|c| c.to_ascii_uppercase())
        .filter(|&c| is_symbol(c))
        .collect()
}

/// Returns `true` if `table` maps `0..26` onto itself without repeats.
pub(crate) fn is_permutation(table: &[u8; ALPHABET_LEN]) -> bool {
    let mut seen = [false; ALPHABET_LEN];
    for &out in table {
        match seen.get_mut(out as usize) {
            Some(slot) if !*slot => *slot = true,
            _ => return false,
        }
    }
    true
}

/// Returns `true` if applying `table` twice is the identity.
pub(crate) fn is_involution(table: &[u8; ALPHABET_LEN]) -> bool {
    table
        .iter()
        .enumerate()
        .all(|(i, &out)| table.get(out as usize).is_some_and(|&back| back as usize == i))
}

/// Parses a 26-letter wiring string into a contact table.
///
/// # Errors
/// Returns [`EnigmaError::InvalidSymbol`] for a non `A..=Z` character and
/// [`EnigmaError::MalformedConfiguration`] when the length is not 26.
pub(crate) fn parse_table(wiring: &str) -> Result<[u8; ALPHABET_LEN], EnigmaError> {
    let indices = letters_to_indices(wiring)?;
    <[u8; ALPHABET_LEN]>::try_from(indices.as_slice()).map_err(|_| {
        EnigmaError::MalformedConfiguration(format!(
            "wiring {:?} has {} letters, expected {}",
            wiring,
            indices.len(),
            ALPHABET_LEN
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_index_bijection() {
        for (i, c) in ('A'..='Z').enumerate() {
            assert_eq!(letter_to_index(c).unwrap() as usize, i);
            assert_eq!(index_to_letter(i as i32), c);
        }
    }

    #[test]
    fn test_letter_to_index_rejects_out_of_range() {
        for c in ['a', 'z', '@', '[', '3', ' ', 'É'] {
            assert_eq!(letter_to_index(c), Err(EnigmaError::InvalidSymbol(c)));
        }
    }

    #[test]
    fn test_index_to_letter_wraps() {
        assert_eq!(index_to_letter(26), 'A');
        assert_eq!(index_to_letter(51), 'Z');
        assert_eq!(index_to_letter(-26), 'A');
        assert_eq!(index_to_letter(-27), 'Z');
        assert_eq!(index_to_letter(i32::MIN), index_to_letter(i32::MIN % 26 + 26));
    }

    #[test]
    fn test_letters_to_indices() {
        assert_eq!(letters_to_indices("ADV").unwrap(), vec![0, 3, 21]);
        assert_eq!(
            letters_to_indices("AdV"),
            Err(EnigmaError::InvalidSymbol('d'))
        );
        assert!(letters_to_indices("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_table_and_checks() {
        let table = parse_table("YRUHQSLDPXNGOKMIEBFZCWVJAT").unwrap();
        assert!(is_permutation(&table));
        assert!(is_involution(&table));

        let rotor_i = parse_table("EKMFLGDQVZNTOWYHXUSPAIBRCJ").unwrap();
        assert!(is_permutation(&rotor_i));
        assert!(!is_involution(&rotor_i));

        let repeated = parse_table("AACDEFGHIJKLMNOPQRSTUVWXYZ").unwrap();
        assert!(!is_permutation(&repeated));
    }

    #[test]
    fn test_parse_table_rejects_wrong_length() {
        assert!(matches!(
            parse_table("ABC"),
            Err(EnigmaError::MalformedConfiguration(_))
        ));
        assert_eq!(
            parse_table("ABCDEFGHIJKLMNOPQRSTUVWXY1"),
            Err(EnigmaError::InvalidSymbol('1'))
        );
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("attack at dawn"), "ATTACKATDAWN");
        assert_eq!(normalize("1234 !?"), "");
        assert_eq!(normalize("ñandú"), "AND");
    }
}
