//! Reflector: the fixed wheel that sends the signal back through the rotors.

use crate::alphabet::{self, ALPHABET_LEN};
use crate::error::EnigmaError;

/// Fixed contact table, expected to be a fixed-point-free involution.
///
/// The expectation is not enforced at construction; see
/// [`is_well_formed`](Self::is_well_formed).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reflector {
    table: [u8; ALPHABET_LEN],
}

impl Reflector {
    /// Builds a reflector from a 26-letter wiring string.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidSymbol`] or
    /// [`EnigmaError::MalformedConfiguration`] if the string is not 26 letters.
    pub fn new(wiring: &str) -> Result<Self, EnigmaError> {
        alphabet::parse_table(wiring).map(Self::from_table)
    }

    /// Builds a reflector from an index table, reducing entries modulo 26.
    pub fn from_table(table: [u8; ALPHABET_LEN]) -> Self {
        Reflector {
            table: table.map(|out| out % ALPHABET_LEN as u8),
        }
    }

    /// Reflects contact `index`.
    #[inline]
    pub fn reflect(&self, index: u8) -> u8 {
        self.table[index as usize % ALPHABET_LEN]
    }

    /// Returns `true` if the table is an involution with no fixed points,
    /// which is what guarantees no letter ever encrypts to itself.
    pub fn is_well_formed(&self) -> bool {
        alphabet::is_involution(&self.table)
            && self
                .table
                .iter()
                .enumerate()
                .all(|(i, &out)| i != out as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const UKW_B: &str = "YRUHQSLDPXNGOKMIEBFZCWVJAT";

    #[test]
    fn test_reflect_is_involution() {
        let reflector = Reflector::new(UKW_B).unwrap();
        for i in 0..26u8 {
            let out = reflector.reflect(i);
            assert_ne!(out, i);
            assert_eq!(reflector.reflect(out), i);
        }
        assert!(reflector.is_well_formed());
    }

    #[test]
    fn test_fixed_point_is_not_well_formed() {
        let identity = Reflector::new("ABCDEFGHIJKLMNOPQRSTUVWXYZ").unwrap();
        assert!(!identity.is_well_formed());
    }

    #[test]
    fn test_non_involution_is_not_well_formed() {
        let rotor_i = Reflector::new("EKMFLGDQVZNTOWYHXUSPAIBRCJ").unwrap();
        assert!(!rotor_i.is_well_formed());
    }
}
