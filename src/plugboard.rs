//! Plugboard: a symmetric swap table applied on the way into and out of
//! the rotor stack.

use crate::alphabet::{self, ALPHABET_LEN};
use crate::error::EnigmaError;

/// Fixed-size involution over the 26 contacts.
///
/// Starts as the identity and is overwritten pair by pair, so every
/// contact always has a partner (itself when unplugged).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plugboard {
    table: [u8; ALPHABET_LEN],
}

impl Default for Plugboard {
    fn default() -> Self {
        Self::identity()
    }
}

impl Plugboard {
    /// A plugboard with no cables.
    pub fn identity() -> Self {
        let mut table = [0u8; ALPHABET_LEN];
        for (i, slot) in table.iter_mut().enumerate() {
            *slot = i as u8;
        }
        Plugboard { table }
    }

    /// Wires letter pairs in order, each pair swapping both ways.
    ///
    /// Pairs are applied one after another onto the identity table. A later
    /// pair that reuses a letter overwrites the earlier cable's entry for
    /// that letter, which can leave the table non-involutive; use
    /// [`from_pairs_checked`](Self::from_pairs_checked) to reject that.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidSymbol`] if a letter is outside `A..=Z`.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::Plugboard;
    ///
    /// let board = Plugboard::from_pairs(&[('A', 'D'), ('C', 'X')]).unwrap();
    /// assert_eq!(board.swap(0), 3);
    /// assert_eq!(board.swap(3), 0);
    /// assert_eq!(board.swap(1), 1);
    /// ```
    pub fn from_pairs(pairs: &[(char, char)]) -> Result<Self, EnigmaError> {
        let mut board = Self::identity();
        for &(a, b) in pairs {
            let ia = alphabet::letter_to_index(a)?;
            let ib = alphabet::letter_to_index(b)?;
            board.table[ia as usize] = ib;
            board.table[ib as usize] = ia;
        }
        Ok(board)
    }

    /// Like [`from_pairs`](Self::from_pairs), but rejects any letter that
    /// is plugged more than once.
    ///
    /// # Errors
    /// Returns [`EnigmaError::MalformedConfiguration`] naming the reused letter.
    pub fn from_pairs_checked(pairs: &[(char, char)]) -> Result<Self, EnigmaError> {
        let mut used = [false; ALPHABET_LEN];
        for &(a, b) in pairs {
            for c in [a, b] {
                let i = alphabet::letter_to_index(c)? as usize;
                if used[i] {
                    return Err(EnigmaError::MalformedConfiguration(format!(
                        "plugboard letter {} is used more than once",
                        c
                    )));
                }
                used[i] = true;
            }
        }
        Self::from_pairs(pairs)
    }

    /// Parses space separated pairs such as `"AB CD EF"`.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidSetting`] for a group that is not two
    /// letters long, or [`EnigmaError::InvalidSymbol`] for a non `A..=Z` letter.
    pub fn parse_pairs(pairs: &str) -> Result<Vec<(char, char)>, EnigmaError> {
        pairs
            .split_whitespace()
            .map(|group| {
                let mut chars = group.chars();
                match (chars.next(), chars.next(), chars.next()) {
                    (Some(a), Some(b), None) => {
                        alphabet::letter_to_index(a)?;
                        alphabet::letter_to_index(b)?;
                        Ok((a, b))
                    }
                    _ => Err(EnigmaError::InvalidSetting(format!(
                        "plugboard pair {:?} must be two letters",
                        group
                    ))),
                }
            })
            .collect()
    }

    /// Returns the partner of contact `index` (itself when unplugged).
    #[inline]
    pub fn swap(&self, index: u8) -> u8 {
        self.table[index as usize % ALPHABET_LEN]
    }

    /// Number of contacts that are not mapped to themselves, divided by two.
    pub fn cable_count(&self) -> usize {
        self.table
            .iter()
            .enumerate()
            .filter(|&(i, &out)| i != out as usize)
            .count()
            / 2
    }

    /// Returns `true` if swapping twice always returns the original contact.
    pub fn is_involution(&self) -> bool {
        alphabet::is_involution(&self.table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        let board = Plugboard::default();
        for i in 0..26u8 {
            assert_eq!(board.swap(i), i);
        }
        assert_eq!(board.cable_count(), 0);
    }

    #[test]
    fn test_pairs_swap_both_ways() {
        let board = Plugboard::from_pairs(&[('A', 'B'), ('C', 'D')]).unwrap();
        assert_eq!(board.swap(0), 1);
        assert_eq!(board.swap(1), 0);
        assert_eq!(board.swap(2), 3);
        assert_eq!(board.swap(3), 2);
        assert_eq!(board.swap(4), 4);
        assert_eq!(board.cable_count(), 2);
        assert!(board.is_involution());
    }

    #[test]
    fn test_reused_letter_overwrites() {
        // A-B then A-C: A->C, C->A, but B still points at A.
        let board = Plugboard::from_pairs(&[('A', 'B'), ('A', 'C')]).unwrap();
        assert_eq!(board.swap(0), 2);
        assert_eq!(board.swap(2), 0);
        assert_eq!(board.swap(1), 0);
        assert!(!board.is_involution());
    }

    #[test]
    fn test_checked_rejects_reuse() {
        let err = Plugboard::from_pairs_checked(&[('A', 'B'), ('B', 'C')]).unwrap_err();
        assert!(matches!(err, EnigmaError::MalformedConfiguration(_)));
        assert!(Plugboard::from_pairs_checked(&[('A', 'B'), ('C', 'D')]).is_ok());
    }

    #[test]
    fn test_rejects_lowercase() {
        assert_eq!(
            Plugboard::from_pairs(&[('a', 'B')]),
            Err(EnigmaError::InvalidSymbol('a'))
        );
    }

    #[test]
    fn test_parse_pairs() {
        assert_eq!(
            Plugboard::parse_pairs(" AB  CD ").unwrap(),
            vec![('A', 'B'), ('C', 'D')]
        );
        assert!(Plugboard::parse_pairs("").unwrap().is_empty());
        assert!(matches!(
            Plugboard::parse_pairs("ABC"),
            Err(EnigmaError::InvalidSetting(_))
        ));
        assert_eq!(
            Plugboard::parse_pairs("A1"),
            Err(EnigmaError::InvalidSymbol('1'))
        );
    }
}
