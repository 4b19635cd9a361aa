//! Rotor: one wired wheel with a ring setting and a rotational position.
//!
//! The wiring is stored in the rotor's own unshifted frame. Every pass
//! through the rotor shifts the incoming contact by `position - ring`,
//! looks up the fixed wiring, then shifts back on exit.

use crate::alphabet::{self, ALPHABET_LEN};
use crate::error::EnigmaError;

const MODULUS: usize = ALPHABET_LEN;

/// A single cipher rotor.
///
/// Only `position` changes after construction, and only through
/// [`advance`](Self::advance).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotor {
    wiring: [u8; ALPHABET_LEN],
    inverse: [u8; ALPHABET_LEN],
    /// Bit `i` is set when position `i` is a notch.
    notches: u32,
    ring: u8,
    position: u8,
}

impl Rotor {
    /// Builds a rotor from a 26-letter wiring string and its notch letters.
    ///
    /// `ring` and `position` are reduced modulo 26. The wiring is trusted to
    /// be a permutation; see [`is_well_formed`](Self::is_well_formed).
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidSymbol`] if the wiring or notches contain
    /// a character outside `A..=Z`, and [`EnigmaError::MalformedConfiguration`]
    /// if the wiring is not exactly 26 letters long.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::Rotor;
    ///
    /// let mut rotor = Rotor::new("BDFHJLCPRTXVZNYEIWGAKMUSQO", "V", 0, 21).unwrap();
    /// assert!(rotor.at_notch());
    /// rotor.advance();
    /// assert_eq!(rotor.position(), 22);
    /// ```
    pub fn new(
        wiring: &str,
        notches: &str,
        ring: u8,
        position: u8,
    ) -> Result<Self, EnigmaError> {
        let table = alphabet::parse_table(wiring)?;
        let notch_indices = alphabet::letters_to_indices(notches)?;
        Ok(Self::from_table(table, &notch_indices, ring, position))
    }

    /// Builds a rotor from an index table.
    ///
    /// Out of range entries are reduced modulo 26 so that every later
    /// lookup stays in bounds.
    pub fn from_table(wiring: [u8; ALPHABET_LEN], notches: &[u8], ring: u8, position: u8) -> Self {
        let wiring = wiring.map(|out| out % MODULUS as u8);
        let mut inverse = [0u8; ALPHABET_LEN];
        for (contact, &out) in wiring.iter().enumerate() {
            inverse[out as usize] = contact as u8;
        }
        let notches = notches
            .iter()
            .fold(0u32, |mask, &n| mask | 1 << (n as usize % MODULUS));

        Rotor {
            wiring,
            inverse,
            notches,
            ring: ring % MODULUS as u8,
            position: position % MODULUS as u8,
        }
    }

    /// Current rotational offset, `0..26`.
    #[inline]
    pub fn position(&self) -> u8 {
        self.position
    }

    /// Ring setting (Ringstellung), `0..26`.
    #[inline]
    pub fn ring(&self) -> u8 {
        self.ring
    }

    /// Notch positions in ascending order.
    pub fn notches(&self) -> Vec<u8> {
        (0..MODULUS as u8).filter(|&i| self.is_notch(i)).collect()
    }

    /// Moves the rotor to `position` (reduced modulo 26).
    pub fn set_position(&mut self, position: u8) {
        self.position = position % MODULUS as u8;
    }

    /// Returns `true` if `position` is one of this rotor's notches.
    #[inline]
    pub fn is_notch(&self, position: u8) -> bool {
        self.notches & (1 << (position as usize % MODULUS)) != 0
    }

    /// Returns `true` if the rotor currently sits on a notch.
    #[inline]
    pub fn at_notch(&self) -> bool {
        self.is_notch(self.position)
    }

    /// Advances the rotor one position.
    #[inline]
    pub fn advance(&mut self) {
        self.position = (self.position + 1) % MODULUS as u8;
    }

    /// Routes a signal right-to-left through the wiring.
    #[inline]
    pub fn forward(&self, input: u8) -> u8 {
        self.route(&self.wiring, input)
    }

    /// Routes a signal left-to-right through the inverse wiring, on its way
    /// back from the reflector.
    #[inline]
    pub fn backward(&self, input: u8) -> u8 {
        self.route(&self.inverse, input)
    }

    /// Returns `true` if the wiring is a permutation of `0..26`.
    ///
    /// Rotors built from a non-permutation still encrypt without panicking,
    /// but the result is not reversible.
    pub fn is_well_formed(&self) -> bool {
        alphabet::is_permutation(&self.wiring)
    }

    fn route(&self, table: &[u8; ALPHABET_LEN], input: u8) -> u8 {
        let shift = self.position as usize + MODULUS - self.ring as usize;
        let contact = (input as usize + shift) % MODULUS;
        let internal = table[contact] as usize;
        ((internal + MODULUS - shift % MODULUS) % MODULUS) as u8
    }
}
