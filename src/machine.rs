//! Machine: the letter transformation pipeline.
//!
//! ```text
//! key ─► step rotors
//!     ─► plugboard ─► right ─► middle ─► left ─► reflector
//!     ─► left⁻¹ ─► middle⁻¹ ─► right⁻¹ ─► plugboard ─► lamp
//! ```
//!
//! A machine owns all of its state; separate machines can run on separate
//! threads without coordination, but a single machine is `&mut` per letter.

use crate::alphabet;
use crate::plugboard::Plugboard;
use crate::reflector::Reflector;
use crate::rotor::Rotor;
use crate::stepping::{RotorStack, Step};

/// A configured three-rotor cipher machine.
///
/// Enciphering and deciphering are the same operation: a machine set to the
/// same starting positions turns ciphertext back into plaintext.
///
/// # Examples
///
/// ```
/// use enigma::MachineBuilder;
///
/// let mut machine = MachineBuilder::new().build().unwrap();
/// assert_eq!(machine.encrypt_text("AAAAA"), "BDZGO");
///
/// machine.set_positions([0, 0, 0]);
/// assert_eq!(machine.encrypt_text("BDZGO"), "AAAAA");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Machine {
    stack: RotorStack,
    reflector: Reflector,
    plugboard: Plugboard,
}

impl Machine {
    /// Assembles a machine from its parts.
    pub fn new(stack: RotorStack, reflector: Reflector, plugboard: Plugboard) -> Self {
        Machine {
            stack,
            reflector,
            plugboard,
        }
    }

    /// Enciphers one symbol.
    ///
    /// Anything outside `A..=Z` is returned unchanged and the rotors do not
    /// move.
    ///
    /// ```
    /// use enigma::MachineBuilder;
    ///
    /// let mut machine = MachineBuilder::new().build().unwrap();
    /// assert_eq!(machine.encrypt_symbol('3'), '3');
    /// assert_eq!(machine.positions(), [0, 0, 0]);
    /// assert_eq!(machine.encrypt_symbol('A'), 'B');
    /// assert_eq!(machine.positions(), [0, 0, 1]);
    /// ```
    pub fn encrypt_symbol(&mut self, c: char) -> char {
        match alphabet::letter_to_index(c) {
            Ok(index) => {
                self.stack.step();
                alphabet::index_to_letter(self.transform(index) as i32)
            }
            Err(_) => c,
        }
    }

    /// Enciphers a sequence, dropping every non `A..=Z` character.
    ///
    /// Unlike [`encrypt_symbol`](Self::encrypt_symbol), which passes
    /// non-letters through, the output here contains letters only.
    ///
    /// ```
    /// use enigma::MachineBuilder;
    ///
    /// let mut machine = MachineBuilder::new().build().unwrap();
    /// assert_eq!(machine.encrypt_text("AB3C").len(), 3);
    /// ```
    pub fn encrypt_text(&mut self, text: &str) -> String {
        text.chars()
            .filter(|&c| alphabet::is_symbol(c))
            .map(|c| self.encrypt_symbol(c))
            .collect()
    }

    /// Steps the rotors once without enciphering anything.
    pub fn step(&mut self) -> Step {
        self.stack.step()
    }

    /// Rotor positions as `[left, middle, right]`.
    pub fn positions(&self) -> [u8; 3] {
        self.stack.positions()
    }

    /// Resets the rotor positions, e.g. to decipher from the message key.
    pub fn set_positions(&mut self, positions: [u8; 3]) {
        self.stack.set_positions(positions);
    }

    /// The letters showing in the rotor windows, left to right.
    pub fn window(&self) -> String {
        self.positions()
            .iter()
            .map(|&p| alphabet::index_to_letter(p as i32))
            .collect()
    }

    /// Left, middle and right rotors.
    pub fn rotors(&self) -> [&Rotor; 3] {
        self.stack.rotors()
    }

    /// The plugboard.
    pub fn plugboard(&self) -> &Plugboard {
        &self.plugboard
    }

    /// The reflector.
    pub fn reflector(&self) -> &Reflector {
        &self.reflector
    }

    /// Sends one contact through the wiring at the current positions.
    fn transform(&self, index: u8) -> u8 {
        let RotorStack {
            left,
            middle,
            right,
        } = &self.stack;

        let mut signal = self.plugboard.swap(index);
        signal = right.forward(signal);
        signal = middle.forward(signal);
        signal = left.forward(signal);
        signal = self.reflector.reflect(signal);
        signal = left.backward(signal);
        signal = middle.backward(signal);
        signal = right.backward(signal);
        self.plugboard.swap(signal)
    }
}
