//! Stepping controller: the three-rotor stack and its double-step rule.
//!
//! Before each letter is enciphered the stack takes one transition:
//!
//! ```text
//! advance_left   = middle at notch
//! advance_middle = middle at notch  OR  right at notch
//! advance_right  = always
//! ```
//!
//! Both decisions are taken from the positions *before* anything moves.
//! When the right rotor carries the middle rotor onto its own notch, the
//! middle rotor moves again on the very next key press together with the
//! left rotor: the double step.

use log::trace;

use crate::rotor::Rotor;

/// Which rotors moved during one transition. The right rotor always moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Step {
    /// The left rotor advanced.
    pub left: bool,
    /// The middle rotor advanced.
    pub middle: bool,
}

impl Step {
    /// The middle rotor advanced because it was itself on its notch.
    pub fn is_double_step(&self) -> bool {
        self.left && self.middle
    }
}

/// The three rotors, each owned by exactly one slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotorStack {
    pub(crate) left: Rotor,
    pub(crate) middle: Rotor,
    pub(crate) right: Rotor,
}

impl RotorStack {
    /// Places rotors into the left, middle and right slots.
    pub fn new(left: Rotor, middle: Rotor, right: Rotor) -> Self {
        RotorStack {
            left,
            middle,
            right,
        }
    }

    /// Performs one stepping transition and reports what moved.
    pub fn step(&mut self) -> Step {
        let right_old = self.right.position();
        let middle_old = self.middle.position();

        let advance_left = self.middle.is_notch(middle_old);
        let advance_middle = advance_left || self.right.is_notch(right_old);

        if advance_left {
            self.left.advance();
        }
        if advance_middle {
            self.middle.advance();
        }
        self.right.advance();

        let step = Step {
            left: advance_left,
            middle: advance_middle,
        };
        if step.is_double_step() {
            trace!("double step to {:?}", self.positions());
        } else {
            trace!("step to {:?}", self.positions());
        }
        step
    }

    /// Positions as `[left, middle, right]`.
    pub fn positions(&self) -> [u8; 3] {
        [
            self.left.position(),
            self.middle.position(),
            self.right.position(),
        ]
    }

    /// Moves all three rotors to `[left, middle, right]`.
    pub fn set_positions(&mut self, positions: [u8; 3]) {
        let [left, middle, right] = positions;
        self.left.set_position(left);
        self.middle.set_position(middle);
        self.right.set_position(right);
    }

    /// Left, middle and right rotors.
    pub fn rotors(&self) -> [&Rotor; 3] {
        [&self.left, &self.middle, &self.right]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stack(positions: [u8; 3]) -> RotorStack {
        // Rotors I, II, III with notches Q, E, V.
        let [l, m, r] = positions;
        RotorStack::new(
            Rotor::new("EKMFLGDQVZNTOWYHXUSPAIBRCJ", "Q", 0, l).unwrap(),
            Rotor::new("AJDKSIRUXBLHWTMCQGZNPYFVOE", "E", 0, m).unwrap(),
            Rotor::new("BDFHJLCPRTXVZNYEIWGAKMUSQO", "V", 0, r).unwrap(),
        )
    }

    #[test]
    fn test_right_always_advances() {
        let mut s = stack([0, 0, 0]);
        let step = s.step();
        assert_eq!(step, Step::default());
        assert_eq!(s.positions(), [0, 0, 1]);
    }

    #[test]
    fn test_right_notch_carries_middle() {
        // A A V -> A B W
        let mut s = stack([0, 0, 21]);
        let step = s.step();
        assert!(step.middle && !step.left);
        assert_eq!(s.positions(), [0, 1, 22]);
    }

    #[test]
    fn test_double_step_sequence() {
        // A D V -> A E W -> B F X -> B F Y
        let mut s = stack([0, 3, 21]);

        let first = s.step();
        assert_eq!(s.positions(), [0, 4, 22]);
        assert!(!first.is_double_step());

        let second = s.step();
        assert_eq!(s.positions(), [1, 5, 23]);
        assert!(second.is_double_step());

        let third = s.step();
        assert_eq!(s.positions(), [1, 5, 24]);
        assert_eq!(third, Step::default());
    }

    #[test]
    fn test_left_notch_is_ignored() {
        // No fourth rotor: the left rotor at its notch drives nothing.
        let mut s = stack([16, 0, 0]);
        s.step();
        assert_eq!(s.positions(), [16, 0, 1]);
    }

    #[test]
    fn test_all_wrap() {
        let mut s = stack([25, 4, 21]);
        s.step();
        assert_eq!(s.positions(), [0, 5, 22]);
    }

    #[test]
    fn test_set_positions() {
        let mut s = stack([0, 0, 0]);
        s.set_positions([1, 2, 29]);
        assert_eq!(s.positions(), [1, 2, 3]);
    }
}
