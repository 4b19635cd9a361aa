//! Error types for the enigma library.

use thiserror::Error;

/// Errors produced by the enigma library.
///
/// None of these can occur while encrypting: the per-symbol path is closed
/// under modulo-26 arithmetic and never fails once a machine is built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnigmaError {
    /// A codec call received a character outside `A..=Z`.
    #[error("Symbol {0:?} is outside the A-Z alphabet")]
    InvalidSymbol(char),
    /// A wiring, reflector or plug list is not a valid permutation/involution.
    #[error("Malformed configuration: {0}")]
    MalformedConfiguration(String),
    /// The catalog has no rotor with this name.
    #[error("Unknown rotor: {0}")]
    UnknownRotor(String),
    /// The catalog has no reflector with this name.
    #[error("Unknown reflector: {0}")]
    UnknownReflector(String),
    /// A ring or position setting could not be parsed.
    #[error("Invalid setting: {0}")]
    InvalidSetting(String),
}
