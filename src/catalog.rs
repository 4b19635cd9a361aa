//! Named rotor and reflector wirings.
//!
//! A [`RotorCatalog`] is plain configuration data. It is built once, handed
//! to the [`MachineBuilder`](crate::MachineBuilder) and never mutated while
//! machines are running.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::EnigmaError;
use crate::reflector::Reflector;
use crate::rotor::Rotor;

/// Wiring and notch letters of one rotor type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotorSpec {
    /// 26-letter wiring, `wiring[i]` is the output contact for input `i`.
    pub wiring: String,
    /// Letters at which this rotor carries its left neighbour.
    pub notches: String,
}

impl RotorSpec {
    /// Creates a rotor spec from its wiring and notch letters.
    pub fn new(wiring: impl Into<String>, notches: impl Into<String>) -> Self {
        RotorSpec {
            wiring: wiring.into(),
            notches: notches.into(),
        }
    }
}

/// Rotor and reflector tables, looked up by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotorCatalog {
    rotors: BTreeMap<String, RotorSpec>,
    reflectors: BTreeMap<String, String>,
}

impl RotorCatalog {
    /// An empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rotors I to V and reflectors A, B and C of the three-rotor service machine.
    pub fn standard() -> Self {
        let mut catalog = Self::new();
        catalog.insert_rotor("I", RotorSpec::new("EKMFLGDQVZNTOWYHXUSPAIBRCJ", "Q"));
        catalog.insert_rotor("II", RotorSpec::new("AJDKSIRUXBLHWTMCQGZNPYFVOE", "E"));
        catalog.insert_rotor("III", RotorSpec::new("BDFHJLCPRTXVZNYEIWGAKMUSQO", "V"));
        catalog.insert_rotor("IV", RotorSpec::new("ESOVPZJAYQUIRHXLNFTGKDCMWB", "J"));
        catalog.insert_rotor("V", RotorSpec::new("VZBRGITYUPSDNHLXAWMJQOFEKC", "Z"));
        catalog.insert_reflector("A", "EJMZALYXVBWFCRQUONTSPIKHGD");
        catalog.insert_reflector("B", "YRUHQSLDPXNGOKMIEBFZCWVJAT");
        catalog.insert_reflector("C", "FVPJIAOYEDRZXWGCTKUQSBNMHL");
        catalog
    }

    /// Adds or replaces a rotor type.
    pub fn insert_rotor(&mut self, name: impl Into<String>, spec: RotorSpec) {
        self.rotors.insert(name.into(), spec);
    }

    /// Adds or replaces a reflector type.
    pub fn insert_reflector(&mut self, name: impl Into<String>, wiring: impl Into<String>) {
        self.reflectors.insert(name.into(), wiring.into());
    }

    /// Looks up a rotor type.
    pub fn rotor_spec(&self, name: &str) -> Option<&RotorSpec> {
        self.rotors.get(name)
    }

    /// Rotor names in sorted order.
    pub fn rotor_names(&self) -> impl Iterator<Item = &str> {
        self.rotors.keys().map(String::as_str)
    }

    /// Reflector names in sorted order.
    pub fn reflector_names(&self) -> impl Iterator<Item = &str> {
        self.reflectors.keys().map(String::as_str)
    }

    /// Builds a rotor of type `name` with the given ring setting and position.
    ///
    /// # Errors
    /// Returns [`EnigmaError::UnknownRotor`] if `name` is not in the catalog,
    /// or the wiring error from [`Rotor::new`].
    pub fn rotor(&self, name: &str, ring: u8, position: u8) -> Result<Rotor, EnigmaError> {
        let spec = self
            .rotor_spec(name)
            .ok_or_else(|| EnigmaError::UnknownRotor(name.to_string()))?;
        Rotor::new(&spec.wiring, &spec.notches, ring, position)
    }

    /// Builds the reflector named `name`.
    ///
    /// # Errors
    /// Returns [`EnigmaError::UnknownReflector`] if `name` is not in the catalog,
    /// or the wiring error from [`Reflector::new`].
    pub fn reflector(&self, name: &str) -> Result<Reflector, EnigmaError> {
        let wiring = self
            .reflectors
            .get(name)
            .ok_or_else(|| EnigmaError::UnknownReflector(name.to_string()))?;
        Reflector::new(wiring)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_contents() {
        let catalog = RotorCatalog::standard();
        assert_eq!(
            catalog.rotor_names().collect::<Vec<_>>(),
            vec!["I", "II", "III", "IV", "V"]
        );
        assert_eq!(
            catalog.reflector_names().collect::<Vec<_>>(),
            vec!["A", "B", "C"]
        );
    }

    #[test]
    fn test_standard_tables_are_well_formed() {
        let catalog = RotorCatalog::standard();
        for name in catalog.rotor_names() {
            assert!(catalog.rotor(name, 0, 0).unwrap().is_well_formed(), "{}", name);
        }
        for name in catalog.reflector_names() {
            assert!(catalog.reflector(name).unwrap().is_well_formed(), "{}", name);
        }
    }

    #[test]
    fn test_standard_notches() {
        let catalog = RotorCatalog::standard();
        let expected = [("I", 16), ("II", 4), ("III", 21), ("IV", 9), ("V", 25)];
        for (name, notch) in expected {
            assert_eq!(catalog.rotor(name, 0, 0).unwrap().notches(), vec![notch]);
        }
    }

    #[test]
    fn test_unknown_names() {
        let catalog = RotorCatalog::standard();
        assert_eq!(
            catalog.rotor("VI", 0, 0),
            Err(EnigmaError::UnknownRotor("VI".into()))
        );
        assert_eq!(
            catalog.reflector("D"),
            Err(EnigmaError::UnknownReflector("D".into()))
        );
    }

    #[test]
    fn test_custom_entries() {
        let mut catalog = RotorCatalog::new();
        catalog.insert_rotor("X", RotorSpec::new("BCDEFGHIJKLMNOPQRSTUVWXYZA", "AN"));
        let rotor = catalog.rotor("X", 0, 0).unwrap();
        assert_eq!(rotor.forward(0), 1);
        assert_eq!(rotor.notches(), vec![0, 13]);
    }

    #[test]
    fn test_serde_roundtrip() {
        let catalog = RotorCatalog::standard();
        let json = serde_json::to_string(&catalog).unwrap();
        let back: RotorCatalog = serde_json::from_str(&json).unwrap();
        assert_eq!(back, catalog);
    }
}
