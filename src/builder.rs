//! Machine builder: turns names and settings into a ready [`Machine`].

use log::debug;
use serde::{Deserialize, Serialize};

use crate::alphabet;
use crate::catalog::RotorCatalog;
use crate::error::EnigmaError;
use crate::machine::Machine;
use crate::plugboard::Plugboard;
use crate::stepping::RotorStack;

/// Daily settings of a machine: which rotors go where, and how they are set.
///
/// Arrays are ordered `[left, middle, right]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineConfig {
    /// Catalog names of the left, middle and right rotors.
    pub rotors: [String; 3],
    /// Catalog name of the reflector.
    pub reflector: String,
    /// Ring settings, `0..26`.
    pub rings: [u8; 3],
    /// Starting positions, `0..26`.
    pub positions: [u8; 3],
    /// Plugboard cables.
    pub plugs: Vec<(char, char)>,
}

impl Default for MachineConfig {
    /// Rotors I, II, III with reflector B, rings and positions at A, no plugs.
    fn default() -> Self {
        MachineConfig {
            rotors: ["I".into(), "II".into(), "III".into()],
            reflector: "B".into(),
            rings: [0; 3],
            positions: [0; 3],
            plugs: Vec::new(),
        }
    }
}

/// Parses a three-letter setting such as `"ADV"` into `[left, middle, right]`.
///
/// # Errors
/// Returns [`EnigmaError::InvalidSymbol`] for a non `A..=Z` character and
/// [`EnigmaError::InvalidSetting`] when there are not exactly three letters.
pub fn parse_settings(letters: &str) -> Result<[u8; 3], EnigmaError> {
    let indices = alphabet::letters_to_indices(letters)?;
    <[u8; 3]>::try_from(indices.as_slice()).map_err(|_| {
        EnigmaError::InvalidSetting(format!(
            "{:?} must be exactly three letters",
            letters
        ))
    })
}

/// Builder for [`Machine`].
///
/// # Examples
///
/// ```
/// use enigma::MachineBuilder;
///
/// let mut machine = MachineBuilder::new()
///     .rotors("IV", "V", "I")
///     .reflector("C")
///     .ring_letters("BBB")?
///     .position_letters("QEV")?
///     .plugs(&[('A', 'M'), ('F', 'I')])
///     .build()?;
/// let ciphertext = machine.encrypt_text("HELLO");
/// assert_eq!(ciphertext.len(), 5);
/// # Ok::<(), enigma::EnigmaError>(())
/// ```
#[derive(Debug, Clone)]
pub struct MachineBuilder {
    catalog: RotorCatalog,
    config: MachineConfig,
}

impl Default for MachineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MachineBuilder {
    /// Starts from the standard catalog and the default configuration.
    pub fn new() -> Self {
        Self::with_catalog(RotorCatalog::standard())
    }

    /// Starts from a custom catalog and the default configuration.
    pub fn with_catalog(catalog: RotorCatalog) -> Self {
        MachineBuilder {
            catalog,
            config: MachineConfig::default(),
        }
    }

    /// Replaces the whole configuration.
    pub fn config(mut self, config: MachineConfig) -> Self {
        self.config = config;
        self
    }

    /// Chooses the left, middle and right rotors by catalog name.
    pub fn rotors(mut self, left: &str, middle: &str, right: &str) -> Self {
        self.config.rotors = [left.into(), middle.into(), right.into()];
        self
    }

    /// Chooses the reflector by catalog name.
    pub fn reflector(mut self, name: &str) -> Self {
        self.config.reflector = name.into();
        self
    }

    /// Sets the ring settings as indices.
    pub fn rings(mut self, rings: [u8; 3]) -> Self {
        self.config.rings = rings;
        self
    }

    /// Sets the ring settings from letters, e.g. `"AAA"`.
    ///
    /// # Errors
    /// See [`parse_settings`].
    pub fn ring_letters(self, letters: &str) -> Result<Self, EnigmaError> {
        Ok(self.rings(parse_settings(letters)?))
    }

    /// Sets the starting positions as indices.
    pub fn positions(mut self, positions: [u8; 3]) -> Self {
        self.config.positions = positions;
        self
    }

    /// Sets the starting positions from letters, e.g. `"ADV"`.
    ///
    /// # Errors
    /// See [`parse_settings`].
    pub fn position_letters(self, letters: &str) -> Result<Self, EnigmaError> {
        Ok(self.positions(parse_settings(letters)?))
    }

    /// Sets the plugboard cables.
    pub fn plugs(mut self, pairs: &[(char, char)]) -> Self {
        self.config.plugs = pairs.to_vec();
        self
    }

    /// Current configuration.
    pub fn current_config(&self) -> &MachineConfig {
        &self.config
    }

    /// Checks that every rotor is a permutation, the reflector is a
    /// fixed-point-free involution and no plug letter is reused.
    ///
    /// [`build`](Self::build) does not call this. It asserts the rotor and
    /// reflector properties in debug builds and accepts reused plug letters,
    /// which overwrite earlier cables.
    ///
    /// # Errors
    /// Returns the lookup error for unknown names, or
    /// [`EnigmaError::MalformedConfiguration`] naming the first bad part.
    pub fn validate(&self) -> Result<(), EnigmaError> {
        for name in &self.config.rotors {
            if !self.catalog.rotor(name, 0, 0)?.is_well_formed() {
                return Err(EnigmaError::MalformedConfiguration(format!(
                    "rotor {} wiring is not a permutation",
                    name
                )));
            }
        }
        if !self.catalog.reflector(&self.config.reflector)?.is_well_formed() {
            return Err(EnigmaError::MalformedConfiguration(format!(
                "reflector {} is not a fixed-point-free involution",
                self.config.reflector
            )));
        }
        Plugboard::from_pairs_checked(&self.config.plugs)?;
        Ok(())
    }

    /// Assembles the machine.
    ///
    /// # Errors
    /// Returns [`EnigmaError::UnknownRotor`] or [`EnigmaError::UnknownReflector`]
    /// for names missing from the catalog, and [`EnigmaError::InvalidSymbol`]
    /// for a plug letter outside `A..=Z`.
    pub fn build(&self) -> Result<Machine, EnigmaError> {
        let MachineConfig {
            rotors: [left, middle, right],
            reflector,
            rings,
            positions,
            plugs,
        } = &self.config;

        let stack = RotorStack::new(
            self.catalog.rotor(left, rings[0], positions[0])?,
            self.catalog.rotor(middle, rings[1], positions[1])?,
            self.catalog.rotor(right, rings[2], positions[2])?,
        );
        let reflector_table = self.catalog.reflector(reflector)?;
        let plugboard = Plugboard::from_pairs(plugs)?;

        debug_assert!(stack.rotors().iter().all(|r| r.is_well_formed()));
        debug_assert!(reflector_table.is_well_formed());

        let machine = Machine::new(stack, reflector_table, plugboard);
        debug!(
            "built machine rotors={}-{}-{} reflector={} rings={:?} window={} plugs={}",
            left,
            middle,
            right,
            reflector,
            rings,
            machine.window(),
            machine.plugboard().cable_count()
        );
        Ok(machine)
    }
}
