//! Three-rotor electromechanical cipher machine.
//!
//! Simulates a plugboard, three stepping rotors with ring settings and a
//! fixed reflector, reproducing the mechanical stepping sequence exactly,
//! double step included. Output is interoperable letter for letter with
//! the historical machine for the same settings.
//!
//! # Architecture
//!
//! ```text
//! alphabet   (letter <-> index codec)
//! Rotor      (wiring, inverse, notches, ring, position)
//!     ↕ three owned by
//! RotorStack (stepping controller, double-step rule)
//!     ↕ driven by
//! Machine    (plugboard -> rotors -> reflector -> rotors -> plugboard)
//!     ↑ assembled by
//! MachineBuilder + RotorCatalog (named wirings, settings)
//! ```
//!
//! # Examples
//!
//! Encipher and decipher with the same starting positions:
//!
//! ```
//! use enigma::MachineBuilder;
//!
//! let builder = MachineBuilder::new()
//!     .rotors("I", "II", "III")
//!     .reflector("B")
//!     .position_letters("ADV")
//!     .unwrap();
//!
//! let mut encoder = builder.build().unwrap();
//! let ciphertext = encoder.encrypt_text("ATTACKATDAWN");
//! assert_ne!(ciphertext, "ATTACKATDAWN");
//!
//! let mut decoder = builder.build().unwrap();
//! assert_eq!(decoder.encrypt_text(&ciphertext), "ATTACKATDAWN");
//! ```
//!
//! Text normalisation is the caller's job:
//!
//! ```
//! use enigma::{alphabet, MachineBuilder};
//!
//! let mut machine = MachineBuilder::new().build().unwrap();
//! let plaintext = alphabet::normalize("Hello, world!");
//! assert_eq!(machine.encrypt_text(&plaintext), "ILBDAAMTAZ");
//! ```

#![deny(clippy::all)]

pub mod alphabet;
pub mod error;

mod builder;
mod catalog;
mod machine;
mod plugboard;
mod reflector;
mod rotor;
mod stepping;

pub use builder::{parse_settings, MachineBuilder, MachineConfig};
pub use catalog::{RotorCatalog, RotorSpec};
pub use error::EnigmaError;
pub use machine::Machine;
pub use plugboard::Plugboard;
pub use reflector::Reflector;
pub use rotor::Rotor;
pub use stepping::{RotorStack, Step};
