//! Morse Core - Platform-agnostic Logic and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert die Code-Tabelle, den Sender, die Traits für Pin und
//! Delay sowie Pure Functions für das Timing.

#![cfg_attr(not(test), no_std)]

pub mod logic;
pub mod profile;
pub mod table;
pub mod traits;
pub mod transmitter;
pub mod types;

// Re-exports für einfachen Zugriff
pub use logic::{pattern_units, text_units};
pub use profile::{PHRASE_CAPACITY, Profile};
pub use table::CodeTable;
pub use traits::{BlockingDelay, SignalPin};
pub use transmitter::Transmitter;
pub use types::{Alphabet, ConfigError, MAX_UNIT_US, Pattern, Symbol, TimingUnit, TransmitterConfig};
