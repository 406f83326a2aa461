// Library-Root: Wiederverwendbare Logik und Module
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod tasks;

// Re-exports von morse-core
pub use morse_core::{
    Alphabet, BlockingDelay, CodeTable, Profile, SignalPin, Symbol, TimingUnit, Transmitter,
    TransmitterConfig, text_units,
};

use crate::hal::{GpioSignalPin, HalDelay};

/// Sender-Typ der Firmware: GPIO Output + esp-hal Delay
///
/// Statt:  Transmitter<GpioSignalPin<'static>, HalDelay>
/// Nutze:  EspTransmitter
pub type EspTransmitter = Transmitter<GpioSignalPin<'static>, HalDelay>;

// ============================================================================
// Testing-Strategie
// ============================================================================
//
// Diese Crate kompiliert nur für riscv32imac-unknown-none-elf.
// Die gesamte Morse-Logik liegt deshalb in morse-core (Traits + Pure Logic)
// und wird auf dem Host in morse-core und morse-tests getestet.
// Hier bleiben nur die Trait-Implementierungen für echte Hardware
// (hal/) und die Task-Verdrahtung (tasks/).
