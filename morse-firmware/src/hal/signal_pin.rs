// Signal-Pin und Delay Implementierungen
//
// Verbindet die Traits aus morse-core mit der esp-hal Hardware,
// damit der Sender selbst ohne Hardware testbar bleibt.

use core::convert::Infallible;

use esp_hal::delay::Delay;
use esp_hal::gpio::Output;
use morse_core::{BlockingDelay, SignalPin};

/// Real Hardware Signal-Pin
///
/// Kapselt einen esp-hal GPIO Output. Der Pin muss beim Erstellen schon
/// als Push-Pull Ausgang mit Low-Pegel konfiguriert sein.
pub struct GpioSignalPin<'a> {
    output: Output<'a>,
}

impl<'a> GpioSignalPin<'a> {
    pub fn new(output: Output<'a>) -> Self {
        Self { output }
    }

    /// Gibt den GPIO Output wieder frei
    pub fn into_inner(self) -> Output<'a> {
        self.output
    }
}

impl SignalPin for GpioSignalPin<'_> {
    // GPIO-Zugriffe auf dem ESP32-C6 können nicht fehlschlagen
    type Error = Infallible;

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.output.set_high();
        Ok(())
    }

    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.output.set_low();
        Ok(())
    }
}

/// Real Hardware Delay
///
/// Blockierendes Busy-Wait über den esp-hal Delay (Systemtimer).
/// Blockiert den Executor - deshalb läuft der Morse-Task allein.
#[derive(Clone, Copy)]
pub struct HalDelay {
    delay: Delay,
}

impl HalDelay {
    pub fn new() -> Self {
        Self {
            delay: Delay::new(),
        }
    }
}

impl BlockingDelay for HalDelay {
    fn sleep_us(&mut self, micros: u32) {
        self.delay.delay_micros(micros);
    }
}
