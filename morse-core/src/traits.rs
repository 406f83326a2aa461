//! Hardware Abstraction Traits
//!
//! Diese Traits definieren die Schnittstellen zu den externen
//! Kollaborateuren des Senders (Ausgangs-Pin und Wartefunktion)
//! ohne konkrete Implementierung.

/// Trait für den digitalen Ausgangs-Pin
///
/// Der Pin muss bereits als Ausgang konfiguriert sein, bevor er an
/// einen [`Transmitter`](crate::Transmitter) übergeben wird.
///
/// # Implementierungen
/// - **Production:** GpioSignalPin (ESP32 GPIO Output)
/// - **Testing:** MockSignalPin (in-memory Mock)
pub trait SignalPin {
    /// Fehler-Typ der Hardware (z.B. `core::convert::Infallible`)
    ///
    /// Der Sender reicht diesen Fehler unverändert an den Aufrufer weiter.
    type Error;

    /// Setzt den Pin auf High (Signal an)
    fn set_high(&mut self) -> Result<(), Self::Error>;

    /// Setzt den Pin auf Low (Signal aus)
    fn set_low(&mut self) -> Result<(), Self::Error>;
}

/// Trait für blockierendes Warten
///
/// Blockiert den aufrufenden Thread für die angegebene Dauer.
/// Nicht abbrechbar: einmal begonnen läuft die Pause bis zum Ende.
///
/// # Implementierungen
/// - **Production:** HalDelay (esp-hal Delay)
/// - **Testing:** MockDelay (virtuelle Uhr)
pub trait BlockingDelay {
    fn sleep_us(&mut self, micros: u32);
}

impl<T: SignalPin + ?Sized> SignalPin for &mut T {
    type Error = T::Error;

    fn set_high(&mut self) -> Result<(), Self::Error> {
        T::set_high(self)
    }

    fn set_low(&mut self) -> Result<(), Self::Error> {
        T::set_low(self)
    }
}

impl<T: BlockingDelay + ?Sized> BlockingDelay for &mut T {
    fn sleep_us(&mut self, micros: u32) {
        T::sleep_us(self, micros);
    }
}
