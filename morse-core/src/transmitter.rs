//! Morse-Sender
//!
//! Wandelt Text in zeitlich gesteuerte Pin-Impulse um. Der Ablauf ist
//! vollständig synchron: jeder Impuls und jede Pause blockiert den
//! Aufrufer über [`BlockingDelay`], bis sie vorbei ist.

use crate::logic::{CHARACTER_TAIL_UNITS, SYMBOL_GAP_UNITS, WORD_GAP_UNITS};
use crate::table::CodeTable;
use crate::traits::{BlockingDelay, SignalPin};
use crate::types::{Pattern, Symbol, TransmitterConfig};

/// Morse-Sender für einen Ausgangs-Pin
///
/// Besitzt Pin und Delay exklusiv, ist also einziger Schreiber des Pins.
/// Mehrere Sender (andere Pins, andere Geschwindigkeit) können parallel
/// existieren, da es keinen globalen Zustand gibt.
///
/// # Trait-basierte Abstraktion
/// Die generischen Parameter ermöglichen:
/// - Real Hardware (GpioSignalPin + HalDelay) im Production-Code
/// - Mock Implementation (MockSignalPin + MockDelay) in Tests
///
/// # Fehlerbehandlung
/// Fehler des Pins (`P::Error`) werden unverändert weitergereicht und
/// brechen die laufende Ausgabe sofort ab. Es gibt keine Wiederholung.
pub struct Transmitter<P, D> {
    config: TransmitterConfig,
    table: CodeTable,
    pin: P,
    delay: D,
}

impl<P, D> Transmitter<P, D>
where
    P: SignalPin,
    D: BlockingDelay,
{
    /// Erstellt einen konfigurierten Sender
    ///
    /// Der Pin muss bereits als Ausgang initialisiert sein.
    pub fn new(config: TransmitterConfig, pin: P, delay: D) -> Self {
        Self {
            config,
            table: CodeTable::new(config.alphabet),
            pin,
            delay,
        }
    }

    pub fn config(&self) -> &TransmitterConfig {
        &self.config
    }

    pub fn code_table(&self) -> &CodeTable {
        &self.table
    }

    /// Gibt Pin und Delay an den Aufrufer zurück
    pub fn release(self) -> (P, D) {
        (self.pin, self.delay)
    }

    /// Wartet `units` Zeiteinheiten, ohne den Pin zu verändern
    pub fn pause(&mut self, units: u32) {
        self.delay.sleep_us(self.config.unit.times(units));
    }

    /// Punkt: 1 Einheit High, 1 Einheit Low
    pub fn emit_dot(&mut self) -> Result<(), P::Error> {
        self.emit_symbol(Symbol::Dot)
    }

    /// Strich: 3 Einheiten High, 1 Einheit Low
    pub fn emit_dash(&mut self) -> Result<(), P::Error> {
        self.emit_symbol(Symbol::Dash)
    }

    fn emit_symbol(&mut self, symbol: Symbol) -> Result<(), P::Error> {
        self.pin.set_high()?;
        self.pause(symbol.on_units());
        self.pin.set_low()?;
        self.pause(SYMBOL_GAP_UNITS);
        Ok(())
    }

    /// Sendet alle Symbole eines Codes und danach 2 Einheiten Pause
    ///
    /// Zusammen mit der Lücke nach dem letzten Symbol ergibt das die
    /// Zeichen-Pause von 3 Einheiten.
    pub fn emit_character(&mut self, pattern: Pattern) -> Result<(), P::Error> {
        for symbol in pattern {
            self.emit_symbol(symbol)?;
        }
        self.pause(CHARACTER_TAIL_UNITS);
        Ok(())
    }

    /// Sendet ein einzelnes Zeichen
    ///
    /// Nicht unterstützte Zeichen erzeugen weder Signal noch Pause.
    pub fn emit_char(&mut self, c: char) -> Result<(), P::Error> {
        match self.table.lookup(c) {
            Some(pattern) => self.emit_character(pattern),
            None => {
                #[cfg(feature = "defmt")]
                defmt::trace!("Morse: skipping unsupported character {}", c);
                Ok(())
            }
        }
    }

    /// Sendet einen Text Zeichen für Zeichen von links nach rechts
    ///
    /// Ein Leerzeichen wartet 4 Einheiten. Mit den 3 Einheiten nach dem
    /// vorigen Zeichen ergibt das die Wort-Pause von 7 Einheiten. Ein
    /// Leerzeichen am Textanfang wartet ebenfalls 4 Einheiten.
    pub fn emit_text(&mut self, text: &str) -> Result<(), P::Error> {
        #[cfg(feature = "defmt")]
        defmt::debug!(
            "Morse: sending '{}' ({} units)",
            text,
            crate::logic::text_units(&self.table, text)
        );

        for c in text.chars() {
            if c == ' ' {
                self.pause(WORD_GAP_UNITS);
            } else {
                self.emit_char(c)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Alphabet, TimingUnit};
    use core::convert::Infallible;

    #[derive(Default)]
    struct Recorder {
        // (Zeitpunkt in us, Pegel)
        edges: Vec<(u32, bool)>,
        now_us: u32,
    }

    struct RecPin<'a>(&'a core::cell::RefCell<Recorder>);
    struct RecDelay<'a>(&'a core::cell::RefCell<Recorder>);

    impl SignalPin for RecPin<'_> {
        type Error = Infallible;

        fn set_high(&mut self) -> Result<(), Infallible> {
            let mut rec = self.0.borrow_mut();
            let now = rec.now_us;
            rec.edges.push((now, true));
            Ok(())
        }

        fn set_low(&mut self) -> Result<(), Infallible> {
            let mut rec = self.0.borrow_mut();
            let now = rec.now_us;
            rec.edges.push((now, false));
            Ok(())
        }
    }

    impl BlockingDelay for RecDelay<'_> {
        fn sleep_us(&mut self, micros: u32) {
            self.0.borrow_mut().now_us += micros;
        }
    }

    fn config() -> TransmitterConfig {
        TransmitterConfig::new(TimingUnit::from_micros(10).unwrap(), Alphabet::Letters)
    }

    #[test]
    fn test_emit_dot_timing() {
        let rec = core::cell::RefCell::new(Recorder::default());
        let mut tx = Transmitter::new(config(), RecPin(&rec), RecDelay(&rec));
        tx.emit_dot().unwrap();
        let rec = rec.borrow();
        assert_eq!(rec.edges, vec![(0, true), (10, false)]);
        assert_eq!(rec.now_us, 20);
    }

    #[test]
    fn test_emit_dash_timing() {
        let rec = core::cell::RefCell::new(Recorder::default());
        let mut tx = Transmitter::new(config(), RecPin(&rec), RecDelay(&rec));
        tx.emit_dash().unwrap();
        let rec = rec.borrow();
        assert_eq!(rec.edges, vec![(0, true), (30, false)]);
        assert_eq!(rec.now_us, 40);
    }

    #[test]
    fn test_emit_text_skips_unsupported() {
        let rec = core::cell::RefCell::new(Recorder::default());
        let mut tx = Transmitter::new(config(), RecPin(&rec), RecDelay(&rec));
        tx.emit_text("#1!").unwrap();
        let rec = rec.borrow();
        assert!(rec.edges.is_empty());
        assert_eq!(rec.now_us, 0);
    }
}
