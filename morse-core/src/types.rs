//! Core Types für den Morse-Sender
//!
//! Datenstrukturen ohne Hardware-Dependencies

use core::fmt;

/// Größte erlaubte Zeiteinheit in Mikrosekunden (10 s)
///
/// Begrenzt die Einheit so, dass jedes feste Vielfache (max. 4×)
/// noch in `u32` Mikrosekunden passt.
pub const MAX_UNIT_US: u32 = 10_000_000;

/// Ein einzelnes Morse-Element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Symbol {
    /// Kurzer Impuls (1 Einheit)
    Dot,
    /// Langer Impuls (3 Einheiten)
    Dash,
}

impl Symbol {
    /// Zeichen in der klassischen Schreibweise (`.` oder `-`)
    pub const fn as_char(self) -> char {
        match self {
            Symbol::Dot => '.',
            Symbol::Dash => '-',
        }
    }
}

/// Morse-Code eines Zeichens: geordnete Folge von Symbolen
///
/// Die Symbole gehören der statischen Code-Tabelle, ein `Pattern`
/// ist nur eine billige Referenz darauf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern(&'static [Symbol]);

impl Pattern {
    pub(crate) const fn new(symbols: &'static [Symbol]) -> Self {
        Self(symbols)
    }

    pub const fn symbols(&self) -> &'static [Symbol] {
        self.0
    }

    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Immer `false` für Einträge der Code-Tabelle
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> core::iter::Copied<core::slice::Iter<'static, Symbol>> {
        self.0.iter().copied()
    }
}

impl IntoIterator for Pattern {
    type Item = Symbol;
    type IntoIter = core::iter::Copied<core::slice::Iter<'static, Symbol>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter().copied()
    }
}

/// Formatiert als `.-` Schreibweise
///
/// ```
/// # use morse_core::{Alphabet, CodeTable};
/// let table = CodeTable::new(Alphabet::Letters);
/// let pattern = table.lookup('b').unwrap();
/// assert_eq!(format!("{pattern}"), "-...");
/// ```
impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in self.0 {
            fmt::Write::write_char(f, symbol.as_char())?;
        }
        Ok(())
    }
}

/// Unterstützter Zeichensatz der Code-Tabelle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Alphabet {
    /// Nur Buchstaben a-z (26 Zeichen)
    #[default]
    Letters,
    /// Buchstaben a-z und Ziffern 0-9 (36 Zeichen)
    Alphanumeric,
}

/// Fehler beim Erstellen einer Zeiteinheit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Zeiteinheit ist 0
    ZeroUnit,
    /// Zeiteinheit überschreitet [`MAX_UNIT_US`]
    UnitTooLong,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroUnit => f.write_str("timing unit must be greater than zero"),
            ConfigError::UnitTooLong => {
                write!(f, "timing unit must not exceed {MAX_UNIT_US} us")
            }
        }
    }
}

impl core::error::Error for ConfigError {}

/// Basis-Zeiteinheit in Mikrosekunden
///
/// Alle Impuls- und Pausenlängen sind feste Vielfache davon.
/// Invariante: `0 < unit <= MAX_UNIT_US`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TimingUnit(u32);

impl TimingUnit {
    pub const fn from_micros(micros: u32) -> Result<Self, ConfigError> {
        if micros == 0 {
            Err(ConfigError::ZeroUnit)
        } else if micros > MAX_UNIT_US {
            Err(ConfigError::UnitTooLong)
        } else {
            Ok(Self(micros))
        }
    }

    pub const fn from_millis(millis: u32) -> Result<Self, ConfigError> {
        if millis > MAX_UNIT_US / 1000 {
            return Err(ConfigError::UnitTooLong);
        }
        Self::from_micros(millis * 1000)
    }

    /// Zeiteinheit aus Wörtern pro Minute (PARIS-Norm: 1200 ms / WPM)
    ///
    /// ```
    /// # use morse_core::TimingUnit;
    /// let unit = TimingUnit::from_wpm(20).unwrap();
    /// assert_eq!(unit.as_millis(), 60);
    /// ```
    pub const fn from_wpm(wpm: u32) -> Result<Self, ConfigError> {
        if wpm == 0 {
            return Err(ConfigError::UnitTooLong);
        }
        Self::from_micros(1_200_000 / wpm)
    }

    pub const fn as_micros(self) -> u32 {
        self.0
    }

    pub const fn as_millis(self) -> u32 {
        self.0 / 1000
    }

    /// `units` × Einheit in Mikrosekunden (sättigend)
    pub const fn times(self, units: u32) -> u32 {
        self.0.saturating_mul(units)
    }
}

/// Zeiteinheit in Millisekunden
impl TryFrom<u32> for TimingUnit {
    type Error = ConfigError;

    fn try_from(millis: u32) -> Result<Self, Self::Error> {
        Self::from_millis(millis)
    }
}

/// Konfiguration eines Senders
///
/// Ersetzt globale Konstanten (Pin, Einheit): jeder Sender bekommt
/// seine eigene Konfiguration beim Erstellen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransmitterConfig {
    pub unit: TimingUnit,
    pub alphabet: Alphabet,
}

impl TransmitterConfig {
    pub const fn new(unit: TimingUnit, alphabet: Alphabet) -> Self {
        Self { unit, alphabet }
    }
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for Symbol {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Symbol::Dot => defmt::write!(fmt, "Dot"),
            Symbol::Dash => defmt::write!(fmt, "Dash"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Pattern {
    fn format(&self, fmt: defmt::Formatter) {
        for symbol in self.0 {
            defmt::write!(fmt, "{}", symbol.as_char());
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Alphabet {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Alphabet::Letters => defmt::write!(fmt, "Letters"),
            Alphabet::Alphanumeric => defmt::write!(fmt, "Alphanumeric"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ConfigError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            ConfigError::ZeroUnit => defmt::write!(fmt, "ZeroUnit"),
            ConfigError::UnitTooLong => defmt::write!(fmt, "UnitTooLong"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for TimingUnit {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{} us", self.0)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for TransmitterConfig {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "TransmitterConfig {{ unit: {}, alphabet: {} }}",
            self.unit,
            self.alphabet
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timing_unit_rejects_zero() {
        assert_eq!(TimingUnit::from_micros(0), Err(ConfigError::ZeroUnit));
        assert_eq!(TimingUnit::from_millis(0), Err(ConfigError::ZeroUnit));
    }

    #[test]
    fn test_timing_unit_rejects_too_long() {
        assert_eq!(
            TimingUnit::from_micros(MAX_UNIT_US + 1),
            Err(ConfigError::UnitTooLong)
        );
        assert_eq!(
            TimingUnit::from_millis(10_001),
            Err(ConfigError::UnitTooLong)
        );
        assert!(TimingUnit::from_micros(MAX_UNIT_US).is_ok());
    }

    #[test]
    fn test_timing_unit_from_millis() {
        let unit = TimingUnit::from_millis(100).unwrap();
        assert_eq!(unit.as_micros(), 100_000);
        assert_eq!(unit.times(3), 300_000);
    }

    #[test]
    fn test_timing_unit_try_from() {
        let unit = TimingUnit::try_from(50u32).unwrap();
        assert_eq!(unit.as_millis(), 50);
        assert!(TimingUnit::try_from(0u32).is_err());
    }

    #[test]
    fn test_timing_unit_from_wpm() {
        assert_eq!(TimingUnit::from_wpm(12).unwrap().as_millis(), 100);
        assert_eq!(TimingUnit::from_wpm(24).unwrap().as_millis(), 50);
        assert!(TimingUnit::from_wpm(0).is_err());
    }

    #[test]
    fn test_symbol_as_char() {
        assert_eq!(Symbol::Dot.as_char(), '.');
        assert_eq!(Symbol::Dash.as_char(), '-');
    }
}
