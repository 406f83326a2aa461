//! Pure Timing-Logik
//!
//! Funktionen ohne Hardware-Dependencies (testbar!). Sie sagen voraus,
//! wie viele Zeiteinheiten der Sender für ein Zeichen oder einen Text
//! braucht, und benutzen dieselben Konstanten wie der Sender selbst.

use crate::table::CodeTable;
use crate::types::{Pattern, Symbol};

/// High-Dauer eines Punkts
pub const DOT_UNITS: u32 = 1;
/// High-Dauer eines Strichs
pub const DASH_UNITS: u32 = 3;
/// Low-Dauer nach jedem Symbol
pub const SYMBOL_GAP_UNITS: u32 = 1;
/// Zusätzliche Pause nach dem letzten Symbol eines Zeichens (3 - 1)
pub const CHARACTER_TAIL_UNITS: u32 = 2;
/// Pause für ein Leerzeichen (7 - 3)
pub const WORD_GAP_UNITS: u32 = 4;

impl Symbol {
    /// Einheiten, die der Pin für dieses Symbol High ist
    pub const fn on_units(self) -> u32 {
        match self {
            Symbol::Dot => DOT_UNITS,
            Symbol::Dash => DASH_UNITS,
        }
    }

    /// High-Dauer plus nachfolgende Lücke
    pub const fn total_units(self) -> u32 {
        self.on_units() + SYMBOL_GAP_UNITS
    }
}

/// Gesamtdauer eines Zeichens inklusive Zeichen-Pause
///
/// ```
/// # use morse_core::{Alphabet, CodeTable, pattern_units};
/// let table = CodeTable::new(Alphabet::Letters);
/// assert_eq!(pattern_units(table.lookup('e').unwrap()), 4);
/// assert_eq!(pattern_units(table.lookup('a').unwrap()), 8);
/// ```
pub fn pattern_units(pattern: Pattern) -> u32 {
    pattern.iter().map(Symbol::total_units).sum::<u32>() + CHARACTER_TAIL_UNITS
}

/// Gesamtdauer eines Textes, genau wie `Transmitter::emit_text` sie erzeugt
///
/// Leerzeichen zählen 4 Einheiten, nicht unterstützte Zeichen 0.
pub fn text_units(table: &CodeTable, text: &str) -> u32 {
    text.chars()
        .map(|c| match c {
            ' ' => WORD_GAP_UNITS,
            c => table.lookup(c).map_or(0, pattern_units),
        })
        .fold(0u32, u32::saturating_add)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Alphabet;

    #[test]
    fn test_symbol_units() {
        assert_eq!(Symbol::Dot.total_units(), 2);
        assert_eq!(Symbol::Dash.total_units(), 4);
    }

    #[test]
    fn test_pattern_units_b() {
        let table = CodeTable::new(Alphabet::Letters);
        // 4 + 2 + 2 + 2 + 2
        assert_eq!(pattern_units(table.lookup('b').unwrap()), 12);
    }

    #[test]
    fn test_text_units_word_gap() {
        let table = CodeTable::new(Alphabet::Letters);
        assert_eq!(text_units(&table, "a b"), 8 + 4 + 12);
    }

    #[test]
    fn test_text_units_skips_unsupported() {
        let table = CodeTable::new(Alphabet::Letters);
        assert_eq!(text_units(&table, "e!7"), 4);
        assert_eq!(text_units(&table, ""), 0);
    }

    #[test]
    fn test_text_units_leading_space() {
        let table = CodeTable::new(Alphabet::Letters);
        assert_eq!(text_units(&table, " e"), 4 + 4);
    }

    #[test]
    fn test_text_units_digits_depend_on_alphabet() {
        let letters = CodeTable::new(Alphabet::Letters);
        let full = CodeTable::new(Alphabet::Alphanumeric);
        assert_eq!(text_units(&letters, "0"), 0);
        // 5 Striche: 5 * 4 + 2
        assert_eq!(text_units(&full, "0"), 22);
    }
}
