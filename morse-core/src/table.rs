//! Morse Code-Tabelle
//!
//! Statische Zuordnung Zeichen → Morse-Code. Der Zugriff erfolgt direkt
//! über den Zeichen-Index (kein lineares Suchen).

use crate::types::{Alphabet, Pattern, Symbol};

const DOT: Symbol = Symbol::Dot;
const DASH: Symbol = Symbol::Dash;

/// Codes für a-z, Index = Zeichen - 'a'
static LETTERS: [&[Symbol]; 26] = [
    &[DOT, DASH],             // a
    &[DASH, DOT, DOT, DOT],   // b
    &[DASH, DOT, DASH, DOT],  // c
    &[DASH, DOT, DOT],        // d
    &[DOT],                   // e
    &[DOT, DOT, DASH, DOT],   // f
    &[DASH, DASH, DOT],       // g
    &[DOT, DOT, DOT, DOT],    // h
    &[DOT, DOT],              // i
    &[DOT, DASH, DASH, DASH], // j
    &[DASH, DOT, DASH],       // k
    &[DOT, DASH, DOT, DOT],   // l
    &[DASH, DASH],            // m
    &[DASH, DOT],             // n
    &[DASH, DASH, DASH],      // o
    &[DOT, DASH, DASH, DOT],  // p
    &[DASH, DASH, DOT, DASH], // q
    &[DOT, DASH, DOT],        // r
    &[DOT, DOT, DOT],         // s
    &[DASH],                  // t
    &[DOT, DOT, DASH],        // u
    &[DOT, DOT, DOT, DASH],   // v
    &[DOT, DASH, DASH],       // w
    &[DASH, DOT, DOT, DASH],  // x
    &[DASH, DOT, DASH, DASH], // y
    &[DASH, DASH, DOT, DOT],  // z
];

/// Codes für 0-9, Index = Zeichen - '0'
static DIGITS: [&[Symbol]; 10] = [
    &[DASH, DASH, DASH, DASH, DASH], // 0
    &[DOT, DASH, DASH, DASH, DASH],  // 1
    &[DOT, DOT, DASH, DASH, DASH],   // 2
    &[DOT, DOT, DOT, DASH, DASH],    // 3
    &[DOT, DOT, DOT, DOT, DASH],     // 4
    &[DOT, DOT, DOT, DOT, DOT],      // 5
    &[DASH, DOT, DOT, DOT, DOT],     // 6
    &[DASH, DASH, DOT, DOT, DOT],    // 7
    &[DASH, DASH, DASH, DOT, DOT],   // 8
    &[DASH, DASH, DASH, DASH, DOT],  // 9
];

/// Code-Tabelle für eine Alphabet-Variante
///
/// Wird einmal erstellt und danach nur gelesen. Groß- und Kleinschreibung
/// werden gleich behandelt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeTable {
    alphabet: Alphabet,
}

impl CodeTable {
    pub const fn new(alphabet: Alphabet) -> Self {
        Self { alphabet }
    }

    pub const fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    /// Sucht den Morse-Code eines Zeichens
    ///
    /// Gibt `None` für Zeichen außerhalb des aktiven Alphabets zurück.
    /// Das ist kein Fehler: der Sender überspringt solche Zeichen.
    ///
    /// ```
    /// # use morse_core::{Alphabet, CodeTable, Symbol};
    /// let table = CodeTable::new(Alphabet::Letters);
    /// assert_eq!(table.lookup('A').unwrap().symbols(), &[Symbol::Dot, Symbol::Dash]);
    /// assert!(table.lookup('7').is_none());
    /// ```
    pub fn lookup(&self, c: char) -> Option<Pattern> {
        let c = c.to_ascii_lowercase();
        let symbols = match c {
            'a'..='z' => LETTERS.get(usize::from(c as u8 - b'a')).copied(),
            '0'..='9' if self.alphabet == Alphabet::Alphanumeric => {
                DIGITS.get(usize::from(c as u8 - b'0')).copied()
            }
            _ => None,
        };
        symbols.map(Pattern::new)
    }

    pub fn supports(&self, c: char) -> bool {
        self.lookup(c).is_some()
    }

    /// Alle unterstützten Zeichen (Kleinbuchstaben, dann Ziffern)
    pub fn characters(&self) -> impl Iterator<Item = char> + use<> {
        let digits = (self.alphabet == Alphabet::Alphanumeric).then_some('0'..='9');
        ('a'..='z').chain(digits.into_iter().flatten())
    }

    /// Rückwärts-Suche: Morse-Code → Zeichen (klein geschrieben)
    ///
    /// Berücksichtigt nur das aktive Alphabet. So dekodiert auch der
    /// Empfänger auf der anderen Seite des Pins.
    pub fn decode(&self, symbols: &[Symbol]) -> Option<char> {
        self.characters()
            .find(|&c| self.lookup(c).is_some_and(|p| p.symbols() == symbols))
    }
}

impl Default for CodeTable {
    fn default() -> Self {
        Self::new(Alphabet::default())
    }
}
