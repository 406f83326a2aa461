//! Deployment-Profile
//!
//! Zwei vordefinierte Einsatzprofile: der einfache Generator (nur
//! Buchstaben, langsam, feste Phrase) und das Tutorial für den Morse-Code
//! Reader (Buchstaben und Ziffern, schneller, Phrase mit Zähler).

use core::fmt::Write;

use heapless::String;

use crate::types::{Alphabet, TimingUnit, TransmitterConfig};

/// Maximale Länge einer Phrase ("this is a test 4294967295" = 25)
pub const PHRASE_CAPACITY: usize = 32;

const GENERATOR_UNIT: TimingUnit = match TimingUnit::from_millis(100) {
    Ok(unit) => unit,
    Err(_) => panic!("invalid generator unit"),
};

const TUTORIAL_UNIT: TimingUnit = match TimingUnit::from_millis(50) {
    Ok(unit) => unit,
    Err(_) => panic!("invalid tutorial unit"),
};

/// Einsatzprofil
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Profile {
    /// 100 ms, nur Buchstaben, "Mikes Electro Shack"
    #[default]
    Generator,
    /// 50 ms, Buchstaben + Ziffern, "this is a test N"
    Tutorial,
}

impl Profile {
    /// Profil aus Namen (Groß-/Kleinschreibung egal)
    pub fn from_name(name: &str) -> Option<Self> {
        if name.eq_ignore_ascii_case("generator") {
            Some(Self::Generator)
        } else if name.eq_ignore_ascii_case("tutorial") {
            Some(Self::Tutorial)
        } else {
            None
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Generator => "generator",
            Self::Tutorial => "tutorial",
        }
    }

    pub const fn unit(self) -> TimingUnit {
        match self {
            Self::Generator => GENERATOR_UNIT,
            Self::Tutorial => TUTORIAL_UNIT,
        }
    }

    pub const fn alphabet(self) -> Alphabet {
        match self {
            Self::Generator => Alphabet::Letters,
            Self::Tutorial => Alphabet::Alphanumeric,
        }
    }

    pub const fn config(self) -> TransmitterConfig {
        TransmitterConfig::new(self.unit(), self.alphabet())
    }

    /// Pause nach jeder Phrase in Zeiteinheiten
    ///
    /// Generator: 25 (ca. 4 Wort-Pausen), Tutorial: 53 (ca. 8 Wort-Pausen)
    pub const fn pause_units(self) -> u32 {
        match self {
            Self::Generator => 25,
            Self::Tutorial => 53,
        }
    }

    /// Phrase für den n-ten Durchlauf (beginnend bei 1)
    ///
    /// ```
    /// # use morse_core::Profile;
    /// assert_eq!(Profile::Generator.phrase(3).as_str(), "Mikes Electro Shack");
    /// assert_eq!(Profile::Tutorial.phrase(3).as_str(), "this is a test 3");
    /// ```
    pub fn phrase(self, iteration: u32) -> String<PHRASE_CAPACITY> {
        let mut phrase = String::new();
        // Kapazität reicht für jeden u32-Zähler
        let result = match self {
            Self::Generator => phrase.write_str("Mikes Electro Shack"),
            Self::Tutorial => write!(phrase, "this is a test {iteration}"),
        };
        debug_assert!(result.is_ok());
        phrase
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Profile {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_from_name() {
        assert_eq!(Profile::from_name("Tutorial"), Some(Profile::Tutorial));
        assert_eq!(Profile::from_name("GENERATOR"), Some(Profile::Generator));
        assert_eq!(Profile::from_name("reader"), None);
    }

    #[test]
    fn test_profile_name_round_trip() {
        for profile in [Profile::Generator, Profile::Tutorial] {
            assert_eq!(Profile::from_name(profile.name()), Some(profile));
        }
    }

    #[test]
    fn test_profile_config() {
        let config = Profile::Generator.config();
        assert_eq!(config.unit.as_millis(), 100);
        assert_eq!(config.alphabet, Alphabet::Letters);

        let config = Profile::Tutorial.config();
        assert_eq!(config.unit.as_millis(), 50);
        assert_eq!(config.alphabet, Alphabet::Alphanumeric);
    }

    #[test]
    fn test_tutorial_phrase_max_counter_fits() {
        let phrase = Profile::Tutorial.phrase(u32::MAX);
        assert_eq!(phrase.as_str(), "this is a test 4294967295");
    }
}
