// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen

use defmt::{info, warn};
use morse_core::{Profile, TimingUnit, TransmitterConfig};

// ============================================================================
// Pin Konfiguration
// ============================================================================

/// GPIO-Pin für das Morse-Signal (in main.rs als `peripherals.GPIO7` genutzt)
/// Der Empfänger (z.B. Arduino Morse Code Reader) tastet diesen Pin ab
pub const MORSE_GPIO_PIN: u8 = 7;

// ============================================================================
// Morse Konfiguration
// ============================================================================

/// Einsatzprofil ("generator" oder "tutorial")
/// Wird zur Build-Zeit aus der Environment Variable MORSE_PROFILE geladen
/// Optional: ohne Wert gilt das Generator-Profil
pub const MORSE_PROFILE: Option<&str> = option_env!("MORSE_PROFILE");

/// Zeiteinheit in Millisekunden (überschreibt die Einheit des Profils)
/// Wird zur Build-Zeit aus der Environment Variable MORSE_UNIT_MS geladen
pub const MORSE_UNIT_MS: Option<&str> = option_env!("MORSE_UNIT_MS");

/// Wartezeit nach dem Start bevor die erste Phrase gesendet wird
/// Gibt dem Empfänger Zeit zum Hochfahren
pub const STARTUP_DELAY_MS: u64 = 1000;

/// Ermittelt das aktive Profil
///
/// Ungültige Namen werden geloggt, dann gilt das Default-Profil.
pub fn active_profile() -> Profile {
    match MORSE_PROFILE {
        None => Profile::default(),
        Some(name) => Profile::from_name(name).unwrap_or_else(|| {
            warn!("Config: unknown MORSE_PROFILE '{}', using default", name);
            Profile::default()
        }),
    }
}

/// Sender-Konfiguration für ein Profil, ggf. mit überschriebener Einheit
pub fn transmitter_config(profile: Profile) -> TransmitterConfig {
    let mut config = profile.config();

    if let Some(raw) = MORSE_UNIT_MS {
        match raw.trim().parse::<u32>().map(TimingUnit::from_millis) {
            Ok(Ok(unit)) => {
                info!("Config: MORSE_UNIT_MS override = {} ms", unit.as_millis());
                config.unit = unit;
            }
            Ok(Err(e)) => warn!("Config: invalid MORSE_UNIT_MS '{}': {}", raw, e),
            Err(_) => warn!("Config: MORSE_UNIT_MS '{}' is not a number", raw),
        }
    }

    config
}
