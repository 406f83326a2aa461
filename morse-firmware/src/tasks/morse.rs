// Morse Task - Sendet die Phrase des aktiven Profils in Endlosschleife
use core::fmt::Debug;

use defmt::{Debug2Format, error, info};
use embassy_time::{Duration, Timer};
use esp_hal::gpio::Output;

use crate::config::{STARTUP_DELAY_MS, active_profile, transmitter_config};
use crate::hal::{GpioSignalPin, HalDelay};
use crate::{BlockingDelay, EspTransmitter, Profile, SignalPin, Transmitter, text_units};

/// Morse Loop - Testbare Wiederhol-Logik ohne Hardware-Abhängigkeit
///
/// Der Sender selbst kennt keine Schleife: diese Funktion entscheidet,
/// was wie oft gesendet wird:
/// - Baut die Phrase für den n-ten Durchlauf (Tutorial: mit Zähler)
/// - Sendet sie blockierend über den Transmitter
/// - Wartet danach die Profil-Pause (async, gibt CPU frei)
///
/// Fehler des Pins werden geloggt, es gibt keinen Retry: der nächste
/// Durchlauf beginnt nach der normalen Pause.
pub async fn morse_loop<P, D>(mut transmitter: Transmitter<P, D>, profile: Profile)
where
    P: SignalPin,
    P::Error: Debug,
    D: BlockingDelay,
{
    let unit = transmitter.config().unit;
    let pause = Duration::from_micros(u64::from(unit.times(profile.pause_units())));
    let mut iteration: u32 = 0;

    loop {
        iteration = iteration.wrapping_add(1);
        let phrase = profile.phrase(iteration);
        let units = text_units(transmitter.code_table(), &phrase);

        info!(
            "Morse: #{} '{}' ({} units, {} ms)",
            iteration,
            phrase.as_str(),
            units,
            u64::from(units) * u64::from(unit.as_micros()) / 1000
        );

        if let Err(e) = transmitter.emit_text(&phrase) {
            error!("Morse: pin error: {}", Debug2Format(&e));
        }

        Timer::after(pause).await;
    }
}

/// Morse Task - Embassy Task für die Ausgabe
///
/// Dieser Task übernimmt die Hardware-Initialisierung und ruft dann
/// die testbare `morse_loop()` Funktion auf.
///
/// # Parameter
/// - `output`: Als Ausgang konfigurierter GPIO (Low-Pegel)
#[embassy_executor::task]
pub async fn morse_task(output: Output<'static>) {
    let profile = active_profile();
    let config = transmitter_config(profile);
    info!("Morse: profile {}, {}", profile, config);

    let transmitter: EspTransmitter =
        Transmitter::new(config, GpioSignalPin::new(output), HalDelay::new());

    // Empfänger Zeit zum Starten geben
    Timer::after(Duration::from_millis(STARTUP_DELAY_MS)).await;

    morse_loop(transmitter, profile).await;
}
