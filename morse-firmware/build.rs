// Build-Script: Wird vor dem Kompilieren ausgeführt
// Reicht die Morse-Konfiguration weiter und konfiguriert den Linker

fn main() {
    // Lade .env file für die Morse-Konfiguration
    // Ohne .env gelten die Defaults aus config.rs (Generator-Profil)
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("ℹ️  .env file nicht gefunden: {}", e);
        eprintln!("   Nutze Defaults (MORSE_PROFILE=generator)");
    }

    // Gebe die optionalen Werte an den Rust-Compiler weiter
    // Sie werden zur Compile-Zeit über option_env!() eingebacken
    for key in ["MORSE_PROFILE", "MORSE_UNIT_MS"] {
        println!("cargo:rerun-if-env-changed={}", key);
        if let Ok(value) = std::env::var(key) {
            println!("cargo:rustc-env={}={}", key, value);
        }
    }
    println!("cargo:rerun-if-changed=.env");

    // Registriere hilfsbereiten Error-Handler für Linker-Fehler
    linker_be_nice();

    // Füge Linker-Skripte hinzu:

    // 1. defmt.x - defmt Logging-Support
    println!("cargo:rustc-link-arg=-Tdefmt.x");

    // 2. linkall.x - ESP32 Memory-Layout
    //    WICHTIG: Muss als LETZTES kommen
    println!("cargo:rustc-link-arg=-Tlinkall.x");
}

// Error-Handler: Zeigt Tipps bei Linker-Fehlern
// Wird vom Linker als "--error-handling-script" aufgerufen
fn linker_be_nice() {
    let args: Vec<String> = std::env::args().collect();

    if let [_, kind, what, ..] = args.as_slice() {
        if kind == "undefined-symbol" {
            if what.starts_with("_defmt_") {
                eprintln!();
                eprintln!(
                    "💡 `defmt` not found - make sure `defmt.x` is added as a linker script and esp-println has the `defmt-espflash` feature"
                );
                eprintln!();
            } else if what == "_stack_start" {
                eprintln!();
                eprintln!("💡 Is the linker script `linkall.x` missing?");
                eprintln!();
            } else if what.starts_with("esp_rtos_") {
                eprintln!();
                eprintln!("💡 `esp-rtos` was not started - call `esp_rtos::start()` in main");
                eprintln!();
            }
            std::process::exit(0);
        }
        std::process::exit(1);
    }

    if let Ok(exe) = std::env::current_exe() {
        println!(
            "cargo:rustc-link-arg=--error-handling-script={}",
            exe.display()
        );
    }
}
