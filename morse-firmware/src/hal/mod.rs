// Hardware Abstraction Layer (HAL) Module
//
// Dieses Modul implementiert die Traits aus morse-core für die
// ESP32-C6 Hardware (GPIO Output + blockierender Delay).

pub mod signal_pin;

pub use signal_pin::{GpioSignalPin, HalDelay};
