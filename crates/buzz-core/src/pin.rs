//! GPIO-backed buzzer output.

use embedded_hal::digital::OutputPin;

use crate::buzzer::BuzzerHal;
use crate::logging::warn;

/// Drives an active buzzer from a single push-pull pin.
///
/// The level is tracked here so toggling only needs [`OutputPin`]. Pin errors
/// are logged and dropped; the last level that was written successfully is
/// kept.
pub struct PinBuzzer<P> {
    pin: P,
    high: bool,
}

impl<P: OutputPin> PinBuzzer<P> {
    /// Takes the pin and drives it low.
    pub fn new(pin: P) -> Self {
        let mut buzzer = Self { pin, high: false };
        buzzer.write(false);
        buzzer
    }

    pub fn is_high(&self) -> bool {
        self.high
    }

    pub fn release(self) -> P {
        self.pin
    }

    fn write(&mut self, high: bool) {
        let result = if high {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };

        match result {
            Ok(()) => self.high = high,
            Err(_) => warn!("buzzer pin write failed"),
        }
    }
}

impl<P: OutputPin> BuzzerHal for PinBuzzer<P> {
    fn start(&mut self) {
        self.write(true);
    }

    fn stop(&mut self) {
        self.write(false);
    }

    fn toggle(&mut self) {
        self.write(!self.high);
    }
}
