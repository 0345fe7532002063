#![cfg_attr(not(test), no_std)]

//! Non-blocking buzzer driver.
//!
//! A [`BuzzerDriver`] owns the platform output ([`BuzzerHal`]) plus two
//! independent poll-driven state machines: a one-shot beep timer and a
//! pattern player. The caller owns the millisecond counter and passes it to
//! every operation; nothing here reads a clock, sleeps or spawns work.
//!
//! ```
//! use buzz_core::{BuzzerDriver, BuzzerHal, Pattern};
//!
//! struct Latch(bool);
//!
//! impl BuzzerHal for Latch {
//!     fn start(&mut self) { self.0 = true; }
//!     fn stop(&mut self) { self.0 = false; }
//!     fn toggle(&mut self) { self.0 = !self.0; }
//! }
//!
//! let mut driver = BuzzerDriver::new(Latch(false));
//! driver.start_beep(0, 100);
//! driver.start_pattern(Pattern::new(&[200, 100, 200], 1000).unwrap());
//!
//! for now in 0..2000 {
//!     driver.update(now);
//!     driver.update_pattern(now);
//! }
//! assert!(driver.is_idle());
//! assert!(!driver.hal().0);
//! ```

pub mod beep;
pub mod buzzer;
pub mod consts;
pub mod driver;
pub mod pattern;
pub mod pin;
pub mod time;
pub mod trace;

mod logging;

#[cfg(test)]
mod testing;

pub use beep::BeepTimer;
pub use buzzer::{BuzzerHal, HwCall};
pub use driver::BuzzerDriver;
pub use pattern::{Pattern, PatternError, PatternPlayer, PatternState};
pub use pin::PinBuzzer;
pub use time::Millis;
pub use trace::{CallTrace, TraceEntry, TracingHal};
