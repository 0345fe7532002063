//! One-shot timed beep.

use crate::buzzer::BuzzerHal;
use crate::logging::debug;
use crate::time::{Millis, deadline};

/// Tracks the end of a single beep.
///
/// The pending state is explicit, so a zero-length beep started at time 0 is
/// still stopped by the next [`update`](Self::update).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BeepTimer {
    end_time: Option<Millis>,
}

impl BeepTimer {
    pub const fn new() -> Self {
        Self { end_time: None }
    }

    /// Forget any pending beep without touching the output.
    pub fn init(&mut self) {
        self.end_time = None;
    }

    /// Turn the output on now and schedule it off `duration` ms later.
    ///
    /// Calling this again before the previous beep ended moves the end time;
    /// beeps never stack.
    pub fn start_beep<H: BuzzerHal + ?Sized>(&mut self, now: Millis, duration: u16, hal: &mut H) {
        let end = deadline(now, duration);
        self.end_time = Some(end);
        debug!("beep: on at {} ms until {} ms", now, end);
        hal.start();
    }

    /// Stop the output once the pending beep has run out.
    pub fn update<H: BuzzerHal + ?Sized>(&mut self, now: Millis, hal: &mut H) {
        let Some(end) = self.end_time else {
            return;
        };

        if now >= end {
            self.end_time = None;
            debug!("beep: off at {} ms", now);
            hal.stop();
        }
    }

    /// Drop the pending beep, returning whether one was pending.
    pub(crate) fn cancel(&mut self) -> bool {
        self.end_time.take().is_some()
    }

    /// When the pending beep ends, if any.
    pub fn end_time(&self) -> Option<Millis> {
        self.end_time
    }

    pub fn is_pending(&self) -> bool {
        self.end_time.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buzzer::HwCall;
    use crate::testing::Recorder;

    #[test]
    fn test_start_beep_starts_immediately() {
        let mut hal = Recorder::default();
        let mut beep = BeepTimer::new();

        beep.start_beep(50, 100, &mut hal);

        assert_eq!(hal.calls, [HwCall::Start]);
        assert_eq!(beep.end_time(), Some(150));
    }

    #[test]
    fn test_stops_exactly_once_at_end_time() {
        let mut hal = Recorder::default();
        let mut beep = BeepTimer::new();
        beep.start_beep(0, 100, &mut hal);
        hal.take();

        for now in 0..100 {
            beep.update(now, &mut hal);
        }
        assert!(hal.calls.is_empty());
        assert!(beep.is_pending());

        beep.update(100, &mut hal);
        assert_eq!(hal.take(), [HwCall::Stop]);
        assert!(!beep.is_pending());

        for now in 100..300 {
            beep.update(now, &mut hal);
        }
        assert!(hal.calls.is_empty());
    }

    #[test]
    fn test_late_poll_still_stops() {
        let mut hal = Recorder::default();
        let mut beep = BeepTimer::new();
        beep.start_beep(10, 5, &mut hal);
        hal.take();

        beep.update(1000, &mut hal);
        assert_eq!(hal.calls, [HwCall::Stop]);
    }

    #[test]
    fn test_restart_extends_instead_of_stacking() {
        let mut hal = Recorder::default();
        let mut beep = BeepTimer::new();
        beep.start_beep(0, 100, &mut hal);
        beep.start_beep(80, 100, &mut hal);
        assert_eq!(hal.count(HwCall::Start), 2);
        hal.take();

        beep.update(100, &mut hal);
        assert!(hal.calls.is_empty());

        beep.update(180, &mut hal);
        assert_eq!(hal.take(), [HwCall::Stop]);

        beep.update(280, &mut hal);
        assert!(hal.calls.is_empty());
    }

    #[test]
    fn test_zero_length_beep_at_time_zero_is_stopped() {
        let mut hal = Recorder::default();
        let mut beep = BeepTimer::new();
        beep.start_beep(0, 0, &mut hal);

        beep.update(0, &mut hal);
        assert_eq!(hal.calls, [HwCall::Start, HwCall::Stop]);
    }

    #[test]
    fn test_idle_update_never_touches_output() {
        let mut hal = Recorder::default();
        let mut beep = BeepTimer::new();

        beep.update(0, &mut hal);
        beep.update(Millis::MAX, &mut hal);
        assert!(hal.calls.is_empty());
    }

    #[test]
    fn test_init_drops_pending_beep() {
        let mut hal = Recorder::default();
        let mut beep = BeepTimer::new();
        beep.start_beep(0, 100, &mut hal);
        hal.take();

        beep.init();
        beep.update(500, &mut hal);
        assert!(hal.calls.is_empty());
    }
}
