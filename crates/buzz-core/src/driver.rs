use crate::beep::BeepTimer;
use crate::buzzer::BuzzerHal;
use crate::logging::debug;
use crate::pattern::{Pattern, PatternPlayer, PatternState};
use crate::time::Millis;

/// Owns the buzzer output and both timing state machines.
///
/// The beep timer and the pattern player share the output but are otherwise
/// independent. When both are live their calls interleave on the same pin;
/// nothing arbitrates between them.
pub struct BuzzerDriver<H: BuzzerHal> {
    hal: H,
    beep: BeepTimer,
    pattern: PatternPlayer,
}

impl<H: BuzzerHal> BuzzerDriver<H> {
    pub fn new(hal: H) -> Self {
        Self {
            hal,
            beep: BeepTimer::new(),
            pattern: PatternPlayer::new(),
        }
    }

    /// Reset both state machines. The output is not touched.
    pub fn init(&mut self) {
        self.beep.init();
        self.pattern.init();
    }

    /// Start a beep now that ends `duration_ms` later.
    pub fn start_beep(&mut self, now: Millis, duration_ms: u16) {
        self.beep.start_beep(now, duration_ms, &mut self.hal);
    }

    /// Advance the beep timer. Call on every tick.
    pub fn update(&mut self, now: Millis) {
        self.beep.update(now, &mut self.hal);
    }

    /// Arm `pattern`, replacing any pattern already armed or playing.
    pub fn start_pattern(&mut self, pattern: Pattern) {
        self.pattern.start_pattern(pattern);
    }

    /// Advance the pattern player. Call on every tick.
    pub fn update_pattern(&mut self, now: Millis) {
        self.pattern.update_pattern(now, &mut self.hal);
    }

    /// Both per-tick updates, beep first.
    pub fn poll(&mut self, now: Millis) {
        self.update(now);
        self.update_pattern(now);
    }

    /// Cancel the pending beep and any armed or playing pattern.
    ///
    /// The output gets a single stop if anything was cancelled.
    pub fn silence(&mut self) {
        let beeping = self.beep.cancel();
        let patterned = self.pattern.cancel();
        if beeping || patterned {
            debug!("buzzer: silenced");
            self.hal.stop();
        }
    }

    pub fn is_beeping(&self) -> bool {
        self.beep.is_pending()
    }

    pub fn pattern_state(&self) -> PatternState {
        self.pattern.state()
    }

    /// Nothing pending: further polls will not touch the output.
    pub fn is_idle(&self) -> bool {
        !self.is_beeping() && self.pattern_state() == PatternState::Idle
    }

    pub fn beep(&self) -> &BeepTimer {
        &self.beep
    }

    pub fn pattern(&self) -> &PatternPlayer {
        &self.pattern
    }

    pub fn hal(&self) -> &H {
        &self.hal
    }

    pub fn hal_mut(&mut self) -> &mut H {
        &mut self.hal
    }

    /// Give the output back.
    pub fn release(self) -> H {
        self.hal
    }
}
