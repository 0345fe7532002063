//! Scheduled on/off patterns played by toggling the output.

use heapless::Vec;

use crate::buzzer::BuzzerHal;
use crate::consts::PATTERN_CAPACITY;
use crate::logging::{debug, trace};
use crate::time::{Millis, deadline};

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PatternError {
    #[error("pattern has {len} durations but only {capacity} fit")]
    TooLong { len: usize, capacity: usize },
}

/// Alternating ON/OFF durations in milliseconds, starting with ON, plus the
/// absolute time playback should begin.
///
/// The durations are copied in, so the source slice may be a temporary.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Pattern {
    durations: Vec<u16, PATTERN_CAPACITY>,
    start_time: Millis,
}

impl Pattern {
    pub fn new(durations: &[u16], start_time: Millis) -> Result<Self, PatternError> {
        let durations = Vec::from_slice(durations).map_err(|_| PatternError::TooLong {
            len: durations.len(),
            capacity: PATTERN_CAPACITY,
        })?;

        Ok(Self {
            durations,
            start_time,
        })
    }

    /// A pattern with no durations; it never activates.
    pub const fn empty() -> Self {
        Self {
            durations: Vec::new(),
            start_time: 0,
        }
    }

    pub fn durations(&self) -> &[u16] {
        &self.durations
    }

    pub fn start_time(&self) -> Millis {
        self.start_time
    }

    pub fn len(&self) -> usize {
        self.durations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.durations.is_empty()
    }

    /// Earliest time the final stop can happen, if every poll is on time.
    pub fn end_time(&self) -> Millis {
        self.durations
            .iter()
            .fold(self.start_time, |at, &duration| deadline(at, duration))
    }
}

/// Where a [`PatternPlayer`] is in its life cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PatternState {
    /// Nothing to play.
    Idle,
    /// Waiting for the start time.
    Armed,
    /// Toggling through the durations.
    Playing,
}

/// Plays one [`Pattern`] against a polled clock.
#[derive(Clone, Debug, Default)]
pub struct PatternPlayer {
    pattern: Pattern,
    current_index: usize,
    next_toggle_time: Millis,
    active: bool,
}

impl PatternPlayer {
    pub const fn new() -> Self {
        Self {
            pattern: Pattern::empty(),
            current_index: 0,
            next_toggle_time: 0,
            active: false,
        }
    }

    /// Drop any pattern without touching the output.
    pub fn init(&mut self) {
        *self = Self::new();
    }

    /// Replace whatever is armed or playing with `pattern`.
    ///
    /// Progress of the previous pattern is discarded. The output is left
    /// alone until the next [`update_pattern`](Self::update_pattern).
    pub fn start_pattern(&mut self, pattern: Pattern) {
        debug!(
            "pattern: {} steps armed for {} ms",
            pattern.len(),
            pattern.start_time()
        );
        *self = Self {
            pattern,
            ..Self::new()
        };
    }

    /// Advance playback to `now`.
    ///
    /// The pattern activates on the first poll at or after its start time and
    /// toggles in that same poll. Each following deadline is measured from the
    /// poll that performed the toggle, so late polls shift the rest of the
    /// pattern. Once every duration has elapsed the output is stopped and the
    /// pattern is retired; it has to be started again to repeat.
    pub fn update_pattern<H: BuzzerHal + ?Sized>(&mut self, now: Millis, hal: &mut H) {
        if self.pattern.is_empty() {
            return;
        }

        if !self.active {
            if now < self.pattern.start_time() {
                return;
            }
            self.next_toggle_time = now;
            self.current_index = 0;
            self.active = true;
            debug!("pattern: playing from {} ms", now);
        }

        if now < self.next_toggle_time {
            return;
        }

        match self.pattern.durations().get(self.current_index) {
            Some(&duration) => {
                hal.toggle();
                self.next_toggle_time = deadline(now, duration);
                self.current_index += 1;
                trace!(
                    "pattern: step {} at {} ms, next at {} ms",
                    self.current_index,
                    now,
                    self.next_toggle_time
                );
            }
            None => {
                self.active = false;
                self.pattern = Pattern::empty();
                debug!("pattern: finished at {} ms", now);
                hal.stop();
            }
        }
    }

    /// Drop the current pattern, returning whether it was armed or playing.
    pub(crate) fn cancel(&mut self) -> bool {
        let was_live = self.state() != PatternState::Idle;
        self.init();
        was_live
    }

    pub fn state(&self) -> PatternState {
        if self.pattern.is_empty() {
            PatternState::Idle
        } else if self.active {
            PatternState::Playing
        } else {
            PatternState::Armed
        }
    }

    /// The pattern being played, empty when idle.
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Index of the next duration to consume.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Absolute time of the next toggle or final stop while playing.
    pub fn next_toggle_time(&self) -> Option<Millis> {
        self.active.then_some(self.next_toggle_time)
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}
