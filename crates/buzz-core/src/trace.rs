//! Call trace - ring buffer of timestamped hardware calls
//!
//! Keeps the most recent calls made into a buzzer output so a timeline can
//! be printed or shown on screen after the fact. No allocation.

use heapless::Deque;

use crate::buzzer::{BuzzerHal, HwCall};
use crate::consts::TRACE_CAPACITY;
use crate::time::Millis;

/// A single recorded call
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TraceEntry {
    /// Tick at which the call was made
    pub at: Millis,
    pub call: HwCall,
}

/// Ring buffer of trace entries
///
/// Uses a fixed-size deque; once full the oldest entry is overwritten.
pub struct CallTrace {
    entries: Deque<TraceEntry, TRACE_CAPACITY>,
    /// Entries pushed out since the last clear
    overwritten: u32,
    enabled: bool,
}

impl CallTrace {
    pub const fn new() -> Self {
        Self {
            entries: Deque::new(),
            overwritten: 0,
            enabled: true,
        }
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Record a call, removing the oldest entry if full
    pub fn push(&mut self, at: Millis, call: HwCall) {
        if !self.enabled {
            return;
        }

        if self.entries.is_full() {
            self.entries.pop_front();
            self.overwritten = self.overwritten.saturating_add(1);
        }

        // Cannot fail, room was made above
        let _ = self.entries.push_back(TraceEntry { at, call });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries lost to overwriting
    pub fn overwritten(&self) -> u32 {
        self.overwritten
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.overwritten = 0;
    }

    /// Oldest first
    pub fn iter(&self) -> impl Iterator<Item = &TraceEntry> {
        self.entries.iter()
    }

    /// The most recent `count` entries, newest first
    pub fn recent(&self, count: usize) -> impl Iterator<Item = &TraceEntry> {
        self.entries.iter().rev().take(count)
    }

    /// Entry by index, 0 is the oldest
    pub fn get(&self, index: usize) -> Option<&TraceEntry> {
        self.entries.iter().nth(index)
    }

    pub fn count(&self, call: HwCall) -> usize {
        self.entries.iter().filter(|entry| entry.call == call).count()
    }
}

impl Default for CallTrace {
    fn default() -> Self {
        Self::new()
    }
}

/// Wraps an output and records every call into a [`CallTrace`].
///
/// Output calls carry no time, so the polling loop stamps the wrapper with
/// [`set_now`](Self::set_now) before each poll.
pub struct TracingHal<H> {
    inner: H,
    trace: CallTrace,
    now: Millis,
}

impl<H: BuzzerHal> TracingHal<H> {
    pub fn new(inner: H) -> Self {
        Self {
            inner,
            trace: CallTrace::new(),
            now: 0,
        }
    }

    pub fn set_now(&mut self, now: Millis) {
        self.now = now;
    }

    pub fn trace(&self) -> &CallTrace {
        &self.trace
    }

    pub fn trace_mut(&mut self) -> &mut CallTrace {
        &mut self.trace
    }

    pub fn inner(&self) -> &H {
        &self.inner
    }

    pub fn inner_mut(&mut self) -> &mut H {
        &mut self.inner
    }

    pub fn into_inner(self) -> H {
        self.inner
    }

    fn record(&mut self, call: HwCall) {
        self.trace.push(self.now, call);
        call.apply(&mut self.inner);
    }
}

impl<H: BuzzerHal> BuzzerHal for TracingHal<H> {
    fn start(&mut self) {
        self.record(HwCall::Start);
    }

    fn stop(&mut self) {
        self.record(HwCall::Stop);
    }

    fn toggle(&mut self) {
        self.record(HwCall::Toggle);
    }
}
