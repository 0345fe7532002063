//! Test doubles shared by the unit tests.

use crate::buzzer::{BuzzerHal, HwCall};

/// Records every call it receives.
#[derive(Debug, Default)]
pub struct Recorder {
    pub calls: Vec<HwCall>,
}

impl Recorder {
    pub fn count(&self, call: HwCall) -> usize {
        self.calls.iter().filter(|c| **c == call).count()
    }

    /// Calls recorded since the last `take`.
    pub fn take(&mut self) -> Vec<HwCall> {
        core::mem::take(&mut self.calls)
    }
}

impl BuzzerHal for Recorder {
    fn start(&mut self) {
        self.calls.push(HwCall::Start);
    }

    fn stop(&mut self) {
        self.calls.push(HwCall::Stop);
    }

    fn toggle(&mut self) {
        self.calls.push(HwCall::Toggle);
    }
}
