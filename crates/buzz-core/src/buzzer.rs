// Platform-agnostic buzzer output

/// The three output capabilities a platform has to provide.
///
/// Implementations drive the physical pin or latch and nothing else; the
/// driver never asks what state the output is in.
pub trait BuzzerHal {
    /// Assert the buzzer output.
    fn start(&mut self);
    /// Deassert the buzzer output.
    fn stop(&mut self);
    /// Flip the buzzer output.
    fn toggle(&mut self);
}

impl<T: BuzzerHal + ?Sized> BuzzerHal for &mut T {
    fn start(&mut self) {
        (**self).start();
    }

    fn stop(&mut self) {
        (**self).stop();
    }

    fn toggle(&mut self) {
        (**self).toggle();
    }
}

/// A single call made into a [`BuzzerHal`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HwCall {
    Start,
    Stop,
    Toggle,
}

impl HwCall {
    /// Short upper-case name, used in timelines.
    pub fn name(&self) -> &'static str {
        match self {
            HwCall::Start => "START",
            HwCall::Stop => "STOP",
            HwCall::Toggle => "TOGGLE",
        }
    }

    /// Perform this call on `hal`.
    pub fn apply<H: BuzzerHal + ?Sized>(self, hal: &mut H) {
        match self {
            HwCall::Start => hal.start(),
            HwCall::Stop => hal.stop(),
            HwCall::Toggle => hal.toggle(),
        }
    }
}
