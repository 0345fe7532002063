/// Milliseconds since an arbitrary epoch, as handed in by the polling loop.
pub type Millis = u32;

/// Absolute time `duration` milliseconds after `now`.
///
/// Saturates at [`Millis::MAX`]: a deadline computed close to the counter
/// rollover is pinned to the end of the range instead of wrapping to a point
/// in the past, which would fire immediately.
#[inline]
pub const fn deadline(now: Millis, duration: u16) -> Millis {
    now.saturating_add(duration as Millis)
}
