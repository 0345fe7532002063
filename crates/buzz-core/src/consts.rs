/// Maximum number of on/off durations a [`Pattern`](crate::pattern::Pattern) holds.
pub const PATTERN_CAPACITY: usize = 64;

/// Number of hardware calls kept by a [`CallTrace`](crate::trace::CallTrace).
pub const TRACE_CAPACITY: usize = 32;
