// Logging backend: `log` wins over `defmt` when both features are on,
// with neither the macros expand to nothing.

// Suffixed names: a bare `warn` would collide with the builtin attribute.
#[cfg(any(test, not(any(feature = "log", feature = "defmt"))))]
mod noop {
    macro_rules! trace_ {
        ($($arg:tt)*) => {{}};
    }
    macro_rules! debug_ {
        ($($arg:tt)*) => {{}};
    }
    macro_rules! warn_ {
        ($($arg:tt)*) => {{}};
    }

    pub(crate) use {debug_, trace_, warn_};
}

cfg_if::cfg_if! {
    if #[cfg(feature = "log")] {
        pub(crate) use log::{debug, trace, warn};
    } else if #[cfg(feature = "defmt")] {
        pub(crate) use defmt::{debug, trace, warn};
    } else {
        pub(crate) use noop::{debug_ as debug, trace_ as trace, warn_ as warn};
    }
}
