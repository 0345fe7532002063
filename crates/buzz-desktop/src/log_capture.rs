//! Console logger for the simulator.
//!
//! Implements `log::Log` directly and prefixes every line with the simulated
//! tick the polling loop last reported, so driver logs line up with the
//! timeline printed at the end of a run.

use std::sync::atomic::{AtomicU32, Ordering};

use buzz_core::Millis;
use log::{Level, LevelFilter, Log, Metadata, Record};

/// Tick reported by the polling loop.
static TICK: AtomicU32 = AtomicU32::new(0);

pub struct TickLogger;

impl Log for TickLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = format_line(
            TICK.load(Ordering::Relaxed),
            record.level(),
            record.target(),
            record.args(),
        );
        if record.level() <= Level::Warn {
            eprintln!("{line}");
        } else {
            println!("{line}");
        }
    }

    fn flush(&self) {}
}

static LOGGER: TickLogger = TickLogger;

/// Install the logger. A second call keeps the first logger but still
/// applies `max_level`.
pub fn init(max_level: LevelFilter) {
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(max_level);
}

/// Report the current tick; later log lines carry it.
pub fn set_tick(now: Millis) {
    TICK.store(now, Ordering::Relaxed);
}

fn format_line(tick: Millis, level: Level, target: &str, args: &std::fmt::Arguments) -> String {
    let level_str = match level {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    };
    format!("[{tick:>6} ms] [{level_str:<5}] {target}: {args}")
}
