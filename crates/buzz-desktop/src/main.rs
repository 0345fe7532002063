use std::thread;
use std::time::Instant;

use anyhow::Context;
use buzz_core::{BuzzerDriver, Millis, Pattern, TracingHal};

use crate::buzzer::DesktopBuzzer;
use crate::config::SimConfig;

mod buzzer;
mod config;
mod log_capture;

const BEEP_MS: u16 = 100;
// --_--_-- after a one second pause
const PATTERN: [u16; 5] = [200, 100, 200, 100, 200];
const PATTERN_DELAY_MS: Millis = 1000;

fn main() -> anyhow::Result<()> {
    let config = SimConfig::from_env()?;
    log_capture::init(config.log_level);
    log::info!("buzz-desktop starting: {:?}", config);

    let output = DesktopBuzzer::new(config.tone_hz, !config.mute);
    let mut driver = BuzzerDriver::new(TracingHal::new(output));

    let started = Instant::now();
    let mut counter: Millis = 0;

    driver.start_beep(counter, BEEP_MS);
    let pattern = Pattern::new(&PATTERN, counter + PATTERN_DELAY_MS)
        .context("building the demo pattern")?;
    log::info!("pattern should end at {} ms", pattern.end_time());
    driver.start_pattern(pattern);

    while !driver.is_idle() {
        thread::sleep(config.tick);
        counter = Millis::try_from(started.elapsed().as_millis()).unwrap_or(Millis::MAX);

        log_capture::set_tick(counter);
        driver.hal_mut().set_now(counter);
        driver.update(counter);
        driver.update_pattern(counter);
    }

    let hal = driver.release();
    println!("timeline:");
    for entry in hal.trace().iter() {
        println!("  {:>6} ms  {}", entry.at, entry.call.name());
    }
    if hal.trace().overwritten() > 0 {
        println!("  ({} earlier calls not kept)", hal.trace().overwritten());
    }
    if hal.inner().is_on() {
        log::warn!("buzzer left on after the demo");
    }

    Ok(())
}
