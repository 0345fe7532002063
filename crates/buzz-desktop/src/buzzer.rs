use std::time::Duration;

use anyhow::Context;
use buzz_core::BuzzerHal;
use rodio::{OutputStream, Sink, Source};

const SAMPLE_RATE: u32 = 48000;
const AMPLITUDE: f32 = 0.15;

/// Endless square wave. Never reset: pausing the sink freezes it mid-cycle
/// and playing resumes from there, so gated beeps start without a click.
struct SquareWave {
    sample_rate: u32,
    /// Cycle fraction advanced per sample
    step: f32,
    /// Position within the current cycle, in `[0, 1)`
    phase: f32,
}

impl SquareWave {
    fn new(frequency_hz: u32, sample_rate: u32) -> Self {
        Self {
            sample_rate,
            step: frequency_hz as f32 / sample_rate as f32,
            phase: 0.0,
        }
    }
}

impl Iterator for SquareWave {
    type Item = f32;

    fn next(&mut self) -> Option<Self::Item> {
        let level = if self.phase < 0.5 { AMPLITUDE } else { -AMPLITUDE };
        self.phase = (self.phase + self.step).fract();
        Some(level)
    }
}

impl Source for SquareWave {
    fn current_frame_len(&self) -> Option<usize> {
        None
    }

    fn channels(&self) -> u16 {
        1
    }

    fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    fn total_duration(&self) -> Option<Duration> {
        None
    }
}

struct Audio {
    // Dropping the stream closes the device
    _stream: OutputStream,
    sink: Sink,
}

impl Audio {
    fn open(frequency_hz: u32) -> anyhow::Result<Self> {
        let (stream, handle) =
            OutputStream::try_default().context("opening the default audio device")?;
        let sink = Sink::try_new(&handle).context("creating an audio sink")?;
        sink.pause();
        sink.append(SquareWave::new(frequency_hz, SAMPLE_RATE));

        Ok(Self {
            _stream: stream,
            sink,
        })
    }
}

/// Buzzer output for the host: a level flag that gates a square wave on
/// the sound card. Without audio it only logs.
pub struct DesktopBuzzer {
    audio: Option<Audio>,
    on: bool,
}

impl DesktopBuzzer {
    pub fn new(frequency_hz: u32, audible: bool) -> Self {
        let audio = if audible {
            match Audio::open(frequency_hz) {
                Ok(audio) => Some(audio),
                Err(e) => {
                    log::warn!("audio unavailable, running silent: {:#}", e);
                    None
                }
            }
        } else {
            None
        };

        Self { audio, on: false }
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    fn set(&mut self, on: bool) {
        self.on = on;
        if let Some(audio) = &self.audio {
            if on {
                audio.sink.play();
            } else {
                audio.sink.pause();
            }
        }
        log::info!("buzzer {}", if on { "ON" } else { "off" });
    }
}

impl BuzzerHal for DesktopBuzzer {
    fn start(&mut self) {
        self.set(true);
    }

    fn stop(&mut self) {
        self.set(false);
    }

    fn toggle(&mut self) {
        self.set(!self.on);
    }
}
