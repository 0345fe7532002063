use std::time::Duration;

use anyhow::Context;
use log::LevelFilter;

/// Simulator settings, read from `BUZZ_*` environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    /// `BUZZ_LOG`
    pub log_level: LevelFilter,
    /// `BUZZ_TONE_HZ`
    pub tone_hz: u32,
    /// `BUZZ_MUTE`, set to anything
    pub mute: bool,
    /// `BUZZ_TICK_MS`
    pub tick: Duration,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            log_level: LevelFilter::Debug,
            tone_hz: 2700,
            mute: false,
            tick: Duration::from_millis(1),
        }
    }
}

impl SimConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut config = Self::default();

        if let Some(raw) = lookup("BUZZ_LOG") {
            config.log_level = raw
                .trim()
                .parse()
                .with_context(|| format!("BUZZ_LOG: unknown level {raw:?}"))?;
        }
        if let Some(raw) = lookup("BUZZ_TONE_HZ") {
            config.tone_hz = raw
                .trim()
                .parse()
                .with_context(|| format!("BUZZ_TONE_HZ: not a frequency {raw:?}"))?;
            anyhow::ensure!(config.tone_hz > 0, "BUZZ_TONE_HZ must be above zero");
        }
        if let Some(raw) = lookup("BUZZ_TICK_MS") {
            let ms: u64 = raw
                .trim()
                .parse()
                .with_context(|| format!("BUZZ_TICK_MS: not a number {raw:?}"))?;
            anyhow::ensure!(ms > 0, "BUZZ_TICK_MS must be above zero");
            config.tick = Duration::from_millis(ms);
        }
        config.mute = lookup("BUZZ_MUTE").is_some();

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn parse(vars: &[(&str, &str)]) -> anyhow::Result<SimConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        SimConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_without_variables() {
        assert_eq!(parse(&[]).unwrap(), SimConfig::default());
    }

    #[test]
    fn test_reads_every_variable() {
        let config = parse(&[
            ("BUZZ_LOG", "trace"),
            ("BUZZ_TONE_HZ", " 4000 "),
            ("BUZZ_MUTE", ""),
            ("BUZZ_TICK_MS", "5"),
        ])
        .unwrap();

        assert_eq!(config.log_level, LevelFilter::Trace);
        assert_eq!(config.tone_hz, 4000);
        assert!(config.mute);
        assert_eq!(config.tick, Duration::from_millis(5));
    }

    #[test]
    fn test_rejects_malformed_values() {
        assert!(parse(&[("BUZZ_LOG", "loud")]).is_err());
        assert!(parse(&[("BUZZ_TONE_HZ", "0")]).is_err());
        assert!(parse(&[("BUZZ_TICK_MS", "fast")]).is_err());
        assert!(parse(&[("BUZZ_TICK_MS", "0")]).is_err());
    }
}
