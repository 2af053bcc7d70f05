//! Runtime configuration.

use std::path::PathBuf;
use std::time::Duration;

use crate::types::TICK_MS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Tick period in milliseconds (at least 1).
    pub tick_ms: u32,
    /// Log file; logging is off when unset.
    pub log_path: Option<PathBuf>,
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tick_ms: TICK_MS,
            log_path: None,
            log_filter: "info".to_string(),
        }
    }
}

impl GameConfig {
    /// Create from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from any key lookup. Missing or invalid values keep defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let tick_ms = lookup("PONG_TICK_MS")
            .and_then(|s| s.trim().parse::<u32>().ok())
            .filter(|&ms| ms >= 1)
            .unwrap_or(defaults.tick_ms);

        let log_path = lookup("PONG_LOG_PATH")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        let log_filter = lookup("PONG_LOG")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.log_filter);

        Self {
            tick_ms,
            log_path,
            log_filter,
        }
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = GameConfig::from_lookup(lookup(&[]));
        assert_eq!(config, GameConfig::default());
        assert_eq!(config.tick(), Duration::from_millis(50));
    }

    #[test]
    fn reads_all_keys() {
        let config = GameConfig::from_lookup(lookup(&[
            ("PONG_TICK_MS", "16"),
            ("PONG_LOG_PATH", "/tmp/pong.log"),
            ("PONG_LOG", "tui_pong=trace"),
        ]));
        assert_eq!(config.tick_ms, 16);
        assert_eq!(config.log_path, Some(PathBuf::from("/tmp/pong.log")));
        assert_eq!(config.log_filter, "tui_pong=trace");
    }

    #[test]
    fn invalid_values_fall_back() {
        let config = GameConfig::from_lookup(lookup(&[
            ("PONG_TICK_MS", "0"),
            ("PONG_LOG_PATH", "  "),
            ("PONG_LOG", ""),
        ]));
        assert_eq!(config, GameConfig::default());

        let config = GameConfig::from_lookup(lookup(&[("PONG_TICK_MS", "fast")]));
        assert_eq!(config.tick_ms, 50);
    }
}
