//! Runtime configuration loaded from the environment.
//!
//! All settings have sensible defaults so the widget runs with no setup at
//! all. A `.env` file next to the binary is honored via dotenv.
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.3.0
//!
//! ## Changelog
//! - 1.1.0: Added VIVID_WELCOME switch for the returning-visitor toast
//! - 1.0.0: Initial creation with database path and tick rate

use log::warn;
use std::path::PathBuf;
use std::time::Duration;

/// Default SQLite database path (relative to the working directory)
pub const DEFAULT_DB_PATH: &str = "vivid.db";

/// Default UI tick interval in milliseconds
pub const DEFAULT_TICK_MS: u64 = 50;

/// Upper bound for the tick interval. Anything slower than this would make
/// the 200ms toast fade invisible.
pub const MAX_TICK_MS: u64 = 200;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path of the SQLite settings database
    pub db_path: PathBuf,
    /// UI tick interval in milliseconds
    pub tick_ms: u64,
    /// Whether to greet a returning visitor whose reminder is still saved
    pub welcome_toast: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            tick_ms: DEFAULT_TICK_MS,
            welcome_toast: true,
        }
    }
}

impl Config {
    /// Loads configuration from the process environment.
    ///
    /// Reads `VIVID_DB_PATH`, `VIVID_TICK_MS`, and `VIVID_WELCOME`. Invalid
    /// values are logged and replaced by their defaults; loading never fails.
    pub fn load() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable lookup.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Config::default();

        let db_path = lookup("VIVID_DB_PATH")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.db_path);

        let tick_ms = match lookup("VIVID_TICK_MS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(ms) if (1..=MAX_TICK_MS).contains(&ms) => ms,
                Ok(ms) => {
                    warn!("VIVID_TICK_MS={} out of range (1-{}), using {}", ms, MAX_TICK_MS, DEFAULT_TICK_MS);
                    DEFAULT_TICK_MS
                }
                Err(_) => {
                    warn!("VIVID_TICK_MS={:?} is not a number, using {}", raw, DEFAULT_TICK_MS);
                    DEFAULT_TICK_MS
                }
            },
            None => DEFAULT_TICK_MS,
        };

        let welcome_toast = match lookup("VIVID_WELCOME") {
            Some(raw) => match parse_bool(&raw) {
                Some(v) => v,
                None => {
                    warn!("VIVID_WELCOME={:?} is not a boolean, using true", raw);
                    true
                }
            },
            None => true,
        };

        Config {
            db_path,
            tick_ms,
            welcome_toast,
        }
    }

    /// The tick interval as a [`Duration`]
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

/// Parse common boolean spellings ("1"/"0", "true"/"false", "yes"/"no", "on"/"off")
fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config, Config::default());
        assert_eq!(config.db_path, PathBuf::from(DEFAULT_DB_PATH));
        assert_eq!(config.tick_ms, DEFAULT_TICK_MS);
        assert!(config.welcome_toast);
    }

    #[test]
    fn test_all_values_set() {
        let config = Config::from_lookup(lookup_from(&[
            ("VIVID_DB_PATH", "/tmp/promo.db"),
            ("VIVID_TICK_MS", "100"),
            ("VIVID_WELCOME", "off"),
        ]));
        assert_eq!(config.db_path, PathBuf::from("/tmp/promo.db"));
        assert_eq!(config.tick_ms, 100);
        assert!(!config.welcome_toast);
    }

    #[test]
    fn test_invalid_tick_falls_back() {
        let config = Config::from_lookup(lookup_from(&[("VIVID_TICK_MS", "fast")]));
        assert_eq!(config.tick_ms, DEFAULT_TICK_MS);
    }

    #[test]
    fn test_out_of_range_tick_falls_back() {
        let config = Config::from_lookup(lookup_from(&[("VIVID_TICK_MS", "0")]));
        assert_eq!(config.tick_ms, DEFAULT_TICK_MS);

        let config = Config::from_lookup(lookup_from(&[("VIVID_TICK_MS", "5000")]));
        assert_eq!(config.tick_ms, DEFAULT_TICK_MS);
    }

    #[test]
    fn test_invalid_welcome_falls_back() {
        let config = Config::from_lookup(lookup_from(&[("VIVID_WELCOME", "maybe")]));
        assert!(config.welcome_toast);
    }

    #[test]
    fn test_empty_db_path_uses_default() {
        let config = Config::from_lookup(lookup_from(&[("VIVID_DB_PATH", "  ")]));
        assert_eq!(config.db_path, PathBuf::from(DEFAULT_DB_PATH));
    }

    #[test]
    fn test_parse_bool_spellings() {
        for raw in ["1", "true", "YES", "On"] {
            assert_eq!(parse_bool(raw), Some(true), "{raw}");
        }
        for raw in ["0", "false", "NO", "Off"] {
            assert_eq!(parse_bool(raw), Some(false), "{raw}");
        }
        assert_eq!(parse_bool("2"), None);
        assert_eq!(parse_bool(""), None);
    }
}
