//! Site configuration.
//!
//! Defaults ship in `assets/config.env`. On native targets a `.env` file and
//! the process environment override them.

use crate::reveal::DEFAULT_THRESHOLD;
use crate::types::ThemeMode;
use once_cell::sync::OnceCell;
use std::time::Duration;

/// Bundled defaults, compiled in so the web build needs no filesystem.
const BUNDLED_CONFIG: &str = include_str!("../assets/config.env");

pub const REPLY_DELAY_KEY: &str = "PORTFOLIO_REPLY_DELAY_MS";
pub const REVEAL_THRESHOLD_KEY: &str = "PORTFOLIO_REVEAL_THRESHOLD";
pub const THEME_KEY: &str = "PORTFOLIO_THEME";
pub const LOG_KEY: &str = "PORTFOLIO_LOG";

#[cfg(not(target_arch = "wasm32"))]
const KEYS: [&str; 4] = [REPLY_DELAY_KEY, REVEAL_THRESHOLD_KEY, THEME_KEY, LOG_KEY];

static CONFIG: OnceCell<SiteConfig> = OnceCell::new();

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("{key}: expected a whole number of milliseconds, got {value:?}")]
    InvalidDelay { key: String, value: String },

    #[error("{key}: expected a fraction in (0, 1], got {value:?}")]
    InvalidThreshold { key: String, value: String },

    #[error("{key}: unknown theme {value:?} (expected light or dark)")]
    UnknownTheme { key: String, value: String },
}

#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub reply_delay: Duration,
    pub reveal_threshold: f64,
    pub theme: ThemeMode,
    pub log_filter: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            reply_delay: Duration::from_millis(1500),
            reveal_threshold: DEFAULT_THRESHOLD,
            theme: ThemeMode::Light,
            log_filter: "info".to_string(),
        }
    }
}

impl SiteConfig {
    /// Applies one `KEY=VALUE` setting. Unknown keys are ignored.
    pub fn apply(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let value = value.trim();
        match key {
            REPLY_DELAY_KEY => {
                let millis = value.parse::<u64>().map_err(|_| ConfigError::InvalidDelay {
                    key: key.to_string(),
                    value: value.to_string(),
                })?;
                self.reply_delay = Duration::from_millis(millis);
            }
            REVEAL_THRESHOLD_KEY => {
                let threshold = value
                    .parse::<f64>()
                    .ok()
                    .filter(|t| *t > 0.0 && *t <= 1.0)
                    .ok_or_else(|| ConfigError::InvalidThreshold {
                        key: key.to_string(),
                        value: value.to_string(),
                    })?;
                self.reveal_threshold = threshold;
            }
            THEME_KEY => {
                self.theme = ThemeMode::parse(value).ok_or_else(|| ConfigError::UnknownTheme {
                    key: key.to_string(),
                    value: value.to_string(),
                })?;
            }
            LOG_KEY if !value.is_empty() => self.log_filter = value.to_string(),
            _ => {}
        }
        Ok(())
    }

    /// Applies every line of an env-style file on top of `self`.
    ///
    /// Invalid values are skipped and returned; the lines after them still
    /// apply.
    pub fn merge_env_file(&mut self, source: &str) -> Vec<ConfigError> {
        parse_env_lines(source)
            .filter_map(|(key, value)| self.apply(key, value).err())
            .collect()
    }

    /// Most verbose level named in the log filter, for loggers that take a
    /// single level. Falls back to `INFO`.
    pub fn log_level(&self) -> tracing::Level {
        self.log_filter
            .split(',')
            .filter_map(|directive| {
                let level = directive.rsplit_once('=').map_or(directive, |(_, level)| level);
                level.trim().parse::<tracing::Level>().ok()
            })
            .max()
            .unwrap_or(tracing::Level::INFO)
    }

    /// Bundled defaults plus any overrides from `.env` and the environment.
    ///
    /// Invalid values are skipped and returned so the caller can report
    /// them once logging is up.
    pub fn load() -> (Self, Vec<ConfigError>) {
        let mut config = Self::default();
        let mut rejected = config.merge_env_file(BUNDLED_CONFIG);

        #[cfg(not(target_arch = "wasm32"))]
        {
            // A missing .env is the normal case.
            let _ = dotenvy::dotenv();
            for key in KEYS {
                if let Ok(value) = std::env::var(key)
                    && let Err(err) = config.apply(key, &value)
                {
                    rejected.push(err);
                }
            }
        }

        (config, rejected)
    }
}

/// Yields `(key, value)` pairs from `KEY=VALUE` lines, skipping blanks and
/// `#` comments.
pub fn parse_env_lines(source: &str) -> impl Iterator<Item = (&str, &str)> {
    source.lines().filter_map(|line| {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return None;
        }
        let (key, value) = line.split_once('=')?;
        Some((key.trim(), value.trim().trim_matches('"')))
    })
}

/// Makes `config` the one returned by [`current`]. Only the first call wins.
pub fn install(config: SiteConfig) {
    if CONFIG.set(config).is_err() {
        tracing::warn!("site config already installed; keeping the first one");
    }
}

pub fn current() -> &'static SiteConfig {
    CONFIG.get_or_init(SiteConfig::default)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_env_file(source: &str) -> (SiteConfig, Vec<ConfigError>) {
        let mut config = SiteConfig::default();
        let rejected = config.merge_env_file(source);
        (config, rejected)
    }

    #[test]
    fn test_defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.reply_delay, Duration::from_millis(1500));
        assert_eq!(config.reveal_threshold, 0.1);
        assert_eq!(config.theme, ThemeMode::Light);
        assert_eq!(config.log_level(), tracing::Level::INFO);
    }

    #[test]
    fn test_bundled_config_is_valid() {
        let (config, rejected) = from_env_file(BUNDLED_CONFIG);
        assert!(rejected.is_empty(), "{rejected:?}");
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_parse_env_lines_skips_comments_and_blanks() {
        let source = "# comment\n\nA=1\n  B = two  \nnot a pair\nC=\"quoted\"\n";
        let pairs: Vec<_> = parse_env_lines(source).collect();
        assert_eq!(pairs, vec![("A", "1"), ("B", "two"), ("C", "quoted")]);
    }

    #[test]
    fn test_overrides_apply() {
        let (config, rejected) = from_env_file(
            "PORTFOLIO_REPLY_DELAY_MS=250\nPORTFOLIO_REVEAL_THRESHOLD=0.5\nPORTFOLIO_THEME=Dark\nPORTFOLIO_LOG=portfolio=debug\n",
        );
        assert!(rejected.is_empty());
        assert_eq!(config.reply_delay, Duration::from_millis(250));
        assert_eq!(config.reveal_threshold, 0.5);
        assert_eq!(config.theme, ThemeMode::Dark);
        assert_eq!(config.log_filter, "portfolio=debug");
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let (config, rejected) = from_env_file("SOMETHING_ELSE=1\n");
        assert!(rejected.is_empty());
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_invalid_value_is_skipped_and_later_lines_apply() {
        let (config, rejected) = from_env_file(
            "PORTFOLIO_REPLY_DELAY_MS=soon\nPORTFOLIO_THEME=dark\nPORTFOLIO_REVEAL_THRESHOLD=0.3\n",
        );
        assert_eq!(rejected.len(), 1);
        assert!(matches!(rejected[0], ConfigError::InvalidDelay { .. }));
        assert_eq!(config.reply_delay, Duration::from_millis(1500));
        assert_eq!(config.theme, ThemeMode::Dark);
        assert_eq!(config.reveal_threshold, 0.3);
    }

    #[test]
    fn test_threshold_must_be_a_fraction() {
        for raw in ["0", "1.5", "-0.1", "ten"] {
            let mut config = SiteConfig::default();
            let err = config.apply(REVEAL_THRESHOLD_KEY, raw).unwrap_err();
            assert!(matches!(err, ConfigError::InvalidThreshold { .. }), "{raw}");
            assert_eq!(config.reveal_threshold, DEFAULT_THRESHOLD);
        }
        let mut config = SiteConfig::default();
        config.apply(REVEAL_THRESHOLD_KEY, "1").unwrap();
        assert_eq!(config.reveal_threshold, 1.0);
    }

    #[test]
    fn test_unknown_theme_is_rejected() {
        let mut config = SiteConfig::default();
        let err = config.apply(THEME_KEY, "octane").unwrap_err();
        assert_eq!(
            err.to_string(),
            "PORTFOLIO_THEME: unknown theme \"octane\" (expected light or dark)"
        );
    }

    #[test]
    fn test_empty_log_filter_keeps_default() {
        let mut config = SiteConfig::default();
        config.apply(LOG_KEY, "  ").unwrap();
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_log_level_from_filter() {
        let mut config = SiteConfig::default();
        for (filter, level) in [
            ("warn", tracing::Level::WARN),
            ("portfolio=debug", tracing::Level::DEBUG),
            ("info,portfolio=trace", tracing::Level::TRACE),
            ("noisy", tracing::Level::INFO),
        ] {
            config.log_filter = filter.to_string();
            assert_eq!(config.log_level(), level, "{filter}");
        }
    }
}
