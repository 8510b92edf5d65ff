use std::path::PathBuf;

use crate::currency::{CurrencyLocale, DEFAULT_LOCALE};
use crate::types::board_error::BoardError;

/// Environment variable selecting the currency locale.
pub const LOCALE_VAR: &str = "DEPARTURES_LOCALE";

/// Environment variable selecting the log directory.
pub const LOG_DIR_VAR: &str = "DEPARTURES_LOG_DIR";

/// Environment variable that, when set to `1`/`true`/`yes`, echoes log lines to stderr.
pub const LOG_ECHO_VAR: &str = "DEPARTURES_LOG_ECHO";

pub const DEFAULT_LOG_DIR: &str = "logs";

/// Settings for the departures program, read once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardConfig {
    pub locale: String,
    pub log_dir: PathBuf,
    pub log_echo: bool,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            locale: DEFAULT_LOCALE.to_string(),
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
            log_echo: false,
        }
    }
}

impl BoardConfig {
    /// Reads the settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the settings through `lookup`. Unset or blank values keep their default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = BoardConfig::default();
        let non_blank = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        BoardConfig {
            locale: non_blank(LOCALE_VAR).unwrap_or(defaults.locale),
            log_dir: non_blank(LOG_DIR_VAR)
                .map(PathBuf::from)
                .unwrap_or(defaults.log_dir),
            log_echo: non_blank(LOG_ECHO_VAR)
                .map(|value| {
                    matches!(
                        value.trim().to_lowercase().as_str(),
                        "1" | "true" | "yes"
                    )
                })
                .unwrap_or(defaults.log_echo),
        }
    }

    /// Currency locale to price fares with.
    ///
    /// An unsupported locale falls back to en-US; the error is returned
    /// alongside so the caller can report it.
    pub fn currency_locale(&self) -> (CurrencyLocale, Option<BoardError>) {
        match CurrencyLocale::from_str(&self.locale) {
            Ok(locale) => (locale, None),
            Err(e) => (CurrencyLocale::EnUs, Some(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let config = BoardConfig::from_lookup(|_| None);
        assert_eq!(config, BoardConfig::default());
        assert_eq!(config.locale, "en-US");
        assert_eq!(config.log_dir, PathBuf::from("logs"));
        assert!(!config.log_echo);
    }

    #[test]
    fn test_overrides() {
        let config = BoardConfig::from_lookup(|key| match key {
            LOCALE_VAR => Some("de-DE".to_string()),
            LOG_DIR_VAR => Some("/tmp/board".to_string()),
            LOG_ECHO_VAR => Some("TRUE".to_string()),
            _ => None,
        });
        assert_eq!(config.locale, "de-DE");
        assert_eq!(config.log_dir, PathBuf::from("/tmp/board"));
        assert!(config.log_echo);
    }

    #[test]
    fn test_log_echo_off_for_other_values() {
        let config = BoardConfig::from_lookup(|key| {
            (key == LOG_ECHO_VAR).then(|| "0".to_string())
        });
        assert!(!config.log_echo);
    }

    #[test]
    fn test_currency_locale_supported() {
        let config = BoardConfig {
            locale: "fr_FR.UTF-8".to_string(),
            ..BoardConfig::default()
        };
        assert_eq!(config.currency_locale(), (CurrencyLocale::FrFr, None));
    }

    #[test]
    fn test_currency_locale_unsupported_falls_back_to_us() {
        let config = BoardConfig {
            locale: "xx-XX".to_string(),
            ..BoardConfig::default()
        };
        assert_eq!(
            config.currency_locale(),
            (
                CurrencyLocale::EnUs,
                Some(BoardError::UnsupportedLocale("xx-XX".to_string()))
            )
        );
    }

    #[test]
    fn test_blank_value_keeps_default() {
        let config = BoardConfig::from_lookup(|key| {
            (key == LOCALE_VAR).then(|| "  ".to_string())
        });
        assert_eq!(config.locale, DEFAULT_LOCALE);
    }
}
