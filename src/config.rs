//! Configuration for the flash message timings.

use std::time::Duration;
use thiserror::Error;

pub const DISMISS_MS_VAR: &str = "PWD_FEEDBACK_DISMISS_MS";
pub const FADE_MS_VAR: &str = "PWD_FEEDBACK_FADE_MS";

pub const DEFAULT_DISMISS_MS: u64 = 5000;
pub const DEFAULT_FADE_MS: u64 = 300;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid duration in {var}: {value:?} (expected milliseconds)")]
    InvalidDuration { var: &'static str, value: String },
}

/// Timings used when dismissing flash messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedbackConfig {
    /// How long a message stays fully visible.
    pub dismiss_delay: Duration,
    /// How long the fade-out lasts before the message is removed.
    pub fade_duration: Duration,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            dismiss_delay: Duration::from_millis(DEFAULT_DISMISS_MS),
            fade_duration: Duration::from_millis(DEFAULT_FADE_MS),
        }
    }
}

impl FeedbackConfig {
    /// Loads the configuration from the environment.
    ///
    /// # Environment Variables
    ///
    /// - `PWD_FEEDBACK_DISMISS_MS`: visible time in ms (default `5000`)
    /// - `PWD_FEEDBACK_FADE_MS`: fade-out time in ms (default `300`)
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidDuration`] if a variable is set but is
    /// not a non-negative integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Self {
            dismiss_delay: duration_from_env(DISMISS_MS_VAR, DEFAULT_DISMISS_MS)?,
            fade_duration: duration_from_env(FADE_MS_VAR, DEFAULT_FADE_MS)?,
        };

        #[cfg(feature = "tracing")]
        tracing::info!("Feedback config loaded: {:?}", config);

        Ok(config)
    }
}

fn duration_from_env(var: &'static str, default_ms: u64) -> Result<Duration, ConfigError> {
    match std::env::var(var) {
        Ok(value) => value
            .trim()
            .parse::<u64>()
            .map(Duration::from_millis)
            .map_err(|_| {
                #[cfg(feature = "tracing")]
                tracing::error!("Invalid value for {}: {:?}", var, value);
                ConfigError::InvalidDuration { var, value }
            }),
        Err(_) => Ok(Duration::from_millis(default_ms)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    /// Helper to safely set env var in tests
    fn set_env(key: &str, value: &str) {
        // SAFETY: This is only for testing purposes in single-threaded test context
        unsafe { std::env::set_var(key, value); }
    }

    /// Helper to safely remove env var in tests
    fn remove_env(key: &str) {
        // SAFETY: This is only for testing purposes in single-threaded test context
        unsafe { std::env::remove_var(key); }
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        remove_env(DISMISS_MS_VAR);
        remove_env(FADE_MS_VAR);

        let config = FeedbackConfig::from_env().expect("defaults should load");
        assert_eq!(config, FeedbackConfig::default());
        assert_eq!(config.dismiss_delay, Duration::from_millis(5000));
        assert_eq!(config.fade_duration, Duration::from_millis(300));
    }

    #[test]
    #[serial]
    fn test_from_env_custom() {
        set_env(DISMISS_MS_VAR, "1200");
        set_env(FADE_MS_VAR, " 50 ");

        let config = FeedbackConfig::from_env().expect("custom values should load");
        assert_eq!(config.dismiss_delay, Duration::from_millis(1200));
        assert_eq!(config.fade_duration, Duration::from_millis(50));

        remove_env(DISMISS_MS_VAR);
        remove_env(FADE_MS_VAR);
    }

    #[test]
    #[serial]
    fn test_from_env_invalid() {
        remove_env(FADE_MS_VAR);
        set_env(DISMISS_MS_VAR, "five seconds");

        let result = FeedbackConfig::from_env();
        match result {
            Err(ConfigError::InvalidDuration { var, value }) => {
                assert_eq!(var, DISMISS_MS_VAR);
                assert_eq!(value, "five seconds");
            }
            _ => panic!("Expected InvalidDuration error"),
        }

        remove_env(DISMISS_MS_VAR);
    }

    #[test]
    #[serial]
    fn test_from_env_negative_rejected() {
        remove_env(DISMISS_MS_VAR);
        set_env(FADE_MS_VAR, "-1");

        assert!(matches!(
            FeedbackConfig::from_env(),
            Err(ConfigError::InvalidDuration { var: FADE_MS_VAR, .. })
        ));

        remove_env(FADE_MS_VAR);
    }
}
