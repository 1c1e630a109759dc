use std::{env, time::Duration};

use thiserror::Error;

use crate::model::ResultCount;

pub const DEFAULT_ENDPOINT: &str =
    "https://asia-south1-socialboat-dev.cloudfunctions.net/assignmentVideos";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} is not a valid number: {value:?}")]
    NotANumber { key: &'static str, value: String },

    #[error("{key} is out of range: {reason}")]
    OutOfRange { key: &'static str, reason: String },

    #[error("{key} must not be empty")]
    Empty { key: &'static str },
}

#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub endpoint: String,
    pub debounce: Duration,
    pub default_count: ResultCount,
    pub request_timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            debounce: Duration::from_millis(300),
            default_count: ResultCount::default(),
            request_timeout: Duration::from_secs(15),
            connect_timeout: Duration::from_secs(5),
        }
    }
}

impl SearchConfig {
    /// Defaults overridden by `FITVIDS_*` variables from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(endpoint) = lookup("FITVIDS_ENDPOINT") {
            let endpoint = endpoint.trim();
            if endpoint.is_empty() {
                return Err(ConfigError::Empty {
                    key: "FITVIDS_ENDPOINT",
                });
            }
            config.endpoint = endpoint.to_string();
        }

        if let Some(ms) = parse_u64(&lookup, "FITVIDS_DEBOUNCE_MS")? {
            config.debounce = Duration::from_millis(ms);
        }

        if let Some(count) = parse_u64(&lookup, "FITVIDS_DEFAULT_COUNT")? {
            config.default_count = u8::try_from(count)
                .ok()
                .and_then(|n| ResultCount::new(n).ok())
                .ok_or_else(|| ConfigError::OutOfRange {
                    key: "FITVIDS_DEFAULT_COUNT",
                    reason: format!("{count} is not within {}..={}", ResultCount::MIN, ResultCount::MAX),
                })?;
        }

        if let Some(secs) = parse_u64(&lookup, "FITVIDS_TIMEOUT_SECS")? {
            config.request_timeout = non_zero_secs("FITVIDS_TIMEOUT_SECS", secs)?;
        }

        if let Some(secs) = parse_u64(&lookup, "FITVIDS_CONNECT_TIMEOUT_SECS")? {
            config.connect_timeout = non_zero_secs("FITVIDS_CONNECT_TIMEOUT_SECS", secs)?;
        }

        Ok(config)
    }
}

fn parse_u64<F>(lookup: &F, key: &'static str) -> Result<Option<u64>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse::<u64>()
            .map(Some)
            .map_err(|_| ConfigError::NotANumber { key, value }),
        None => Ok(None),
    }
}

fn non_zero_secs(key: &'static str, secs: u64) -> Result<Duration, ConfigError> {
    if secs == 0 {
        return Err(ConfigError::OutOfRange {
            key,
            reason: "timeout must be at least one second".to_string(),
        });
    }
    Ok(Duration::from_secs(secs))
}
