use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::error::ConfigError;
use crate::models::AdvisorCatalog;

const DEFAULT_TIMEOUT_SECS: u64 = 15;
const DEFAULT_SIMULATED_DELAY_MS: u64 = 2000;
const DEFAULT_SIMULATED_FAILURE_RATE: f64 = 0.1;

#[derive(Clone, Debug, PartialEq)]
pub struct FormConfig {
    pub submit_url: Option<String>,
    pub request_timeout: Duration,
    pub advisors_file: Option<PathBuf>,
    pub simulated_delay: Duration,
    pub simulated_failure_rate: f64,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            submit_url: None,
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            advisors_file: None,
            simulated_delay: Duration::from_millis(DEFAULT_SIMULATED_DELAY_MS),
            simulated_failure_rate: DEFAULT_SIMULATED_FAILURE_RATE,
        }
    }
}

impl FormConfig {
    pub fn new_from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key/value source. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let request_timeout = match get("SUBMIT_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = parse_value("SUBMIT_TIMEOUT_SECS", &raw)?;
                if secs == 0 {
                    return Err(invalid("SUBMIT_TIMEOUT_SECS", &raw));
                }
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        let simulated_delay = match get("SIMULATED_DELAY_MS") {
            Some(raw) => Duration::from_millis(parse_value("SIMULATED_DELAY_MS", &raw)?),
            None => Duration::from_millis(DEFAULT_SIMULATED_DELAY_MS),
        };

        let simulated_failure_rate = match get("SIMULATED_FAILURE_RATE") {
            Some(raw) => {
                let rate: f64 = parse_value("SIMULATED_FAILURE_RATE", &raw)?;
                if !(0.0..=1.0).contains(&rate) {
                    return Err(invalid("SIMULATED_FAILURE_RATE", &raw));
                }
                rate
            }
            None => DEFAULT_SIMULATED_FAILURE_RATE,
        };

        Ok(Self {
            submit_url: get("SUBMIT_URL").map(|url| url.trim().to_string()),
            request_timeout,
            advisors_file: get("ADVISORS_FILE").map(PathBuf::from),
            simulated_delay,
            simulated_failure_rate,
        })
    }

    pub fn load_catalog(&self) -> Result<AdvisorCatalog, ConfigError> {
        match &self.advisors_file {
            Some(path) => AdvisorCatalog::from_file(path),
            None => AdvisorCatalog::builtin(),
        }
    }
}

fn parse_value<T: FromStr>(key: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| invalid(key, raw))
}

fn invalid(key: &'static str, raw: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key,
        value: raw.to_string(),
    }
}
