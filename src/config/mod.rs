use std::time::Duration;

use serde::Deserialize;

use crate::application::AppError;
use crate::remote::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT};

pub const DEFAULT_CONFIG_PATH: &str = "spendwise.toml";
pub const ENV_PREFIX: &str = "SPENDWISE";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// URL serving the card offer list.
    pub endpoint: String,
    /// Upper bound for the offer fetch, in seconds.
    pub timeout_secs: u64,
    /// Log filter level (error, warn, info, debug, trace).
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT.as_secs(),
            log_level: "warn".to_string(),
        }
    }
}

impl Settings {
    /// Load settings from a TOML file and `SPENDWISE_*` environment variables.
    /// The file is optional unless a path was given explicitly.
    pub fn load(path: Option<&str>) -> Result<Self, AppError> {
        let file = match path {
            Some(path) => ::config::File::with_name(path).required(true),
            None => ::config::File::with_name(DEFAULT_CONFIG_PATH).required(false),
        };

        let settings: Settings = ::config::Config::builder()
            .add_source(file)
            .add_source(::config::Environment::with_prefix(ENV_PREFIX))
            .build()?
            .try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.timeout_secs == 0 {
            return Err(AppError::InvalidSetting(
                "timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
