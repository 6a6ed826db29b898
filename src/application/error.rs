use thiserror::Error;

use crate::remote::FetchError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),

    #[error("Invalid configuration: {0}")]
    InvalidSetting(String),

    #[error("Card offers unavailable: {0}")]
    Fetch(#[from] FetchError),
}
