use std::time::Duration;

use reqwest::{StatusCode, Url};
use serde::Deserialize;
use thiserror::Error;

use crate::domain::CardOffer;

/// Offer list published at the default endpoint.
pub const DEFAULT_ENDPOINT: &str =
    "https://api.myjson.online/v1/records/4a0f9a14-7e0d-4380-ad68-4354ebeaee0b";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected status: {0}")]
    Status(StatusCode),
    #[error("malformed offer payload: {0}")]
    Parse(#[from] serde_json::Error),
}

impl FetchError {
    /// Inline message shown for every kind of fetch failure.
    pub const MESSAGE: &'static str = "Could not fetch cards. Please try again later.";

    pub fn is_timeout(&self) -> bool {
        matches!(self, FetchError::Transport(err) if err.is_timeout())
    }
}

#[derive(Debug, Deserialize)]
struct OfferPayload {
    #[serde(default)]
    data: Option<Vec<CardOffer>>,
}

/// Parse the body served by the offer endpoint.
/// A missing or null `data` field is an empty list.
pub fn parse_offers(body: &str) -> Result<Vec<CardOffer>, FetchError> {
    let payload: OfferPayload = serde_json::from_str(body)?;
    Ok(payload.data.unwrap_or_default())
}

/// HTTP client for the remote offer list.
#[derive(Debug, Clone)]
pub struct CardClient {
    endpoint: Url,
    http: reqwest::Client,
}

impl CardClient {
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self, FetchError> {
        let endpoint = Url::parse(endpoint)
            .map_err(|err| FetchError::InvalidEndpoint(format!("{endpoint}: {err}")))?;
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { endpoint, http })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Single GET, no retry.
    pub async fn fetch_offers(&self) -> Result<Vec<CardOffer>, FetchError> {
        tracing::info!(endpoint = %self.endpoint, "fetching card offers");

        let res = self.http.get(self.endpoint.clone()).send().await?;
        let status = res.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = res.text().await?;
        let offers = parse_offers(&body)?;
        tracing::info!(count = offers.len(), "card offers loaded");
        Ok(offers)
    }
}
