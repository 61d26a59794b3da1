//! Dashboard-side access to the weather proxy.

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;
use std::fmt::Debug;
use tracing::debug;

use crate::{
    error::{API_KEY_NOT_CONFIGURED, Result, WeatherError},
    model::WeatherRecord,
    provider::append_path,
};

pub const WEATHER_ROUTE: &str = "/api/weather";

/// Anything that can turn a location into a [`WeatherRecord`].
#[async_trait]
pub trait WeatherSource: Send + Sync + Debug {
    async fn fetch(&self, location: &str) -> Result<WeatherRecord>;
}

/// Error body produced by the proxy.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ProxyClient {
    endpoint: Url,
    http: Client,
}

impl ProxyClient {
    pub fn new(proxy_url: &str) -> Result<Self> {
        let endpoint = Url::parse(proxy_url)
            .map(|base| append_path(base, WEATHER_ROUTE))
            .map_err(|e| {
                WeatherError::Configuration(format!("Invalid proxy URL '{proxy_url}': {e}"))
            })?;

        Ok(Self {
            endpoint,
            http: Client::new(),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl WeatherSource for ProxyClient {
    async fn fetch(&self, location: &str) -> Result<WeatherRecord> {
        let res = self
            .http
            .get(self.endpoint.clone())
            .query(&[("location", location)])
            .send()
            .await?;

        let status = res.status();
        if status.is_success() {
            let body: serde_json::Value = res.json().await?;
            return WeatherRecord::from_value(body);
        }

        let message = res
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|b| b.error)
            .filter(|m| !m.trim().is_empty());

        debug!(%status, ?message, "proxy rejected weather request");
        Err(error_from_status(status, message))
    }
}

/// Rebuild the proxy's error from its status code and `error` message.
fn error_from_status(status: StatusCode, message: Option<String>) -> WeatherError {
    match (status, message) {
        (StatusCode::NOT_FOUND, _) => WeatherError::UpstreamNotFound,
        (StatusCode::BAD_REQUEST, Some(msg)) => WeatherError::Validation(msg),
        (_, Some(msg)) if msg == API_KEY_NOT_CONFIGURED => WeatherError::Configuration(msg),
        (_, message) => WeatherError::UpstreamFailure(
            message.unwrap_or_else(|| format!("Proxy responded with status {status}")),
        ),
    }
}
