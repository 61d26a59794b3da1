use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde_json::value::RawValue;
use tracing::debug;

use crate::error::{Result, WeatherError};

use super::{WeatherProvider, append_path};

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";

const CURRENT_WEATHER_PATH: &str = "/data/2.5/weather";

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    endpoint: Url,
    http: Client,
}

impl OpenWeatherProvider {
    /// `base_url` is the provider host, normally [`DEFAULT_BASE_URL`].
    pub fn new(api_key: String, base_url: &str) -> Result<Self> {
        let endpoint = Url::parse(base_url)
            .map(|base| append_path(base, CURRENT_WEATHER_PATH))
            .map_err(|e| {
                WeatherError::Configuration(format!("Invalid provider URL '{base_url}': {e}"))
            })?;

        Ok(Self {
            api_key,
            endpoint,
            http: Client::new(),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current_by_name(&self, location: &str) -> Result<Box<RawValue>> {
        debug!(location, "requesting current weather from OpenWeather");

        // `query` percent-encodes the location.
        let res = self
            .http
            .get(self.endpoint.clone())
            .query(&[("q", location), ("appid", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| {
                WeatherError::UpstreamFailure(format!(
                    "Failed to send request to OpenWeather (current weather): {e}"
                ))
            })?;

        let status = res.status();
        let body = res.text().await.map_err(|e| {
            WeatherError::UpstreamFailure(format!(
                "Failed to read OpenWeather current response body: {e}"
            ))
        })?;

        if status == StatusCode::NOT_FOUND {
            debug!(location, body = %truncate_body(&body), "OpenWeather does not know location");
            return Err(WeatherError::UpstreamNotFound);
        }

        if !status.is_success() {
            return Err(WeatherError::UpstreamFailure(format!(
                "OpenWeather current request failed with status {}: {}",
                status,
                truncate_body(&body),
            )));
        }

        let parsed: Box<RawValue> = serde_json::from_str(&body).map_err(|e| {
            WeatherError::UpstreamFailure(format!("Failed to parse OpenWeather current JSON: {e}"))
        })?;

        if !parsed.get().starts_with('{') {
            return Err(WeatherError::UpstreamFailure(format!(
                "OpenWeather current response is not a JSON object: {}",
                truncate_body(&body),
            )));
        }

        Ok(parsed)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        let cut = (0..=MAX).rev().find(|i| body.is_char_boundary(*i)).unwrap_or(0);
        format!("{}...", &body[..cut])
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_endpoint_targets_current_weather() {
        let provider = OpenWeatherProvider::new("KEY".into(), DEFAULT_BASE_URL).unwrap();
        assert_eq!(
            provider.endpoint().as_str(),
            "https://api.openweathermap.org/data/2.5/weather"
        );
    }

    #[test]
    fn base_url_trailing_slash_is_ignored() {
        let provider =
            OpenWeatherProvider::new("KEY".into(), "http://127.0.0.1:9999/").unwrap();
        assert_eq!(provider.endpoint().as_str(), "http://127.0.0.1:9999/data/2.5/weather");
    }

    #[test]
    fn base_url_path_prefix_is_kept() {
        let provider = OpenWeatherProvider::new("KEY".into(), "http://gw.local/owm/").unwrap();
        assert_eq!(provider.endpoint().as_str(), "http://gw.local/owm/data/2.5/weather");
    }

    #[test]
    fn invalid_base_url_is_a_configuration_error() {
        let err = OpenWeatherProvider::new("KEY".into(), "not a url").unwrap_err();
        assert!(matches!(err, WeatherError::Configuration(_)));
    }

    #[test]
    fn truncate_body_respects_char_boundaries() {
        let long = "é".repeat(150);
        let out = truncate_body(&long);
        assert!(out.ends_with("..."));
        assert!(out.len() <= 203);

        assert_eq!(truncate_body("short"), "short");
    }
}
