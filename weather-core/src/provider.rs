use crate::{
    Config,
    error::{Result, WeatherError},
    provider::openweather::OpenWeatherProvider,
};
use async_trait::async_trait;
use reqwest::Url;
use serde_json::value::RawValue;
use std::fmt::Debug;

pub mod openweather;

/// Source of raw current-weather bodies keyed by location name.
///
/// Implementations return the provider's JSON text unchanged (key order and
/// number formatting included) so the proxy can pass it straight through.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current_by_name(&self, location: &str) -> Result<Box<RawValue>>;
}

/// Construct the provider from config, failing when no API key is available.
pub fn provider_from_config(config: &Config) -> Result<Box<dyn WeatherProvider>> {
    let api_key = config.weather_api_key().ok_or_else(WeatherError::missing_api_key)?;

    let provider = OpenWeatherProvider::new(api_key.to_owned(), config.provider_url())?;
    Ok(Box::new(provider))
}

/// Append `path` to whatever path `base` already has, so gateway prefixes survive.
pub(crate) fn append_path(mut base: Url, path: &str) -> Url {
    let joined = format!("{}{}", base.path().trim_end_matches('/'), path);
    base.set_path(&joined);
    base
}
