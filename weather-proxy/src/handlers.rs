//! Endpoint handlers for the weather proxy.

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use serde_json::value::RawValue;
use std::sync::Arc;
use tracing::{error, info, warn};
use weather_core::{Config, WeatherError, WeatherProvider, provider_from_config};

use crate::error::ApiError;
use crate::types::{HealthBody, WeatherQuery};

/// Shared state for the proxy handlers.
#[derive(Debug, Clone)]
pub struct ProxyState {
    /// `None` when no provider API key is configured.
    provider: Option<Arc<dyn WeatherProvider>>,
}

impl ProxyState {
    pub fn new(provider: Arc<dyn WeatherProvider>) -> Self {
        Self {
            provider: Some(provider),
        }
    }

    /// State that answers every weather request with the configuration error.
    pub fn unconfigured() -> Self {
        Self { provider: None }
    }

    /// Build from config. A missing API key is not fatal: the server starts
    /// and reports the problem per request.
    pub fn from_config(config: &Config) -> Result<Self, WeatherError> {
        if !config.is_weather_configured() {
            warn!("Weather API key is not configured; /api/weather will answer with 500");
            return Ok(Self::unconfigured());
        }

        let provider = provider_from_config(config)?;
        info!(provider_url = config.provider_url(), "weather provider configured");
        Ok(Self::new(Arc::from(provider)))
    }

    pub fn is_configured(&self) -> bool {
        self.provider.is_some()
    }
}

/// Health check endpoint - GET /health
pub async fn health_check() -> Json<HealthBody> {
    Json(HealthBody::ok())
}

/// Current weather endpoint - GET /api/weather?location=<name>
///
/// Validation runs before the credential check, so a request without a
/// location gets 400 even on an unconfigured server. A repeated `location`
/// key forwards the first value.
pub async fn get_weather(
    State(state): State<Arc<ProxyState>>,
    pairs: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<Box<RawValue>>, ApiError> {
    let query = match pairs {
        Ok(Query(pairs)) => WeatherQuery::from_pairs(pairs),
        Err(rejection) => {
            warn!(error = %rejection, "unreadable weather query string");
            WeatherQuery::default()
        }
    };

    let location = match query.location.as_deref() {
        Some(l) if !l.is_empty() => l,
        _ => return Err(WeatherError::missing_location().into()),
    };

    let Some(provider) = state.provider.as_ref() else {
        error!("Weather request rejected: API key is not configured");
        return Err(WeatherError::missing_api_key().into());
    };

    match provider.current_by_name(location).await {
        Ok(body) => Ok(Json(body)),
        Err(WeatherError::UpstreamNotFound) => {
            info!(location, "provider does not know location");
            Err(WeatherError::UpstreamNotFound.into())
        }
        Err(e) => {
            error!(location, error = %e, "Weather API error");
            Err(e.into())
        }
    }
}
