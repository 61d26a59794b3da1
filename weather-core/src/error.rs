use thiserror::Error;

pub const LOCATION_REQUIRED: &str = "Location parameter is required";
pub const API_KEY_NOT_CONFIGURED: &str = "Weather API key is not configured";
pub const LOCATION_NOT_FOUND: &str = "Location not found";
pub const FETCH_FAILED: &str = "Failed to fetch weather data";

/// Failure vocabulary shared by the proxy and the dashboard client.
///
/// Only [`WeatherError::Validation`] carries a message that is safe to show
/// the caller verbatim. The detail inside the other variants is for logs.
#[derive(Error, Debug)]
pub enum WeatherError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Provider reported unknown location")]
    UpstreamNotFound,

    #[error("Upstream failure: {0}")]
    UpstreamFailure(String),
}

impl WeatherError {
    pub fn missing_location() -> Self {
        WeatherError::Validation(LOCATION_REQUIRED.to_string())
    }

    pub fn missing_api_key() -> Self {
        WeatherError::Configuration(API_KEY_NOT_CONFIGURED.to_string())
    }

    /// HTTP status this error maps to at the proxy boundary.
    pub fn status_code(&self) -> u16 {
        match self {
            WeatherError::Validation(_) => 400,
            WeatherError::UpstreamNotFound => 404,
            WeatherError::Configuration(_) | WeatherError::UpstreamFailure(_) => 500,
        }
    }

    /// Message returned to clients in the `{"error": ...}` body.
    pub fn public_message(&self) -> &str {
        match self {
            WeatherError::Validation(msg) => msg,
            WeatherError::Configuration(_) => API_KEY_NOT_CONFIGURED,
            WeatherError::UpstreamNotFound => LOCATION_NOT_FOUND,
            WeatherError::UpstreamFailure(_) => FETCH_FAILED,
        }
    }
}

impl From<reqwest::Error> for WeatherError {
    fn from(err: reqwest::Error) -> Self {
        WeatherError::UpstreamFailure(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, WeatherError>;
