use serde::{Deserialize, Serialize};

/// Query string of `GET /api/weather`.
#[derive(Debug, Default, Deserialize)]
pub struct WeatherQuery {
    pub location: Option<String>,
}

impl WeatherQuery {
    /// First `location` wins when the key is repeated.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let location = pairs
            .into_iter()
            .find_map(|(key, value)| (key == "location").then_some(value));
        Self { location }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthBody {
    pub status: String,
}

impl HealthBody {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}
