use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Result, WeatherError};

/// Offset between the Kelvin and Celsius scales.
pub const KELVIN_OFFSET: f64 = 273.15;

pub fn kelvin_to_celsius(kelvin: f64) -> f64 {
    kelvin - KELVIN_OFFSET
}

/// Kelvin to whole degrees Celsius, the way the dashboard displays it.
///
/// Halves round up (towards positive infinity), so -0.5 °C shows as 0.
pub fn kelvin_to_celsius_rounded(kelvin: f64) -> i32 {
    (kelvin_to_celsius(kelvin) + 0.5).floor() as i32
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// Temperatures are Kelvin, humidity is %, pressure is hPa.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MainReadings {
    pub temp: f64,
    pub feels_like: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    pub humidity: u8,
    pub pressure: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub id: u32,
    /// Category such as "Rain" or "Clouds".
    pub main: String,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wind {
    pub speed: f64,
    #[serde(default)]
    pub deg: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Clouds {
    pub all: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SunTimes {
    pub sunrise: i64,
    pub sunset: i64,
    #[serde(default)]
    pub country: String,
}

/// Snapshot of current conditions for one location, as returned by the
/// provider's current-weather endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherRecord {
    pub name: String,
    pub coord: Coordinates,
    pub main: MainReadings,
    /// Never empty; the first entry is the authoritative condition.
    #[serde(deserialize_with = "non_empty_conditions")]
    pub weather: Vec<Condition>,
    pub wind: Wind,
    pub clouds: Clouds,
    #[serde(default)]
    pub visibility: u32,
    pub sys: SunTimes,
}

fn non_empty_conditions<'de, D>(deserializer: D) -> std::result::Result<Vec<Condition>, D::Error>
where
    D: Deserializer<'de>,
{
    let conditions = Vec::<Condition>::deserialize(deserializer)?;
    if conditions.is_empty() {
        return Err(serde::de::Error::custom(
            "weather conditions must contain at least one entry",
        ));
    }
    Ok(conditions)
}

impl WeatherRecord {
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        serde_json::from_value(value)
            .map_err(|e| WeatherError::UpstreamFailure(format!("Malformed weather record: {e}")))
    }

    pub fn primary_condition(&self) -> &Condition {
        // Deserialization guarantees at least one entry.
        &self.weather[0]
    }

    pub fn temperature_c(&self) -> i32 {
        kelvin_to_celsius_rounded(self.main.temp)
    }

    pub fn feels_like_c(&self) -> i32 {
        kelvin_to_celsius_rounded(self.main.feels_like)
    }

    pub fn temp_min_c(&self) -> i32 {
        kelvin_to_celsius_rounded(self.main.temp_min)
    }

    pub fn temp_max_c(&self) -> i32 {
        kelvin_to_celsius_rounded(self.main.temp_max)
    }
}
