//! Human-facing values derived from a [`WeatherRecord`].

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::model::WeatherRecord;

const COMPASS_POINTS: [&str; 8] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];

pub fn icon_url(icon_code: &str) -> String {
    format!("https://openweathermap.org/img/wn/{icon_code}@2x.png")
}

/// 8-point compass direction for a wind bearing in degrees.
pub fn wind_direction(degrees: f64) -> &'static str {
    let index = (degrees.rem_euclid(360.0) / 45.0).round() as usize % COMPASS_POINTS.len();
    COMPASS_POINTS[index]
}

/// "light rain" -> "Light Rain"
pub fn title_case(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Unix seconds rendered as a 12-hour clock time in UTC, e.g. "07:05 AM".
pub fn format_clock(unix_seconds: i64) -> String {
    DateTime::<Utc>::from_timestamp(unix_seconds, 0)
        .map(|dt| dt.format("%I:%M %p").to_string())
        .unwrap_or_else(|| "--:--".to_string())
}

/// Share of daylight elapsed at `now`, in percent.
pub fn day_progress(sunrise: i64, sunset: i64, now: DateTime<Utc>) -> f64 {
    let now = now.timestamp();
    if now < sunrise {
        return 0.0;
    }
    if now > sunset || sunset <= sunrise {
        return 100.0;
    }
    (now - sunrise) as f64 / (sunset - sunrise) as f64 * 100.0
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RangeLevel {
    Low,
    Medium,
    High,
}

impl RangeLevel {
    /// Where `value` sits between `min` and `max`, split in thirds.
    pub fn classify(value: f64, min: f64, max: f64) -> Self {
        let span = max - min;
        let percentage = if span == 0.0 { 0.0 } else { (value - min) / span * 100.0 };

        if percentage < 33.0 {
            RangeLevel::Low
        } else if percentage < 66.0 {
            RangeLevel::Medium
        } else {
            RangeLevel::High
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherSummary {
    pub location: String,
    pub country: String,
    pub temperature_c: i32,
    pub feels_like_c: i32,
    pub temp_min_c: i32,
    pub temp_max_c: i32,
    pub condition: String,
    pub description: String,
    pub icon_url: String,
    pub humidity_pct: u8,
    pub humidity_level: RangeLevel,
    pub pressure_hpa: u32,
    pub wind_speed_mps: f64,
    pub wind_direction: &'static str,
    pub cloudiness_pct: u8,
    pub visibility_km: String,
    pub sunrise: String,
    pub sunset: String,
}

impl WeatherSummary {
    pub fn from_record(record: &WeatherRecord) -> Self {
        let condition = record.primary_condition();

        Self {
            location: record.name.clone(),
            country: record.sys.country.clone(),
            temperature_c: record.temperature_c(),
            feels_like_c: record.feels_like_c(),
            temp_min_c: record.temp_min_c(),
            temp_max_c: record.temp_max_c(),
            condition: condition.main.clone(),
            description: title_case(&condition.description),
            icon_url: icon_url(&condition.icon),
            humidity_pct: record.main.humidity,
            humidity_level: RangeLevel::classify(f64::from(record.main.humidity), 0.0, 100.0),
            pressure_hpa: record.main.pressure,
            wind_speed_mps: record.wind.speed,
            wind_direction: wind_direction(record.wind.deg),
            cloudiness_pct: record.clouds.all,
            visibility_km: format!("{:.1}", f64::from(record.visibility) / 1000.0),
            sunrise: format_clock(record.sys.sunrise),
            sunset: format_clock(record.sys.sunset),
        }
    }
}
