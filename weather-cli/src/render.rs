//! Plain-text rendering of the dashboard for the terminal.

use chrono::{DateTime, Utc};
use weather_core::{
    WeatherRecord, WeatherSummary,
    display::day_progress,
    places::{MapView, Place, price_label},
};

pub fn summary(summary: &WeatherSummary, record: &WeatherRecord, now: DateTime<Utc>) -> String {
    let progress = day_progress(record.sys.sunrise, record.sys.sunset, now);

    let lines = [
        format!("{}, {}", summary.location, summary.country),
        format!(
            "  {}  {}°C  ({})",
            summary.description, summary.temperature_c, summary.condition
        ),
        format!(
            "  Feels like {}°C, low {}°C, high {}°C",
            summary.feels_like_c, summary.temp_min_c, summary.temp_max_c
        ),
        format!(
            "  Humidity {}% ({:?}), pressure {} hPa",
            summary.humidity_pct, summary.humidity_level, summary.pressure_hpa
        ),
        format!(
            "  Wind {:.1} m/s {}, clouds {}%, visibility {} km",
            summary.wind_speed_mps,
            summary.wind_direction,
            summary.cloudiness_pct,
            summary.visibility_km
        ),
        format!(
            "  Sunrise {}, sunset {} (UTC), day {progress:.0}% done",
            summary.sunrise, summary.sunset
        ),
        format!("  Icon: {}", summary.icon_url),
    ];

    lines.join("\n") + "\n"
}

/// `maps_key_configured` reflects whether a maps API key is set; the views
/// themselves only need coordinates.
pub fn map_views(views: &[MapView], maps_key_configured: bool) -> String {
    let key_state = if maps_key_configured {
        "maps key configured"
    } else {
        "no maps key configured"
    };

    let mut out = format!("Maps ({key_state})\n");
    for view in views {
        out.push_str(&format!(
            "  {:<13} zoom {:>2}  @ {:.4}, {:.4}\n",
            view.title, view.zoom, view.center.lat, view.center.lon
        ));
    }
    out
}

pub fn places(places: &[&Place]) -> String {
    if places.is_empty() {
        return "No places found\n".to_string();
    }

    let mut out = String::from("Nearby places\n");
    for place in places {
        let price = place.price_level.and_then(price_label).unwrap_or("");
        out.push_str(&format!(
            "  [{}] {} ({}) ★ {:.1} {}\n",
            place.id, place.name, place.kind, place.rating, price
        ));
        out.push_str(&format!("      {}\n", place.description));
        if let Some(hours) = &place.hours {
            out.push_str(&format!("      {hours}\n"));
        }
    }
    out
}
