use serde_json::{Value, json};

/// Current-weather body in the provider's native shape.
pub fn provider_body(name: &str) -> Value {
    json!({
        "coord": { "lon": 2.3488, "lat": 48.8534 },
        "weather": [
            { "id": 800, "main": "Clear", "description": "clear sky", "icon": "01d" }
        ],
        "base": "stations",
        "main": {
            "temp": 300.0,
            "feels_like": 299.5,
            "temp_min": 297.9,
            "temp_max": 301.3,
            "pressure": 1018,
            "humidity": 40
        },
        "visibility": 10000,
        "wind": { "speed": 3.6, "deg": 230 },
        "clouds": { "all": 0 },
        "dt": 1_700_000_000,
        "sys": { "country": "FR", "sunrise": 1_699_944_000, "sunset": 1_699_978_000 },
        "timezone": 3600,
        "id": 2988507,
        "name": name,
        "cod": 200
    })
}
