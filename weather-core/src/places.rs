//! Fixture "nearby places" and the fixed set of map views.
//!
//! There is no places data source; the list is a canned table with the
//! location name templated in, scattered around the record's coordinates.

use serde::Serialize;

use crate::model::Coordinates;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaceType {
    Museum,
    Park,
    HistoricSite,
    ShoppingMall,
    ArtGallery,
    Restaurant,
}

impl PlaceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlaceType::Museum => "museum",
            PlaceType::Park => "park",
            PlaceType::HistoricSite => "historic_site",
            PlaceType::ShoppingMall => "shopping_mall",
            PlaceType::ArtGallery => "art_gallery",
            PlaceType::Restaurant => "restaurant",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            PlaceType::Museum => "#3b82f6",
            PlaceType::Park => "#10b981",
            PlaceType::HistoricSite => "#f59e0b",
            PlaceType::ShoppingMall => "#8b5cf6",
            PlaceType::ArtGallery => "#6366f1",
            PlaceType::Restaurant => "#ef4444",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            PlaceType::Museum => "/icons/museum.svg",
            PlaceType::Park => "/icons/park.svg",
            PlaceType::HistoricSite => "/icons/historic.svg",
            PlaceType::ShoppingMall => "/icons/shopping.svg",
            PlaceType::ArtGallery => "/icons/art.svg",
            PlaceType::Restaurant => "/icons/restaurant.svg",
        }
    }
}

impl std::fmt::Display for PlaceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filter categories offered by the dashboard, as `(id, label)`.
pub const CATEGORIES: [(&str, &str); 6] = [
    ("all", "All Places"),
    ("museum", "Museums"),
    ("park", "Parks"),
    ("historic_site", "Historic Sites"),
    ("restaurant", "Restaurants"),
    ("shopping_mall", "Shopping"),
];

const PRICE_LABELS: [&str; 5] = ["Free", "$", "$$", "$$$", "$$$$"];

pub fn price_label(level: u8) -> Option<&'static str> {
    PRICE_LABELS.get(usize::from(level)).copied()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Place {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: PlaceType,
    pub description: String,
    pub rating: f32,
    pub color: &'static str,
    pub icon: &'static str,
    pub position: Coordinates,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hours: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_level: Option<u8>,
}

struct Template {
    /// `{location}` is replaced with the searched location.
    name: &'static str,
    kind: PlaceType,
    description: &'static str,
    rating: f32,
    address: &'static str,
    website: Option<&'static str>,
    phone: Option<&'static str>,
    hours: &'static str,
    price_level: Option<u8>,
    /// Marker offset in degrees (lat, lon).
    offset: (f64, f64),
}

static TEMPLATES: [Template; 7] = [
    Template {
        name: "{location} Museum of Art",
        kind: PlaceType::Museum,
        description: "A world-class museum featuring both contemporary and classical art collections.",
        rating: 4.7,
        address: "123 Museum Avenue, Downtown",
        website: Some("https://example.com/museum"),
        phone: None,
        hours: "Open 9 AM - 5 PM",
        price_level: Some(2),
        offset: (0.005, 0.005),
    },
    Template {
        name: "{location} Central Park",
        kind: PlaceType::Park,
        description: "A beautiful urban park with walking trails, gardens, and recreational facilities.",
        rating: 4.8,
        address: "Central District",
        website: None,
        phone: None,
        hours: "Open 24 hours",
        price_level: Some(0),
        offset: (-0.008, 0.003),
    },
    Template {
        name: "Historic {location} Cathedral",
        kind: PlaceType::HistoricSite,
        description: "A magnificent cathedral dating back to the 16th century with stunning architecture.",
        rating: 4.6,
        address: "45 Old Town Square",
        website: Some("https://example.com/cathedral"),
        phone: None,
        hours: "Open 10 AM - 4 PM",
        price_level: None,
        offset: (0.003, -0.007),
    },
    Template {
        name: "{location} Luxury Shopping Mall",
        kind: PlaceType::ShoppingMall,
        description: "Premium shopping experience with international brands and local boutiques.",
        rating: 4.3,
        address: "789 Commerce Street",
        website: None,
        phone: None,
        hours: "Open 10 AM - 9 PM",
        price_level: Some(3),
        offset: (-0.004, -0.006),
    },
    Template {
        name: "{location} Science Museum",
        kind: PlaceType::Museum,
        description: "Interactive exhibits showcasing scientific discoveries and innovations.",
        rating: 4.5,
        address: "567 Science Boulevard",
        website: Some("https://example.com/science"),
        phone: None,
        hours: "Open 9 AM - 6 PM",
        price_level: Some(1),
        offset: (0.009, -0.002),
    },
    Template {
        name: "{location} Waterfront",
        kind: PlaceType::Park,
        description: "Scenic waterfront area with walking paths, cafes, and beautiful views.",
        rating: 4.9,
        address: "Waterfront District",
        website: None,
        phone: None,
        hours: "Open 24 hours",
        price_level: Some(0),
        offset: (-0.010, 0.008),
    },
    Template {
        name: "{location} Gourmet Restaurant",
        kind: PlaceType::Restaurant,
        description: "Fine dining establishment serving locally-sourced cuisine with international influences.",
        rating: 4.6,
        address: "321 Culinary Avenue",
        website: None,
        phone: Some("+1 123-456-7890"),
        hours: "Open 5 PM - 11 PM",
        price_level: Some(4),
        offset: (0.002, 0.010),
    },
];

/// Generate the fixture places for `location` around `center`.
pub fn sample_places(location: &str, center: Coordinates) -> Vec<Place> {
    TEMPLATES
        .iter()
        .enumerate()
        .map(|(i, t)| Place {
            id: format!("place{}", i + 1),
            name: t.name.replace("{location}", location),
            kind: t.kind,
            description: t.description.to_string(),
            rating: t.rating,
            color: t.kind.color(),
            icon: t.kind.icon(),
            position: Coordinates {
                lat: center.lat + t.offset.0,
                lon: center.lon + t.offset.1,
            },
            address: Some(t.address.to_string()),
            website: t.website.map(str::to_string),
            phone: t.phone.map(str::to_string),
            hours: Some(t.hours.to_string()),
            price_level: t.price_level,
        })
        .collect()
}

/// Keep places in `category`; "all" keeps everything.
pub fn filter_by_category<'a>(places: &'a [Place], category: &str) -> Vec<&'a Place> {
    places
        .iter()
        .filter(|p| category == "all" || p.kind.as_str() == category)
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapView {
    pub title: &'static str,
    pub zoom: u8,
    pub center: Coordinates,
}

const MAP_ZOOMS: [(&str, u8); 4] = [
    ("City View", 14),
    ("Area View", 10),
    ("Region View", 6),
    ("Country View", 4),
];

/// The four fixed-zoom map tiles shown next to the weather card.
pub fn map_views(center: Coordinates) -> [MapView; 4] {
    MAP_ZOOMS.map(|(title, zoom)| MapView { title, zoom, center })
}
