//! Core library for the WeatherVista dashboard.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The weather record model and the upstream provider client
//! - The dashboard-side proxy client and fetch orchestrator
//! - Display helpers and the fixture places / map views
//!
//! It is used by `weather-proxy` and `weather-cli`.

pub mod client;
pub mod config;
pub mod display;
pub mod error;
pub mod model;
pub mod orchestrator;
pub mod places;
pub mod provider;

pub use client::{ProxyClient, WeatherSource};
pub use config::Config;
pub use display::WeatherSummary;
pub use error::WeatherError;
pub use model::{Condition, Coordinates, WeatherRecord};
pub use orchestrator::{DashboardState, FetchOutcome, Orchestrator, Phase};
pub use provider::{WeatherProvider, provider_from_config};
