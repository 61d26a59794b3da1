//! HTTP proxy between the dashboard and the weather provider.
//!
//! Provides:
//! - `GET /api/weather?location=<name>`: provider body passed through unchanged
//! - `GET /health`: liveness probe
//!
//! The provider credential stays on the server; clients only ever see the
//! `{"error": ...}` vocabulary defined in `weather_core::error`.

mod error;
pub mod handlers;
mod server;
mod types;

pub use error::ApiError;
pub use handlers::ProxyState;
pub use server::{bind, router, serve, shutdown_signal};
pub use types::{ErrorBody, HealthBody, WeatherQuery};
