//! Request lifecycle for the dashboard.
//!
//! Tracks `loading` / `error` / `weather_data` for one dashboard session and
//! drives fetches through a [`WeatherSource`]. Fetches may overlap; each one
//! is stamped with a sequence number and only the most recently issued fetch
//! is allowed to change the state when it completes.

use parking_lot::Mutex;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::{client::WeatherSource, error::Result, model::WeatherRecord};

/// Observable dashboard state.
///
/// A failed fetch leaves `weather_data` untouched, so the last good record
/// stays on screen beneath the error banner.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    pub loading: bool,
    pub error: Option<String>,
    pub weather_data: Option<WeatherRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Success,
    Failed,
}

impl DashboardState {
    pub fn phase(&self) -> Phase {
        if self.loading {
            Phase::Loading
        } else if self.error.is_some() {
            Phase::Failed
        } else if self.weather_data.is_some() {
            Phase::Success
        } else {
            Phase::Idle
        }
    }
}

/// Handle for one issued fetch.
#[derive(Debug)]
pub struct Ticket {
    seq: u64,
    location: String,
}

impl Ticket {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn location(&self) -> &str {
        &self.location
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Blank input; nothing was requested.
    Skipped,
    /// The result was written to the state.
    Applied,
    /// A newer fetch was issued while this one was in flight; result dropped.
    Superseded,
}

#[derive(Debug, Default)]
struct Inner {
    state: DashboardState,
    issued: u64,
}

#[derive(Debug, Clone)]
pub struct Orchestrator {
    source: Arc<dyn WeatherSource>,
    fallback_location: String,
    inner: Arc<Mutex<Inner>>,
}

impl Orchestrator {
    pub fn new(source: Arc<dyn WeatherSource>, fallback_location: impl Into<String>) -> Self {
        Self {
            source,
            fallback_location: fallback_location.into(),
            inner: Arc::new(Mutex::new(Inner::default())),
        }
    }

    pub fn snapshot(&self) -> DashboardState {
        self.inner.lock().state.clone()
    }

    pub fn fallback_location(&self) -> &str {
        &self.fallback_location
    }

    /// Initial load. An empty or absent location falls back to the default.
    pub async fn mount(&self, initial: Option<&str>) -> FetchOutcome {
        let location = initial
            .filter(|l| !l.is_empty())
            .unwrap_or(self.fallback_location.as_str())
            .to_owned();
        self.search(&location).await
    }

    /// User-submitted search. Whitespace-only input is ignored.
    pub async fn search(&self, input: &str) -> FetchOutcome {
        let Some(ticket) = self.begin(input) else {
            return FetchOutcome::Skipped;
        };

        let result = self.source.fetch(ticket.location()).await;
        self.complete(ticket, result)
    }

    /// Enter the loading state for `input` and issue a ticket for it.
    pub fn begin(&self, input: &str) -> Option<Ticket> {
        let location = input.trim();
        if location.is_empty() {
            return None;
        }

        let mut inner = self.inner.lock();
        inner.issued += 1;
        inner.state.loading = true;
        inner.state.error = None;

        debug!(seq = inner.issued, location, "weather fetch started");
        Some(Ticket {
            seq: inner.issued,
            location: location.to_owned(),
        })
    }

    /// Apply a finished fetch if it is still the latest one issued.
    pub fn complete(&self, ticket: Ticket, result: Result<WeatherRecord>) -> FetchOutcome {
        let mut inner = self.inner.lock();

        if ticket.seq < inner.issued {
            debug!(
                seq = ticket.seq,
                latest = inner.issued,
                location = %ticket.location,
                "discarding superseded weather response"
            );
            return FetchOutcome::Superseded;
        }

        match result {
            Ok(record) => {
                inner.state.weather_data = Some(record);
            }
            Err(e) => {
                warn!(location = %ticket.location, error = %e, "weather fetch failed");
                inner.state.error = Some(e.public_message().to_owned());
            }
        }
        inner.state.loading = false;

        FetchOutcome::Applied
    }
}
