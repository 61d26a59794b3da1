use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{Password, PasswordDisplayMode, Text};
use std::sync::Arc;
use tracing::info;
use weather_core::{
    Config, Coordinates, Orchestrator, ProxyClient, WeatherSummary, places,
};
use weather_proxy::ProxyState;

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "WeatherVista dashboard and weather proxy")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the weather proxy server.
    Serve {
        /// Address to listen on, e.g. "0.0.0.0:8080".
        #[arg(long)]
        bind: Option<String>,
    },

    /// Show current weather for a location through the proxy.
    Show {
        /// Location name; defaults to the configured default location.
        location: Option<String>,

        /// Proxy base URL.
        #[arg(long)]
        proxy: Option<String>,

        /// Also list nearby places and map views.
        #[arg(long)]
        places: bool,

        /// Print the summary as JSON.
        #[arg(long)]
        json: bool,
    },

    /// List the nearby places generated for a location.
    Places {
        location: String,

        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        #[arg(long, allow_hyphen_values = true)]
        lon: f64,

        /// Category filter, e.g. "museum" or "park".
        #[arg(long, default_value = "all")]
        category: String,
    },

    /// Interactively store API keys and defaults in the config file.
    Configure,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Serve { bind } => serve(bind).await,
            Command::Show {
                location,
                proxy,
                places,
                json,
            } => show(location, proxy, places, json).await,
            Command::Places {
                location,
                lat,
                lon,
                category,
            } => {
                let list = places::sample_places(&location, Coordinates { lat, lon });
                print!("{}", render::places(&places::filter_by_category(&list, &category)));
                Ok(())
            }
            Command::Configure => configure(),
        }
    }
}

async fn serve(bind: Option<String>) -> anyhow::Result<()> {
    let config = Config::load()?;
    let addr = bind.unwrap_or_else(|| config.bind_addr().to_owned());

    let state = ProxyState::from_config(&config).context("Invalid weather provider settings")?;
    let listener = weather_proxy::bind(&addr).await?;

    weather_proxy::serve(listener, state, weather_proxy::shutdown_signal()).await
}

async fn show(
    location: Option<String>,
    proxy: Option<String>,
    with_places: bool,
    json: bool,
) -> anyhow::Result<()> {
    let config = Config::load()?;
    let proxy_url = proxy.unwrap_or_else(|| config.proxy_url().to_owned());

    let client = ProxyClient::new(&proxy_url)?;
    let orchestrator = Orchestrator::new(Arc::new(client), config.default_location());

    info!(proxy = %proxy_url, "fetching weather");
    orchestrator.mount(location.as_deref()).await;

    let state = orchestrator.snapshot();
    let Some(record) = state.weather_data else {
        anyhow::bail!(state.error.unwrap_or_else(|| "No weather data available".to_string()));
    };

    let summary = WeatherSummary::from_record(&record);
    if json {
        let text =
            serde_json::to_string_pretty(&summary).context("Failed to serialize weather summary")?;
        println!("{text}");
    } else {
        print!("{}", render::summary(&summary, &record, chrono::Utc::now()));
    }

    if with_places {
        println!();
        let views = places::map_views(record.coord);
        print!("{}", render::map_views(&views, config.maps_api_key().is_some()));
        println!();
        let list = places::sample_places(&record.name, record.coord);
        print!("{}", render::places(&list.iter().collect::<Vec<_>>()));
    }

    Ok(())
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load_file()?;

    let weather_key = Password::new("OpenWeather API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;
    if !weather_key.trim().is_empty() {
        config.weather_api_key = Some(weather_key.trim().to_owned());
    }

    let maps_key = Password::new("Maps API key (optional):")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
        .context("Failed to read maps API key")?;
    if !maps_key.trim().is_empty() {
        config.maps_api_key = Some(maps_key.trim().to_owned());
    }

    let default_location = Text::new("Default location:")
        .with_default(config.default_location())
        .prompt()
        .context("Failed to read default location")?;
    config.default_location = Some(default_location.trim().to_owned());

    config.save()?;
    println!("Saved configuration to {}", Config::config_file_path()?.display());

    Ok(())
}
