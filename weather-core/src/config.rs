use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::provider::openweather::DEFAULT_BASE_URL;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_PROXY_URL: &str = "http://127.0.0.1:3000";
pub const DEFAULT_LOCATION: &str = "London";

pub const ENV_WEATHER_API_KEY: &str = "WEATHERMAP_API_KEY";
pub const ENV_MAPS_API_KEY: &str = "MAPS_API_KEY";
pub const ENV_PROVIDER_URL: &str = "WEATHER_PROVIDER_URL";
pub const ENV_BIND_ADDR: &str = "WEATHER_BIND_ADDR";
pub const ENV_PROXY_URL: &str = "WEATHER_PROXY_URL";
pub const ENV_DEFAULT_LOCATION: &str = "WEATHER_DEFAULT_LOCATION";

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// weather_api_key = "..."
/// bind_addr = "0.0.0.0:8080"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Credential for the weather provider. Never sent to dashboard clients.
    pub weather_api_key: Option<String>,

    /// Credential for the map widget. Only the browser front end uses it.
    pub maps_api_key: Option<String>,

    /// Provider host, e.g. "https://api.openweathermap.org".
    pub provider_url: Option<String>,

    /// Address the proxy listens on.
    pub bind_addr: Option<String>,

    /// Base URL of the proxy as seen by the dashboard client.
    pub proxy_url: Option<String>,

    /// Location shown when the dashboard starts without one.
    pub default_location: Option<String>,
}

impl Config {
    /// Load config from disk, then apply environment overrides.
    pub fn load() -> Result<Self> {
        let mut cfg = Self::load_file()?;
        cfg.apply_env(|name| std::env::var(name).ok());
        Ok(cfg)
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load_file() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("Invalid configuration TOML")
    }

    /// Overlay values from the environment. Environment wins over the file;
    /// empty values are ignored.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let fields: [(&str, &mut Option<String>); 6] = [
            (ENV_WEATHER_API_KEY, &mut self.weather_api_key),
            (ENV_MAPS_API_KEY, &mut self.maps_api_key),
            (ENV_PROVIDER_URL, &mut self.provider_url),
            (ENV_BIND_ADDR, &mut self.bind_addr),
            (ENV_PROXY_URL, &mut self.proxy_url),
            (ENV_DEFAULT_LOCATION, &mut self.default_location),
        ];

        for (name, slot) in fields {
            if let Some(value) = get(name) {
                *slot = Some(value);
            }
        }
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weathervista", "weathervista")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Returns the provider API key, if present and non-blank.
    pub fn weather_api_key(&self) -> Option<&str> {
        non_blank(&self.weather_api_key)
    }

    pub fn maps_api_key(&self) -> Option<&str> {
        non_blank(&self.maps_api_key)
    }

    pub fn provider_url(&self) -> &str {
        non_blank(&self.provider_url).unwrap_or(DEFAULT_BASE_URL)
    }

    pub fn bind_addr(&self) -> &str {
        non_blank(&self.bind_addr).unwrap_or(DEFAULT_BIND_ADDR)
    }

    pub fn proxy_url(&self) -> &str {
        non_blank(&self.proxy_url).unwrap_or(DEFAULT_PROXY_URL)
    }

    pub fn default_location(&self) -> &str {
        non_blank(&self.default_location).unwrap_or(DEFAULT_LOCATION)
    }

    pub fn is_weather_configured(&self) -> bool {
        self.weather_api_key().is_some()
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn defaults_when_nothing_configured() {
        let cfg = Config::default();

        assert!(!cfg.is_weather_configured());
        assert_eq!(cfg.provider_url(), DEFAULT_BASE_URL);
        assert_eq!(cfg.bind_addr(), DEFAULT_BIND_ADDR);
        assert_eq!(cfg.proxy_url(), DEFAULT_PROXY_URL);
        assert_eq!(cfg.default_location(), "London");
    }

    #[test]
    fn env_overrides_file_values() {
        let mut cfg = Config::from_toml(
            r#"
weather_api_key = "FILE_KEY"
bind_addr = "0.0.0.0:8080"
"#,
        )
        .unwrap();

        let vars = env(&[(ENV_WEATHER_API_KEY, "ENV_KEY"), (ENV_DEFAULT_LOCATION, "Tokyo")]);
        cfg.apply_env(|name| vars.get(name).cloned());

        assert_eq!(cfg.weather_api_key(), Some("ENV_KEY"));
        assert_eq!(cfg.bind_addr(), "0.0.0.0:8080");
        assert_eq!(cfg.default_location(), "Tokyo");
    }

    #[test]
    fn empty_env_values_are_ignored() {
        let mut cfg = Config {
            weather_api_key: Some("FILE_KEY".into()),
            ..Config::default()
        };

        let vars = env(&[(ENV_WEATHER_API_KEY, ""), (ENV_MAPS_API_KEY, "  ")]);
        cfg.apply_env(|name| vars.get(name).cloned());

        assert_eq!(cfg.weather_api_key(), Some("FILE_KEY"));
        assert_eq!(cfg.maps_api_key(), None);
    }

    #[test]
    fn blank_key_in_file_is_not_configured() {
        let cfg = Config::from_toml(r#"weather_api_key = """#).unwrap();
        assert!(!cfg.is_weather_configured());
    }

    #[test]
    fn toml_roundtrip_keeps_keys() {
        let cfg = Config {
            weather_api_key: Some("K".into()),
            maps_api_key: Some("M".into()),
            ..Config::default()
        };

        let text = toml::to_string_pretty(&cfg).unwrap();
        let back = Config::from_toml(&text).unwrap();

        assert_eq!(back.weather_api_key(), Some("K"));
        assert_eq!(back.maps_api_key(), Some("M"));
    }
}
