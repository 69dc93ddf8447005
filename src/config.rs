use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use serde::Deserialize;
use url::Url;

use crate::error::{AdminError, Result};

const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Deserialize, Default, Debug)]
pub struct Config {
    pub api_url: Option<String>,
    pub api_token: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            return Ok(Config::default());
        }

        let contents =
            std::fs::read_to_string(&config_path).map_err(|e| AdminError::ConfigRead {
                path: config_path.clone(),
                source: e,
            })?;

        Self::parse(&contents).map_err(|e| AdminError::ConfigParse {
            path: config_path,
            source: e,
        })
    }

    fn parse(contents: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    pub fn config_path() -> Result<PathBuf> {
        ProjectDirs::from("", "", "projadm")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .ok_or(AdminError::NoConfigDir)
    }

    /// Directory service base URL, env var taking precedence over config file
    pub fn api_url(&self) -> Result<Url> {
        let raw = std::env::var("PROJADM_API_URL")
            .ok()
            .or_else(|| self.api_url.clone())
            .ok_or(AdminError::MissingApiUrl)?;

        parse_base_url(&raw)
    }

    /// Bearer token, env var taking precedence over config file
    pub fn api_token(&self) -> Option<String> {
        std::env::var("PROJADM_API_TOKEN")
            .ok()
            .or_else(|| self.api_token.clone())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }
}

/// Parse a base URL, keeping a trailing slash so joins append instead of replace.
pub fn parse_base_url(raw: &str) -> Result<Url> {
    let mut url = Url::parse(raw.trim()).map_err(|_| AdminError::InvalidUrl(raw.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(AdminError::InvalidUrl(raw.to_string()));
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}
