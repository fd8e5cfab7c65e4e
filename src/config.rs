use std::path::PathBuf;

use directories::ProjectDirs;
use serde::Deserialize;
use url::Url;

use crate::error::{GhQueryError, Result};

pub const TOKEN_ENV_VAR: &str = "GITHUB_PAT";
pub const DEFAULT_ENDPOINT: &str = "https://api.github.com/graphql";
pub const DEFAULT_PAGE_SIZE: u32 = 80;

/// Optional settings read from `config.toml`. The token is only ever taken
/// from the environment.
#[derive(Deserialize, Default, Debug)]
pub struct Config {
    pub endpoint: Option<String>,
    pub page_size: Option<u32>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            return Ok(Config::default());
        }

        let contents =
            std::fs::read_to_string(&config_path).map_err(|e| GhQueryError::ConfigRead {
                path: config_path.clone(),
                source: e,
            })?;

        Self::parse(&contents).map_err(|e| GhQueryError::ConfigParse {
            path: config_path,
            source: e,
        })
    }

    fn parse(contents: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    pub fn config_path() -> Result<PathBuf> {
        ProjectDirs::from("", "", "gh-query")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .ok_or(GhQueryError::NoConfigDir)
    }

    /// GraphQL endpoint, validated as a URL
    pub fn endpoint(&self) -> Result<Url> {
        let raw = self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT);
        Url::parse(raw).map_err(|_| GhQueryError::InvalidUrl(raw.to_string()))
    }

    /// Get page size, preferring explicit argument over config
    pub fn resolve_page_size(&self, explicit: Option<u32>) -> u32 {
        explicit.or(self.page_size).unwrap_or(DEFAULT_PAGE_SIZE)
    }
}

/// Read the API token from `GITHUB_PAT`.
pub fn token_from_env() -> Result<String> {
    resolve_token(std::env::var(TOKEN_ENV_VAR).ok())
}

/// An unset and an empty token are equally fatal.
pub fn resolve_token(raw: Option<String>) -> Result<String> {
    match raw {
        Some(token) if !token.trim().is_empty() => Ok(token),
        _ => Err(GhQueryError::MissingToken),
    }
}
