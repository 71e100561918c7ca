use std::num::NonZeroUsize;
use std::str::FromStr;
use std::time::Duration;

use reqwest::Url;
use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2/";
pub const DEFAULT_BATCH_SIZE: usize = 6;
pub const DEFAULT_CATALOG_SIZE: u32 = 898;
pub const DEFAULT_MAX_CONCURRENT_FETCHES: usize = 16;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value {value:?} for {key}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Settings for [`PokemonClient`](crate::PokemonClient)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Root of the REST API; resources are resolved relative to it
    pub base_url: Url,
    /// Number of Pokémon in a random batch
    pub batch_size: usize,
    /// Highest valid id in the upstream catalog
    pub catalog_size: u32,
    /// Cap on concurrent detail fetches during a type search, `None` for no cap
    pub max_concurrent_fetches: Option<NonZeroUsize>,
    /// Per-request timeout, `None` for the transport default
    pub request_timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            batch_size: DEFAULT_BATCH_SIZE,
            catalog_size: DEFAULT_CATALOG_SIZE,
            max_concurrent_fetches: NonZeroUsize::new(DEFAULT_MAX_CONCURRENT_FETCHES),
            request_timeout: None,
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    pub fn with_catalog_size(mut self, catalog_size: u32) -> Self {
        self.catalog_size = catalog_size;
        self
    }

    /// `0` removes the cap
    pub fn with_max_concurrent_fetches(mut self, max: usize) -> Self {
        self.max_concurrent_fetches = NonZeroUsize::new(max);
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Defaults overridden by `POKEFETCH_*` environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each `POKEFETCH_*` key
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = parse_var::<Url, _>(&lookup, "POKEFETCH_BASE_URL")? {
            config.base_url = url;
        }
        if let Some(size) = parse_var::<usize, _>(&lookup, "POKEFETCH_BATCH_SIZE")? {
            config.batch_size = size;
        }
        if let Some(size) = parse_var::<u32, _>(&lookup, "POKEFETCH_CATALOG_SIZE")? {
            config.catalog_size = size;
        }
        if let Some(max) = parse_var::<usize, _>(&lookup, "POKEFETCH_MAX_CONCURRENCY")? {
            config.max_concurrent_fetches = NonZeroUsize::new(max);
        }
        if let Some(secs) = parse_var::<u64, _>(&lookup, "POKEFETCH_TIMEOUT_SECS")? {
            config.request_timeout = Some(Duration::from_secs(secs));
        }

        Ok(config)
    }
}

fn parse_var<T, F>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    let Some(value) = lookup(key) else {
        return Ok(None);
    };

    match value.trim().parse::<T>() {
        Ok(parsed) => Ok(Some(parsed)),
        Err(e) => Err(ConfigError::Invalid {
            key,
            reason: e.to_string(),
            value,
        }),
    }
}
