//! Async PokeAPI client producing random and type-filtered result sets.
//!
//! ```ignore
//! use pokefetch_client::{ClientConfig, FetchCycle, PokemonClient};
//!
//! let client = PokemonClient::new(ClientConfig::from_env()?)?;
//! let mut cycle = FetchCycle::new();
//!
//! let token = cycle.begin();
//! let result = client.fetch_by_type("fuego").await;
//! cycle.resolve(token, result);
//! ```

mod config;
pub mod cycle;
pub mod endpoints;
mod error;
mod query;
pub mod sampling;
mod upstream;


use std::future::Future;
use std::num::NonZeroUsize;
use std::sync::Arc;

use futures_util::{StreamExt, TryFutureExt, TryStreamExt, future, stream};
use reqwest::Url;

pub use pokefetch_model::{ElementalType, ModelError, PokemonSummary, normalize_type_name};

pub use config::{
    ClientConfig, ConfigError, DEFAULT_BASE_URL, DEFAULT_BATCH_SIZE, DEFAULT_CATALOG_SIZE,
    DEFAULT_MAX_CONCURRENT_FETCHES,
};
pub use cycle::{CycleState, FetchCycle, RequestToken, View};
pub use error::{FetchError, FetchTarget};
pub use query::{TypeQuery, TypeSearch};
pub use upstream::{HttpUpstream, TransportError, Upstream, UpstreamResponse};

use pokefetch_model::{PokemonRecord, TypeRecord};

/// Fetches Pokémon from the upstream catalog and normalizes them into
/// [`PokemonSummary`] records.
///
/// Cloning is cheap; clones share the same transport.
#[derive(Clone)]
pub struct PokemonClient {
    upstream: Arc<dyn Upstream>,
    config: ClientConfig,
}

impl PokemonClient {
    /// Create a client talking HTTP to `config.base_url`
    pub fn new(config: ClientConfig) -> Result<Self, TransportError> {
        let upstream = HttpUpstream::new(config.request_timeout)?;
        Ok(Self::with_upstream(config, Arc::new(upstream)))
    }

    /// Create a client over any [`Upstream`]
    pub fn with_upstream(config: ClientConfig, upstream: Arc<dyn Upstream>) -> Self {
        Self { upstream, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// A random batch using the configured batch and catalog sizes
    pub async fn random_batch(&self) -> Result<Vec<PokemonSummary>, FetchError> {
        self.fetch_random_batch(self.config.batch_size, self.config.catalog_size)
            .await
    }

    /// Fetch `count` distinct random Pokémon with ids in `[1, catalog_size]`.
    ///
    /// Details are fetched one at a time; the first failure aborts the batch.
    pub async fn fetch_random_batch(
        &self,
        count: usize,
        catalog_size: u32,
    ) -> Result<Vec<PokemonSummary>, FetchError> {
        let ids = sampling::random_ids(count, catalog_size)?;
        tracing::debug!(?ids, catalog_size, "Selected random Pokemon ids");
        self.fetch_ids(&ids).await
    }

    /// Like [`fetch_random_batch`](Self::fetch_random_batch), with candidate
    /// ids taken from `draw` instead of the thread-local RNG.
    ///
    /// Useful for seeded generators. Duplicate draws are skipped before any
    /// request is made.
    pub async fn fetch_random_batch_with<F>(
        &self,
        count: usize,
        catalog_size: u32,
        draw: F,
    ) -> Result<Vec<PokemonSummary>, FetchError>
    where
        F: FnMut() -> u32,
    {
        let ids = sampling::pick_unique_ids(count, catalog_size, draw)?;
        tracing::debug!(?ids, catalog_size, "Selected Pokemon ids");
        self.fetch_ids(&ids).await
    }

    /// Fetch the given ids sequentially, in order, failing on the first error
    pub async fn fetch_ids(&self, ids: &[u32]) -> Result<Vec<PokemonSummary>, FetchError> {
        let mut summaries = Vec::with_capacity(ids.len());
        for &id in ids {
            let url = endpoints::pokemon_url(&self.config.base_url, id)?;
            summaries.push(self.fetch_detail(url, FetchTarget::Id(id)).await?);
        }
        Ok(summaries)
    }

    /// Fetch every member of the type named by `raw_query`.
    ///
    /// Spanish type names are translated first. Member details are fetched
    /// concurrently, up to the configured cap; any failure fails the search.
    pub async fn fetch_by_type(&self, raw_query: &str) -> Result<TypeSearch, FetchError> {
        let query = TypeQuery::parse(raw_query)?;
        let record = self.fetch_type(&query).await?;

        let targets = record
            .member_urls()
            .map(|raw| -> Result<_, FetchError> {
                let target = FetchTarget::Url(raw.to_string());
                match endpoints::member_url(raw) {
                    Ok(url) => Ok((url, target)),
                    Err(e) => {
                        tracing::warn!(%target, error = %e, "Pokemon fetch failed");
                        Err(FetchError::UpstreamFetch {
                            target,
                            status: e.to_string(),
                        })
                    }
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(
            query = query.raw(),
            type_name = query.normalized(),
            members = targets.len(),
            cap = ?self.config.max_concurrent_fetches,
            "Fetching type members"
        );

        let fetches = targets
            .into_iter()
            .map(|(url, target)| self.fetch_detail(url, target));
        let results = join_all_or_nothing(fetches, self.config.max_concurrent_fetches).await?;

        Ok(TypeSearch {
            query: query.raw().to_string(),
            results,
        })
    }

    async fn fetch_type(&self, query: &TypeQuery) -> Result<TypeRecord, FetchError> {
        let url = endpoints::type_url(&self.config.base_url, query.normalized())?;
        tracing::debug!(%url, "Fetching type");

        let unknown = |status: String| FetchError::UnknownType {
            query: query.raw().to_string(),
            status,
        };

        let response = match self.upstream.get(&url).await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(%url, error = %e, "Type lookup failed");
                return Err(unknown(e.to_string()));
            }
        };

        if !response.is_success() {
            tracing::warn!(%url, status = response.status, "Type lookup failed");
            return Err(unknown(response.status_text));
        }

        serde_json::from_str(&response.body).map_err(|source| FetchError::TypeDecode {
            query: query.raw().to_string(),
            source,
        })
    }

    async fn fetch_detail(
        &self,
        url: Url,
        target: FetchTarget,
    ) -> Result<PokemonSummary, FetchError> {
        tracing::debug!(%url, "Fetching Pokemon");

        let response = match self.upstream.get(&url).await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(%target, error = %e, "Pokemon fetch failed");
                return Err(FetchError::UpstreamFetch {
                    target,
                    status: e.to_string(),
                });
            }
        };

        if !response.is_success() {
            tracing::warn!(%target, status = response.status, "Pokemon fetch failed");
            return Err(FetchError::UpstreamFetch {
                target,
                status: response.status_text,
            });
        }

        let record: PokemonRecord =
            serde_json::from_str(&response.body).map_err(|source| FetchError::Decode {
                target: target.clone(),
                source,
            })?;

        PokemonSummary::try_from(record)
            .map_err(|source| FetchError::InvalidRecord { target, source })
    }
}

/// Run `fetches` with at most `cap` in flight and collect them in input order.
///
/// The first failure, in completion order, drops every outstanding fetch and
/// is returned alone. A partial-success policy would replace this function.
async fn join_all_or_nothing<F, T>(
    fetches: impl IntoIterator<Item = F>,
    cap: Option<NonZeroUsize>,
) -> Result<Vec<T>, FetchError>
where
    F: Future<Output = Result<T, FetchError>>,
{
    let Some(cap) = cap else {
        return future::try_join_all(fetches).await;
    };

    let indexed_fetches: Vec<_> = fetches
        .into_iter()
        .enumerate()
        .map(|(index, fetch)| fetch.map_ok(move |value| (index, value)))
        .collect();

    let mut indexed: Vec<(usize, T)> = stream::iter(indexed_fetches)
        .buffer_unordered(cap.get())
        .try_collect()
        .await?;

    indexed.sort_by_key(|(index, _)| *index);
    Ok(indexed.into_iter().map(|(_, value)| value).collect())
}
