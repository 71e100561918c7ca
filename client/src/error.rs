use std::fmt;

use pokefetch_model::ModelError;
use thiserror::Error;

/// What a failed detail fetch was pointed at
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchTarget {
    /// A random-batch fetch by numeric id
    Id(u32),
    /// A type-member fetch by the detail URL upstream handed out
    Url(String),
}

impl fmt::Display for FetchTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchTarget::Id(id) => write!(f, "with id {}", id),
            FetchTarget::Url(url) => write!(f, "from {}", url),
        }
    }
}

/// Failure of a single fetch cycle.
///
/// Every variant is terminal for the cycle: no partial data accompanies it.
/// The `Display` text is what a shell shows to the user.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Please enter a valid Pokémon type")]
    InvalidQuery,

    #[error("Type \"{query}\" not found ({status})")]
    UnknownType { query: String, status: String },

    #[error("Failed to decode type \"{query}\": {source}")]
    TypeDecode {
        query: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to load Pokémon {target}: {status}")]
    UpstreamFetch { target: FetchTarget, status: String },

    #[error("Failed to decode Pokémon {target}: {source}")]
    Decode {
        target: FetchTarget,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid Pokémon record {target}: {source}")]
    InvalidRecord {
        target: FetchTarget,
        #[source]
        source: ModelError,
    },

    #[error("Cannot pick {count} distinct ids from a catalog of {catalog_size}")]
    InvalidBatch { count: usize, catalog_size: u32 },

    #[error("Invalid endpoint: {0}")]
    Endpoint(String),
}

impl FetchError {
    /// True for input problems caught before any network access.
    ///
    /// Shells show these as a blocking notice instead of replacing the
    /// displayed results with an error state.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            FetchError::InvalidQuery | FetchError::InvalidBatch { .. }
        )
    }

    /// The target of a failed detail fetch, if this error came from one
    pub fn target(&self) -> Option<&FetchTarget> {
        match self {
            FetchError::UpstreamFetch { target, .. }
            | FetchError::Decode { target, .. }
            | FetchError::InvalidRecord { target, .. } => Some(target),
            _ => None,
        }
    }
}
