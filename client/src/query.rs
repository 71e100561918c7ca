use pokefetch_model::{ElementalType, PokemonSummary, normalize_type_name};

use crate::error::FetchError;

/// A validated type search, before any network access
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeQuery {
    raw: String,
    normalized: String,
}

impl TypeQuery {
    /// Reject blank input and translate the rest into an upstream type token
    pub fn parse(raw: &str) -> Result<Self, FetchError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(FetchError::InvalidQuery);
        }

        Ok(Self {
            raw: raw.to_string(),
            normalized: normalize_type_name(trimmed),
        })
    }

    /// What the user typed, kept for display
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Token sent upstream, e.g. `fire` for `Fuego`
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// The canonical type this query resolves to, if any
    pub fn known_type(&self) -> Option<ElementalType> {
        ElementalType::from_upstream(&self.normalized)
    }
}

/// Result of a successful type search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeSearch {
    /// The user's original input, not the translated token
    pub query: String,
    /// One summary per type member, in membership-list order
    pub results: Vec<PokemonSummary>,
}
