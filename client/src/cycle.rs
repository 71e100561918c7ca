//! Caller-owned state for one result view.
//!
//! Each user action begins a new fetch cycle and receives a [`RequestToken`].
//! Only the result carrying the latest token is applied, so a slow request
//! that resolves after a newer one can never overwrite what is shown.

use pokefetch_model::{PokemonSummary, capitalize};

use crate::error::FetchError;
use crate::query::TypeSearch;

/// Identifies one fetch cycle; later cycles compare greater
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

/// Data shown after a successful cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    RandomBatch(Vec<PokemonSummary>),
    TypeSearch(TypeSearch),
}

impl View {
    pub fn summaries(&self) -> &[PokemonSummary] {
        match self {
            View::RandomBatch(summaries) => summaries,
            View::TypeSearch(search) => &search.results,
        }
    }

    /// The user-entered type for a type search
    pub fn type_label(&self) -> Option<&str> {
        match self {
            View::RandomBatch(_) => None,
            View::TypeSearch(search) => Some(&search.query),
        }
    }

    /// Heading for the result grid
    pub fn title(&self) -> String {
        match self {
            View::RandomBatch(summaries) => format!("Your {} Random Pokémon", summaries.len()),
            View::TypeSearch(search) => {
                format!("Your {} Type Pokémon", capitalize(search.query.trim()))
            }
        }
    }
}

impl From<Vec<PokemonSummary>> for View {
    fn from(summaries: Vec<PokemonSummary>) -> Self {
        View::RandomBatch(summaries)
    }
}

impl From<TypeSearch> for View {
    fn from(search: TypeSearch) -> Self {
        View::TypeSearch(search)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CycleState {
    #[default]
    Idle,
    Loading,
    Success(View),
    /// Message of the error that ended the cycle
    Failed(String),
}

#[derive(Debug, Default)]
pub struct FetchCycle {
    issued: u64,
    pending: Option<u64>,
    state: CycleState,
}

impl FetchCycle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new cycle from any state.
    ///
    /// Clears any shown results, error and type label, and supersedes every
    /// token issued before.
    pub fn begin(&mut self) -> RequestToken {
        self.issued += 1;
        self.pending = Some(self.issued);
        self.state = CycleState::Loading;
        RequestToken(self.issued)
    }

    /// Apply the outcome of the cycle identified by `token`.
    ///
    /// Returns `false` and leaves the state untouched when `token` is stale
    /// or already resolved.
    pub fn resolve<T>(&mut self, token: RequestToken, result: Result<T, FetchError>) -> bool
    where
        T: Into<View>,
    {
        if self.pending != Some(token.0) {
            tracing::debug!(
                token = token.0,
                latest = self.issued,
                "Discarding result of superseded fetch cycle"
            );
            return false;
        }

        self.pending = None;
        self.state = match result {
            Ok(data) => CycleState::Success(data.into()),
            Err(e) => CycleState::Failed(e.to_string()),
        };
        true
    }

    pub fn state(&self) -> &CycleState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, CycleState::Loading)
    }

    /// Results currently on display, if the last cycle succeeded
    pub fn view(&self) -> Option<&View> {
        match &self.state {
            CycleState::Success(view) => Some(view),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            CycleState::Failed(message) => Some(message),
            _ => None,
        }
    }
}
