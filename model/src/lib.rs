//! Data model for the PokeAPI result client.
//!
//! This crate holds everything that does not touch the network:
//!
//! ```text
//! pokefetch-model (wire shapes + summaries + type names) ← THIS CRATE
//!        │
//!        ▼
//! pokefetch-client (fetching, aggregation, fetch cycles)
//! ```
//!
//! # Main Types
//!
//! - [`PokemonRecord`], [`TypeRecord`] - upstream JSON shapes
//! - [`PokemonSummary`] - validated, immutable record handed to the UI
//! - [`ElementalType`] - the 18 canonical types
//! - [`normalize_type_name`] - Spanish → upstream type token lookup

use thiserror::Error;

pub mod display;
pub mod summary;
pub mod types;
pub mod wire;

pub use display::capitalize;
pub use summary::PokemonSummary;
pub use types::{ElementalType, TYPE_TRANSLATIONS, normalize_type_name};
pub use wire::{NamedResource, PokemonRecord, Sprites, TypeMember, TypeRecord, TypeSlot};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("Invalid Pokemon id: {0:?}")]
    InvalidId(Option<i64>),

    #[error("Pokemon record has an empty name")]
    EmptyName,

    #[error("Pokemon {0} has no types")]
    NoTypes(u32),
}
