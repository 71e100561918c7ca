//! Upstream JSON shapes for the `/pokemon/{id}` and `/type/{name}` resources.
//!
//! Only the fields the client reads are modelled; everything else in the
//! PokeAPI payloads is ignored by serde.

use serde::{Deserialize, Serialize};

/// A `{ name, url }` pair as PokeAPI uses for every cross-reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprites {
    #[serde(default)]
    pub front_default: Option<String>,
}

/// One entry of a Pokemon's `types` array
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeSlot {
    #[serde(default)]
    pub slot: Option<u8>,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

/// Body of `GET /pokemon/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonRecord {
    /// Kept optional so that a missing id is a validation error, not a decode error
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub sprites: Sprites,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
}

/// One entry of a type's `pokemon` membership array
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeMember {
    #[serde(default)]
    pub slot: Option<u8>,
    pub pokemon: NamedResource,
}

/// Body of `GET /type/{name}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub pokemon: Vec<TypeMember>,
}

impl PokemonRecord {
    /// Type names in upstream declaration order
    pub fn type_names(&self) -> Vec<String> {
        self.types.iter().map(|t| t.kind.name.clone()).collect()
    }
}

impl TypeRecord {
    /// Detail URLs of every member, in membership-list order
    pub fn member_urls(&self) -> impl Iterator<Item = &str> {
        self.pokemon.iter().map(|m| m.pokemon.url.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_pokemon_record() {
        let body = r#"{
            "id": 6,
            "name": "charizard",
            "height": 17,
            "sprites": { "front_default": "https://img/6.png", "back_default": null },
            "types": [
                { "slot": 1, "type": { "name": "fire", "url": "https://pokeapi.co/api/v2/type/10/" } },
                { "slot": 2, "type": { "name": "flying", "url": "https://pokeapi.co/api/v2/type/3/" } }
            ]
        }"#;

        let record: PokemonRecord = serde_json::from_str(body).unwrap();

        assert_eq!(record.id, Some(6));
        assert_eq!(record.name, "charizard");
        assert_eq!(record.sprites.front_default.as_deref(), Some("https://img/6.png"));
        assert_eq!(record.type_names(), vec!["fire", "flying"]);
    }

    #[test]
    fn test_decode_pokemon_record_null_sprite() {
        let body = r#"{
            "id": 10,
            "name": "caterpie",
            "sprites": { "front_default": null },
            "types": [{ "type": { "name": "bug" } }]
        }"#;

        let record: PokemonRecord = serde_json::from_str(body).unwrap();

        assert_eq!(record.sprites.front_default, None);
        assert_eq!(record.type_names(), vec!["bug"]);
    }

    #[test]
    fn test_decode_pokemon_record_missing_id() {
        let record: PokemonRecord = serde_json::from_str(r#"{ "name": "missingno" }"#).unwrap();

        assert_eq!(record.id, None);
        assert!(record.types.is_empty());
    }

    #[test]
    fn test_decode_type_record() {
        let body = r#"{
            "id": 10,
            "name": "fire",
            "pokemon": [
                { "slot": 1, "pokemon": { "name": "charmander", "url": "https://pokeapi.co/api/v2/pokemon/4/" } },
                { "slot": 1, "pokemon": { "name": "charmeleon", "url": "https://pokeapi.co/api/v2/pokemon/5/" } }
            ]
        }"#;

        let record: TypeRecord = serde_json::from_str(body).unwrap();
        let urls: Vec<&str> = record.member_urls().collect();

        assert_eq!(record.name, "fire");
        assert_eq!(
            urls,
            vec![
                "https://pokeapi.co/api/v2/pokemon/4/",
                "https://pokeapi.co/api/v2/pokemon/5/"
            ]
        );
    }

    #[test]
    fn test_decode_type_record_invalid() {
        let result = serde_json::from_str::<TypeRecord>(r#"{ "pokemon": [{ "slot": 1 }] }"#);

        assert!(result.is_err());
    }
}
