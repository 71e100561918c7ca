use serde::Serialize;

use crate::display::capitalize;
use crate::wire::PokemonRecord;
use crate::ModelError;

/// Normalized view of a single Pokemon, as rendered on a result card.
///
/// Construction validates the record, so a `PokemonSummary` always has a
/// positive id, a non-empty name and at least one type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PokemonSummary {
    id: u32,
    name: String,
    image_url: Option<String>,
    types: Vec<String>,
}

impl PokemonSummary {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        image_url: Option<String>,
        types: Vec<String>,
    ) -> Result<Self, ModelError> {
        let id = u32::try_from(id)
            .ok()
            .filter(|id| *id > 0)
            .ok_or(ModelError::InvalidId(Some(id)))?;

        let name = name.into();
        if name.is_empty() {
            return Err(ModelError::EmptyName);
        }

        if types.is_empty() {
            return Err(ModelError::NoTypes(id));
        }

        Ok(Self {
            id,
            name,
            image_url,
            types,
        })
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    /// Lowercase name as returned by upstream
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Default front sprite, if the species has one
    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    /// Type tokens in upstream declaration order
    pub fn types(&self) -> &[String] {
        &self.types
    }

    /// Name with its first letter uppercased, for card headings
    pub fn display_name(&self) -> String {
        capitalize(&self.name)
    }

    /// Capitalized type labels, for type badges
    pub fn type_labels(&self) -> Vec<String> {
        self.types.iter().map(|t| capitalize(t)).collect()
    }
}

impl TryFrom<PokemonRecord> for PokemonSummary {
    type Error = ModelError;

    fn try_from(record: PokemonRecord) -> Result<Self, Self::Error> {
        let types = record.type_names();
        let id = record.id.ok_or(ModelError::InvalidId(None))?;
        Self::new(id, record.name, record.sprites.front_default, types)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wire::{NamedResource, Sprites, TypeSlot};

    fn record(id: Option<i64>, name: &str, types: &[&str]) -> PokemonRecord {
        PokemonRecord {
            id,
            name: name.to_string(),
            sprites: Sprites {
                front_default: Some(format!("https://img/{name}.png")),
            },
            types: types
                .iter()
                .enumerate()
                .map(|(i, t)| TypeSlot {
                    slot: Some(i as u8 + 1),
                    kind: NamedResource {
                        name: t.to_string(),
                        url: String::new(),
                    },
                })
                .collect(),
        }
    }

    #[test]
    fn test_from_record() {
        let summary = PokemonSummary::try_from(record(Some(1), "bulbasaur", &["grass", "poison"]))
            .unwrap();

        assert_eq!(summary.id(), 1);
        assert_eq!(summary.name(), "bulbasaur");
        assert_eq!(summary.image_url(), Some("https://img/bulbasaur.png"));
        assert_eq!(summary.types(), ["grass", "poison"]);
    }

    #[test]
    fn test_missing_id() {
        let result = PokemonSummary::try_from(record(None, "bulbasaur", &["grass"]));

        assert_eq!(result, Err(ModelError::InvalidId(None)));
    }

    #[test]
    fn test_non_positive_id() {
        assert_eq!(
            PokemonSummary::new(0, "x", None, vec!["normal".into()]),
            Err(ModelError::InvalidId(Some(0)))
        );
        assert_eq!(
            PokemonSummary::new(-4, "x", None, vec!["normal".into()]),
            Err(ModelError::InvalidId(Some(-4)))
        );
    }

    #[test]
    fn test_empty_types() {
        let result = PokemonSummary::try_from(record(Some(25), "pikachu", &[]));

        assert_eq!(result, Err(ModelError::NoTypes(25)));
    }

    #[test]
    fn test_empty_name() {
        let result = PokemonSummary::new(25, "", None, vec!["electric".into()]);

        assert_eq!(result, Err(ModelError::EmptyName));
    }

    #[test]
    fn test_display_labels() {
        let summary =
            PokemonSummary::new(6, "charizard", None, vec!["fire".into(), "flying".into()])
                .unwrap();

        assert_eq!(summary.display_name(), "Charizard");
        assert_eq!(summary.type_labels(), vec!["Fire", "Flying"]);
        assert_eq!(summary.image_url(), None);
    }
}
