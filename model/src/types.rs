//! Pokemon type vocabulary and the Spanish type-name dictionary

/// Pokemon types (18 types as of Gen 6+)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementalType {
    Normal,
    Fire,
    Water,
    Electric,
    Grass,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dragon,
    Dark,
    Steel,
    Fairy,
}

/// Spanish type name (lowercase) → upstream type.
///
/// Keys are matched after lowercasing user input. The table is fixed and
/// must not be derived from the API.
pub static TYPE_TRANSLATIONS: [(&str, ElementalType); 18] = [
    ("fuego", ElementalType::Fire),
    ("agua", ElementalType::Water),
    ("planta", ElementalType::Grass),
    ("eléctrico", ElementalType::Electric),
    ("hielo", ElementalType::Ice),
    ("lucha", ElementalType::Fighting),
    ("veneno", ElementalType::Poison),
    ("tierra", ElementalType::Ground),
    ("volador", ElementalType::Flying),
    ("psíquico", ElementalType::Psychic),
    ("bicho", ElementalType::Bug),
    ("roca", ElementalType::Rock),
    ("fantasma", ElementalType::Ghost),
    ("dragón", ElementalType::Dragon),
    ("siniestro", ElementalType::Dark),
    ("acero", ElementalType::Steel),
    ("hada", ElementalType::Fairy),
    ("normal", ElementalType::Normal),
];

impl ElementalType {
    /// All 18 Pokemon types
    pub const ALL: [ElementalType; 18] = [
        ElementalType::Normal,
        ElementalType::Fire,
        ElementalType::Water,
        ElementalType::Electric,
        ElementalType::Grass,
        ElementalType::Ice,
        ElementalType::Fighting,
        ElementalType::Poison,
        ElementalType::Ground,
        ElementalType::Flying,
        ElementalType::Psychic,
        ElementalType::Bug,
        ElementalType::Rock,
        ElementalType::Ghost,
        ElementalType::Dragon,
        ElementalType::Dark,
        ElementalType::Steel,
        ElementalType::Fairy,
    ];

    /// Get all types as a slice
    pub fn all() -> &'static [ElementalType] {
        &Self::ALL
    }

    /// Parse from an upstream type token (case-insensitive)
    pub fn from_upstream(s: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
    }

    /// Look up a Spanish type name (case-insensitive)
    pub fn from_spanish(s: &str) -> Option<Self> {
        let key = s.to_lowercase();
        TYPE_TRANSLATIONS
            .iter()
            .find(|(spanish, _)| *spanish == key)
            .map(|(_, t)| *t)
    }

    /// Upstream token, as used in `/type/{name}` and in Pokemon records
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementalType::Normal => "normal",
            ElementalType::Fire => "fire",
            ElementalType::Water => "water",
            ElementalType::Electric => "electric",
            ElementalType::Grass => "grass",
            ElementalType::Ice => "ice",
            ElementalType::Fighting => "fighting",
            ElementalType::Poison => "poison",
            ElementalType::Ground => "ground",
            ElementalType::Flying => "flying",
            ElementalType::Psychic => "psychic",
            ElementalType::Bug => "bug",
            ElementalType::Rock => "rock",
            ElementalType::Ghost => "ghost",
            ElementalType::Dragon => "dragon",
            ElementalType::Dark => "dark",
            ElementalType::Steel => "steel",
            ElementalType::Fairy => "fairy",
        }
    }

    /// Spanish name, the key this type has in [`TYPE_TRANSLATIONS`]
    pub fn spanish_name(&self) -> &'static str {
        match self {
            ElementalType::Normal => "normal",
            ElementalType::Fire => "fuego",
            ElementalType::Water => "agua",
            ElementalType::Electric => "eléctrico",
            ElementalType::Grass => "planta",
            ElementalType::Ice => "hielo",
            ElementalType::Fighting => "lucha",
            ElementalType::Poison => "veneno",
            ElementalType::Ground => "tierra",
            ElementalType::Flying => "volador",
            ElementalType::Psychic => "psíquico",
            ElementalType::Bug => "bicho",
            ElementalType::Rock => "roca",
            ElementalType::Ghost => "fantasma",
            ElementalType::Dragon => "dragón",
            ElementalType::Dark => "siniestro",
            ElementalType::Steel => "acero",
            ElementalType::Fairy => "hada",
        }
    }
}

impl std::fmt::Display for ElementalType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Translate a user-entered type name into the upstream token.
///
/// Lowercases the input and looks it up in [`TYPE_TRANSLATIONS`]. Anything
/// not in the table comes back lowercased and otherwise unchanged, so the
/// function is total and idempotent.
pub fn normalize_type_name(input: &str) -> String {
    let lowered = input.to_lowercase();
    match ElementalType::from_spanish(&lowered) {
        Some(t) => t.as_str().to_string(),
        None => lowered,
    }
}
