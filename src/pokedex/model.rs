use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A catalog entry as returned by the index endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonRef {
    pub name: String,
    pub url: String,
}

impl PokemonRef {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// A catalog entry with whatever detail fields could be fetched.
///
/// Every optional field is `None` when the detail request failed. `None` means
/// "unknown" for display purposes; sorting treats a missing number as 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pokemon {
    pub name: String,
    pub url: String,
    pub image_url: Option<String>,
    pub types: Option<Vec<String>>,
    pub height: Option<u32>,
    pub weight: Option<u32>,
    pub base_experience: Option<u32>,
}

impl Pokemon {
    pub fn id(&self) -> Option<u32> {
        pokemon_id(&self.url)
    }

    /// Exact membership check against the fetched type names.
    pub fn has_type(&self, kind: PokemonType) -> bool {
        self.types
            .as_deref()
            .is_some_and(|types| types.iter().any(|t| t == kind.as_str()))
    }

    pub fn is_enriched(&self) -> bool {
        self.types.is_some()
    }
}

impl From<PokemonRef> for Pokemon {
    fn from(basic: PokemonRef) -> Self {
        Self {
            name: basic.name,
            url: basic.url,
            image_url: None,
            types: None,
            height: None,
            weight: None,
            base_experience: None,
        }
    }
}

/// Extracts the trailing numeric path segment of a resource URL.
///
/// `https://pokeapi.co/api/v2/pokemon/25/` yields `Some(25)`.
pub fn pokemon_id(resource_url: &str) -> Option<u32> {
    let parsed = url::Url::parse(resource_url).ok()?;
    parsed
        .path_segments()?
        .filter(|segment| !segment.is_empty())
        .next_back()?
        .parse()
        .ok()
}

/// The fixed set of types offered by the type filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PokemonType {
    Grass,
    Fire,
    Water,
    Poison,
    Bug,
    Rock,
    Electric,
    Fairy,
    Psychic,
    Ghost,
    Ground,
    Dark,
    Steel,
    Ice,
    Flying,
    Normal,
    Fighting,
    Dragon,
}

impl PokemonType {
    pub const ALL: [PokemonType; 18] = [
        PokemonType::Grass,
        PokemonType::Fire,
        PokemonType::Water,
        PokemonType::Poison,
        PokemonType::Bug,
        PokemonType::Rock,
        PokemonType::Electric,
        PokemonType::Fairy,
        PokemonType::Psychic,
        PokemonType::Ghost,
        PokemonType::Ground,
        PokemonType::Dark,
        PokemonType::Steel,
        PokemonType::Ice,
        PokemonType::Flying,
        PokemonType::Normal,
        PokemonType::Fighting,
        PokemonType::Dragon,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PokemonType::Grass => "grass",
            PokemonType::Fire => "fire",
            PokemonType::Water => "water",
            PokemonType::Poison => "poison",
            PokemonType::Bug => "bug",
            PokemonType::Rock => "rock",
            PokemonType::Electric => "electric",
            PokemonType::Fairy => "fairy",
            PokemonType::Psychic => "psychic",
            PokemonType::Ghost => "ghost",
            PokemonType::Ground => "ground",
            PokemonType::Dark => "dark",
            PokemonType::Steel => "steel",
            PokemonType::Ice => "ice",
            PokemonType::Flying => "flying",
            PokemonType::Normal => "normal",
            PokemonType::Fighting => "fighting",
            PokemonType::Dragon => "dragon",
        }
    }
}

impl fmt::Display for PokemonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PokemonType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        PokemonType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == wanted)
            .ok_or_else(|| format!("Unknown type: {}", s))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ability {
    pub name: String,
    pub is_hidden: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub name: String,
    pub base_stat: u32,
}

/// Everything the detail view shows for a single Pokémon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonDetail {
    pub id: u32,
    pub name: String,
    pub image_url: Option<String>,
    pub types: Vec<String>,
    pub height: u32,
    pub weight: u32,
    pub base_experience: Option<u32>,
    pub abilities: Vec<Ability>,
    pub stats: Vec<Stat>,
}
