//! JSON shapes returned by the catalog API.
//!
//! Only the fields the app reads are modelled; everything else in the payload is
//! ignored. Collections default to empty so a sparse payload still decodes.

use crate::model::{Ability, Pokemon, PokemonDetail, PokemonRef, Stat};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IndexResponse {
    #[serde(default)]
    pub results: Vec<PokemonRef>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Sprites {
    pub front_default: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AbilitySlot {
    pub ability: NamedResource,
    #[serde(default)]
    pub is_hidden: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatSlot {
    pub stat: NamedResource,
    pub base_stat: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DetailResponse {
    #[serde(default)]
    pub id: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub sprites: Sprites,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
    pub height: u32,
    pub weight: u32,
    pub base_experience: Option<u32>,
    #[serde(default)]
    pub abilities: Vec<AbilitySlot>,
    #[serde(default)]
    pub stats: Vec<StatSlot>,
}

impl DetailResponse {
    fn type_names(&self) -> Vec<String> {
        self.types.iter().map(|slot| slot.kind.name.clone()).collect()
    }

    /// Merges the listing fields into the basic reference. Name and URL stay as
    /// the index reported them.
    pub fn enrich(&self, basic: PokemonRef) -> Pokemon {
        Pokemon {
            image_url: self.sprites.front_default.clone(),
            types: Some(self.type_names()),
            height: Some(self.height),
            weight: Some(self.weight),
            base_experience: self.base_experience,
            ..Pokemon::from(basic)
        }
    }

    pub fn into_detail(self) -> PokemonDetail {
        let types = self.type_names();
        PokemonDetail {
            id: self.id,
            name: self.name,
            image_url: self.sprites.front_default,
            types,
            height: self.height,
            weight: self.weight,
            base_experience: self.base_experience,
            abilities: self
                .abilities
                .into_iter()
                .map(|slot| Ability {
                    name: slot.ability.name,
                    is_hidden: slot.is_hidden,
                })
                .collect(),
            stats: self
                .stats
                .into_iter()
                .map(|slot| Stat {
                    name: slot.stat.name,
                    base_stat: slot.base_stat,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PIKACHU: &str = r#"{
        "id": 25,
        "name": "pikachu",
        "base_experience": 112,
        "height": 4,
        "weight": 60,
        "order": 35,
        "sprites": {"front_default": "https://img.test/25.png", "back_default": null},
        "types": [{"slot": 1, "type": {"name": "electric", "url": "https://x.test/type/13/"}}],
        "abilities": [
            {"ability": {"name": "static", "url": "u"}, "is_hidden": false, "slot": 1},
            {"ability": {"name": "lightning-rod", "url": "u"}, "is_hidden": true, "slot": 3}
        ],
        "stats": [
            {"base_stat": 35, "effort": 0, "stat": {"name": "hp", "url": "u"}},
            {"base_stat": 90, "effort": 2, "stat": {"name": "speed", "url": "u"}}
        ]
    }"#;

    #[test]
    fn decodes_detail_payload_and_ignores_extra_fields() {
        let detail: DetailResponse = serde_json::from_str(PIKACHU).unwrap();
        let detail = detail.into_detail();

        assert_eq!(detail.id, 25);
        assert_eq!(detail.types, vec!["electric"]);
        assert_eq!(detail.base_experience, Some(112));
        assert_eq!(detail.abilities.len(), 2);
        assert!(detail.abilities[1].is_hidden);
        assert_eq!(detail.stats[1].name, "speed");
        assert_eq!(detail.stats[1].base_stat, 90);
    }

    #[test]
    fn enrich_keeps_index_name_and_url() {
        let detail: DetailResponse = serde_json::from_str(PIKACHU).unwrap();
        let basic = PokemonRef::new("pikachu", "https://pokeapi.co/api/v2/pokemon/25/");

        let pokemon = detail.enrich(basic.clone());
        assert_eq!(pokemon.name, basic.name);
        assert_eq!(pokemon.url, basic.url);
        assert_eq!(pokemon.image_url.as_deref(), Some("https://img.test/25.png"));
        assert_eq!(pokemon.height, Some(4));
        assert_eq!(pokemon.weight, Some(60));
    }

    #[test]
    fn tolerates_null_experience_and_sprite() {
        let json = r#"{"height": 10, "weight": 20, "base_experience": null,
                       "sprites": {"front_default": null}}"#;
        let detail: DetailResponse = serde_json::from_str(json).unwrap();
        let pokemon = detail.enrich(PokemonRef::new("x", "https://x.test/pokemon/1/"));

        assert_eq!(pokemon.base_experience, None);
        assert_eq!(pokemon.image_url, None);
        assert_eq!(pokemon.types, Some(vec![]));
    }

    #[test]
    fn decodes_index_payload() {
        let json = r#"{"count": 2, "next": null, "results": [
            {"name": "bulbasaur", "url": "https://x.test/pokemon/1/"},
            {"name": "ivysaur", "url": "https://x.test/pokemon/2/"}
        ]}"#;
        let index: IndexResponse = serde_json::from_str(json).unwrap();
        assert_eq!(index.results.len(), 2);
        assert_eq!(index.results[1].name, "ivysaur");
    }
}
