//! Profession catalog: additive starting bonuses keyed by profession id.

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::error::GameError;

const DEFAULT_PROFESSIONS_DATA: &str = include_str!("../assets/data/professions.json");

/// Additive deltas applied to the difficulty preset at game start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ProfessionBonus {
    #[serde(default)]
    pub food: i32,
    #[serde(default)]
    pub ammo: i32,
    #[serde(default)]
    pub money: i32,
    #[serde(default)]
    pub health: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profession {
    pub id: String,
    pub name: String,
    pub desc: String,
    #[serde(default)]
    pub bonus: ProfessionBonus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
struct ProfessionNoId {
    pub name: String,
    pub desc: String,
    #[serde(default)]
    pub bonus: ProfessionBonus,
}

impl Profession {
    fn with_id(id: String, p: ProfessionNoId) -> Self {
        Self {
            id,
            name: p.name,
            desc: p.desc,
            bonus: p.bonus,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ProfessionsList(pub Vec<Profession>);

impl ProfessionsList {
    #[must_use]
    pub const fn empty() -> Self {
        Self(vec![])
    }

    /// Load professions from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed into profession data.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let map: std::collections::HashMap<String, ProfessionNoId> = serde_json::from_str(json)?;
        let order = ["banker", "carpenter", "doctor", "farmer"];
        let mut v = Vec::with_capacity(order.len());
        for id in order {
            if let Some(p) = map.get(id) {
                v.push(Profession::with_id(id.to_string(), p.clone()));
            }
        }
        Ok(Self(v))
    }

    #[must_use]
    pub fn get_by_id(&self, id: &str) -> Option<&Profession> {
        self.0.iter().find(|p| p.id == id)
    }

    /// Resolve a user-supplied tag, trimmed and case-insensitive.
    ///
    /// # Errors
    ///
    /// Returns `UnknownOption` when the tag names no known profession.
    pub fn resolve(&self, tag: &str) -> Result<&Profession, GameError> {
        let key = tag.trim().to_lowercase();
        self.get_by_id(&key).ok_or_else(|| GameError::UnknownOption {
            kind: "profession",
            value: tag.to_string(),
        })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Profession> {
        self.0.iter()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a ProfessionsList {
    type Item = &'a Profession;
    type IntoIter = std::slice::Iter<'a, Profession>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Embedded profession catalog, parsed once.
#[must_use]
pub fn professions() -> &'static ProfessionsList {
    static CATALOG: OnceLock<ProfessionsList> = OnceLock::new();
    CATALOG.get_or_init(|| {
        ProfessionsList::from_json(DEFAULT_PROFESSIONS_DATA)
            .expect("valid embedded profession catalog")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_catalog_orders_known_ids() {
        let list = professions();
        let ids: Vec<_> = list.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["banker", "carpenter", "doctor", "farmer"]);
    }

    #[test]
    fn embedded_bonuses_match_tuning() {
        let list = professions();
        assert_eq!(list.get_by_id("banker").unwrap().bonus.money, 600);
        let farmer = list.get_by_id("farmer").unwrap();
        assert_eq!(farmer.bonus.food, 50);
        assert_eq!(farmer.bonus.health, 5);
        assert_eq!(list.get_by_id("doctor").unwrap().bonus.health, 10);
        let carpenter = list.get_by_id("carpenter").unwrap();
        assert_eq!(carpenter.bonus.ammo, 10);
        assert_eq!(carpenter.bonus.money, 0);
    }

    #[test]
    fn resolve_trims_and_lowercases() {
        let list = professions();
        assert_eq!(list.resolve("  FARMER ").unwrap().id, "farmer");
    }

    #[test]
    fn resolve_rejects_unknown_tags() {
        let err = professions().resolve("astronaut").unwrap_err();
        assert_eq!(
            err,
            GameError::UnknownOption {
                kind: "profession",
                value: "astronaut".to_string(),
            }
        );
    }

    #[test]
    fn json_parsing_filters_unknown_entries() {
        let json = r#"{
            "farmer": { "name": "Farmer", "desc": "Test", "bonus": { "food": 50 } },
            "astronaut": { "name": "Astronaut", "desc": "Ignored" }
        }"#;
        let list = ProfessionsList::from_json(json).unwrap();
        assert_eq!(list.len(), 1);
        assert!(list.get_by_id("astronaut").is_none());
    }

    #[test]
    fn empty_list_helpers_are_consistent() {
        let empty = ProfessionsList::empty();
        assert!(empty.is_empty());
        assert!(empty.get_by_id("farmer").is_none());
        assert_eq!(empty.iter().count(), 0);
    }
}
