//! Difficulty presets controlling starting resources and daily odds.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use crate::error::GameError;

const DEFAULT_DIFFICULTY_DATA: &str = include_str!("../assets/data/difficulty.json");

/// Supported difficulty levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub const ALL: [Self; 3] = [Self::Easy, Self::Normal, Self::Hard];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Normal => "normal",
            Self::Hard => "hard",
        }
    }

    /// Parse a user-supplied tag, trimmed and case-insensitive.
    ///
    /// # Errors
    ///
    /// Returns `UnknownOption` when the tag names no known difficulty.
    pub fn from_tag(value: &str) -> Result<Self, GameError> {
        match value.trim().to_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "normal" => Ok(Self::Normal),
            "hard" => Ok(Self::Hard),
            _ => Err(GameError::UnknownOption {
                kind: "difficulty",
                value: value.to_string(),
            }),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Starting resources and daily tuning for one difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DifficultySettings {
    pub food: i32,
    pub ammo: i32,
    pub money: i32,
    pub event_chance: f64,
    pub rest_health: i32,
    pub starvation_penalty: i32,
    pub max_days: u32,
}

impl Default for DifficultySettings {
    fn default() -> Self {
        Self {
            food: 240,
            ammo: 55,
            money: 1_100,
            event_chance: 0.27,
            rest_health: 12,
            starvation_penalty: 10,
            max_days: 55,
        }
    }
}

/// Catalog of difficulty presets keyed by difficulty id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct DifficultyCatalog {
    presets: HashMap<Difficulty, DifficultySettings>,
}

impl DifficultyCatalog {
    /// Load presets from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed or a preset is missing.
    pub fn from_json(json: &str) -> Result<Self, String> {
        let catalog: Self =
            serde_json::from_str(json).map_err(|e| format!("JSON parse error: {e}"))?;
        catalog.validate()?;
        Ok(catalog)
    }

    fn validate(&self) -> Result<(), String> {
        for difficulty in Difficulty::ALL {
            if !self.presets.contains_key(&difficulty) {
                return Err(format!("Missing preset for difficulty: {difficulty}"));
            }
        }
        Ok(())
    }

    /// Preset for a difficulty, falling back to the normal baseline when a
    /// hand-built catalog lacks the entry.
    #[must_use]
    pub fn settings(&self, difficulty: Difficulty) -> DifficultySettings {
        self.presets
            .get(&difficulty)
            .copied()
            .unwrap_or_default()
    }
}

/// Embedded difficulty presets, parsed once.
#[must_use]
pub fn difficulty_catalog() -> &'static DifficultyCatalog {
    static CATALOG: OnceLock<DifficultyCatalog> = OnceLock::new();
    CATALOG.get_or_init(|| {
        DifficultyCatalog::from_json(DEFAULT_DIFFICULTY_DATA)
            .expect("valid embedded difficulty presets")
    })
}
