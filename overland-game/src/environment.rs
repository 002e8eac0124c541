//! Daily weather and terrain: weighted catalogs and per-day sampling.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

use crate::rng::RandomSource;

const DEFAULT_ENVIRONMENT_DATA: &str = include_str!("../assets/data/environment.json");

/// Weather conditions modifying daily travel speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Weather {
    #[default]
    Mild,
    Warm,
    Hot,
    Cold,
    Freezing,
    Stormy,
}

impl Weather {
    pub const ALL: [Self; 6] = [
        Self::Mild,
        Self::Warm,
        Self::Hot,
        Self::Cold,
        Self::Freezing,
        Self::Stormy,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mild => "Mild",
            Self::Warm => "Warm",
            Self::Hot => "Hot",
            Self::Cold => "Cold",
            Self::Freezing => "Freezing",
            Self::Stormy => "Stormy",
        }
    }
}

impl fmt::Display for Weather {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Terrain bands the trail passes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Terrain {
    #[default]
    Plains,
    Hills,
    Mountains,
    Desert,
    Forest,
}

impl Terrain {
    pub const ALL: [Self; 5] = [
        Self::Plains,
        Self::Hills,
        Self::Mountains,
        Self::Desert,
        Self::Forest,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Plains => "Plains",
            Self::Hills => "Hills",
            Self::Mountains => "Mountains",
            Self::Desert => "Desert",
            Self::Forest => "Forest",
        }
    }
}

impl fmt::Display for Terrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherCfg {
    pub id: Weather,
    pub mult: f64,
    pub weight: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TerrainCfg {
    pub id: Terrain,
    pub mult: f64,
    pub weight: u32,
}

/// Weighted option lists for the daily environment re-roll.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct EnvironmentConfig {
    #[serde(default)]
    pub weather: Vec<WeatherCfg>,
    #[serde(default)]
    pub terrain: Vec<TerrainCfg>,
}

impl EnvironmentConfig {
    /// Load the catalog from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed or an option is missing.
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| format!("JSON parse error: {e}"))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), String> {
        for weather in Weather::ALL {
            if !self.weather.iter().any(|cfg| cfg.id == weather) {
                return Err(format!("Missing weather option: {weather}"));
            }
        }
        for terrain in Terrain::ALL {
            if !self.terrain.iter().any(|cfg| cfg.id == terrain) {
                return Err(format!("Missing terrain option: {terrain}"));
            }
        }
        if self.weather.iter().map(|cfg| cfg.weight).sum::<u32>() == 0 {
            return Err("Weather weights must not all be zero".to_string());
        }
        if self.terrain.iter().map(|cfg| cfg.weight).sum::<u32>() == 0 {
            return Err("Terrain weights must not all be zero".to_string());
        }
        Ok(())
    }

    /// Draw today's weather from the weighted option list.
    #[must_use]
    pub fn sample_weather(&self, rng: &mut dyn RandomSource) -> Weather {
        let weights: Vec<u32> = self.weather.iter().map(|cfg| cfg.weight).collect();
        self.weather
            .get(weighted_index(rng, &weights))
            .map_or_else(Weather::default, |cfg| cfg.id)
    }

    /// Draw today's terrain from the weighted option list.
    #[must_use]
    pub fn sample_terrain(&self, rng: &mut dyn RandomSource) -> Terrain {
        let weights: Vec<u32> = self.terrain.iter().map(|cfg| cfg.weight).collect();
        self.terrain
            .get(weighted_index(rng, &weights))
            .map_or_else(Terrain::default, |cfg| cfg.id)
    }

    /// Travel multiplier for a weather label; unknown entries are neutral.
    #[must_use]
    pub fn weather_mult(&self, weather: Weather) -> f64 {
        self.weather
            .iter()
            .find(|cfg| cfg.id == weather)
            .map_or(1.0, |cfg| cfg.mult)
    }

    /// Travel multiplier for a terrain label; unknown entries are neutral.
    #[must_use]
    pub fn terrain_mult(&self, terrain: Terrain) -> f64 {
        self.terrain
            .iter()
            .find(|cfg| cfg.id == terrain)
            .map_or(1.0, |cfg| cfg.mult)
    }
}

/// Walk the cumulative weights; weights need not sum to any particular total.
fn weighted_index(rng: &mut dyn RandomSource, weights: &[u32]) -> usize {
    let total: u32 = weights.iter().sum();
    if total == 0 {
        return 0;
    }
    let roll = rng.next_f64() * f64::from(total);
    let mut acc = 0.0;
    for (idx, weight) in weights.iter().enumerate() {
        acc += f64::from(*weight);
        if roll < acc {
            return idx;
        }
    }
    weights.len().saturating_sub(1)
}

/// Embedded environment catalog, parsed once.
#[must_use]
pub fn environment_config() -> &'static EnvironmentConfig {
    static CONFIG: OnceLock<EnvironmentConfig> = OnceLock::new();
    CONFIG.get_or_init(|| {
        EnvironmentConfig::from_json(DEFAULT_ENVIRONMENT_DATA)
            .expect("valid embedded environment catalog")
    })
}
