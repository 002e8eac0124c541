//! Pace catalog: base travel speed and food multiplier per pace.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

const DEFAULT_PACING_DATA: &str = include_str!("../assets/data/pacing.json");

/// Named travel-speed profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaceId {
    Slow,
    #[default]
    Steady,
    Grueling,
}

impl PaceId {
    pub const ALL: [Self; 3] = [Self::Slow, Self::Steady, Self::Grueling];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Slow => "slow",
            Self::Steady => "steady",
            Self::Grueling => "grueling",
        }
    }
}

impl fmt::Display for PaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaceId {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "slow" => Ok(Self::Slow),
            "steady" => Ok(Self::Steady),
            "grueling" => Ok(Self::Grueling),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PaceCfg {
    pub id: PaceId,
    pub name: String,
    #[serde(default)]
    pub speed: f64,
    #[serde(default = "default_one_f64")]
    pub food_mult: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PacingConfig {
    #[serde(default)]
    pub pace: Vec<PaceCfg>,
}

impl PacingConfig {
    #[must_use]
    pub fn load_from_static() -> Self {
        serde_json::from_str(DEFAULT_PACING_DATA).unwrap_or_default()
    }

    #[must_use]
    pub fn get_pace_safe(&self, pace_id: PaceId) -> PaceCfg {
        self.pace
            .iter()
            .find(|p| p.id == pace_id)
            .cloned()
            .or_else(|| self.pace.first().cloned())
            .unwrap_or_default()
    }
}

fn default_one_f64() -> f64 {
    1.0
}

/// Embedded pace catalog, parsed once.
#[must_use]
pub fn pacing_config() -> &'static PacingConfig {
    static CONFIG: OnceLock<PacingConfig> = OnceLock::new();
    CONFIG.get_or_init(PacingConfig::load_from_static)
}
