//! Day-cycle domain types shared by the session and its resolution steps.

use serde::{Deserialize, Serialize};

use crate::difficulty::DifficultySettings;
use crate::error::GameError;
use crate::state::StateSnapshot;

pub mod daily;
pub mod session;

pub use session::{Catalogs, JourneySession};

/// Immutable per-game settings derived from the difficulty preset at
/// construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub event_chance: f64,
    pub rest_health: i32,
    pub starvation_penalty: i32,
    pub max_days: u32,
}

impl From<DifficultySettings> for Settings {
    fn from(preset: DifficultySettings) -> Self {
        Self {
            event_chance: preset.event_chance,
            rest_health: preset.rest_health,
            starvation_penalty: preset.starvation_penalty,
            max_days: preset.max_days,
        }
    }
}

/// One day's chosen action with its parameters.
///
/// Tags stay loose strings at this boundary so shells can forward user input
/// unparsed; the day cycle validates them before anything mutates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayAction {
    Travel { pace: Option<String> },
    Hunt { ammo_spent: Option<i32> },
    Rest,
    Trade { offer_index: Option<usize> },
}

impl DayAction {
    /// Parse an action tag (trimmed, case-insensitive) with its parameters.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAction` when the tag names no known daily action.
    pub fn parse(tag: &str, params: ActionParams) -> Result<Self, GameError> {
        match tag.trim().to_lowercase().as_str() {
            "travel" => Ok(Self::Travel { pace: params.pace }),
            "hunt" => Ok(Self::Hunt {
                ammo_spent: params.ammo_spent,
            }),
            "rest" => Ok(Self::Rest),
            "trade" => Ok(Self::Trade {
                offer_index: params.offer_index,
            }),
            _ => Err(GameError::InvalidAction(tag.to_string())),
        }
    }

    /// Tag shells use to refer to this action.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Travel { .. } => "travel",
            Self::Hunt { .. } => "hunt",
            Self::Rest => "rest",
            Self::Trade { .. } => "trade",
        }
    }
}

/// Loose action parameters supplied by thin shells alongside an action tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ActionParams {
    pub pace: Option<String>,
    pub ammo_spent: Option<i32>,
    pub offer_index: Option<usize>,
}

/// Result of one completed day: state view, narration, and open trades.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayOutcome {
    pub snapshot: StateSnapshot,
    /// Ordered messages generated while resolving the day.
    pub messages: Vec<String>,
    /// Descriptions of the trades on offer after the day completed.
    pub trade_offers: Vec<String>,
}
