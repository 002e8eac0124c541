//! Overland Game Engine
//!
//! Platform-agnostic core logic for the Overland journey simulation. The
//! crate provides the full day-cycle state machine - catalogs, economy,
//! random events, and session orchestration - without UI or platform
//! dependencies. Rendering, prompting, and persistence belong to the shells
//! that embed it.

pub mod constants;
pub mod difficulty;
pub mod economy;
pub mod environment;
pub mod error;
pub mod events;
pub mod journey;
pub mod numbers;
pub mod pacing;
pub mod professions;
pub mod rng;
pub mod state;

// Re-export commonly used types
pub use difficulty::{Difficulty, DifficultyCatalog, DifficultySettings, difficulty_catalog};
pub use economy::{TradeItem, TradeOffer, add_resource, generate_trade_post, resolve_trade};
pub use environment::{EnvironmentConfig, Terrain, Weather, environment_config};
pub use error::GameError;
pub use events::{EventKind, roll_daily_event};
pub use journey::{
    ActionParams, Catalogs, DayAction, DayOutcome, JourneySession, Settings,
};
pub use pacing::{PaceCfg, PaceId, PacingConfig, pacing_config};
pub use professions::{Profession, ProfessionBonus, ProfessionsList, professions};
pub use rng::{RandomSource, SeededSource, SequenceSource};
pub use state::{DayLog, GameState, StateSnapshot};
