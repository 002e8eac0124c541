//! Mutable journey state owned by a session, plus its snapshot view.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::constants::{HEALTH_MAX, STATUS_ON_TRAIL};
use crate::difficulty::Difficulty;
use crate::economy::TradeOffer;
use crate::environment::{Terrain, Weather};
use crate::pacing::PaceId;

/// Per-day message log, kept inline for typical day volumes.
pub type DayLog = SmallVec<[String; 4]>;

/// Mutable record of one party's journey.
///
/// Owned exclusively by a single `JourneySession`; collaborators read it
/// through [`StateSnapshot`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub player_name: String,
    pub profession: String,
    pub difficulty: Difficulty,
    /// Current day, starting at 1 and advancing once per completed day.
    pub day: u32,
    /// Miles traveled so far.
    pub distance: u32,
    pub food: i32,
    pub ammo: i32,
    pub money: i32,
    pub health: i32,
    pub pace: PaceId,
    pub weather: Weather,
    pub terrain: Terrain,
    pub alive: bool,
    pub won: bool,
    /// Whether the journey has reached a terminal state.
    pub over: bool,
    pub status: String,
    #[serde(default)]
    pub day_log: DayLog,
    #[serde(default)]
    pub trade_available: bool,
    #[serde(default)]
    pub trade_offers: Vec<TradeOffer>,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            player_name: String::new(),
            profession: String::new(),
            difficulty: Difficulty::default(),
            day: 1,
            distance: 0,
            food: 0,
            ammo: 0,
            money: 0,
            health: HEALTH_MAX,
            pace: PaceId::default(),
            weather: Weather::default(),
            terrain: Terrain::default(),
            alive: true,
            won: false,
            over: false,
            status: STATUS_ON_TRAIL.to_string(),
            day_log: DayLog::new(),
            trade_available: false,
            trade_offers: Vec::new(),
        }
    }
}

impl GameState {
    /// Reduce health, flooring at zero.
    pub fn damage_health(&mut self, amount: i32) {
        self.health = (self.health - amount.max(0)).max(0);
    }

    /// Restore health up to the cap, returning the actual change.
    ///
    /// Starting health above the cap is pulled down to it, so the returned
    /// change can be negative.
    pub fn heal(&mut self, amount: i32) -> i32 {
        let previous = self.health;
        self.health = (self.health + amount.max(0)).min(HEALTH_MAX);
        self.health - previous
    }

    /// Consume food for the day, flooring at zero.
    pub fn consume_food(&mut self, amount: i32) {
        self.food = (self.food - amount.max(0)).max(0);
    }

    /// Replace the trading post, keeping the offer list and the availability
    /// flag consistent: a post exists only while the list is non-empty.
    pub fn set_trade_post(&mut self, offers: Option<Vec<TradeOffer>>) {
        match offers {
            Some(offers) if !offers.is_empty() => {
                self.trade_available = true;
                self.trade_offers = offers;
            }
            _ => {
                self.trade_available = false;
                self.trade_offers.clear();
            }
        }
    }

    /// Append a message to the day's log.
    pub fn push_log(&mut self, message: impl Into<String>) {
        self.day_log.push(message.into());
    }

    /// Immutable snapshot for presentation layers.
    #[must_use]
    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            player_name: self.player_name.clone(),
            profession: self.profession.clone(),
            difficulty: self.difficulty,
            day: self.day,
            distance: self.distance,
            food: self.food,
            ammo: self.ammo,
            money: self.money,
            health: self.health,
            pace: self.pace,
            weather: self.weather,
            terrain: self.terrain,
            alive: self.alive,
            won: self.won,
            over: self.over,
            status: self.status.clone(),
            log: self.day_log.iter().cloned().collect(),
            trade_available: self.trade_available,
            trade_offers: self.trade_offers.clone(),
        }
    }
}

/// Serializable view of a [`GameState`] for UI layers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateSnapshot {
    pub player_name: String,
    pub profession: String,
    pub difficulty: Difficulty,
    pub day: u32,
    pub distance: u32,
    pub food: i32,
    pub ammo: i32,
    pub money: i32,
    pub health: i32,
    pub pace: PaceId,
    pub weather: Weather,
    pub terrain: Terrain,
    pub alive: bool,
    pub won: bool,
    pub over: bool,
    pub status: String,
    pub log: Vec<String>,
    pub trade_available: bool,
    pub trade_offers: Vec<TradeOffer>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::economy::TradeItem;

    #[test]
    fn damage_floors_at_zero() {
        let mut state = GameState::default();
        state.damage_health(250);
        assert_eq!(state.health, 0);
        state.damage_health(-5);
        assert_eq!(state.health, 0);
    }

    #[test]
    fn heal_clamps_to_cap() {
        let mut state = GameState {
            health: 95,
            ..GameState::default()
        };
        assert_eq!(state.heal(15), 5);
        assert_eq!(state.health, 100);
    }

    #[test]
    fn heal_pulls_over_cap_health_down() {
        let mut state = GameState {
            health: 110,
            ..GameState::default()
        };
        assert_eq!(state.heal(9), -10);
        assert_eq!(state.health, 100);
    }

    #[test]
    fn consume_food_floors_at_zero() {
        let mut state = GameState {
            food: 3,
            ..GameState::default()
        };
        state.consume_food(5);
        assert_eq!(state.food, 0);
    }

    #[test]
    fn trade_post_flag_tracks_offer_list() {
        let mut state = GameState::default();
        state.set_trade_post(Some(vec![TradeOffer {
            item: TradeItem::Food,
            quantity: 30,
            price: 15,
        }]));
        assert!(state.trade_available);
        assert_eq!(state.trade_offers.len(), 1);

        state.set_trade_post(Some(Vec::new()));
        assert!(!state.trade_available);
        assert!(state.trade_offers.is_empty());

        state.set_trade_post(None);
        assert!(!state.trade_available);
    }

    #[test]
    fn snapshot_copies_every_field() {
        let mut state = GameState {
            player_name: "Ada".to_string(),
            food: 42,
            distance: 120,
            ..GameState::default()
        };
        state.push_log("first");
        state.push_log("second");
        let snapshot = state.snapshot();
        assert_eq!(snapshot.player_name, "Ada");
        assert_eq!(snapshot.food, 42);
        assert_eq!(snapshot.distance, 120);
        assert_eq!(snapshot.log, vec!["first", "second"]);
        assert!(snapshot.alive);
        assert!(!snapshot.over);
    }
}
