//! Daily random events: one gated categorical roll per day.

use serde::{Deserialize, Serialize};

use crate::constants::{
    EVENT_BANDIT_AMMO_RANGE, EVENT_FORAGE_FOOD_RANGE, EVENT_ILLNESS_RANGE,
    EVENT_LOST_TRAIL_MILES, EVENT_SPOILED_FOOD_RANGE, EVENT_WAGON_INJURY_RANGE,
};
use crate::economy::{self, TradeItem};
use crate::rng::RandomSource;
use crate::state::GameState;

/// The six daily outcomes, in threshold order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    SpoiledFood,
    WagonInjury,
    Illness,
    BanditRaid,
    ForagingWindfall,
    LostTrail,
}

/// Ordered cumulative thresholds, walked in sequence so boundary rolls
/// resolve to the earlier entry.
const EVENT_TABLE: [(f64, EventKind); 6] = [
    (0.2, EventKind::SpoiledFood),
    (0.4, EventKind::WagonInjury),
    (0.6, EventKind::Illness),
    (0.75, EventKind::BanditRaid),
    (0.9, EventKind::ForagingWindfall),
    (1.0, EventKind::LostTrail),
];

/// Roll the daily gate and, when it fires, apply exactly one outcome.
///
/// Returns the outcome's message, or `None` when no event fires.
pub fn roll_daily_event(
    state: &mut GameState,
    rng: &mut dyn RandomSource,
    event_chance: f64,
) -> Option<String> {
    if !rng.chance(event_chance) {
        return None;
    }
    let roll = rng.next_f64();
    let kind = EVENT_TABLE
        .iter()
        .find(|(upper, _)| roll < *upper)
        .map(|(_, kind)| *kind)?;
    Some(apply_event(state, rng, kind))
}

fn apply_event(state: &mut GameState, rng: &mut dyn RandomSource, kind: EventKind) -> String {
    match kind {
        EventKind::SpoiledFood => {
            let loss = draw(rng, EVENT_SPOILED_FOOD_RANGE);
            economy::adjust_resource(state, TradeItem::Food, -loss);
            format!("Spoiled supplies force you to discard {loss} lbs of food.")
        }
        EventKind::WagonInjury => {
            let injury = draw(rng, EVENT_WAGON_INJURY_RANGE);
            state.damage_health(injury);
            format!("A wagon accident injures you for {injury} health.")
        }
        EventKind::Illness => {
            let sickness = draw(rng, EVENT_ILLNESS_RANGE);
            state.damage_health(sickness);
            format!("You fall ill and lose {sickness} health fighting the sickness.")
        }
        EventKind::BanditRaid => {
            let stolen = state.ammo.min(draw(rng, EVENT_BANDIT_AMMO_RANGE));
            economy::adjust_resource(state, TradeItem::Ammo, -stolen);
            format!("Bandits raid your camp and steal {stolen} ammo.")
        }
        EventKind::ForagingWindfall => {
            let found = draw(rng, EVENT_FORAGE_FOOD_RANGE);
            economy::adjust_resource(state, TradeItem::Food, found);
            format!("You find wild game and add {found} lbs of food to your stores.")
        }
        EventKind::LostTrail => {
            state.distance = state.distance.saturating_sub(EVENT_LOST_TRAIL_MILES);
            format!("You lose the trail and backtrack {EVENT_LOST_TRAIL_MILES} miles.")
        }
    }
}

fn draw(rng: &mut dyn RandomSource, range: (i64, i64)) -> i32 {
    i32::try_from(rng.int_in(range.0, range.1)).unwrap_or(0)
}
