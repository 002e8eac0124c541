//! Per-day resolution: validation, action handlers, and end-of-day checks.

use crate::constants::{
    BASE_FOOD_PER_DAY, DEFAULT_HUNT_AMMO, HUNT_FOOD_PER_AMMO, HUNT_FOOD_RANGE, MIN_FOOD_PER_DAY,
    MIN_TRAVEL_MILES, MSG_STARVATION, STATUS_ARRIVED, STATUS_ON_TRAIL, STATUS_PERISHED,
    STATUS_TIME_EXPIRED, TARGET_MILES, TRADE_DAY_FOOD_REDUCTION,
};
use crate::economy::{self, TradeItem};
use crate::environment::EnvironmentConfig;
use crate::error::GameError;
use crate::journey::{DayAction, Settings};
use crate::numbers::{ceil_f64_to_i32, round_f64_to_u32};
use crate::pacing::{PaceId, PacingConfig};
use crate::rng::RandomSource;
use crate::state::GameState;

/// Action with every parameter checked against current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ResolvedAction {
    Travel(PaceId),
    Hunt(i32),
    Rest,
    Trade(Option<usize>),
}

/// Narration plus the day's food bill for one resolved action.
pub(crate) struct ActionResolution {
    pub message: String,
    pub food_consumed: i32,
}

/// Check an action against current state without mutating anything, so a
/// rejected action leaves no trace of the day.
pub(crate) fn validate_action(
    state: &GameState,
    action: &DayAction,
) -> Result<ResolvedAction, GameError> {
    match action {
        DayAction::Travel { pace } => {
            let pace = match pace {
                None => state.pace,
                Some(tag) => tag.trim().to_lowercase().parse().map_err(|()| {
                    GameError::InvalidParameter(format!(
                        "invalid pace '{tag}'; choose slow, steady, or grueling"
                    ))
                })?,
            };
            Ok(ResolvedAction::Travel(pace))
        }
        DayAction::Hunt { ammo_spent } => {
            let cost = ammo_spent.unwrap_or(DEFAULT_HUNT_AMMO);
            if cost <= 0 {
                return Err(GameError::InvalidParameter(
                    "ammo spent must be positive when hunting".to_string(),
                ));
            }
            if state.ammo < cost {
                return Err(GameError::InsufficientAmmo);
            }
            Ok(ResolvedAction::Hunt(cost))
        }
        DayAction::Rest => Ok(ResolvedAction::Rest),
        DayAction::Trade { offer_index } => {
            economy::validate_trade(state, *offer_index)?;
            Ok(ResolvedAction::Trade(*offer_index))
        }
    }
}

pub(crate) fn resolve_travel(
    state: &mut GameState,
    pacing: &PacingConfig,
    environment: &EnvironmentConfig,
    pace: PaceId,
) -> ActionResolution {
    let cfg = pacing.get_pace_safe(pace);
    let weather_mult = environment.weather_mult(state.weather);
    let terrain_mult = environment.terrain_mult(state.terrain);
    let miles = round_f64_to_u32(cfg.speed * weather_mult * terrain_mult).max(MIN_TRAVEL_MILES);
    state.distance = state.distance.saturating_add(miles);
    state.pace = cfg.id;
    let message = format!(
        "You travel {miles} miles at a {} pace through {} weather and {} terrain.",
        cfg.id,
        state.weather.as_str().to_lowercase(),
        state.terrain.as_str().to_lowercase(),
    );
    let extra = ceil_f64_to_i32(f64::from(BASE_FOOD_PER_DAY) * (cfg.food_mult - 1.0).max(0.0));
    ActionResolution {
        message,
        food_consumed: BASE_FOOD_PER_DAY + extra,
    }
}

pub(crate) fn resolve_hunt(
    state: &mut GameState,
    rng: &mut dyn RandomSource,
    ammo_cost: i32,
) -> ActionResolution {
    economy::adjust_resource(state, TradeItem::Ammo, -ammo_cost);
    let shot = i32::try_from(rng.int_in(HUNT_FOOD_RANGE.0, HUNT_FOOD_RANGE.1)).unwrap_or(0);
    let food_gained = shot + ammo_cost.saturating_mul(HUNT_FOOD_PER_AMMO);
    economy::adjust_resource(state, TradeItem::Food, food_gained);
    ActionResolution {
        message: format!(
            "You spend {ammo_cost} ammo hunting and bring back {food_gained} lbs of food."
        ),
        food_consumed: BASE_FOOD_PER_DAY,
    }
}

pub(crate) fn resolve_rest(state: &mut GameState, settings: &Settings) -> ActionResolution {
    let gained = state.heal(settings.rest_health);
    let message = if gained <= 0 {
        "You rest for the day but feel no better.".to_string()
    } else {
        format!("You rest for the day and recover {gained} health.")
    };
    ActionResolution {
        message,
        food_consumed: BASE_FOOD_PER_DAY,
    }
}

pub(crate) fn resolve_trade(
    state: &mut GameState,
    offer_index: Option<usize>,
) -> Result<ActionResolution, GameError> {
    let message = economy::resolve_trade(state, offer_index)?;
    // Stationary at the post, so the party eats lighter.
    Ok(ActionResolution {
        message,
        food_consumed: (BASE_FOOD_PER_DAY - TRADE_DAY_FOOD_REDUCTION).max(MIN_FOOD_PER_DAY),
    })
}

/// End-of-day bookkeeping: starvation first, then the terminal checks, so
/// starvation can be the direct cause of that day's death.
///
/// Returns `true` once the journey is over.
pub(crate) fn end_of_day(state: &mut GameState, settings: &Settings) -> bool {
    if state.food <= 0 {
        state.damage_health(settings.starvation_penalty);
        state.push_log(MSG_STARVATION);
    }
    if state.health <= 0 {
        state.alive = false;
        state.status = STATUS_PERISHED.to_string();
        state.over = true;
    } else if state.distance >= TARGET_MILES {
        state.won = true;
        state.status = STATUS_ARRIVED.to_string();
        state.over = true;
    } else if state.day >= settings.max_days {
        state.alive = false;
        state.status = STATUS_TIME_EXPIRED.to_string();
        state.over = true;
    } else {
        state.status = STATUS_ON_TRAIL.to_string();
    }
    state.over
}
