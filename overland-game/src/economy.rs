//! Resource mutation helpers and the trading post.

use serde::{Deserialize, Serialize};

use crate::constants::{
    MSG_NO_TRADE_POST, MSG_TRADE_DECLINED, TRADE_AMMO_FACTOR, TRADE_AMMO_PRICE_FLOOR,
    TRADE_AMMO_QTY, TRADE_FOOD_FACTOR, TRADE_FOOD_PRICE_FLOOR, TRADE_FOOD_QTY, TRADE_OFFER_COUNT,
    TRADE_SELL_FLIP_CHANCE,
};
use crate::error::GameError;
use crate::numbers::{i64_to_f64, round_f64_to_i32};
use crate::rng::RandomSource;
use crate::state::GameState;

/// Goods a trading post will deal in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TradeItem {
    Food,
    Ammo,
}

impl TradeItem {
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Ammo => "ammo",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "food" => Some(Self::Food),
            "ammo" => Some(Self::Ammo),
            _ => None,
        }
    }
}

/// A single buy or sell deal at a trading post.
///
/// Positive price is money the player pays to buy; negative price is money
/// the player earns by selling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeOffer {
    pub item: TradeItem,
    pub quantity: i32,
    pub price: i32,
}

impl TradeOffer {
    /// Human-readable description, e.g. `Buy 30 food for $15`.
    #[must_use]
    pub fn describe(&self) -> String {
        let cost = self.price.abs();
        if self.price > 0 {
            format!("Buy {} {} for ${}", self.quantity, self.item.key(), cost)
        } else {
            format!("Sell {} {} for ${}", self.quantity, self.item.key(), cost)
        }
    }
}

/// Adjust a held resource by `delta`, flooring the result at zero.
///
/// # Errors
///
/// Returns `UnknownResource` when `item` is not a tradeable resource tag.
pub fn add_resource(state: &mut GameState, item: &str, delta: i32) -> Result<i32, GameError> {
    let Some(kind) = TradeItem::from_key(item) else {
        return Err(GameError::UnknownResource(item.to_string()));
    };
    Ok(adjust_resource(state, kind, delta))
}

pub(crate) fn adjust_resource(state: &mut GameState, item: TradeItem, delta: i32) -> i32 {
    let slot = match item {
        TradeItem::Food => &mut state.food,
        TradeItem::Ammo => &mut state.ammo,
    };
    *slot = slot.saturating_add(delta).max(0);
    *slot
}

pub(crate) const fn held_quantity(state: &GameState, item: TradeItem) -> i32 {
    match item {
        TradeItem::Food => state.food,
        TradeItem::Ammo => state.ammo,
    }
}

/// Roll a trading post: `Some` offers with probability `p`, `None` otherwise.
#[must_use]
pub fn generate_trade_post(rng: &mut dyn RandomSource, probability: f64) -> Option<Vec<TradeOffer>> {
    if !rng.chance(probability) {
        return None;
    }
    let count = rng.int_in(TRADE_OFFER_COUNT.0, TRADE_OFFER_COUNT.1);
    let mut offers = Vec::with_capacity(usize::try_from(count).unwrap_or(1));
    for _ in 0..count {
        offers.push(generate_offer(rng));
    }
    Some(offers)
}

fn generate_offer(rng: &mut dyn RandomSource) -> TradeOffer {
    let (item, quantity, factor, floor) = if rng.next_f64() < 0.5 {
        (
            TradeItem::Food,
            rng.int_in(TRADE_FOOD_QTY.0, TRADE_FOOD_QTY.1),
            rng.uniform(TRADE_FOOD_FACTOR.0, TRADE_FOOD_FACTOR.1),
            TRADE_FOOD_PRICE_FLOOR,
        )
    } else {
        (
            TradeItem::Ammo,
            rng.int_in(TRADE_AMMO_QTY.0, TRADE_AMMO_QTY.1),
            rng.uniform(TRADE_AMMO_FACTOR.0, TRADE_AMMO_FACTOR.1),
            TRADE_AMMO_PRICE_FLOOR,
        )
    };
    let mut price = round_f64_to_i32(i64_to_f64(quantity) * factor).max(floor);
    if rng.chance(TRADE_SELL_FLIP_CHANCE) {
        // Trader wants to buy from the party instead.
        price = -price;
    }
    TradeOffer {
        item,
        quantity: clamp_i32(quantity),
        price,
    }
}

/// Check a trade selection against current state without mutating anything.
///
/// Mirrors the failure branches of [`resolve_trade`] so the day cycle can
/// reject a bad selection before any of the day's effects run.
pub(crate) fn validate_trade(
    state: &GameState,
    offer_index: Option<usize>,
) -> Result<(), GameError> {
    if !state.trade_available || state.trade_offers.is_empty() {
        return Ok(());
    }
    let Some(index) = offer_index else {
        return Ok(());
    };
    let Some(offer) = state.trade_offers.get(index) else {
        return Err(GameError::InvalidSelection);
    };
    if offer.price > 0 {
        if state.money < offer.price {
            return Err(GameError::InsufficientFunds);
        }
    } else if held_quantity(state, offer.item) < offer.quantity {
        return Err(GameError::InsufficientGoods);
    }
    Ok(())
}

/// Resolve the day's trade action against the current post.
///
/// An absent `offer_index` declines and closes the post. Whichever branch is
/// taken, at most one trade completes per day: success, decline, and the
/// no-post case all leave the post closed or untouched-and-absent.
///
/// # Errors
///
/// `InvalidSelection` for an out-of-range index, `InsufficientFunds` for an
/// unaffordable buy, `InsufficientGoods` for an uncovered sell. Failures
/// leave the state unchanged.
pub fn resolve_trade(
    state: &mut GameState,
    offer_index: Option<usize>,
) -> Result<String, GameError> {
    if !state.trade_available || state.trade_offers.is_empty() {
        return Ok(MSG_NO_TRADE_POST.to_string());
    }
    let Some(index) = offer_index else {
        state.set_trade_post(None);
        return Ok(MSG_TRADE_DECLINED.to_string());
    };
    let Some(offer) = state.trade_offers.get(index).copied() else {
        return Err(GameError::InvalidSelection);
    };
    let message = if offer.price > 0 {
        if state.money < offer.price {
            return Err(GameError::InsufficientFunds);
        }
        state.money -= offer.price;
        adjust_resource(state, offer.item, offer.quantity);
        format!(
            "You buy {} {} for ${}.",
            offer.quantity,
            offer.item.key(),
            offer.price
        )
    } else {
        if held_quantity(state, offer.item) < offer.quantity {
            return Err(GameError::InsufficientGoods);
        }
        adjust_resource(state, offer.item, -offer.quantity);
        state.money = state.money.saturating_add(offer.price.abs());
        format!(
            "You sell {} {} for ${}.",
            offer.quantity,
            offer.item.key(),
            offer.price.abs()
        )
    };
    state.set_trade_post(None);
    Ok(message)
}

fn clamp_i32(value: i64) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}
