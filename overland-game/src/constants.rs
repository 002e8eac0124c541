//! Centralized balance and tuning constants for the Overland core.
//!
//! Keeping the deterministic math for the day cycle in one place means
//! gameplay can only be adjusted through reviewed code changes rather than
//! scattered literals.

// Day cycle ----------------------------------------------------------------
/// Distance in miles the party must cover to win.
pub const TARGET_MILES: u32 = 2_000;
/// Food every party member burns on an ordinary day, in lbs.
pub const BASE_FOOD_PER_DAY: i32 = 5;
pub(crate) const TRADE_DAY_FOOD_REDUCTION: i32 = 2;
pub(crate) const MIN_FOOD_PER_DAY: i32 = 1;
pub(crate) const MIN_TRAVEL_MILES: u32 = 5;
pub(crate) const HEALTH_MAX: i32 = 100;
pub(crate) const DEFAULT_HUNT_AMMO: i32 = 5;
pub(crate) const HUNT_FOOD_RANGE: (i64, i64) = (25, 55);
pub(crate) const HUNT_FOOD_PER_AMMO: i32 = 2;

// Trading post -------------------------------------------------------------
pub(crate) const TRADE_POST_CHANCE: f64 = 0.25;
pub(crate) const TRADE_POST_CHANCE_INITIAL: f64 = 0.30;
pub(crate) const TRADE_OFFER_COUNT: (i64, i64) = (1, 3);
pub(crate) const TRADE_SELL_FLIP_CHANCE: f64 = 0.25;
pub(crate) const TRADE_FOOD_QTY: (i64, i64) = (25, 60);
pub(crate) const TRADE_FOOD_FACTOR: (f64, f64) = (0.4, 0.7);
pub(crate) const TRADE_FOOD_PRICE_FLOOR: i32 = 10;
pub(crate) const TRADE_AMMO_QTY: (i64, i64) = (6, 15);
pub(crate) const TRADE_AMMO_FACTOR: (f64, f64) = (1.5, 2.0);
pub(crate) const TRADE_AMMO_PRICE_FLOOR: i32 = 8;

// Random events ------------------------------------------------------------
pub(crate) const EVENT_SPOILED_FOOD_RANGE: (i64, i64) = (10, 30);
pub(crate) const EVENT_WAGON_INJURY_RANGE: (i64, i64) = (8, 15);
pub(crate) const EVENT_ILLNESS_RANGE: (i64, i64) = (12, 20);
pub(crate) const EVENT_BANDIT_AMMO_RANGE: (i64, i64) = (4, 10);
pub(crate) const EVENT_FORAGE_FOOD_RANGE: (i64, i64) = (20, 45);
pub(crate) const EVENT_LOST_TRAIL_MILES: u32 = 10;

// Status and shared message text -------------------------------------------
pub(crate) const STATUS_ON_TRAIL: &str = "On the trail";
pub(crate) const STATUS_PERISHED: &str = "You have perished on the trail.";
pub(crate) const STATUS_ARRIVED: &str = "Congratulations! You have reached the far valley.";
pub(crate) const STATUS_TIME_EXPIRED: &str =
    "Time has run out before you reached the far valley.";
pub(crate) const MSG_STARVATION: &str = "Without food your health deteriorates quickly.";
pub(crate) const MSG_NO_TRADE_POST: &str = "There is no trading post available today.";
pub(crate) const MSG_TRADE_DECLINED: &str = "You browse the trading post but decide not to trade.";
pub(crate) const DEFAULT_PLAYER_NAME: &str = "Pioneer";
