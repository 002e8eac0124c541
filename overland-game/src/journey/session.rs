//! Journey session: owns the state, settings, catalogs, and random source.

use crate::constants::{
    DEFAULT_PLAYER_NAME, HEALTH_MAX, TRADE_POST_CHANCE, TRADE_POST_CHANCE_INITIAL,
};
use crate::difficulty::{Difficulty, DifficultyCatalog, difficulty_catalog};
use crate::economy::{self, TradeOffer};
use crate::environment::{EnvironmentConfig, environment_config};
use crate::error::GameError;
use crate::events;
use crate::journey::daily::{self, ResolvedAction};
use crate::journey::{DayAction, DayOutcome, Settings};
use crate::pacing::{PacingConfig, pacing_config};
use crate::professions::{ProfessionsList, professions};
use crate::rng::{RandomSource, SeededSource};
use crate::state::{GameState, StateSnapshot};

/// Immutable catalog bundle threaded into a session at construction.
#[derive(Debug, Clone)]
pub struct Catalogs {
    pub difficulty: DifficultyCatalog,
    pub professions: ProfessionsList,
    pub pacing: PacingConfig,
    pub environment: EnvironmentConfig,
}

impl Catalogs {
    /// The embedded default catalogs.
    #[must_use]
    pub fn load_from_static() -> Self {
        Self {
            difficulty: difficulty_catalog().clone(),
            professions: professions().clone(),
            pacing: pacing_config().clone(),
            environment: environment_config().clone(),
        }
    }
}

impl Default for Catalogs {
    fn default() -> Self {
        Self::load_from_static()
    }
}

/// High-level controller advancing one party through the journey day by day.
///
/// The session exclusively owns its [`GameState`]; collaborators observe it
/// through snapshots returned from [`JourneySession::perform_action`].
#[derive(Debug)]
pub struct JourneySession {
    state: GameState,
    settings: Settings,
    pacing: PacingConfig,
    environment: EnvironmentConfig,
    rng: Box<dyn RandomSource>,
}

impl JourneySession {
    /// Start a new journey against the embedded catalogs.
    ///
    /// A blank player name falls back to a placeholder; profession and
    /// difficulty tags are trimmed and matched case-insensitively. Without a
    /// random source override the session seeds itself from OS entropy.
    ///
    /// # Errors
    ///
    /// Returns `UnknownOption` for an unrecognized profession or difficulty.
    pub fn new(
        player_name: &str,
        profession: &str,
        difficulty: &str,
        rng_override: Option<Box<dyn RandomSource>>,
    ) -> Result<Self, GameError> {
        Self::with_catalogs(
            Catalogs::load_from_static(),
            player_name,
            profession,
            difficulty,
            rng_override,
        )
    }

    /// Start a new journey against an explicit catalog bundle.
    ///
    /// # Errors
    ///
    /// Returns `UnknownOption` for an unrecognized profession or difficulty.
    pub fn with_catalogs(
        catalogs: Catalogs,
        player_name: &str,
        profession: &str,
        difficulty: &str,
        rng_override: Option<Box<dyn RandomSource>>,
    ) -> Result<Self, GameError> {
        let Catalogs {
            difficulty: difficulties,
            professions,
            pacing,
            environment,
        } = catalogs;

        let difficulty = Difficulty::from_tag(difficulty)?;
        let preset = difficulties.settings(difficulty);
        let profession = professions.resolve(profession)?;
        let mut rng =
            rng_override.unwrap_or_else(|| Box::new(SeededSource::from_entropy()));

        let name = player_name.trim();
        let mut state = GameState {
            player_name: if name.is_empty() {
                DEFAULT_PLAYER_NAME.to_string()
            } else {
                name.to_string()
            },
            profession: profession.id.clone(),
            difficulty,
            food: preset.food.saturating_add(profession.bonus.food),
            ammo: preset.ammo.saturating_add(profession.bonus.ammo),
            money: preset.money.saturating_add(profession.bonus.money),
            // Starting health may exceed the rest cap; only `rest` clamps.
            health: HEALTH_MAX.saturating_add(profession.bonus.health),
            ..GameState::default()
        };

        state.weather = environment.sample_weather(rng.as_mut());
        state.terrain = environment.sample_terrain(rng.as_mut());
        state.set_trade_post(economy::generate_trade_post(
            rng.as_mut(),
            TRADE_POST_CHANCE_INITIAL,
        ));

        Ok(Self {
            state,
            settings: Settings::from(preset),
            pacing,
            environment,
            rng,
        })
    }

    /// Resolve one full day for the chosen action.
    ///
    /// Runs the day cycle in order: validation, environment re-roll, action
    /// dispatch, food consumption, the random event, end-of-day evaluation,
    /// and (while the journey continues) the next day's trade-post roll.
    ///
    /// # Errors
    ///
    /// Surfaces [`GameError`] for bad input or sequencing; a rejected action
    /// leaves the state untouched. After a terminal day every further call
    /// fails with `GameOver`.
    pub fn perform_action(&mut self, action: &DayAction) -> Result<DayOutcome, GameError> {
        if self.state.over {
            return Err(GameError::GameOver);
        }
        let resolved = daily::validate_action(&self.state, action)?;

        self.state.day_log.clear();
        self.state.weather = self.environment.sample_weather(self.rng.as_mut());
        self.state.terrain = self.environment.sample_terrain(self.rng.as_mut());

        let resolution = match resolved {
            ResolvedAction::Travel(pace) => {
                daily::resolve_travel(&mut self.state, &self.pacing, &self.environment, pace)
            }
            ResolvedAction::Hunt(ammo_cost) => {
                daily::resolve_hunt(&mut self.state, self.rng.as_mut(), ammo_cost)
            }
            ResolvedAction::Rest => daily::resolve_rest(&mut self.state, &self.settings),
            ResolvedAction::Trade(offer_index) => {
                daily::resolve_trade(&mut self.state, offer_index)?
            }
        };
        let food_consumed = resolution.food_consumed;
        self.state.push_log(resolution.message);
        self.state.consume_food(food_consumed);

        if let Some(message) =
            events::roll_daily_event(&mut self.state, self.rng.as_mut(), self.settings.event_chance)
        {
            self.state.push_log(message);
        }

        if !daily::end_of_day(&mut self.state, &self.settings) {
            self.state.day = self.state.day.saturating_add(1);
            self.state.set_trade_post(economy::generate_trade_post(
                self.rng.as_mut(),
                TRADE_POST_CHANCE,
            ));
        }

        Ok(DayOutcome {
            snapshot: self.state.snapshot(),
            messages: self.state.day_log.iter().cloned().collect(),
            trade_offers: self.trade_offer_descriptions(),
        })
    }

    /// Actions the party can take today.
    #[must_use]
    pub fn available_actions(&self) -> Vec<&'static str> {
        let mut actions = vec!["travel", "hunt", "rest"];
        if self.state.trade_available {
            actions.push("trade");
        }
        actions
    }

    /// Descriptions of the trades currently on offer.
    #[must_use]
    pub fn trade_offer_descriptions(&self) -> Vec<String> {
        self.state.trade_offers.iter().map(TradeOffer::describe).collect()
    }

    /// Borrow the underlying state.
    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    /// Borrow the underlying state mutably.
    pub const fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Apply a closure to the mutable game state.
    pub fn with_state_mut<R>(&mut self, f: impl FnOnce(&mut GameState) -> R) -> R {
        f(&mut self.state)
    }

    /// Snapshot of the current state.
    #[must_use]
    pub fn snapshot(&self) -> StateSnapshot {
        self.state.snapshot()
    }

    /// Immutable settings derived at construction.
    #[must_use]
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Consume the session, returning the final state.
    #[must_use]
    pub fn into_state(self) -> GameState {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::{Terrain, Weather};
    use crate::pacing::PaceId;
    use crate::rng::SequenceSource;

    /// Construction draws: weather, terrain, initial trade-post gate.
    /// A high gate roll keeps the opening post closed.
    fn quiet_start() -> Vec<f64> {
        vec![0.0, 0.0, 0.99]
    }

    fn scripted(values: Vec<f64>) -> Option<Box<dyn RandomSource>> {
        Some(Box::new(SequenceSource::new(values)))
    }

    fn new_session(script: Vec<f64>) -> JourneySession {
        JourneySession::new("Ada", "farmer", "easy", scripted(script)).unwrap()
    }

    #[test]
    fn construction_applies_preset_plus_bonus() {
        let session = new_session(quiet_start());
        let state = session.state();
        assert_eq!(state.food, 350);
        assert_eq!(state.ammo, 70);
        assert_eq!(state.money, 1_400);
        assert_eq!(state.health, 105);
        assert_eq!(state.profession, "farmer");
        assert_eq!(state.difficulty, Difficulty::Easy);
        assert_eq!(state.day, 1);
        assert_eq!(session.settings().max_days, 60);
    }

    #[test]
    fn banker_money_bonus_applies_on_normal() {
        let session =
            JourneySession::new("Ada", "  BANKER ", "Normal", scripted(quiet_start())).unwrap();
        assert_eq!(session.state().money, 1_700);
        assert_eq!(session.state().health, 100);
    }

    #[test]
    fn blank_player_name_defaults_to_placeholder() {
        let session = JourneySession::new("   ", "doctor", "hard", scripted(quiet_start())).unwrap();
        assert_eq!(session.state().player_name, "Pioneer");
        assert_eq!(session.state().health, 110);
    }

    #[test]
    fn unknown_tags_fail_construction() {
        assert_eq!(
            JourneySession::new("Ada", "astronaut", "easy", scripted(quiet_start())).unwrap_err(),
            GameError::UnknownOption {
                kind: "profession",
                value: "astronaut".to_string(),
            }
        );
        assert!(matches!(
            JourneySession::new("Ada", "farmer", "nightmare", scripted(quiet_start())),
            Err(GameError::UnknownOption { kind: "difficulty", .. })
        ));
    }

    #[test]
    fn opening_trade_post_uses_the_higher_probability() {
        // Gate roll of 0.28 opens the post at 0.30 but would not at 0.25.
        // One food offer: count, item pick, quantity, factor, no sell flip.
        let script = vec![0.0, 0.0, 0.28, 0.0, 0.4, 0.0, 0.5, 0.9];
        let session = new_session(script);
        assert!(session.state().trade_available);
        assert_eq!(session.trade_offer_descriptions().len(), 1);
        assert_eq!(session.available_actions(), vec!["travel", "hunt", "rest", "trade"]);
    }

    #[test]
    fn steady_travel_through_mild_plains_is_eighteen_miles() {
        let mut session = new_session(quiet_start());
        // Day draws: weather Mild, terrain Plains, no event, no next post.
        session.rng = Box::new(SequenceSource::new([0.0, 0.0, 0.99, 0.99]));
        let outcome = session
            .perform_action(&DayAction::Travel {
                pace: Some("steady".to_string()),
            })
            .unwrap();
        assert_eq!(outcome.snapshot.distance, 18);
        assert_eq!(outcome.snapshot.weather, Weather::Mild);
        assert_eq!(outcome.snapshot.terrain, Terrain::Plains);
        assert_eq!(outcome.snapshot.pace, PaceId::Steady);
        // Base consumption only: 350 - 5.
        assert_eq!(outcome.snapshot.food, 345);
        assert_eq!(outcome.snapshot.day, 2);
        assert_eq!(
            outcome.messages,
            vec![
                "You travel 18 miles at a steady pace through mild weather and plains terrain."
                    .to_string()
            ]
        );
    }

    #[test]
    fn hunting_minimum_rolls_yield_thirty_five_pounds() {
        let mut session = new_session(quiet_start());
        session.rng = Box::new(SequenceSource::new([0.0, 0.0, 0.0, 0.99, 0.99]));
        let outcome = session
            .perform_action(&DayAction::Hunt { ammo_spent: Some(5) })
            .unwrap();
        assert_eq!(outcome.snapshot.ammo, 65);
        // 350 + 35 gained - 5 consumed.
        assert_eq!(outcome.snapshot.food, 380);
        assert!(outcome.messages[0].contains("bring back 35 lbs"));
    }

    #[test]
    fn rejected_actions_leave_no_trace_of_the_day() {
        let mut session = new_session(quiet_start());
        let before = session.snapshot();
        let err = session
            .perform_action(&DayAction::Hunt { ammo_spent: Some(500) })
            .unwrap_err();
        assert_eq!(err, GameError::InsufficientAmmo);
        assert_eq!(session.snapshot(), before);

        let err = session
            .perform_action(&DayAction::Travel {
                pace: Some("sprint".to_string()),
            })
            .unwrap_err();
        assert!(matches!(err, GameError::InvalidParameter(_)));
        assert_eq!(session.snapshot(), before);
    }

    #[test]
    fn arrival_ends_the_journey_the_same_day() {
        let mut session = new_session(quiet_start());
        session.with_state_mut(|state| state.distance = 1_990);
        session.rng = Box::new(SequenceSource::new([0.0, 0.0, 0.99]));
        let outcome = session
            .perform_action(&DayAction::Travel { pace: None })
            .unwrap();
        assert!(outcome.snapshot.won);
        assert!(outcome.snapshot.over);
        assert!(outcome.snapshot.status.contains("reached"));
        // Terminal days neither advance the day counter nor re-roll trades.
        assert_eq!(outcome.snapshot.day, 1);
        assert!(outcome.trade_offers.is_empty());
    }

    #[test]
    fn terminal_sessions_reject_every_further_action() {
        let mut session = new_session(quiet_start());
        session.with_state_mut(|state| state.distance = 1_990);
        session.rng = Box::new(SequenceSource::new([0.0, 0.0, 0.99]));
        let _ = session
            .perform_action(&DayAction::Travel { pace: None })
            .unwrap();

        let frozen = session.snapshot();
        for action in [
            DayAction::Travel { pace: None },
            DayAction::Rest,
            DayAction::Hunt { ammo_spent: None },
        ] {
            assert_eq!(session.perform_action(&action), Err(GameError::GameOver));
            assert_eq!(session.snapshot(), frozen);
        }
    }

    #[test]
    fn starvation_can_be_the_cause_of_death() {
        let mut session = new_session(quiet_start());
        session.with_state_mut(|state| {
            state.food = 0;
            state.health = 6;
        });
        // Travel, no event, no further draws once the day turns terminal.
        session.rng = Box::new(SequenceSource::new([0.0, 0.0, 0.99]));
        let outcome = session
            .perform_action(&DayAction::Travel { pace: None })
            .unwrap();
        // The easy-preset starvation penalty of 8 outruns 6 health.
        assert_eq!(outcome.snapshot.health, 0);
        assert!(!outcome.snapshot.alive);
        assert!(outcome.snapshot.over);
        assert!(outcome.snapshot.status.contains("perished"));
        assert!(outcome.messages.iter().any(|m| m.contains("deteriorates")));
    }

    #[test]
    fn declining_a_trade_clears_the_post_without_cost() {
        // Open a post at construction: gate 0.28, one ammo offer.
        let script = vec![0.0, 0.0, 0.28, 0.0, 0.6, 0.5, 0.5, 0.9];
        let mut session = new_session(script);
        assert!(session.state().trade_available);
        let food_before = session.state().food;
        let money_before = session.state().money;
        let ammo_before = session.state().ammo;

        session.rng = Box::new(SequenceSource::new([0.0, 0.0, 0.99, 0.99]));
        let outcome = session
            .perform_action(&DayAction::Trade { offer_index: None })
            .unwrap();
        assert!(outcome.messages[0].contains("decide not to trade"));
        assert_eq!(outcome.snapshot.money, money_before);
        // Trade days consume 3 lbs.
        assert_eq!(outcome.snapshot.food, food_before - 3);
        assert_eq!(outcome.snapshot.ammo, ammo_before);
        assert!(!outcome.snapshot.trade_available);
    }

    #[test]
    fn outcome_lists_the_next_days_offers() {
        let mut session = new_session(quiet_start());
        // Day draws: env, no event, then post gate 0.2 opens with one food
        // offer at minimum quantity and factor, no flip.
        session.rng = Box::new(SequenceSource::new([
            0.0, 0.0, 0.99, 0.2, 0.0, 0.4, 0.0, 0.0, 0.9,
        ]));
        let outcome = session.perform_action(&DayAction::Rest).unwrap();
        assert!(outcome.snapshot.trade_available);
        assert_eq!(outcome.trade_offers, vec!["Buy 25 food for $10".to_string()]);
    }

    #[test]
    fn identical_seeds_replay_identical_days() {
        let actions = [
            DayAction::Travel { pace: None },
            DayAction::Hunt { ammo_spent: None },
            DayAction::Rest,
        ];
        let mut first = JourneySession::new(
            "Ada",
            "farmer",
            "normal",
            Some(Box::new(crate::rng::SeededSource::from_user_seed(7))),
        )
        .unwrap();
        let mut second = JourneySession::new(
            "Ada",
            "farmer",
            "normal",
            Some(Box::new(crate::rng::SeededSource::from_user_seed(7))),
        )
        .unwrap();
        for action in &actions {
            let a = first.perform_action(action).unwrap();
            let b = second.perform_action(action).unwrap();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn resources_never_go_negative_even_when_exhausted() {
        let mut session = new_session(quiet_start());
        session.with_state_mut(|state| {
            state.food = 1;
            state.ammo = 5;
        });
        session.rng = Box::new(SequenceSource::new([0.0, 0.0, 0.99, 0.99]));
        let outcome = session
            .perform_action(&DayAction::Hunt { ammo_spent: Some(5) })
            .unwrap();
        assert_eq!(outcome.snapshot.ammo, 0);
        assert!(outcome.snapshot.food >= 0);
    }
}
