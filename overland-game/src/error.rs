//! Error taxonomy surfaced by the core to its callers.

use thiserror::Error;

/// Caller-input and sequencing failures raised by the day cycle.
///
/// Every variant is surfaced synchronously; the core never retries, and a
/// rejected action leaves the game state untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Unrecognized profession or difficulty tag at construction.
    #[error("unknown {kind} '{value}'")]
    UnknownOption { kind: &'static str, value: String },
    /// Unrecognized daily action tag.
    #[error("unknown action '{0}'")]
    InvalidAction(String),
    /// Bad pace tag or non-positive ammo spend.
    #[error("{0}")]
    InvalidParameter(String),
    #[error("not enough ammunition to hunt")]
    InsufficientAmmo,
    #[error("not enough money for that trade")]
    InsufficientFunds,
    #[error("you do not have enough goods for that trade")]
    InsufficientGoods,
    /// Trade offer index outside the current offer list.
    #[error("invalid trade offer selection")]
    InvalidSelection,
    /// Resource helper called with a tag outside the trade whitelist.
    #[error("unknown resource '{0}'")]
    UnknownResource(String),
    /// Action attempted after the journey reached a terminal state.
    #[error("the journey has ended; start a new game to continue")]
    GameOver,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_human_readable() {
        let err = GameError::UnknownOption {
            kind: "profession",
            value: "astronaut".to_string(),
        };
        assert_eq!(err.to_string(), "unknown profession 'astronaut'");
        assert_eq!(
            GameError::InvalidAction("fly".to_string()).to_string(),
            "unknown action 'fly'"
        );
        assert!(GameError::GameOver.to_string().contains("ended"));
    }
}
