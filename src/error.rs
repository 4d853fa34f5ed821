//! Error types.
//!
//! None of these are fatal. `MoveError` is the validation taxonomy and is
//! reported back to the caller as a rejected round; the others guard the
//! match lifecycle and checkpoint encoding.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a candidate move was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveError {
    /// No usable text was supplied.
    #[error("empty input")]
    EmptyInput,

    /// The text does not name a legal move under the active input policy.
    #[error("unknown move")]
    UnknownMove,

    /// The player already spent their bomb this match.
    #[error("bomb already used")]
    BombAlreadyUsed,
}

/// Match state mutation errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum StateError {
    /// All rounds have been played; the state no longer changes.
    #[error("match is complete after {rounds} rounds")]
    MatchComplete {
        /// Rounds played
        rounds: u8,
    },

    /// A decoded state does not agree with its own history.
    #[error("inconsistent match state: {0}")]
    Inconsistent(&'static str),
}

/// Checkpoint encoding errors.
#[derive(Debug, Error)]
pub enum CheckpointError {
    #[error("failed to encode checkpoint: {0}")]
    Encode(#[source] bincode::Error),

    #[error("failed to decode checkpoint: {0}")]
    Decode(#[source] bincode::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_messages() {
        assert_eq!(MoveError::EmptyInput.to_string(), "empty input");
        assert_eq!(MoveError::UnknownMove.to_string(), "unknown move");
        assert_eq!(MoveError::BombAlreadyUsed.to_string(), "bomb already used");
    }

    #[test]
    fn test_state_error_message() {
        let err = StateError::MatchComplete { rounds: 3 };
        assert_eq!(err.to_string(), "match is complete after 3 rounds");

        let err = StateError::Inconsistent("scores differ from history");
        assert_eq!(err.to_string(), "inconsistent match state: scores differ from history");
    }

    #[test]
    fn test_move_error_serde() {
        let json = serde_json::to_string(&MoveError::BombAlreadyUsed).unwrap();
        assert_eq!(json, "\"bomb_already_used\"");
    }
}
