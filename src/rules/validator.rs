//! Move validation.
//!
//! Checks a candidate token against the move vocabulary and the player's
//! bomb allotment. Rules are evaluated in order and the first match wins:
//!
//! 1. absent or empty → `EmptyInput`
//! 2. not a legal move token → `UnknownMove`
//! 3. bomb already spent by this player → `BombAlreadyUsed`
//! 4. otherwise → `Ok`

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{MatchState, Move, Player};
use crate::error::MoveError;

/// Reason code attached to every validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationReason {
    Ok,
    EmptyInput,
    UnknownMove,
    BombAlreadyUsed,
}

impl ValidationReason {
    /// The matching error, `None` for `Ok`.
    #[must_use]
    pub const fn error(self) -> Option<MoveError> {
        match self {
            ValidationReason::Ok => None,
            ValidationReason::EmptyInput => Some(MoveError::EmptyInput),
            ValidationReason::UnknownMove => Some(MoveError::UnknownMove),
            ValidationReason::BombAlreadyUsed => Some(MoveError::BombAlreadyUsed),
        }
    }
}

impl From<MoveError> for ValidationReason {
    fn from(err: MoveError) -> Self {
        match err {
            MoveError::EmptyInput => ValidationReason::EmptyInput,
            MoveError::UnknownMove => ValidationReason::UnknownMove,
            MoveError::BombAlreadyUsed => ValidationReason::BombAlreadyUsed,
        }
    }
}

impl std::fmt::Display for ValidationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.error() {
            None => f.write_str("ok"),
            Some(err) => write!(f, "{err}"),
        }
    }
}

/// Outcome of validating one candidate move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Validation {
    pub valid: bool,
    pub reason: ValidationReason,
    /// The accepted move; `Some` exactly when `valid`.
    pub accepted: Option<Move>,
}

impl Validation {
    fn accept(mv: Move) -> Self {
        Self {
            valid: true,
            reason: ValidationReason::Ok,
            accepted: Some(mv),
        }
    }

    fn reject(err: MoveError) -> Self {
        Self {
            valid: false,
            reason: err.into(),
            accepted: None,
        }
    }

    /// Convert into a `Result` for `?`-style handling.
    pub fn into_result(self) -> Result<Move, MoveError> {
        match (self.accepted, self.reason.error()) {
            (Some(mv), None) => Ok(mv),
            (_, Some(err)) => Err(err),
            (None, None) => Err(MoveError::EmptyInput),
        }
    }
}

/// Validate a candidate move token for `player`.
///
/// `candidate` is matched exactly against the canonical move tokens; text
/// normalization belongs to the caller's input policy. Pure: the state is
/// only read.
///
/// ```
/// use rps_referee::core::{MatchState, Player};
/// use rps_referee::rules::{validate, ValidationReason};
///
/// let state = MatchState::new();
/// assert!(validate(Some("rock"), Player::User, &state).valid);
/// assert_eq!(
///     validate(Some("lizard"), Player::User, &state).reason,
///     ValidationReason::UnknownMove,
/// );
/// ```
#[must_use]
pub fn validate(candidate: Option<&str>, player: Player, state: &MatchState) -> Validation {
    let token = match candidate {
        Some(token) if !token.is_empty() => token,
        _ => return Validation::reject(MoveError::EmptyInput),
    };
    let Some(mv) = Move::from_token(token) else {
        return Validation::reject(MoveError::UnknownMove);
    };
    if mv.is_bomb() && state.bomb_used(player) {
        return Validation::reject(MoveError::BombAlreadyUsed);
    }
    Validation::accept(mv)
}

/// Moves `player` may still legally play.
#[must_use]
pub fn legal_moves(player: Player, state: &MatchState) -> SmallVec<[Move; 4]> {
    Move::ALL
        .into_iter()
        .filter(|m| !(m.is_bomb() && state.bomb_used(player)))
        .collect()
}
