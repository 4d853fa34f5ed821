//! Round resolution.
//!
//! Precedence, first match wins:
//!
//! 1. Identical moves (bomb/bomb included) → draw
//! 2. Exactly one bomb → the bomb wins
//! 3. Classic beats-cycle lookup

use serde::{Deserialize, Serialize};

use crate::core::{Move, Winner};

/// Rationale for a draw.
pub const SAME_MOVE: &str = "same move";

/// Rationale when a single bomb decides the round.
pub const BOMB_WINS: &str = "bomb beats all other moves";

/// Winner of a round and why.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub winner: Winner,
    pub rationale: String,
}

impl Resolution {
    fn new(winner: Winner, rationale: impl Into<String>) -> Self {
        Self {
            winner,
            rationale: rationale.into(),
        }
    }
}

/// Resolve a round between two legal moves.
///
/// Does not re-validate: bomb reuse is the validator's concern.
///
/// ```
/// use rps_referee::core::{Move, Winner};
/// use rps_referee::rules::resolve;
///
/// let result = resolve(Move::Paper, Move::Rock);
/// assert_eq!(result.winner, Winner::User);
/// assert_eq!(result.rationale, "paper beats rock");
/// ```
#[must_use]
pub fn resolve(user_move: Move, bot_move: Move) -> Resolution {
    if user_move == bot_move {
        return Resolution::new(Winner::Draw, SAME_MOVE);
    }

    match (user_move.is_bomb(), bot_move.is_bomb()) {
        (true, _) => Resolution::new(Winner::User, BOMB_WINS),
        (_, true) => Resolution::new(Winner::Bot, BOMB_WINS),
        _ if user_move.beats(bot_move) => {
            Resolution::new(Winner::User, format!("{user_move} beats {bot_move}"))
        }
        _ => Resolution::new(Winner::Bot, format!("{bot_move} beats {user_move}")),
    }
}
