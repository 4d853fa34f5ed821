//! Move vocabulary: the legal moves and the classic beats-relation.
//!
//! The three classic moves form a 3-cycle:
//! rock beats scissors, scissors beats paper, paper beats rock.
//! Bomb sits outside the cycle; the resolver handles it before any
//! `beats` lookup.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::MoveError;

/// A move a player can make in a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    Rock,
    Paper,
    Scissors,
    /// Single-use per player. Beats every classic move.
    Bomb,
}

impl Move {
    /// Every legal move, in canonical order.
    pub const ALL: [Move; 4] = [Move::Rock, Move::Paper, Move::Scissors, Move::Bomb];

    /// The three moves taking part in the beats-cycle.
    pub const CLASSIC: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// Canonical lowercase token.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Move::Rock => "rock",
            Move::Paper => "paper",
            Move::Scissors => "scissors",
            Move::Bomb => "bomb",
        }
    }

    /// Exact lookup of a canonical token.
    ///
    /// ```
    /// use rps_referee::core::Move;
    ///
    /// assert_eq!(Move::from_token("rock"), Some(Move::Rock));
    /// assert_eq!(Move::from_token("Rock"), None);
    /// assert_eq!(Move::from_token("lizard"), None);
    /// ```
    #[must_use]
    pub fn from_token(token: &str) -> Option<Move> {
        Move::ALL.into_iter().find(|m| m.token() == token)
    }

    #[must_use]
    pub const fn is_bomb(self) -> bool {
        matches!(self, Move::Bomb)
    }

    /// The classic move this one defeats. `None` for bomb.
    #[must_use]
    pub const fn defeats(self) -> Option<Move> {
        match self {
            Move::Rock => Some(Move::Scissors),
            Move::Scissors => Some(Move::Paper),
            Move::Paper => Some(Move::Rock),
            Move::Bomb => None,
        }
    }

    /// Classic beats-relation. Always false when either side is bomb.
    #[must_use]
    pub fn beats(self, other: Move) -> bool {
        self.defeats() == Some(other)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Move {
    type Err = MoveError;

    /// Lenient parse: trims and lowercases before the exact lookup.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        if normalized.is_empty() {
            return Err(MoveError::EmptyInput);
        }
        Move::from_token(&normalized).ok_or(MoveError::UnknownMove)
    }
}
