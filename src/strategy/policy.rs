//! Opponent policies.
//!
//! - `OpponentStrategy`: trait the referee calls once per round
//! - `BombReserve`: keeps the bomb for the final round or for catching up
//! - `UniformClassic`: uniform over rock, paper, scissors
//! - `Scripted`: replays a fixed sequence

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{GameRng, MatchState, Move, Player};

/// Chooses the bot's move for the next round.
///
/// Called before the user's move is revealed to the strategy, so an
/// implementation only ever sees the state of completed rounds.
/// Implementations must return a move that is legal for the bot.
pub trait OpponentStrategy {
    /// Pick a move. All randomness must come from `rng`.
    fn choose_move(&mut self, state: &MatchState, rng: &mut GameRng) -> Move;

    /// Short identifier for logs.
    fn name(&self) -> &str;
}

impl<S: OpponentStrategy + ?Sized> OpponentStrategy for Box<S> {
    fn choose_move(&mut self, state: &MatchState, rng: &mut GameRng) -> Move {
        (**self).choose_move(state, rng)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Default bot.
///
/// Picks uniformly among rock, paper and scissors, adding bomb to the pool
/// only while the bot still holds it and either the final round is up or
/// the bot trails on score. Never spends the bomb early while level or
/// ahead.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BombReserve;

impl BombReserve {
    /// The moves the bot picks from in the current state.
    #[must_use]
    pub fn candidate_pool(state: &MatchState) -> SmallVec<[Move; 4]> {
        let mut pool: SmallVec<[Move; 4]> = SmallVec::from_slice(&Move::CLASSIC);
        let trailing = state.bot_score() < state.user_score();
        if !state.bomb_used(Player::Bot) && (state.is_final_round() || trailing) {
            pool.push(Move::Bomb);
        }
        pool
    }
}

impl OpponentStrategy for BombReserve {
    fn choose_move(&mut self, state: &MatchState, rng: &mut GameRng) -> Move {
        rng.pick(&Self::candidate_pool(state)).unwrap_or(Move::Rock)
    }

    fn name(&self) -> &str {
        "bomb-reserve"
    }
}

/// Uniform over the classic moves; never bombs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniformClassic;

impl OpponentStrategy for UniformClassic {
    fn choose_move(&mut self, _state: &MatchState, rng: &mut GameRng) -> Move {
        rng.pick(&Move::CLASSIC).unwrap_or(Move::Rock)
    }

    fn name(&self) -> &str {
        "uniform-classic"
    }
}

/// Plays a fixed sequence of moves, one per round, cycling when exhausted.
///
/// A scripted bomb the bot can no longer play is replaced with rock.
/// An empty script always plays rock.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scripted {
    moves: Vec<Move>,
    cursor: usize,
}

impl Scripted {
    pub fn new(moves: impl IntoIterator<Item = Move>) -> Self {
        Self {
            moves: moves.into_iter().collect(),
            cursor: 0,
        }
    }
}

impl OpponentStrategy for Scripted {
    fn choose_move(&mut self, state: &MatchState, _rng: &mut GameRng) -> Move {
        if self.moves.is_empty() {
            return Move::Rock;
        }
        let mv = self.moves[self.cursor % self.moves.len()];
        self.cursor += 1;
        if mv.is_bomb() && state.bomb_used(Player::Bot) {
            Move::Rock
        } else {
            mv
        }
    }

    fn name(&self) -> &str {
        "scripted"
    }
}
