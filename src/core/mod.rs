//! Core engine types: moves, players, match state, RNG, configuration.
//!
//! Everything the rules and the referee operate on lives here. The match
//! state is the only mutable piece, and it changes only through its own
//! mutator.

pub mod moves;
pub mod player;
pub mod rng;
pub mod config;
pub mod state;

pub use moves::Move;
pub use player::{Player, PlayerMap};
pub use rng::{GameRng, GameRngState};
pub use config::{InputPolicy, InvalidInputPolicy, RefereeConfig, MATCH_ROUNDS};
pub use state::{MatchOutcome, MatchState, RoundRecord, Winner};
