//! # rps-referee
//!
//! A deterministic referee for three-round Rock-Paper-Scissors with a
//! single-use bomb per player.
//!
//! ## Rules
//!
//! - A match is three rounds. Each round both sides pick a move.
//! - Rock beats scissors, scissors beats paper, paper beats rock.
//! - Each player may play `bomb` once per match. Bomb beats every other
//!   move; bomb against bomb is a draw, as is any identical pair.
//! - The higher score after three rounds wins the match.
//!
//! ## Design
//!
//! - **Explicit state**: `MatchState` is owned by one `Referee` and
//!   changes only through its own mutator. No globals.
//! - **Pure rules**: validation and resolution read state, never write it.
//! - **Typed results**: every call returns structured outcomes, never
//!   stringly-typed maps.
//! - **Deterministic**: all randomness flows through a seeded `GameRng`.
//!
//! ## Modules
//!
//! - `core`: moves, players, match state, RNG, configuration
//! - `rules`: validator and resolver
//! - `strategy`: opponent move selection
//! - `referee`: input interpretation and round orchestration
//! - `error`: error types

pub mod core;
pub mod error;
pub mod rules;
pub mod strategy;
pub mod referee;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    GameRng, GameRngState, InputPolicy, InvalidInputPolicy, MatchOutcome, MatchState, Move,
    Player, PlayerMap, RefereeConfig, RoundRecord, Winner, MATCH_ROUNDS,
};

pub use crate::error::{CheckpointError, MoveError, StateError};

pub use crate::rules::{legal_moves, resolve, validate, Resolution, Validation, ValidationReason};

pub use crate::strategy::{BombReserve, OpponentStrategy, Scripted, UniformClassic};

pub use crate::referee::{Checkpoint, Interpreter, Referee, Rejection, RoundOutcome, RoundReport};
