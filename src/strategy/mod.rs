//! Opponent move selection.
//!
//! The referee asks an `OpponentStrategy` for the bot's move before
//! resolving each round. Strategies receive the match state read-only and
//! draw all randomness from the `GameRng` they are handed, so a seeded
//! referee replays identically.

pub mod policy;

pub use policy::{BombReserve, OpponentStrategy, Scripted, UniformClassic};
