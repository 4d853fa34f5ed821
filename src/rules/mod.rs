//! Game rules: move validation and round resolution.
//!
//! Both are pure functions. They read the match state but never change
//! it; the referee applies their results through `MatchState`.

pub mod validator;
pub mod resolver;

pub use validator::{legal_moves, validate, Validation, ValidationReason};
pub use resolver::{resolve, Resolution, BOMB_WINS, SAME_MOVE};
