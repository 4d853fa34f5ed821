//! Typed results of one `Referee::play_round` call.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{MatchState, Move, RoundRecord, MATCH_ROUNDS};
use crate::error::MoveError;

/// What happened to one piece of input.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// The input was a legal move and the round was resolved.
    Played(RoundReport),
    /// The input was rejected.
    Rejected(Rejection),
    /// The match was already over; nothing changed.
    MatchComplete,
}

impl RoundOutcome {
    /// The report of the round this call consumed, if any.
    ///
    /// Present for played rounds and for rounds forfeited on invalid input.
    #[must_use]
    pub fn report(&self) -> Option<&RoundReport> {
        match self {
            RoundOutcome::Played(report) => Some(report),
            RoundOutcome::Rejected(rejection) => rejection.forfeited.as_ref(),
            RoundOutcome::MatchComplete => None,
        }
    }

    #[must_use]
    pub fn is_played(&self) -> bool {
        matches!(self, RoundOutcome::Played(_))
    }
}

/// A completed round plus the running score after it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundReport {
    pub record: RoundRecord,
    pub user_score: u8,
    pub bot_score: u8,
    pub total_rounds: u8,
}

impl RoundReport {
    /// Report for `record`, scored against the state it was just applied to.
    #[must_use]
    pub fn new(record: RoundRecord, state: &MatchState) -> Self {
        Self {
            record,
            user_score: state.user_score(),
            bot_score: state.bot_score(),
            total_rounds: MATCH_ROUNDS,
        }
    }

    /// "You X - Bot Y"
    #[must_use]
    pub fn score_line(&self) -> String {
        format!("You {} - Bot {}", self.user_score, self.bot_score)
    }
}

impl std::fmt::Display for RoundReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let shown = |mv: Option<Move>| mv.map_or("none", Move::token);
        writeln!(f, "Round {}/{}", self.record.round, self.total_rounds)?;
        writeln!(
            f,
            "Moves: You={} | Bot={}",
            shown(self.record.user_move),
            shown(self.record.bot_move)
        )?;
        writeln!(f, "Winner: {}", self.record.winner.label())?;
        writeln!(f, "Reason: {}", self.record.rationale)?;
        write!(f, "Score: {}", self.score_line())
    }
}

/// Rejected input.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rejection {
    pub error: MoveError,

    /// Moves the user may still play.
    pub legal_moves: SmallVec<[Move; 4]>,

    /// The round consumed as a draw, under the forfeit policy.
    pub forfeited: Option<RoundReport>,
}

impl Rejection {
    /// Still-legal moves as prose: "rock, paper, scissors, or bomb".
    #[must_use]
    pub fn alternatives(&self) -> String {
        let tokens: Vec<&str> = self.legal_moves.iter().map(|m| m.token()).collect();
        match tokens.split_last() {
            None => String::new(),
            Some((last, [])) => (*last).to_string(),
            Some((last, rest)) => format!("{}, or {last}", rest.join(", ")),
        }
    }
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Invalid move: {}. Please enter {}.",
            self.error,
            self.alternatives()
        )?;
        if let Some(report) = &self.forfeited {
            write!(f, " Round {} counted as a draw.", report.record.round)?;
        }
        Ok(())
    }
}
