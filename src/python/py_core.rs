//! Result type bindings for Python.

use pyo3::prelude::*;

use crate::core::{Move, RoundRecord};
use crate::referee::RoundOutcome;

fn token(mv: Option<Move>) -> Option<&'static str> {
    mv.map(Move::token)
}

/// Python wrapper for RoundRecord.
#[pyclass(name = "RoundRecord")]
#[derive(Clone, Debug)]
pub struct PyRoundRecord(pub RoundRecord);

#[pymethods]
impl PyRoundRecord {
    /// Round number, starting at 1.
    #[getter]
    fn round(&self) -> u8 {
        self.0.round
    }

    /// User move token, or None for a forfeited round.
    #[getter]
    fn user_move(&self) -> Option<&'static str> {
        token(self.0.user_move)
    }

    /// Bot move token, or None for a forfeited round.
    #[getter]
    fn bot_move(&self) -> Option<&'static str> {
        token(self.0.bot_move)
    }

    /// "user", "bot" or "draw".
    #[getter]
    fn winner(&self) -> String {
        self.0.winner.to_string()
    }

    /// "You", "Bot" or "Draw".
    #[getter]
    fn winner_label(&self) -> &'static str {
        self.0.winner.label()
    }

    #[getter]
    fn rationale(&self) -> String {
        self.0.rationale.clone()
    }

    fn __repr__(&self) -> String {
        format!(
            "RoundRecord(round={}, user={:?}, bot={:?}, winner={})",
            self.0.round,
            token(self.0.user_move),
            token(self.0.bot_move),
            self.0.winner
        )
    }
}

/// Python wrapper for RoundOutcome.
///
/// `valid` is False for rejected input; `reason` is then one of
/// "empty input", "unknown move", "bomb already used".
#[pyclass(name = "RoundOutcome")]
#[derive(Clone, Debug)]
pub struct PyRoundOutcome(pub RoundOutcome);

#[pymethods]
impl PyRoundOutcome {
    #[getter]
    fn valid(&self) -> bool {
        self.0.is_played()
    }

    /// "ok", a rejection reason, or "match complete".
    #[getter]
    fn reason(&self) -> String {
        match &self.0 {
            RoundOutcome::Played(_) => "ok".to_string(),
            RoundOutcome::Rejected(rejection) => rejection.error.to_string(),
            RoundOutcome::MatchComplete => "match complete".to_string(),
        }
    }

    /// The round consumed by this call, if any.
    #[getter]
    fn record(&self) -> Option<PyRoundRecord> {
        self.0.report().map(|report| PyRoundRecord(report.record.clone()))
    }

    /// Running score after this call as (user, bot), if a round was consumed.
    #[getter]
    fn score(&self) -> Option<(u8, u8)> {
        self.0.report().map(|report| (report.user_score, report.bot_score))
    }

    /// Moves the user may still play, for rejected input.
    #[getter]
    fn legal_moves(&self) -> Vec<&'static str> {
        match &self.0 {
            RoundOutcome::Rejected(rejection) => {
                rejection.legal_moves.iter().map(|m| m.token()).collect()
            }
            _ => Vec::new(),
        }
    }

    fn __str__(&self) -> String {
        match &self.0 {
            RoundOutcome::Played(report) => report.to_string(),
            RoundOutcome::Rejected(rejection) => rejection.to_string(),
            RoundOutcome::MatchComplete => "The match is over.".to_string(),
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "RoundOutcome(valid={}, reason={:?})",
            self.valid(),
            self.reason()
        )
    }
}
