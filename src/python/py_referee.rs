//! Referee bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{InputPolicy, InvalidInputPolicy, RefereeConfig};
use crate::referee::Referee;

use super::py_core::{PyRoundOutcome, PyRoundRecord};

fn parse_input_policy(name: &str) -> PyResult<InputPolicy> {
    match name {
        "exact" => Ok(InputPolicy::Exact),
        "tokenized" => Ok(InputPolicy::Tokenized),
        "synonyms" => Ok(InputPolicy::Synonyms),
        other => Err(PyValueError::new_err(format!(
            "unknown input policy '{other}', expected exact, tokenized or synonyms"
        ))),
    }
}

fn parse_invalid_input(name: &str) -> PyResult<InvalidInputPolicy> {
    match name {
        "retry" => Ok(InvalidInputPolicy::Retry),
        "forfeit" => Ok(InvalidInputPolicy::Forfeit),
        other => Err(PyValueError::new_err(format!(
            "unknown invalid-input policy '{other}', expected retry or forfeit"
        ))),
    }
}

/// Python wrapper for Referee.
///
/// One instance per match. Feed it raw user text with `play_round`.
#[pyclass(name = "Referee")]
pub struct PyReferee {
    inner: Referee,
}

#[pymethods]
impl PyReferee {
    /// Create a referee.
    ///
    /// # Arguments
    /// - seed: RNG seed for the bot
    /// - input_policy: "exact", "tokenized" or "synonyms"
    /// - on_invalid: "retry" or "forfeit"
    #[new]
    #[pyo3(signature = (seed = 42, input_policy = "exact", on_invalid = "retry"))]
    fn new(seed: u64, input_policy: &str, on_invalid: &str) -> PyResult<Self> {
        let config = RefereeConfig::default()
            .with_input_policy(parse_input_policy(input_policy)?)
            .with_invalid_input(parse_invalid_input(on_invalid)?);
        Ok(Self {
            inner: Referee::new(config, seed),
        })
    }

    /// Play one round from raw text.
    fn play_round(&mut self, text: &str) -> PyRoundOutcome {
        PyRoundOutcome(self.inner.play_round(text))
    }

    #[getter]
    fn round_index(&self) -> u8 {
        self.inner.state().round_index()
    }

    #[getter]
    fn user_score(&self) -> u8 {
        self.inner.state().user_score()
    }

    #[getter]
    fn bot_score(&self) -> u8 {
        self.inner.state().bot_score()
    }

    #[getter]
    fn is_complete(&self) -> bool {
        self.inner.is_complete()
    }

    /// "User wins", "Bot wins" or "Draw" once complete, otherwise None.
    #[getter]
    fn outcome(&self) -> Option<&'static str> {
        self.inner.state().outcome().map(|outcome| outcome.label())
    }

    /// Completed rounds, oldest first.
    fn history(&self) -> Vec<PyRoundRecord> {
        self.inner
            .state()
            .history()
            .iter()
            .cloned()
            .map(PyRoundRecord)
            .collect()
    }

    /// Encoded checkpoint of the current match.
    fn checkpoint(&self) -> PyResult<Vec<u8>> {
        self.inner
            .checkpoint()
            .to_bytes()
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    /// Resume a match from bytes returned by `checkpoint()`.
    #[staticmethod]
    fn restore(bytes: &[u8]) -> PyResult<Self> {
        Referee::resume(bytes)
            .map(|inner| Self { inner })
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    fn __repr__(&self) -> String {
        let state = self.inner.state();
        format!(
            "Referee(round={}, you={}, bot={})",
            state.round_index(),
            state.user_score(),
            state.bot_score()
        )
    }
}
