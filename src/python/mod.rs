//! Python bindings for the referee.
//!
//! A thin adapter for hosts that drive the referee from Python. The core
//! crate knows nothing about it.
//!
//! # Quick Start
//!
//! ```python
//! import rps_referee as rps
//!
//! referee = rps.Referee(seed=7, input_policy="synonyms")
//! while not referee.is_complete:
//!     outcome = referee.play_round(input("Your move: "))
//!     print(outcome)
//! print(referee.outcome)
//!
//! saved = referee.checkpoint()
//! resumed = rps.Referee.restore(saved)
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_referee;

pub use py_core::*;
pub use py_referee::*;

/// rps_referee: Rock-Paper-Scissors-plus-bomb referee.
#[pymodule]
fn rps_referee(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyReferee>()?;
    m.add_class::<PyRoundOutcome>()?;
    m.add_class::<PyRoundRecord>()?;

    Ok(())
}
