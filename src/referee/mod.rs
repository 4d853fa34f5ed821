//! Round orchestration.
//!
//! - `interpret`: raw text → candidate move token, per `InputPolicy`
//! - `orchestrator`: the `Referee`, which sequences interpretation,
//!   validation, opponent choice, resolution and the state update
//! - `round`: typed round results
//! - `checkpoint`: resumable snapshots

pub mod interpret;
pub mod orchestrator;
pub mod round;
pub mod checkpoint;

pub use interpret::{Interpreter, BUILTIN_SYNONYMS};
pub use orchestrator::Referee;
pub use round::{Rejection, RoundOutcome, RoundReport};
pub use checkpoint::Checkpoint;
