//! Match checkpoints.
//!
//! A checkpoint captures everything needed to resume a match except the
//! opponent strategy: configuration, match state, and the RNG position.
//! Encoding uses bincode; the type is also plain serde for other formats.
//! Where the bytes are stored is up to the caller.
//!
//! Decoding fails on a match state that its own history contradicts, so a
//! restored referee always starts from a state play could have reached.

use serde::{Deserialize, Serialize};

use crate::core::{GameRngState, MatchState, RefereeConfig};
use crate::error::CheckpointError;

/// Resumable snapshot of a referee.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkpoint {
    pub config: RefereeConfig,
    pub state: MatchState,
    pub rng: GameRngState,
}

impl Checkpoint {
    pub fn to_bytes(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(CheckpointError::Encode)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CheckpointError> {
        bincode::deserialize(bytes).map_err(CheckpointError::Decode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{InputPolicy, Move};
    use crate::referee::Referee;
    use crate::strategy::BombReserve;

    #[test]
    fn test_bytes_round_trip() {
        let config = RefereeConfig::default()
            .with_input_policy(InputPolicy::Synonyms)
            .with_synonym("boulder", Move::Rock);
        let mut referee = Referee::new(config, 8);
        referee.play_round("boulder");

        let checkpoint = referee.checkpoint();
        let bytes = checkpoint.to_bytes().unwrap();
        assert_eq!(Checkpoint::from_bytes(&bytes).unwrap(), checkpoint);
    }

    #[test]
    fn test_restore_continues_identically() {
        let mut original = Referee::new(RefereeConfig::default(), 21);
        original.play_round("rock");

        let bytes = original.checkpoint().to_bytes().unwrap();
        let mut restored = Referee::restore(Checkpoint::from_bytes(&bytes).unwrap(), BombReserve);

        for input in ["paper", "scissors"] {
            assert_eq!(original.play_round(input), restored.play_round(input));
        }
        assert_eq!(original.state(), restored.state());
    }

    #[test]
    fn test_decode_rejects_tampered_scores() {
        let mut referee = Referee::new(RefereeConfig::default(), 3);
        referee.play_round("rock");
        let checkpoint = referee.checkpoint();
        let record = checkpoint.state.history()[0].clone();

        // Same layout as the checkpoint, with the user credited two wins after one round.
        let bytes = bincode::serialize(&(
            &checkpoint.config,
            (1u8, [2u8, 0u8], [false, false], vec![record]),
            checkpoint.rng,
        ))
        .unwrap();

        let err = Checkpoint::from_bytes(&bytes).unwrap_err();
        assert!(matches!(err, CheckpointError::Decode(_)));
        assert!(err.to_string().contains("inconsistent match state"), "{err}");
    }

    #[test]
    fn test_decode_garbage() {
        let err = Checkpoint::from_bytes(&[0xff, 0x01]).unwrap_err();
        assert!(matches!(err, CheckpointError::Decode(_)));
    }
}
